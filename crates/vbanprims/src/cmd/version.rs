use vbanprims_frame::{SubProtocol, HEADER_SIZE, MAX_PAYLOAD_SIZE};

use crate::build_info::BuildInfo;
use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    let build = BuildInfo::current();
    if args.extended {
        for line in provenance(&build) {
            println!("{line}");
        }
    } else {
        println!("vbanprims {}", build.version);
    }
    Ok(SUCCESS)
}

fn provenance(build: &BuildInfo) -> Vec<String> {
    let sub_protocols: Vec<_> = [
        SubProtocol::Audio,
        SubProtocol::Serial,
        SubProtocol::Text,
        SubProtocol::Service,
    ]
    .into_iter()
    .map(SubProtocol::name)
    .collect();

    vec![
        format!("vbanprims {} ({})", build.version, build.target),
        format!("rustc {} / git {}", build.rustc, build.git_hash),
        format!("features: {}", build.features.join(",")),
        format!("wire: {HEADER_SIZE}B header + {MAX_PAYLOAD_SIZE}B payload"),
        format!("sub-protocols: {}", sub_protocols.join(",")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provenance_leads_with_version_and_target() {
        let build = BuildInfo::current();
        let lines = provenance(&build);
        assert!(lines[0].contains(env!("CARGO_PKG_VERSION")));
        assert!(lines[0].contains(&build.target));
        assert!(lines.iter().any(|line| line == "wire: 28B header + 1436B payload"));
    }
}
