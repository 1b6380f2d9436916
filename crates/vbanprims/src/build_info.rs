use serde::Serialize;

/// Environment variables the CLI reads, with the flag each one backs.
pub const ENV_VARS: [(&str, &str); 4] = [
    ("VBANPRIMS_LOG", "--log-filter"),
    ("VBANPRIMS_LOG_FORMAT", "--log-format"),
    ("VBANPRIMS_LOG_LEVEL", "--log-level"),
    ("VBANPRIMS_STRICT_PREFIX", "--strict-prefix"),
];

#[derive(Serialize, Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub target: String,
    pub rustc: &'static str,
    pub git_hash: &'static str,
    pub features: Vec<&'static str>,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            target: target_triple(),
            rustc: option_env!("RUSTC_VERSION").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            features: active_features(),
        }
    }
}

fn target_triple() -> String {
    match option_env!("VBANPRIMS_BUILD_TARGET") {
        Some(target) => target.to_string(),
        None => format!(
            "{}-unknown-{}",
            std::env::consts::ARCH,
            std::env::consts::OS
        ),
    }
}

fn active_features() -> Vec<&'static str> {
    [("async", cfg!(feature = "async")), ("cli", cfg!(feature = "cli"))]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
}
