use vbanprims_frame::sample_rate::{index_to_hz, INDEX_COUNT};

use crate::cmd::RatesArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_rates, OutputFormat};

pub fn run(_args: RatesArgs, format: OutputFormat) -> CliResult<i32> {
    let rates: Vec<(u8, Option<u32>)> = (0..INDEX_COUNT as u8)
        .map(|index| (index, index_to_hz(index)))
        .collect();
    print_rates(&rates, format);
    Ok(SUCCESS)
}
