//! Subcommand modules for the `quadview` binary.

pub mod charts;
pub mod histo;
pub mod link;
pub mod partition;
pub mod ratio;
pub mod topo;

use clap::builder::RangedU64ValueParser;
use clap::{value_parser, Arg, ArgMatches};
use quadview::libs::config::{ChartConfig, MAX_HISTOGRAM_TICKS};
use quadview::libs::result::ResultSet;

pub fn arg_infile() -> Arg {
    Arg::new("infile")
        .required(true)
        .num_args(1)
        .index(1)
        .help("Result set in JSON. [stdin] for standard input")
}

pub fn arg_outfile() -> Arg {
    Arg::new("outfile")
        .short('o')
        .long("outfile")
        .num_args(1)
        .default_value("stdout")
        .help("Output filename. [stdout] for screen")
}

pub fn arg_ticks() -> Arg {
    Arg::new("ticks")
        .long("ticks")
        .num_args(1)
        .value_parser(
            RangedU64ValueParser::<usize>::new().range(1..=MAX_HISTOGRAM_TICKS as u64),
        )
        .help("Approximate number of histogram ticks, 1 to 1000 [default: 10]")
}

pub fn arg_partition_limit() -> Arg {
    Arg::new("partition_limit")
        .long("partition-limit")
        .num_args(1)
        .value_parser(value_parser!(usize))
        .help("Skip the partition tree for this many rows or more [default: 500]")
}

pub fn arg_row_limit() -> Arg {
    Arg::new("row_limit")
        .long("row-limit")
        .num_args(1)
        .value_parser(value_parser!(usize))
        .help("Rows shown in the table [default: 50]")
}

/// Defaults overridden by whichever config arguments the subcommand has.
pub fn config_from(args: &ArgMatches) -> ChartConfig {
    let get = |id: &str| args.try_get_one::<usize>(id).ok().flatten().copied();

    let mut config = ChartConfig::default();
    if let Some(ticks) = get("ticks") {
        config = config.with_histogram_ticks(ticks);
    }
    if let Some(limit) = get("partition_limit") {
        config = config.with_partition_limit(limit);
    }
    if let Some(limit) = get("row_limit") {
        config = config.with_row_limit(limit);
    }
    config
}

pub fn read_result(infile: &str) -> anyhow::Result<ResultSet> {
    let text = quadview::read_to_string(infile)?;
    let set = ResultSet::from_json(&text)?;
    tracing::debug!(
        "read {} rows of {} fields, type {:?}",
        set.len(),
        set.fields.len(),
        set.tag
    );
    Ok(set)
}
