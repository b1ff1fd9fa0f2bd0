use clap::*;
use quadview::libs::partition::partition;
use quadview::libs::series;
use std::io::Write;

pub fn make_subcommand() -> Command {
    Command::new("partition")
        .about("Splits scored rows into halves and quartiles")
        .after_help(
            r###"
Rows are split at the median of the scored column: values below it go to the
1st half, the others (ties included) to the 2nd half. Each half is split again
into quartiles. The tree is written as JSON, {name, children} for groups and
{name, value} for rows.

Rows whose score is not numeric are left out. Sets with --partition-limit rows
or more are not partitioned.

Examples:
  quadview partition tests/result/score.json
  quadview partition result.json --key 0 --column Score
"###,
        )
        .arg(super::arg_infile())
        .arg(
            Arg::new("key")
                .long("key")
                .short('k')
                .num_args(1)
                .default_value("0")
                .help("Field name or 0-based index of the row labels"),
        )
        .arg(
            Arg::new("column")
                .long("column")
                .short('c')
                .num_args(1)
                .default_value("1")
                .help("Field name or 0-based index of the scored column"),
        )
        .arg(super::arg_partition_limit())
        .arg(super::arg_outfile())
}

pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = quadview::writer(args.get_one::<String>("outfile").unwrap())?;
    let set = super::read_result(args.get_one::<String>("infile").unwrap())?;
    let config = super::config_from(args);
    let key = set.column_index(args.get_one::<String>("key").unwrap())?;
    let col = set.column_index(args.get_one::<String>("column").unwrap())?;

    if series::numbers(&set.rows, col).is_none() {
        tracing::warn!("column {} is not numeric, no partition", col);
        return Ok(());
    }
    if set.len() >= config.partition_limit {
        tracing::warn!(
            "{} rows reach the partition limit of {}, no partition",
            set.len(),
            config.partition_limit
        );
        return Ok(());
    }

    let tree = partition(series::labeled_values(&set.rows, key, col));

    serde_json::to_writer_pretty(&mut writer, &tree)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
