use clap::*;
use quadview::libs::histogram::histogram;
use quadview::libs::series;
use std::io::Write;

pub fn make_subcommand() -> Command {
    Command::new("histo")
        .about("Bins a numeric column for a histogram")
        .after_help(
            r###"
Bins are aligned on nice ticks (1, 2 or 5 times a power of ten) and cover
the whole range of the column. Each bin includes its lower bound; the last
one includes its upper bound too.

Output format (TSV):
  lower	width	count

A column whose first value is not numeric produces no bins.

Examples:
  quadview histo tests/result/score.json
  quadview histo tests/result/score.json --column "cG/cC Score" --ticks 5
"###,
        )
        .arg(super::arg_infile())
        .arg(
            Arg::new("column")
                .long("column")
                .short('c')
                .num_args(1)
                .default_value("1")
                .help("Field name or 0-based index of the column"),
        )
        .arg(super::arg_ticks())
        .arg(super::arg_outfile())
}

pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = quadview::writer(args.get_one::<String>("outfile").unwrap())?;
    let set = super::read_result(args.get_one::<String>("infile").unwrap())?;
    let config = super::config_from(args);
    let col = set.column_index(args.get_one::<String>("column").unwrap())?;

    let Some(values) = series::numbers(&set.rows, col) else {
        tracing::warn!("column {} is not numeric, no histogram", col);
        return Ok(());
    };

    for bin in histogram(values, config.histogram_ticks) {
        writeln!(writer, "{}\t{}\t{}", bin.lower_bound, bin.width, bin.count)?;
    }
    writer.flush()?;

    Ok(())
}
