use clap::*;
use quadview::libs::dispatch;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("charts")
        .about("Builds every chart that applies to a result set")
        .after_help(
            r###"
Reads a result set and writes the chart-ready structures as JSON.

* result_fasta           - ratio: Match/Mismatch frequencies of the first row
* result_score, result_gff
                         - histogram of the 2nd column
                         - partition: halves and quartiles (small sets only)
                         - table links for RefSeq and UTRdb accessions
* a "Topology" field     - decoded topology candidates, any type

Charts whose input is unusable (e.g. a non-numeric score column) are left out.

Examples:
1. All charts of a score result:
   quadview charts tests/result/score.json

2. Keep the partition tree for up to 1000 rows:
   quadview charts result.json --partition-limit 1000 -o charts.json
"###,
        )
        .arg(super::arg_infile())
        .arg(super::arg_outfile())
        .arg(super::arg_ticks())
        .arg(super::arg_partition_limit())
        .arg(super::arg_row_limit())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = quadview::writer(args.get_one::<String>("outfile").unwrap())?;
    let set = super::read_result(args.get_one::<String>("infile").unwrap())?;
    let config = super::config_from(args);

    let bundle = dispatch::build(&set, &config);

    serde_json::to_writer_pretty(&mut writer, &bundle)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
