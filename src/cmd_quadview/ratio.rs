use clap::*;
use quadview::libs::dispatch::fasta_ratio;
use std::io::Write;

pub fn make_subcommand() -> Command {
    Command::new("ratio")
        .about("Match/mismatch ratio of a FASTA result")
        .after_help(
            r###"
Reads the match count (2nd cell) and the total count (3rd cell) of the first
row.

Output format (TSV):
  Match	0.25
  Mismatch	0.75

Nothing is written when the counts are missing or the total is not positive.

Examples:
  quadview ratio tests/result/fasta.json
"###,
        )
        .arg(super::arg_infile())
        .arg(super::arg_outfile())
}

pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = quadview::writer(args.get_one::<String>("outfile").unwrap())?;
    let set = super::read_result(args.get_one::<String>("infile").unwrap())?;

    let Some(freqs) = fasta_ratio(&set) else {
        tracing::warn!("no usable match/total counts in the first row");
        return Ok(());
    };

    for freq in &freqs {
        writeln!(writer, "{}\t{}", freq.key, freq.frequency)?;
    }
    writer.flush()?;

    Ok(())
}
