use clap::*;
use quadview::libs::accession;
use quadview::libs::config::ChartConfig;
use std::io::{BufRead, Write};

pub fn make_subcommand() -> Command {
    Command::new("link")
        .about("Resolves accessions to external database links")
        .after_help(
            r###"
* RefSeq accessions (NC_, NM_, XR_, ...) link to NCBI Nucleotide
* UTRdb loci (5HSA..., 3HSA...) link to UTRdb

Output format (TSV):
  accession	url

Accessions without a link get "-".

Examples:
  quadview link NC_000001 3HSA012345 chr1
  quadview link --infile tests/result/accessions.txt
"###,
        )
        .arg(
            Arg::new("accessions")
                .num_args(0..)
                .index(1)
                .help("Accessions to resolve"),
        )
        .arg(
            Arg::new("infile")
                .long("infile")
                .short('i')
                .num_args(1)
                .help("Read accessions from a file, one per line. [stdin] for standard input"),
        )
        .arg(super::arg_outfile())
}

pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = quadview::writer(args.get_one::<String>("outfile").unwrap())?;
    let config = ChartConfig::default();

    let mut accessions: Vec<String> = args
        .get_many::<String>("accessions")
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default();
    if let Some(infile) = args.get_one::<String>("infile") {
        for line in quadview::reader(infile)?.lines() {
            let line = line?;
            let acc = line.trim();
            if !acc.is_empty() && !acc.starts_with('#') {
                accessions.push(acc.to_string());
            }
        }
    }

    for acc in &accessions {
        let url = accession::link(acc, &config).unwrap_or_else(|| "-".to_string());
        writeln!(writer, "{}\t{}", acc, url)?;
    }
    writer.flush()?;

    Ok(())
}
