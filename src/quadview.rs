extern crate clap;
use clap::*;

mod cmd_quadview;

fn main() -> anyhow::Result<()> {
    let app = Command::new("quadview")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`quadview` - Chart-ready views of query results")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log skipped charts and dropped lookups to stderr"),
        )
        .subcommand(cmd_quadview::charts::make_subcommand())
        .subcommand(cmd_quadview::histo::make_subcommand())
        .subcommand(cmd_quadview::link::make_subcommand())
        .subcommand(cmd_quadview::partition::make_subcommand())
        .subcommand(cmd_quadview::ratio::make_subcommand())
        .subcommand(cmd_quadview::topo::make_subcommand())
        .after_help(
            r###"Subcommand groups:

* Whole result sets:
    * charts    - Every chart that applies to a result set

* Single charts:
    * histo     - Histogram bins of a numeric column
    * partition - Median/quartile tree of a scored column
    * ratio     - Match/mismatch ratio of a FASTA result
    * topo      - Decoded topology evidence, with row expansion
    * link      - External links of accessions

Result sets are JSON: {"type": ..., "fields": [...], "result": [[...], ...]}
Set RUST_LOG for finer logging control.

"###,
        );

    let matches = app.get_matches();
    init_tracing(matches.get_flag("verbose"));

    // Check which subcomamnd the user ran...
    match matches.subcommand() {
        Some(("charts", sub_matches)) => cmd_quadview::charts::execute(sub_matches),
        Some(("histo", sub_matches)) => cmd_quadview::histo::execute(sub_matches),
        Some(("link", sub_matches)) => cmd_quadview::link::execute(sub_matches),
        Some(("partition", sub_matches)) => cmd_quadview::partition::execute(sub_matches),
        Some(("ratio", sub_matches)) => cmd_quadview::ratio::execute(sub_matches),
        Some(("topo", sub_matches)) => cmd_quadview::topo::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}

// stdout carries the results, logs go to stderr
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
