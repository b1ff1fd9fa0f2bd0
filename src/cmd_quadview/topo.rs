use clap::*;
use quadview::libs::dispatch::{self, TopologyRow};
use quadview::libs::topology::{ClassInfoSource, DescriptionDir, Enricher, ExpandedRow, Toggle};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;

pub fn make_subcommand() -> Command {
    Command::new("topo")
        .about("Decodes topology evidence of a result set")
        .after_help(
            r###"
Decodes the "Topology" field of every displayed row. A cell holds
space-separated candidates:

  <topology>:<name>/<reason>:<argument>:<p-value>,<reason>:...

Each --expand toggles a row in order, as clicking it would: a row opens and
closes any other open row, or closes if it was already open. With --info-dir,
the candidates of the open row are enriched from class descriptions
(<info-dir>/<name>/DESCRIPTION). Lookups for rows closed in the meantime are
dropped.

Output is JSON: {"rows": [...], "expanded": {...}}

Examples:
1. Decode all rows:
   quadview topo tests/result/quadclass.json

2. Open the first row and describe its candidates:
   quadview topo tests/result/quadclass.json --expand 0 --info-dir gqclass/
"###,
        )
        .arg(super::arg_infile())
        .arg(
            Arg::new("expand")
                .long("expand")
                .short('e')
                .num_args(1)
                .action(ArgAction::Append)
                .value_parser(value_parser!(usize))
                .help("Toggle this row (0-based); may be repeated"),
        )
        .arg(
            Arg::new("info_dir")
                .long("info-dir")
                .num_args(1)
                .help("Directory of topology class descriptions"),
        )
        .arg(super::arg_row_limit())
        .arg(super::arg_outfile())
}

#[derive(Serialize)]
struct TopologyReport<'a> {
    rows: &'a [TopologyRow],
    #[serde(skip_serializing_if = "Option::is_none")]
    expanded: Option<&'a ExpandedRow>,
}

pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = quadview::writer(args.get_one::<String>("outfile").unwrap())?;
    let set = super::read_result(args.get_one::<String>("infile").unwrap())?;
    let config = super::config_from(args);
    let view = set.view();

    let Some(mut table) = dispatch::topology_table(&set, view, &config) else {
        tracing::warn!("no Topology field in the result set");
        return Ok(());
    };
    let rows = dispatch::topology_rows(&set, view, &config);

    let expand: Vec<usize> = args
        .get_many::<usize>("expand")
        .map(|vals| vals.copied().collect())
        .unwrap_or_default();
    let source = args
        .get_one::<String>("info_dir")
        .map(|dir| Arc::new(DescriptionDir::new(dir)) as Arc<dyn ClassInfoSource>);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let mut enrichment = source.map(Enricher::new);

        for row in expand {
            match table.toggle(row) {
                Toggle::Expanded(_) => {
                    if let (Some((enricher, _)), Some(open)) =
                        (enrichment.as_mut(), table.expanded())
                    {
                        enricher.request(open);
                    }
                }
                Toggle::Collapsed => tracing::debug!("row {} collapsed", row),
                Toggle::Inert => tracing::warn!("row {} has no topology to expand", row),
            }
        }

        if let Some((enricher, updates)) = enrichment.as_mut() {
            enricher.settle().await;
            let applied = table.apply_pending(updates);
            tracing::debug!("{} panels enriched", applied);
        }
    });

    let report = TopologyReport {
        rows: &rows,
        expanded: table.expanded(),
    };
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
