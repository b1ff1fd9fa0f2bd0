//! Routes a result set to the charts that apply to it.
//!
//! * FASTA results: match/mismatch ratio
//! * score and GFF results: partition tree, histogram, accession links
//! * any result with a `Topology` field: decoded topology candidates

use crate::libs::accession;
use crate::libs::config::ChartConfig;
use crate::libs::histogram::{histogram, Bin};
use crate::libs::partition::{partition, PartitionNode};
use crate::libs::ratio::{ratio, Frequency};
use crate::libs::result::{ResultKind, ResultSet, ResultView};
use crate::libs::series;
use crate::libs::topology::{TopologyCandidate, TopologyTable};
use serde::Serialize;

pub const NO_RESULTS: &str = "No results, try something else.";

// Key column and scored column of score/GFF results
const KEY_COLUMN: usize = 0;
const SCORE_COLUMN: usize = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// The rows of a result set as displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub kind: ResultKind,
    pub fields: Vec<String>,
    pub rows: Vec<Vec<TableCell>>,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramChart {
    pub title: String,
    pub bins: Vec<Bin>,
}

/// Decoded topology of one displayed row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopologyRow {
    pub row: usize,
    /// Icon identifiers per candidate, for the compact cell
    pub icons: Vec<Vec<String>>,
    pub candidates: Vec<TopologyCandidate>,
}

/// Everything the rendering surface needs for one result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBundle {
    pub table: TableView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<[Frequency; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<PartitionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histogram: Option<HistogramChart>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub topology: Vec<TopologyRow>,
}

/// Builds every applicable chart. Charts whose input is unusable are left out.
pub fn build(set: &ResultSet, config: &ChartConfig) -> ChartBundle {
    let view = set.view();
    let table = table_view(set, view, config);

    if set.is_empty() {
        return ChartBundle {
            table,
            ratio: None,
            partition: None,
            histogram: None,
            topology: vec![],
        };
    }

    let ratio = match view.kind {
        ResultKind::Fasta => fasta_ratio(set),
        _ => None,
    };
    let (partition, histogram) = if view.kind.is_scored() {
        score_charts(set, config)
    } else {
        (None, None)
    };

    ChartBundle {
        table,
        ratio,
        partition,
        histogram,
        topology: topology_rows(set, view, config),
    }
}

fn displayed(set: &ResultSet, config: &ChartConfig) -> usize {
    set.len().min(config.row_limit)
}

/// Displayed rows, with accession links on score and GFF results.
pub fn table_view(set: &ResultSet, view: ResultView, config: &ChartConfig) -> TableView {
    let shown = displayed(set, config);
    let truncated = set.len() > shown;

    let rows = set.rows[..shown]
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(col, cell)| {
                    let text = cell.to_string();
                    let link = if view.kind.is_scored() && col == KEY_COLUMN {
                        accession::link(&text, config)
                    } else {
                        None
                    };
                    TableCell { text, link }
                })
                .collect()
        })
        .collect();

    let note = if set.is_empty() {
        Some(NO_RESULTS.to_string())
    } else if truncated {
        Some(format!(
            "Dataset too large, displaying first {} results...",
            shown
        ))
    } else {
        None
    };

    TableView {
        kind: view.kind,
        fields: set.fields.clone(),
        rows,
        truncated,
        note,
    }
}

/// Match/mismatch ratio from the first row: `[_, matched, total, ..]`.
///
/// ```
/// # use quadview::libs::dispatch::fasta_ratio;
/// # use quadview::libs::result::ResultSet;
/// let set = ResultSet::from_json(
///     r#"{"type":"result_fasta","fields":["Rule","Match","Total"],"result":[["G3+",30,120]]}"#,
/// ).unwrap();
/// let freqs = fasta_ratio(&set).unwrap();
/// assert_eq!(freqs[0].frequency, 0.25);
/// ```
pub fn fasta_ratio(set: &ResultSet) -> Option<[Frequency; 2]> {
    let matched = set.cell(0, 1).and_then(|c| c.as_f64());
    let total = set.cell(0, 2).and_then(|c| c.as_f64());

    match (matched, total) {
        (Some(m), Some(t)) if t > 0.0 => Some(ratio(m, t)),
        _ => {
            tracing::debug!("skipping ratio chart, no usable match/total counts");
            None
        }
    }
}

/// Partition tree (small sets only) and histogram of the score column.
pub fn score_charts(
    set: &ResultSet,
    config: &ChartConfig,
) -> (Option<PartitionNode>, Option<HistogramChart>) {
    let Some(series) = series::numbers(&set.rows, SCORE_COLUMN) else {
        tracing::debug!("skipping score charts, column {} is not numeric", SCORE_COLUMN);
        return (None, None);
    };

    let tree = if set.len() < config.partition_limit {
        Some(partition(series::labeled_values(
            &set.rows,
            KEY_COLUMN,
            SCORE_COLUMN,
        )))
    } else {
        tracing::debug!(
            "skipping partition chart, {} rows is over the limit of {}",
            set.len(),
            config.partition_limit
        );
        None
    };

    let title = format!(
        "{} histogram",
        set.fields.get(SCORE_COLUMN).map(String::as_str).unwrap_or("Score")
    );
    let bins = histogram(series, config.histogram_ticks);

    (tree, Some(HistogramChart { title, bins }))
}

/// Raw topology cells of the displayed rows, empty strings for rows without one.
pub fn topology_table(set: &ResultSet, view: ResultView, config: &ChartConfig) -> Option<TopologyTable> {
    let col = view.topology?;
    let cells = series::strings(&set.rows[..displayed(set, config)], col).collect();
    Some(TopologyTable::new(cells))
}

pub fn topology_rows(set: &ResultSet, view: ResultView, config: &ChartConfig) -> Vec<TopologyRow> {
    let Some(table) = topology_table(set, view, config) else {
        return vec![];
    };

    (0..table.len())
        .filter_map(|row| {
            let candidates = table.candidates(row);
            (!candidates.is_empty()).then(|| TopologyRow {
                row,
                icons: candidates.iter().map(|c| c.glyphs()).collect(),
                candidates,
            })
        })
        .collect()
}
