use super::info::{ClassInfo, ClassInfoSource};
use super::parser::decode;
use super::TopologyCandidate;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinSet;

/// Identifies one expansion of one row. Never reused, so a handle outliving
/// its panel can be recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ContainerHandle(u64);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidatePanel {
    pub index: usize,
    pub candidate: TopologyCandidate,
    /// HTML explanation of each reason
    pub evidence: Vec<String>,
    /// Filled in by enrichment, stays empty if the lookup fails
    pub info: Option<ClassInfo>,
}

impl CandidatePanel {
    pub fn heading(&self) -> Option<String> {
        self.info
            .as_ref()
            .map(|info| format!("Possible topology #{}: {}", self.index, info.name))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandedRow {
    pub row: usize,
    pub handle: ContainerHandle,
    pub panels: Vec<CandidatePanel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The row opened under a fresh handle
    Expanded(ContainerHandle),
    /// The row was open and is now closed
    Collapsed,
    /// The row has no topology and cannot be expanded
    Inert,
}

/// Result of one class lookup, addressed to a panel of an expanded row.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentUpdate {
    pub handle: ContainerHandle,
    pub index: usize,
    pub info: ClassInfo,
}

/// Topology cells of a table, with at most one row expanded at a time.
#[derive(Debug, Default)]
pub struct TopologyTable {
    cells: Vec<String>,
    expanded: Option<ExpandedRow>,
    generation: u64,
}

impl TopologyTable {
    /// One raw cell per displayed row, empty when the row has no topology.
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, row: usize) -> Option<&str> {
        self.cells.get(row).map(String::as_str)
    }

    /// Decoded candidates of a row, for the compact cell rendering.
    pub fn candidates(&self, row: usize) -> Vec<TopologyCandidate> {
        self.cell(row).map(decode).unwrap_or_default()
    }

    pub fn expanded(&self) -> Option<&ExpandedRow> {
        self.expanded.as_ref()
    }

    /// Whether `handle` still names the open panel
    pub fn is_live(&self, handle: ContainerHandle) -> bool {
        self.expanded.as_ref().is_some_and(|e| e.handle == handle)
    }

    /// Opens `row`, closing whatever was open, or closes it if it was the open one.
    ///
    /// ```
    /// # use quadview::libs::topology::{Toggle, TopologyTable};
    /// let mut table = TopologyTable::new(vec![
    ///     "LPL:propeller/composition:GGG:0.1".to_string(),
    ///     "".to_string(),
    ///     "DDL:basket/length_match:2-1-2:0.01".to_string(),
    /// ]);
    /// assert!(matches!(table.toggle(0), Toggle::Expanded(_)));
    /// assert!(matches!(table.toggle(2), Toggle::Expanded(_)));
    /// assert_eq!(table.expanded().unwrap().row, 2);
    /// assert_eq!(table.toggle(2), Toggle::Collapsed);
    /// assert!(table.expanded().is_none());
    /// assert_eq!(table.toggle(1), Toggle::Inert);
    /// ```
    pub fn toggle(&mut self, row: usize) -> Toggle {
        let candidates = match self.cell(row) {
            Some(cell) if !cell.trim().is_empty() => decode(cell),
            _ => return Toggle::Inert,
        };

        if let Some(open) = self.expanded.take() {
            if open.row == row {
                tracing::debug!("collapse row {}", row);
                return Toggle::Collapsed;
            }
            tracing::debug!("collapse row {} before expanding row {}", open.row, row);
        }

        self.generation += 1;
        let handle = ContainerHandle(self.generation);
        let panels = candidates
            .into_iter()
            .enumerate()
            .map(|(index, candidate)| CandidatePanel {
                index,
                evidence: candidate.reasons.iter().map(|r| r.to_html()).collect(),
                candidate,
                info: None,
            })
            .collect();
        self.expanded = Some(ExpandedRow {
            row,
            handle,
            panels,
        });

        Toggle::Expanded(handle)
    }

    /// Fills a panel of the open row. Updates for a closed panel are dropped
    /// and `false` is returned.
    pub fn apply(&mut self, update: EnrichmentUpdate) -> bool {
        let panel = self
            .expanded
            .as_mut()
            .filter(|e| e.handle == update.handle)
            .and_then(|e| e.panels.get_mut(update.index));

        match panel {
            Some(panel) => {
                panel.info = Some(update.info);
                true
            }
            None => {
                tracing::debug!(
                    "dropping enrichment for detached panel {:?}#{}",
                    update.handle,
                    update.index
                );
                false
            }
        }
    }

    /// Applies every update already received, returns how many landed.
    pub fn apply_pending(&mut self, updates: &mut UnboundedReceiver<EnrichmentUpdate>) -> usize {
        let mut applied = 0;
        while let Ok(update) = updates.try_recv() {
            if self.apply(update) {
                applied += 1;
            }
        }
        applied
    }
}

/// Fires one class lookup per candidate panel.
///
/// Lookups are independent: they complete in any order, failures only leave
/// their own panel empty, and nothing is cancelled when a row closes.
pub struct Enricher {
    source: Arc<dyn ClassInfoSource>,
    sender: UnboundedSender<EnrichmentUpdate>,
    tasks: JoinSet<()>,
}

impl Enricher {
    pub fn new(source: Arc<dyn ClassInfoSource>) -> (Self, UnboundedReceiver<EnrichmentUpdate>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let enricher = Self {
            source,
            sender,
            tasks: JoinSet::new(),
        };
        (enricher, receiver)
    }

    /// Must be called from within a tokio runtime.
    pub fn request(&mut self, row: &ExpandedRow) {
        for panel in &row.panels {
            let source = Arc::clone(&self.source);
            let sender = self.sender.clone();
            let handle = row.handle;
            let index = panel.index;
            let topology = panel.candidate.topology_code.clone();
            let name = panel.candidate.name.clone();

            self.tasks.spawn(async move {
                match source.class_info(&topology, &name).await {
                    Ok(info) => {
                        // A closed receiver means nobody renders any more
                        let _ = sender.send(EnrichmentUpdate {
                            handle,
                            index,
                            info,
                        });
                    }
                    Err(e) => tracing::debug!("no class info for {}:{}: {}", topology, name, e),
                }
            });
        }
    }

    /// Lookups not finished yet
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Waits for every outstanding lookup.
    pub async fn settle(&mut self) {
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(e) = joined {
                tracing::warn!("class lookup task failed: {}", e);
            }
        }
    }
}
