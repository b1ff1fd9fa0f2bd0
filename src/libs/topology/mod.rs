//! G-quadruplex topology evidence carried in a result cell.
//!
//! A cell holds space-separated candidates, each `code:name/reason,reason`,
//! each reason `code:argument:p-value`. Decoding is pure; class metadata is
//! fetched separately by an [`info::ClassInfoSource`] and merged into the
//! expanded row by [`panel::TopologyTable`].

pub mod info;
pub mod panel;
pub mod parser;
pub mod reason;

pub use info::{ClassInfo, ClassInfoSource, DescriptionDir};
pub use panel::{
    CandidatePanel, ContainerHandle, Enricher, EnrichmentUpdate, ExpandedRow, Toggle,
    TopologyTable,
};
pub use parser::decode;
pub use reason::{Reason, ReasonCode};

use serde::Serialize;

/// One predicted topology with its supporting evidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyCandidate {
    pub topology_code: String,
    pub name: String,
    pub reasons: Vec<Reason>,
}

impl TopologyCandidate {
    /// Icon identifiers of the topology code, one per letter.
    ///
    /// ```
    /// # use quadview::libs::topology::decode;
    /// let candidates = decode("LPL:propeller/composition:GGG:0.2");
    /// assert_eq!(candidates[0].glyphs(), vec!["l", "p", "l"]);
    /// ```
    pub fn glyphs(&self) -> Vec<String> {
        self.topology_code
            .chars()
            .map(|c| c.to_lowercase().to_string())
            .collect()
    }
}
