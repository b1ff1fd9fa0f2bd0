//! Median partitioning of a labeled value set into halves and quartiles.

pub mod node;
#[cfg(test)]
pub mod tests;

pub use node::{LabeledValue, PartitionNode};

use crate::libs::stat;

pub const WHOLE_SET: &str = "Whole set";
pub const HALVES: [&str; 2] = ["1st half", "2nd half"];
pub const LOWER_QUARTILES: [&str; 2] = ["1st quartile", "2nd quartile"];
pub const UPPER_QUARTILES: [&str; 2] = ["3rd quartile", "4th quartile"];

impl PartitionNode {
    /// Replaces the children of this node by two branches split at the median
    /// of their values.
    ///
    /// Children with a value strictly below the median go to the `low` branch,
    /// everything else to the `high` one, in their original order. Children
    /// without a value (branches) always go high. Splitting a leaf turns it
    /// into a branch with two empty halves.
    ///
    /// ```
    /// # use quadview::libs::partition::{LabeledValue, PartitionNode};
    /// let leaves = [("a", 3.0), ("b", 1.0), ("c", 2.0), ("d", 2.0)]
    ///     .iter()
    ///     .map(|(n, v)| LabeledValue::new(n, *v).into())
    ///     .collect();
    /// let node = PartitionNode::branch("all", leaves).split("low", "high");
    ///
    /// let low = &node.children()[0];
    /// let high = &node.children()[1];
    /// assert_eq!(low.name(), "low");
    /// assert_eq!(low.children().iter().map(|c| c.name()).collect::<Vec<_>>(), vec!["b"]);
    /// // ties with the median (2.0) go high
    /// assert_eq!(high.children().iter().map(|c| c.name()).collect::<Vec<_>>(), vec!["a", "c", "d"]);
    /// ```
    pub fn split(self, low_name: &str, high_name: &str) -> PartitionNode {
        let (name, children) = match self {
            PartitionNode::Leaf { name, .. } => (name, vec![]),
            PartitionNode::Branch { name, children } => (name, children),
        };

        let series = stat::sorted(children.iter().filter_map(|c| c.value()));
        let (low, high): (Vec<_>, Vec<_>) = if series.is_empty() {
            (vec![], children)
        } else {
            let median = stat::median(&series);
            children
                .into_iter()
                .partition(|c| c.value().is_some_and(|v| v < median))
        };

        PartitionNode::Branch {
            name,
            children: vec![
                PartitionNode::branch(low_name, low),
                PartitionNode::branch(high_name, high),
            ],
        }
    }
}

/// Builds the quartile tree: whole set, then halves, then quartiles, then the
/// original items as leaves.
///
/// ```
/// # use quadview::libs::partition::{partition, LabeledValue};
/// let items: Vec<_> = (1..=8).map(|i| LabeledValue::new(&format!("s{}", i), i as f64)).collect();
/// let root = partition(items);
/// assert_eq!(root.name(), "Whole set");
/// assert_eq!(root.height(), 3);
/// assert_eq!(root.leaves().len(), 8);
/// assert_eq!(root.children()[1].children()[1].name(), "4th quartile");
/// ```
pub fn partition(items: Vec<LabeledValue>) -> PartitionNode {
    let leaves = items.into_iter().map(PartitionNode::from).collect();
    let root = PartitionNode::branch(WHOLE_SET, leaves).split(HALVES[0], HALVES[1]);

    let (name, halves) = match root {
        PartitionNode::Branch { name, children } => (name, children),
        leaf => return leaf,
    };

    let quartiles = halves
        .into_iter()
        .zip([LOWER_QUARTILES, UPPER_QUARTILES])
        .map(|(half, [low, high])| half.split(low, high))
        .collect();

    PartitionNode::Branch {
        name,
        children: quartiles,
    }
}
