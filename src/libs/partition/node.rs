use serde::Serialize;

/// One row reduced to its key and its scored column.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledValue {
    pub name: String,
    pub value: f64,
}

impl LabeledValue {
    pub fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

impl From<LabeledValue> for PartitionNode {
    fn from(item: LabeledValue) -> Self {
        PartitionNode::Leaf {
            name: item.name,
            value: item.value,
        }
    }
}

/// Node of a partition tree.
///
/// Serializes to the `{name, value}` / `{name, children}` shape expected by
/// partition layouts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PartitionNode {
    Leaf {
        name: String,
        value: f64,
    },
    Branch {
        name: String,
        children: Vec<PartitionNode>,
    },
}

impl PartitionNode {
    pub fn branch(name: &str, children: Vec<PartitionNode>) -> Self {
        PartitionNode::Branch {
            name: name.to_string(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PartitionNode::Leaf { name, .. } | PartitionNode::Branch { name, .. } => name,
        }
    }

    /// Only leaves carry a value
    pub fn value(&self) -> Option<f64> {
        match self {
            PartitionNode::Leaf { value, .. } => Some(*value),
            PartitionNode::Branch { .. } => None,
        }
    }

    pub fn children(&self) -> &[PartitionNode] {
        match self {
            PartitionNode::Leaf { .. } => &[],
            PartitionNode::Branch { children, .. } => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, PartitionNode::Leaf { .. })
    }

    /// Leaves in depth-first, left-to-right order.
    pub fn leaves(&self) -> Vec<&PartitionNode> {
        let mut leaves = Vec::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            match node {
                PartitionNode::Leaf { .. } => leaves.push(node),
                PartitionNode::Branch { children, .. } => stack.extend(children.iter().rev()),
            }
        }
        leaves
    }

    /// Number of edges on the longest root-to-leaf path. Empty branches count as leaves.
    pub fn height(&self) -> usize {
        self.children()
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Sum of leaf values below this node, as a partition layout sizes it.
    pub fn total(&self) -> f64 {
        self.leaves().iter().filter_map(|leaf| leaf.value()).sum()
    }
}
