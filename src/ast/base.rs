//! Base types shared by all AST nodes.

use serde::{Deserialize, Serialize};

/// Index of a node within its arena.
///
/// `NONE` is a sentinel for absent optional children (a missing body, an
/// anonymous class name).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    /// Check if this index is the NONE sentinel.
    #[inline]
    pub fn is_none(self) -> bool {
        self == NodeIndex::NONE
    }

    /// Check if this index refers to a node.
    #[inline]
    pub fn is_some(self) -> bool {
        self != NodeIndex::NONE
    }
}

/// An ordered list of node indices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
}

impl NodeList {
    pub fn new(nodes: Vec<NodeIndex>) -> NodeList {
        NodeList { nodes }
    }

    pub fn empty() -> NodeList {
        NodeList { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl From<Vec<NodeIndex>> for NodeList {
    fn from(nodes: Vec<NodeIndex>) -> NodeList {
        NodeList { nodes }
    }
}
