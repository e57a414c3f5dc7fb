//! Huffman tree storage and frequency-driven construction.
//!
//! Nodes live in a flat arena and refer to their children by index. A node
//! is owned by exactly one parent (or is the root); no back-links are kept.

use std::fmt;

use log::{debug, trace};

use crate::error::{HuffmanError, Result};
use crate::frequency::FreqTable;
use crate::pqueue::PriorityQueue;

/// Index of a node inside a [`HuffmanTree`].
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Leaf { symbol: u8 },
    Internal { left: NodeId, right: NodeId },
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<u8> {
        match self {
            Node::Leaf { symbol } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }
}

/// A full binary tree: every internal node has both children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Callers guarantee `nodes` forms a full tree rooted at `root`.
    pub(crate) fn from_parts(nodes: Vec<Node>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Node {
        self.nodes[id]
    }

    /// Follow one edge: `false` goes left, `true` goes right.
    ///
    /// Returns `None` when `id` is a leaf.
    pub fn child(&self, id: NodeId, bit: bool) -> Option<NodeId> {
        match self.nodes[id] {
            Node::Leaf { .. } => None,
            Node::Internal { left, right } => Some(if bit { right } else { left }),
        }
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }
}

/// Queue payload: the subtree's root plus its symbol when it is a leaf.
struct Subtree {
    id: NodeId,
    symbol: Option<u8>,
}

impl fmt::Display for Subtree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol {
            Some(s) => write!(f, "{}", s.escape_ascii()),
            None => write!(f, "#{}", self.id),
        }
    }
}

/// Build a Huffman tree from symbol counts.
///
/// Leaves enter the queue in ascending symbol order. Each round pops the two
/// lightest subtrees, joins them under a new parent (first popped on the
/// left) and re-queues the parent with the summed weight. With a single
/// distinct symbol the lone leaf is the root.
pub fn build_huffman_tree(frequencies: &FreqTable) -> Result<HuffmanTree> {
    let distinct = frequencies.distinct();
    debug!("Building Huffman tree from {} unique symbols", distinct);
    if distinct == 0 {
        return Err(HuffmanError::NoSymbols);
    }

    let mut nodes = Vec::with_capacity(2 * distinct - 1);
    let mut queue = PriorityQueue::new();

    for (symbol, count) in frequencies.iter() {
        let id = nodes.len();
        nodes.push(Node::Leaf { symbol });
        let leaf = Subtree {
            id,
            symbol: Some(symbol),
        };
        trace!("inserting: {},{}", leaf, count);
        queue.insert(count, leaf);
    }
    trace!("{}", queue);

    for _ in 1..distinct {
        let (left_weight, left) = queue.pop_min()?;
        let (right_weight, right) = queue.pop_min()?;
        trace!(
            "popped: {},{} and {},{}",
            left, left_weight, right, right_weight
        );

        let id = nodes.len();
        nodes.push(Node::Internal {
            left: left.id,
            right: right.id,
        });
        let parent = Subtree { id, symbol: None };
        let weight = left_weight + right_weight;
        trace!("inserting: {},{}", parent, weight);
        queue.insert(weight, parent);
    }

    let (weight, root) = queue.pop_min()?;
    debug!(
        "Tree construction complete: {} nodes, root weight {}",
        nodes.len(),
        weight
    );
    Ok(HuffmanTree::from_parts(nodes, root.id))
}
