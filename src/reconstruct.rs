//! Rebuilding the decode tree from codewords alone.

use log::{debug, trace};

use crate::code::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::huffman::{HuffmanTree, Node, NodeId};

/// Node state while codewords are still being threaded through the tree.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Vacant,
    Leaf(u8),
    Branch {
        left: Option<NodeId>,
        right: Option<NodeId>,
    },
}

fn malformed(msg: String) -> HuffmanError {
    HuffmanError::MalformedCodeTable(msg)
}

/// Rebuild the tree whose root-to-leaf paths are the table's codewords.
///
/// Entries may come in any order. A codeword that runs through another
/// symbol's leaf, ends on a node already claimed, or leaves an internal
/// node with a missing child is reported as a malformed table. A single
/// entry with the empty codeword makes the root itself the leaf.
pub fn reconstruct_tree(codes: &CodeTable) -> Result<HuffmanTree> {
    if codes.is_empty() {
        return Err(HuffmanError::NoSymbols);
    }

    let mut slots = vec![Slot::Vacant];
    for (symbol, code) in codes.iter() {
        let mut cursor: NodeId = 0;
        for &bit in code.bits() {
            let (left, right) = match slots[cursor] {
                Slot::Leaf(other) => {
                    return Err(malformed(format!(
                        "codeword {} of symbol {:#04x} passes through the leaf of {:#04x}",
                        code, symbol, other
                    )));
                }
                Slot::Vacant => (None, None),
                Slot::Branch { left, right } => (left, right),
            };
            let existing = if bit { right } else { left };
            let next = match existing {
                Some(id) => id,
                None => {
                    slots.push(Slot::Vacant);
                    slots.len() - 1
                }
            };
            slots[cursor] = if bit {
                Slot::Branch {
                    left,
                    right: Some(next),
                }
            } else {
                Slot::Branch {
                    left: Some(next),
                    right,
                }
            };
            cursor = next;
        }

        match slots[cursor] {
            Slot::Vacant => slots[cursor] = Slot::Leaf(symbol),
            Slot::Leaf(other) => {
                return Err(malformed(format!(
                    "codeword {} assigned to both {:#04x} and {:#04x}",
                    code, other, symbol
                )));
            }
            Slot::Branch { .. } => {
                return Err(malformed(format!(
                    "codeword {} of symbol {:#04x} is a prefix of another codeword",
                    code, symbol
                )));
            }
        }
        trace!("inserted symbol: {:#04x}", symbol);
    }

    let nodes = slots
        .into_iter()
        .enumerate()
        .map(|(id, slot)| match slot {
            Slot::Leaf(symbol) => Ok(Node::Leaf { symbol }),
            Slot::Branch {
                left: Some(left),
                right: Some(right),
            } => Ok(Node::Internal { left, right }),
            Slot::Branch { .. } | Slot::Vacant => Err(malformed(format!(
                "node {} is missing a child; the code is incomplete",
                id
            ))),
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Reconstructed tree with {} nodes from {} codewords",
        nodes.len(),
        codes.len()
    );
    Ok(HuffmanTree::from_parts(nodes, 0))
}
