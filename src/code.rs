//! Codewords and the symbol-to-codeword table.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::error::HuffmanError;
use crate::huffman::{HuffmanTree, Node, NodeId};

/// Root-to-leaf path: `false` is a left step, `true` a right step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Codeword {
    bits: Vec<bool>,
}

impl Codeword {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True if `self` is a proper or improper prefix of `other`.
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Codeword {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.bytes()
            .map(|c| match c {
                b'0' => Ok(false),
                b'1' => Ok(true),
                other => Err(HuffmanError::MalformedCodeTable(format!(
                    "invalid codeword character '{}'",
                    other.escape_ascii()
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Codeword::from_bits)
    }
}

/// Mapping from symbol to codeword, iterated in ascending symbol order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Codeword>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the codeword previously assigned to `symbol`, if any.
    pub fn insert(&mut self, symbol: u8, code: Codeword) -> Option<Codeword> {
        self.codes.insert(symbol, code)
    }

    pub fn get(&self, symbol: u8) -> Option<&Codeword> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &Codeword)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Check that no codeword is a prefix of another symbol's codeword.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Codeword> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }
}

impl FromIterator<(u8, Codeword)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (u8, Codeword)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

/// Derive every leaf's codeword by a depth-first walk from the root.
///
/// A root that is itself a leaf gets the empty codeword.
pub fn build_code_table(tree: &HuffmanTree) -> CodeTable {
    let mut table = CodeTable::new();
    let mut path = Vec::new();
    walk(tree, tree.root(), &mut path, &mut table);
    debug!("Code table built with {} entries", table.len());
    table
}

fn walk(tree: &HuffmanTree, id: NodeId, path: &mut Vec<bool>, table: &mut CodeTable) {
    match tree.node(id) {
        Node::Leaf { symbol } => {
            let code = Codeword::from_bits(path.clone());
            trace!("built code: {},{}", symbol.escape_ascii(), code);
            table.insert(symbol, code);
        }
        Node::Internal { left, right } => {
            path.push(false);
            walk(tree, left, path, table);
            path.pop();

            path.push(true);
            walk(tree, right, path, table);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FreqTable;
    use crate::huffman::build_huffman_tree;

    fn code(s: &str) -> Codeword {
        s.parse().unwrap()
    }

    fn table_for(input: &[u8]) -> CodeTable {
        let tree = build_huffman_tree(&FreqTable::from_bytes(input)).unwrap();
        build_code_table(&tree)
    }

    #[test]
    fn test_codeword_parse_and_display() {
        let c = code("0110");
        assert_eq!(c.bits(), &[false, true, true, false]);
        assert_eq!(c.to_string(), "0110");
        assert!(code("").is_empty());
        assert!(matches!(
            "01x".parse::<Codeword>(),
            Err(HuffmanError::MalformedCodeTable(_))
        ));
    }

    #[test]
    fn test_prefix_relation() {
        assert!(code("01").is_prefix_of(&code("011")));
        assert!(code("").is_prefix_of(&code("1")));
        assert!(!code("10").is_prefix_of(&code("01")));
        assert!(!code("011").is_prefix_of(&code("01")));
    }

    #[test]
    fn test_two_symbol_codes() {
        let table = table_for(b"aaab");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(b'b'), Some(&code("0")));
        assert_eq!(table.get(b'a'), Some(&code("1")));
    }

    #[test]
    fn test_single_symbol_gets_empty_code() {
        let table = table_for(b"aaaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(b'a'), Some(&Codeword::new()));
    }

    #[test]
    fn test_generated_tables_are_prefix_free() {
        for input in [
            &b"abracadabra"[..],
            b"mississippi river",
            b"the quick brown fox jumps over the lazy dog",
        ] {
            let table = table_for(input);
            assert!(table.is_prefix_free(), "not prefix free for {:?}", input);
        }
        let all: Vec<u8> = (0..=255).collect();
        assert!(table_for(&all).is_prefix_free());
    }

    #[test]
    fn test_frequent_symbols_get_shorter_codes() {
        let table = table_for(b"aaaaaaaabbbbccd");
        let a = table.get(b'a').unwrap().len();
        let d = table.get(b'd').unwrap().len();
        assert!(a < d);
    }

    #[test]
    fn test_same_frequencies_give_same_table() {
        let first = table_for(b"abcdefabcabaa");
        let second = table_for(b"aaaaabbbccdef");
        assert_eq!(first, second);
    }

    #[test]
    fn test_prefix_free_detects_conflict() {
        let table: CodeTable = [(b'a', code("0")), (b'b', code("01"))]
            .into_iter()
            .collect();
        assert!(!table.is_prefix_free());
    }
}
