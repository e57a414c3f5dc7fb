//! Encode and decode entry points.
//!
//! Every call owns its own tree, code table and bit buffer, so independent
//! runs never share state.

use log::debug;

use crate::bitio::{BitReader, BitWriter};
use crate::code::{CodeTable, build_code_table};
use crate::error::{HuffmanError, Result};
use crate::frequency::FreqTable;
use crate::huffman::{HuffmanTree, Node, build_huffman_tree};
use crate::reconstruct::reconstruct_tree;
use crate::table::CodeBook;

/// Output of [`encode`].
#[derive(Debug, Clone)]
pub struct Encoded {
    /// Code table and symbol count to persist alongside `packed`.
    pub book: CodeBook,
    /// Bit-packed codewords, zero-padded to a whole byte.
    pub packed: Vec<u8>,
    pub frequencies: FreqTable,
}

/// Count symbols, build the tree and code table, and pack `input`.
pub fn encode(input: &[u8]) -> Result<Encoded> {
    let frequencies = FreqTable::from_bytes(input);
    let tree = build_huffman_tree(&frequencies)?;
    let codes = build_code_table(&tree);
    let packed = pack(input, &codes)?;
    debug!(
        "Encoded {} bytes into {} packed bytes",
        input.len(),
        packed.len()
    );
    Ok(Encoded {
        book: CodeBook::new(frequencies.total(), codes),
        packed,
        frequencies,
    })
}

/// Write each symbol's codeword, root-first, and flush the final byte.
pub fn pack(input: &[u8], codes: &CodeTable) -> Result<Vec<u8>> {
    let mut writer = BitWriter::with_capacity(input.len() / 2);
    for &symbol in input {
        let code = codes.get(symbol).ok_or_else(|| {
            HuffmanError::MalformedCodeTable(format!("symbol {:#04x} has no codeword", symbol))
        })?;
        writer.write_bits(code.bits());
    }
    Ok(writer.finish())
}

/// Rebuild the tree from `book` and decode `book.symbol_count` symbols.
pub fn decode(book: &CodeBook, packed: &[u8]) -> Result<Vec<u8>> {
    let tree = reconstruct_tree(&book.codes)?;
    let out = unpack(&tree, book.symbol_count, packed)?;
    debug!(
        "Decoded {} packed bytes into {} bytes",
        packed.len(),
        out.len()
    );
    Ok(out)
}

/// Walk `tree` bit by bit until `count` symbols are emitted.
///
/// Bits left over in the last byte are padding and are never read. When
/// the root is itself a leaf no bits are consumed at all.
pub fn unpack(tree: &HuffmanTree, count: u64, packed: &[u8]) -> Result<Vec<u8>> {
    let root = tree.root();

    if let Node::Leaf { symbol } = tree.node(root) {
        let count = usize::try_from(count).map_err(|_| {
            HuffmanError::MalformedCodeTable(format!("symbol count {} is too large", count))
        })?;
        let mut out = Vec::new();
        out.try_reserve_exact(count).map_err(|e| {
            HuffmanError::MalformedCodeTable(format!(
                "cannot allocate {} output symbols: {}",
                count, e
            ))
        })?;
        out.resize(count, symbol);
        return Ok(out);
    }

    let capacity = count.min(packed.len() as u64 * 8) as usize;
    let mut out = Vec::with_capacity(capacity);
    let mut bits = BitReader::new(packed);
    let mut remaining = count;
    let mut cursor = root;

    while remaining > 0 {
        let bit = bits
            .read_bit()
            .ok_or(HuffmanError::TruncatedStream { remaining })?;
        let next = tree.child(cursor, bit).ok_or_else(|| {
            HuffmanError::MalformedCodeTable(format!("traversal reached leaf node {}", cursor))
        })?;
        match tree.node(next) {
            Node::Leaf { symbol } => {
                out.push(symbol);
                remaining -= 1;
                cursor = root;
            }
            Node::Internal { .. } => cursor = next,
        }
    }

    Ok(out)
}
