//! Huffman compression of byte streams.
//!
//! Encoding counts byte frequencies, builds a Huffman tree with a stable
//! priority queue, derives one codeword per symbol and bit-packs the input.
//! The code table is persisted as text together with the symbol count;
//! decoding rebuilds the tree from the codewords alone and unpacks the
//! stream until the count is reached.
//!
//! ```
//! use huffman_codec::{decode, encode};
//!
//! let encoded = encode(b"aaab")?;
//! assert_eq!(encoded.packed, vec![0b1110_0000]);
//! assert_eq!(decode(&encoded.book, &encoded.packed)?, b"aaab");
//! # Ok::<(), huffman_codec::HuffmanError>(())
//! ```

pub mod bitio;
pub mod cli;
pub mod code;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod pqueue;
pub mod reconstruct;
pub mod table;

pub use code::{CodeTable, Codeword, build_code_table};
pub use codec::{Encoded, decode, encode, pack, unpack};
pub use error::{HuffmanError, Result};
pub use frequency::FreqTable;
pub use huffman::{HuffmanTree, Node, NodeId, build_huffman_tree};
pub use reconstruct::reconstruct_tree;
pub use table::CodeBook;
