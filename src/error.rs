//! Error types for encoding and decoding.

/// Errors surfaced by the encode/decode entry points.
#[derive(Debug, thiserror::Error)]
pub enum HuffmanError {
    /// The input held no symbols, so there is no tree to build.
    #[error("no symbols to build a tree from")]
    NoSymbols,

    /// The code table could not be parsed, or its codewords conflict.
    #[error("malformed code table: {0}")]
    MalformedCodeTable(String),

    /// The packed stream ended before every symbol was decoded.
    #[error("packed stream truncated: {remaining} symbols still expected")]
    TruncatedStream { remaining: u64 },

    /// A pop was requested on an empty priority queue.
    #[error("priority queue underflow")]
    PriorityQueueUnderflow,

    /// Reading or writing the persisted code table failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
