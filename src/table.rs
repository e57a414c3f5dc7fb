//! The persisted code table.
//!
//! ```text
//! <decimal symbol count>\n
//! <symbol byte> <codeword as '0'/'1' characters>\n
//! ...
//! ```
//!
//! The symbol is a raw byte and may itself be a space or a line break, so
//! entries are parsed positionally rather than by splitting on whitespace.

use std::io::{Read, Write};

use log::debug;

use crate::code::{CodeTable, Codeword};
use crate::error::{HuffmanError, Result};

/// Everything the decoder needs: the codewords and how many symbols to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBook {
    pub symbol_count: u64,
    pub codes: CodeTable,
}

impl CodeBook {
    pub fn new(symbol_count: u64, codes: CodeTable) -> Self {
        Self {
            symbol_count,
            codes,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = format!("{}\n", self.symbol_count).into_bytes();
        for (symbol, code) in self.codes.iter() {
            out.push(symbol);
            out.push(b' ');
            out.extend_from_slice(code.to_string().as_bytes());
            out.push(b'\n');
        }
        out
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let bytes = self.to_bytes();
        writer.write_all(&bytes)?;
        writer.flush()?;
        debug!(
            "Wrote code table: {} entries, {} bytes",
            self.codes.len(),
            bytes.len()
        );
        Ok(())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let header_end = bytes
            .iter()
            .position(|&b| b == b'\n')
            .ok_or_else(|| malformed("missing symbol count line"))?;
        let header = std::str::from_utf8(&bytes[..header_end])
            .map_err(|_| malformed("symbol count is not text"))?;
        let symbol_count = header
            .trim()
            .parse::<u64>()
            .map_err(|e| malformed(&format!("invalid symbol count {:?}: {}", header, e)))?;

        let mut codes = CodeTable::new();
        let mut rest = &bytes[header_end + 1..];
        while let Some((&symbol, after)) = rest.split_first() {
            // A lone blank line at the very end closes the table.
            if symbol == b'\n' && after.is_empty() {
                break;
            }
            let after = match after.split_first() {
                Some((b' ', after)) => after,
                _ => {
                    return Err(malformed(&format!(
                        "entry for symbol {:#04x} lacks a separator",
                        symbol
                    )));
                }
            };
            let line_end = after
                .iter()
                .position(|&b| b == b'\n')
                .unwrap_or(after.len());
            let text = std::str::from_utf8(&after[..line_end])
                .map_err(|_| malformed("codeword is not text"))?;
            let code: Codeword = text.parse()?;
            if codes.insert(symbol, code).is_some() {
                return Err(malformed(&format!("symbol {:#04x} listed twice", symbol)));
            }
            rest = after.get(line_end + 1..).unwrap_or(&[]);
        }

        debug!(
            "Read code table: {} entries, {} symbols to decode",
            codes.len(),
            symbol_count
        );
        Ok(Self::new(symbol_count, codes))
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }
}

fn malformed(msg: &str) -> HuffmanError {
    HuffmanError::MalformedCodeTable(msg.to_string())
}
