//! Command-line arguments for the `encode` and `decode` binaries.

use std::path::PathBuf;

pub const DEFAULT_CODE_FILE: &str = "code.txt";
pub const DEFAULT_PACKED_FILE: &str = "encoded.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "decoded.txt";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("help requested")]
    Help,

    #[error("missing required argument <{0}>")]
    Missing(&'static str),

    #[error("unexpected argument: {0}")]
    Unexpected(String),
}

/// `encode <input_file> [code_file] [packed_file]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeArgs {
    pub input: PathBuf,
    pub code_file: PathBuf,
    pub packed_file: PathBuf,
}

impl EncodeArgs {
    pub const USAGE: &'static str = "<input_file> [code_file] [packed_file]";

    /// Parse arguments, excluding the program name.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, ArgsError> {
        let mut positional = positionals(args, 3)?.into_iter();
        let input = positional.next().ok_or(ArgsError::Missing("input_file"))?;
        Ok(Self {
            input: input.into(),
            code_file: positional.next().unwrap_or_else(|| DEFAULT_CODE_FILE.into()).into(),
            packed_file: positional
                .next()
                .unwrap_or_else(|| DEFAULT_PACKED_FILE.into())
                .into(),
        })
    }
}

/// `decode [code_file] [packed_file] [output_file]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeArgs {
    pub code_file: PathBuf,
    pub packed_file: PathBuf,
    pub output: PathBuf,
}

impl DecodeArgs {
    pub const USAGE: &'static str = "[code_file] [packed_file] [output_file]";

    /// Parse arguments, excluding the program name.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, ArgsError> {
        let mut positional = positionals(args, 3)?.into_iter();
        let mut next_or = |default: &str| -> PathBuf {
            positional.next().unwrap_or_else(|| default.into()).into()
        };
        Ok(Self {
            code_file: next_or(DEFAULT_CODE_FILE),
            packed_file: next_or(DEFAULT_PACKED_FILE),
            output: next_or(DEFAULT_OUTPUT_FILE),
        })
    }
}

fn positionals<I: IntoIterator<Item = String>>(
    args: I,
    max: usize,
) -> Result<Vec<String>, ArgsError> {
    let mut out = Vec::new();
    for arg in args {
        if arg == "-h" || arg == "--help" {
            return Err(ArgsError::Help);
        }
        if arg.starts_with('-') && arg != "-" {
            return Err(ArgsError::Unexpected(arg));
        }
        if out.len() == max {
            return Err(ArgsError::Unexpected(arg));
        }
        out.push(arg);
    }
    Ok(out)
}
