use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Alphabet must hold exactly 4 distinct symbols
    #[error("Invalid alphabet '{symbols}': expected 4 distinct symbols")]
    InvalidAlphabet { symbols: String },

    #[error("Symbol '{symbol}' at position {position} is not in the alphabet")]
    SymbolNotInAlphabet { symbol: char, position: usize },

    #[error("Symbol '{symbol}' of the ratio pair is not in the alphabet")]
    PairNotInAlphabet { symbol: char },

    #[error("Marker offset {offset} is past the end of a sequence of length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("Line width must be positive")]
    InvalidLineWidth,

    #[error("Invalid sequence length: {reason}")]
    InvalidLength { reason: String },

    #[error("Invalid description '{description}': use letters and spaces only")]
    InvalidDescription { description: String },

    #[error("Sequence ID is empty")]
    EmptyId,

    #[error("Input closed while waiting for {what}")]
    InputClosed { what: &'static str },

    #[error("Failed to read input: {0}")]
    Input(#[from] io::Error),

    /// Record could not be written; no partial file is left at `path`
    #[error("Failed to write record to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
