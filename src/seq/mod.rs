use std::fmt;

use log::debug;
use rand::Rng;

use crate::error::{Error, Result};

pub const ALPHABET_SIZE: usize = 4;

/// Nucleotide alphabet used when nothing else is asked for.
pub const DNA: Alphabet = Alphabet { symbols: *b"ACGT" };

/// Symbol pair reported alongside the per-base percentages (GC content).
pub const CG_PAIR: [u8; 2] = [b'C', b'G'];

/// Ordered set of exactly four distinct ASCII symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; ALPHABET_SIZE],
}

impl Alphabet {
    pub fn new(symbols: &[u8]) -> Result<Self> {
        let invalid = || Error::InvalidAlphabet {
            symbols: String::from_utf8_lossy(symbols).into_owned(),
        };

        if symbols.len() != ALPHABET_SIZE || !symbols.is_ascii() {
            return Err(invalid());
        }
        for (i, s) in symbols.iter().enumerate() {
            if symbols[i + 1..].contains(s) {
                return Err(invalid());
            }
        }

        let mut array = [0u8; ALPHABET_SIZE];
        array.copy_from_slice(symbols);
        Ok(Alphabet { symbols: array })
    }

    pub fn symbols(&self) -> &[u8; ALPHABET_SIZE] {
        &self.symbols
    }

    pub fn index_of(&self, symbol: u8) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.index_of(symbol).is_some()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        DNA
    }
}

/// A generated sequence. Every byte is a symbol of the alphabet it was drawn from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    bases: Vec<u8>,
}

impl Sequence {
    /// Take existing bases, rejecting any byte that is not in `alphabet`.
    pub fn new<B: Into<Vec<u8>>>(bases: B, alphabet: &Alphabet) -> Result<Self> {
        let bases = bases.into();
        if let Some(position) = bases.iter().position(|&b| !alphabet.contains(b)) {
            return Err(Error::SymbolNotInAlphabet { symbol: bases[position] as char, position });
        }
        Ok(Sequence { bases })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    pub fn as_str(&self) -> &str {
        // alphabet symbols are ASCII
        std::str::from_utf8(&self.bases).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Draw `length` symbols uniformly and independently from `alphabet`.
pub fn generate<R: Rng + ?Sized>(length: usize, alphabet: &Alphabet, rng: &mut R) -> Sequence {
    let bases: Vec<u8> = (0..length)
        .map(|_| alphabet.symbols[rng.gen_range(0..ALPHABET_SIZE)])
        .collect();
    debug!("Generated sequence of {} bases", bases.len());
    Sequence { bases }
}

/// Sequence with a marker spliced in at `offset`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkedSequence {
    text: String,
    offset: usize,
    marker_len: usize,
}

impl MarkedSequence {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn marker(&self) -> &str {
        &self.text[self.offset..self.offset + self.marker_len]
    }

    /// Number of characters, counting each marker character once.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// The sequence the marker was inserted into.
    pub fn without_marker(&self) -> String {
        let mut original = String::with_capacity(self.text.len() - self.marker_len);
        original.push_str(&self.text[..self.offset]);
        original.push_str(&self.text[self.offset + self.marker_len..]);
        original
    }
}

impl fmt::Display for MarkedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Insert `marker` at an offset drawn uniformly from `0..=sequence.len()`.
pub fn insert_marker<R: Rng + ?Sized>(sequence: &Sequence, marker: &str, rng: &mut R) -> MarkedSequence {
    let offset = rng.gen_range(0..=sequence.len());
    debug!("Inserting marker of {} bytes at offset {}", marker.len(), offset);
    splice(sequence, marker, offset)
}

/// Insert `marker` at a fixed `offset`, which may equal the sequence length.
pub fn insert_marker_at(sequence: &Sequence, marker: &str, offset: usize) -> Result<MarkedSequence> {
    if offset > sequence.len() {
        return Err(Error::OffsetOutOfRange { offset, len: sequence.len() });
    }
    Ok(splice(sequence, marker, offset))
}

fn splice(sequence: &Sequence, marker: &str, offset: usize) -> MarkedSequence {
    let bases = sequence.as_str();
    let mut text = String::with_capacity(bases.len() + marker.len());
    text.push_str(&bases[..offset]);
    text.push_str(marker);
    text.push_str(&bases[offset..]);

    MarkedSequence { text, offset, marker_len: marker.len() }
}
