// Codebook
// Explicit character <-> integer mapping overriding code-point encoding

use std::collections::BTreeMap;

use super::bigint::RsaBigInt;
use super::error::{RsaError, RsaResult};

/// Bidirectional mapping between characters and the integers they encrypt as
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Codebook {
    encode: BTreeMap<char, u32>,
    decode: BTreeMap<u32, char>,
}

impl Codebook {
    /// Build a codebook from (character, value) pairs.
    ///
    /// Both sides must be unique, otherwise decryption would be ambiguous.
    pub fn from_pairs<I>(pairs: I) -> RsaResult<Self>
    where
        I: IntoIterator<Item = (char, u32)>,
    {
        let mut book = Self::default();
        for (symbol, value) in pairs {
            if book.encode.contains_key(&symbol) {
                return Err(RsaError::InvalidCodebook(format!(
                    "{:?} is mapped twice",
                    symbol
                )));
            }
            if let Some(other) = book.decode.get(&value) {
                return Err(RsaError::InvalidCodebook(format!(
                    "{} is used by both {:?} and {:?}",
                    value, other, symbol
                )));
            }
            book.encode.insert(symbol, value);
            book.decode.insert(value, symbol);
        }
        Ok(book)
    }

    /// Number the characters of `alphabet` consecutively from `first_value`
    pub fn from_alphabet(alphabet: &str, first_value: u32) -> RsaResult<Self> {
        Self::from_pairs(alphabet.chars().zip(first_value..))
    }

    pub fn encode(&self, symbol: char) -> Option<u32> {
        self.encode.get(&symbol).copied()
    }

    pub fn decode(&self, value: u32) -> Option<char> {
        self.decode.get(&value).copied()
    }

    /// Largest value in the book; the modulus must exceed it
    pub fn max_value(&self) -> Option<u32> {
        self.decode.keys().next_back().copied()
    }

    /// Reject the book up front when its largest value does not fit below n
    pub fn check_modulus(&self, n: &RsaBigInt) -> RsaResult<()> {
        match self.max_value() {
            Some(max) if &RsaBigInt::from(max) >= n => Err(RsaError::InvalidCodebook(format!(
                "value {} does not fit below the modulus {}",
                max, n
            ))),
            _ => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.encode.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encode.is_empty()
    }
}
