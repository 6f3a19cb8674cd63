//! # `TokenDecoder` Result Types

use core::fmt::Debug;

use crate::{
    alloc::{string::String, vec::Vec},
    errors::{WPResult, WordpairError},
    support::strings::string_from_utf8_lossy,
};

/// The result of decoding tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult<V>
where
    V: Debug,
{
    /// The decoded value.
    pub value: V,

    /// The number of invalid UTF-8 sequences replaced with `U+FFFD`.
    pub replacements: usize,
}

impl<V> DecodeResult<V>
where
    V: Debug,
{
    /// Construct a new result.
    pub fn new(
        value: V,
        replacements: usize,
    ) -> Self {
        Self {
            value,
            replacements,
        }
    }

    /// Did decoding substitute replacement characters?
    pub fn is_lossy(&self) -> bool {
        self.replacements > 0
    }

    /// Unwrap the value, returning an error if decoding was lossy.
    pub fn try_exact(self) -> WPResult<V> {
        if self.is_lossy() {
            return Err(WordpairError::LossyDecode {
                replacements: self.replacements,
            });
        }
        Ok(self.value)
    }

    /// Unwrap the value, lossy or not.
    pub fn into_value(self) -> V {
        self.value
    }
}

impl DecodeResult<String> {
    /// Decode bytes as UTF-8, replacing invalid sequences.
    pub fn from_utf8_lossy(bytes: Vec<u8>) -> Self {
        let (value, replacements) = string_from_utf8_lossy(bytes);
        Self::new(value, replacements)
    }
}

/// The result of decoding a batch of token sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchDecodeResult<V>
where
    V: Debug,
{
    /// The per-item results.
    pub results: Vec<DecodeResult<V>>,
}

impl<V> From<Vec<DecodeResult<V>>> for BatchDecodeResult<V>
where
    V: Debug,
{
    fn from(results: Vec<DecodeResult<V>>) -> Self {
        Self { results }
    }
}

impl<V> BatchDecodeResult<V>
where
    V: Debug,
{
    /// Was any item decoded lossily?
    pub fn is_lossy(&self) -> bool {
        self.results.iter().any(|r| r.is_lossy())
    }

    /// Unwrap the values, returning an error if any item was lossy.
    pub fn try_exact(self) -> WPResult<Vec<V>> {
        self.results.into_iter().map(|r| r.try_exact()).collect()
    }

    /// Unwrap the values, lossy or not.
    pub fn into_values(self) -> Vec<V> {
        self.results.into_iter().map(|r| r.value).collect()
    }
}
