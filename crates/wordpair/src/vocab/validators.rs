//! Validators for various configuration options.
use crate::{
    errors::{WPResult, WordpairError},
    types::TokenType,
};

/// The size of the u8 space.
pub const U8_SIZE: usize = u8::MAX as usize + 1;

/// Validates and returns the vocabulary size.
///
/// The size must be at least the size of the u8 space,
/// and every token below it must be representable as `T`.
pub fn try_vocab_size<T: TokenType>(vocab_size: usize) -> WPResult<usize> {
    if vocab_size < U8_SIZE {
        Err(WordpairError::VocabSizeTooSmall { size: vocab_size })
    } else if T::from_usize(vocab_size - 1).is_none() {
        Err(WordpairError::VocabSizeOverflow { size: vocab_size })
    } else {
        Ok(vocab_size)
    }
}
