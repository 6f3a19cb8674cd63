//! # Error Types

use crate::alloc::string::String;

/// Errors from wordpair operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordpairError {
    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocab size is below the minimum (256, the u8 space).
    #[error("vocab size ({size}) must be >= 256")]
    VocabSizeTooSmall {
        /// The vocab size that was too small.
        size: usize,
    },

    /// A token ID outside of ``[0, vocab_size)`` was passed to decode.
    #[error("invalid token id {token}: vocab size is {vocab_size}")]
    InvalidTokenId {
        /// The offending token, widened to `u64`.
        token: u64,

        /// The size of the vocabulary it was checked against.
        vocab_size: usize,
    },

    /// Merge table data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Decoded bytes were not valid UTF-8.
    ///
    /// Only raised by the strict accessors; the default decode path
    /// substitutes `U+FFFD` and completes.
    #[error("lossy decode: {replacements} invalid UTF-8 sequences replaced")]
    LossyDecode {
        /// The number of replacement characters substituted.
        replacements: usize,
    },
}

/// Result type for wordpair operations.
pub type WPResult<T> = core::result::Result<T, WordpairError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::string::ToString;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            WordpairError::VocabSizeTooSmall { size: 100 }.to_string(),
            "vocab size (100) must be >= 256"
        );
        assert_eq!(
            WordpairError::InvalidTokenId {
                token: 99999,
                vocab_size: 259
            }
            .to_string(),
            "invalid token id 99999: vocab size is 259"
        );
        assert_eq!(
            WordpairError::LossyDecode { replacements: 2 }.to_string(),
            "lossy decode: 2 invalid UTF-8 sequences replaced"
        );
    }
}
