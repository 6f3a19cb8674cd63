//! # Slab Index Decoder

use crate::{
    alloc::vec::Vec,
    decoders::TokenDecoder,
    errors::{WPResult, WordpairError},
    types::TokenType,
    vocab::{MergeTable, TokenSpanVocab},
};

/// The default expected bytes/token ratio.
pub const DEFAULT_BYTES_PER_TOKEN: f32 = 4.0;

/// A [`TokenDecoder<T>`] over the dense [`TokenSpanVocab`] slab index.
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `decoder`.
#[derive(Debug, Clone, PartialEq)]
pub struct SlabIndexDecoder<T: TokenType> {
    span_vocab: TokenSpanVocab<T>,

    expected_bytes_per_token: f32,
}

impl<T: TokenType> Default for SlabIndexDecoder<T> {
    fn default() -> Self {
        Self::new(TokenSpanVocab::default())
    }
}

impl<T: TokenType> SlabIndexDecoder<T> {
    /// Build a [`SlabIndexDecoder`] for a [`MergeTable`].
    pub fn from_merge_table(merges: &MergeTable<T>) -> WPResult<Self> {
        Ok(Self::new(TokenSpanVocab::from_merge_table(merges)?))
    }

    /// Creates a new Decoder.
    ///
    /// ## Arguments
    /// * `span_vocab` - The token to span mapping.
    pub fn new(span_vocab: TokenSpanVocab<T>) -> Self {
        Self {
            span_vocab,
            expected_bytes_per_token: DEFAULT_BYTES_PER_TOKEN,
        }
    }

    /// Get the token to span mapping.
    pub fn span_vocab(&self) -> &TokenSpanVocab<T> {
        &self.span_vocab
    }

    /// Get the expected bytes per token.
    pub fn expected_bytes_per_token(&self) -> f32 {
        self.expected_bytes_per_token
    }

    /// Sets the expected bytes per token.
    ///
    /// This is used to bias the capacity of the output buffer in `try_decode_to_bytes`.
    pub fn with_expected_bytes_per_token(
        mut self,
        expected: f32,
    ) -> Self {
        self.expected_bytes_per_token = expected;
        self
    }
}

impl<T: TokenType> TokenDecoder<T> for SlabIndexDecoder<T> {
    fn predicted_byte_buffer_size(
        &self,
        tokens: &[T],
    ) -> usize {
        (tokens.len() as f32 * 1.1 * self.expected_bytes_per_token) as usize
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens, buf)))]
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> WPResult<()> {
        for &t in tokens {
            let Some(span) = self.span_vocab.lookup_span(t) else {
                return Err(WordpairError::InvalidTokenId {
                    token: t.to_u64().unwrap_or(u64::MAX),
                    vocab_size: self.span_vocab.len(),
                });
            };
            buf.extend_from_slice(span);
        }
        Ok(())
    }
}
