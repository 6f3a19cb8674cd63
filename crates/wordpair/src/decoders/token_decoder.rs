//! # Token Decoder Trait

use crate::{
    alloc::{string::String, vec::Vec},
    decoders::decode_results::{BatchDecodeResult, DecodeResult},
    errors::WPResult,
    types::TokenType,
};

/// Trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decodes tokens, appending their bytes to a target buffer.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    /// * `buf` - The target byte buffer.
    ///
    /// ## Returns
    /// An error if any token is unknown; `buf` may then hold a partial prefix.
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> WPResult<()>;

    /// Predict the capacity needed when pre-allocating output buffers.
    fn predicted_byte_buffer_size(
        &self,
        tokens: &[T],
    ) -> usize {
        tokens.len() * 4
    }

    /// Decodes tokens into bytes.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> WPResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.predicted_byte_buffer_size(tokens));
        self.try_decode_append(tokens, &mut buf)?;
        Ok(buf)
    }

    /// Decodes a batch of tokens into bytes.
    ///
    /// ## Arguments
    /// * `batch` - A batch of tokens.
    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[T]],
    ) -> WPResult<Vec<Vec<u8>>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_bytes(tokens))
            .collect()
    }

    /// Decodes tokens into a string.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> WPResult<DecodeResult<String>> {
        self.try_decode_to_bytes(tokens)
            .map(DecodeResult::from_utf8_lossy)
    }

    /// Decodes a batch of tokens into strings.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences.
    ///
    /// ## Arguments
    /// * `batch` - A batch of tokens.
    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> WPResult<BatchDecodeResult<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect::<WPResult<Vec<_>>>()
            .map(BatchDecodeResult::from)
    }
}
