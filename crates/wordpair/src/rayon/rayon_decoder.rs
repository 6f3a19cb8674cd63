//! # Parallel Decoder

use core::marker::PhantomData;

use crate::{
    alloc::{string::String, vec::Vec},
    decoders::{BatchDecodeResult, TokenDecoder},
    errors::WPResult,
    types::TokenType,
};

/// Batch-Level Parallel Decoder Wrapper.
///
/// Enables ``rayon`` decoding of batches.
#[derive(Debug, Clone)]
pub struct ParallelRayonDecoder<T: TokenType, D: TokenDecoder<T>> {
    /// Wrapped decoder.
    pub inner: D,

    _marker: PhantomData<T>,
}

impl<T, D> ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    /// Create a new parallel token decoder.
    ///
    /// ## Arguments
    /// * `inner` - The token decoder to wrap.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, D> TokenDecoder<T> for ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> WPResult<()> {
        self.inner.try_decode_append(tokens, buf)
    }

    fn predicted_byte_buffer_size(
        &self,
        tokens: &[T],
    ) -> usize {
        self.inner.predicted_byte_buffer_size(tokens)
    }

    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[T]],
    ) -> WPResult<Vec<Vec<u8>>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|tokens| self.inner.try_decode_to_bytes(tokens))
            .collect()
    }

    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> WPResult<BatchDecodeResult<String>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|tokens| self.inner.try_decode_to_string(tokens))
            .collect::<WPResult<Vec<_>>>()
            .map(BatchDecodeResult::from)
    }
}
