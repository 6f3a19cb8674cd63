//! # Parallel Encoder

use core::marker::PhantomData;

use crate::{alloc::vec::Vec, encoders::TokenEncoder, errors::WPResult, types::TokenType};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches.
#[derive(Debug, Clone)]
pub struct ParallelRayonEncoder<T: TokenType, E: TokenEncoder<T>> {
    /// Inner encoder.
    pub inner: E,

    _marker: PhantomData<T>,
}

impl<T, E> ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The token encoder to wrap.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, E> TokenEncoder<T> for ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> WPResult<()> {
        self.inner.try_encode_append(text, tokens)
    }

    fn try_encode_batch(
        &self,
        batch: &[&str],
    ) -> WPResult<Vec<Vec<T>>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|text| self.inner.try_encode(text))
            .collect()
    }
}
