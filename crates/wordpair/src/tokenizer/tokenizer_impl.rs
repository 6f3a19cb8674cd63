use crate::{
    TokenDecoder,
    TokenEncoder,
    alloc::{string::String, vec::Vec},
    decoders::{BatchDecodeResult, DecodeResult, SlabIndexDecoder},
    encoders::MergeReplayEncoder,
    errors::WPResult,
    training::{BinaryPairVocabTrainerOptions, TrainResults},
    types::TokenType,
    vocab::{MergeTable, TokenSpanVocab},
};

/// Byte Pair Encoding Tokenizer.
///
/// Combines:
///  * a [`MergeReplayEncoder`] over the learned [`MergeTable`], and
///  * a [`SlabIndexDecoder`] over the derived [`TokenSpanVocab`].
///
/// A new tokenizer has no merges: it encodes text to its bytes.
/// [`Tokenizer::train`] replaces both tables; encode and decode only read them,
/// so a trained tokenizer may be shared across threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tokenizer<T: TokenType = u32> {
    encoder: MergeReplayEncoder<T>,
    decoder: SlabIndexDecoder<T>,
}

impl<T: TokenType> Tokenizer<T> {
    /// Create an untrained tokenizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer from a merge table.
    ///
    /// The vocabulary is derived from the merges.
    pub fn from_merge_table(merges: MergeTable<T>) -> WPResult<Self> {
        let decoder = SlabIndexDecoder::from_merge_table(&merges)?;
        Ok(Self {
            encoder: MergeReplayEncoder::new(merges),
            decoder,
        })
    }

    /// Train on `text`, learning up to ``vocab_size - 256`` merges.
    ///
    /// Replaces any previously learned merges.
    ///
    /// ## Arguments
    /// * `text` - the training text.
    /// * `vocab_size` - the target vocabulary size; must be >= 256.
    /// * `verbose` - log every merge at `info` level.
    ///
    /// ## Returns
    /// [`crate::WordpairError::VocabSizeTooSmall`] if `vocab_size < 256`;
    /// the tokenizer is unchanged on error.
    pub fn train(
        &mut self,
        text: &str,
        vocab_size: usize,
        verbose: bool,
    ) -> WPResult<()> {
        let options = BinaryPairVocabTrainerOptions::new(vocab_size).with_verbose(verbose);
        self.train_with_options(text, options).map(|_| ())
    }

    /// Train on `text` with explicit trainer options.
    ///
    /// ## Returns
    /// The training text as the trainer left it: fully merged.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn train_with_options(
        &mut self,
        text: &str,
        options: BinaryPairVocabTrainerOptions,
    ) -> WPResult<Vec<T>> {
        let TrainResults { merges, tokens } = options.init::<usize>().train::<T>(text)?;
        *self = Self::from_merge_table(merges)?;
        Ok(tokens)
    }

    /// Encode text into tokens.
    pub fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        let mut tokens = Vec::with_capacity(text.len() / 2);
        self.encoder.encode_append(text, &mut tokens);
        tokens
    }

    /// Decode tokens into text.
    ///
    /// Invalid UTF-8 sequences are replaced with `U+FFFD`;
    /// see [`TokenDecoder::try_decode_to_string`] to detect that.
    ///
    /// ## Returns
    /// [`crate::WordpairError::InvalidTokenId`] for any token outside the vocabulary.
    pub fn decode(
        &self,
        tokens: &[T],
    ) -> WPResult<String> {
        self.decoder
            .try_decode_to_string(tokens)
            .map(DecodeResult::into_value)
    }

    /// Get the learned merges.
    pub fn merges(&self) -> &MergeTable<T> {
        self.encoder.merges()
    }

    /// Get the token to bytes vocabulary.
    pub fn vocab(&self) -> &TokenSpanVocab<T> {
        self.decoder.span_vocab()
    }

    /// The current vocabulary size: ``256 + merges().len()``.
    pub fn vocab_size(&self) -> usize {
        self.vocab().len()
    }

    /// Get the underlying encoder.
    pub fn encoder(&self) -> &MergeReplayEncoder<T> {
        &self.encoder
    }

    /// Get the underlying decoder.
    pub fn decoder(&self) -> &SlabIndexDecoder<T> {
        &self.decoder
    }
}

impl<T: TokenType> TokenEncoder<T> for Tokenizer<T> {
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> WPResult<()> {
        self.encoder.try_encode_append(text, tokens)
    }
}

impl<T: TokenType> TokenDecoder<T> for Tokenizer<T> {
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> WPResult<()> {
        self.decoder.try_decode_append(tokens, buf)
    }

    fn predicted_byte_buffer_size(
        &self,
        tokens: &[T],
    ) -> usize {
        self.decoder.predicted_byte_buffer_size(tokens)
    }

    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> WPResult<BatchDecodeResult<String>> {
        self.decoder.try_decode_batch_to_strings(batch)
    }
}
