//! # Merge Replay Encoder
//!
//! Replays every learned merge, in learned order, over the byte tokens.

use crate::{
    alloc::vec::Vec,
    encoders::TokenEncoder,
    errors::WPResult,
    pairs::merge_pair_inplace,
    support::strings::text_to_byte_tokens,
    types::TokenType,
    vocab::MergeTable,
};

/// A [`TokenEncoder`] which replays a [`MergeTable`] front to back.
///
/// Each merge collapses all of its occurrences before the next merge is
/// applied; this reproduces the sequence training produced on its own text.
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `encoder`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReplayEncoder<T: TokenType> {
    merges: MergeTable<T>,
}

impl<T: TokenType> MergeReplayEncoder<T> {
    /// Create an encoder for a merge table.
    pub fn new(merges: MergeTable<T>) -> Self {
        Self { merges }
    }

    /// Get the merge table.
    pub fn merges(&self) -> &MergeTable<T> {
        &self.merges
    }

    /// Encode text, appending to a target buffer.
    ///
    /// Infallible for any `&str`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, tokens)))]
    pub fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        let mut span: Vec<T> = text_to_byte_tokens(text);
        for (pair, token) in self.merges.iter() {
            if span.len() < 2 {
                break;
            }
            merge_pair_inplace(&mut span, pair, token);
        }

        if tokens.is_empty() {
            *tokens = span;
        } else {
            tokens.extend_from_slice(&span);
        }
    }
}

impl<T: TokenType> TokenEncoder<T> for MergeReplayEncoder<T> {
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> WPResult<()> {
        self.encode_append(text, tokens);
        Ok(())
    }
}
