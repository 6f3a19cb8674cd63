//! # Token Span Vocabulary ``{ T -> Vec<u8> }``

use core::{fmt::Debug, marker::PhantomData, ops::Range};

use crate::{
    alloc::{format, vec::Vec},
    errors::{WPResult, WordpairError},
    types::{Pair, TokenType},
    vocab::{merge_table::MergeTable, validators::U8_SIZE},
};

/// The byte expansion of every token, in a dense slab.
///
/// `index[t]` is the slab range holding the bytes of token `t`;
/// tokens ``0..=255`` are the single bytes, and each merged token is
/// the concatenation of its two parents.
///
/// Merged tokens may only refer to smaller tokens, so the arena is filled
/// in increasing token order, copying each parent's bytes once.
///
/// ## Style Hints
/// Instance names should prefer `span_vocab`.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenSpanVocab<T: TokenType> {
    index: Vec<Range<usize>>,
    slab: Vec<u8>,
    _marker: PhantomData<T>,
}

impl<T: TokenType> Debug for TokenSpanVocab<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("TokenSpanVocab")
            .field("vocab_size", &self.len())
            .field("slab_bytes", &self.slab.len())
            .finish()
    }
}

impl<T: TokenType> Default for TokenSpanVocab<T> {
    fn default() -> Self {
        Self::with_capacity(0, 0)
    }
}

impl<T: TokenType> TokenSpanVocab<T> {
    /// Create a byte-only vocabulary.
    ///
    /// ## Arguments
    /// * `merge_capacity` - expected number of merges to follow.
    /// * `slab_capacity` - expected bytes of merged spans to follow.
    pub fn with_capacity(
        merge_capacity: usize,
        slab_capacity: usize,
    ) -> Self {
        let mut index = Vec::with_capacity(U8_SIZE + merge_capacity);
        let mut slab = Vec::with_capacity(U8_SIZE + slab_capacity);
        for byte in 0..=u8::MAX {
            index.push(slab.len()..slab.len() + 1);
            slab.push(byte);
        }
        Self {
            index,
            slab,
            _marker: PhantomData,
        }
    }

    /// Build the vocabulary for a [`MergeTable`].
    ///
    /// Merges are expanded in table order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(merges)))]
    pub fn from_merge_table(merges: &MergeTable<T>) -> WPResult<Self> {
        let mut vocab = Self::with_capacity(merges.len(), merges.len() * 4);
        for (pair, token) in merges.iter() {
            vocab.push_merge(pair, token)?;
        }
        Ok(vocab)
    }

    /// Extend the vocabulary with one merge: ``span[token] = span[a] ++ span[b]``.
    ///
    /// ## Arguments
    /// * `pair` - the parents ``(a, b)``; both must already be in the vocabulary.
    /// * `token` - the merged token; must equal ``len()``.
    pub fn push_merge(
        &mut self,
        pair: Pair<T>,
        token: T,
    ) -> WPResult<()> {
        if token.to_usize() != Some(self.len()) {
            return Err(WordpairError::VocabConflict(format!(
                "Merge {pair:?} -> {token:?}: expected token {}",
                self.len()
            )));
        }

        let (a, b) = pair;
        let (Some(left), Some(right)) = (self.span_range(a), self.span_range(b)) else {
            return Err(WordpairError::VocabConflict(format!(
                "Merge {pair:?} -> {token:?}: parent is not yet defined"
            )));
        };

        let start = self.slab.len();
        self.slab.extend_from_within(left);
        self.slab.extend_from_within(right);
        self.index.push(start..self.slab.len());
        Ok(())
    }

    /// The number of tokens in the vocabulary.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Gets the highest token.
    pub fn max_token(&self) -> T {
        T::from_usize(self.len() - 1).unwrap_or_else(T::max_value)
    }

    fn span_range(
        &self,
        token: T,
    ) -> Option<Range<usize>> {
        let idx = token.to_usize()?;
        self.index.get(idx).cloned()
    }

    /// Lookup the bytes of a token.
    ///
    /// ## Returns
    /// The byte span, or `None` if `token` is not in ``[0, len())``.
    #[inline]
    pub fn lookup_span(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.span_range(token).map(|range| &self.slab[range])
    }

    /// Iterate over ``(token, span)`` for every token, in token order.
    pub fn spans(&self) -> impl Iterator<Item = (T, &[u8])> + '_ {
        self.index
            .iter()
            .enumerate()
            .filter_map(|(idx, range)| Some((T::from_usize(idx)?, &self.slab[range.clone()])))
    }

    /// Total bytes held by the slab.
    pub fn slab_len(&self) -> usize {
        self.slab.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::vec;

    #[test]
    fn test_byte_vocab() {
        type T = u32;
        let span_vocab: TokenSpanVocab<T> = Default::default();

        assert_eq!(span_vocab.len(), 256);
        assert_eq!(span_vocab.max_token(), 255);
        assert_eq!(span_vocab.slab_len(), 256);

        for byte in 0..=u8::MAX {
            assert_eq!(span_vocab.lookup_span(byte as T), Some(&[byte][..]));
        }
        assert_eq!(span_vocab.lookup_span(256), None);

        assert_eq!(
            format!("{span_vocab:?}"),
            "TokenSpanVocab { vocab_size: 256, slab_bytes: 256 }"
        );
    }

    #[test]
    fn test_from_merge_table() {
        type T = u16;

        let merges = MergeTable::<T>::try_from_merges(vec![
            ((b'a' as T, b'a' as T), 256), // "aa"
            ((256, b'a' as T), 257),       // "aaa"
            ((257, b'b' as T), 258),       // "aaab"
            ((258, 256), 259),             // "aaabaa"
        ])
        .unwrap();

        let span_vocab = TokenSpanVocab::from_merge_table(&merges).unwrap();
        assert_eq!(span_vocab.len(), merges.vocab_size());
        assert_eq!(span_vocab.max_token(), 259);

        assert_eq!(span_vocab.lookup_span(256), Some(&b"aa"[..]));
        assert_eq!(span_vocab.lookup_span(257), Some(&b"aaa"[..]));
        assert_eq!(span_vocab.lookup_span(258), Some(&b"aaab"[..]));
        assert_eq!(span_vocab.lookup_span(259), Some(&b"aaabaa"[..]));
        assert_eq!(span_vocab.lookup_span(260), None);

        // vocab[t] == vocab[a] ++ vocab[b], for every merge.
        for ((a, b), t) in merges.iter() {
            let mut expected = span_vocab.lookup_span(a).unwrap().to_vec();
            expected.extend_from_slice(span_vocab.lookup_span(b).unwrap());
            assert_eq!(span_vocab.lookup_span(t).unwrap(), &expected[..]);
        }

        let spans: Vec<(T, &[u8])> = span_vocab.spans().skip(256).collect();
        assert_eq!(
            spans,
            vec![
                (256, &b"aa"[..]),
                (257, &b"aaa"[..]),
                (258, &b"aaab"[..]),
                (259, &b"aaabaa"[..]),
            ]
        );
    }

    #[test]
    fn test_push_merge_incremental() {
        type T = u32;
        let mut span_vocab: TokenSpanVocab<T> = Default::default();

        span_vocab.push_merge((104, 105), 256).unwrap(); // "hi"
        assert_eq!(span_vocab.lookup_span(256), Some(&b"hi"[..]));

        // Wrong token number.
        assert!(matches!(
            span_vocab.push_merge((1, 2), 300),
            Err(WordpairError::VocabConflict(_))
        ));

        // Undefined parent.
        assert!(matches!(
            span_vocab.push_merge((1, 257), 257),
            Err(WordpairError::VocabConflict(_))
        ));

        // Failed pushes leave the vocab untouched.
        assert_eq!(span_vocab.len(), 257);
        span_vocab.push_merge((256, 256), 257).unwrap();
        assert_eq!(span_vocab.lookup_span(257), Some(&b"hihi"[..]));
    }
}
