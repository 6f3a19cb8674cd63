//! # Ordered Merge Table ``{ (T, T) -> T }``

use core::fmt::Debug;

use crate::{
    alloc::{format, vec::Vec},
    errors::{WPResult, WordpairError},
    types::{Pair, TokenType, WPHashMap, hash_map_with_capacity},
    vocab::validators::U8_SIZE,
};

/// `{ Pair<T> -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `pair_tokens`, or `pair_token_map`.
pub type PairTokenMap<T> = WPHashMap<Pair<T>, T>;

/// The learned merges, in the order they were learned.
///
/// Invariants:
/// * the ``i``-th merge produces token ``256 + i``;
/// * both parents of a merge are smaller than the token it produces;
/// * no pair is merged twice.
///
/// The table is append-only; order is significant, and encoders must
/// replay it front to back.
///
/// ## Style Hints
/// Instance names should prefer `merges`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MergeTable<T: TokenType> {
    /// ``(pair, token)`` in learned order.
    merges: Vec<(Pair<T>, T)>,

    /// Lookup index over `merges`.
    pair_tokens: PairTokenMap<T>,
}

impl<T: TokenType> Debug for MergeTable<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("MergeTable")
            .field("vocab_size", &self.vocab_size())
            .field("merges", &self.merges)
            .finish()
    }
}

impl<T: TokenType> MergeTable<T> {
    /// Create an empty table, with room for `capacity` merges.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            merges: Vec::with_capacity(capacity),
            pair_tokens: hash_map_with_capacity(capacity),
        }
    }

    /// Build a table from ``(pair, token)`` merges, validating each in order.
    ///
    /// ## Arguments
    /// * `merges` - merges in learned order.
    ///
    /// ## Returns
    /// The table, or a [`WordpairError::VocabConflict`] naming the first bad merge.
    pub fn try_from_merges<I>(merges: I) -> WPResult<Self>
    where
        I: IntoIterator<Item = (Pair<T>, T)>,
    {
        let merges = merges.into_iter();
        let mut table = Self::with_capacity(merges.size_hint().0);
        for (pair, token) in merges {
            table.try_push(pair, token)?;
        }
        Ok(table)
    }

    /// The number of merges.
    pub fn len(&self) -> usize {
        self.merges.len()
    }

    /// Are there no merges?
    pub fn is_empty(&self) -> bool {
        self.merges.is_empty()
    }

    /// The size of the vocabulary these merges describe: ``256 + len()``.
    pub fn vocab_size(&self) -> usize {
        U8_SIZE + self.merges.len()
    }

    /// The token the next merge will produce.
    ///
    /// ## Returns
    /// ``256 + len()``, or [`WordpairError::VocabSizeOverflow`] if `T` can't hold it.
    pub fn next_token(&self) -> WPResult<T> {
        let size = self.vocab_size();
        T::from_usize(size).ok_or(WordpairError::VocabSizeOverflow { size: size + 1 })
    }

    /// Append a merge of `pair`, allocating the next token.
    ///
    /// ## Returns
    /// The new token.
    pub fn push(
        &mut self,
        pair: Pair<T>,
    ) -> WPResult<T> {
        let token = self.next_token()?;
        self.try_push(pair, token)?;
        Ok(token)
    }

    /// Append a merge ``pair -> token``, checking the table invariants.
    pub fn try_push(
        &mut self,
        pair: Pair<T>,
        token: T,
    ) -> WPResult<()> {
        let expected = self.next_token()?;
        if token != expected {
            return Err(WordpairError::VocabConflict(format!(
                "Merge {pair:?} -> {token:?}: expected token {expected:?}"
            )));
        }
        for parent in [pair.0, pair.1] {
            if parent >= token {
                return Err(WordpairError::VocabConflict(format!(
                    "Merge {pair:?} -> {token:?}: parent {parent:?} is not yet defined"
                )));
            }
        }
        if let Some(prior) = self.pair_tokens.get(&pair) {
            return Err(WordpairError::VocabConflict(format!(
                "Merge {pair:?} -> {token:?}: pair already merged into {prior:?}"
            )));
        }

        self.merges.push((pair, token));
        self.pair_tokens.insert(pair, token);
        Ok(())
    }

    /// Looks up the token a pair merges into.
    pub fn lookup_pair(
        &self,
        pair: &Pair<T>,
    ) -> Option<T> {
        self.pair_tokens.get(pair).copied()
    }

    /// The merges as a slice, in learned order.
    pub fn as_slice(&self) -> &[(Pair<T>, T)] {
        &self.merges
    }

    /// Iterate over the merges, in learned order.
    pub fn iter(&self) -> impl Iterator<Item = (Pair<T>, T)> + '_ {
        self.merges.iter().copied()
    }

    /// Get the map of pairs.
    ///
    /// This map carries no order; see [`Self::iter`].
    pub fn pair_tokens(&self) -> &PairTokenMap<T> {
        &self.pair_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::vec;

    #[test]
    fn test_empty_table() {
        type T = u32;
        let merges: MergeTable<T> = MergeTable::default();

        assert!(merges.is_empty());
        assert_eq!(merges.len(), 0);
        assert_eq!(merges.vocab_size(), 256);
        assert_eq!(merges.next_token(), Ok(256));
        assert_eq!(merges.lookup_pair(&(97, 97)), None);
    }

    #[test]
    fn test_push() {
        type T = u16;
        let mut merges: MergeTable<T> = MergeTable::with_capacity(3);

        assert_eq!(merges.push((97, 97)), Ok(256));
        assert_eq!(merges.push((256, 97)), Ok(257));
        assert_eq!(merges.push((257, 98)), Ok(258));

        assert_eq!(merges.len(), 3);
        assert_eq!(merges.vocab_size(), 259);
        assert_eq!(
            merges.iter().collect::<Vec<_>>(),
            vec![((97, 97), 256), ((256, 97), 257), ((257, 98), 258)]
        );
        assert_eq!(merges.as_slice()[1], ((256, 97), 257));
        assert_eq!(merges.lookup_pair(&(256, 97)), Some(257));
        assert_eq!(merges.pair_tokens().len(), 3);

        assert_eq!(
            format!("{merges:?}"),
            "MergeTable { vocab_size: 259, merges: [((97, 97), 256), ((256, 97), 257), ((257, 98), 258)] }"
        );
    }

    #[test]
    fn test_try_from_merges() {
        type T = u32;

        let merges =
            MergeTable::<T>::try_from_merges(vec![((1, 2), 256), ((256, 3), 257)]).unwrap();
        assert_eq!(merges.len(), 2);

        // Gap in the token numbering.
        assert!(matches!(
            MergeTable::<T>::try_from_merges(vec![((1, 2), 257)]),
            Err(WordpairError::VocabConflict(_))
        ));

        // Forward reference.
        assert!(matches!(
            MergeTable::<T>::try_from_merges(vec![((1, 257), 256), ((2, 3), 257)]),
            Err(WordpairError::VocabConflict(_))
        ));

        // Self reference.
        assert!(matches!(
            MergeTable::<T>::try_from_merges(vec![((256, 1), 256)]),
            Err(WordpairError::VocabConflict(_))
        ));

        // Duplicate pair.
        assert!(matches!(
            MergeTable::<T>::try_from_merges(vec![((1, 2), 256), ((1, 2), 257)]),
            Err(WordpairError::VocabConflict(_))
        ));
    }

    #[test]
    fn test_next_token_overflow() {
        type T = u8;
        let merges: MergeTable<T> = MergeTable::default();
        assert_eq!(
            merges.next_token(),
            Err(WordpairError::VocabSizeOverflow { size: 257 })
        );
    }
}
