//! # Pair Statistics

use core::cmp::{Ordering, Reverse};

use crate::{
    training::CountType,
    types::{Pair, TokenType, WPHashMap, hash_map_with_capacity},
};

/// A map from [`Pair`] to its occurrence count.
///
/// ## Style Hints
/// Instance names should prefer `pair_counts`.
pub type PairCountMap<T, C> = WPHashMap<Pair<T>, C>;

/// Count every adjacent pair ``(tokens[i], tokens[i + 1])``.
///
/// Overlapping occurrences are all counted: ``[a, a, a]`` has ``(a, a) -> 2``.
///
/// ## Arguments
/// * `tokens` - the token sequence; sequences shorter than 2 yield an empty map.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(tokens)))]
pub fn count_pairs<T, C>(tokens: &[T]) -> PairCountMap<T, C>
where
    T: TokenType,
    C: CountType,
{
    let mut pair_counts: PairCountMap<T, C> = hash_map_with_capacity(tokens.len().min(1 << 16));
    let one = C::one();
    for w in tokens.windows(2) {
        *pair_counts.entry((w[0], w[1])).or_default() += one;
    }
    pair_counts
}

/// Apply a ``+1`` / ``-1`` pair count delta.
///
/// Entries which reach zero are removed, so the map only
/// ever holds live pairs.
pub fn apply_pair_delta<T, C>(
    pair_counts: &mut PairCountMap<T, C>,
    pair: Pair<T>,
    delta: i32,
) where
    T: TokenType,
    C: CountType,
{
    let one = C::one();
    if delta > 0 {
        *pair_counts.entry(pair).or_default() += one;
    } else if delta < 0
        && let Some(count) = pair_counts.get_mut(&pair)
    {
        if *count <= one {
            pair_counts.remove(&pair);
        } else {
            *count -= one;
        }
    }
}

/// A candidate merge: a [`Pair`] and its count.
///
/// Ordered so that `max()` selects the merge to make:
/// highest count first; ties go to the lexicographically smallest pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairRank<T: TokenType, C: CountType> {
    /// The pair to merge.
    pub pair: Pair<T>,

    /// The number of instances of this pair.
    pub count: C,
}

impl<T: TokenType, C: CountType> PairRank<T, C> {
    /// The ranking key.
    ///
    /// Max by count; tie-break to ascending pair order.
    pub fn rank_key(&self) -> (C, Reverse<Pair<T>>) {
        (self.count, Reverse(self.pair))
    }
}

impl<T: TokenType, C: CountType> PartialOrd for PairRank<T, C> {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: TokenType, C: CountType> Ord for PairRank<T, C> {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.rank_key().cmp(&other.rank_key())
    }
}

/// Select the pair to merge next.
///
/// ## Returns
/// The highest ranked [`PairRank`], or `None` when no pair has a non-zero count.
pub fn top_pair<T, C>(pair_counts: &PairCountMap<T, C>) -> Option<PairRank<T, C>>
where
    T: TokenType,
    C: CountType,
{
    let zero = C::zero();
    pair_counts
        .iter()
        .filter(|&(_, &count)| count > zero)
        .map(|(&pair, &count)| PairRank { pair, count })
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        alloc::{vec, vec::Vec},
        support::strings::text_to_byte_tokens,
    };

    fn test_count_pairs<T: TokenType, C: CountType>() {
        let tokens: Vec<T> = text_to_byte_tokens("aaabdaaabac");
        let pair_counts: PairCountMap<T, C> = count_pairs(&tokens);

        let expected: PairCountMap<T, C> = [
            (('a', 'a'), 4), // [aa]abd[aa]abac, a[aa]bda[aa]bac
            (('a', 'b'), 2),
            (('b', 'd'), 1),
            (('d', 'a'), 1),
            (('b', 'a'), 1),
            (('a', 'c'), 1),
        ]
        .into_iter()
        .map(|((a, b), c)| {
            (
                (T::from_u8(a as u8).unwrap(), T::from_u8(b as u8).unwrap()),
                C::from_u32(c).unwrap(),
            )
        })
        .collect();

        assert_eq!(pair_counts, expected);
    }

    #[test]
    fn test_count_pairs_u16_usize() {
        test_count_pairs::<u16, usize>();
    }

    #[test]
    fn test_count_pairs_u32_u64() {
        test_count_pairs::<u32, u64>();
    }

    #[test]
    fn test_count_pairs_short() {
        let empty: PairCountMap<u32, usize> = count_pairs(&[]);
        assert!(empty.is_empty());

        let single: PairCountMap<u32, usize> = count_pairs(&[7]);
        assert!(single.is_empty());

        let double: PairCountMap<u32, usize> = count_pairs(&[7, 8]);
        assert_eq!(double.len(), 1);
        assert_eq!(double[&(7, 8)], 1);
    }

    #[test]
    fn test_apply_pair_delta() {
        let mut pair_counts: PairCountMap<u32, u32> = count_pairs(&[1, 2, 1, 2]);
        assert_eq!(pair_counts[&(1, 2)], 2);

        apply_pair_delta(&mut pair_counts, (1, 2), -1);
        assert_eq!(pair_counts[&(1, 2)], 1);

        apply_pair_delta(&mut pair_counts, (1, 2), -1);
        assert!(!pair_counts.contains_key(&(1, 2)));

        // Removing an absent pair is a no-op.
        apply_pair_delta(&mut pair_counts, (9, 9), -1);
        assert!(!pair_counts.contains_key(&(9, 9)));

        apply_pair_delta(&mut pair_counts, (300, 1), 1);
        assert_eq!(pair_counts[&(300, 1)], 1);
    }

    #[test]
    fn test_pair_rank_ordering() {
        type T = u32;
        type C = u32;

        let r1: PairRank<T, C> = PairRank {
            pair: (1, 2),
            count: 2,
        };
        let r2: PairRank<T, C> = PairRank {
            pair: (2, 1),
            count: 1,
        };
        let r3: PairRank<T, C> = PairRank {
            pair: (2, 2),
            count: 1,
        };

        assert_eq!(r1.cmp(&r1), Ordering::Equal);
        assert_eq!(r1.partial_cmp(&r1), Some(Ordering::Equal));

        // Count dominates.
        assert!(r1 > r2);
        assert!(r1 > r3);

        // Equal counts: the smaller pair wins.
        assert!(r2 > r3);
        assert_eq!(vec![r3, r2].into_iter().max(), Some(r2));
    }

    #[test]
    fn test_top_pair() {
        let pair_counts: PairCountMap<u32, usize> = count_pairs(&text_to_byte_tokens("aaabdaaabac"));
        let top = top_pair(&pair_counts).unwrap();
        assert_eq!(top.pair, (97, 97));
        assert_eq!(top.count, 4);

        let empty: PairCountMap<u32, usize> = Default::default();
        assert_eq!(top_pair(&empty), None);
    }

    #[test]
    fn test_top_pair_tie_break() {
        // (3, 4), (4, 1), (1, 2) all appear once; (1, 2) is smallest.
        let pair_counts: PairCountMap<u32, usize> = count_pairs(&[3, 4, 1, 2]);
        assert_eq!(top_pair(&pair_counts).unwrap().pair, (1, 2));

        // Zero counts are never selected.
        let mut pair_counts: PairCountMap<u32, usize> = Default::default();
        pair_counts.insert((5, 5), 0);
        assert_eq!(top_pair(&pair_counts), None);
    }
}
