//! # Pair Merger

use crate::{
    alloc::vec::Vec,
    types::{Pair, TokenType},
};

const DEC: i32 = -1;
const INC: i32 = 1;

/// Merge all non-overlapping occurrences of `pair -> replacement`, in place.
///
/// Scans left to right; a match consumes both tokens, so of two
/// overlapping occurrences only the leftmost is merged.
///
/// # Arguments
/// * `tokens` - the buffer to rewrite.
/// * `pair` - the pair to merge.
/// * `replacement` - the token to replace `pair` with.
/// * `on_merge` - a callback function to invoke for each incremental pair delta.
///   The function is called with:
///   - `pair` - the adjacent pair whose count changed.
///   - `delta` - the pair count delta: `+1` for an added pair, `-1` for a removed pair.
///
/// # Returns
/// The number of merges made.
pub fn merge_pair_cb<T, F>(
    tokens: &mut Vec<T>,
    pair: Pair<T>,
    replacement: T,
    on_merge: &mut F,
) -> usize
where
    T: TokenType,
    F: FnMut(Pair<T>, i32),
{
    let (a, b) = pair;
    let n = tokens.len();

    if n < 2 {
        return 0;
    }

    // `write <= read` always holds; `tokens[..write]` is the output so far.
    let mut write = 0;
    let mut read = 0;
    let mut merges = 0;

    while read < n {
        let current = tokens[read];

        if read + 1 < n && current == a && tokens[read + 1] == b {
            // Rewrite the previous pair?
            if write > 0 {
                let x = tokens[write - 1];
                on_merge((x, a), DEC);
                on_merge((x, replacement), INC);
            }

            // Remove the current pair.
            on_merge(pair, DEC);

            // Rewrite the next pair?
            if read + 2 < n {
                let y = tokens[read + 2];
                on_merge((b, y), DEC);
                on_merge((replacement, y), INC);
            }

            tokens[write] = replacement;
            merges += 1;

            // Skip 'a' and 'b'.
            read += 2;
        } else {
            tokens[write] = current;
            read += 1;
        }
        write += 1;
    }

    tokens.truncate(write);
    merges
}

/// Merge all non-overlapping occurrences of `pair -> replacement`, in place.
///
/// See [`merge_pair_cb`].
///
/// # Returns
/// The number of merges made.
#[inline]
pub fn merge_pair_inplace<T: TokenType>(
    tokens: &mut Vec<T>,
    pair: Pair<T>,
    replacement: T,
) -> usize {
    merge_pair_cb(tokens, pair, replacement, &mut |_, _| {})
}

/// Merge all non-overlapping occurrences of `pair -> replacement`.
///
/// # Returns
/// A new sequence, no longer than `tokens`.
pub fn merge_pair<T: TokenType>(
    tokens: &[T],
    pair: Pair<T>,
    replacement: T,
) -> Vec<T> {
    let mut merged = tokens.to_vec();
    merge_pair_inplace(&mut merged, pair, replacement);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        alloc::vec,
        pairs::{PairCountMap, apply_pair_delta, count_pairs},
    };

    #[test]
    fn test_merge_pair() {
        assert_eq!(merge_pair(&[1_u32, 2, 3, 1, 2], (1, 2), 256), vec![256, 3, 256]);

        // Trailing unmatched element is kept.
        assert_eq!(merge_pair(&[1_u32, 2, 3], (1, 2), 256), vec![256, 3]);
        assert_eq!(merge_pair(&[3_u32, 1, 2, 1], (1, 2), 256), vec![3, 256, 1]);

        // No match.
        assert_eq!(merge_pair(&[5_u32, 6, 7], (1, 2), 256), vec![5, 6, 7]);
    }

    #[test]
    fn test_merge_pair_overlapping() {
        // Leftmost match wins; matches never overlap.
        assert_eq!(merge_pair(&[97_u16, 97, 97], (97, 97), 256), vec![256, 97]);
        assert_eq!(merge_pair(&[97_u16, 97, 97, 97], (97, 97), 256), vec![256, 256]);
    }

    #[test]
    fn test_merge_pair_short() {
        let empty: Vec<u32> = vec![];
        assert_eq!(merge_pair(&empty, (1, 2), 256), empty);
        assert_eq!(merge_pair(&[1_u32], (1, 2), 256), vec![1]);
        assert_eq!(merge_pair(&[1_u32], (1, 1), 256), vec![1]);
    }

    #[test]
    fn test_merge_pair_inplace_count() {
        let mut tokens: Vec<u32> = vec![1, 2, 3, 1, 2, 2, 1];
        assert_eq!(merge_pair_inplace(&mut tokens, (1, 2), 9), 2);
        assert_eq!(tokens, vec![9, 3, 9, 2, 1]);
    }

    #[test]
    fn test_merge_pair_cb() {
        let mut tokens: Vec<u32> = vec![1, 2, 3, 1, 2, 2, 1];
        let mut deltas = vec![];

        merge_pair_cb(&mut tokens, (1, 2), 1, &mut |p, d| {
            deltas.push((p, d));
        });
        assert_eq!(tokens, vec![1, 3, 1, 2, 1]);

        assert_eq!(
            deltas,
            vec![
                // first match
                ((1, 2), -1),
                ((2, 3), -1),
                ((1, 3), 1),
                // second match
                ((3, 1), -1),
                ((3, 1), 1),
                ((1, 2), -1),
                ((2, 2), -1),
                ((1, 2), 1),
            ]
        );
    }

    /// Replaying the deltas must agree with a full recount.
    #[test]
    fn test_merge_deltas_match_recount() {
        let cases: Vec<(Vec<u32>, (u32, u32))> = vec![
            (vec![97, 97, 97], (97, 97)),
            (vec![97, 97, 97, 97], (97, 97)),
            (vec![1, 2, 1, 2], (1, 2)),
            (vec![2, 1, 2, 1, 2, 3], (1, 2)),
            (vec![97, 97, 97, 98, 100, 97, 97, 97, 98, 97, 99], (97, 97)),
        ];

        for (tokens, pair) in cases {
            let mut pair_counts: PairCountMap<u32, usize> = count_pairs(&tokens);

            let mut merged = tokens.clone();
            merge_pair_cb(&mut merged, pair, 300, &mut |p, d| {
                apply_pair_delta(&mut pair_counts, p, d)
            });

            let recount: PairCountMap<u32, usize> = count_pairs(&merged);
            assert_eq!(pair_counts, recount, "{tokens:?} merging {pair:?}");
        }
    }
}
