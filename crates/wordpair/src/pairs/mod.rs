//! # Adjacent Pair Tools
//!
//! The two primitives every BPE step is built from:
//! * [`count_pairs`] - frequency counts of adjacent ``(T, T)`` pairs.
//! * [`merge_pair`] - collapse every non-overlapping occurrence of a pair.

mod pair_counts;
mod pair_merge;

#[doc(inline)]
pub use pair_counts::{PairCountMap, PairRank, apply_pair_delta, count_pairs, top_pair};
#[doc(inline)]
pub use pair_merge::{merge_pair, merge_pair_cb, merge_pair_inplace};
