//! # Vocabulary
//!
//! A trained vocabulary is two views of the same merges:
//! * [`MergeTable`] - the ordered ``{ (T, T) -> T }`` merge rules, replayed by encoders.
//! * [`TokenSpanVocab`] - the ``{ T -> Vec<u8> }`` expansions, read by decoders.
//!
//! Token IDs ``0..=255`` are the raw bytes; every merged token is numbered
//! ``256 + i`` for the ``i``-th merge, and only refers to smaller tokens.

pub mod merge_table;
pub mod span_vocab;
pub mod validators;

#[doc(inline)]
pub use merge_table::{MergeTable, PairTokenMap};
#[doc(inline)]
pub use span_vocab::TokenSpanVocab;
#[doc(inline)]
pub use validators::{U8_SIZE, try_vocab_size};
