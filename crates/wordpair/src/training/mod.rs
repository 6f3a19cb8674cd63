//! # Vocabulary Training
//!
//! Learns a [`crate::vocab::MergeTable`] from a single text.
//!
//! The text is taken as its raw UTF-8 bytes; there is no pre-tokenization,
//! so merges may cross word (and codepoint) boundaries.
//!
//! Each step merges the most frequent adjacent pair; ties go to the
//! lexicographically smallest pair, so training is reproducible.
//! The trainer has no parallelism.
//!
//! ```rust
//! use wordpair::training::BinaryPairVocabTrainerOptions;
//!
//! let results = BinaryPairVocabTrainerOptions::new(259)
//!     .init::<usize>()
//!     .train::<u32>("aaabdaaabac")
//!     .unwrap();
//!
//! assert_eq!(results.merges.len(), 3);
//! assert_eq!(results.merges.lookup_pair(&(97, 97)), Some(256));
//! ```

mod bpe_trainer;
mod training_types;

#[doc(inline)]
pub use bpe_trainer::{BinaryPairVocabTrainer, BinaryPairVocabTrainerOptions, TrainResults};
#[doc(inline)]
pub use training_types::CountType;
