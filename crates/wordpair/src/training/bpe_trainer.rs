//! # Vocab Trainer

use core::marker::PhantomData;

use crate::{
    alloc::vec::Vec,
    errors::WPResult,
    pairs::{PairCountMap, PairRank, apply_pair_delta, count_pairs, merge_pair_cb, top_pair},
    support::strings::text_to_byte_tokens,
    training::CountType,
    types::TokenType,
    vocab::{MergeTable, U8_SIZE, try_vocab_size},
};

/// Options for [`BinaryPairVocabTrainer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryPairVocabTrainerOptions {
    /// The target vocab size; ``vocab_size - 256`` merges are requested.
    pub vocab_size: usize,

    /// Report every merge at `info` level.
    pub verbose: bool,
}

impl BinaryPairVocabTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `vocab_size` - The target vocabulary size.
    pub fn new(vocab_size: usize) -> Self {
        Self {
            vocab_size,
            verbose: false,
        }
    }

    /// Sets the vocab size.
    ///
    /// ## Arguments
    /// * `vocab_size` - The desired vocabulary size; must be >= 256 (the size of the u8 space).
    pub fn with_vocab_size(
        self,
        vocab_size: usize,
    ) -> Self {
        Self { vocab_size, ..self }
    }

    /// Sets per-merge progress reporting.
    pub fn with_verbose(
        self,
        verbose: bool,
    ) -> Self {
        Self { verbose, ..self }
    }

    /// The number of merges these options request.
    ///
    /// Zero when `vocab_size` is below 256; such options are rejected by training.
    pub fn num_merges(&self) -> usize {
        self.vocab_size.saturating_sub(U8_SIZE)
    }

    /// Initializes a [`BinaryPairVocabTrainer`] from these options.
    pub fn init<C: CountType>(self) -> BinaryPairVocabTrainer<C> {
        BinaryPairVocabTrainer::new(self)
    }
}

/// Basic binary pair train results.
#[derive(Debug, Clone)]
pub struct TrainResults<T: TokenType> {
    /// The learned merges, in learned order.
    pub merges: MergeTable<T>,

    /// The training text, fully merged.
    pub tokens: Vec<T>,
}

/// Trainer for learning binary pair encodings.
///
/// # Parameters
/// * `C` - the type used to store pair counts.
#[derive(Debug, Clone)]
pub struct BinaryPairVocabTrainer<C: CountType = usize> {
    /// Trainer options.
    pub options: BinaryPairVocabTrainerOptions,

    _marker: PhantomData<C>,
}

impl<C: CountType> BinaryPairVocabTrainer<C> {
    /// Initializes a [`BinaryPairVocabTrainer`].
    pub fn new(options: BinaryPairVocabTrainerOptions) -> Self {
        Self {
            options,
            _marker: PhantomData,
        }
    }

    /// Learn up to ``vocab_size - 256`` merges from `text`.
    ///
    /// Each step merges the highest count pair (ties to the smallest pair)
    /// into the next token. Training stops early, without error, once
    /// no adjacent pair remains.
    ///
    /// ## Arguments
    /// * `text` - the training text.
    ///
    /// ## Returns
    /// The [`TrainResults`]; or an error if `vocab_size` is below 256 or
    /// does not fit in `T`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn train<T: TokenType>(
        &self,
        text: &str,
    ) -> WPResult<TrainResults<T>> {
        let vocab_size = try_vocab_size::<T>(self.options.vocab_size)?;
        let num_merges = vocab_size - U8_SIZE;
        log::info!(
            "Starting BPE training: {} merges to compute over {} bytes",
            num_merges,
            text.len()
        );

        let mut merges: MergeTable<T> = MergeTable::with_capacity(num_merges);
        let mut tokens: Vec<T> = text_to_byte_tokens(text);

        // Counts are kept current through the merge deltas,
        // rather than recounted every step.
        let mut pair_counts: PairCountMap<T, C> = count_pairs(&tokens);

        let mut last_log_percent = 0;
        while merges.len() < num_merges {
            let Some(PairRank { pair, count }) = top_pair(&pair_counts) else {
                log::warn!(
                    "No pairs left to merge; stopping after {} of {} merges",
                    merges.len(),
                    num_merges
                );
                break;
            };

            let new_token = merges.push(pair)?;

            merge_pair_cb(&mut tokens, pair, new_token, &mut |p, delta| {
                apply_pair_delta(&mut pair_counts, p, delta)
            });

            if self.options.verbose {
                log::info!("merged {pair:?} into a new token {new_token}");
            }

            // Log progress every 1%
            let current_percent = (merges.len() * 100) / num_merges;
            if current_percent > last_log_percent {
                log::debug!(
                    "Progress: {}% ({}/{} merges) - Last merge: {:?} -> {:?} (frequency: {})",
                    current_percent,
                    merges.len(),
                    num_merges,
                    pair,
                    new_token,
                    count
                );
                last_log_percent = current_percent;
            }
        }

        log::info!(
            "Finished training: {} merges completed; {} bytes -> {} tokens",
            merges.len(),
            text.len(),
            tokens.len()
        );
        Ok(TrainResults { merges, tokens })
    }
}
