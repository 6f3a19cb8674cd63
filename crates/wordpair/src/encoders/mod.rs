//! # Token Encoders
//!
//! Encoding starts from the raw UTF-8 byte tokens of the text, then
//! replays the learned merges in the order they were learned.
//!
//! ## Example
//!
//! ```rust
//! use wordpair::{TokenEncoder, encoders::MergeReplayEncoder, vocab::MergeTable};
//!
//! let merges: MergeTable<u32> =
//!     MergeTable::try_from_merges([((97, 97), 256), ((256, 97), 257)]).unwrap();
//! let encoder = MergeReplayEncoder::new(merges);
//!
//! assert_eq!(encoder.try_encode("aaaa").unwrap(), vec![256, 256]);
//! assert_eq!(encoder.try_encode("aaab").unwrap(), vec![257, 98]);
//! ```

pub mod merge_replay_encoder;
pub mod token_encoder;

#[doc(inline)]
pub use merge_replay_encoder::MergeReplayEncoder;
#[doc(inline)]
pub use token_encoder::TokenEncoder;
