//! # `wordpair` Byte Pair Tokenizer
//!
//! A minimal byte-level BPE tokenizer.
//!
//! Token IDs ``0..=255`` are the raw bytes; training learns an ordered
//! table of pair merges, each producing the next token ID.
//! Encoding replays those merges on the bytes of new text, and decoding
//! concatenates the byte spans of each token.
//!
//! See:
//! * [`Tokenizer`] to train, encode, and decode.
//! * [`training`] for the trainer and its options.
//! * [`encoders`] / [`decoders`] for the lower level encoder and decoder traits.
//! * [`vocab`] for the [`MergeTable`] and the [`TokenSpanVocab`].
//!
//! ```rust
//! use wordpair::Tokenizer;
//!
//! let mut tokenizer: Tokenizer = Tokenizer::new();
//! tokenizer.train("aaabdaaabac", 259, false)?;
//!
//! let tokens = tokenizer.encode("aaabdaaabac");
//! assert_eq!(tokens, vec![258, 100, 258, 97, 99]);
//! assert_eq!(tokenizer.decode(&tokens)?, "aaabdaaabac");
//! # Ok::<(), wordpair::WordpairError>(())
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

extern crate alloc;

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod pairs;
pub mod support;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use decoders::TokenDecoder;
#[doc(inline)]
pub use encoders::TokenEncoder;
#[doc(inline)]
pub use errors::{WPResult, WordpairError};
#[doc(inline)]
pub use tokenizer::Tokenizer;
#[doc(inline)]
pub use types::{Pair, TokenType};
#[doc(inline)]
pub use vocab::{MergeTable, TokenSpanVocab};
