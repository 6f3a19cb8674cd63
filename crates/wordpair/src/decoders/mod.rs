//! # Token Decoders
//!
//! Decoding expands every token to its bytes, then decodes the bytes as
//! UTF-8. Merges operate on raw bytes, so a token sequence need not end on
//! a codepoint boundary; invalid sequences are replaced with `U+FFFD`, and
//! the number of replacements is reported on the [`DecodeResult`].
//!
//! Unknown tokens are an error: decoding aborts, nothing partial is returned.
//!
//! ## Example
//!
//! ```rust
//! use wordpair::{Tokenizer, TokenDecoder};
//!
//! let mut tokenizer: Tokenizer<u32> = Tokenizer::new();
//! tokenizer.train("aaabdaaabac", 259, false).unwrap();
//!
//! let result = tokenizer.try_decode_to_string(&[258, 100, 258, 97, 99]).unwrap();
//! assert_eq!(result.value, "aaabdaaabac");
//! assert!(!result.is_lossy());
//! ```

pub mod decode_results;
pub mod slab_index_decoder;
pub mod token_decoder;

#[doc(inline)]
pub use decode_results::{BatchDecodeResult, DecodeResult};
#[doc(inline)]
pub use slab_index_decoder::SlabIndexDecoder;
#[doc(inline)]
pub use token_decoder::TokenDecoder;
