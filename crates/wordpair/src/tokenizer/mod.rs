//! # Combined Tokenizer

mod tokenizer_impl;

#[doc(inline)]
pub use tokenizer_impl::*;
