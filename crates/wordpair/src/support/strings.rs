//! # Text / Byte Stream Conversion
//!
//! Text enters the tokenizer as its UTF-8 bytes, one token per byte;
//! bytes leave it through a lossy UTF-8 decode.

use crate::{
    alloc::{string::String, vec::Vec},
    types::TokenType,
};

/// The token for a raw byte value.
///
/// Byte tokens are the identity mapping ``b -> b``.
#[inline(always)]
pub fn byte_token<T: TokenType>(byte: u8) -> T {
    T::from_u8(byte).expect("unsigned token types hold every byte value")
}

/// Append the byte tokens of `text` to a target buffer.
///
/// ## Arguments
/// * `text` - The text to translate; its UTF-8 bytes are used.
/// * `tokens` - The target token buffer.
#[inline(always)]
pub fn append_byte_tokens<T: TokenType>(
    text: &str,
    tokens: &mut Vec<T>,
) {
    tokens.extend(text.as_bytes().iter().map(|&b| byte_token::<T>(b)));
}

/// Translate `text` into its byte tokens.
///
/// ## Returns
/// One token per UTF-8 byte, each in ``0..=255``.
pub fn text_to_byte_tokens<T: TokenType>(text: &str) -> Vec<T> {
    let mut tokens = Vec::with_capacity(text.len());
    append_byte_tokens(text, &mut tokens);
    tokens
}

/// Decode bytes as UTF-8, replacing invalid sequences.
///
/// Each maximal invalid subsequence is replaced by one `U+FFFD`,
/// matching [`String::from_utf8_lossy`].
///
/// ## Returns
/// The decoded string, and the number of replacements made.
pub fn string_from_utf8_lossy(bytes: Vec<u8>) -> (String, usize) {
    let bytes = match String::from_utf8(bytes) {
        Ok(string) => return (string, 0),
        Err(err) => err.into_bytes(),
    };

    let mut value = String::with_capacity(bytes.len() + 2);
    let mut replacements = 0;
    for chunk in bytes.utf8_chunks() {
        value.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            value.push(char::REPLACEMENT_CHARACTER);
            replacements += 1;
        }
    }
    (value, replacements)
}
