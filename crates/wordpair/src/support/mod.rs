//! # Support Utilities

pub mod strings;
pub mod traits;
