//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for batch-parallel encoders and decoders.
//!
//! Each batch item is still encoded or decoded on one thread;
//! results keep the order of the batch.

mod rayon_decoder;
mod rayon_encoder;

pub use rayon_decoder::ParallelRayonDecoder;
pub use rayon_encoder::ParallelRayonEncoder;
