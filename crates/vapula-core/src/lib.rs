//! # Vapula Core
//!
//! Core traits, types, and errors for the Vapula Huffman codec.
//!
//! Vapula is named after the 60th demon of the Ars Goetia, a duke who
//! teaches handicrafts and sciences - fitting for a codec that first
//! studies the shape of its input, then transcribes it.
//!
//! ## Core Traits
//!
//! - [`Compressor`] - One-shot compression operations
//! - [`Decompressor`] - One-shot decompression operations
//! - [`Codec`] - Combined compress/decompress capability
//!
//! ## Example
//!
//! ```ignore
//! use vapula_core::Codec;
//! use vapula_huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec::from_input(data)?;
//! let encoded = codec.compress(data)?;
//! let original = codec.decompress(&encoded)?;
//! ```

pub mod error;
pub mod stats;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use stats::CompressionStats;
pub use traits::{Codec, Compressor, Decompressor};
pub use types::{CompressionRatio, Symbol, ALPHABET_SIZE};
