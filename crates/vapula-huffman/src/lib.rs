//! # Vapula Huffman
//!
//! Huffman codec over a fixed 128-symbol alphabet.
//!
//! The pipeline runs in four stages, each fully consuming its
//! predecessor's output:
//!
//! 1. [`FrequencyTable`] scans the input and sorts symbols by probability
//! 2. [`HuffmanTree`] merges the sorted list with a two-queue greedy pass
//! 3. [`CodeTable`] walks the tree to assign prefix-free bit-strings
//! 4. [`bitstream`] packs the concatenated codes behind a padding header
//!
//! Decoding reverses stage 4 and walks the same tree per bit. The whole
//! input is buffered; there is no streaming mode.
//!
//! ## Example
//!
//! ```rust
//! use vapula_huffman::HuffmanCodec;
//!
//! let text = b"so much depends upon a red wheel barrow";
//! let codec = HuffmanCodec::from_input(text)?;
//! let encoded = codec.encode(text)?;
//! let decoded = codec.decode(&encoded)?;
//! assert_eq!(decoded, text);
//! # Ok::<(), vapula_core::Error>(())
//! ```

pub mod bitstream;
pub mod codec;
pub mod frequency;
pub mod table;
pub mod tree;

// Re-export main types
pub use codec::HuffmanCodec;
pub use frequency::{FrequencyEntry, FrequencyTable};
pub use table::CodeTable;
pub use tree::{HuffNode, HuffmanTree};
