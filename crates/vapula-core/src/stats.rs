//! Statistics for encode operations.

use crate::types::CompressionRatio;

/// Statistics from a completed encode.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompressionStats {
    /// Original (unencoded) size in bytes.
    pub original_size: usize,

    /// Encoded size in bytes, padding header included.
    pub compressed_size: usize,

    /// Payload length in bits, before the padding header.
    pub payload_bits: usize,

    /// Bits spent on the padding header (always 1-8).
    pub padding_bits: usize,
}

impl CompressionStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get compression ratio.
    pub fn ratio(&self) -> CompressionRatio {
        CompressionRatio::new(self.original_size, self.compressed_size)
    }

    /// Get space savings as percentage.
    pub fn savings_percent(&self) -> f64 {
        self.ratio().savings_percent()
    }

    /// Total encoded length in bits; always a whole number of bytes.
    pub fn total_bits(&self) -> usize {
        self.payload_bits + self.padding_bits
    }
}
