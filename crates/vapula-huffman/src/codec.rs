//! Huffman codec sessions.
//!
//! A [`HuffmanCodec`] is built by analyzing one input (buffer or file) and
//! retains the frequency table, tree, and code table for the life of the
//! session. The tree that produced the codes also drives the decode walk,
//! so a session always decodes its own output.

use std::fs;
use std::path::Path;

use tracing::{debug, info};
use vapula_core::stats::CompressionStats;
use vapula_core::traits::{Codec, Compressor, Decompressor};
use vapula_core::{Error, Result};

use crate::bitstream::{self, padding_for};
use crate::frequency::FrequencyTable;
use crate::table::CodeTable;
use crate::tree::{HuffNode, HuffmanTree};

/// One encoding session: frequency table, merge tree, and code table
/// derived from a single analyzed input.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    frequencies: FrequencyTable,
    tree: HuffmanTree,
    table: CodeTable,
}

impl HuffmanCodec {
    /// Analyze `input` and run the session pipeline: frequencies, then
    /// tree, then codes.
    pub fn from_input(input: &[u8]) -> Result<Self> {
        let frequencies = FrequencyTable::from_input(input)?;
        let tree = HuffmanTree::from_frequencies(&frequencies)?;
        let table = CodeTable::from_tree(&tree);

        debug!(
            "session ready: {} codes, longest {} bits",
            table.len(),
            table.max_bits()
        );

        Ok(HuffmanCodec {
            frequencies,
            tree,
            table,
        })
    }

    /// Analyze the file at `path`.
    ///
    /// This is the first of the two independent reads the pipeline makes;
    /// [`encode_file`](Self::encode_file) performs the second.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_input(&data)
    }

    /// The frequency table this session was built from.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// The session's merge tree.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// The session's code table.
    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }

    /// Encode `input` into a padded bitstream.
    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let bits = self.bit_string(input)?;
        bitstream::pack(&bits)
    }

    /// Concatenated code string for `input`, in stream order.
    fn bit_string(&self, input: &[u8]) -> Result<String> {
        let mut bits = String::with_capacity(input.len() * self.table.max_bits().max(1));
        for &byte in input {
            let code = self
                .table
                .code(byte)
                .ok_or_else(|| Error::missing_code(byte))?;
            bits.push_str(code);
        }
        Ok(bits)
    }

    /// Decode a padded bitstream produced by this session.
    ///
    /// Walks the tree one bit at a time, emitting the leaf symbol and
    /// resetting to the root, until the unpacked bit-string is exhausted.
    pub fn decode(&self, encoded: &[u8]) -> Result<Vec<u8>> {
        let bits = bitstream::unpack(encoded)?;
        let root = self.tree.root();

        let mut output = Vec::new();
        let mut node = root;
        for bit in bits.bytes() {
            node = match node {
                HuffNode::Internal { left, right, .. } => {
                    if bit == b'0' {
                        left.as_ref()
                    } else {
                        right.as_ref()
                    }
                }
                // The walk resets after every emit and the root of a
                // two-leaf tree is internal, so this is unreachable for
                // any tree this crate constructs.
                HuffNode::Leaf { .. } => {
                    return Err(Error::corrupted("decode walk started at a leaf"));
                }
            };
            if let HuffNode::Leaf { symbol, .. } = node {
                output.push(*symbol);
                node = root;
            }
        }

        if !std::ptr::eq(node, root) {
            return Err(Error::corrupted("encoded stream ends inside a code"));
        }

        Ok(output)
    }

    /// Encode the file at `source` into `dest`.
    ///
    /// The source is re-read independently of the analysis pass. The
    /// encoded buffer is assembled fully in memory and written with a
    /// single call, so a failed encode never leaves a partial file that
    /// looks like a successful one.
    pub fn encode_file(&self, source: &Path, dest: &Path) -> Result<CompressionStats> {
        let data = fs::read(source)?;
        let bits = self.bit_string(&data)?;
        let encoded = bitstream::pack(&bits)?;
        fs::write(dest, &encoded)?;

        let stats = CompressionStats {
            original_size: data.len(),
            compressed_size: encoded.len(),
            payload_bits: bits.len(),
            padding_bits: padding_for(bits.len()),
        };
        info!(
            "encoded {} bytes into {} ({:.1}% saved)",
            stats.original_size,
            stats.compressed_size,
            stats.savings_percent()
        );

        Ok(stats)
    }

    /// Decode the encoded file at `source` into `dest`.
    pub fn decode_file(&self, source: &Path, dest: &Path) -> Result<()> {
        let encoded = fs::read(source)?;
        let decoded = self.decode(&encoded)?;
        fs::write(dest, &decoded)?;

        debug!(
            "decoded {} bytes back into {}",
            encoded.len(),
            decoded.len()
        );

        Ok(())
    }
}

impl Compressor for HuffmanCodec {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.encode(input)
    }

    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let encoded = self.encode(input)?;
        if encoded.len() > output.len() {
            return Err(Error::buffer_too_small(encoded.len(), output.len()));
        }
        output[..encoded.len()].copy_from_slice(&encoded);
        Ok(encoded.len())
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        // Worst case: every symbol takes the longest code, plus a full
        // byte of padding header.
        (input_len * self.table.max_bits() + 8).div_ceil(8)
    }
}

impl Decompressor for HuffmanCodec {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.decode(input)
    }

    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let decoded = self.decode(input)?;
        if decoded.len() > output.len() {
            return Err(Error::buffer_too_small(decoded.len(), output.len()));
        }
        output[..decoded.len()].copy_from_slice(&decoded);
        Ok(decoded.len())
    }
}

impl Codec for HuffmanCodec {}
