//! Symbol frequency analysis.
//!
//! First stage of the pipeline: scan the input once, count every byte
//! (line terminators included), and produce the probability-sorted entry
//! list that seeds tree construction.

use tracing::debug;
use vapula_core::types::{in_alphabet, Symbol, ALPHABET_SIZE};
use vapula_core::{Error, Result};

/// One symbol and its probability of occurrence over the scanned input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyEntry {
    /// The symbol, always below [`ALPHABET_SIZE`].
    pub symbol: Symbol,
    /// Probability in (0, 1]; exactly 0.0 only for the injected partner
    /// of a single-symbol input.
    pub probability: f64,
}

/// Probability-sorted frequency list for one input.
///
/// Always holds at least two entries: empty input is rejected outright,
/// and a single-symbol input gets a zero-probability partner injected so
/// the merge always starts from two leaves.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Scan `input` and build the sorted frequency list.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] for a zero-length input;
    /// [`Error::InvalidSymbol`] for any byte outside the alphabet.
    pub fn from_input(input: &[u8]) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut counts = [0u64; ALPHABET_SIZE];
        for (offset, &byte) in input.iter().enumerate() {
            if !in_alphabet(byte) {
                return Err(Error::invalid_symbol(byte, offset));
            }
            counts[byte as usize] += 1;
        }

        let total = input.len() as f64;
        let mut entries: Vec<FrequencyEntry> = counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| FrequencyEntry {
                symbol: symbol as Symbol,
                probability: count as f64 / total,
            })
            .collect();

        // A lone symbol gets the next code point (mod 128) as a
        // zero-probability partner, keeping the tree at two leaves or
        // more and the real symbol's code non-empty.
        if entries.len() == 1 {
            let partner = (entries[0].symbol + 1) % ALPHABET_SIZE as u8;
            entries.push(FrequencyEntry {
                symbol: partner,
                probability: 0.0,
            });
        }

        // Stable sort: entries were generated in ascending symbol order,
        // so equal probabilities keep that order.
        entries.sort_by(|a, b| a.probability.total_cmp(&b.probability));

        debug!(
            "frequency table: {} entries over {} input bytes",
            entries.len(),
            input.len()
        );

        Ok(FrequencyTable { entries })
    }

    /// Entries in ascending probability order.
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Number of entries, injected partner included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all probabilities; 1.0 within floating rounding.
    pub fn total_probability(&self) -> f64 {
        self.entries.iter().map(|entry| entry.probability).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            FrequencyTable::from_input(b""),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_high_bit_byte_rejected() {
        let err = FrequencyTable::from_input(&[b'a', 0x80, b'b']).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSymbol {
                byte: 0x80,
                offset: 1
            }
        ));
    }

    #[test]
    fn test_sorted_ascending() {
        let table = FrequencyTable::from_input(b"aaabbc").unwrap();
        let entries = table.entries();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].symbol, b'c');
        assert_eq!(entries[1].symbol, b'b');
        assert_eq!(entries[2].symbol, b'a');
        assert!((entries[0].probability - 1.0 / 6.0).abs() < 1e-9);
        assert!((entries[1].probability - 1.0 / 3.0).abs() < 1e-9);
        assert!((entries[2].probability - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_probability_sum_is_one() {
        let table = FrequencyTable::from_input(b"the quick brown fox\n").unwrap();
        assert!((table.total_probability() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_newlines_count_as_symbols() {
        let table = FrequencyTable::from_input(b"a\nb\n").unwrap();
        assert!(table.entries().iter().any(|e| e.symbol == b'\n'));
        assert!((table.total_probability() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_symbol_injects_partner() {
        let table = FrequencyTable::from_input(b"aaaa").unwrap();
        let entries = table.entries();

        assert_eq!(entries.len(), 2);
        // Zero-probability partner sorts first.
        assert_eq!(entries[0].symbol, b'b');
        assert_eq!(entries[0].probability, 0.0);
        assert_eq!(entries[1].symbol, b'a');
        assert_eq!(entries[1].probability, 1.0);
    }

    #[test]
    fn test_partner_wraps_alphabet() {
        let table = FrequencyTable::from_input(&[127, 127]).unwrap();
        assert_eq!(table.entries()[0].symbol, 0);
    }

    #[test]
    fn test_equal_probabilities_keep_symbol_order() {
        let table = FrequencyTable::from_input(b"abab").unwrap();
        let entries = table.entries();

        assert_eq!(entries[0].symbol, b'a');
        assert_eq!(entries[1].symbol, b'b');
    }
}
