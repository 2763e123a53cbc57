//! Code table derivation.
//!
//! Walks the finished tree and assigns each leaf symbol its path string:
//! '0' for a left descent, '1' for a right. The sum-type node makes the
//! leaf check structural, so no sentinel symbol is ever consulted.

use vapula_core::types::{Symbol, ALPHABET_SIZE};

use crate::tree::{HuffNode, HuffmanTree};

/// Mapping from symbol to its prefix-free bit-string code.
///
/// One slot per alphabet entry; symbols absent from the analyzed input
/// stay `None`.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: [Option<String>; ALPHABET_SIZE],
    max_bits: usize,
}

impl CodeTable {
    /// Derive codes by depth-first traversal from the root.
    ///
    /// Iterative with an explicit stack and a path accumulator per frame;
    /// depth is bounded by the alphabet size, but the explicit stack keeps
    /// even fully skewed trees off the call stack.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes: [Option<String>; ALPHABET_SIZE] = std::array::from_fn(|_| None);
        let mut max_bits = 0;

        let mut stack: Vec<(&HuffNode, String)> = vec![(tree.root(), String::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                HuffNode::Leaf { symbol, .. } => {
                    max_bits = max_bits.max(path.len());
                    codes[*symbol as usize] = Some(path);
                }
                HuffNode::Internal { left, right, .. } => {
                    let mut left_path = path.clone();
                    left_path.push('0');
                    let mut right_path = path;
                    right_path.push('1');
                    stack.push((right.as_ref(), right_path));
                    stack.push((left.as_ref(), left_path));
                }
            }
        }

        CodeTable { codes, max_bits }
    }

    /// Code for `symbol`, if it appeared as a leaf.
    pub fn code(&self, symbol: Symbol) -> Option<&str> {
        self.codes
            .get(symbol as usize)
            .and_then(|code| code.as_deref())
    }

    /// Number of symbols with an assigned code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| code.is_some()).count()
    }

    /// True when no codes are assigned.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|code| code.is_none())
    }

    /// Length in bits of the longest code.
    pub fn max_bits(&self) -> usize {
        self.max_bits
    }

    /// Iterate over (symbol, code) pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.codes.iter().enumerate().filter_map(|(symbol, code)| {
            code.as_deref().map(|code| (symbol as Symbol, code))
        })
    }
}
