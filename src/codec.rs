use std::{collections::HashMap, ptr};

use crate::{
    code_table::CodeTable,
    errors::{HuffmanError, Malformed},
    tree::{self, Node},
};

/// A Huffman coder/decoder over a fixed symbol alphabet.
///
/// Construction analyzes the input text once: it counts symbol frequencies,
/// builds the optimal prefix tree by greedy min-heap merges, and assigns
/// each distinct symbol a prefix-free bit-string code. The codec is
/// immutable afterward — encode, decode, and table lookups take `&self` and
/// never change its state, so a codec can be shared across threads without
/// synchronization.
///
/// Symbols are `char`s (Unicode scalar values), so non-BMP characters are
/// single symbols and round-trip intact.
#[derive(Debug)]
pub struct HuffmanCodec {
    root: Option<Node>,
    codes: CodeTable,
}

impl HuffmanCodec {
    /// Build a codec from the symbol frequencies of `text`.
    ///
    /// Never fails. Empty input yields an empty codec: encoding and
    /// decoding the empty string still succeed, anything else fails with
    /// [`HuffmanError::InvalidState`].
    pub fn new(text: &str) -> Self {
        let root = tree::build(tree::frequencies(text));

        let mut codes = HashMap::new();
        match &root {
            // The generic traversal would assign a lone leaf the empty
            // code, which can't be decoded; give it one bit instead.
            Some(Node::Leaf { symbol, .. }) => {
                codes.insert(*symbol, "0".to_string());
            }
            Some(node) => tree::assign_codes(node, String::new(), &mut codes),
            None => (),
        }

        Self {
            root,
            codes: CodeTable::from_codes(codes),
        }
    }

    /// Encode `text` as a bit-string of literal `'0'`/`'1'` characters,
    /// concatenating each symbol's code in input order.
    ///
    /// Empty input encodes to the empty string regardless of codec state.
    /// Fails fast with [`HuffmanError::UnsupportedSymbol`] on the first
    /// symbol that has no code; nothing is skipped or substituted.
    pub fn encode(&self, text: &str) -> Result<String, HuffmanError> {
        if text.is_empty() {
            return Ok(String::new());
        }
        if self.root.is_none() {
            return Err(HuffmanError::InvalidState);
        }

        let mut bits = String::new();
        for symbol in text.chars() {
            match self.codes.get(symbol) {
                Some(code) => bits.push_str(code),
                None => return Err(HuffmanError::UnsupportedSymbol { symbol }),
            }
        }
        Ok(bits)
    }

    /// Decode a bit-string back into the original text by walking the tree:
    /// `'0'` goes left, `'1'` goes right, a leaf emits its symbol and
    /// resets the walk to the root.
    ///
    /// Empty input decodes to the empty string regardless of codec state.
    /// Fails with [`HuffmanError::MalformedInput`] on any non-binary
    /// character, or when the input ends mid-codeword.
    pub fn decode(&self, encoded: &str) -> Result<String, HuffmanError> {
        if encoded.is_empty() {
            return Ok(String::new());
        }
        let root = self.root.as_ref().ok_or(HuffmanError::InvalidState)?;

        // A one-leaf tree encodes as one '0' bit per repetition.
        if let Node::Leaf { symbol, .. } = root {
            return decode_single_leaf(*symbol, encoded);
        }

        let mut decoded = String::new();
        let mut pos = root;
        for bit in encoded.chars() {
            let next = match (bit, pos) {
                ('0', Node::Internal { left, .. }) => left.as_ref(),
                ('1', Node::Internal { right, .. }) => right.as_ref(),
                ('0' | '1', Node::Leaf { .. }) => {
                    unreachable!("walk resets to the root at every leaf")
                }
                (other, _) => return Err(Malformed::InvalidBit(other).into()),
            };
            if let Node::Leaf { symbol, .. } = next {
                decoded.push(*symbol);
                pos = root;
            } else {
                pos = next;
            }
        }

        // Ending anywhere but the root means a trailing partial codeword.
        if !ptr::eq(pos, root) {
            return Err(Malformed::Truncated.into());
        }
        Ok(decoded)
    }

    /// The read-only symbol-to-code mapping assigned at construction.
    pub fn code_table(&self) -> &CodeTable {
        &self.codes
    }
}

/// Decode against a tree that is a single leaf: every bit must be `'0'` and
/// emits the one symbol.
fn decode_single_leaf(symbol: char, encoded: &str) -> Result<String, HuffmanError> {
    let mut decoded = String::with_capacity(encoded.len() * symbol.len_utf8());
    for bit in encoded.chars() {
        if bit != '0' {
            return Err(Malformed::InvalidBit(bit).into());
        }
        decoded.push(symbol);
    }
    Ok(decoded)
}
