/// An error from [`HuffmanCodec`] encoding, decoding, or code-table access.
///
/// Every contract violation surfaces as one of these; errors never corrupt
/// the codec, which stays valid for subsequent calls.
///
/// [`HuffmanCodec`]: crate::HuffmanCodec
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HuffmanError {
    /// A non-empty payload was given to a codec built from empty input
    /// (no tree, no codes).
    #[error("huffman tree is empty")]
    InvalidState,

    /// Encoding hit a symbol absent from the text the codec was built from.
    #[error("symbol {symbol:?} (U+{code_point:04X}) not found in huffman code table", code_point = *.symbol as u32)]
    UnsupportedSymbol { symbol: char },

    /// The encoded input is not a well-formed bit-string for this tree.
    #[error("malformed encoded input: {0}")]
    MalformedInput(#[from] Malformed),

    /// An attempt to modify the code table exposed by the codec.
    #[error("huffman code table cannot be modified after construction")]
    UnsupportedMutation,
}

/// What exactly was wrong with an encoded bit-string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    /// A character other than `'0'` or `'1'`.
    #[error("invalid character {0:?}")]
    InvalidBit(char),

    /// The bit-string ended mid-codeword, before the walk returned to the
    /// root.
    #[error("incomplete trailing codeword")]
    Truncated,
}
