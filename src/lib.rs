//! Huffman coding over in-memory text.
//!
//! [`HuffmanCodec`] assigns variable-length, prefix-free binary codes to
//! the symbols of an input string, with shorter codes going to more
//! frequent symbols. Encoding and decoding work on bit-strings of literal
//! `'0'`/`'1'` characters; there is no file format or bit packing here.
//!
//! ```
//! use huffman::HuffmanCodec;
//!
//! # fn main() -> Result<(), huffman::HuffmanError> {
//! let codec = HuffmanCodec::new("abracadabra");
//! let bits = codec.encode("abracadabra")?;
//! assert_eq!(codec.decode(&bits)?, "abracadabra");
//! # Ok(())
//! # }
//! ```

mod code_table;
mod codec;
mod errors;
mod tree;

pub use crate::code_table::CodeTable;
pub use crate::codec::HuffmanCodec;
pub use crate::errors::{HuffmanError, Malformed};
