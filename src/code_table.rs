use std::collections::HashMap;

use crate::errors::HuffmanError;

/// The symbol-to-code mapping derived from the Huffman tree.
///
/// Codes are non-empty `'0'`/`'1'` strings and are prefix-free: no code is
/// a prefix of another. The table is frozen when the codec is built —
/// nothing on this type can change an entry, and [`insert`] always fails.
///
/// [`insert`]: CodeTable::insert
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<char, String>,
}

impl CodeTable {
    pub(crate) fn from_codes(codes: HashMap<char, String>) -> Self {
        Self { codes }
    }

    /// The code assigned to `symbol`, if it occurred in the source text.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.codes.contains_key(&symbol)
    }

    /// Number of distinct symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(symbol, code)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes
            .iter()
            .map(|(&symbol, code)| (symbol, code.as_str()))
    }

    /// Always rejected with [`HuffmanError::UnsupportedMutation`].
    ///
    /// The code assignment is fixed at construction; this exists so callers
    /// attempting map-style mutation get a distinguishable error rather
    /// than silently diverging codes.
    pub fn insert(&self, _symbol: char, _code: &str) -> Result<(), HuffmanError> {
        Err(HuffmanError::UnsupportedMutation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_rejected() {
        let table = CodeTable::from_codes(HashMap::from([('a', "0".to_string())]));
        assert_eq!(
            table.insert('z', "0101"),
            Err(HuffmanError::UnsupportedMutation)
        );
        // The attempt must leave the table untouched.
        assert_eq!(table.get('z'), None);
        assert_eq!(table.get('a'), Some("0"));
    }

    #[test]
    fn lookup_and_iteration() {
        let table = CodeTable::from_codes(HashMap::from([
            ('a', "0".to_string()),
            ('b', "10".to_string()),
            ('c', "11".to_string()),
        ]));

        assert_eq!(table.len(), 3);
        assert!(table.contains('b'));
        assert!(!table.contains('z'));
        assert_eq!(table.get('c'), Some("11"));

        let mut pairs: Vec<_> = table.iter().collect();
        pairs.sort_unstable();
        assert_eq!(pairs, [('a', "0"), ('b', "10"), ('c', "11")]);
    }
}
