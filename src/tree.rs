use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashMap},
};

/// A node of the Huffman tree.
///
/// An internal node always has exactly two children, each owned outright by
/// its parent; only leaves carry a symbol.
#[derive(Debug)]
pub(crate) enum Node {
    Leaf {
        symbol: char,
        freq: usize,
    },
    Internal {
        freq: usize,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn freq(&self) -> usize {
        match self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => *freq,
        }
    }
}

/// A heap entry: a subtree plus its insertion order.
///
/// Ordering is by `(frequency, insertion order)`, so frequency ties pop in
/// a consistent, deterministic order.
struct Entry {
    seq: usize,
    node: Node,
}

impl Entry {
    fn key(&self) -> (usize, usize) {
        (self.node.freq(), self.seq)
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

/// Count occurrences of each distinct symbol in `text`.
pub(crate) fn frequencies(text: &str) -> HashMap<char, usize> {
    let mut freqs = HashMap::new();
    for symbol in text.chars() {
        *freqs.entry(symbol).or_insert(0) += 1;
    }
    freqs
}

/// Build the optimal prefix tree: start with one leaf per distinct symbol
/// and repeatedly merge the two lowest-frequency nodes, the first popped
/// becoming the left child, until one root remains.
///
/// Returns `None` for an empty frequency table.
pub(crate) fn build(freqs: HashMap<char, usize>) -> Option<Node> {
    // Seed leaves in symbol order; together with the per-entry insertion
    // counter this makes the resulting tree deterministic.
    let mut symbols: Vec<(char, usize)> = freqs.into_iter().collect();
    symbols.sort_unstable_by_key(|&(symbol, _)| symbol);

    let mut order = 0usize..;
    let mut heap: BinaryHeap<Reverse<Entry>> = symbols
        .into_iter()
        .zip(&mut order)
        .map(|((symbol, freq), seq)| {
            Reverse(Entry {
                seq,
                node: Node::Leaf { symbol, freq },
            })
        })
        .collect();

    while heap.len() > 1 {
        let Reverse(lo) = heap.pop()?;
        let Reverse(hi) = heap.pop()?;
        let node = Node::Internal {
            freq: lo.node.freq() + hi.node.freq(),
            left: Box::new(lo.node),
            right: Box::new(hi.node),
        };
        heap.push(Reverse(Entry {
            seq: order.next()?,
            node,
        }));
    }

    heap.pop().map(|Reverse(entry)| entry.node)
}

/// Record each leaf's root-to-leaf path as its code: left edges append
/// `'0'`, right edges append `'1'`.
///
/// A tree that is a lone leaf would get the empty code here; the codec
/// special-cases that before calling this.
pub(crate) fn assign_codes(node: &Node, prefix: String, codes: &mut HashMap<char, String>) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, prefix);
        }
        Node::Internal { left, right, .. } => {
            assign_codes(left, format!("{prefix}0"), codes);
            assign_codes(right, format!("{prefix}1"), codes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes_for(text: &str) -> HashMap<char, String> {
        let root = build(frequencies(text)).unwrap();
        let mut codes = HashMap::new();
        assign_codes(&root, String::new(), &mut codes);
        codes
    }

    #[test]
    fn counts_frequencies() {
        let freqs = frequencies("abracadabra");
        assert_eq!(freqs[&'a'], 5);
        assert_eq!(freqs[&'b'], 2);
        assert_eq!(freqs[&'r'], 2);
        assert_eq!(freqs[&'c'], 1);
        assert_eq!(freqs[&'d'], 1);
        assert_eq!(freqs.len(), 5);
    }

    #[test]
    fn empty_input_has_no_tree() {
        assert!(build(frequencies("")).is_none());
    }

    #[test]
    fn root_frequency_is_input_length() {
        let text = "mississippi river";
        let root = build(frequencies(text)).unwrap();
        assert_eq!(root.freq(), text.chars().count());
    }

    #[test]
    fn two_symbols_get_one_bit_each() {
        let codes = codes_for("aab");
        // Lower frequency pops first, so 'b' takes the left branch.
        assert_eq!(codes[&'b'], "0");
        assert_eq!(codes[&'a'], "1");
    }

    #[test]
    fn frequent_symbols_get_shorter_codes() {
        let codes = codes_for("aaaaaaaabbcd");
        assert!(codes[&'a'].len() <= codes[&'b'].len());
        assert!(codes[&'b'].len() <= codes[&'c'].len());
        assert_eq!(codes[&'c'].len(), codes[&'d'].len());
    }

    #[test]
    fn construction_is_deterministic() {
        // All frequencies tie; the insertion-order tie-break must still
        // produce the same tree every time.
        let text = "abcdefgh";
        assert_eq!(codes_for(text), codes_for(text));
    }
}
