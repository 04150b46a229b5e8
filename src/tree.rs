use std::{cmp::Ordering, collections::BinaryHeap};

use crate::frequency::FrequencyTable;

/// Huffman tree. Every `Node` owns exactly two subtrees, so a node is a leaf
/// iff it is the `Leaf` variant.
#[derive(Debug, PartialEq, Eq)]
pub enum HuffmanTree {
    Node(u64, Box<HuffmanTree>, Box<HuffmanTree>),
    Leaf(u64, u8),
}

impl HuffmanTree {
    /// Builds the tree for `counts`, or `None` when every count is zero.
    ///
    /// Ties between equal frequencies are broken by insertion order: leaves
    /// are queued in ascending symbol order and each merged node is queued
    /// after everything already in the queue. The first node extracted
    /// becomes the left child.
    pub fn create(counts: &FrequencyTable) -> Option<HuffmanTree> {
        let mut heap = BinaryHeap::new();
        let mut order = 0;
        for (symbol, count) in counts.symbols() {
            heap.push(Pending::new(HuffmanTree::Leaf(count, symbol), order));
            order += 1;
        }

        loop {
            let left = heap.pop()?;
            let Some(right) = heap.pop() else {
                return Some(left.tree);
            };
            let merged = HuffmanTree::Node(
                left.tree.value() + right.tree.value(),
                Box::new(left.tree),
                Box::new(right.tree),
            );
            heap.push(Pending::new(merged, order));
            order += 1;
        }
    }

    /// Frequency of the subtree, the sum of the counts of its leaves.
    pub fn value(&self) -> u64 {
        match self {
            HuffmanTree::Leaf(count, _) => *count,
            HuffmanTree::Node(count, _, _) => *count,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanTree::Leaf(_, _))
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            HuffmanTree::Leaf(_, _) => 0,
            HuffmanTree::Node(_, left, right) => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Heap entry ordering subtrees by ascending frequency, then by insertion order.
struct Pending {
    tree: HuffmanTree,
    order: usize,
}

impl Pending {
    fn new(tree: HuffmanTree, order: usize) -> Self {
        Pending { tree, order }
    }

    fn key(&self) -> (u64, usize) {
        (self.tree.value(), self.order)
    }
}

impl Ord for Pending {
    // BinaryHeap is a max-heap, so the comparison is reversed.
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Pending {}

#[cfg(test)]
mod tests {
    use super::HuffmanTree;
    use crate::frequency::FrequencyTable;

    #[test]
    fn test_create_huffman_tree() {
        let counts = FrequencyTable::count(b"abacba");
        let tree = HuffmanTree::create(&counts).unwrap();
        assert_eq!(
            tree,
            HuffmanTree::Node(
                6,
                Box::new(HuffmanTree::Leaf(3, b'a')),
                Box::new(HuffmanTree::Node(
                    3,
                    Box::new(HuffmanTree::Leaf(1, b'c')),
                    Box::new(HuffmanTree::Leaf(2, b'b'))
                ))
            )
        );
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn empty_table_has_no_tree() {
        assert_eq!(HuffmanTree::create(&FrequencyTable::new()), None);
    }

    #[test]
    fn single_symbol_is_a_leaf() {
        let counts = FrequencyTable::count(b"zzzz");
        let tree = HuffmanTree::create(&counts).unwrap();
        assert_eq!(tree, HuffmanTree::Leaf(4, b'z'));
        assert!(tree.is_leaf());
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn ties_follow_symbol_order() {
        let counts = FrequencyTable::count(b"dcba");
        let tree = HuffmanTree::create(&counts).unwrap();
        // a+b are merged first, then c+d, then the two pairs in queue order.
        assert_eq!(
            tree,
            HuffmanTree::Node(
                4,
                Box::new(HuffmanTree::Node(
                    2,
                    Box::new(HuffmanTree::Leaf(1, b'a')),
                    Box::new(HuffmanTree::Leaf(1, b'b'))
                )),
                Box::new(HuffmanTree::Node(
                    2,
                    Box::new(HuffmanTree::Leaf(1, b'c')),
                    Box::new(HuffmanTree::Leaf(1, b'd'))
                ))
            )
        );
    }

    #[test]
    fn root_value_is_input_length() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let tree = HuffmanTree::create(&FrequencyTable::count(data)).unwrap();
        assert_eq!(tree.value(), data.len() as u64);
    }
}
