use std::{collections::BinaryHeap, cmp::Reverse, fmt};

use crate::frequency::FrequencyTable;

pub mod serializer;

/// A node of a Huffman code tree. Only leaves carry symbols, and every internal node
/// owns exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn leaf(symbol: u8, weight: u64) -> Self {
        HuffNode::Leaf { symbol, weight }
    }

    /// Joins two subtrees under a new internal node; `left` is reached with bit 0.
    pub fn merge(left: Self, right: Self) -> Self {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn leaves(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.leaves() + right.leaves(),
        }
    }
}

/// Priority queue entry: lower weight first, then the node inserted earlier.
#[derive(Debug)]
struct HeapNode {
    weight: u64,
    order: usize,
    node: HuffNode,
}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.weight == other.weight {
            return self.order.cmp(&other.order);
        }
        self.weight.cmp(&other.weight)
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for HeapNode {}

impl PartialEq for HeapNode {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.order == other.order
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    pub root: HuffNode,
}

impl HuffmanTree {
    /// Builds the code tree of a frequency table, or `None` if the table is empty.
    ///
    /// Leaves are queued by ascending symbol and every merged node is queued after all
    /// the nodes existing at its creation. The two lightest nodes are merged at each
    /// step, the first one extracted becoming the left child; equal weights are
    /// extracted in queue order. The resulting shape, and therefore every code length,
    /// depends only on the table.
    pub fn build(frequencies: &FrequencyTable) -> Option<Self> {
        let mut freq_tree = BinaryHeap::with_capacity(frequencies.len());
        let mut order = 0;

        for (symbol, count) in frequencies.iter() {
            freq_tree.push(Reverse(HeapNode { weight: count, order, node: HuffNode::leaf(symbol, count) }));
            order += 1;
        }

        loop {
            let Reverse(first) = freq_tree.pop()?;
            let Some(Reverse(second)) = freq_tree.pop() else {
                return Some(HuffmanTree { root: first.node });
            };

            let node = HuffNode::merge(first.node, second.node);
            freq_tree.push(Reverse(HeapNode { weight: node.weight(), order, node }));
            order += 1;
        }
    }

    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        HuffmanTree::build(&FrequencyTable::from_bytes(data))
    }

    /// True for the one-symbol alphabet, where the root itself is a leaf.
    pub fn is_degenerate(&self) -> bool {
        self.root.is_leaf()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of distinct symbols in the tree.
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }

    fn fmt_node(node: &HuffNode, depth: usize, label: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match node {
            HuffNode::Leaf { symbol, weight } => {
                writeln!(f, "{}{}-> Leaf: '{}' ({}) [weight: {}]",
                         indent, label, (*symbol as char).escape_default(), symbol, weight)
            },
            HuffNode::Internal { weight, left, right } => {
                writeln!(f, "{}{}-> Internal [weight: {}]", indent, label, weight)?;
                Self::fmt_node(left, depth + 1, "L", f)?;
                Self::fmt_node(right, depth + 1, "R", f)
            }
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        HuffmanTree::fmt_node(&self.root, 0, "root", f)
    }
}

#[cfg(test)]
mod tests;
