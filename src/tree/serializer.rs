//! Pre-order encoding of a code tree: one bit per node, 0 for an internal node
//! (followed by its left then right subtree) and 1 for a leaf (followed by the
//! 8-bit symbol, most significant bit first). Weights are not stored.

use crate::{bitstreams::{BinaryWriter, BinaryWriterBuilder, BinaryReader}, error::{HuffmanError, Result}};

use super::{HuffmanTree, HuffNode};

const SYMBOL_BITS: u64 = 8;

/// Longest root-to-leaf path a tree over 256 distinct symbols can have.
const MAX_DEPTH: usize = 255;

fn corrupt(msg: impl Into<String>) -> HuffmanError {
    HuffmanError::CorruptHeader(msg.into())
}

impl HuffmanTree {
    /// Appends the tree to `writer` and returns the number of bits written.
    pub fn serialize(&self, writer: &mut BinaryWriterBuilder) -> u64 {
        let start = writer.written_bits;
        let mut stack = vec![&self.root];

        while let Some(node) = stack.pop() {
            match node {
                HuffNode::Leaf { symbol, .. } => {
                    writer.push_bit(true);
                    writer.push_bits(*symbol as u64, SYMBOL_BITS);
                },
                HuffNode::Internal { left, right, .. } => {
                    writer.push_bit(false);
                    stack.push(right);
                    stack.push(left);
                }
            }
        }

        writer.written_bits - start
    }

    /// Reads one tree from `reader`, consuming exactly its bits. Leaves come back with
    /// zero weight.
    pub fn deserialize(reader: &mut BinaryReader) -> Result<Self> {
        // Internal nodes on the current path, holding their left child once it is complete
        let mut pending: Vec<Option<HuffNode>> = Vec::new();
        let mut seen = [false; 256];

        loop {
            let is_leaf = reader.read_bit().ok_or_else(|| corrupt("header ends before the tree is complete"))?;

            if !is_leaf {
                if pending.len() == MAX_DEPTH {
                    return Err(corrupt("tree is deeper than a byte alphabet allows"));
                }
                pending.push(None);
                continue;
            }

            let symbol = reader.read_int(SYMBOL_BITS).ok_or_else(|| corrupt("header ends inside a leaf symbol"))? as u8;
            if seen[symbol as usize] {
                return Err(corrupt(format!("symbol {} appears in more than one leaf", symbol)));
            }
            seen[symbol as usize] = true;

            let mut node = HuffNode::leaf(symbol, 0);
            loop {
                match pending.pop() {
                    None => return Ok(HuffmanTree { root: node }),
                    Some(None) => {
                        pending.push(Some(node));
                        break;
                    },
                    Some(Some(left)) => node = HuffNode::merge(left, node),
                }
            }
        }
    }

    /// Serializes the tree into a standalone header.
    pub fn to_header(&self) -> BinaryWriter {
        let mut writer = BinaryWriterBuilder::new();
        self.serialize(&mut writer);
        writer.build()
    }

    /// Reads a tree from a standalone header of `bits` meaningful bits, which must hold
    /// exactly one tree.
    pub fn from_header(header: &[u8], bits: u64) -> Result<Self> {
        let mut reader = BinaryReader::new(header, bits).ok_or_else(|| {
            corrupt(format!("header declares {} bits but holds {} bytes", bits, header.len()))
        })?;

        let tree = HuffmanTree::deserialize(&mut reader)?;

        if reader.remaining() != 0 {
            return Err(corrupt(format!("{} bits left after the tree", reader.remaining())));
        }

        Ok(tree)
    }
}
