use std::{collections::BTreeMap, fmt};

use crate::{frequency::FrequencyTable, tree::{HuffmanTree, HuffNode}};

/// Root-to-leaf path of a symbol: `false` for a left branch, `true` for a right one.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(Box<[bool]>);

impl Code {
    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl From<Vec<bool>> for Code {
    fn from(bits: Vec<bool>) -> Self {
        Code(bits.into_boxed_slice())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in self.0.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Symbol to code mapping derived from the leaf paths of a tree, hence prefix-free.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    /// Walks the tree once, recording each leaf's path. A tree made of a single leaf
    /// has no path, so its symbol gets the code `0`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable::default();

        if let HuffNode::Leaf { symbol, .. } = &tree.root {
            table.codes.insert(*symbol, Code::from(vec![false]));
            return table;
        }

        let mut path = Vec::with_capacity(tree.depth());
        table.get_codes(&tree.root, &mut path);
        table
    }

    fn get_codes(&mut self, node: &HuffNode, path: &mut Vec<bool>) {
        match node {
            HuffNode::Leaf { symbol, .. } => {
                self.codes.insert(*symbol, Code::from(path.clone()));
            },
            HuffNode::Internal { left, right, .. } => {
                path.push(false);
                self.get_codes(left, path);
                path.pop();

                path.push(true);
                self.get_codes(right, path);
                path.pop();
            }
        }
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    pub fn min_len(&self) -> usize {
        self.codes.values().map(Code::len).min().unwrap_or(0)
    }

    pub fn max_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Number of content bits needed to encode an input with these frequencies.
    ///
    /// Symbols missing from the table are not counted.
    pub fn encoded_bits(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies.iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| count * code.len() as u64))
            .sum()
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "'{}' ({}) -> {}", (symbol as char).escape_default(), symbol, code)?;
        }
        Ok(())
    }
}
