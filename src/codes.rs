use std::fmt;

use itertools::Itertools;

use crate::{frequency::SYMBOLS, tree::HuffmanTree};

/// Root-to-leaf path of a symbol, `false` for left and `true` for right.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Vec<bool>);

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

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().map(|&b| if b { '1' } else { '0' }).join(""))
    }
}

impl From<&str> for Code {
    fn from(bits: &str) -> Self {
        Code(bits.chars().map(|c| c == '1').collect())
    }
}

/// Code of every symbol present in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    pub fn new(tree: Option<&HuffmanTree>) -> Self {
        let mut codes = vec![None; SYMBOLS];

        let Some(root) = tree else {
            return CodeTable { codes };
        };

        // A lone leaf has an empty path, it gets the one bit code "0".
        if let HuffmanTree::Leaf(_, symbol) = root {
            codes[*symbol as usize] = Some(Code(vec![false]));
            return CodeTable { codes };
        }

        let mut stack: Vec<(&HuffmanTree, Vec<bool>)> = vec![(root, Vec::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                HuffmanTree::Leaf(_, symbol) => codes[*symbol as usize] = Some(Code(path)),
                HuffmanTree::Node(_, left, right) => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    stack.push((&**right, right_path));

                    let mut left_path = path;
                    left_path.push(false);
                    stack.push((&**left, left_path));
                }
            }
        }

        CodeTable { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes[symbol as usize].as_ref()
    }

    /// Symbols with a code, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        (0..=u8::MAX).filter_map(|symbol| self.get(symbol).map(|code| (symbol, code)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(Option::is_none)
    }

    /// Number of bits needed to encode `data`, `None` if a byte has no code.
    pub fn encoded_len(&self, data: &[u8]) -> Option<u64> {
        data.iter()
            .map(|&byte| self.get(byte).map(|code| code.len() as u64))
            .sum()
    }
}
