use tracing::debug;

use crate::{
    bitmanipulation::Bitstream,
    error::{Error, Result},
    frequency::FrequencyTable,
    tree::HuffmanTree,
};

pub struct HuffmanDecoder {
    tree: Option<HuffmanTree>,
}

impl HuffmanDecoder {
    pub fn new(counts: &FrequencyTable) -> HuffmanDecoder {
        HuffmanDecoder {
            tree: HuffmanTree::create(counts),
        }
    }

    /// Walks the tree once per bit, emitting a symbol on every leaf reached.
    pub fn decode(&self, stream: &Bitstream) -> Result<Vec<u8>> {
        if stream.bit_count == 0 {
            return Ok(Vec::new());
        }
        if (stream.bytes.len() as u64) < Bitstream::byte_len(stream.bit_count) {
            return Err(Error::format(format!(
                "{} bits declared but only {} payload bytes present",
                stream.bit_count,
                stream.bytes.len()
            )));
        }
        let root = self.tree.as_ref().ok_or_else(|| {
            Error::invariant(format!("no tree to decode {} bits", stream.bit_count))
        })?;

        let mut output = Vec::new();

        // Every bit of a single leaf tree is one occurrence of its symbol.
        if let HuffmanTree::Leaf(_, symbol) = root {
            output.resize(stream.bit_count as usize, *symbol);
            return Ok(output);
        }

        let mut current = root;
        for bit in stream.reader() {
            if let HuffmanTree::Node(_, left, right) = current {
                current = if bit { &**right } else { &**left };
            }

            if let HuffmanTree::Leaf(_, value) = current {
                output.push(*value);
                current = root;
            }
        }

        if !std::ptr::eq(current, root) {
            return Err(Error::format("bitstream ends in the middle of a code"));
        }

        debug!(bits = stream.bit_count, bytes = output.len(), "unpacked bitstream");
        Ok(output)
    }
}
