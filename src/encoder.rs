use tracing::debug;

use crate::{
    bitmanipulation::{BitWriter, Bitstream},
    codes::CodeTable,
    error::{Error, Result},
    frequency::FrequencyTable,
    tree::HuffmanTree,
};

pub struct HuffmanEncoder {
    codes: CodeTable,
}

impl HuffmanEncoder {
    pub fn new(counts: &FrequencyTable) -> Self {
        let tree = HuffmanTree::create(counts);
        HuffmanEncoder {
            codes: CodeTable::new(tree.as_ref()),
        }
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    /// Concatenates the code of every byte of `data`.
    pub fn encode(&self, data: &[u8]) -> Result<Bitstream> {
        let mut writer = BitWriter::with_capacity(data.len());

        for &byte in data {
            let code = self
                .codes
                .get(byte)
                .ok_or_else(|| Error::invariant(format!("byte {byte:#04x} has no code")))?;
            writer.write(code.bits());
        }

        let stream = writer.finish();
        debug!(
            symbols = self.codes.len(),
            bits = stream.bit_count,
            bytes = stream.bytes.len(),
            "packed bitstream"
        );
        Ok(stream)
    }
}

#[cfg(test)]
mod tests {
    use crate::{encoder::HuffmanEncoder, error::Error, frequency::FrequencyTable};

    #[test]
    fn test_encode() {
        let counts = FrequencyTable::count(b"abacba");
        let encoder = HuffmanEncoder::new(&counts);

        // a = 0, c = 10, b = 11
        let stream = encoder.encode(b"abc").unwrap();
        assert_eq!(stream.bit_count, 5);
        assert_eq!(stream.bytes, vec![0b00001110]);
    }

    #[test]
    fn bit_count_is_sum_of_code_lengths() {
        let data = b"aaabbc";
        let encoder = HuffmanEncoder::new(&FrequencyTable::count(data));
        let stream = encoder.encode(data).unwrap();
        assert_eq!(Some(stream.bit_count), encoder.codes().encoded_len(data));
        assert_eq!(stream.bit_count, 9);
        assert_eq!(stream.bytes.len(), 2);
    }

    #[test]
    fn single_symbol_uses_one_bit_each() {
        let data = [7u8; 10];
        let encoder = HuffmanEncoder::new(&FrequencyTable::count(&data));
        let stream = encoder.encode(&data).unwrap();
        assert_eq!(stream.bit_count, 10);
        assert_eq!(stream.bytes, vec![0, 0]);
    }

    #[test]
    fn unknown_byte_is_an_invariant_violation() {
        let encoder = HuffmanEncoder::new(&FrequencyTable::count(b"ab"));
        let result = encoder.encode(b"abc");
        assert!(matches!(result, Err(Error::Invariant(_))));
    }

    #[test]
    fn empty_input() {
        let encoder = HuffmanEncoder::new(&FrequencyTable::new());
        let stream = encoder.encode(&[]).unwrap();
        assert_eq!(stream.bit_count, 0);
        assert!(stream.bytes.is_empty());
    }
}
