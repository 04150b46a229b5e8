/// Packed bits plus the number of them that are meaningful.
///
/// Bit `i` lives at bit position `i % 8` of byte `i / 8`, least significant
/// bit first. Bits of the last byte past `bit_count` are padding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitstream {
    pub bit_count: u64,
    pub bytes: Vec<u8>,
}

impl Bitstream {
    pub fn new(bit_count: u64, bytes: Vec<u8>) -> Self {
        Bitstream { bit_count, bytes }
    }

    /// Number of bytes needed to hold `bit_count` bits.
    pub fn byte_len(bit_count: u64) -> u64 {
        bit_count.div_ceil(8)
    }

    pub fn reader(&self) -> BitReader<'_> {
        BitReader::new(&self.bytes, self.bit_count)
    }
}

pub struct BitWriter {
    index: u8,
    current: u8,
    bit_count: u64,
    sink: Vec<u8>,
}

impl BitWriter {
    pub fn new() -> Self {
        BitWriter {
            index: 0,
            current: 0,
            bit_count: 0,
            sink: Vec::new(),
        }
    }

    pub fn with_capacity(bytes: usize) -> Self {
        BitWriter {
            sink: Vec::with_capacity(bytes),
            ..BitWriter::new()
        }
    }

    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.current |= 1 << self.index;
        }
        self.index += 1;
        self.bit_count += 1;
        if self.index > 7 {
            self.sink.push(self.current);
            self.current = 0;
            self.index = 0;
        }
    }

    pub fn write(&mut self, bits: &[bool]) {
        for &bit in bits {
            self.write_bit(bit);
        }
    }

    /// Flushes the partial last byte, padded with zeros.
    pub fn finish(mut self) -> Bitstream {
        if self.index > 0 {
            self.sink.push(self.current);
        }
        Bitstream::new(self.bit_count, self.sink)
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Yields exactly `limit` bits, ignoring any padding after them.
pub struct BitReader<'a> {
    source: &'a [u8],
    position: u64,
    limit: u64,
}

impl<'a> BitReader<'a> {
    pub fn new(source: &'a [u8], limit: u64) -> Self {
        BitReader {
            source,
            position: 0,
            limit: limit.min(source.len() as u64 * 8),
        }
    }

    pub fn remaining(&self) -> u64 {
        self.limit - self.position
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.position >= self.limit {
            return None;
        }
        let byte = self.source[(self.position / 8) as usize];
        let val = (byte >> (self.position % 8)) & 0x01;
        self.position += 1;
        Some(val == 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::{BitReader, BitWriter, Bitstream};

    fn bits(v: &[u8]) -> Vec<bool> {
        v.iter().map(|&b| b == 1).collect()
    }

    #[test]
    fn can_read_from_one_byte() {
        let s: [u8; 1] = [0b10101101];
        let read: Vec<bool> = BitReader::new(&s, 8).collect();
        assert_eq!(read, bits(&[1, 0, 1, 1, 0, 1, 0, 1]));
    }

    #[test]
    fn can_read_from_more_bytes() {
        let s: [u8; 2] = [0b10101101, 0b10101010];
        let mut reader = BitReader::new(&s, 16);

        // skip first byte
        for _ in 0..8 {
            reader.next().unwrap();
        }

        let read: Vec<bool> = reader.collect();
        assert_eq!(read, bits(&[0, 1, 0, 1, 0, 1, 0, 1]));
    }

    #[test]
    fn read_stops_at_limit() {
        let s: [u8; 1] = [0xff];
        let reader = BitReader::new(&s, 3);
        assert_eq!(reader.size_hint(), (3, Some(3)));
        assert_eq!(reader.count(), 3);
    }

    #[test]
    fn read_empty() {
        let s: [u8; 0] = [];
        assert_eq!(BitReader::new(&s, 10).next(), None);
    }

    #[test]
    fn write_lsb_first() {
        let mut writer = BitWriter::new();
        writer.write(&bits(&[1, 0, 1, 1, 0, 1, 0, 1]));
        assert_eq!(writer.finish(), Bitstream::new(8, vec![0b10101101]));
    }

    #[test]
    fn write_pads_last_byte() {
        let mut writer = BitWriter::new();
        writer.write(&bits(&[1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1]));
        let stream = writer.finish();
        assert_eq!(stream.bit_count, 11);
        assert_eq!(stream.bytes, vec![0xff, 0b0000_0110]);
    }

    #[test]
    fn write_nothing() {
        assert_eq!(BitWriter::new().finish(), Bitstream::default());
    }

    #[test]
    fn byte_len_rounds_up() {
        assert_eq!(Bitstream::byte_len(0), 0);
        assert_eq!(Bitstream::byte_len(1), 1);
        assert_eq!(Bitstream::byte_len(8), 1);
        assert_eq!(Bitstream::byte_len(9), 2);
    }
}
