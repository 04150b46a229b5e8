/// Number of distinct symbols, one per byte value.
pub const SYMBOLS: usize = 256;

/// Occurrence count of every byte value in an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; SYMBOLS],
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable {
            counts: [0; SYMBOLS],
        }
    }

    pub fn count(data: &[u8]) -> Self {
        let mut table = FrequencyTable::new();
        for &byte in data {
            table.counts[byte as usize] += 1;
        }
        table
    }

    pub fn from_counts(counts: [u64; SYMBOLS]) -> Self {
        FrequencyTable { counts }
    }

    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    pub fn set(&mut self, symbol: u8, count: u64) {
        self.counts[symbol as usize] = count;
    }

    pub fn counts(&self) -> &[u64; SYMBOLS] {
        &self.counts
    }

    /// Symbols with a nonzero count, in ascending symbol order.
    pub fn symbols(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        (0..=u8::MAX)
            .map(|symbol| (symbol, self.get(symbol)))
            .filter(|&(_, count)| count > 0)
    }

    pub fn distinct(&self) -> usize {
        self.symbols().count()
    }

    /// Length of the input the table was counted from.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
