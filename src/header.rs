use std::io::{self, BufRead, Write};

use crate::{
    error::{Error, Result},
    frequency::{FrequencyTable, SYMBOLS},
};

/// Bytes taken by the frequency table, one `i32` per symbol.
pub const TABLE_LEN: usize = SYMBOLS * 4;

/// Framing that precedes the packed bits of a compressed file:
/// the frequency table as 256 little-endian `i32`, then the bit count as
/// decimal text on its own line (`"\n{bit_count}\n"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub counts: FrequencyTable,
    pub bit_count: u64,
}

impl Header {
    pub fn new(counts: FrequencyTable, bit_count: u64) -> Self {
        Header { counts, bit_count }
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        for (symbol, &count) in self.counts.counts().iter().enumerate() {
            let count = i32::try_from(count).map_err(|_| {
                Error::invariant(format!(
                    "count {count} of byte {symbol:#04x} does not fit the header"
                ))
            })?;
            writer.write_all(&count.to_le_bytes())?;
        }
        write!(writer, "\n{}\n", self.bit_count)?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(TABLE_LEN + 22);
        self.write(&mut bytes)?;
        Ok(bytes)
    }

    pub fn read<R: BufRead>(reader: &mut R) -> Result<Header> {
        let mut table = [0u8; TABLE_LEN];
        reader
            .read_exact(&mut table)
            .map_err(|e| truncated(e, "frequency table"))?;

        let mut counts = FrequencyTable::new();
        for (symbol, chunk) in (0..=u8::MAX).zip(table.chunks_exact(4)) {
            let count = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            let count = u64::try_from(count).map_err(|_| {
                Error::format(format!("negative count {count} for byte {symbol:#04x}"))
            })?;
            counts.set(symbol, count);
        }

        let separator = read_line(reader)?;
        if !separator.is_empty() {
            return Err(Error::format("missing line break after frequency table"));
        }

        let line = read_line(reader)?;
        if line.is_empty() || !line.iter().all(u8::is_ascii_digit) {
            return Err(Error::format(format!(
                "bit count {:?} is not a decimal number",
                String::from_utf8_lossy(&line)
            )));
        }
        let bit_count = std::str::from_utf8(&line)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .ok_or_else(|| Error::format("bit count out of range"))?;

        Ok(Header { counts, bit_count })
    }
}

/// Reads up to and including the next line feed, which is stripped.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Vec<u8>> {
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    if line.pop() != Some(b'\n') {
        return Err(Error::format("header ends before the bit count line"));
    }
    Ok(line)
}

fn truncated(e: io::Error, what: &str) -> Error {
    match e.kind() {
        io::ErrorKind::UnexpectedEof => Error::format(format!("truncated {what}")),
        _ => Error::Io(e),
    }
}
