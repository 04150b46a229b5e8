//! Static Huffman compression of byte streams.
//!
//! A compressed file is a [`Header`] (the frequency of every byte value and
//! the number of meaningful bits) followed by the packed codes. The decoder
//! rebuilds the same tree from the frequencies, so nothing else is stored.
//!
//! ```
//! let packed = rhuff::compress_bytes(b"aaabbc")?;
//! assert_eq!(rhuff::decompress_bytes(&packed)?, b"aaabbc");
//! # Ok::<(), rhuff::Error>(())
//! ```

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

pub mod bitmanipulation;
pub mod codes;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod header;
pub mod logger;
pub mod tree;

pub use bitmanipulation::Bitstream;
pub use codes::{Code, CodeTable};
pub use config::Config;
pub use decoder::HuffmanDecoder;
pub use encoder::HuffmanEncoder;
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use header::Header;
pub use tree::HuffmanTree;

/// Runs the compression pipeline without serializing the result.
pub fn compress_parts(data: &[u8]) -> Result<(Header, Bitstream)> {
    let counts = FrequencyTable::count(data);
    debug!(len = data.len(), symbols = counts.distinct(), "counted frequencies");

    let stream = HuffmanEncoder::new(&counts).encode(data)?;
    Ok((Header::new(counts, stream.bit_count), stream))
}

pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let (header, stream) = compress_parts(data)?;
    let mut bytes = header.to_bytes()?;
    bytes.extend_from_slice(&stream.bytes);
    Ok(bytes)
}

pub fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut reader = data;
    let header = Header::read(&mut reader)?;

    let needed = Bitstream::byte_len(header.bit_count);
    let available = reader.len() as u64;
    if available < needed {
        return Err(Error::format(format!(
            "payload holds {available} bytes, {needed} needed for {} bits",
            header.bit_count
        )));
    }
    if available > needed {
        warn!(extra = available - needed, "ignoring bytes after the payload");
    }

    let stream = Bitstream::new(header.bit_count, reader[..needed as usize].to_vec());
    let output = HuffmanDecoder::new(&header.counts).decode(&stream)?;

    if output.len() as u64 != header.counts.total() {
        return Err(Error::format(format!(
            "decoded {} bytes, frequency table accounts for {}",
            output.len(),
            header.counts.total()
        )));
    }
    Ok(output)
}

pub fn read_all_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::File {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writes `header` then `payload` to a fresh file at `path`. A file left
/// half written by a failed write is removed.
pub fn write_all_bytes(path: &Path, header: &[u8], payload: &[u8]) -> Result<()> {
    let file_error = |e: io::Error| Error::File {
        path: path.to_path_buf(),
        source: e,
    };

    let mut file = File::create(path).map_err(file_error)?;
    let written = file
        .write_all(header)
        .and_then(|_| file.write_all(payload))
        .and_then(|_| file.flush());
    if let Err(e) = written {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(file_error(e));
    }
    Ok(())
}

/// Output location for `input` inside `dir`: the input's file name, plus
/// `extension` when given.
pub fn output_path(input: &Path, dir: &Path, extension: Option<&str>) -> Result<PathBuf> {
    let name = input.file_name().ok_or_else(|| {
        Error::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no file name", input.display()),
        ))
    })?;

    let mut name = name.to_os_string();
    if let Some(extension) = extension {
        name.push(extension);
    }
    Ok(dir.join(name))
}

/// Sizes of one file level run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub input_len: u64,
    pub output_len: u64,
}

impl Stats {
    pub fn ratio(&self) -> f64 {
        if self.input_len == 0 {
            return 0.0;
        }
        self.output_len as f64 / self.input_len as f64
    }
}

pub fn compress_file(input: &Path, output: &Path) -> Result<Stats> {
    let data = read_all_bytes(input)?;
    let (header, stream) = compress_parts(&data)?;
    let header = header.to_bytes()?;
    write_all_bytes(output, &header, &stream.bytes)?;

    let stats = Stats {
        input_len: data.len() as u64,
        output_len: (header.len() + stream.bytes.len()) as u64,
    };
    info!(
        input = %input.display(),
        output = %output.display(),
        bytes_in = stats.input_len,
        bytes_out = stats.output_len,
        ratio = stats.ratio(),
        "compressed"
    );
    Ok(stats)
}

pub fn decompress_file(input: &Path, output: &Path) -> Result<Stats> {
    let data = read_all_bytes(input)?;
    let decoded = decompress_bytes(&data)?;
    write_all_bytes(output, &[], &decoded)?;

    let stats = Stats {
        input_len: data.len() as u64,
        output_len: decoded.len() as u64,
    };
    info!(
        input = %input.display(),
        output = %output.display(),
        bytes_in = stats.input_len,
        bytes_out = stats.output_len,
        "decompressed"
    );
    Ok(stats)
}
