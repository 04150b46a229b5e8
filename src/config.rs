use std::{fs, path::PathBuf};

use serde_derive::Deserialize;

use crate::error::{Error, Result};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Where compressed files go when no output path is given.
    pub compressed_dir: PathBuf,
    /// Where decompressed files go when no output path is given.
    pub decompressed_dir: PathBuf,
    /// Appended to the input's file name to form derived output names.
    pub extension: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compressed_dir: PathBuf::from("../Compressed"),
            decompressed_dir: PathBuf::from("../Decompressed"),
            extension: None,
        }
    }
}

impl Config {
    pub fn new(path: &PathBuf) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::File {
            path: path.clone(),
            source: e,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(Error::Config)
    }
}
