use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot access file \"{:?}\"", .path.as_path())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Generic I/O error")]
    Io(#[from] io::Error),

    #[error("Malformed compressed data: {0}")]
    Format(String),

    #[error("Internal invariant violated: {0}")]
    Invariant(String),

    #[error("Invalid configuration file")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        Error::Format(msg.into())
    }

    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        Error::Invariant(msg.into())
    }
}
