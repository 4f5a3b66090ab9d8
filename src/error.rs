//! Crate-level error type.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::dictionary::DictionaryError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// Rejected typed input, such as an empty word at a presentation layer.
    #[error("invalid input: {0}")]
    Input(String),

    /// Writing results failed, e.g. a closed pipe or a full device.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
