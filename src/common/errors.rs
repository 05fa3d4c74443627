use std::{io::Error as IoError, path::PathBuf, result};

use thiserror::Error as ThisError;

pub type Result<T, E = Error> = result::Result<T, E>;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Io Error: {0}")]
    Io(#[from] IoError),

    // For configuration
    #[error("Can't open configuration file {path:?}: {source}")]
    ConfigUnreadable { path: PathBuf, source: IoError },
    #[error("Configuration file is invalid: {0}")]
    Config(#[from] toml::de::Error),

    // For logging
    #[error("Log filter is invalid: {0}")]
    LogFilter(String),
}

impl From<tracing_subscriber::filter::ParseError> for Error {
    fn from(err: tracing_subscriber::filter::ParseError) -> Error {
        Error::LogFilter(format!("{}", err))
    }
}
