use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the store and id-generation layers.
///
/// Every failure is reported to the caller as one of these variants; the
/// core never terminates the process and never returns a partially valid
/// structure.
#[derive(Error, Debug)]
pub enum BackupError {
    #[error("store file not found: {0}")]
    NotFound(String),
    #[error("store file is not valid JSON: {0}")]
    Decode(String),
    #[error("corrupt store: {0}")]
    CorruptStore(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error("id space exhausted for {max_chars}-character ids")]
    IdSpaceExhausted { max_chars: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = StdResult<T, BackupError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BackupError),
    #[error("Invalid input: {0}")]
    Input(String),
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Input(err.to_string())
    }
}
