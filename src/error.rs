use std::{io, path::PathBuf, time::SystemTimeError};

use thiserror::Error;

/// Errors returned by the rolekit library.
///
/// Validation failures (`InvalidAccountId`, `InvalidArn`, `InvalidTimeFormat`,
/// `UnsupportedAction`) describe bad caller input and are never retried.
/// `Io` and `Sink` wrap failures of the outside world.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid AWS account id: {0}")]
    InvalidAccountId(String),

    #[error("invalid role ARN '{arn}': {reason}")]
    InvalidArn { arn: String, reason: &'static str },

    #[error("invalid time '{input}': {reason}")]
    InvalidTimeFormat { input: String, reason: String },

    #[error("unsupported url action: '{0}'")]
    UnsupportedAction(String),

    #[error("failed to create directory {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{sink} failed: {message}")]
    Sink { sink: &'static str, message: String },

    #[error("unable to read system clock")]
    Clock(#[from] SystemTimeError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_arn(arn: &str, reason: &'static str) -> Self {
        Self::InvalidArn {
            arn: arn.to_string(),
            reason,
        }
    }

    pub(crate) fn sink(sink: &'static str, message: impl ToString) -> Self {
        Self::Sink {
            sink,
            message: message.to_string(),
        }
    }
}
