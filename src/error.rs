//! Error types for describe-ec2.

use aws_sdk_ec2::error::DisplayErrorContext;
use thiserror::Error;

/// Errors surfaced to the user.
#[derive(Error, Debug)]
pub enum Error {
    /// Wrong number of positional arguments.
    #[error("{0}")]
    Args(String),

    /// AWS session could not be configured.
    #[error("{0}")]
    Config(String),

    /// DescribeInstances failed (auth, network and service errors alike).
    #[error("{0}")]
    Lookup(String),

    /// The filter matched no reservations.
    #[error("Instance not found.")]
    NotFound,

    /// Some output files could not be written.
    #[error("{0} file(s) could not be written")]
    WriteFailed(usize),

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap any SDK error as a lookup failure, keeping its source chain.
    pub fn lookup<E: std::error::Error>(err: E) -> Self {
        Error::Lookup(DisplayErrorContext(err).to_string())
    }
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
