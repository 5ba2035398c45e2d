// Error type shared by every step of the registration run. Each variant
// carries the path involved (where there is one) and the underlying cause,
// so the binary can print a useful chain without extra context calls.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistrarError>;

#[derive(Debug, Error)]
pub enum RegistrarError {
    /// Standard input closed or failed before both values were read.
    #[error("input unavailable while reading {field}")]
    InputUnavailable {
        field: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("user file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The file exists but could not be read (permissions, a directory, ...).
    #[error("failed to read user file {}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed user data in {}", path.display())]
    MalformedData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write user file {}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
