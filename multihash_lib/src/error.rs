use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MultihashError {
    #[error("Invalid hash kind: {0}")]
    InvalidHashKind(String),
    #[error("Malformed buffer: {0}")]
    MalformedBuffer(String),
    #[error("Trailing bytes after multihash: consumed {consumed} of {total} bytes")]
    TrailingBytes { consumed: usize, total: usize },
    #[error("I/O error while hashing: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, MultihashError>;
