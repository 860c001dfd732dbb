use thiserror::Error;

/// Failures talking to a tag or decoding what it returned
#[derive(Debug, Error)]
pub enum TagError {
    #[error("tag I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("tag was lost before the transfer completed")]
    TagLost,

    #[error("tag protocol error: {0}")]
    Protocol(String),

    #[error("short read: expected {expected} bytes, got {got}")]
    ShortRead { expected: usize, got: usize },

    #[error("failed to decode tag header: {0}")]
    Decode(#[from] binrw::Error),
}
