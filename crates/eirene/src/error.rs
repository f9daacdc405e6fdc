//! Result and Error types for edgetools-eirene

/// Type alias for `Result<T, eirene::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `edgetools-eirene` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying stream I/O error
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),

    /// End of stream reached before the block was complete
    #[error("truncated block (expected {expected} tokens, found {found})")]
    TruncatedBlock { expected: usize, found: usize },

    /// A data token is not a valid floating point literal
    #[error("malformed token \"{token}\" at block position {position} (line {line})")]
    MalformedToken {
        token: String,
        position: usize,
        line: usize,
    },

    /// Dimensions that can not describe a block
    #[error("invalid block dimensions ({0})")]
    InvalidDimensions(String),

    /// Tokens left on the final line of a block under `Overflow::Reject`
    #[error("block ends mid-line with {extra} trailing tokens (line {line})")]
    MisalignedBlock { extra: usize, line: usize },
}
