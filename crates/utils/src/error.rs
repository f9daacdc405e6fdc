//! Result and Error types for the utils module

/// Type alias for `Result<T, utils::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, PartialEq)]
/// The error type for `edgetools_utils`
pub enum Error {
    /// An empty slice of floats for SliceExt
    SliceContainsNoValues,

    /// The slice of float values contains things like NAN or INFINITY
    SliceContainsUndefinedValues,
}

// error boilerplate
impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Error::SliceContainsNoValues => write!(fmt, "slice contains no values"),
            Error::SliceContainsUndefinedValues => {
                write!(fmt, "slice contains NaN or infinite values")
            }
        }
    }
}

// implement standard error trait to use with ? operator
impl std::error::Error for Error {}
