use thiserror::Error;

use super::{GLenum, GL_INVALID_OPERATION, GL_INVALID_VALUE};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An offset or size does not fit the 32-bit pointer-sized parameter
    /// of the narrow entry point variant.
    #[error("`{name}` value {value} is out of range for a 32-bit pointer-sized argument")]
    InvalidValue { name: &'static str, value: i64 },
    /// Parallel argument arrays disagree in length.
    #[error("argument arrays have mismatched lengths: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    /// The entry point was not exported by the context the table was loaded against.
    #[error("`{0}` is not available in the current context")]
    Unavailable(&'static str),
}

impl Error {
    /// The GL error enum reported to C callers for this error.
    pub fn code(&self) -> GLenum {
        match *self {
            Error::InvalidValue { .. } | Error::LengthMismatch { .. } => GL_INVALID_VALUE,
            Error::Unavailable(_) => GL_INVALID_OPERATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        let err = Error::InvalidValue { name: "size", value: 1 << 40 };
        assert_eq!(err.code(), GL_INVALID_VALUE);
        assert_eq!(Error::Unavailable("glBufferData").code(), GL_INVALID_OPERATION);
    }

    #[test]
    fn display_names_the_symbol() {
        let msg = Error::Unavailable("glMapBufferRange").to_string();
        assert!(msg.contains("glMapBufferRange"));
    }
}
