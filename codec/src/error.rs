use std::error::Error as StdError;
use std::fmt;

/// Result alias used by all codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during encode/decode operations
#[derive(Debug)]
pub enum CodecError {
    /// Malformed textual payload for a primitive codec (bad number, bad
    /// boolean, empty character payload, invalid UTF-8)
    Format(String),
    /// JSON fallback failure, carries the underlying serde_json cause
    Serialization(serde_json::Error),
    /// A codec produced a decoded value of an unexpected type
    TypeMismatch { expected: &'static str },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Format(msg) => write!(f, "Malformed payload: {}", msg),
            CodecError::Serialization(err) => write!(f, "JSON codec failed: {}", err),
            CodecError::TypeMismatch { expected } => {
                write!(f, "Codec produced a value that is not a {}", expected)
            }
        }
    }
}

impl StdError for CodecError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            CodecError::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::Serialization(err)
    }
}
