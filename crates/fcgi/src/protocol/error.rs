use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FcgiError {
    #[error("decode error: {source}")]
    DecodeError {
        #[from]
        source: ParseError,
    },

    #[error("encode error: {source}")]
    EncodeError {
        #[from]
        source: SendError,
    },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("buffer is {missing} byte(s) short")]
    TruncatedBuffer { missing: usize },

    #[error("failed to allocate decode output: {source}")]
    AllocationFailure {
        #[from]
        source: TryReserveError,
    },

    #[error("invalid record body: {reason}")]
    InvalidBody { reason: String },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn truncated(missing: usize) -> Self {
        Self::TruncatedBuffer { missing }
    }

    pub fn invalid_body<S: ToString>(str: S) -> Self {
        Self::InvalidBody { reason: str.to_string() }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }

    /// Returns the number of missing bytes if this is a truncation error.
    pub fn missing_bytes(&self) -> Option<usize> {
        match self {
            Self::TruncatedBuffer { missing } => Some(*missing),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("pair {field} length {length} exceeds the limit {max}", max = crate::protocol::MAX_PAIR_LEN)]
    LengthTooLarge { field: &'static str, length: usize },

    #[error("header field {field} value {value} exceed the limit {max}")]
    ValueOutOfRange { field: &'static str, value: usize, max: usize },

    #[error("record content length {length} exceed the limit {max}", max = crate::protocol::MAX_CONTENT_LEN)]
    ContentTooLarge { length: usize },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl SendError {
    pub fn length_too_large(field: &'static str, length: usize) -> Self {
        Self::LengthTooLarge { field, length }
    }

    pub fn value_out_of_range(field: &'static str, value: usize, max: usize) -> Self {
        Self::ValueOutOfRange { field, value, max }
    }

    pub fn content_too_large(length: usize) -> Self {
        Self::ContentTooLarge { length }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_message_names_missing_bytes() {
        let error = ParseError::truncated(3);
        assert_eq!(error.to_string(), "buffer is 3 byte(s) short");
        assert_eq!(error.missing_bytes(), Some(3));
        assert_eq!(ParseError::invalid_body("x").missing_bytes(), None);
    }

    #[test]
    fn wraps_into_top_level_error() {
        let error: FcgiError = SendError::value_out_of_range("version", 256, 255).into();
        assert!(matches!(error, FcgiError::EncodeError { source: SendError::ValueOutOfRange { field: "version", .. } }));
        assert_eq!(error.to_string(), "encode error: header field version value 256 exceed the limit 255");
    }
}
