//! Error types for the omnihash core library
//!
//! Errors are organized into three categories: I/O errors raised while
//! opening or reading an input file, validation errors for bad caller
//! input, and internal errors for faults inside the digest machinery.
//! Cancellation of a streaming run is deliberately NOT an error; it is a
//! normal terminal state reported through the engine's event stream.

use thiserror::Error;

pub mod internal;
pub mod io;
pub mod validation;

pub use self::io::{IoError, IoErrorKind};
pub use internal::InternalError;
pub use validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the omnihash core library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Internal library errors
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io(IoError::from_std(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;
    use std::io;
    use std::path::Path;

    #[test]
    fn test_file_not_found_error_creation() {
        let path = Path::new("/non/existent/input.bin");
        let error = Error::Io(IoError::file_not_found(path));

        match error {
            Error::Io(io_err) => {
                assert_eq!(io_err.kind, IoErrorKind::FileNotFound);
                assert_eq!(io_err.path, Some(path.to_path_buf()));
            }
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_digest_failure_error_creation() {
        let error = Error::Internal(InternalError::digest_failure("haval256", "state corrupted"));

        match error {
            Error::Internal(InternalError::DigestFailure { algorithm, message }) => {
                assert_eq!(algorithm, "haval256");
                assert_eq!(message, "state corrupted");
            }
            _ => panic!("Expected Internal::DigestFailure error"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();

        match error {
            Error::Io(io_err) => assert_eq!(io_err.kind, IoErrorKind::FileNotFound),
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let path = Path::new("/root/protected.bin");
        let error = Error::Io(IoError::permission_denied(path, io_error));

        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_error_display_formatting() {
        let errors = vec![
            Error::Io(IoError::file_not_found(Path::new("input.bin"))),
            Error::Validation(ValidationError::invalid_configuration("bad chunk size")),
            Error::Internal(InternalError::digest_failure("crc16", "table fault")),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
