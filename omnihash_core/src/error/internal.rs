//! Internal library error types

use thiserror::Error;

/// Internal library errors
///
/// These are not expected in normal operation; a digest failure is treated
/// as fatal to the computation run it occurs in.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Digest calculation error
    #[error("Digest calculation failed for algorithm '{algorithm}': {message}")]
    DigestFailure { algorithm: String, message: String },

    /// Internal assertion failure
    #[error("Internal assertion failed: {message}")]
    Assertion { message: String },
}

impl InternalError {
    /// Create a digest failure error
    pub fn digest_failure(algorithm: &str, message: &str) -> Self {
        Self::DigestFailure {
            algorithm: algorithm.to_string(),
            message: message.to_string(),
        }
    }

    /// Create an internal assertion failure error
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_failure_includes_algorithm_context() {
        for algorithm in ["crc16", "md5", "haval128", "base64"] {
            let error = InternalError::digest_failure(algorithm, "test fault");
            assert!(error.to_string().contains(algorithm));
        }
    }

    #[test]
    fn test_assertion_error() {
        let error = InternalError::assertion("registry index out of range");
        assert!(error.to_string().contains("registry index"));
    }
}
