//! Error types for cryptographic engine operations.

use kmip_core::{ResultReason, ResultStatus};
use thiserror::Error;

/// Result type alias for cryptographic engine operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Cryptographic engine errors.
///
/// There are exactly two kinds. `InvalidField` means the request itself is
/// wrong and must be corrected by the caller. `CryptographicFailure` means a
/// primitive rejected well-formed input; its message is deliberately opaque and
/// the underlying detail is only written to the server log.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied parameter is unsupported, missing or inconsistent.
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// An underlying primitive rejected otherwise well-formed input.
    #[error("Cryptographic failure: {0}")]
    CryptographicFailure(String),
}

/// Fieldless discriminant of [`Error`] for callers that branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`Error::InvalidField`].
    InvalidField,
    /// See [`Error::CryptographicFailure`].
    CryptographicFailure,
}

impl Error {
    pub(crate) fn invalid_field(message: impl Into<String>) -> Self {
        Error::InvalidField(message.into())
    }

    /// Log `detail` on the server side and return an opaque failure.
    pub(crate) fn crypto_failure(message: &str, detail: impl core::fmt::Display) -> Self {
        tracing::error!(error = %detail, "{message}");
        Error::CryptographicFailure(format!(
            "{message} See the server log for more information."
        ))
    }

    /// Kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidField(_) => ErrorKind::InvalidField,
            Error::CryptographicFailure(_) => ErrorKind::CryptographicFailure,
        }
    }

    /// Protocol result status to report for this error.
    pub fn result_status(&self) -> ResultStatus {
        ResultStatus::OperationFailed
    }

    /// Protocol result reason to report for this error.
    pub fn result_reason(&self) -> ResultReason {
        match self.kind() {
            ErrorKind::InvalidField => ResultReason::InvalidField,
            ErrorKind::CryptographicFailure => ResultReason::CryptographicFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_reason_mapping() {
        let invalid = Error::invalid_field("Cipher mode is required.");
        assert_eq!(invalid.kind(), ErrorKind::InvalidField);
        assert_eq!(invalid.result_reason(), ResultReason::InvalidField);

        let failure = Error::crypto_failure("An error occurred while computing a CMAC.", "boom");
        assert_eq!(failure.kind(), ErrorKind::CryptographicFailure);
        assert_eq!(failure.result_reason(), ResultReason::CryptographicFailure);
    }

    /// Every engine error is reported as a failed operation.
    #[test]
    fn test_result_status() {
        let invalid = Error::invalid_field("Padding method is required.");
        let failure = Error::crypto_failure("Key wrapping failed.", "short input");
        for err in [invalid, failure] {
            assert_eq!(err.result_status(), ResultStatus::OperationFailed);
            assert_eq!(err.result_status().to_u32(), 0x01);
        }
    }

    /// The primitive's detail must never reach the caller.
    #[test]
    fn test_crypto_failure_is_opaque() {
        let failure = Error::crypto_failure("Key wrapping failed.", "InvalidDataSize: 7 bytes");
        let rendered = failure.to_string();
        assert!(rendered.contains("Key wrapping failed."));
        assert!(!rendered.contains("InvalidDataSize"));
    }
}
