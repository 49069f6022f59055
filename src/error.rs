//! Error taxonomy shared by the persistence gateway and the record handlers.

use rusqlite::ErrorCode;
use thiserror::Error;

/// Every failure the record core can report. None of them are fatal: the
/// message is always meant to be shown to the user verbatim.
#[derive(Debug, Error)]
pub enum ClinicError {
    /// A required input was empty. Raised before any statement runs.
    #[error("{0}")]
    Validation(String),
    /// The store rejected a write because of a UNIQUE, NOT NULL or FOREIGN KEY
    /// constraint.
    #[error("{0}")]
    Constraint(String),
    /// Any other backend failure, including unknown tables or columns.
    #[error("{0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, ClinicError>;

impl From<rusqlite::Error> for ClinicError {
    fn from(err: rusqlite::Error) -> Self {
        if matches!(
            err.sqlite_error_code(),
            Some(ErrorCode::ConstraintViolation)
        ) {
            ClinicError::Constraint(err.to_string())
        } else {
            ClinicError::Storage(err.to_string())
        }
    }
}

/// Result of one user action, folded into the three cases the shell renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    ValidationFailure(String),
    StorageFailure(String),
}

impl Outcome {
    /// Fold a core result into an outcome, using `success` for the happy path.
    pub fn from_result<T>(result: &Result<T>, success: impl FnOnce(&T) -> String) -> Self {
        match result {
            Ok(value) => Outcome::Success(success(value)),
            Err(err) => Outcome::from(err),
        }
    }

    /// Prefix the message of a failed outcome; successes pass through.
    pub fn with_failure_prefix(self, prefix: &str) -> Self {
        match self {
            Outcome::Success(message) => Outcome::Success(message),
            Outcome::ValidationFailure(message) => {
                Outcome::ValidationFailure(format!("{prefix}: {message}"))
            }
            Outcome::StorageFailure(message) => {
                Outcome::StorageFailure(format!("{prefix}: {message}"))
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Success(message)
            | Outcome::ValidationFailure(message)
            | Outcome::StorageFailure(message) => message,
        }
    }
}

impl From<&ClinicError> for Outcome {
    fn from(err: &ClinicError) -> Self {
        match err {
            ClinicError::Validation(message) => Outcome::ValidationFailure(message.clone()),
            ClinicError::Constraint(message) | ClinicError::Storage(message) => {
                Outcome::StorageFailure(message.clone())
            }
        }
    }
}
