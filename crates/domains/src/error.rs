//! # Domain Errors
//!
//! Centralized error handling for the Finders crates. Every fallible
//! operation in the services and adapters returns [`DomainError`], so the
//! web layer can map failures onto the API's small status vocabulary
//! (bad input, bad credentials, everything else) in exactly one place.

use thiserror::Error;

/// The primary error type for all domain operations.
///
/// Each variant carries the message shown to the caller. Messages for
/// [`DomainError::Internal`] are for operators only and never leave the
/// process verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The request was understood but its content is unusable: a missing
    /// field, a duplicate email, a conversation with one participant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Credentials did not match any stored account.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Infrastructure failure, e.g. a poisoned store lock.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// The user-facing message, without the log prefix `Display` adds.
    pub fn message(&self) -> &str {
        match self {
            DomainError::Validation(msg)
            | DomainError::Unauthorized(msg)
            | DomainError::Internal(msg) => msg,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, DomainError>;
