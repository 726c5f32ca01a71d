//! Unified error handling for csgen Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for csgen Core operations.
#[derive(Debug, Error, Clone)]
pub enum CsgenError {
    /// Errors from the domain layer (declaration, context and manifest rules).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, rendering, codec failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CsgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in csgen".into()],
        }
    }

    /// Get error category for display and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Structure => ErrorCategory::Structure,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` if the manifest was missing its insertion point.
    pub fn is_structure_error(&self) -> bool {
        self.category() == ErrorCategory::Structure
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Structure,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type CsgenResult<T> = Result<T, CsgenError>;
