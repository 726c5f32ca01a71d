// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Duplicate output path: {path}")]
    DuplicateOutput { path: String },

    #[error("Invalid file declaration: {0}")]
    InvalidDeclaration(String),

    #[error("Invalid template context: {0}")]
    InvalidContext(String),

    #[error("{}", describe_arguments(.missing, .rejected))]
    InvalidArguments {
        missing: Vec<String>,
        rejected: Vec<String>,
    },

    #[error("Invalid value for argument '{name}': {reason}")]
    InvalidArgumentValue { name: String, reason: String },

    #[error("Invalid insertion path '{path}': {reason}")]
    InvalidInsertionPath { path: String, reason: String },

    // ========================================================================
    // Structure Errors
    // ========================================================================
    #[error("Include element not found in project file")]
    InsertionPointMissing { path: String },
}

fn describe_arguments(missing: &[String], rejected: &[String]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("Missing arguments [{}]", missing.join(",")));
    }
    if !rejected.is_empty() {
        parts.push(format!("Rejected arguments [{}]", rejected.join(",")));
    }
    parts.join("; ")
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DuplicateOutput { path } => vec![
                format!("'{}' is declared more than once", path),
                "Each generated file needs its own output path".into(),
            ],
            Self::InvalidArguments { missing, .. } => {
                let mut out = Vec::new();
                for name in missing {
                    out.push(format!("Provide it with --set {}=VALUE", name));
                }
                out.push("Use 'csgen list' to see the arguments each generator accepts".into());
                out
            }
            Self::InsertionPointMissing { path } => vec![
                format!("Expected element path: {}", path),
                "Check that the project file is a Visual Studio C# project".into(),
                "No files were added to the project file".into(),
            ],
            Self::InvalidInsertionPath { .. } => vec![
                "Use slash-separated element names, e.g. VisualStudioProject/CSHARP/Files/Include"
                    .into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InsertionPointMissing { .. } => ErrorCategory::Structure,
            Self::InvalidContext(_) => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Structure,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_message_lists_missing_and_rejected() {
        let err = DomainError::InvalidArguments {
            missing: vec!["name".into()],
            rejected: vec!["colour".into(), "size".into()],
        };
        assert_eq!(
            err.to_string(),
            "Missing arguments [name]; Rejected arguments [colour,size]"
        );
    }

    #[test]
    fn argument_message_only_rejected() {
        let err = DomainError::InvalidArguments {
            missing: vec![],
            rejected: vec!["x".into()],
        };
        assert_eq!(err.to_string(), "Rejected arguments [x]");
    }

    #[test]
    fn missing_argument_suggests_set_flag() {
        let err = DomainError::InvalidArguments {
            missing: vec!["name".into()],
            rejected: vec![],
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--set name=")));
    }
}
