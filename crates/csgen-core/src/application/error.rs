//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the generation pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A declared template file does not exist.
    #[error("Template not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    /// Template parsing or evaluation failed.
    #[error("Failed to render template '{template}': {reason}")]
    RenderingFailed { template: String, reason: String },

    /// The manifest could not be parsed.
    #[error("Failed to parse project file: {reason}")]
    ManifestParse { reason: String },

    /// The manifest could not be serialised.
    #[error("Failed to write project file: {reason}")]
    ManifestSerialize { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { path } => vec![
                format!("Expected a template at {}", path.display()),
                "Check paths.templates_dir and the generator's template folder".into(),
                "Run 'csgen list' to see each generator's template folder".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("Fix the template syntax or variables in '{}'", template),
                "Every variable a template uses must be provided by the generator".into(),
                "Files rendered before this one were left on disk".into(),
            ],
            Self::ManifestParse { .. } => vec![
                "Check that the project file is well-formed XML".into(),
                "The project file was not modified".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the path exists and that you have write permissions".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. }
            | Self::ManifestParse { .. }
            | Self::ManifestSerialize { .. }
            | Self::FilesystemError { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_path() {
        let err = ApplicationError::TemplateNotFound {
            path: PathBuf::from("templates/triad/model.cs"),
        };
        assert_eq!(err.to_string(), "Template not found: templates/triad/model.cs");

        let err = ApplicationError::RenderingFailed {
            template: "view.cs".into(),
            reason: "Variable `name` not found".into(),
        };
        assert!(err.to_string().contains("view.cs"));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
