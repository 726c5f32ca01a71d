//! Application layer for csgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerationPaths, GenerationReport, GenerationService};

pub use ports::{Filesystem, ManifestCodec, ProgressReporter, SilentProgress, TemplateRenderer};

pub use error::ApplicationError;
