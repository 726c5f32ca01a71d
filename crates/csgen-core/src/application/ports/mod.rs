//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `csgen-adapters` and the CLI
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateRenderer`: Template rendering
//!   - `ManifestCodec`: Project file parsing and serialisation
//!   - `ProgressReporter`: Progress lines for the user
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, ManifestCodec, ProgressReporter, SilentProgress, TemplateRenderer};

#[cfg(test)]
pub use output::{MockFilesystem, MockManifestCodec, MockProgressReporter, MockTemplateRenderer};
