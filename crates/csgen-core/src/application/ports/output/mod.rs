//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generation pipeline needs from the outside
//! world. The `csgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ManifestDocument, MetadataContext};
use crate::error::CsgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `csgen_adapters::filesystem::LocalFilesystem` (production)
/// - `csgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a UTF-8 file.
    fn read_to_string(&self, path: &Path) -> CsgenResult<String>;

    /// Write content to a file, replacing it if it exists.
    fn write_file(&self, path: &Path, content: &str) -> CsgenResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CsgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by `csgen_adapters::renderer::JinjaRenderer`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render one template body against the shared context.
    ///
    /// `name` identifies the template in error messages. A reference to a
    /// name the context does not contain must fail.
    fn render(&self, name: &str, source: &str, context: &MetadataContext) -> CsgenResult<String>;
}

/// Port for reading and writing the project manifest.
///
/// Implemented by `csgen_adapters::manifest::XmlManifestCodec`.
#[cfg_attr(test, mockall::automock)]
pub trait ManifestCodec: Send + Sync {
    fn parse(&self, source: &str) -> CsgenResult<ManifestDocument>;

    fn serialize(&self, document: &ManifestDocument) -> CsgenResult<String>;
}

/// Port for user-facing progress lines.
///
/// Reporting never fails; implementations swallow their own output errors.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressReporter {
    /// The generator's one-line description, printed first.
    fn description(&self, text: &str);

    /// A file is about to be rendered.
    fn generating(&self, path: &Path);

    /// An entry is being appended to the manifest.
    fn adding(&self, path: &Path, manifest: &Path);

    /// The manifest is about to be written back.
    fn storing(&self, manifest: &Path);
}

/// Reporter that prints nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn description(&self, _text: &str) {}
    fn generating(&self, _path: &Path) {}
    fn adding(&self, _path: &Path, _manifest: &Path) {}
    fn storing(&self, _manifest: &Path) {}
}
