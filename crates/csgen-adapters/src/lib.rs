//! Infrastructure adapters for csgen.
//!
//! This crate implements the ports defined in `csgen-core::application::ports`
//! and ships the built-in generators. It contains all external dependencies
//! and I/O operations.

pub mod filesystem;
pub mod generators;
pub mod manifest;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use generators::{ClassGenerator, GeneratorInfo, TriadGenerator};
pub use manifest::{VisualStudioWriter, WriterOptions, XmlManifestCodec};
pub use renderer::JinjaRenderer;
