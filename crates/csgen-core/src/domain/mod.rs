//! Core domain layer for csgen.
//!
//! Pure rules with no I/O: what a generator declares, how the template
//! context is snapshotted, how manifest entries are derived and where they
//! are spliced in. File access, rendering and XML parsing happen behind the
//! ports in [`crate::application::ports`].

pub mod arguments;
pub mod context;
pub mod declaration;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod naming;

pub use arguments::{ArgumentSpec, GeneratorArgs};
pub use context::MetadataContext;
pub use declaration::{DeclarationRegistry, FileDeclaration, Scalar};
pub use error::{DomainError, ErrorCategory};
pub use generator::Generator;
pub use manifest::{
    Attribute, DEFAULT_INSERTION_PATH, ENTRY_ELEMENT, Element, InsertionPath, ManifestDocument,
    ManifestEntry, ManifestNode, ManifestPatcher, XmlDeclaration,
};
pub use naming::{camelize, template_slug, to_manifest_path};
