//! csgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for `csgen`, a
//! generator that renders templates into C# source files and registers the
//! generated files in a Visual Studio project manifest.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            csgen-cli (CLI)              │
//! │   (selects a generator, reports output) │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GenerationService)           │
//! │ declare → render → load → patch → store │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, TemplateRenderer,          │
//! │  ManifestCodec, ProgressReporter)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     csgen-adapters (Infrastructure)     │
//! │ (LocalFilesystem, JinjaRenderer,        │
//! │  XmlManifestCodec, built-in generators) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (FileDeclaration, MetadataContext,      │
//! │  ManifestDocument, naming rules)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use csgen_core::application::{GenerationPaths, GenerationService};
//!
//! // 1. Wire the service with adapters
//! let service = GenerationService::new(filesystem, renderer, codec);
//!
//! // 2. Run a generator against a project directory
//! let paths = GenerationPaths::new("templates", "..", "Puzzle.csproj");
//! service.run(&mut generator, &paths, &progress).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationPaths, GenerationReport, GenerationService,
        ports::{Filesystem, ManifestCodec, ProgressReporter, TemplateRenderer},
    };
    pub use crate::domain::{
        ArgumentSpec, DeclarationRegistry, Element, FileDeclaration, Generator, GeneratorArgs,
        InsertionPath, ManifestDocument, ManifestEntry, ManifestNode, ManifestPatcher,
        MetadataContext, Scalar,
    };
    pub use crate::error::{CsgenError, CsgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
