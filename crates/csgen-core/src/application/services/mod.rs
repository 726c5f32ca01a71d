//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "run a generator against a project".

pub mod generation_service;

pub use generation_service::{GenerationPaths, GenerationReport, GenerationService};
