//! The generator contract.

use serde::Serialize;

use crate::domain::{declaration::DeclarationRegistry, error::DomainError, naming::template_slug};

/// A concrete generator: declares the files it produces and the values its
/// templates may reference.
///
/// Generators are constructed explicitly (usually from validated
/// [`GeneratorArgs`](crate::domain::GeneratorArgs)) and handed to
/// [`GenerationService::run`](crate::application::GenerationService::run).
///
/// ```rust
/// use csgen_core::domain::{DeclarationRegistry, DomainError, FileDeclaration, Generator};
/// use serde::Serialize;
///
/// struct GreeterGenerator {
///     name: String,
/// }
///
/// #[derive(Serialize)]
/// struct GreeterContext<'a> {
///     name: &'a str,
/// }
///
/// impl Generator for GreeterGenerator {
///     type Context<'a> = GreeterContext<'a>;
///
///     fn description(&self) -> String {
///         format!("greeter {}", self.name)
///     }
///
///     fn generate(&mut self, files: &mut DeclarationRegistry) -> Result<(), DomainError> {
///         files.push(
///             FileDeclaration::new(format!("{}.cs", self.name), "greeter.cs")
///                 .with_attribute("sub_type", "Code"),
///         )
///     }
///
///     fn context(&self) -> GreeterContext<'_> {
///         GreeterContext { name: &self.name }
///     }
/// }
///
/// assert_eq!(GreeterGenerator::template_slug(), "greeter");
/// ```
pub trait Generator {
    /// Values exposed to templates. Every field becomes a top-level name.
    type Context<'a>: Serialize
    where
        Self: 'a;

    /// One line printed before anything is generated.
    fn description(&self) -> String;

    /// Declare the files to produce, in the order they are rendered and
    /// registered.
    fn generate(&mut self, files: &mut DeclarationRegistry) -> Result<(), DomainError>;

    /// Template context for this run. Called once, after [`generate`](Self::generate).
    fn context(&self) -> Self::Context<'_>;

    /// Template folder name, derived from the type name.
    fn template_slug() -> String
    where
        Self: Sized,
    {
        template_slug(std::any::type_name::<Self>())
    }
}
