//! File declarations and the registry a generator fills in.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::domain::error::DomainError;

/// A scalar attribute value attached to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A request to render `template_path` into `output_path`.
///
/// Paths use forward slashes and are relative: the template path to the
/// generator's template folder, the output path to the project directory.
/// Extra attributes become attributes of the manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDeclaration {
    template_path: String,
    output_path: String,
    extra_attributes: Vec<(String, Scalar)>,
}

impl FileDeclaration {
    pub fn new(output_path: impl Into<String>, template_path: impl Into<String>) -> Self {
        Self {
            template_path: template_path.into(),
            output_path: output_path.into(),
            extra_attributes: Vec::new(),
        }
    }

    /// Attach an extra attribute. Setting an existing key replaces its value
    /// in place.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.extra_attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.extra_attributes.push((key, value)),
        }
        self
    }

    pub fn template_path(&self) -> &str {
        &self.template_path
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }

    pub fn extra_attributes(&self) -> &[(String, Scalar)] {
        &self.extra_attributes
    }

    fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [
            ("output path", &self.output_path),
            ("template path", &self.template_path),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidDeclaration(format!(
                    "{field} cannot be empty"
                )));
            }
            if value.starts_with('/') || Path::new(value).is_absolute() {
                return Err(DomainError::InvalidDeclaration(format!(
                    "{field} must be relative: {value}"
                )));
            }
            if value.split(['/', '\\']).any(|part| part == "..") {
                return Err(DomainError::InvalidDeclaration(format!(
                    "{field} must not leave its directory: {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Ordered collection of the files a generator wants produced.
///
/// Declaration order is the render order and the manifest order.
#[derive(Debug, Clone, Default)]
pub struct DeclarationRegistry {
    files: Vec<FileDeclaration>,
    outputs: HashSet<String>,
}

impl DeclarationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a file with no extra attributes.
    pub fn declare(
        &mut self,
        output_path: impl Into<String>,
        template_path: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.push(FileDeclaration::new(output_path, template_path))
    }

    /// Append a fully built declaration.
    ///
    /// Rejects empty or absolute paths, paths with a `..` component, and
    /// output paths that were already declared in this run.
    pub fn push(&mut self, declaration: FileDeclaration) -> Result<(), DomainError> {
        declaration.validate()?;

        if !self.outputs.insert(declaration.output_path.clone()) {
            return Err(DomainError::DuplicateOutput {
                path: declaration.output_path,
            });
        }

        self.files.push(declaration);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileDeclaration> {
        self.files.iter()
    }

    pub fn as_slice(&self) -> &[FileDeclaration] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<'a> IntoIterator for &'a DeclarationRegistry {
    type Item = &'a FileDeclaration;
    type IntoIter = std::slice::Iter<'a, FileDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_is_preserved() {
        let mut registry = DeclarationRegistry::new();
        registry.declare("b/Second.cs", "second.cs").unwrap();
        registry.declare("a/First.cs", "first.cs").unwrap();
        registry.declare("Third.cs", "third.cs").unwrap();

        let outputs: Vec<_> = registry.iter().map(|d| d.output_path()).collect();
        assert_eq!(outputs, ["b/Second.cs", "a/First.cs", "Third.cs"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn duplicate_output_is_rejected() {
        let mut registry = DeclarationRegistry::new();
        registry.declare("Foo.cs", "class.cs").unwrap();
        let err = registry.declare("Foo.cs", "other.cs").unwrap_err();

        assert_eq!(
            err,
            DomainError::DuplicateOutput {
                path: "Foo.cs".into()
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn same_template_for_different_outputs_is_allowed() {
        let mut registry = DeclarationRegistry::new();
        registry.declare("A.cs", "class.cs").unwrap();
        registry.declare("B.cs", "class.cs").unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn empty_and_absolute_paths_are_rejected() {
        let mut registry = DeclarationRegistry::new();
        assert!(matches!(
            registry.declare("", "class.cs"),
            Err(DomainError::InvalidDeclaration(_))
        ));
        assert!(matches!(
            registry.declare("Foo.cs", "  "),
            Err(DomainError::InvalidDeclaration(_))
        ));
        assert!(matches!(
            registry.declare("/abs/Foo.cs", "class.cs"),
            Err(DomainError::InvalidDeclaration(_))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn parent_components_are_rejected() {
        let mut registry = DeclarationRegistry::new();
        for (output, template) in [
            ("../Foo.cs", "class.cs"),
            ("Ui/../../Foo.cs", "class.cs"),
            ("Ui\\..\\Foo.cs", "class.cs"),
            ("Foo.cs", "../class.cs"),
        ] {
            assert!(
                matches!(
                    registry.declare(output, template),
                    Err(DomainError::InvalidDeclaration(_))
                ),
                "{output} / {template}"
            );
        }
        registry.declare("Ui/..Foo.cs", "class.cs").unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn attributes_keep_insertion_order_and_replace_in_place() {
        let decl = FileDeclaration::new("Foo.cs", "class.cs")
            .with_attribute("sub_type", "Code")
            .with_attribute("build_action", "Compile")
            .with_attribute("sub_type", "Form");

        assert_eq!(
            decl.extra_attributes(),
            &[
                ("sub_type".to_string(), Scalar::from("Form")),
                ("build_action".to_string(), Scalar::from("Compile")),
            ]
        );
    }

    #[test]
    fn scalar_display() {
        assert_eq!(Scalar::from("Code").to_string(), "Code");
        assert_eq!(Scalar::from(42_i64).to_string(), "42");
        assert_eq!(Scalar::from(true).to_string(), "true");
    }
}
