//! Built-in generators.
//!
//! Each generator is built from validated [`GeneratorArgs`] and renders the
//! templates in `templates/{slug}/`.

mod class;
mod triad;

pub use class::ClassGenerator;
pub use triad::TriadGenerator;

use csgen_core::domain::{ArgumentSpec, DomainError, FileDeclaration, Generator, GeneratorArgs};

/// Namespace used when none is given.
pub const DEFAULT_NAMESPACE: &str = "Puzzle";

/// Listing entry for a built-in generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInfo {
    pub name: &'static str,
    pub summary: &'static str,
    pub slug: String,
    pub arguments: ArgumentSpec,
}

/// Every built-in generator, in listing order.
pub fn catalog() -> Vec<GeneratorInfo> {
    vec![
        GeneratorInfo {
            name: "triad",
            summary: TriadGenerator::SUMMARY,
            slug: TriadGenerator::template_slug(),
            arguments: TriadGenerator::ARGUMENTS,
        },
        GeneratorInfo {
            name: "class",
            summary: ClassGenerator::SUMMARY,
            slug: ClassGenerator::template_slug(),
            arguments: ClassGenerator::ARGUMENTS,
        },
    ]
}

/// A compiled C# source entry (`SubType = "Code"`, `BuildAction = "Compile"`).
fn code_file(output: String, template: &str) -> FileDeclaration {
    FileDeclaration::new(output, template)
        .with_attribute("sub_type", "Code")
        .with_attribute("build_action", "Compile")
}

/// Read a folder argument. Folders are relative to the project directory
/// and may not climb out of it.
fn folder(args: &GeneratorArgs, key: &str) -> Result<Option<String>, DomainError> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    if value.split(['/', '\\']).any(|part| part == "..") {
        return Err(DomainError::InvalidArgumentValue {
            name: key.to_string(),
            reason: format!("'{value}' must stay inside the project directory"),
        });
    }
    Ok(Some(value.to_string()))
}

/// Join an optional folder argument and a file name with `/`.
fn in_folder(folder: Option<&str>, file: &str) -> String {
    match folder.map(|f| f.trim_matches('/')).filter(|f| !f.is_empty()) {
        Some(folder) => format!("{folder}/{file}"),
        None => file.to_string(),
    }
}

/// Validate the arguments against `spec` and return the checked `name`.
fn required_identifier(spec: &ArgumentSpec, args: &GeneratorArgs) -> Result<String, DomainError> {
    spec.validate(args)?;
    let name = args.get("name").unwrap_or_default();
    check_identifier("name", name)?;
    Ok(name.to_string())
}

fn namespace(args: &GeneratorArgs) -> Result<String, DomainError> {
    let namespace = args.get("namespace").unwrap_or(DEFAULT_NAMESPACE);
    for part in namespace.split('.') {
        check_identifier("namespace", part)?;
    }
    Ok(namespace.to_string())
}

fn check_identifier(argument: &str, value: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidArgumentValue {
        name: argument.to_string(),
        reason: format!("'{value}' {reason}"),
    };

    let mut chars = value.chars();
    match chars.next() {
        None => return Err(invalid("is empty")),
        Some(c) if !(c.is_alphabetic() || c == '_') => {
            return Err(invalid("must start with a letter or underscore"));
        }
        Some(_) => {}
    }
    if chars.any(|c| !(c.is_alphanumeric() || c == '_')) {
        return Err(invalid("is not a valid C# identifier"));
    }
    Ok(())
}
