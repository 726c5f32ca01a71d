//! Single class with an optional test fixture.

use csgen_core::domain::{ArgumentSpec, DeclarationRegistry, DomainError, Generator, GeneratorArgs};
use serde::Serialize;

use super::{code_file, folder, in_folder, namespace, required_identifier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassGenerator {
    name: String,
    namespace: String,
    folder: Option<String>,
    with_test: bool,
}

#[derive(Debug, Serialize)]
pub struct ClassContext<'a> {
    name: &'a str,
    namespace: &'a str,
    test_fixture: String,
}

impl ClassGenerator {
    pub const SUMMARY: &'static str = "A class and its test fixture";

    pub const ARGUMENTS: ArgumentSpec =
        ArgumentSpec::new(&["name"], &["namespace", "folder", "with_test"]);

    pub fn from_args(args: &GeneratorArgs) -> Result<Self, DomainError> {
        let name = required_identifier(&Self::ARGUMENTS, args)?;
        let with_test = match args.get("with_test") {
            None => true,
            Some(value) => parse_flag(value).ok_or_else(|| DomainError::InvalidArgumentValue {
                name: "with_test".into(),
                reason: format!("expected true or false, got '{value}'"),
            })?,
        };

        Ok(Self {
            name,
            namespace: namespace(args)?,
            folder: folder(args, "folder")?,
            with_test,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

impl Generator for ClassGenerator {
    type Context<'a> = ClassContext<'a>;

    fn description(&self) -> String {
        format!("Generating class {}.{}", self.namespace, self.name)
    }

    fn generate(&mut self, files: &mut DeclarationRegistry) -> Result<(), DomainError> {
        let name = &self.name;
        files.push(code_file(
            in_folder(self.folder.as_deref(), &format!("{name}.cs")),
            "class.cs",
        ))?;
        if self.with_test {
            files.push(code_file(
                in_folder(Some("Test"), &format!("{name}Test.cs")),
                "class_test.cs",
            ))?;
        }
        Ok(())
    }

    fn context(&self) -> ClassContext<'_> {
        ClassContext {
            name: &self.name,
            namespace: &self.namespace,
            test_fixture: format!("{}Test", self.name),
        }
    }
}
