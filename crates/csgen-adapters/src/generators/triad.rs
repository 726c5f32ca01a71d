//! Presenter-first Model/View/Presenter triad.

use csgen_core::domain::{ArgumentSpec, DeclarationRegistry, DomainError, Generator, GeneratorArgs};
use serde::Serialize;

use super::{code_file, folder, in_folder, namespace, required_identifier};

/// Generates `{Name}Model`, `{Name}View` and `{Name}Presenter` plus a
/// presenter test fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriadGenerator {
    name: String,
    namespace: String,
    folder: Option<String>,
    test_folder: String,
}

#[derive(Debug, Serialize)]
pub struct TriadContext<'a> {
    name: &'a str,
    namespace: &'a str,
    model: String,
    view: String,
    presenter: String,
    test_fixture: String,
}

impl TriadGenerator {
    pub const SUMMARY: &'static str = "Model, view and presenter classes with a presenter test";

    pub const ARGUMENTS: ArgumentSpec =
        ArgumentSpec::new(&["name"], &["namespace", "folder", "test_folder"]);

    pub fn from_args(args: &GeneratorArgs) -> Result<Self, DomainError> {
        let name = required_identifier(&Self::ARGUMENTS, args)?;
        Ok(Self {
            name,
            namespace: namespace(args)?,
            folder: folder(args, "folder")?,
            test_folder: folder(args, "test_folder")?.unwrap_or_else(|| "Test".to_string()),
        })
    }
}

impl Generator for TriadGenerator {
    type Context<'a> = TriadContext<'a>;

    fn description(&self) -> String {
        format!("Generating {} triad in namespace {}", self.name, self.namespace)
    }

    fn generate(&mut self, files: &mut DeclarationRegistry) -> Result<(), DomainError> {
        let folder = self.folder.as_deref();
        let name = &self.name;

        files.push(code_file(in_folder(folder, &format!("{name}Model.cs")), "model.cs"))?;
        files.push(code_file(in_folder(folder, &format!("{name}View.cs")), "view.cs"))?;
        files.push(code_file(
            in_folder(folder, &format!("{name}Presenter.cs")),
            "presenter.cs",
        ))?;
        files.push(code_file(
            in_folder(Some(&self.test_folder), &format!("{name}PresenterTest.cs")),
            "presenter_test.cs",
        ))
    }

    fn context(&self) -> TriadContext<'_> {
        TriadContext {
            name: &self.name,
            namespace: &self.namespace,
            model: format!("{}Model", self.name),
            view: format!("{}View", self.name),
            presenter: format!("{}Presenter", self.name),
            test_fixture: format!("{}PresenterTest", self.name),
        }
    }
}
