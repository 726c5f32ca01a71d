//! Shared fixtures for the `csgen` binary tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const PROJECT: &str = "<VisualStudioProject>\r\n    <CSHARP\r\n        ProjectType = \"Local\"\r\n    >\r\n        <Files>\r\n            <Include>\r\n                <File\r\n                    RelPath = \"Main.cs\"\r\n                    SubType = \"Code\"\r\n                    BuildAction = \"Compile\"\r\n                />\r\n            </Include>\r\n        </Files>\r\n    </CSHARP>\r\n</VisualStudioProject>\r\n";

pub const NO_INCLUDE: &str =
    "<VisualStudioProject>\r\n    <CSHARP>\r\n        <Files />\r\n    </CSHARP>\r\n</VisualStudioProject>\r\n";

/// A project directory with the tool living in `tools/` beneath it, the way
/// the default `output_dir = ".."` expects.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new(manifest: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("tools/templates")).unwrap();
        fs::write(dir.path().join("Puzzle.csproj"), manifest).unwrap();
        fs::write(dir.path().join("tools/csgen.toml"), "").unwrap();
        Self { dir }
    }

    /// Same as [`Workspace::new`] with the shipped templates copied in.
    pub fn with_shipped_templates(manifest: &str) -> Self {
        let ws = Self::new(manifest);
        let shipped = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates");
        for generator in ["triad", "class"] {
            let target = ws.templates().join(generator);
            fs::create_dir_all(&target).unwrap();
            for entry in fs::read_dir(shipped.join(generator)).unwrap() {
                let entry = entry.unwrap();
                fs::copy(entry.path(), target.join(entry.file_name())).unwrap();
            }
        }
        ws
    }

    pub fn project(&self) -> &Path {
        self.dir.path()
    }

    pub fn tools(&self) -> PathBuf {
        self.dir.path().join("tools")
    }

    pub fn templates(&self) -> PathBuf {
        self.tools().join("templates")
    }

    pub fn manifest(&self) -> String {
        fs::read_to_string(self.project().join("Puzzle.csproj")).unwrap()
    }

    pub fn write_template(&self, generator: &str, name: &str, body: &str) {
        let dir = self.templates().join(generator);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), body).unwrap();
    }

    /// `csgen generate <args..> --root tools --config tools/csgen.toml`.
    pub fn generate(&self, args: &[&str]) -> Command {
        let mut cmd = csgen();
        cmd.arg("--config")
            .arg(self.tools().join("csgen.toml"))
            .arg("generate")
            .args(args)
            .arg("--root")
            .arg(self.tools());
        cmd
    }
}

pub fn csgen() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("csgen");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}
