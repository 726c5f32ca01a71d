//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`CSGEN_PATHS__MANIFEST=Other.csproj`)
//! 3. Config file (`--config FILE`, else `./csgen.toml` and the platform
//!    config file, both optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use csgen_adapters::WriterOptions;
use csgen_core::domain::DEFAULT_INSERTION_PATH;

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "csgen.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where templates, the project and its manifest live.
    pub paths: PathsConfig,
    /// Manifest location and formatting.
    pub manifest: ManifestConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory the relative paths below are resolved against.
    /// Unset means the directory containing the `csgen` executable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
    /// Project directory; generated files and the manifest live here.
    pub output_dir: PathBuf,
    /// Parent of the per-generator template folders.
    pub templates_dir: PathBuf,
    /// Manifest file name inside `output_dir`.
    pub manifest: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            output_dir: PathBuf::from(".."),
            templates_dir: PathBuf::from("templates"),
            manifest: PathBuf::from("Puzzle.csproj"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Slash-separated element path of the element new entries go under.
    pub insertion_path: String,
    pub writer: WriterOptions,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            insertion_path: DEFAULT_INSERTION_PATH.to_string(),
            writer: WriterOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the local and platform config files are read if
    /// present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;
        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                builder = builder.add_source(toml_file(path).required(true));
            }
            None => {
                builder = builder
                    .add_source(toml_file(&Self::config_path()).required(false))
                    .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE)).required(false));
            }
        }

        builder
            .add_source(
                Environment::with_prefix("CSGEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `csgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "csgen", "csgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The configured base directory, or the directory holding the
    /// running executable.
    pub fn base_dir(&self) -> std::io::Result<PathBuf> {
        if let Some(dir) = &self.paths.base_dir {
            return Ok(dir.clone());
        }
        let exe = std::env::current_exe()?;
        Ok(exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")))
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}
