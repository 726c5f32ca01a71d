//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use csgen_core::domain::GeneratorArgs;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "csgen",
    bin_name = "csgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate C# source files and register them in a Visual Studio project",
    long_about = "csgen renders templates into C# source files and adds a File \
                  entry for each of them to the project's .csproj manifest.",
    after_help = "EXAMPLES:\n\
        \x20 csgen generate triad --name Login --no-wait\n\
        \x20 csgen generate class --name Board --set folder=Model --set with_test=no\n\
        \x20 csgen list\n\
        \x20 csgen completions bash > /usr/share/bash-completion/completions/csgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a generator's templates and register the files in the project.
    #[command(
        visible_alias = "g",
        about = "Run a generator",
        after_help = "EXAMPLES:\n\
            \x20 csgen generate triad --name Login\n\
            \x20 csgen generate triad --name Login --set namespace=Puzzle.Ui --set folder=Ui\n\
            \x20 csgen generate class --name Board --root ./tools --output-dir ../Puzzle"
    )]
    Generate(GenerateArgs),

    /// List built-in generators.
    #[command(
        visible_alias = "ls",
        about = "List available generators",
        after_help = "EXAMPLES:\n\
            \x20 csgen list\n\
            \x20 csgen list --format names"
    )]
    List(ListArgs),

    /// Initialise a csgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 csgen init           # platform config directory\n\
            \x20 csgen init --local   # ./csgen.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 csgen completions bash > ~/.local/share/bash-completion/completions/csgen\n\
            \x20 csgen completions zsh  > ~/.zfunc/_csgen\n\
            \x20 csgen completions fish > ~/.config/fish/completions/csgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the csgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 csgen config get paths.manifest\n\
            \x20 csgen config list\n\
            \x20 csgen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `csgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Generator to run.
    #[arg(value_enum, value_name = "GENERATOR")]
    pub generator: GeneratorKind,

    /// Value for the generator's `name` argument.
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Extra generator argument; may be repeated.
    #[arg(
        short = 's',
        long = "set",
        value_name = "KEY=VALUE",
        value_parser = parse_argument,
        help = "Generator argument, e.g. --set namespace=Puzzle.Ui"
    )]
    pub set: Vec<(String, String)>,

    /// Base directory; `templates_dir` and `output_dir` are resolved against it.
    #[arg(
        long = "root",
        value_name = "DIR",
        help = "Base directory (default: the directory containing csgen)"
    )]
    pub root: Option<PathBuf>,

    /// Project directory holding the manifest.
    #[arg(long = "output-dir", value_name = "DIR", help = "Project directory")]
    pub output_dir: Option<PathBuf>,

    /// Templates directory.
    #[arg(long = "templates-dir", value_name = "DIR", help = "Templates directory")]
    pub templates_dir: Option<PathBuf>,

    /// Manifest file name inside the project directory.
    #[arg(long = "manifest", value_name = "FILE", help = "Project file name")]
    pub manifest: Option<PathBuf>,

    /// Exit immediately instead of waiting for ENTER.
    #[arg(long = "no-wait", help = "Do not wait for ENTER before exiting")]
    pub no_wait: bool,
}

impl GenerateArgs {
    /// Collect `--name` and every `--set` into generator arguments.
    ///
    /// `--name` wins over `--set name=...`.
    pub fn generator_args(&self) -> GeneratorArgs {
        let mut args: GeneratorArgs = self.set.iter().cloned().collect();
        if let Some(name) = &self.name {
            args.set("name", name.clone());
        }
        args
    }
}

fn parse_argument(raw: &str) -> Result<(String, String), String> {
    GeneratorArgs::parse_pair(raw).map_err(|e| e.to_string())
}

/// Built-in generators selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// Model, view and presenter classes with a presenter test.
    Triad,
    /// A class and its test fixture.
    Class,
}

impl std::fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Triad => write!(f, "triad"),
            Self::Class => write!(f, "class"),
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `csgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    Names,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `csgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `csgen.toml` in the current directory instead of the platform
    /// config directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `csgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `csgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `paths.manifest`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "csgen",
            "generate",
            "triad",
            "--name",
            "Login",
            "--set",
            "namespace=Puzzle.Ui",
            "--no-wait",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.generator, GeneratorKind::Triad);
        assert!(args.no_wait);

        let generator_args = args.generator_args();
        assert_eq!(generator_args.get("name"), Some("Login"));
        assert_eq!(generator_args.get("namespace"), Some("Puzzle.Ui"));
    }

    #[test]
    fn name_flag_overrides_set() {
        let cli = Cli::parse_from([
            "csgen", "g", "class", "--set", "name=Old", "--name", "New",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.generator_args().get("name"), Some("New"));
    }

    #[test]
    fn set_requires_key_value() {
        let result = Cli::try_parse_from(["csgen", "generate", "triad", "--set", "namespace"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from(["csgen", "generate", "triad", "--set", "=x"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_generator_is_rejected() {
        assert!(Cli::try_parse_from(["csgen", "generate", "wizard"]).is_err());
    }

    #[test]
    fn generator_kind_display() {
        assert_eq!(GeneratorKind::Triad.to_string(), "triad");
        assert_eq!(GeneratorKind::Class.to_string(), "class");
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["csgen", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
