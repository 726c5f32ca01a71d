//! Output management and formatting.

use std::io::{self, BufRead, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;

use csgen_core::application::ports::ProgressReporter;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        let no_color = args.no_color
            || config.output.no_color
            || resolved_format == OutputFormat::Plain;

        Self {
            quiet: args.quiet,
            no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Print `prompt` and block until a line (or EOF) arrives on stdin.
    pub fn wait_for_enter(&self, prompt: &str) -> io::Result<()> {
        self.term.write_line(prompt)?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

// ── progress ──────────────────────────────────────────────────────────────────

/// Prints the generation pipeline's progress lines.
pub struct ConsoleProgress<'a> {
    output: &'a OutputManager,
}

impl<'a> ConsoleProgress<'a> {
    pub fn new(output: &'a OutputManager) -> Self {
        Self { output }
    }

    fn line(&self, msg: &str) {
        if let Err(e) = self.output.print(msg) {
            tracing::debug!(error = %e, "Failed to write progress line");
        }
    }
}

impl ProgressReporter for ConsoleProgress<'_> {
    fn description(&self, text: &str) {
        if let Err(e) = self.output.header(text) {
            tracing::debug!(error = %e, "Failed to write progress line");
        }
    }

    fn generating(&self, path: &Path) {
        self.line(&format!("generating {}", path.display()));
    }

    fn adding(&self, path: &Path, manifest: &Path) {
        self.line(&format!("adding {} to {}", path.display(), manifest.display()));
    }

    fn storing(&self, _manifest: &Path) {
        self.line("storing project file");
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: OutputFormat::Human, // avoid TTY detection in tests
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn success_is_suppressed_in_quiet_mode() {
        let out = make_manager(true, false);
        assert!(out.success("done").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        let colored = make_manager(false, false);
        let no_color = make_manager(false, true);
        assert!(!colored.no_color);
        assert!(no_color.no_color);
    }

    #[test]
    fn plain_format_disables_color() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Plain,
        };
        assert!(OutputManager::new(&args, &AppConfig::default()).no_color);
    }

    #[test]
    fn progress_lines_do_not_fail_when_quiet() {
        let out = make_manager(true, true);
        let progress = ConsoleProgress::new(&out);
        progress.description("Generating Login triad in namespace Puzzle");
        progress.generating(Path::new("../LoginModel.cs"));
        progress.adding(Path::new("../LoginModel.cs"), Path::new("Puzzle.csproj"));
        progress.storing(Path::new("../Puzzle.csproj"));
        assert!(out.is_quiet());
    }
}
