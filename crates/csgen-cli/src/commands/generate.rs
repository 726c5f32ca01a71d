//! Implementation of the `csgen generate` command.
//!
//! Responsibility: resolve directories, build the selected generator from
//! its arguments, wire the adapters into a `GenerationService`, and display
//! results. No business logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use csgen_adapters::{
    ClassGenerator, JinjaRenderer, LocalFilesystem, TriadGenerator, XmlManifestCodec,
};
use csgen_core::{
    application::{GenerationPaths, GenerationReport, GenerationService},
    domain::{Generator, GeneratorArgs, InsertionPath},
    error::CsgenError,
};

use crate::{
    cli::{GenerateArgs, GeneratorKind, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::{ConsoleProgress, OutputManager},
};

/// Execute the `csgen generate` command.
///
/// Dispatch sequence:
/// 1. Resolve templates, project and manifest paths
/// 2. Collect generator arguments (prompting for a missing name)
/// 3. Build the generator; bad arguments stop here
/// 4. Run the generation pipeline
/// 5. Wait for ENTER unless `--no-wait`
#[instrument(skip_all, fields(generator = %args.generator))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Paths
    let paths = resolve_paths(&args, &config)?;
    if !paths.output_root.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!(
                "project directory '{}' does not exist",
                paths.output_root.display()
            ),
            source: None,
        });
    }
    debug!(
        templates = %paths.templates_dir.display(),
        output_root = %paths.output_root.display(),
        manifest = %paths.manifest.display(),
        "Paths resolved"
    );

    let insertion_path = config
        .manifest
        .insertion_path
        .parse::<InsertionPath>()
        .map_err(|e| CliError::ConfigError {
            message: format!("manifest.insertion_path: {e}"),
            source: Some(Box::new(e)),
        })?;

    // 2. Arguments
    let mut generator_args = args.generator_args();
    if !generator_args.contains("name") && !global.quiet {
        prompt_for_name(&mut generator_args)?;
    }

    // 3 + 4. Build and run
    let service = GenerationService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(JinjaRenderer::new()),
        Box::new(XmlManifestCodec::new(config.manifest.writer.clone())),
    )
    .with_insertion_path(insertion_path);
    let progress = ConsoleProgress::new(&output);

    let report = match args.generator {
        GeneratorKind::Triad => {
            let generator = TriadGenerator::from_args(&generator_args).map_err(CsgenError::from)?;
            run(&service, generator, &paths, &progress)?
        }
        GeneratorKind::Class => {
            let generator = ClassGenerator::from_args(&generator_args).map_err(CsgenError::from)?;
            run(&service, generator, &paths, &progress)?
        }
    };

    info!(
        files = report.files.len(),
        entries = report.entries_added,
        "Generation finished"
    );
    output
        .success(&format!(
            "{} file(s) generated and added to {}",
            report.files.len(),
            report.manifest.display()
        ))
        .with_cli_context(|| "writing to stdout")?;

    // 5. Keep the console window open when launched from Explorer.
    if !args.no_wait && !output.is_quiet() {
        output
            .wait_for_enter("Hit ENTER to exit")
            .with_cli_context(|| "reading from stdin")?;
    }

    Ok(())
}

fn run<G: Generator>(
    service: &GenerationService,
    mut generator: G,
    paths: &GenerationPaths,
    progress: &ConsoleProgress<'_>,
) -> CliResult<GenerationReport> {
    Ok(service.run(&mut generator, paths, progress)?)
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// Combine CLI overrides with the configured directories.
///
/// Relative `templates_dir` and `output_dir` values are resolved against the
/// base directory (`--root`, `paths.base_dir`, or the executable's folder).
pub fn resolve_paths(args: &GenerateArgs, config: &AppConfig) -> CliResult<GenerationPaths> {
    let base = match &args.root {
        Some(root) => root.clone(),
        None => config
            .base_dir()
            .with_cli_context(|| "locating the csgen executable")?,
    };

    let templates = args
        .templates_dir
        .as_ref()
        .unwrap_or(&config.paths.templates_dir);
    let output_dir = args.output_dir.as_ref().unwrap_or(&config.paths.output_dir);
    let manifest = args.manifest.clone().unwrap_or_else(|| config.paths.manifest.clone());

    Ok(GenerationPaths::new(
        under(&base, templates),
        under(&base, output_dir),
        manifest,
    ))
}

fn under(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

// ── Interactive prompt ────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn prompt_for_name(args: &mut GeneratorArgs) -> CliResult<()> {
    use std::io::IsTerminal as _;

    if !std::io::stdin().is_terminal() {
        return Ok(());
    }

    let name: String = dialoguer::Input::new()
        .with_prompt("Name")
        .interact_text()
        .map_err(|_| CliError::Cancelled)?;
    args.set("name", name.trim());
    Ok(())
}

#[cfg(not(feature = "interactive"))]
fn prompt_for_name(_args: &mut GeneratorArgs) -> CliResult<()> {
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
