//! Generation Service - main application orchestrator.
//!
//! This service runs one generator end to end:
//! 1. Collect the generator's file declarations
//! 2. Snapshot its template context
//! 3. Render every declared template into the project directory
//! 4. Load the project manifest and resolve its insertion point
//! 5. Append one entry per declaration
//! 6. Write the manifest back
//!
//! Any failure aborts the remaining steps. Files already rendered stay on
//! disk; the manifest is only written once every entry has been added.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ManifestCodec, ProgressReporter, TemplateRenderer},
    },
    domain::{DeclarationRegistry, Generator, InsertionPath, ManifestPatcher, MetadataContext},
    error::CsgenResult,
};

/// Where a run reads templates and writes its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPaths {
    /// Parent of the per-generator template folders.
    pub templates_dir: PathBuf,
    /// Project directory; output paths are relative to it.
    pub output_root: PathBuf,
    /// Manifest file name, relative to `output_root`.
    pub manifest: PathBuf,
}

impl GenerationPaths {
    pub fn new(
        templates_dir: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        manifest: impl Into<PathBuf>,
    ) -> Self {
        Self {
            templates_dir: templates_dir.into(),
            output_root: output_root.into(),
            manifest: manifest.into(),
        }
    }

    /// Template folder for generator `G`.
    pub fn template_root<G: Generator>(&self) -> PathBuf {
        self.templates_dir.join(G::template_slug())
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.output_root.join(&self.manifest)
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Rendered files, in declaration order.
    pub files: Vec<PathBuf>,
    pub manifest: PathBuf,
    pub entries_added: usize,
}

/// Main generation service.
pub struct GenerationService {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    codec: Box<dyn ManifestCodec>,
    insertion_path: InsertionPath,
}

impl GenerationService {
    /// Create a new generation service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use csgen_core::application::GenerationService;
    ///
    /// let service = GenerationService::new(
    ///     filesystem, // impl Filesystem
    ///     renderer,   // impl TemplateRenderer
    ///     codec,      // impl ManifestCodec
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        codec: Box<dyn ManifestCodec>,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            codec,
            insertion_path: InsertionPath::default(),
        }
    }

    /// Use a different element path for the manifest insertion point.
    pub fn with_insertion_path(mut self, path: InsertionPath) -> Self {
        self.insertion_path = path;
        self
    }

    pub fn insertion_path(&self) -> &InsertionPath {
        &self.insertion_path
    }

    /// Run `generator` against the project described by `paths`.
    #[instrument(
        skip_all,
        fields(
            generator = %G::template_slug(),
            output_root = %paths.output_root.display(),
            manifest = %paths.manifest.display()
        )
    )]
    pub fn run<G: Generator>(
        &self,
        generator: &mut G,
        paths: &GenerationPaths,
        progress: &dyn ProgressReporter,
    ) -> CsgenResult<GenerationReport> {
        progress.description(&generator.description());

        let mut declarations = DeclarationRegistry::new();
        generator.generate(&mut declarations)?;
        info!(count = declarations.len(), "Files declared");

        let context = MetadataContext::from_serialize(&generator.context())?;
        debug!(keys = ?context.keys().collect::<Vec<_>>(), "Template context built");

        let template_root = paths.template_root::<G>();
        let files = self.render_all(&declarations, &context, &template_root, paths, progress)?;

        let manifest_path = paths.manifest_path();
        let entries_added = self.patch_manifest(&declarations, paths, &manifest_path, progress)?;

        info!(
            files = files.len(),
            entries = entries_added,
            "Generation completed successfully"
        );

        Ok(GenerationReport {
            files,
            manifest: manifest_path,
            entries_added,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn render_all(
        &self,
        declarations: &DeclarationRegistry,
        context: &MetadataContext,
        template_root: &Path,
        paths: &GenerationPaths,
        progress: &dyn ProgressReporter,
    ) -> CsgenResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(declarations.len());

        for declaration in declarations {
            let output = paths.output_root.join(declaration.output_path());
            progress.generating(&output);

            let template = template_root.join(declaration.template_path());
            if !self.filesystem.exists(&template) {
                return Err(ApplicationError::TemplateNotFound { path: template }.into());
            }

            let source = self.filesystem.read_to_string(&template)?;
            let rendered = self
                .renderer
                .render(declaration.template_path(), &source, context)?;

            if let Some(parent) = output.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&output, &rendered)?;

            debug!(
                template = %template.display(),
                output = %output.display(),
                bytes = rendered.len(),
                "Rendered file"
            );
            written.push(output);
        }

        Ok(written)
    }

    fn patch_manifest(
        &self,
        declarations: &DeclarationRegistry,
        paths: &GenerationPaths,
        manifest_path: &Path,
        progress: &dyn ProgressReporter,
    ) -> CsgenResult<usize> {
        let source = self.filesystem.read_to_string(manifest_path)?;
        let mut document = self.codec.parse(&source)?;

        let added = {
            let mut patcher = ManifestPatcher::locate(&mut document, &self.insertion_path)?;
            for declaration in declarations {
                let output = paths.output_root.join(declaration.output_path());
                progress.adding(&output, &paths.manifest);
                let entry = patcher.append(declaration);
                debug!(rel_path = ?entry.relative_path(), "Manifest entry added");
            }
            patcher.added()
        };

        progress.storing(manifest_path);
        let serialized = self.codec.serialize(&document)?;
        self.filesystem.write_file(manifest_path, &serialized)?;

        Ok(added)
    }
}
