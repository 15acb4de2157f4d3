//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Validate the raw arguments (the only step that can abort)
//! 2. Resolve the project root, falling back when `--path` is unusable
//! 3. Ensure the four output directories exist
//! 4. For each template kind: resolve target, load + render, write
//!
//! Everything after step 1 is best-effort: a failure is reported through the
//! [`Notifier`] and recorded in the [`GenerationReport`], then the run moves on.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Notifier, TemplateRenderer, TemplateStore},
        services::report::{FailedTarget, GenerationReport, GenerationStage},
    },
    domain::{
        ArgumentSet, DomainError, DomainValidator as validator, GeneratedFileSpec, PathResolver,
        RawArguments,
        RenderContext, TemplateCatalog, TemplateDescriptor,
    },
    error::{ClasswrightError, ClasswrightResult},
};

/// Installation-level settings for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Directory holding `TestTrait.<ext>`, `Test.<ext>`, `Interface.<ext>`, `Class.<ext>`.
    pub templates_dir: PathBuf,
    /// Extension of templates and generated files.
    pub extension: String,
    /// Root used instead of an unusable `--path`.
    pub fallback_root: PathBuf,
    /// Resolve and render, but touch nothing on disk.
    pub dry_run: bool,
}

/// Main generation service.
///
/// Orchestrates validation, path resolution, rendering and writing.
pub struct GenerateService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    notifier: Box<dyn Notifier>,
    options: GenerationOptions,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use classwright_core::application::{GenerateService, GenerationOptions};
    ///
    /// let service = GenerateService::new(
    ///     store,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    ///     notifier,   // impl Notifier
    ///     options,
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        notifier: Box<dyn Notifier>,
        options: GenerationOptions,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
            notifier,
            options,
        }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Generate the four files for one class.
    ///
    /// Returns `Err` only when a required argument is missing, and in that
    /// case no port other than the logger has been called.
    #[instrument(
        skip_all,
        fields(
            name = raw.name.as_deref().unwrap_or_default(),
            dry_run = self.options.dry_run
        )
    )]
    pub fn generate(&self, raw: RawArguments) -> ClasswrightResult<GenerationReport> {
        debug!(stage = %GenerationStage::Validating, "Stage entered");
        let args = match validator::validate_arguments(raw) {
            Ok(args) => args,
            Err(e) => {
                debug!(stage = %GenerationStage::Failed, error = %e, "Stage entered");
                return Err(ClasswrightError::Domain(e));
            }
        };

        let (args, used_fallback_root) = self.resolve_root(args);
        let mut report = GenerationReport::new(args.path(), used_fallback_root, self.options.dry_run);
        info!(root = %args.path().display(), class = args.name(), "Generating class files");

        let catalog = TemplateCatalog::new(&self.options.templates_dir, &self.options.extension);
        let resolver = PathResolver::new(catalog.extension());

        transition(&mut report, GenerationStage::EnsuringDirectories);
        if !self.ensure_directories(&args, &resolver, &mut report) {
            transition(&mut report, GenerationStage::Done);
            return Ok(report);
        }

        let context = RenderContext::new(&args);
        for descriptor in catalog.descriptors() {
            self.generate_one(&descriptor, &args, &resolver, &context, &mut report);
        }

        transition(&mut report, GenerationStage::Done);
        info!(summary = %report.summary(), "Generation finished");
        Ok(report)
    }

    /// A root is usable when it is not one of the forbidden roots and names
    /// an existing directory.
    pub fn root_path_is_valid(&self, path: &Path) -> bool {
        !validator::is_forbidden_root(path) && self.filesystem.is_dir(path)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn resolve_root(&self, args: ArgumentSet) -> (ArgumentSet, bool) {
        if self.root_path_is_valid(args.path()) {
            return (args, false);
        }

        let fallback = self.options.fallback_root.clone();
        warn!(
            requested = %args.path().display(),
            fallback = %fallback.display(),
            "Unusable --path, using fallback root"
        );
        self.notifier.warn(&format!(
            "The specified --path `{}` does not exist or cannot be used. {} will be used as the --path instead.",
            args.path().display(),
            fallback.display()
        ));
        (args.with_root(fallback), true)
    }

    /// Attempt every required directory independently.
    ///
    /// Returns `false` when no directory can be derived at all, in which
    /// case no file can be placed either.
    fn ensure_directories(
        &self,
        args: &ArgumentSet,
        resolver: &PathResolver,
        report: &mut GenerationReport,
    ) -> bool {
        let directories = match resolver.required_directories(args) {
            Ok(directories) => directories,
            Err(e) => {
                warn!(error = %e, "No output directory could be derived");
                self.report_unresolved(&e);
                return false;
            }
        };

        for directory in directories {
            if self.filesystem.is_dir(&directory) {
                debug!(path = %directory.display(), "Directory already exists");
                continue;
            }

            if self.options.dry_run {
                self.notifier
                    .info(&format!("Would create directory at: {}", directory.display()));
                continue;
            }

            self.notifier
                .info(&format!("Creating directory at: {}", directory.display()));
            match self.filesystem.create_dir_all(&directory) {
                Ok(()) => report.directories_created.push(directory),
                Err(e) => {
                    warn!(path = %directory.display(), error = %e, "Directory creation failed");
                    self.notifier.warn(&format!(
                        "Could not create directory at {}: {}",
                        directory.display(),
                        e
                    ));
                    report.failed.push(FailedTarget {
                        kind: None,
                        path: directory,
                        reason: e.to_string(),
                    });
                }
            }
        }
        true
    }

    fn generate_one(
        &self,
        descriptor: &TemplateDescriptor,
        args: &ArgumentSet,
        resolver: &PathResolver,
        context: &RenderContext,
        report: &mut GenerationReport,
    ) {
        let kind = descriptor.kind;
        let spec = match GeneratedFileSpec::derive(descriptor, resolver, args) {
            Ok(spec) => spec,
            Err(e) => {
                warn!(%kind, error = %e, "No target for template");
                self.report_unresolved(&e);
                return;
            }
        };

        transition(report, GenerationStage::Rendering(kind));
        let content = match self.render(descriptor, context) {
            Ok(content) => content,
            Err(e) => {
                warn!(%kind, error = %e, "Render failed");
                self.notifier.warn(&format!(
                    "Could not generate {}: {}",
                    spec.target_path.display(),
                    e
                ));
                report.failed.push(FailedTarget {
                    kind: Some(kind),
                    path: spec.target_path,
                    reason: e.to_string(),
                });
                return;
            }
        };

        transition(report, GenerationStage::Writing(kind));
        self.materialize(&spec, &content, report);
    }

    fn report_unresolved(&self, error: &DomainError) {
        self.notifier.warn(&error.to_string());
        for hint in error.suggestions() {
            self.notifier.warn(&hint);
        }
    }

    fn render(
        &self,
        descriptor: &TemplateDescriptor,
        context: &RenderContext,
    ) -> ClasswrightResult<String> {
        let template = self.store.load(descriptor)?;
        self.renderer.render(descriptor.kind, &template, context)
    }

    /// Write `content` unless something already occupies the target.
    ///
    /// The `exists` probe keeps dry runs honest; the write itself refuses to
    /// replace anything that appears in between.
    fn materialize(&self, spec: &GeneratedFileSpec, content: &str, report: &mut GenerationReport) {
        let target = &spec.target_path;

        if self.filesystem.exists(target) {
            self.skip_existing(target, report);
            return;
        }

        if self.options.dry_run {
            self.notifier
                .info(&format!("Would write to {}", target.display()));
            report.planned.push(target.clone());
            return;
        }

        match self.filesystem.write_file(target, content) {
            Ok(()) => {
                self.notifier.info(&format!("Wrote {}", target.display()));
                report.written.push(target.clone());
            }
            Err(ClasswrightError::Application(ApplicationError::TargetExists { .. })) => {
                self.skip_existing(target, report);
            }
            Err(e) => {
                warn!(path = %target.display(), error = %e, "Write failed");
                self.notifier.warn(&format!(
                    "Could not write to {}: {}",
                    target.display(),
                    e
                ));
                report.failed.push(FailedTarget {
                    kind: Some(spec.kind),
                    path: target.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    fn skip_existing(&self, target: &Path, report: &mut GenerationReport) {
        self.notifier.warn(&format!(
            "Could not write file because a file already exists at {}",
            target.display()
        ));
        report.skipped.push(target.to_path_buf());
    }
}

fn transition(report: &mut GenerationReport, stage: GenerationStage) {
    debug!(%stage, "Stage entered");
    report.stages.push(stage);
}
