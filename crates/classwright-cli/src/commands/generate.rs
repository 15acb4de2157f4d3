//! The default command: generate the four files for one class.
//!
//! Responsibility: merge flags over config, wire the adapters into a
//! [`GenerateService`], and print the report.  Validation, fallback and
//! skip-on-conflict all happen in the core.

use tracing::{debug, instrument};

use classwright_adapters::{DiskTemplateStore, LocalFilesystem, PlaceholderRenderer};
use classwright_core::application::{GenerateService, GenerationOptions};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute a generate run.
///
/// A missing class flag is the only error; skipped or failed files are
/// reported and still exit 0.
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: &GenerateArgs, config: &AppConfig, output: OutputManager) -> CliResult<()> {
    let options = generation_options(args, config);
    debug!(
        templates_dir = %options.templates_dir.display(),
        fallback_root = %options.fallback_root.display(),
        extension = %options.extension,
        "Generation options resolved"
    );

    let service = GenerateService::new(
        Box::new(DiskTemplateStore::new()),
        Box::new(PlaceholderRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(output.clone()),
        options,
    );

    let report = service.generate(args.raw_arguments())?;
    output.report(&report)
}

/// CLI flags win over config values.
fn generation_options(args: &GenerateArgs, config: &AppConfig) -> GenerationOptions {
    GenerationOptions {
        templates_dir: args
            .templates_dir
            .clone()
            .unwrap_or_else(|| config.generation.templates_dir.clone()),
        extension: args
            .extension
            .clone()
            .unwrap_or_else(|| config.generation.extension.clone()),
        fallback_root: args
            .fallback_dir
            .clone()
            .unwrap_or_else(|| config.generation.fallback_dir.clone()),
        dry_run: args.dry_run,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn config_values_apply_without_flags() {
        let config = AppConfig::default();
        let options = generation_options(&GenerateArgs::default(), &config);

        assert_eq!(options.extension, "php");
        assert_eq!(options.templates_dir, config.generation.templates_dir);
        assert_eq!(options.fallback_root, config.generation.fallback_dir);
        assert!(!options.dry_run);
    }

    #[test]
    fn flags_override_config() {
        let args = GenerateArgs {
            templates_dir: Some(PathBuf::from("/opt/templates")),
            extension: Some("inc".into()),
            fallback_dir: Some(PathBuf::from("/var/tmp/classwright")),
            dry_run: true,
            ..GenerateArgs::default()
        };
        let options = generation_options(&args, &AppConfig::default());

        assert_eq!(options.templates_dir, PathBuf::from("/opt/templates"));
        assert_eq!(options.extension, "inc");
        assert_eq!(options.fallback_root, PathBuf::from("/var/tmp/classwright"));
        assert!(options.dry_run);
    }
}
