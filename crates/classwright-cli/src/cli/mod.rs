//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use classwright_core::domain::RawArguments;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand the invocation is a generate run.  Generate flags
/// given alongside a subcommand are ignored.
#[derive(Debug, Parser)]
#[command(
    name    = "classwright",
    bin_name = "classwright",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate a PHP class, its interface and their tests",
    long_about = "classwright writes four files for a new class: an interface, \
                  a class implementing it, a test trait for the interface and \
                  a test case for the class. Existing files are never overwritten.",
    after_help = "EXAMPLES:\n\
        \x20 classwright --name Widget --path . --rootnamespace App \\\n\
        \x20     --subnamespace 'Sub\\Ns' --basetestname AppTest\n\
        \x20 classwright --dry-run --name Widget --path . --rootnamespace App \\\n\
        \x20     --subnamespace Sub --basetestname AppTest\n\
        \x20 classwright completions bash > ~/.local/share/bash-completion/completions/classwright",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Inputs for a generate run.
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Optional subcommand.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 classwright completions bash > ~/.local/share/bash-completion/completions/classwright\n\
            \x20 classwright completions zsh  > ~/.zfunc/_classwright\n\
            \x20 classwright completions fish > ~/.config/fish/completions/classwright.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 classwright config path\n\
            \x20 classwright config list\n\
            \x20 classwright config get generation.extension"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Inputs of a generate run.
///
/// The five class flags are optional at the parser level and accept an empty
/// value (`--name` alone parses as `""`).  Presence is checked by the core
/// validator so a missing flag gets its own explanation and exit code 1.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Name of the class to generate.
    #[arg(
        long = "name",
        value_name = "NAME",
        num_args = 0..=1,
        default_missing_value = "",
        help = "Name of the new class"
    )]
    pub name: Option<String>,

    /// Project root the files are generated under.
    #[arg(
        long = "path",
        value_name = "DIR",
        num_args = 0..=1,
        default_missing_value = "",
        help = "Full path to the project"
    )]
    pub path: Option<String>,

    /// Namespace prefix shared by the whole project.
    #[arg(
        long = "rootnamespace",
        value_name = "NAMESPACE",
        num_args = 0..=1,
        default_missing_value = "",
        help = "Root namespace of the project"
    )]
    pub root_namespace: Option<String>,

    /// Namespace below the root; each `\` segment becomes a directory.
    #[arg(
        long = "subnamespace",
        value_name = "NAMESPACE",
        num_args = 0..=1,
        default_missing_value = "",
        help = "Namespace of the new class below the root namespace"
    )]
    pub sub_namespace: Option<String>,

    /// Base test class the generated test extends.
    #[arg(
        long = "basetestname",
        value_name = "NAME",
        num_args = 0..=1,
        default_missing_value = "",
        help = "Name of the project's base test class"
    )]
    pub base_test_name: Option<String>,

    /// Override `generation.templates_dir`.
    #[arg(long = "templates-dir", value_name = "DIR", help = "Directory holding the templates")]
    pub templates_dir: Option<PathBuf>,

    /// Override `generation.extension`.
    #[arg(long = "extension", value_name = "EXT", help = "Template and output file extension")]
    pub extension: Option<String>,

    /// Override `generation.fallback_dir`.
    #[arg(
        long = "fallback-dir",
        value_name = "DIR",
        help = "Root used when --path cannot be used"
    )]
    pub fallback_dir: Option<PathBuf>,

    /// Resolve and render, but write nothing.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// Hand the five class inputs to the core, untouched.
    pub fn raw_arguments(&self) -> RawArguments {
        RawArguments {
            name: self.name.clone(),
            path: self.path.clone(),
            root_namespace: self.root_namespace.clone(),
            sub_namespace: self.sub_namespace.clone(),
            base_test_name: self.base_test_name.clone(),
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `classwright completions`.
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

/// Subcommands for `classwright config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generation.extension`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_full_generate_run() {
        let cli = Cli::parse_from([
            "classwright",
            "--name",
            "Widget",
            "--path",
            "/work",
            "--rootnamespace",
            "App",
            "--subnamespace",
            "Sub\\Ns",
            "--basetestname",
            "AppTest",
        ]);
        assert!(cli.command.is_none());

        let raw = cli.generate.raw_arguments();
        assert_eq!(raw.name.as_deref(), Some("Widget"));
        assert_eq!(raw.sub_namespace.as_deref(), Some("Sub\\Ns"));
        assert_eq!(raw.base_test_name.as_deref(), Some("AppTest"));
    }

    #[test]
    fn no_arguments_is_not_a_parse_error() {
        let cli = Cli::try_parse_from(["classwright"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.generate.name.is_none());
    }

    #[test]
    fn flag_without_value_is_empty() {
        let cli = Cli::parse_from(["classwright", "--name", "--path", "/work"]);
        assert_eq!(cli.generate.name.as_deref(), Some(""));
        assert_eq!(cli.generate.path.as_deref(), Some("/work"));
    }

    #[test]
    fn overrides_parse() {
        let cli = Cli::parse_from([
            "classwright",
            "--templates-dir",
            "/t",
            "--extension",
            "inc",
            "--fallback-dir",
            "/f",
            "--dry-run",
        ]);
        assert_eq!(cli.generate.templates_dir, Some(PathBuf::from("/t")));
        assert_eq!(cli.generate.extension.as_deref(), Some("inc"));
        assert_eq!(cli.generate.fallback_dir, Some(PathBuf::from("/f")));
        assert!(cli.generate.dry_run);
    }

    #[test]
    fn parse_completions() {
        let cli = Cli::parse_from(["classwright", "completions", "zsh"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions(CompletionsArgs { shell: Shell::Zsh }))
        ));
    }

    #[test]
    fn parse_config_get() {
        let cli = Cli::parse_from(["classwright", "config", "get", "output.format"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigCommands::Get { .. }))
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["classwright", "config", "list", "-vv"]);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["classwright", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }

    #[test]
    fn output_format_from_config() {
        assert_eq!(OutputFormat::from_config("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_config("PLAIN"), OutputFormat::Plain);
        assert_eq!(OutputFormat::from_config("fancy"), OutputFormat::Auto);
    }
}
