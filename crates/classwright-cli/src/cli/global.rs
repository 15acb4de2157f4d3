//! Flags shared by a generate run and every subcommand.
//!
//! `global = true` lets `classwright config list -v` and
//! `classwright -v --name …` both work.

use std::path::PathBuf;

use clap::{Args, ValueEnum, builder::FalseyValueParser};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more on stderr (-v info, -vv stage transitions, -vvv every filesystem call)
    ///
    /// Without it only warnings and errors are logged. `RUST_LOG` overrides
    /// this flag entirely.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Hide "Creating directory" / "Wrote" lines and the summary
    ///
    /// Skipped-file and fallback warnings are still printed.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print without ANSI colours (also set by NO_COLOR)
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read settings from FILE instead of the per-user config.toml
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How the run is reported; `auto` defers to `output.format`, then the terminal
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped
    #[default]
    Auto,
    /// Glyphs and colour
    Human,
    /// Glyphs only
    Plain,
    /// Generation report as JSON on stdout; notices move to stderr
    Json,
}

impl OutputFormat {
    /// Reads `output.format`; anything unrecognised is `Auto`.
    pub fn from_config(value: &str) -> Self {
        <Self as ValueEnum>::from_str(value, true).unwrap_or_default()
    }
}
