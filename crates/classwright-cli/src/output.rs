//! Output management and formatting.
//!
//! [`OutputManager`] is also the terminal [`Notifier`]: the core hands it
//! plain sentences and it decides glyphs, colours and the stream.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use tracing::debug;

use classwright_core::application::{GenerationReport, ports::Notifier};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Manages CLI output based on configuration.
#[derive(Debug, Clone)]
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    /// Notices go here; stderr in JSON mode so stdout stays parseable.
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => OutputFormat::from_config(&config.output.format),
            explicit => explicit,
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        let term = if resolved_format == OutputFormat::Json {
            Term::stderr()
        } else {
            Term::stdout()
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term,
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

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.  Not suppressed in quiet mode either:
    /// a skipped file or a fallback root is something the user must see.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
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

    /// Final word on a generate run.
    ///
    /// JSON mode prints the whole report on stdout, even when quiet.
    pub fn report(&self, report: &GenerationReport) -> CliResult<()> {
        if self.resolved_format == OutputFormat::Json {
            let json = serde_json::to_string_pretty(report).map_err(|e| CliError::IoError {
                message: format!("Failed to serialise report: {e}"),
                source: io::Error::other(e),
            })?;
            Term::stdout().write_line(&json)?;
            return Ok(());
        }

        if report.is_clean() {
            self.success(&report.summary())?;
        } else {
            self.warning(&report.summary())?;
        }
        Ok(())
    }
}

impl Notifier for OutputManager {
    fn info(&self, message: &str) {
        if let Err(e) = OutputManager::info(self, message) {
            debug!(error = %e, "Could not print notice");
        }
    }

    fn warn(&self, message: &str) {
        if let Err(e) = self.warning(message) {
            debug!(error = %e, "Could not print notice");
        }
    }

    fn error(&self, message: &str) {
        if let Err(e) = OutputManager::error(self, message) {
            debug!(error = %e, "Could not print notice");
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color: false,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
        assert!(out.quiet);
    }

    #[test]
    fn error_not_suppressed_in_quiet_mode() {
        let out = make_manager(true, OutputFormat::Plain);
        assert!(out.error("something went wrong").is_ok());
    }

    #[test]
    fn plain_and_json_never_colour() {
        assert!(make_manager(false, OutputFormat::Plain).no_color);
        assert!(make_manager(false, OutputFormat::Json).no_color);
        assert!(!make_manager(false, OutputFormat::Human).no_color);
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Auto,
        };
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        assert_eq!(OutputManager::new(&args, &config).resolved_format, OutputFormat::Json);
    }

    #[test]
    fn explicit_flag_beats_config() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Plain,
        };
        assert_eq!(OutputManager::new(&args, &config).resolved_format, OutputFormat::Plain);
    }

    #[test]
    fn report_prints_for_every_format() {
        let report = GenerationReport::new("/work", false, false);
        assert!(make_manager(false, OutputFormat::Plain).report(&report).is_ok());
        assert!(make_manager(false, OutputFormat::Json).report(&report).is_ok());
    }
}
