//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate only sees the
//! [`GenerationOptions`](classwright_core::application::GenerationOptions)
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by the generate command, not here)
//! 2. Environment variables: `CLASSWRIGHT_GENERATION__EXTENSION=php`
//! 3. Config file: `--config <FILE>` (required) or the platform config dir
//!    (optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Prefix of every environment variable the config layer reads.
pub const ENV_PREFIX: &str = "CLASSWRIGHT";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where templates come from and where output goes when `--path` is unusable.
    pub generation: GenerationConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub extension: String,
    pub templates_dir: PathBuf,
    pub fallback_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins when given.
    pub format: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let install_dir = install_dir();
        Self {
            extension: "php".into(),
            templates_dir: install_dir.join("templates"),
            fallback_dir: install_dir.join("tmp"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the platform config file is read if present.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::from(Self::default_config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration sources")?;

        settings
            .try_deserialize()
            .context("Configuration has an invalid value")
    }

    /// Path of the configuration file in effect.
    pub fn config_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.classwright.toml` in the current directory.
    pub fn default_config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "classwright", "classwright")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".classwright.toml"))
    }
}

/// Directory holding the running executable.
fn install_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
