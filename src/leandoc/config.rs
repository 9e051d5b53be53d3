//! Configuration loader for the command line tool.
//!
//! `defaults/leandoc.default.toml` is embedded into the binary so that docs and runtime
//! behavior stay in sync. A user file is layered on top with [`Loader`] before
//! deserializing into [`LeandocConfig`]. The lexer and parser never read configuration.

use crate::leandoc::report::ReportOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/leandoc.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LeandocConfig {
    pub output: OutputConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: AstFormat,
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub list_inline_roles: bool,
    pub list_code_blocks: bool,
}

impl From<&ReportConfig> for ReportOptions {
    fn from(config: &ReportConfig) -> Self {
        ReportOptions {
            list_inline_roles: config.list_inline_roles,
            list_code_blocks: config.list_code_blocks,
        }
    }
}

/// Output format for the document tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AstFormat {
    Json,
    Yaml,
    Treeviz,
}

impl AstFormat {
    /// Registry name of the format
    pub fn name(&self) -> &'static str {
        match self {
            AstFormat::Json => "json",
            AstFormat::Yaml => "yaml",
            AstFormat::Treeviz => "treeviz",
        }
    }
}

impl fmt::Display for AstFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for command line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<LeandocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<LeandocConfig, ConfigError> {
    Loader::new().build()
}
