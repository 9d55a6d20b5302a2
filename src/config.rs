use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Top-level Tahara settings.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TaharaConfig {
    /// Default file locations.
    #[serde(default)]
    pub files: FilesToml,

    /// Output presentation.
    #[serde(default)]
    pub output: OutputToml,

    /// Which rule categories are emitted.
    #[serde(default)]
    pub calculations: CalculationsToml,

    /// Interactive behaviour and diagnostics.
    #[serde(default)]
    pub interface: InterfaceToml,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FilesToml {
    #[serde(default = "default_input")]
    pub default_input: PathBuf,
    #[serde(default = "default_output")]
    pub default_output: PathBuf,
}

impl Default for FilesToml {
    fn default() -> Self {
        Self {
            default_input: default_input(),
            default_output: default_output(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("dates.txt")
}
fn default_output() -> PathBuf {
    PathBuf::from("tahara_results.txt")
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// Write to `files.default_output` when no `--output` is given.
    #[serde(default)]
    pub auto_export: bool,
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_date_style")]
    pub date_style: String,
    #[serde(default = "default_true")]
    pub show_cycle_intervals: bool,
    #[serde(default)]
    pub show_gregorian: bool,
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            auto_export: false,
            format: default_format(),
            language: default_language(),
            date_style: default_date_style(),
            show_cycle_intervals: true,
            show_gregorian: false,
            separator: default_separator(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}
fn default_language() -> String {
    "english".to_string()
}
fn default_date_style() -> String {
    "hebrew".to_string()
}
fn default_separator() -> String {
    "-".repeat(25)
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CalculationsToml {
    #[serde(default = "default_true")]
    pub include_or_zarua: bool,
    #[serde(default = "default_true")]
    pub include_kartyupleity: bool,
    #[serde(default = "default_true")]
    pub include_standard_cycles: bool,
    #[serde(default = "default_true")]
    pub include_personal_intervals: bool,
    #[serde(default = "default_true")]
    pub include_unbroken_patterns: bool,
}

impl Default for CalculationsToml {
    fn default() -> Self {
        Self {
            include_or_zarua: true,
            include_kartyupleity: true,
            include_standard_cycles: true,
            include_personal_intervals: true,
            include_unbroken_patterns: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct InterfaceToml {
    /// How many times `calculate` asks for another path when the input file
    /// is missing.
    #[serde(default = "default_max_file_retry_attempts")]
    pub max_file_retry_attempts: u32,
    #[serde(default = "default_true")]
    pub show_parsing_errors: bool,
}

impl Default for InterfaceToml {
    fn default() -> Self {
        Self {
            max_file_retry_attempts: default_max_file_retry_attempts(),
            show_parsing_errors: true,
        }
    }
}

fn default_max_file_retry_attempts() -> u32 {
    3
}

impl TaharaConfig {
    /// Load settings from `path`, falling back to defaults if it is missing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "settings file not found, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }

    /// Render the settings as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize settings")
    }
}
