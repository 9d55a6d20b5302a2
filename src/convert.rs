//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};
use chrono::NaiveDate;

use crate::config::*;

use tahara_io::{DateStyle, Language, ReaderConfig, TextStyle};
use tahara_rules::RuleSet;

/// Rendering selected for `calculate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parses an output format name string into the corresponding enum variant.
pub fn parse_output_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Parses a language name string into the corresponding enum variant.
pub fn parse_language(s: &str) -> Result<Language> {
    match s.to_lowercase().as_str() {
        "english" => Ok(Language::English),
        "hebrew" => Ok(Language::Hebrew),
        other => bail!("unknown language: {other:?}"),
    }
}

/// Parses a date style name string into the corresponding enum variant.
pub fn parse_date_style(s: &str) -> Result<DateStyle> {
    match s.to_lowercase().as_str() {
        "hebrew" => Ok(DateStyle::Hebrew),
        "numeric" => Ok(DateStyle::Numeric),
        "english" => Ok(DateStyle::English),
        other => bail!("unknown date style: {other:?}"),
    }
}

/// Builds a [`RuleSet`] from the TOML calculations configuration.
pub fn build_rule_set(calc: &CalculationsToml) -> RuleSet {
    RuleSet::new()
        .with_or_zarua(calc.include_or_zarua)
        .with_kartyupleity(calc.include_kartyupleity)
        .with_standard_cycles(calc.include_standard_cycles)
        .with_personal_interval(calc.include_personal_intervals)
        .with_stable_patterns(calc.include_unbroken_patterns)
}

/// Builds a [`TextStyle`] from the TOML output configuration.
pub fn build_text_style(output: &OutputToml) -> Result<TextStyle> {
    let language = parse_language(&output.language)?;
    let date_style = parse_date_style(&output.date_style)?;
    Ok(TextStyle::default()
        .with_separator(output.separator.as_str())
        .with_show_intervals(output.show_cycle_intervals)
        .with_language(language)
        .with_date_style(date_style)
        .with_show_gregorian(output.show_gregorian))
}

/// Builds a [`ReaderConfig`] from the TOML interface configuration.
pub fn build_reader_config(interface: &InterfaceToml, today: NaiveDate) -> ReaderConfig {
    ReaderConfig::default()
        .with_today(today)
        .with_show_parsing_errors(interface.show_parsing_errors)
}
