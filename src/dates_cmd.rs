//! Dates commands: add to, list and convert entries of date files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::info_span;

use tahara_calendar::HebrewDate;
use tahara_io::{
    AppendOutcome, append_entry, format_entry, parse_date, parse_line, parse_qualifier, read_lines,
};
use tahara_rules::Qualifier;

use crate::config::TaharaConfig;

/// Validate a date, normalise it to the lunar input form and append it.
pub fn add(file: &Path, date: &str, qualifier: &str) -> Result<()> {
    let _cmd = info_span!("dates_add").entered();
    let today = Local::now().date_naive();

    let qualifier = parse_qualifier(qualifier).context("invalid qualifier")?;
    let date = parse_date(date, today).with_context(|| format!("invalid date: {date}"))?;
    let entry = format_entry(date, qualifier);

    let outcome = append_entry(file, date, qualifier)
        .with_context(|| format!("failed to add date to {}", file.display()))?;
    match outcome {
        AppendOutcome::Created => {
            println!("Created new file '{}' with date: {entry}", file.display());
        }
        AppendOutcome::Appended => println!("Added date to '{}': {entry}", file.display()),
    }
    println!("Hebrew date: {}", date.hebrew_date_string());
    Ok(())
}

/// Print every line of a date file with its Hebrew and Gregorian forms.
pub fn list(file: Option<PathBuf>, config: &TaharaConfig) -> Result<()> {
    let _cmd = info_span!("dates_list").entered();
    let path = file.unwrap_or_else(|| config.files.default_input.clone());

    let lines = read_lines(&path)
        .with_context(|| format!("failed to read date file: {}", path.display()))?;
    if lines.iter().all(|l| l.trim().is_empty()) {
        println!("File is empty: {}", path.display());
        return Ok(());
    }

    println!("Dates in '{}':", path.display());
    println!("{}", "-".repeat(60));
    print!("{}", list_report(&lines, Local::now().date_naive()));
    Ok(())
}

/// Print the lunar input form, Hebrew rendering and Gregorian date of one date.
pub fn convert(date: &str, qualifier: Option<&str>) -> Result<()> {
    let _cmd = info_span!("dates_convert").entered();
    let qualifier = match qualifier {
        Some(q) => parse_qualifier(q).context("invalid qualifier")?,
        None => Qualifier::Day,
    };
    let date =
        parse_date(date, Local::now().date_naive()).with_context(|| format!("invalid date: {date}"))?;
    print!("{}", convert_report(date, qualifier)?);
    Ok(())
}

fn time_word(qualifier: Qualifier) -> &'static str {
    match qualifier {
        Qualifier::Night => "Night",
        Qualifier::Day => "Day",
    }
}

fn gregorian_string(date: HebrewDate) -> Result<String> {
    Ok(date.to_gregorian()?.format("%d/%m/%Y").to_string())
}

/// One block per non-blank line: valid entries with their conversions,
/// invalid ones flagged with the reason.
fn list_report(lines: &[String], today: NaiveDate) -> String {
    let mut out = String::new();
    for (idx, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;
        match parse_line(line, today) {
            Ok(Some(event)) => {
                let gregorian = gregorian_string(event.date())
                    .unwrap_or_else(|_| "out of range".to_string());
                out.push_str(&format!("{line_no:2}. {line}\n"));
                out.push_str(&format!("    Hebrew: {}\n", event.date().hebrew_date_string()));
                out.push_str(&format!(
                    "    Gregorian: {gregorian} ({})\n\n",
                    time_word(event.qualifier())
                ));
            }
            Ok(None) => {}
            Err(e) => out.push_str(&format!("{line_no:2}. {line} (INVALID: {e})\n\n")),
        }
    }
    out
}

fn convert_report(date: HebrewDate, qualifier: Qualifier) -> Result<String> {
    let time = time_word(qualifier);
    Ok(format!(
        "  Input format: {}\n  Hebrew: {} ({time})\n  English: {}\n  Gregorian: {} ({time})\n",
        format_entry(date, qualifier),
        date.hebrew_date_string(),
        date.english_date_string(),
        gregorian_string(date)?,
    ))
}
