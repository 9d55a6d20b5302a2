//! Calculate command: date file -> restricted days -> text or JSON.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Local;
use tracing::{info, info_span, warn};

use tahara_io::{export_results, read_events, render_text, to_json};
use tahara_rules::process_events;

use crate::cli::CalculateArgs;
use crate::config::TaharaConfig;
use crate::convert::{self, OutputFormat};

/// Run the calculation pipeline.
pub fn run(args: CalculateArgs, config: &TaharaConfig) -> Result<()> {
    let _cmd = info_span!("calculate").entered();

    // 1. Build configs from TOML and flags
    let format_name = args.format.as_deref().unwrap_or(&config.output.format);
    let format = convert::parse_output_format(format_name)?;
    let style = convert::build_text_style(&config.output)?;
    let rules = convert::build_rule_set(&config.calculations);
    let reader_cfg = convert::build_reader_config(&config.interface, Local::now().date_naive());

    // 2. Locate the input file, asking for another path if it is missing
    let default_input = &config.files.default_input;
    let requested = args.input.unwrap_or_else(|| default_input.clone());
    let input = resolve_input(
        requested,
        default_input,
        config.interface.max_file_retry_attempts,
        &mut std::io::stdin().lock(),
        &mut std::io::stderr(),
    )?;

    // 3. Parse events
    let batch = read_events(&input, &reader_cfg)
        .with_context(|| format!("failed to read date file: {}", input.display()))?;
    if batch.events().is_empty() {
        bail!("no valid dates found in {}", input.display());
    }

    // 4. Run the rule engine
    let schedule =
        process_events(batch.into_events(), &rules).context("failed to compute restricted days")?;

    // 5. Render
    let rendered = match format {
        OutputFormat::Text => render_text(&schedule, &style),
        OutputFormat::Json => to_json(&schedule).context("failed to render JSON")?,
    };

    // 6. Write to --output, the default export file, or stdout
    let destination = args.output.or_else(|| {
        config
            .output
            .auto_export
            .then(|| config.files.default_output.clone())
    });
    match destination {
        Some(path) => {
            export_results(&path, &rendered)
                .with_context(|| format!("failed to write results: {}", path.display()))?;
            info!(path = %path.display(), "results exported");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Returns `path` if it exists; otherwise prompts for another one up to
/// `max_attempts` times. An empty answer selects `default`.
fn resolve_input<R: BufRead, W: Write>(
    mut path: PathBuf,
    default: &Path,
    max_attempts: u32,
    answers: &mut R,
    prompt: &mut W,
) -> Result<PathBuf> {
    let mut attempts = 0;
    while !path.exists() {
        warn!(path = %path.display(), attempts, "input file not found");
        if attempts >= max_attempts {
            bail!(
                "input file not found: {} (after {attempts} retries)",
                path.display()
            );
        }
        attempts += 1;

        write!(
            prompt,
            "File '{}' not found. Enter another path (default: {}): ",
            path.display(),
            default.display()
        )?;
        prompt.flush()?;

        let mut answer = String::new();
        if answers.read_line(&mut answer)? == 0 {
            bail!("input file not found: {}", path.display());
        }
        let answer = answer.trim();
        path = if answer.is_empty() {
            default.to_path_buf()
        } else {
            PathBuf::from(answer)
        };
    }
    Ok(path)
}
