//! Diagnostics for the `tahara` binary.
//!
//! Skipped input lines are reported at `warn`, pipeline milestones (lines
//! read, schedule computed, file written) at `info`, and per-event rule
//! output at `debug`. Everything goes to stderr; stdout carries only the
//! rendered schedule or JSON, so `tahara calculate > out.txt` stays clean.

use tracing_subscriber::EnvFilter;

/// The binary plus the calendar, rule-engine and file-format crates.
const TAHARA_TARGETS: &[&str] = &["tahara", "tahara_calendar", "tahara_rules", "tahara_io"];

/// Level selected by the repeated `-v` flag.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Directives enabling `level` for the tahara crates only, so dependency
/// logs stay quiet.
fn tahara_directives(level: &str) -> String {
    TAHARA_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber. A set `RUST_LOG` wins over `-v`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tahara_directives(level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_by_default_and_saturates() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(3), "trace");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn directives_cover_every_crate() {
        assert_eq!(
            tahara_directives("debug"),
            "tahara=debug,tahara_calendar=debug,tahara_rules=debug,tahara_io=debug"
        );
    }

    #[test]
    fn directives_parse_as_filter() {
        assert!(EnvFilter::try_new(tahara_directives("info")).is_ok());
    }
}
