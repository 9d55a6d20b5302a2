//! # tahara-io
//!
//! Everything between the rule engine and the outside world: the input line
//! grammar, date-file reading with per-line diagnostics, date-file appends,
//! and text / JSON rendering of a computed
//! [`Schedule`](tahara_rules::Schedule).

mod error;
mod json;
mod parse;
mod reader;
mod text;
mod writer;

pub use error::{IoError, ParseError};
pub use json::{DayOutput, EntryOutput, EventOutput, ScheduleOutput, to_json};
pub use parse::{format_entry, parse_date, parse_line, parse_qualifier};
pub use reader::{LineDiagnostic, ParsedBatch, ReaderConfig, parse_events, read_events, read_lines};
pub use text::{DateStyle, Language, TextStyle, render_text};
pub use writer::{AppendOutcome, append_entry, export_results};
