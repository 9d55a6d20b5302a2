//! Human-readable rendering of a schedule.

use tahara_calendar::HebrewDate;
use tahara_rules::{EventRecord, Qualifier, RestrictedDay, RestrictedEntry, Schedule};

const HEBREW_WEEKDAYS: [&str; 7] = ["ראשון", "שני", "שלישי", "רביעי", "חמישי", "שישי", "שבת"];
const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const ENTRY_INDENT: &str = "  ";
const GROUP_INDENT: &str = "    ";

/// Wording of headings, rule labels, qualifiers and weekdays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Hebrew,
}

/// How dates are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// Hebrew numerals and month names: `ח׳ אדר תשפ״ה`.
    #[default]
    Hebrew,
    /// The input form: `8/12/5785`.
    Numeric,
    /// English month names: `8 Adar 5785`.
    English,
}

/// Presentation options for [`render_text`].
#[derive(Debug, Clone)]
pub struct TextStyle {
    separator: String,
    show_intervals: bool,
    language: Language,
    date_style: DateStyle,
    show_gregorian: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            separator: "-".repeat(25),
            show_intervals: true,
            language: Language::default(),
            date_style: DateStyle::default(),
            show_gregorian: false,
        }
    }
}

impl TextStyle {
    /// Sets the line printed after each event block.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Shows or hides the interval list header.
    pub fn with_show_intervals(mut self, show: bool) -> Self {
        self.show_intervals = show;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_date_style(mut self, date_style: DateStyle) -> Self {
        self.date_style = date_style;
        self
    }

    /// Appends the Gregorian date after every rendered date.
    pub fn with_show_gregorian(mut self, show: bool) -> Self {
        self.show_gregorian = show;
        self
    }

    fn date(&self, date: HebrewDate) -> String {
        let mut text = match self.date_style {
            DateStyle::Hebrew => date.hebrew_date_string(),
            DateStyle::Numeric => date.to_string(),
            DateStyle::English => date.english_date_string(),
        };
        if self.show_gregorian {
            if let Ok(gregorian) = date.to_gregorian() {
                text.push_str(&format!(" [{gregorian}]"));
            }
        }
        text
    }

    /// Date, qualifier and weekday, worded for the language.
    fn when(&self, date: HebrewDate, qualifier: Qualifier) -> String {
        let weekday = usize::from(date.weekday() - 1);
        match self.language {
            Language::Hebrew => format!(
                "{} ב{} {}",
                self.date(date),
                qualifier.hebrew_name(),
                HEBREW_WEEKDAYS[weekday]
            ),
            Language::English => format!(
                "{} ({qualifier}, {})",
                self.date(date),
                ENGLISH_WEEKDAYS[weekday]
            ),
        }
    }

    fn intervals_heading(&self) -> &'static str {
        match self.language {
            Language::Hebrew => "רשימת הפלגות:",
            Language::English => "Intervals:",
        }
    }

    fn group_heading(&self) -> &'static str {
        match self.language {
            Language::Hebrew => "הפלגות שלא נעקרו:",
            Language::English => "Stable intervals:",
        }
    }

    fn day_line(&self, indent: &str, day: &RestrictedDay) -> String {
        let label = match self.language {
            Language::Hebrew => day.rule().hebrew_label(),
            Language::English => day.label(),
        };
        format!("{indent}{label} - {}", self.when(day.date(), day.qualifier()))
    }

    fn event_block(&self, event: &EventRecord, lines: &mut Vec<String>) {
        lines.push(format!("{}:", self.when(event.date(), event.qualifier())));
        for entry in event.restricted_days() {
            match entry {
                RestrictedEntry::Single(day) => lines.push(self.day_line(ENTRY_INDENT, day)),
                RestrictedEntry::Group { days, .. } => {
                    lines.push(format!("{ENTRY_INDENT}{}", self.group_heading()));
                    lines.extend(days.iter().map(|day| self.day_line(GROUP_INDENT, day)));
                }
            }
        }
        lines.push(self.separator.clone());
    }
}

/// Render a schedule as text, one block per event.
///
/// The optional interval header lists every interval of the run. Each event
/// block starts with the event's date, qualifier and weekday, lists its
/// restricted days indented below, and nests the stable-interval group under
/// its own sub-heading.
pub fn render_text(schedule: &Schedule, style: &TextStyle) -> String {
    let mut lines = Vec::new();
    if style.show_intervals {
        lines.push(style.intervals_heading().to_string());
        lines.push(format!("{:?}", schedule.intervals()));
        lines.push(style.separator.clone());
    }
    for event in schedule.events() {
        style.event_block(event, &mut lines);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tahara_rules::{RuleSet, process_events};

    fn schedule() -> Schedule {
        let first = HebrewDate::new(5785, 7, 1).unwrap();
        let events = [0, 30, 61, 89]
            .into_iter()
            .map(|offset| EventRecord::new(first.add_days(offset).unwrap(), Qualifier::Night))
            .collect();
        process_events(events, &RuleSet::new()).unwrap()
    }

    #[test]
    fn interval_header_toggle() {
        let schedule = schedule();
        let text = render_text(&schedule, &TextStyle::default());
        assert!(text.starts_with("Intervals:\n[31, 32, 29]\n-------------------------\n"));

        let text = render_text(&schedule, &TextStyle::default().with_show_intervals(false));
        assert!(!text.contains("Intervals:"));
    }

    #[test]
    fn group_is_nested_under_heading() {
        let style = TextStyle::default()
            .with_show_intervals(false)
            .with_date_style(DateStyle::Numeric);
        let text = render_text(&schedule(), &style);
        let lines: Vec<&str> = text.lines().collect();

        let heading = lines
            .iter()
            .rposition(|l| *l == "  Stable intervals:")
            .unwrap();
        // Last event: intervals [31, 32, 29] leave 29 and 32 standing.
        assert!(lines[heading + 1].starts_with("    29 - "));
        assert!(lines[heading + 2].starts_with("    32 - "));
        assert_eq!(lines[heading + 3], "-------------------------");
    }

    #[test]
    fn english_event_block() {
        let style = TextStyle::default()
            .with_show_intervals(false)
            .with_date_style(DateStyle::English);
        let text = render_text(&schedule(), &style);
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "1 Tishrei 5785 (night, Thursday):");
        assert_eq!(
            lines.next().unwrap(),
            "  light-seed - 29 Tishrei 5785 (day, Thursday)"
        );
        assert_eq!(
            lines.next().unwrap(),
            "  medium-interval-30 - 30 Tishrei 5785 (night, Friday)"
        );
    }

    #[test]
    fn hebrew_wording() {
        let style = TextStyle::default().with_language(Language::Hebrew);
        let text = render_text(&schedule(), &style);
        assert!(text.starts_with("רשימת הפלגות:\n"));
        assert!(text.contains("א׳ תשרי תשפ״ה בליל חמישי:"));
        assert!(text.contains("  אור זרוע - "));
        assert!(text.contains("  הפלגות שלא נעקרו:"));
    }

    #[test]
    fn gregorian_suffix() {
        let style = TextStyle::default()
            .with_show_intervals(false)
            .with_date_style(DateStyle::Numeric)
            .with_show_gregorian(true);
        let text = render_text(&schedule(), &style);
        assert!(text.starts_with("1/7/5785 [2024-10-03] (night, Thursday):"));
    }

    #[test]
    fn custom_separator() {
        let style = TextStyle::default().with_separator("====");
        let text = render_text(&schedule(), &style);
        assert_eq!(text.matches("====\n").count(), 5);
    }
}
