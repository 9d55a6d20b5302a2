//! Stable-interval detection over historical intervals.

use tahara_calendar::{CalendarError, HebrewDate};

use crate::qualifier::Qualifier;
use crate::restricted::{RestrictedDay, RuleKind};

/// Returns the intervals that no later, strictly longer interval has
/// uprooted, newest first.
///
/// `intervals` is ordered oldest to newest. Walking backwards, an interval
/// is kept unless some interval at a later position is strictly greater.
/// Equal later intervals do not uproot it.
///
/// # Example
///
/// ```
/// use tahara_rules::stable_intervals;
///
/// // 30 is uprooted by the later 31; 31 and 29 stand.
/// assert_eq!(stable_intervals(&[30, 31, 29]), vec![29, 31]);
/// ```
pub fn stable_intervals(intervals: &[u32]) -> Vec<u32> {
    let mut kept = Vec::new();
    let mut longest_later = 0;
    for &interval in intervals.iter().rev() {
        if interval >= longest_later {
            kept.push(interval);
        }
        longest_later = longest_later.max(interval);
    }
    kept
}

/// Projects each stable interval forward from the event on `source`.
///
/// Each kept interval `v` yields a day at `source + v - 1` with the event's
/// qualifier.
pub(crate) fn stable_interval_days(
    source: HebrewDate,
    qualifier: Qualifier,
    intervals: &[u32],
) -> Result<Vec<RestrictedDay>, CalendarError> {
    stable_intervals(intervals)
        .into_iter()
        .map(|interval| {
            let date = source.add_days(i64::from(interval) - 1)?;
            Ok(RestrictedDay::new(
                source,
                RuleKind::StableInterval(interval),
                date,
                qualifier,
            ))
        })
        .collect()
}
