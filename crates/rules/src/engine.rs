//! Per-event rule table.

use crate::config::RuleSet;
use crate::error::RuleError;
use crate::event::EventRecord;
use crate::qualifier::Qualifier;
use crate::restricted::{RestrictedDay, RestrictedEntry, RuleKind, STABLE_GROUP_LABEL};
use crate::stability::stable_interval_days;

/// Computes the ordered restricted-day list for one event.
///
/// `prior_intervals` holds, oldest first, the intervals observed in the run
/// up to and including this event. The result is ordered:
///
/// 1. or zarua (the opposite half of the day: the day before the 30-day
///    date after a night event, the night of that date after a day event)
/// 2. 30-day (`D + 29`)
/// 3. kartyupleity, night events only (day half of the 30-day date)
/// 4. monthly (`D + length of D's month`)
/// 5. 31-day (`D + 30`)
/// 6. personal interval (`D + I - 1`), when the event has an interval
/// 7. the stable-interval group, when at least two prior intervals exist and
///    any of them stands
///
/// Categories disabled in `rules` are left out without disturbing the
/// order of the rest.
///
/// # Errors
///
/// Returns [`RuleError::Calendar`] if a restricted day falls outside the
/// supported calendar range.
pub fn restricted_days_for(
    event: &EventRecord,
    prior_intervals: &[u32],
    rules: &RuleSet,
) -> Result<Vec<RestrictedEntry>, RuleError> {
    let source = event.date();
    let qualifier = event.qualifier();
    let single = |rule, date, qualifier| {
        RestrictedEntry::Single(RestrictedDay::new(source, rule, date, qualifier))
    };

    let fixed_30 = source.add_days(29)?;
    let mut entries = Vec::with_capacity(8);

    if rules.or_zarua() {
        let date = match qualifier {
            Qualifier::Night => fixed_30.add_days(-1)?,
            Qualifier::Day => fixed_30,
        };
        entries.push(single(RuleKind::LightSeed, date, qualifier.opposite()));
    }

    if rules.standard_cycles() {
        entries.push(single(RuleKind::Fixed30, fixed_30, qualifier));
    }

    if qualifier == Qualifier::Night && rules.kartyupleity() {
        entries.push(single(RuleKind::DualCutoff, fixed_30, Qualifier::Day));
    }

    if rules.standard_cycles() {
        let month_len = i64::from(source.month_length());
        let monthly = source.add_days(month_len)?;
        entries.push(single(RuleKind::MonthlyPattern, monthly, qualifier));
        entries.push(single(RuleKind::Fixed31, source.add_days(30)?, qualifier));
    }

    if rules.personal_interval() {
        if let Some(interval) = event.interval() {
            let date = source.add_days(i64::from(interval) - 1)?;
            entries.push(single(RuleKind::PersonalInterval, date, qualifier));
        }
    }

    if rules.stable_patterns() && prior_intervals.len() >= 2 {
        let days = stable_interval_days(source, qualifier, prior_intervals)?;
        if !days.is_empty() {
            entries.push(RestrictedEntry::Group {
                label: STABLE_GROUP_LABEL.to_string(),
                days,
            });
        }
    }

    Ok(entries)
}
