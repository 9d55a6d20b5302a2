//! Restricted days and the entries that group them.

use std::borrow::Cow;

use tahara_calendar::HebrewDate;

use crate::qualifier::Qualifier;

/// Label of the grouped stable-interval entry.
pub const STABLE_GROUP_LABEL: &str = "stable-intervals";

/// The rule that produced a restricted day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Or zarua: the onah preceding the 30-day restriction.
    LightSeed,
    /// Onah beinonit counted as 30 days (event date + 29).
    Fixed30,
    /// Kartyupleity: the day half of the 30-day restriction after a night event.
    DualCutoff,
    /// Veset hachodesh: same day of the following month.
    MonthlyPattern,
    /// Onah beinonit counted as 31 days (event date + 30).
    Fixed31,
    /// Haflagah: the event's own interval repeated.
    PersonalInterval,
    /// An earlier interval that no later, longer interval has uprooted.
    StableInterval(u32),
}

impl RuleKind {
    /// Returns the rule identifier, or the interval for stable-interval days.
    pub fn label(self) -> Cow<'static, str> {
        match self {
            Self::LightSeed => Cow::Borrowed("light-seed"),
            Self::Fixed30 => Cow::Borrowed("medium-interval-30"),
            Self::DualCutoff => Cow::Borrowed("dual-cutoff"),
            Self::MonthlyPattern => Cow::Borrowed("monthly-pattern"),
            Self::Fixed31 => Cow::Borrowed("medium-interval-31"),
            Self::PersonalInterval => Cow::Borrowed("personal-interval"),
            Self::StableInterval(interval) => Cow::Owned(interval.to_string()),
        }
    }

    /// Returns the traditional Hebrew name of the rule.
    pub fn hebrew_label(self) -> Cow<'static, str> {
        match self {
            Self::LightSeed => Cow::Borrowed("אור זרוע"),
            Self::Fixed30 => Cow::Borrowed("עונה בינונית 30"),
            Self::DualCutoff => Cow::Borrowed("כרתי ופלתי"),
            Self::MonthlyPattern => Cow::Borrowed("וסת החודש"),
            Self::Fixed31 => Cow::Borrowed("עונה בינונית 31"),
            Self::PersonalInterval => Cow::Borrowed("הפלגה"),
            Self::StableInterval(interval) => Cow::Owned(interval.to_string()),
        }
    }
}

/// One restricted day derived from an event.
///
/// The source event is referenced by a copy of its date rather than a
/// pointer; [`source_month`](Self::source_month) is what renderers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestrictedDay {
    source: HebrewDate,
    rule: RuleKind,
    date: HebrewDate,
    qualifier: Qualifier,
}

impl RestrictedDay {
    /// Creates a restricted day produced by `rule` for the event on `source`.
    pub fn new(source: HebrewDate, rule: RuleKind, date: HebrewDate, qualifier: Qualifier) -> Self {
        Self {
            source,
            rule,
            date,
            qualifier,
        }
    }

    /// Returns the date of the event that produced this day.
    pub fn source(&self) -> HebrewDate {
        self.source
    }

    /// Returns the month of the event that produced this day.
    pub fn source_month(&self) -> u8 {
        self.source.month()
    }

    /// Returns the producing rule.
    pub fn rule(&self) -> RuleKind {
        self.rule
    }

    /// Returns the rule label (see [`RuleKind::label`]).
    pub fn label(&self) -> Cow<'static, str> {
        self.rule.label()
    }

    /// Returns the restricted date.
    pub fn date(&self) -> HebrewDate {
        self.date
    }

    /// Returns the half of the day the restriction applies to.
    pub fn qualifier(&self) -> Qualifier {
        self.qualifier
    }

    /// Returns the restricted date's weekday (1 = Sunday).
    pub fn weekday(&self) -> u8 {
        self.date.weekday()
    }
}

/// An element of an event's restricted-day list: either one day, or the
/// labelled group of stable-interval days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestrictedEntry {
    /// A single restricted day.
    Single(RestrictedDay),
    /// A labelled cluster of restricted days, rendered under its own heading.
    Group {
        /// Group label, [`STABLE_GROUP_LABEL`] for the stable-interval cluster.
        label: String,
        /// Days in the group, newest interval first.
        days: Vec<RestrictedDay>,
    },
}

impl RestrictedEntry {
    /// Returns `true` for a grouped entry.
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// Returns the single day, or `None` for a group.
    pub fn as_single(&self) -> Option<&RestrictedDay> {
        match self {
            Self::Single(day) => Some(day),
            Self::Group { .. } => None,
        }
    }

    /// Returns all days in this entry (one for a single entry).
    pub fn days(&self) -> &[RestrictedDay] {
        match self {
            Self::Single(day) => std::slice::from_ref(day),
            Self::Group { days, .. } => days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> HebrewDate {
        HebrewDate::new(y, m, d).unwrap()
    }

    #[test]
    fn fixed_labels() {
        assert_eq!(RuleKind::Fixed30.label(), "medium-interval-30");
        assert_eq!(RuleKind::MonthlyPattern.label(), "monthly-pattern");
        assert_eq!(RuleKind::Fixed31.label(), "medium-interval-31");
        assert_eq!(RuleKind::PersonalInterval.label(), "personal-interval");
        assert_eq!(RuleKind::LightSeed.label(), "light-seed");
        assert_eq!(RuleKind::DualCutoff.label(), "dual-cutoff");
    }

    #[test]
    fn stable_interval_label_is_number() {
        assert_eq!(RuleKind::StableInterval(31).label(), "31");
        assert_eq!(RuleKind::StableInterval(31).hebrew_label(), "31");
    }

    #[test]
    fn hebrew_labels() {
        assert_eq!(RuleKind::LightSeed.hebrew_label(), "אור זרוע");
        assert_eq!(RuleKind::PersonalInterval.hebrew_label(), "הפלגה");
    }

    #[test]
    fn restricted_day_accessors() {
        let source = date(5785, 12, 8);
        let target = source.add_days(29).unwrap();
        let day = RestrictedDay::new(source, RuleKind::Fixed30, target, Qualifier::Day);
        assert_eq!(day.source(), source);
        assert_eq!(day.source_month(), 12);
        assert_eq!(day.rule(), RuleKind::Fixed30);
        assert_eq!(day.date(), target);
        assert_eq!(day.qualifier(), Qualifier::Day);
        assert_eq!(day.weekday(), target.weekday());
    }

    #[test]
    fn entry_shapes() {
        let source = date(5785, 7, 1);
        let target = source.add_days(30).unwrap();
        let day = RestrictedDay::new(source, RuleKind::Fixed31, target, Qualifier::Night);
        let single = RestrictedEntry::Single(day);
        assert!(!single.is_group());
        assert_eq!(single.as_single(), Some(&day));
        assert_eq!(single.days().len(), 1);

        let group = RestrictedEntry::Group {
            label: STABLE_GROUP_LABEL.to_string(),
            days: vec![day, day],
        };
        assert!(group.is_group());
        assert!(group.as_single().is_none());
        assert_eq!(group.days().len(), 2);
    }
}
