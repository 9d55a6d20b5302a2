//! Integration test: full event sequences through the rule engine.

use tahara_calendar::HebrewDate;
use tahara_rules::{
    EventRecord, Qualifier, RestrictedEntry, RuleError, RuleKind, RuleSet, STABLE_GROUP_LABEL,
    process_events,
};

fn event(y: i32, m: u8, d: u8, qualifier: Qualifier) -> EventRecord {
    EventRecord::new(HebrewDate::new(y, m, d).unwrap(), qualifier)
}

/// Four events whose intervals are 30, 31, 29.
fn four_events() -> Vec<EventRecord> {
    let first = HebrewDate::new(5785, 7, 1).unwrap();
    let second = first.add_days(29).unwrap();
    let third = second.add_days(30).unwrap();
    let fourth = third.add_days(28).unwrap();
    vec![
        EventRecord::new(first, Qualifier::Night),
        EventRecord::new(second, Qualifier::Day),
        EventRecord::new(third, Qualifier::Night),
        EventRecord::new(fourth, Qualifier::Day),
    ]
}

#[test]
fn two_day_events_29_days_inclusive() {
    let events = vec![
        event(5785, 7, 1, Qualifier::Day),
        event(5785, 7, 29, Qualifier::Day),
    ];
    let schedule = process_events(events, &RuleSet::new()).unwrap();

    assert_eq!(schedule.intervals(), &[29]);
    let second = &schedule.events()[1];
    assert_eq!(second.interval(), Some(29));

    let personal = second.find(RuleKind::PersonalInterval).unwrap();
    assert_eq!(personal.date(), second.date().add_days(28).unwrap());
    assert_eq!(personal.qualifier(), Qualifier::Day);

    // A single interval is never enough to form a group.
    assert!(second.stable_group().is_none());
}

#[test]
fn intervals_follow_inclusive_counting() {
    let schedule = process_events(four_events(), &RuleSet::new()).unwrap();
    assert_eq!(schedule.intervals(), &[30, 31, 29]);
    let intervals: Vec<_> = schedule.events().iter().map(|e| e.interval()).collect();
    assert_eq!(intervals, vec![None, Some(30), Some(31), Some(29)]);
}

#[test]
fn stable_group_on_last_event() {
    let schedule = process_events(four_events(), &RuleSet::new()).unwrap();
    let last = &schedule.events()[3];
    let group = last.stable_group().unwrap();

    let kinds: Vec<_> = group.iter().map(|d| d.rule()).collect();
    assert_eq!(
        kinds,
        vec![RuleKind::StableInterval(29), RuleKind::StableInterval(31)]
    );
    assert_eq!(group[0].date(), last.date().add_days(28).unwrap());
    assert_eq!(group[1].date(), last.date().add_days(30).unwrap());

    match last.restricted_days().last().unwrap() {
        RestrictedEntry::Group { label, .. } => assert_eq!(label, STABLE_GROUP_LABEL),
        other => panic!("expected group, got {other:?}"),
    }
}

#[test]
fn monthly_pattern_uses_source_month_length() {
    // 5785 is a complete year: Cheshvan and Kislev both have 30 days.
    let schedule = process_events(
        vec![
            event(5785, 8, 10, Qualifier::Day),
            event(5785, 9, 10, Qualifier::Day),
        ],
        &RuleSet::new(),
    )
    .unwrap();
    for e in schedule.events() {
        let monthly = e.find(RuleKind::MonthlyPattern).unwrap();
        let expected = e
            .date()
            .add_days(i64::from(e.date().month_length()))
            .unwrap();
        assert_eq!(monthly.date(), expected);
        assert_eq!(monthly.date().day(), 10);
    }
}

#[test]
fn night_and_day_adjustments_per_event() {
    let schedule = process_events(four_events(), &RuleSet::new()).unwrap();
    for e in schedule.events() {
        let or_zarua = e.find(RuleKind::LightSeed).unwrap();
        assert_eq!(or_zarua.qualifier(), e.qualifier().opposite());
        match e.qualifier() {
            Qualifier::Night => {
                assert_eq!(or_zarua.date(), e.date().add_days(28).unwrap());
                let cutoff = e.find(RuleKind::DualCutoff).unwrap();
                assert_eq!(cutoff.date(), e.date().add_days(29).unwrap());
                assert_eq!(cutoff.qualifier(), Qualifier::Day);
            }
            Qualifier::Day => {
                assert_eq!(or_zarua.date(), e.date().add_days(29).unwrap());
                assert!(e.find(RuleKind::DualCutoff).is_none());
            }
        }
    }
}

#[test]
fn first_event_has_no_interval_entries() {
    let schedule = process_events(four_events(), &RuleSet::new()).unwrap();
    let first = &schedule.events()[0];
    assert!(first.find(RuleKind::PersonalInterval).is_none());
    assert!(first.stable_group().is_none());
}

#[test]
fn later_events_do_not_change_earlier_output() {
    let all = process_events(four_events(), &RuleSet::new()).unwrap();
    let prefix = process_events(four_events()[..2].to_vec(), &RuleSet::new()).unwrap();
    assert_eq!(&all.events()[..2], prefix.events());
}

#[test]
fn rerun_is_idempotent() {
    let first = process_events(four_events(), &RuleSet::new()).unwrap();
    let second = process_events(first.clone().into_events(), &RuleSet::new()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn disabled_rules_are_absent_everywhere() {
    let rules = RuleSet::new()
        .with_or_zarua(false)
        .with_kartyupleity(false)
        .with_personal_interval(false);
    let schedule = process_events(four_events(), &rules).unwrap();
    for e in schedule.events() {
        assert!(e.find(RuleKind::LightSeed).is_none());
        assert!(e.find(RuleKind::DualCutoff).is_none());
        assert!(e.find(RuleKind::PersonalInterval).is_none());
        assert!(e.find(RuleKind::Fixed30).is_some());
    }
}

#[test]
fn out_of_order_input_halts() {
    let events = vec![
        event(5785, 7, 10, Qualifier::Day),
        event(5785, 7, 1, Qualifier::Night),
    ];
    let err = process_events(events, &RuleSet::new()).unwrap_err();
    match err {
        RuleError::OutOfOrder {
            index,
            previous,
            current,
        } => {
            assert_eq!(index, 1);
            assert_eq!(previous.day(), 10);
            assert_eq!(current.day(), 1);
        }
        other => panic!("expected OutOfOrder, got {other:?}"),
    }
}

#[test]
fn crosses_year_boundary() {
    // 29 Elul 5784 -> 1 Tishrei 5785 is two days inclusive.
    let schedule = process_events(
        vec![
            event(5784, 6, 29, Qualifier::Day),
            event(5785, 7, 1, Qualifier::Day),
        ],
        &RuleSet::new(),
    )
    .unwrap();
    assert_eq!(schedule.intervals(), &[2]);
}
