use chrono::NaiveDate;
use tahara_calendar::{CalendarError, HebrewDate, MAX_YEAR, days_in_year};

fn greg(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn known_anchor_dates() {
    let cases: &[((i32, u8, u8), (i32, u32, u32))] = &[
        ((5785, 7, 1), (2024, 10, 3)),   // Rosh Hashanah 5785
        ((5784, 7, 1), (2023, 9, 16)),   // Rosh Hashanah 5784
        ((5784, 1, 15), (2024, 4, 23)),  // Pesach 5784
        ((5785, 12, 8), (2025, 3, 8)),   // 8 Adar 5785
        ((5786, 7, 1), (2025, 9, 23)),   // Rosh Hashanah 5786
        ((5784, 13, 14), (2024, 3, 24)), // Purim 5784 (Adar II)
    ];
    for &((y, m, d), (gy, gm, gd)) in cases {
        let hebrew = HebrewDate::new(y, m, d).unwrap();
        let expected = greg(gy, gm, gd);
        assert_eq!(
            hebrew.to_gregorian().unwrap(),
            expected,
            "{d}/{m}/{y} should be {expected}"
        );
        assert_eq!(
            HebrewDate::from_gregorian(expected).unwrap(),
            hebrew,
            "{expected} should be {d}/{m}/{y}"
        );
    }
}

#[test]
fn every_day_of_a_leap_year_round_trips() {
    let year = 5784;
    let start = HebrewDate::new(year, 7, 1).unwrap();
    for offset in 0..i64::from(days_in_year(year).unwrap()) {
        let date = start.add_days(offset).unwrap();
        let rebuilt = HebrewDate::new(date.year(), date.month(), date.day()).unwrap();
        assert_eq!(rebuilt, date, "offset {offset}");
        assert_eq!(
            HebrewDate::from_rata_die(date.rata_die()).unwrap(),
            date,
            "offset {offset}"
        );
    }
}

#[test]
fn consecutive_days_are_consecutive_rata_die() {
    let mut date = HebrewDate::new(5780, 7, 1).unwrap();
    for _ in 0..2000 {
        let next = date.add_days(1).unwrap();
        assert_eq!(next.rata_die(), date.rata_die() + 1);
        assert!(next > date);
        date = next;
    }
}

#[test]
fn invalid_dates_rejected() {
    assert!(matches!(
        HebrewDate::new(5785, 8, 31),
        Err(CalendarError::InvalidDay { max_day: 30, .. })
    ));
    assert!(matches!(
        HebrewDate::new(5784, 9, 30),
        Err(CalendarError::InvalidDay { max_day: 29, .. })
    ));
    assert!(matches!(
        HebrewDate::new(5785, 13, 1),
        Err(CalendarError::InvalidMonth { max_month: 12, .. })
    ));
    assert!(matches!(
        HebrewDate::new(0, 7, 1),
        Err(CalendarError::InvalidYear { year: 0 })
    ));
}

#[test]
fn supported_range_ends_at_max_year() {
    let last = HebrewDate::new(MAX_YEAR, 6, 29).unwrap();
    assert!(last.to_gregorian().is_ok());
    assert!(matches!(
        HebrewDate::new(MAX_YEAR + 1, 7, 1),
        Err(CalendarError::InvalidYear { .. })
    ));
    assert!(matches!(
        HebrewDate::new(i32::MAX, 7, 1),
        Err(CalendarError::InvalidYear { year: i32::MAX })
    ));
}
