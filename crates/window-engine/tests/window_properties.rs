//! Property tests for observation-window computation.

use chrono::{Datelike, Days, Months, NaiveDate, Timelike};
use proptest::prelude::*;
use window_engine::{compute_window, IntervalLabel, StepRule, WindowError};

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // Any day between 1900-01-01 and roughly 2199-12-31.
    (0u64..109_500).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1900, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

fn arb_label() -> impl Strategy<Value = IntervalLabel> {
    prop::sample::select(IntervalLabel::ALL.to_vec())
}

fn hour_str(hour: u32) -> String {
    format!("{hour:02}")
}

proptest! {
    #[test]
    fn sub_day_hours_wrap_modulo_24(
        date in arb_date(),
        hour in 0u32..24,
        step in prop::sample::select(vec![1u32, 3, 6, 12]),
    ) {
        let label = format!("{step} hour{}", if step == 1 { "" } else { "s" });
        let w = compute_window(&label, date, &hour_str(hour)).unwrap();

        let sum = hour + step;
        if sum < 24 {
            prop_assert_eq!(w.end_date, date);
            prop_assert_eq!(w.end_time.hour(), sum);
        } else {
            prop_assert_eq!(w.end_date, date.succ_opt().unwrap());
            prop_assert_eq!(w.end_time.hour(), sum - 24);
        }
        prop_assert_eq!(w.end_time.minute(), 0);
        prop_assert_eq!(w.end_time.second(), 0);
    }

    #[test]
    fn twenty_four_hours_is_next_day_same_hour(date in arb_date(), hour in 0u32..24) {
        let w = compute_window("24 hours", date, &hour_str(hour)).unwrap();
        prop_assert_eq!(w.end_date, date.succ_opt().unwrap());
        prop_assert_eq!(w.end_time, w.start_time);
    }

    #[test]
    fn day_steps_keep_time(
        date in arb_date(),
        hour in 0u32..24,
        minute in 0u32..60,
        label in prop::sample::select(vec![
            ("1 day", 1u64), ("2 days", 2), ("3 days", 3), ("4 days", 4),
            ("5 days", 5), ("6 days", 6), ("1 week", 7),
        ]),
    ) {
        let time = format!("{hour:02}:{minute:02}");
        let w = compute_window(label.0, date, &time).unwrap();
        prop_assert_eq!(w.end_date, date.checked_add_days(Days::new(label.1)).unwrap());
        prop_assert_eq!(w.end_time, w.start_time);
    }

    #[test]
    fn month_steps_follow_calendar(
        date in arb_date(),
        label in prop::sample::select(vec![
            ("1 month", 1u32), ("3 months", 3), ("6 months", 6), ("12 months", 12),
        ]),
    ) {
        let w = compute_window(label.0, date, "08").unwrap();
        prop_assert_eq!(w.end_date, date.checked_add_months(Months::new(label.1)).unwrap());
        prop_assert!(w.end_date.day() <= date.day());
        prop_assert_eq!(w.end_time, w.start_time);
    }

    #[test]
    fn end_is_strictly_after_start(
        date in arb_date(),
        label in arb_label(),
        hour in 0u32..24,
        minute in 0u32..60,
        second in 0u32..60,
    ) {
        let time = format!("{hour:02}:{minute:02}:{second:02}");
        let w = compute_window(label.as_str(), date, &time).unwrap();
        prop_assert!(w.end() > w.start(), "{} not after {}", w.end(), w.start());
        if let StepRule::Hours(n) = label.step() {
            prop_assert!(w.duration() <= chrono::Duration::hours(i64::from(n)));
        }
    }

    #[test]
    fn computation_is_idempotent(date in arb_date(), label in arb_label(), hour in 0u32..24) {
        let a = compute_window(label.as_str(), date, &hour_str(hour));
        let b = compute_window(label.as_str(), date, &hour_str(hour));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn unknown_labels_are_rejected(text in "[a-z0-9 ]{0,12}", date in arb_date()) {
        prop_assume!(text.parse::<IntervalLabel>().is_err());
        let err = compute_window(&text, date, "00").unwrap_err();
        prop_assert!(matches!(err, WindowError::InvalidIntervalLabel(_)));
    }

    #[test]
    fn out_of_range_hours_are_rejected(date in arb_date(), hour in 24u32..100) {
        let err = compute_window("1 day", date, &hour_str(hour)).unwrap_err();
        prop_assert!(matches!(err, WindowError::InvalidTimeOfDay(_)));
    }
}
