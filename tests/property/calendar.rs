// tests/property/calendar.rs

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use workplan::calendar::{
    compute_end_date, end_of_span, is_working_day, working_days_in_span,
};
use workplan::errors::WorkplanError;

// Any day from 2000-01-01 over roughly the following century.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..36_500).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Days::new(offset)
    })
}

proptest! {
    #[test]
    fn end_date_is_working_day_with_exact_count(start in date_strategy(), duration in 0i64..120) {
        let end = compute_end_date(start, duration).unwrap();

        if duration == 0 {
            prop_assert_eq!(end, start);
        } else {
            prop_assert!(is_working_day(end));
            prop_assert!(end > start);
            // Exactly `duration` working days in (start, end].
            let after_start = start.succ_opt().unwrap();
            prop_assert_eq!(working_days_in_span(after_start, end), duration);
        }
    }

    #[test]
    fn negative_durations_are_rejected(start in date_strategy(), duration in -500i64..0) {
        let is_invalid = matches!(
            compute_end_date(start, duration),
            Err(WorkplanError::InvalidDuration(d)) if d == duration
        );
        prop_assert!(is_invalid);
    }

    #[test]
    fn end_of_span_inverts_span_count(start in date_strategy(), days in 1i64..60) {
        let end = end_of_span(start, days).unwrap();
        prop_assert!(end >= start);
        prop_assert_eq!(working_days_in_span(start, end), days);
        prop_assert!(is_working_day(end));
    }
}
