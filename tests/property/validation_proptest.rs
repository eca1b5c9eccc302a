//! Property-based tests for request payload validation

use proptest::prelude::*;

use globetrotter::shared::{NewActivity, NewStop, NewTrip, MAX_ACTIVITY_COST};

proptest! {
    #[test]
    fn test_trip_dates_must_increase(start in 0i64..1000, span in -30i64..30) {
        let start_date = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Duration::days(start);
        let request = NewTrip {
            name: "Dates".to_string(),
            start_date,
            end_date: start_date + chrono::Duration::days(span),
        };

        prop_assert_eq!(request.validate().is_ok(), span > 0);
    }

    #[test]
    fn test_stop_duration_must_be_positive(days in -100i64..100) {
        let request = NewStop { city: "Oslo".to_string(), duration_days: days };
        prop_assert_eq!(request.validate().is_ok(), days > 0);
    }

    #[test]
    fn test_activity_cost_within_bounds(cost in prop::num::f64::ANY) {
        let request = NewActivity { name: "Anything".to_string(), cost };
        let accepted = cost.is_finite() && (0.0..=MAX_ACTIVITY_COST).contains(&cost);
        prop_assert_eq!(request.validate().is_ok(), accepted);
    }
}
