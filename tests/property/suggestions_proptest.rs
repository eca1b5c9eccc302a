//! Property-based tests for city suggestions

use proptest::prelude::*;

use globetrotter::shared::suggestions_for;

proptest! {
    #[test]
    fn test_suggestions_ignore_case_and_padding(
        city in prop::sample::select(vec!["paris", "tokyo", "london", "rome", "new york", "bali"]),
        upper in prop::collection::vec(any::<bool>(), 8),
        left in "[ \t]{0,3}",
        right in "[ \t]{0,3}",
    ) {
        let respelled: String = city
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
            .collect();
        let query = format!("{}{}{}", left, respelled, right);

        prop_assert_eq!(suggestions_for(&query), suggestions_for(city));
    }

    #[test]
    fn test_suggestions_never_empty(city in ".{0,40}") {
        prop_assert_eq!(suggestions_for(&city).len(), 3);
    }
}
