//! Property-based tests for selection filters

use coursesync::core::services::selected;
use proptest::prelude::*;

proptest! {
    /// An empty filter admits everything
    #[test]
    fn empty_filter_admits_all(values in prop::collection::vec("[a-z]{1,8}", 0..4)) {
        let values: Vec<&str> = values.iter().map(String::as_str).collect();
        prop_assert!(selected(&[], &values));
    }

    /// A non-empty filter admits exactly when it shares a value
    #[test]
    fn filter_admits_on_intersection(
        filter in prop::collection::vec("[a-z]{1,3}", 1..5),
        values in prop::collection::vec("[a-z]{1,3}", 1..4)
    ) {
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let shares = values.iter().any(|v| filter.contains(v));
        prop_assert_eq!(selected(&filter, &refs), shares);
    }

    /// Any value of the item is enough
    #[test]
    fn any_value_matches(name in "[A-Z][a-z]{1,8}", account in "[a-z]{1,8}") {
        let filter = vec![account.clone()];
        prop_assert!(selected(&filter, &[name.as_str(), account.as_str()]));
    }
}
