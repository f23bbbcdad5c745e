//! Property-based tests for hostkit using proptest.

use std::cmp::Ordering;

use hostkit::{compare_versions, slugify};
use proptest::prelude::*;

proptest! {
    /// Slugs only ever contain lowercase ASCII letters, digits and single dashes.
    #[test]
    fn slug_alphabet(input in ".{0,60}") {
        let slug = slugify(&input);
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!slug.contains("--"));
    }

    /// Slugifying a slug changes nothing.
    #[test]
    fn slug_is_stable(input in "[a-zA-Z0-9 _/-]{0,40}") {
        let once = slugify(&input);
        prop_assert_eq!(slugify(&once), once.clone());
    }

    /// Dotted numeric versions order like their component tuples.
    #[test]
    fn versions_order_numerically(
        a in (0u32..100, 0u32..100, 0u32..100),
        b in (0u32..100, 0u32..100, 0u32..100),
    ) {
        let left = format!("{}.{}.{}", a.0, a.1, a.2);
        let right = format!("{}.{}.{}", b.0, b.1, b.2);
        prop_assert_eq!(compare_versions(&left, &right), a.cmp(&b));
    }

    /// Swapping the arguments reverses the ordering.
    #[test]
    fn version_comparison_is_antisymmetric(a in "[0-9a-z.]{0,12}", b in "[0-9a-z.]{0,12}") {
        prop_assert_eq!(compare_versions(&a, &b), compare_versions(&b, &a).reverse());
        prop_assert_eq!(compare_versions(&a, &a), Ordering::Equal);
    }
}
