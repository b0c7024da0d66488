//! Version bump rules and monotonicity.

use proptest::prelude::*;
use tokenlist_core::errors::{ExError, ExErrorKind};
use tokenlist_core::{bump, Classification, Version};

fn classification() -> impl Strategy<Value = Classification> {
    prop_oneof![
        Just(Classification::None),
        Just(Classification::Patch),
        Just(Classification::Minor),
        Just(Classification::Major),
    ]
}

fn version() -> impl Strategy<Value = Version> {
    (0u64..1000, 0u64..1000, 0u64..1000).prop_map(|(a, b, c)| Version::new(a, b, c))
}

#[test]
fn test_bump_table() {
    let v = Version::new(1, 2, 3);
    assert_eq!(bump(v, Classification::Major), Version::new(2, 0, 0));
    assert_eq!(bump(v, Classification::Minor), Version::new(1, 3, 0));
    assert_eq!(bump(v, Classification::Patch), Version::new(1, 2, 4));
    assert_eq!(bump(v, Classification::None), Version::new(1, 2, 3));
}

#[test]
fn test_unknown_classification_is_invalid_state() {
    let err: ExError = "huge".parse::<Classification>().unwrap_err().into();
    assert_eq!(err.kind(), ExErrorKind::InvalidState);
    assert_eq!(err.code(), "ERR_INVALID_STATE");
}

proptest! {
    #[test]
    fn prop_bump_never_decreases(v in version(), c in classification()) {
        prop_assert!(bump(v, c) >= v);
    }

    #[test]
    fn prop_exactly_one_component_increases(v in version(), c in classification()) {
        let next = bump(v, c);
        let increased = [
            next.major > v.major,
            next.minor > v.minor,
            next.patch > v.patch,
        ]
        .iter()
        .filter(|b| **b)
        .count();

        if c == Classification::None {
            prop_assert_eq!(next, v);
        } else {
            prop_assert_eq!(increased, 1);
        }
    }

    #[test]
    fn prop_lower_components_reset(v in version()) {
        let major = bump(v, Classification::Major);
        prop_assert_eq!((major.minor, major.patch), (0, 0));

        let minor = bump(v, Classification::Minor);
        prop_assert_eq!(minor.major, v.major);
        prop_assert_eq!(minor.patch, 0);
    }
}
