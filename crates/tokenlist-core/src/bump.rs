//! Semantic version bumping.
//!
//! The classification produced by the differ selects which component of the
//! list version moves; lower-order components reset to zero.

use crate::model::{Classification, Version};

/// Apply a change classification to the current version.
///
/// - `Major` → `{major + 1, 0, 0}`
/// - `Minor` → `{major, minor + 1, 0}`
/// - `Patch` → `{major, minor, patch + 1}`
/// - `None`  → unchanged
///
/// Text coming from outside (logs, CLI) must go through
/// `Classification::from_str`, which rejects unknown names with
/// `InvalidState`; once typed, every value is handled here.
pub fn bump(current: Version, classification: Classification) -> Version {
    match classification {
        Classification::Major => Version::new(current.major + 1, 0, 0),
        Classification::Minor => Version::new(current.major, current.minor + 1, 0),
        Classification::Patch => Version::new(current.major, current.minor, current.patch + 1),
        Classification::None => current,
    }
}
