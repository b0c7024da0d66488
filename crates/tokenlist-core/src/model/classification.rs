use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TokenListError;

/// Severity of the change between two token collections.
///
/// Variants are declared in ascending severity so the derived `Ord`
/// gives `None < Patch < Minor < Major`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Both collections are pairwise identical
    None,
    /// Metadata of an existing token changed
    Patch,
    /// A token was added
    Minor,
    /// A token was removed or changed address
    Major,
}

impl Classification {
    /// All classifications in ascending severity
    pub const ALL: [Classification; 4] = [
        Classification::None,
        Classification::Patch,
        Classification::Minor,
        Classification::Major,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::None => "none",
            Classification::Patch => "patch",
            Classification::Minor => "minor",
            Classification::Major => "major",
        }
    }

    /// True for every classification that requires a new manifest
    pub fn is_change(&self) -> bool {
        *self != Classification::None
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = TokenListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Classification::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| TokenListError::UnknownClassification {
                value: s.to_string(),
            })
    }
}
