//! Diff output types.

use serde::{Deserialize, Serialize};

use crate::model::Classification;

/// Result of comparing two token collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangeReport {
    /// Digests of both sides
    pub identity: DiffIdentity,
    /// Severity decided by the first matching rule
    pub classification: Classification,
    /// The rule that fired, or `None` when nothing changed
    pub rule: Option<ChangeRule>,
    /// Human-readable one-line description
    pub description: String,
    /// Symbols that triggered the winning rule, sorted
    pub symbols: Vec<String>,
}

/// Content digests of the old and new token collections.
///
/// SHA-256 over the canonical JSON of each collection, hex encoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiffIdentity {
    pub old_tokens_digest: String,
    pub new_tokens_digest: String,
}

/// The individual checks of the change cascade, in evaluation order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChangeRule {
    /// A symbol present in the old set is absent from the new one
    Removed,
    /// A shared symbol points at a different address
    AddressChanged,
    /// A symbol present in the new set is absent from the old one
    Added,
    /// A shared symbol's record differs in any other field
    MetadataChanged,
}
