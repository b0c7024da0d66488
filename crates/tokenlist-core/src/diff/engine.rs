//! Change cascade over two token collections.
//!
//! The core entry point is [`compare`], which accepts the old and new token
//! collections and produces a [`ChangeReport`].

#![allow(clippy::result_large_err)]

use sha2::{Digest as _, Sha256};
use std::collections::{BTreeMap, BTreeSet};

use crate::diff::model::{ChangeReport, ChangeRule, DiffIdentity};
use crate::errors::{ExError, ExErrorKind, TokenListError};
use crate::model::{Classification, Token};

/// Tokens keyed by symbol. BTreeMap keeps reported symbols sorted.
type TokenIndex<'a> = BTreeMap<&'a str, &'a Token>;

/// A check returns the symbols it fired on; empty means it did not fire.
type RuleCheck = fn(&TokenIndex<'_>, &TokenIndex<'_>) -> Vec<String>;

struct Rule {
    rule: ChangeRule,
    classification: Classification,
    check: RuleCheck,
}

/// Evaluated top to bottom; the first rule that fires decides the result.
const CASCADE: [Rule; 4] = [
    Rule {
        rule: ChangeRule::Removed,
        classification: Classification::Major,
        check: removed_symbols,
    },
    Rule {
        rule: ChangeRule::AddressChanged,
        classification: Classification::Major,
        check: address_changed_symbols,
    },
    Rule {
        rule: ChangeRule::Added,
        classification: Classification::Minor,
        check: added_symbols,
    },
    Rule {
        rule: ChangeRule::MetadataChanged,
        classification: Classification::Patch,
        check: metadata_changed_symbols,
    },
];

fn index_tokens(tokens: &[Token]) -> Result<TokenIndex<'_>, TokenListError> {
    let mut index = TokenIndex::new();
    for token in tokens {
        if index.insert(token.symbol(), token).is_some() {
            return Err(TokenListError::DuplicateSymbol {
                symbol: token.symbol().to_string(),
            });
        }
    }
    Ok(index)
}

fn removed_symbols(old: &TokenIndex<'_>, new: &TokenIndex<'_>) -> Vec<String> {
    old.keys()
        .filter(|symbol| !new.contains_key(*symbol))
        .map(|symbol| symbol.to_string())
        .collect()
}

fn address_changed_symbols(old: &TokenIndex<'_>, new: &TokenIndex<'_>) -> Vec<String> {
    old.iter()
        .filter_map(|(symbol, old_token)| {
            new.get(symbol)
                .filter(|new_token| new_token.address() != old_token.address())
                .map(|_| symbol.to_string())
        })
        .collect()
}

fn added_symbols(old: &TokenIndex<'_>, new: &TokenIndex<'_>) -> Vec<String> {
    removed_symbols(new, old)
}

fn metadata_changed_symbols(old: &TokenIndex<'_>, new: &TokenIndex<'_>) -> Vec<String> {
    old.iter()
        .filter_map(|(symbol, old_token)| {
            new.get(symbol)
                .filter(|new_token| **new_token != *old_token)
                .map(|_| symbol.to_string())
        })
        .collect()
}

/// Field names whose values differ between two records, sorted.
fn changed_fields(old: &Token, new: &Token) -> Vec<String> {
    let keys: BTreeSet<&String> = old.fields().keys().chain(new.fields().keys()).collect();
    keys.into_iter()
        .filter(|key| old.get(key) != new.get(key))
        .cloned()
        .collect()
}

fn describe(
    rule: ChangeRule,
    symbols: &[String],
    old: &TokenIndex<'_>,
    new: &TokenIndex<'_>,
) -> String {
    match rule {
        ChangeRule::Removed => format!("Removed token(s): {}", symbols.join(", ")),
        ChangeRule::Added => format!("Added token(s): {}", symbols.join(", ")),
        ChangeRule::AddressChanged => {
            let items: Vec<String> = symbols
                .iter()
                .filter_map(|s| {
                    let (o, n) = (old.get(s.as_str())?, new.get(s.as_str())?);
                    Some(format!("{} ({} -> {})", s, o.address(), n.address()))
                })
                .collect();
            format!("Address changed for: {}", items.join(", "))
        }
        ChangeRule::MetadataChanged => {
            let items: Vec<String> = symbols
                .iter()
                .filter_map(|s| {
                    let (o, n) = (old.get(s.as_str())?, new.get(s.as_str())?);
                    Some(format!("{} [{}]", s, changed_fields(o, n).join(", ")))
                })
                .collect();
            format!("Metadata changed for: {}", items.join(", "))
        }
    }
}

/// Digest of a token collection: SHA-256 over its canonical JSON, hex encoded.
///
/// Record keys serialize in sorted order, so the digest depends only on the
/// records and their order.
///
/// # Errors
///
/// - `Serialization`: a record could not be encoded (should never occur)
pub fn tokens_digest(tokens: &[Token]) -> Result<String, ExError> {
    let canonical = serde_json::to_string(tokens).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("tokens_digest")
            .with_message(format!("failed to encode tokens: {}", e))
    })?;
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Classify the change from `old` to `new`.
///
/// Checks, first match wins:
///
/// 1. a symbol was removed → `Major`
/// 2. a shared symbol changed address → `Major`
/// 3. a symbol was added → `Minor`
/// 4. a shared symbol's record differs otherwise → `Patch`
/// 5. otherwise → `None`
///
/// When several symbols trip the winning check, all of them are listed.
///
/// # Errors
///
/// - `DuplicateSymbol`: either collection repeats a symbol
/// - `Serialization`: digest computation failed (should never occur)
pub fn compare(old: &[Token], new: &[Token]) -> Result<ChangeReport, ExError> {
    let old_index =
        index_tokens(old).map_err(|e| ExError::from(e).with_op("compare_tokens"))?;
    let new_index =
        index_tokens(new).map_err(|e| ExError::from(e).with_op("compare_tokens"))?;

    let identity = DiffIdentity {
        old_tokens_digest: tokens_digest(old)?,
        new_tokens_digest: tokens_digest(new)?,
    };

    // Fast path: byte-identical collections
    if identity.old_tokens_digest == identity.new_tokens_digest {
        return Ok(unchanged(identity));
    }

    for Rule {
        rule,
        classification,
        check,
    } in &CASCADE
    {
        let symbols = check(&old_index, &new_index);
        if !symbols.is_empty() {
            return Ok(ChangeReport {
                identity,
                classification: *classification,
                rule: Some(*rule),
                description: describe(*rule, &symbols, &old_index, &new_index),
                symbols,
            });
        }
    }

    // Same records in a different order
    Ok(unchanged(identity))
}

fn unchanged(identity: DiffIdentity) -> ChangeReport {
    ChangeReport {
        identity,
        classification: Classification::None,
        rule: None,
        description: "No changes detected".to_string(),
        symbols: Vec::new(),
    }
}
