//! Token set diff engine.
//!
//! Compares the previously published token collection with a freshly
//! aggregated one and classifies the change for version bumping.
//!
//! ## Entry point
//!
//! ```
//! use serde_json::json;
//! use tokenlist_core::diff::compare;
//! use tokenlist_core::{Classification, Token};
//!
//! let old = vec![Token::from_value(json!({"symbol": "A", "address": "0x1"})).unwrap()];
//! let report = compare(&old, &[]).unwrap();
//! assert_eq!(report.classification, Classification::Major);
//! ```
//!
//! ## Guarantees
//!
//! - **First match wins**: checks run in a fixed order (removal, address
//!   change, addition, metadata edit) and the first one that fires decides
//!   the classification.
//! - **Determinism**: symbols in reports are sorted, so identical inputs give
//!   identical reports.
//! - **Purity**: no I/O, no logging, no mutation of the inputs.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{compare, tokens_digest};
pub use human_summary::render_human_summary;
pub use model::{ChangeReport, ChangeRule, DiffIdentity};
