//! Token List Core - pure domain kernel of the token list generator
//!
//! This crate provides the data structures and decision logic for
//! publishing a versioned token list, including:
//! - Token, Version and Classification models
//! - The ordered change cascade comparing two token collections
//! - Semantic version bumping driven by the classification
//! - Token list manifest assembly
//! - The structured error and logging facilities shared by all crates
//!
//! Nothing in this crate touches the filesystem; loading and writing live in
//! `tokenlist-store`.

pub mod bump;
pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod manifest;
pub mod model;

// Re-export commonly used types
pub use bump::bump;
pub use config::TokenListConfig;
pub use diff::{compare, ChangeReport};
pub use errors::{ExError, ExErrorKind, Result, TokenListError};
pub use manifest::{build_manifest, current_timestamp, TokenListManifest};
pub use model::{Classification, Token, Version};

// Schema constants referenced by the exported logging macros
#[doc(hidden)]
pub use tokenlist_core_types::schema as __schema;
