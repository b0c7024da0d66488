//! Token list manifest schema and assembly.
//!
//! ## Responsibilities
//!
//! - Define the published manifest schema
//! - Assemble a manifest from tokens, version and timestamp
//!
//! ## Non-Responsibilities
//!
//! - Reading and writing the file (handled by `tokenlist-store`)
//! - Deciding the version (handled by `diff` and `bump`)

pub mod builder;

pub use builder::{build_manifest, current_timestamp, TokenListManifest};
