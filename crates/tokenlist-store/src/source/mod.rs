//! Token sources
//!
//! Provides:
//! - Asset resolution (logo discovery) behind the `AssetResolver` trait
//! - Loading one token record from its source directory
//! - Enumerating and aggregating all source directories in order

pub mod aggregator;
pub mod asset;
pub mod loader;

pub use aggregator::{list_source_entries, load_all_tokens};
pub use asset::{AssetResolver, FsAssetResolver};
pub use loader::{load_token, parse_token};
