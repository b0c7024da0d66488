//! Token List Store - filesystem side of the token list generator
//!
//! Provides:
//! - Source entry enumeration and token loading (relaxed JSON + logo discovery)
//! - Reading the previously published manifest
//! - Atomic, diff-friendly writing of the new manifest

pub mod errors;
pub mod fs;
pub mod manifest;
pub mod source;

// Re-export key types
pub use errors::Result;
pub use manifest::{read_prior_manifest, write_manifest, PriorManifest};
pub use source::{list_source_entries, load_all_tokens, AssetResolver, FsAssetResolver};
