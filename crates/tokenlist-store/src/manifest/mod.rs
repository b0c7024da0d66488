//! Published manifest persistence
//!
//! Reading the previous manifest (relaxed JSON, tolerant of corruption) and
//! writing the new one (strict JSON, atomic).

pub mod reader;
pub mod writer;

pub use reader::{read_prior_manifest, PriorManifest};
pub use writer::{render_manifest, write_manifest};
