//! Prior manifest reader

#![allow(clippy::result_large_err)]

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokenlist_core::TokenListManifest;

use crate::errors::{io_error, Result};

/// What was found at the manifest path before this run.
#[derive(Debug, Clone, PartialEq)]
pub enum PriorManifest {
    /// No file: the run is a first publish
    Absent,
    /// A file exists but does not parse as a token list.
    ///
    /// Policy: the run proceeds as a first publish and the file is
    /// overwritten. The reason is kept so callers can report it.
    Unparseable { path: PathBuf, reason: String },
    /// A valid previous manifest
    Found(TokenListManifest),
}

impl PriorManifest {
    /// The previous manifest, if one was usable
    pub fn manifest(&self) -> Option<&TokenListManifest> {
        match self {
            PriorManifest::Found(manifest) => Some(manifest),
            _ => None,
        }
    }
}

/// Read the manifest at `path`.
///
/// # Errors
///
/// - `Io`: the file exists but cannot be read. A missing file is not an
///   error (`Absent`), and neither is one that fails to parse (`Unparseable`).
pub fn read_prior_manifest(path: &Path) -> Result<PriorManifest> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(PriorManifest::Absent),
        Err(e) => return Err(io_error("read_prior_manifest", path, e)),
    };

    match json5::from_str::<TokenListManifest>(&text) {
        Ok(manifest) => Ok(PriorManifest::Found(manifest)),
        Err(e) => {
            tracing::warn!(
                component = module_path!(),
                op = "read_prior_manifest",
                path = %path.display(),
                reason = %e,
                "existing manifest is unparseable; treating as absent"
            );
            Ok(PriorManifest::Unparseable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    }
}
