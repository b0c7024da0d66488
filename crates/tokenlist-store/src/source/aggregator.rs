//! Source aggregation
//!
//! Enumerates token directories in name order and loads them all, failing
//! on the first bad entry.

#![allow(clippy::result_large_err)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tokenlist_core::errors::ExError;
use tokenlist_core::model::ensure_unique_symbols;
use tokenlist_core::{log_op_end, log_op_error, log_op_start, Token};

use crate::errors::{io_error, not_found, Result};
use crate::source::asset::AssetResolver;
use crate::source::loader::load_token;

/// List the token directories under `data_dir`, sorted by directory name.
///
/// Files and other non-directory entries are ignored.
///
/// # Errors
///
/// - `NotFound`: `data_dir` does not exist or is not a directory
/// - `Io`: `data_dir` cannot be listed
pub fn list_source_entries(data_dir: &Path) -> Result<Vec<PathBuf>> {
    if !data_dir.is_dir() {
        return Err(not_found(
            "list_source_entries",
            data_dir,
            "Data directory",
        ));
    }

    let listing = fs::read_dir(data_dir)
        .map_err(|e| io_error("list_source_entries", data_dir, e))?
        .map(|entry| entry.map(|e| e.path()));

    token_directories(data_dir, listing)
}

/// Keep the directories of a raw listing, sorted by name. An entry that
/// could not be read fails the listing instead of silently dropping a token.
fn token_directories(
    data_dir: &Path,
    listing: impl IntoIterator<Item = io::Result<PathBuf>>,
) -> Result<Vec<PathBuf>> {
    let mut entries = listing
        .into_iter()
        .map(|entry| entry.map_err(|e| io_error("list_source_entries", data_dir, e)))
        .collect::<Result<Vec<PathBuf>>>()?;

    entries.retain(|p| p.is_dir());
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

/// Load every entry in order.
///
/// The first failure aborts the aggregation and is returned unchanged; no
/// partial collection is produced. An empty `entries` slice yields an empty
/// collection.
///
/// # Errors
///
/// - any error of [`load_token`]
/// - `DuplicateSymbol`: two entries declare the same symbol
pub fn load_all_tokens(
    entries: &[PathBuf],
    data_file: &str,
    resolver: &dyn AssetResolver,
) -> Result<Vec<Token>> {
    log_op_start!("load_all_tokens", entry_count = entries.len());
    let start = std::time::Instant::now();

    let result = load_all_tokens_impl(entries, data_file, resolver).map_err(|e| {
        log_op_error!(
            "load_all_tokens",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "load_all_tokens",
        duration_ms = start.elapsed().as_millis() as u64,
        token_count = result.len()
    );

    Ok(result)
}

fn load_all_tokens_impl(
    entries: &[PathBuf],
    data_file: &str,
    resolver: &dyn AssetResolver,
) -> Result<Vec<Token>> {
    let tokens = entries
        .iter()
        .map(|entry| load_token(entry, data_file, resolver))
        .collect::<Result<Vec<Token>>>()?;

    ensure_unique_symbols(&tokens).map_err(|e| ExError::from(e).with_op("load_all_tokens"))?;

    Ok(tokens)
}
