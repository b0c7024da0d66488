//! Token loader
//!
//! Parses one source directory's relaxed-JSON data file into a [`Token`]

#![allow(clippy::result_large_err)]

use serde_json::Value;
use std::fs;
use std::path::Path;

use tokenlist_core::errors::ExError;
use tokenlist_core::Token;

use crate::errors::{io_error, parse_error, Result};
use crate::source::asset::AssetResolver;

/// Parse token data text; `source` is only used to name the file in errors.
///
/// A resolved `logo_uri` replaces any `logoURI` present in the text.
pub fn parse_token(source: &Path, text: &str, logo_uri: Option<String>) -> Result<Token> {
    let value: Value = json5::from_str(text).map_err(|e| parse_error("load_token", source, e))?;

    let token = Token::from_value(value)
        .map_err(|e| ExError::from(e).with_op("load_token").with_path(source))?;

    Ok(match logo_uri {
        Some(uri) => token.with_logo_uri(uri),
        None => token,
    })
}

/// Load the token held in `entry_dir`.
///
/// Reads `<entry_dir>/<data_file>` and asks `resolver` for the logo URL.
///
/// # Errors
///
/// - `Io`: the data file is missing or unreadable
/// - `Parse`: the data file is not a relaxed-JSON object
/// - `MissingField`: `symbol` or `address` is absent
pub fn load_token(entry_dir: &Path, data_file: &str, resolver: &dyn AssetResolver) -> Result<Token> {
    let path = entry_dir.join(data_file);
    let text = fs::read_to_string(&path).map_err(|e| io_error("load_token", &path, e))?;
    let logo_uri = resolver.resolve_logo(entry_dir)?;
    parse_token(&path, &text, logo_uri)
}
