//! Manifest writer
//!
//! Output is plain JSON (quoted keys, no trailing commas) indented by four
//! spaces, so the file is also valid JSON5 and diffs cleanly between runs.
//!
//! U+2028 and U+2029 are legal raw in JSON strings but the JSON5 reader
//! rejects them there, so they are always written as `\u` escapes.

#![allow(clippy::result_large_err)]

use serde::Serialize;
use std::path::Path;

use tokenlist_core::{log_op_end, log_op_error, log_op_start, TokenListManifest};

use crate::errors::{serialization_error, Result};
use crate::fs::atomic_write;

const INDENT: &[u8] = b"    ";

/// Render a manifest exactly as it is written to disk
pub fn render_manifest(manifest: &TokenListManifest) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    manifest
        .serialize(&mut serializer)
        .map_err(|e| serialization_error("render_manifest", e))?;
    let text = String::from_utf8(buf).map_err(|e| serialization_error("render_manifest", e))?;
    Ok(escape_line_separators(text))
}

/// Both characters can only appear inside string literals of rendered JSON,
/// where the escape decodes to the same value.
fn escape_line_separators(text: String) -> String {
    if !text.contains(|c| c == '\u{2028}' || c == '\u{2029}') {
        return text;
    }
    text.replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

/// Write `manifest` to `path`, all-or-nothing.
///
/// # Errors
///
/// - `Serialization`: the manifest cannot be rendered
/// - `Io`: the file cannot be written; the previous content is kept
pub fn write_manifest(path: &Path, manifest: &TokenListManifest) -> Result<()> {
    log_op_start!(
        "write_manifest",
        path = %path.display(),
        token_count = manifest.tokens.len()
    );
    let start = std::time::Instant::now();

    render_manifest(manifest)
        .and_then(|text| atomic_write(path, text.as_bytes()))
        .map_err(|e| {
            log_op_error!(
                "write_manifest",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "write_manifest",
        duration_ms = start.elapsed().as_millis() as u64,
        version = %manifest.version
    );

    Ok(())
}
