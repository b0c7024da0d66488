//! Generate command
//!
//! One single-pass run of the token list generator:
//!
//! ```text
//! LOAD_NEW → (no sources)                   → NoSources      (nothing written)
//! LOAD_NEW → (no / unparseable manifest)    → FirstPublish   (initial version written)
//! LOAD_NEW → DIFF → none                    → Unchanged      (nothing written)
//! LOAD_NEW → DIFF → patch|minor|major → BUMP → Published     (bumped version written)
//! ```
//!
//! Any load failure aborts the run before the manifest is touched.
//!
//! ## Logging
//!
//! - `log_op_start!` / `log_op_end!` around the whole run (`generate`) and
//!   around the comparison (`compare_tokens`)
//! - `log_op_error!` on any failure, with the stable error code

#![allow(clippy::result_large_err)]

use std::path::PathBuf;

use tokenlist_core::diff::{compare, ChangeReport};
use tokenlist_core::errors::ExError;
use tokenlist_core::{
    build_manifest, bump, current_timestamp, log_op_end, log_op_error, log_op_start,
    Classification, Result, Token, TokenListConfig, TokenListManifest, Version,
};
use tokenlist_core_types::RunId;
use tokenlist_store::{
    list_source_entries, load_all_tokens, read_prior_manifest, write_manifest, FsAssetResolver,
    PriorManifest,
};

/// Why a run started the version history from scratch.
#[derive(Debug, Clone, PartialEq)]
pub enum FirstPublishReason {
    /// No manifest existed at the output path
    NoManifest,
    /// A manifest existed but could not be parsed; it was overwritten
    UnparseableManifest { reason: String },
}

/// Notification emitted while a run is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Token directories were found and are about to be loaded
    Loading { entry_count: usize },
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    /// The data directory holds no token directories; nothing was written
    NoSources { data_dir: PathBuf },
    /// A manifest with the initial version was written
    FirstPublish {
        manifest: TokenListManifest,
        output_path: PathBuf,
        reason: FirstPublishReason,
    },
    /// The token set matches the published one; nothing was written
    Unchanged {
        version: Version,
        token_count: usize,
        report: ChangeReport,
    },
    /// A manifest with a bumped version was written
    Published {
        manifest: TokenListManifest,
        output_path: PathBuf,
        previous_version: Version,
        report: ChangeReport,
    },
}

impl GenerateOutcome {
    /// Classification of this run; first publishes count as `major`
    pub fn classification(&self) -> Classification {
        match self {
            GenerateOutcome::NoSources { .. } => Classification::None,
            GenerateOutcome::FirstPublish { .. } => Classification::Major,
            GenerateOutcome::Unchanged { report, .. } => report.classification,
            GenerateOutcome::Published { report, .. } => report.classification,
        }
    }

    /// Whether the manifest file was (re)written
    pub fn wrote_manifest(&self) -> bool {
        matches!(
            self,
            GenerateOutcome::FirstPublish { .. } | GenerateOutcome::Published { .. }
        )
    }
}

/// Run the generator once against `config`.
///
/// ## Errors
///
/// - `NotFound`: the data directory is missing
/// - `Io` / `Parse` / `MissingField`: a token source is unreadable or invalid
/// - `DuplicateSymbol`: two sources (or the prior manifest) repeat a symbol
/// - `Io` / `Serialization`: the manifest cannot be written
///
/// Every error carries the run id. The manifest is never partially written.
pub fn generate(config: &TokenListConfig) -> Result<GenerateOutcome> {
    generate_with_progress(config, |_| {})
}

/// [`generate`], reporting [`Progress`] to `on_progress` as the run advances.
///
/// ## Errors
///
/// Same as [`generate`].
pub fn generate_with_progress(
    config: &TokenListConfig,
    mut on_progress: impl FnMut(Progress),
) -> Result<GenerateOutcome> {
    let run_id = RunId::new();
    log_op_start!(
        "generate",
        run_id = %run_id,
        root = %config.repo_root().display()
    );
    let start = std::time::Instant::now();

    let outcome = generate_impl(config, &mut on_progress).map_err(|e| {
        let e = e.with_run_id(run_id.clone());
        log_op_error!(
            "generate",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            run_id = %run_id
        );
        e
    })?;

    log_op_end!(
        "generate",
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = %run_id,
        classification = %outcome.classification(),
        wrote_manifest = outcome.wrote_manifest()
    );

    Ok(outcome)
}

fn generate_impl(
    config: &TokenListConfig,
    on_progress: &mut dyn FnMut(Progress),
) -> Result<GenerateOutcome> {
    let data_dir = config.data_path();
    let entries = list_source_entries(&data_dir)?;
    if entries.is_empty() {
        return Ok(GenerateOutcome::NoSources { data_dir });
    }

    on_progress(Progress::Loading {
        entry_count: entries.len(),
    });
    let resolver = FsAssetResolver::from_config(config);
    let tokens = load_all_tokens(&entries, &config.token_data_file, &resolver)?;

    let output_path = config.output_path();
    let old = match read_prior_manifest(&output_path)? {
        PriorManifest::Found(old) => old,
        PriorManifest::Absent => {
            return first_publish(config, tokens, output_path, FirstPublishReason::NoManifest)
        }
        PriorManifest::Unparseable { reason, .. } => {
            return first_publish(
                config,
                tokens,
                output_path,
                FirstPublishReason::UnparseableManifest { reason },
            )
        }
    };

    let report = compare_tokens(&old.tokens, &tokens)?;
    if !report.classification.is_change() {
        return Ok(GenerateOutcome::Unchanged {
            version: old.version,
            token_count: tokens.len(),
            report,
        });
    }

    let version = bump(old.version, report.classification);
    let manifest = build_manifest(config, tokens, version, current_timestamp());
    write_manifest(&output_path, &manifest)?;

    Ok(GenerateOutcome::Published {
        manifest,
        output_path,
        previous_version: old.version,
        report,
    })
}

fn first_publish(
    config: &TokenListConfig,
    tokens: Vec<Token>,
    output_path: PathBuf,
    reason: FirstPublishReason,
) -> Result<GenerateOutcome> {
    let manifest = build_manifest(
        config,
        tokens,
        config.initial_version,
        current_timestamp(),
    );
    write_manifest(&output_path, &manifest)?;

    Ok(GenerateOutcome::FirstPublish {
        manifest,
        output_path,
        reason,
    })
}

fn compare_tokens(old: &[Token], new: &[Token]) -> Result<ChangeReport> {
    log_op_start!(
        "compare_tokens",
        old_count = old.len(),
        new_count = new.len()
    );
    let start = std::time::Instant::now();

    let report = compare(old, new).map_err(|e: ExError| {
        log_op_error!(
            "compare_tokens",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "compare_tokens",
        duration_ms = start.elapsed().as_millis() as u64,
        classification = %report.classification,
        description = %report.description
    );

    Ok(report)
}
