// End-to-end tests for a generator run against a temporary repository

use std::fs;
use std::path::Path;

use serde_json::Value;
use tempfile::TempDir;
use tokenlist_core::errors::ExErrorKind;
use tokenlist_core::logging_facility::test_capture::init_test_capture;
use tokenlist_core::{Classification, TokenListConfig, Version};
use tokenlist_engine::{
    generate, generate_with_progress, FirstPublishReason, GenerateOutcome, Progress,
};

fn add_token(root: &Path, dir: &str, data: &str) {
    let entry = root.join("mainnet").join(dir);
    fs::create_dir_all(&entry).unwrap();
    fs::write(entry.join("data.json"), data).unwrap();
}

fn remove_token(root: &Path, dir: &str) {
    fs::remove_dir_all(root.join("mainnet").join(dir)).unwrap();
}

fn read_output(root: &Path) -> Value {
    let text = fs::read_to_string(root.join("tokenlist-mainnet.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

fn output_version(root: &Path) -> Version {
    serde_json::from_value(read_output(root)["version"].clone()).unwrap()
}

/// Repository with AUSD and USDC, already published once
fn published_repo() -> (TempDir, TokenListConfig) {
    let root = TempDir::new().unwrap();
    add_token(
        root.path(),
        "AUSD",
        r#"{symbol: "AUSD", address: "0x1", name: "Agora USD", decimals: 6}"#,
    );
    add_token(
        root.path(),
        "USDC",
        r#"{symbol: "USDC", address: "0x2", name: "USD Coin", decimals: 6}"#,
    );
    let config = TokenListConfig::for_root(root.path());
    let outcome = generate(&config).unwrap();
    assert!(matches!(outcome, GenerateOutcome::FirstPublish { .. }));
    (root, config)
}

#[test]
fn test_first_publish_writes_initial_version() {
    let root = TempDir::new().unwrap();
    add_token(
        root.path(),
        "USDC",
        "// stablecoin\n{symbol: 'USDC', address: '0x2', decimals: 6,}",
    );
    fs::write(root.path().join("mainnet/USDC/logo.png"), b"png").unwrap();
    let config = TokenListConfig::for_root(root.path());

    let outcome = generate(&config).unwrap();

    match &outcome {
        GenerateOutcome::FirstPublish {
            manifest, reason, ..
        } => {
            assert_eq!(*reason, FirstPublishReason::NoManifest);
            assert_eq!(manifest.version, Version::new(1, 0, 0));
            assert_eq!(manifest.tokens.len(), 1);
        }
        other => panic!("expected first publish, got {:?}", other),
    }
    assert!(outcome.wrote_manifest());

    let written = read_output(root.path());
    assert_eq!(written["name"], "Monad Mainnet");
    assert_eq!(written["keywords"], serde_json::json!(["monad mainnet"]));
    assert_eq!(
        written["version"],
        serde_json::json!({"major": 1, "minor": 0, "patch": 0})
    );
    assert_eq!(written["tokens"][0]["symbol"], "USDC");
    assert_eq!(
        written["tokens"][0]["logoURI"],
        "https://raw.githubusercontent.com/monad-crypto/token-list/refs/heads/main/mainnet/USDC/logo.png"
    );
    assert!(written["timestamp"].as_str().unwrap().ends_with("+00:00"));
}

#[test]
fn test_unchanged_run_leaves_file_untouched() {
    let (root, config) = published_repo();
    let before = fs::read(root.path().join("tokenlist-mainnet.json")).unwrap();

    let outcome = generate(&config).unwrap();

    match &outcome {
        GenerateOutcome::Unchanged {
            version,
            token_count,
            report,
        } => {
            assert_eq!(*version, Version::new(1, 0, 0));
            assert_eq!(*token_count, 2);
            assert_eq!(report.classification, Classification::None);
        }
        other => panic!("expected unchanged, got {:?}", other),
    }
    assert!(!outcome.wrote_manifest());

    let after = fs::read(root.path().join("tokenlist-mainnet.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_metadata_change_bumps_patch() {
    let (root, config) = published_repo();
    add_token(
        root.path(),
        "USDC",
        r#"{symbol: "USDC", address: "0x2", name: "USD Coin (bridged)", decimals: 6}"#,
    );

    let outcome = generate(&config).unwrap();

    assert_eq!(outcome.classification(), Classification::Patch);
    assert_eq!(output_version(root.path()), Version::new(1, 0, 1));
}

#[test]
fn test_added_token_bumps_minor() {
    let (root, config) = published_repo();
    add_token(root.path(), "WMON", r#"{symbol: "WMON", address: "0x3"}"#);

    let outcome = generate(&config).unwrap();

    match &outcome {
        GenerateOutcome::Published {
            manifest,
            previous_version,
            report,
            ..
        } => {
            assert_eq!(*previous_version, Version::new(1, 0, 0));
            assert_eq!(manifest.version, Version::new(1, 1, 0));
            assert_eq!(report.description, "Added token(s): WMON");
        }
        other => panic!("expected publish, got {:?}", other),
    }
    assert_eq!(output_version(root.path()), Version::new(1, 1, 0));
}

#[test]
fn test_removed_token_bumps_major() {
    let (root, config) = published_repo();
    remove_token(root.path(), "AUSD");

    let outcome = generate(&config).unwrap();

    assert_eq!(outcome.classification(), Classification::Major);
    assert_eq!(output_version(root.path()), Version::new(2, 0, 0));
    assert_eq!(read_output(root.path())["tokens"].as_array().unwrap().len(), 1);
}

#[test]
fn test_removal_dominates_addition() {
    let (root, config) = published_repo();
    remove_token(root.path(), "AUSD");
    add_token(root.path(), "WMON", r#"{symbol: "WMON", address: "0x3"}"#);

    let outcome = generate(&config).unwrap();

    assert_eq!(outcome.classification(), Classification::Major);
    assert_eq!(output_version(root.path()), Version::new(2, 0, 0));
}

#[test]
fn test_versions_accumulate_across_runs() {
    let (root, config) = published_repo();

    add_token(root.path(), "WMON", r#"{symbol: "WMON", address: "0x3"}"#);
    generate(&config).unwrap();
    add_token(
        root.path(),
        "WMON",
        r#"{symbol: "WMON", address: "0x3", name: "Wrapped MON"}"#,
    );
    generate(&config).unwrap();

    assert_eq!(output_version(root.path()), Version::new(1, 1, 1));
}

#[test]
fn test_unparseable_prior_manifest_restarts_history() {
    let (root, config) = published_repo();
    fs::write(root.path().join("tokenlist-mainnet.json"), "{ not json").unwrap();

    let outcome = generate(&config).unwrap();

    match outcome {
        GenerateOutcome::FirstPublish { reason, .. } => {
            assert!(matches!(
                reason,
                FirstPublishReason::UnparseableManifest { .. }
            ));
        }
        other => panic!("expected first publish, got {:?}", other),
    }
    assert_eq!(output_version(root.path()), Version::new(1, 0, 0));
}

#[test]
fn test_empty_sources_write_nothing() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("mainnet")).unwrap();
    let config = TokenListConfig::for_root(root.path());

    let outcome = generate(&config).unwrap();

    assert!(matches!(outcome, GenerateOutcome::NoSources { .. }));
    assert!(!root.path().join("tokenlist-mainnet.json").exists());
}

#[test]
fn test_missing_data_dir_is_not_found() {
    let root = TempDir::new().unwrap();
    let config = TokenListConfig::for_root(root.path());

    let err = generate(&config).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert!(err.run_id().is_some());
}

#[test]
fn test_invalid_source_leaves_manifest_untouched() {
    let (root, config) = published_repo();
    let before = fs::read(root.path().join("tokenlist-mainnet.json")).unwrap();
    add_token(root.path(), "BROKEN", "{symbol: 'BROKEN', address: ");

    let err = generate(&config).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Parse);
    let after = fs::read(root.path().join("tokenlist-mainnet.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_duplicate_symbol_aborts_run() {
    let (root, config) = published_repo();
    add_token(root.path(), "USDC2", r#"{symbol: "USDC", address: "0x9"}"#);

    let err = generate(&config).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::DuplicateSymbol);
    assert_eq!(err.symbol(), Some("USDC"));
}

#[test]
fn test_run_logs_start_and_end() {
    let capture = init_test_capture();
    let (_root, config) = published_repo();

    generate(&config).unwrap();

    capture.assert_event_exists("generate", "start");
    capture.assert_event_exists("generate", "end");
    capture.assert_event_exists("compare_tokens", "end");

    let ends = capture.events_for_op("compare_tokens");
    assert!(ends
        .iter()
        .any(|e| e.field("classification") == Some("none")));
}

#[test]
fn test_line_separator_in_metadata_keeps_version_history() {
    let root = TempDir::new().unwrap();
    add_token(root.path(), "A", r#"{symbol: "A", address: "0x1"}"#);
    add_token(
        root.path(),
        "B",
        r#"{symbol: "B", address: "0x2", name: "Line\u2028Sep"}"#,
    );
    let config = TokenListConfig::for_root(root.path());
    generate(&config).unwrap();

    remove_token(root.path(), "A");
    let outcome = generate(&config).unwrap();

    match &outcome {
        GenerateOutcome::Published { manifest, .. } => {
            assert_eq!(manifest.version, Version::new(2, 0, 0));
            let name = manifest.tokens[0].get("name");
            assert_eq!(name, Some(&Value::from("Line\u{2028}Sep")));
        }
        other => panic!("expected publish, got {:?}", other),
    }

    let again = generate(&config).unwrap();
    assert!(!again.wrote_manifest());
    assert_eq!(again.classification(), Classification::None);
}

#[test]
fn test_progress_reported_before_loading() {
    let (root, config) = published_repo();
    add_token(root.path(), "BROKEN", "{symbol: ");
    let mut seen = Vec::new();

    let err = generate_with_progress(&config, |p| seen.push(p)).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Parse);
    assert_eq!(seen, vec![Progress::Loading { entry_count: 3 }]);
}

#[test]
fn test_no_progress_without_sources() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("mainnet")).unwrap();
    let config = TokenListConfig::for_root(root.path());
    let mut seen = Vec::new();

    generate_with_progress(&config, |p| seen.push(p)).unwrap();

    assert!(seen.is_empty());
}
