//! Manifest generation and schema.
//!
//! ## Manifest Fields
//!
//! - `name`: Display name of the list
//! - `logoURI`: Logo of the list itself
//! - `keywords`: Tag strings
//! - `timestamp`: ISO-8601 UTC time of the last published change
//! - `tokens`: Token records, ordered by source directory name
//! - `version`: `{major, minor, patch}`

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::TokenListConfig;
use crate::model::{Token, Version};

/// The published token list.
///
/// Field order here is the key order of the written file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenListManifest {
    pub name: String,

    #[serde(rename = "logoURI")]
    pub logo_uri: String,

    pub keywords: Vec<String>,

    pub timestamp: String,

    pub tokens: Vec<Token>,

    pub version: Version,
}

/// Assemble a manifest from the list metadata in `config` and the given
/// mutable fields. Pure: no clock, no I/O.
pub fn build_manifest(
    config: &TokenListConfig,
    tokens: Vec<Token>,
    version: Version,
    timestamp: String,
) -> TokenListManifest {
    TokenListManifest {
        name: config.name.clone(),
        logo_uri: config.logo_uri.clone(),
        keywords: config.keywords.clone(),
        timestamp,
        tokens,
        version,
    }
}

/// Current UTC time as ISO-8601 with microseconds and an explicit offset,
/// e.g. `2026-01-01T12:00:00.123456+00:00`.
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_manifest_uses_config_metadata() {
        let config = TokenListConfig::default();
        let token = Token::from_value(json!({"symbol": "A", "address": "0x1"})).unwrap();

        let manifest = build_manifest(
            &config,
            vec![token.clone()],
            Version::new(1, 0, 0),
            "2026-01-01T00:00:00.000000+00:00".to_string(),
        );

        assert_eq!(manifest.name, "Monad Mainnet");
        assert_eq!(manifest.keywords, vec!["monad mainnet"]);
        assert_eq!(manifest.tokens, vec![token]);
        assert_eq!(manifest.version, Version::new(1, 0, 0));
    }

    #[test]
    fn test_serialized_key_names() {
        let manifest = build_manifest(
            &TokenListConfig::default(),
            Vec::new(),
            Version::new(1, 0, 0),
            "t".to_string(),
        );
        let value = serde_json::to_value(&manifest).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["name", "logoURI", "keywords", "timestamp", "tokens", "version"] {
            assert!(obj.contains_key(key), "missing key {}", key);
        }
        assert_eq!(obj.len(), 6);
    }

    #[test]
    fn test_current_timestamp_is_utc_iso8601() {
        let ts = current_timestamp();
        assert!(ts.ends_with("+00:00"), "unexpected timestamp {}", ts);
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
