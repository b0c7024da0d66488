//! Build-time configuration of the published list.
//!
//! The list metadata and layout are fixed constants; only the repository
//! root varies between invocations (and in tests).

use std::path::{Path, PathBuf};

use crate::model::Version;

/// Display name of the token list
pub const TOKEN_LIST_NAME: &str = "Monad Mainnet";
/// Logo of the token list itself
pub const TOKEN_LIST_LOGO_URI: &str =
    "https://raw.githubusercontent.com/monad-crypto/token-list/refs/heads/main/assets/monad.svg";
/// Keyword tags of the token list
pub const KEYWORDS: &[&str] = &["monad mainnet"];
/// Version written on first publish
pub const INITIAL_VERSION: Version = Version::new(1, 0, 0);
/// Directory (relative to the repository root) holding one subdirectory per token
pub const DATA_DIR: &str = "mainnet";
/// Per-token metadata file inside each token directory
pub const TOKEN_DATA_FILE: &str = "data.json";
/// Published manifest (relative to the repository root)
pub const OUTPUT_FILE: &str = "tokenlist-mainnet.json";
/// Public base URL under which repository files are served
pub const ASSET_BASE_URL: &str =
    "https://raw.githubusercontent.com/monad-crypto/token-list/refs/heads/main";
/// Recognised logo file names, in priority order (vector before raster)
pub const LOGO_FILE_NAMES: &[&str] = &["logo.svg", "logo.png"];

/// Everything one generator run needs to know about the list it publishes.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenListConfig {
    pub repo_root: PathBuf,
    pub name: String,
    pub logo_uri: String,
    pub keywords: Vec<String>,
    pub initial_version: Version,
    pub data_dir: String,
    pub token_data_file: String,
    pub output_file: String,
    pub asset_base_url: String,
    pub logo_file_names: Vec<String>,
}

impl TokenListConfig {
    /// Default configuration rooted at `repo_root`
    pub fn for_root(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
            ..Self::default()
        }
    }

    /// Absolute (or root-relative) path of the token data directory
    pub fn data_path(&self) -> PathBuf {
        self.repo_root.join(&self.data_dir)
    }

    /// Path of the published manifest
    pub fn output_path(&self) -> PathBuf {
        self.repo_root.join(&self.output_file)
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }
}

impl Default for TokenListConfig {
    fn default() -> Self {
        Self {
            repo_root: PathBuf::from("."),
            name: TOKEN_LIST_NAME.to_string(),
            logo_uri: TOKEN_LIST_LOGO_URI.to_string(),
            keywords: KEYWORDS.iter().map(|k| k.to_string()).collect(),
            initial_version: INITIAL_VERSION,
            data_dir: DATA_DIR.to_string(),
            token_data_file: TOKEN_DATA_FILE.to_string(),
            output_file: OUTPUT_FILE.to_string(),
            asset_base_url: ASSET_BASE_URL.to_string(),
            logo_file_names: LOGO_FILE_NAMES.iter().map(|n| n.to_string()).collect(),
        }
    }
}
