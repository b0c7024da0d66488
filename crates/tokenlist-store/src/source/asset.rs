//! Logo discovery
//!
//! The only filesystem-dependent part of building a token record is finding
//! its logo. It sits behind [`AssetResolver`] so the parsing logic can be
//! exercised without a real directory tree.

#![allow(clippy::result_large_err)]

use std::path::{Component, Path, PathBuf};

use tokenlist_core::config::TokenListConfig;
use tokenlist_core::errors::{ExError, ExErrorKind};

use crate::errors::Result;

/// Resolves the public logo URL of a token source directory.
pub trait AssetResolver {
    /// Return the logo URL for `entry_dir`, or `None` when it has no logo.
    fn resolve_logo(&self, entry_dir: &Path) -> Result<Option<String>>;
}

/// Resolver backed by the repository checkout.
///
/// Checks the candidate file names in order and builds
/// `<base_url>/<path relative to repo_root>` for the first one present.
#[derive(Debug, Clone)]
pub struct FsAssetResolver {
    repo_root: PathBuf,
    base_url: String,
    candidates: Vec<String>,
}

impl FsAssetResolver {
    pub fn new(
        repo_root: impl Into<PathBuf>,
        base_url: impl Into<String>,
        candidates: Vec<String>,
    ) -> Self {
        Self {
            repo_root: repo_root.into(),
            base_url: base_url.into(),
            candidates,
        }
    }

    pub fn from_config(config: &TokenListConfig) -> Self {
        Self::new(
            config.repo_root.clone(),
            config.asset_base_url.clone(),
            config.logo_file_names.clone(),
        )
    }

    fn public_url(&self, asset_path: &Path) -> Result<String> {
        let relative = asset_path.strip_prefix(&self.repo_root).map_err(|_| {
            ExError::new(ExErrorKind::InvalidState)
                .with_op("resolve_logo")
                .with_path(asset_path)
                .with_message(format!(
                    "asset is outside the repository root {}",
                    self.repo_root.display()
                ))
        })?;

        let segments: Vec<String> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        Ok(format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            segments.join("/")
        ))
    }
}

impl AssetResolver for FsAssetResolver {
    fn resolve_logo(&self, entry_dir: &Path) -> Result<Option<String>> {
        match self
            .candidates
            .iter()
            .map(|name| entry_dir.join(name))
            .find(|path| path.is_file())
        {
            Some(path) => self.public_url(&path).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn resolver(root: &Path) -> FsAssetResolver {
        FsAssetResolver::new(
            root,
            "https://cdn.example/main/",
            vec!["logo.svg".to_string(), "logo.png".to_string()],
        )
    }

    #[test]
    fn test_no_logo() {
        let root = TempDir::new().unwrap();
        let entry = root.path().join("mainnet").join("USDC");
        fs::create_dir_all(&entry).unwrap();

        assert_eq!(resolver(root.path()).resolve_logo(&entry).unwrap(), None);
    }

    #[test]
    fn test_svg_preferred_over_png() {
        let root = TempDir::new().unwrap();
        let entry = root.path().join("mainnet").join("USDC");
        fs::create_dir_all(&entry).unwrap();
        fs::write(entry.join("logo.png"), b"png").unwrap();
        fs::write(entry.join("logo.svg"), b"<svg/>").unwrap();

        assert_eq!(
            resolver(root.path()).resolve_logo(&entry).unwrap(),
            Some("https://cdn.example/main/mainnet/USDC/logo.svg".to_string())
        );
    }

    #[test]
    fn test_png_fallback() {
        let root = TempDir::new().unwrap();
        let entry = root.path().join("mainnet").join("WMON");
        fs::create_dir_all(&entry).unwrap();
        fs::write(entry.join("logo.png"), b"png").unwrap();

        assert_eq!(
            resolver(root.path()).resolve_logo(&entry).unwrap(),
            Some("https://cdn.example/main/mainnet/WMON/logo.png".to_string())
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let root = TempDir::new().unwrap();
        let entry = root.path().join("mainnet").join("USDC");
        fs::create_dir_all(&entry).unwrap();
        fs::write(entry.join("Logo.SVG"), b"<svg/>").unwrap();

        // Skip on case-insensitive filesystems, where the lookup would match
        if entry.join("logo.svg").exists() {
            return;
        }
        assert_eq!(resolver(root.path()).resolve_logo(&entry).unwrap(), None);
    }

    #[test]
    fn test_asset_outside_root_is_invalid_state() {
        let root = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        fs::write(elsewhere.path().join("logo.svg"), b"<svg/>").unwrap();

        let err = resolver(root.path())
            .resolve_logo(elsewhere.path())
            .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidState);
    }
}
