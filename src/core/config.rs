//! Settings loading.
//!
//! The settings document is read once at startup and turned into an immutable
//! [`Settings`] value. Any problem with it is a configuration error: the caller
//! prints a remediation hint and stops, there is no fallback configuration.
//!
//! ```yaml
//! settings:
//!   your_home_of_all_git_repos: ~/code
//!   fav_repos:
//!     - /work/
//!   exclude_repos:
//!     - /vendor/
//! ```
//!
//! Files ending in `.json` are read as JSON with the same shape.

use crate::core::dirs::expand_home;
use crate::core::error::{Result, StatusOfManyError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SettingsDocument {
    pub settings: Option<RawSettings>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RawSettings {
    #[serde(alias = "repos_home")]
    pub your_home_of_all_git_repos: Option<String>,
    #[serde(default)]
    pub fav_repos: Option<Vec<String>>,
    #[serde(default)]
    pub exclude_repos: Option<Vec<String>>,
}

/// Ordered list of compiled repository path patterns
#[derive(Debug, Clone, Default)]
pub struct RepoPatterns {
    patterns: Vec<Regex>,
}

impl RepoPatterns {
    pub fn compile<S: AsRef<str>>(sources: &[S]) -> Result<Self> {
        let patterns = sources
            .iter()
            .map(|source| {
                let source = source.as_ref();
                Regex::new(source).map_err(|e| StatusOfManyError::invalid_pattern(source, e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// True if any pattern matches. An empty list matches nothing.
    pub fn matches_any(&self, haystack: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(haystack))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub favorite_patterns: RepoPatterns,
    pub excluded_patterns: RepoPatterns,
}

impl Settings {
    pub fn new<S: AsRef<str>>(
        root: impl Into<PathBuf>,
        favorites: &[S],
        excluded: &[S],
    ) -> Result<Self> {
        Ok(Self {
            root: root.into(),
            favorite_patterns: RepoPatterns::compile(favorites)?,
            excluded_patterns: RepoPatterns::compile(excluded)?,
        })
    }

    /// Read and validate the settings document at `path`
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(StatusOfManyError::settings_not_found(path));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| StatusOfManyError::settings_read_failed(path, e))?;

        log::debug!("Loaded settings from {}", path.display());
        Self::from_document(path, &content)
    }

    /// Parse settings from the document text; `path` selects the format and
    /// is used in error messages.
    pub fn from_document(path: &Path, content: &str) -> Result<Self> {
        let document = parse_document(path, content)?;
        let raw = document
            .settings
            .ok_or_else(|| StatusOfManyError::missing_root_directory(path))?;

        let root = raw
            .your_home_of_all_git_repos
            .as_deref()
            .map(str::trim)
            .filter(|root| !root.is_empty())
            .map(expand_home)
            .ok_or_else(|| StatusOfManyError::missing_root_directory(path))?;

        if !root.is_dir() {
            return Err(StatusOfManyError::root_directory_not_found(root));
        }

        let settings = Self::new(
            root,
            &raw.fav_repos.unwrap_or_default(),
            &raw.exclude_repos.unwrap_or_default(),
        )?;

        log::debug!(
            "Scanning {} with {} favorite and {} excluded patterns",
            settings.root.display(),
            settings.favorite_patterns.len(),
            settings.excluded_patterns.len()
        );

        Ok(settings)
    }
}

fn parse_document(path: &Path, content: &str) -> Result<SettingsDocument> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(content)
            .map_err(|e| StatusOfManyError::settings_json_parse_failed(path, e))
    } else {
        // An empty YAML file deserializes to unit, treat it as an empty document
        if content.trim().is_empty() {
            return Ok(SettingsDocument::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| StatusOfManyError::settings_yaml_parse_failed(path, e))
    }
}
