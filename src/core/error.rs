//! Domain-specific error types for git-status-of-many.
//!
//! This module defines [`StatusOfManyError`], the single error enum used across the
//! crate. It uses `thiserror` for the definitions and provides named constructors
//! for the common failure scenarios.
//!
//! # Public API
//! - [`StatusOfManyError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, StatusOfManyError>`
//!
//! # Error Categories
//! - **Settings**: missing, unreadable or malformed settings document, bad patterns
//! - **Git queries**: the `git` binary could not be spawned or exited non-zero
//! - **I/O**: writing the report or reading interactive input
//!
//! Only the settings category is fatal. Git query errors are logged by the
//! collector and degrade the affected fields to their defaults.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusOfManyError {
    // Settings errors
    #[error("Settings file not found: {path}")]
    SettingsNotFound { path: PathBuf },

    #[error("Failed to read settings file '{path}': {source}")]
    SettingsReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    SettingsYamlParseFailed {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    SettingsJsonParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Settings file '{path}' does not name the directory holding your repositories")]
    MissingRootDirectory { path: PathBuf },

    #[error("Repositories home is not a directory: {path}")]
    RootDirectoryNotFound { path: PathBuf },

    #[error("Invalid repository pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("Could not determine a configuration directory")]
    ConfigDirectoryNotFound,

    // Git query errors
    #[error("Failed to run git {args} in '{path}': {source}")]
    GitSpawnFailed {
        path: PathBuf,
        args: String,
        source: std::io::Error,
    },

    #[error("git {args} failed in '{path}': {stderr}")]
    GitCommandFailed {
        path: PathBuf,
        args: String,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using StatusOfManyError
pub type Result<T> = std::result::Result<T, StatusOfManyError>;

impl StatusOfManyError {
    pub fn settings_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SettingsNotFound { path: path.into() }
    }

    pub fn settings_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SettingsReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn settings_yaml_parse_failed(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::SettingsYamlParseFailed {
            path: path.into(),
            source,
        }
    }

    pub fn settings_json_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::SettingsJsonParseFailed {
            path: path.into(),
            source,
        }
    }

    pub fn missing_root_directory(path: impl Into<PathBuf>) -> Self {
        Self::MissingRootDirectory { path: path.into() }
    }

    pub fn root_directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RootDirectoryNotFound { path: path.into() }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    pub fn git_spawn_failed(
        path: impl Into<PathBuf>,
        args: &[&str],
        source: std::io::Error,
    ) -> Self {
        Self::GitSpawnFailed {
            path: path.into(),
            args: args.join(" "),
            source,
        }
    }

    pub fn git_command_failed(
        path: impl Into<PathBuf>,
        args: &[&str],
        stderr: impl Into<String>,
    ) -> Self {
        Self::GitCommandFailed {
            path: path.into(),
            args: args.join(" "),
            stderr: stderr.into(),
        }
    }

    /// True for the errors that stop the run before any repository is scanned
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::SettingsNotFound { .. }
                | Self::SettingsReadFailed { .. }
                | Self::SettingsYamlParseFailed { .. }
                | Self::SettingsJsonParseFailed { .. }
                | Self::MissingRootDirectory { .. }
                | Self::RootDirectoryNotFound { .. }
                | Self::InvalidPattern { .. }
                | Self::ConfigDirectoryNotFound
        )
    }

    /// Lines telling the user how to get a working settings file
    pub fn remediation_hint(&self) -> &'static [&'static str] {
        match self {
            Self::SettingsNotFound { .. } | Self::ConfigDirectoryNotFound => &[
                "Configure me first!",
                "cp settings.yml.example settings.yml",
                "vim settings.yml",
            ],
            _ if self.is_configuration_error() => &[
                "Something is wrong with your settings.",
                "Remove settings.yml and configure it again from settings.yml.example",
            ],
            _ => &[],
        }
    }
}
