use crate::core::error::StatusOfManyError;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "git-status-of-many";
pub const SETTINGS_FILE_NAME: &str = "settings.yml";

pub fn get_config_directory() -> Result<PathBuf, StatusOfManyError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|dir| dir.join(APP_NAME))
        .ok_or(StatusOfManyError::ConfigDirectoryNotFound)
}

/// Where to read settings from when `--config` is not given.
///
/// A `settings.yml` in the working directory wins over the one in the
/// per-user configuration directory.
pub fn default_settings_path() -> Result<PathBuf, StatusOfManyError> {
    let local = PathBuf::from(SETTINGS_FILE_NAME);
    if local.is_file() {
        return Ok(local);
    }

    Ok(get_config_directory()?.join(SETTINGS_FILE_NAME))
}

/// Expand a leading `~` to the user's home directory
pub fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from(path));
    }

    match path.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(path),
        },
        None => Path::new(path).to_path_buf(),
    }
}
