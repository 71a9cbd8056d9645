//! Repository discovery under the configured root.
//!
//! Only depths 1 to 3 below the root are searched; a repository nested
//! deeper is never found. Hidden entries are skipped, which also keeps the
//! walk out of `.git` directories themselves. Symlinked directories are
//! followed; link loops surface as walk errors and are skipped.

use crate::core::config::Settings;
use crate::core::options::Options;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use walkdir::{DirEntry, WalkDir};

pub const MAX_DEPTH: usize = 3;
pub const GIT_METADATA_DIR: &str = ".git";

/// Sorted, deduplicated repository paths honoring favorites and exclusions
pub fn discover_repositories(settings: &Settings, options: &Options) -> Vec<PathBuf> {
    if options.favorites_only && settings.favorite_patterns.is_empty() {
        log::warn!("Only favorites requested but no favorite patterns are configured");
    }

    let mut repos: Vec<PathBuf> = WalkDir::new(&settings.root)
        .min_depth(1)
        .max_depth(MAX_DEPTH)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir())
        .map(DirEntry::into_path)
        .filter(|path| is_repository(path))
        .filter(|path| is_selected(path, settings, options))
        .collect();

    repos.sort();
    repos.dedup();

    log::debug!(
        "Found {} repositories under {}",
        repos.len(),
        settings.root.display()
    );

    repos
}

pub fn is_repository(path: &Path) -> bool {
    path.join(GIT_METADATA_DIR).is_dir()
}

/// Favorites filter (when enabled) followed by exclusions, which always win
pub fn is_selected(path: &Path, settings: &Settings, options: &Options) -> bool {
    let candidate = pattern_subject(path);

    if options.favorites_only && !settings.favorite_patterns.matches_any(&candidate) {
        return false;
    }

    if settings.excluded_patterns.matches_any(&candidate) {
        log::debug!("Excluded {}", path.display());
        return false;
    }

    true
}

/// The path as patterns see it, with a trailing separator so that patterns
/// can anchor on whole path components
fn pattern_subject(path: &Path) -> String {
    format!("{}{MAIN_SEPARATOR}", path.display())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}
