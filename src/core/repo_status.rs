//! Per-repository status record.
//!
//! A [`RepositoryStatusBuilder`] is filled while the queries run and then
//! finalized into an immutable [`RepositoryStatus`]. Derived fields are computed
//! only at finalization, so nothing can observe a half-populated record.

use crate::core::options::Options;
use crate::core::status_parser::parse_status_lines;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryStatus {
    path: PathBuf,
    branch_name: String,
    raw_status_lines: Vec<String>,
    raw_stash_lines: Vec<String>,
    has_untracked_files: bool,
    has_unstaged_changes: bool,
    has_outgoing_commits: bool,
    outgoing_commit_count: usize,
    latest_tag: Option<String>,
    commits_since_tag: Option<Vec<String>>,
}

impl RepositoryStatus {
    pub fn builder(path: impl Into<PathBuf>) -> RepositoryStatusBuilder {
        RepositoryStatusBuilder::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn branch_name(&self) -> &str {
        &self.branch_name
    }

    pub fn raw_status_lines(&self) -> &[String] {
        &self.raw_status_lines
    }

    pub fn raw_stash_lines(&self) -> &[String] {
        &self.raw_stash_lines
    }

    pub fn has_untracked_files(&self) -> bool {
        self.has_untracked_files
    }

    pub fn has_unstaged_changes(&self) -> bool {
        self.has_unstaged_changes
    }

    pub fn has_outgoing_commits(&self) -> bool {
        self.has_outgoing_commits
    }

    pub fn outgoing_commit_count(&self) -> usize {
        self.outgoing_commit_count
    }

    pub fn latest_tag(&self) -> Option<&str> {
        self.latest_tag.as_deref()
    }

    pub fn commits_since_tag(&self) -> Option<&[String]> {
        self.commits_since_tag.as_deref()
    }

    /// Whether this repository has anything worth showing under `options`
    pub fn is_noteworthy(&self, options: &Options) -> bool {
        self.has_untracked_files
            || (options.show_stashes && !self.raw_stash_lines.is_empty())
            || self.has_unstaged_changes
            || self.outgoing_commit_count > 0
            || (options.show_commits_after_tag && self.commits_since_tag.is_some())
    }
}

#[derive(Debug, Default)]
pub struct RepositoryStatusBuilder {
    path: PathBuf,
    raw_status_lines: Vec<String>,
    raw_stash_lines: Vec<String>,
    latest_tag: Option<String>,
    commits_since_tag: Vec<String>,
}

impl RepositoryStatusBuilder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn status_lines(mut self, lines: Vec<String>) -> Self {
        self.raw_status_lines = lines;
        self
    }

    pub fn stash_lines(mut self, lines: Vec<String>) -> Self {
        self.raw_stash_lines = lines;
        self
    }

    pub fn latest_tag(mut self, tag: impl Into<String>) -> Self {
        self.latest_tag = Some(tag.into());
        self
    }

    pub fn commits_since_tag(mut self, commits: Vec<String>) -> Self {
        self.commits_since_tag = commits;
        self
    }

    pub fn build(self) -> RepositoryStatus {
        let parsed = parse_status_lines(&self.raw_status_lines);

        // Commits only mean something relative to a tag
        let commits_since_tag = match (&self.latest_tag, self.commits_since_tag.is_empty()) {
            (Some(_), false) => Some(self.commits_since_tag),
            _ => None,
        };

        RepositoryStatus {
            path: self.path,
            branch_name: parsed.branch_name,
            raw_status_lines: self.raw_status_lines,
            raw_stash_lines: self.raw_stash_lines,
            has_untracked_files: parsed.has_untracked_files,
            has_unstaged_changes: parsed.has_unstaged_changes,
            has_outgoing_commits: parsed.has_outgoing_commits,
            outgoing_commit_count: parsed.outgoing_commit_count,
            latest_tag: self.latest_tag,
            commits_since_tag,
        }
    }
}
