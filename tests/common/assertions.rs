//! Common assertion helpers for test output validation
//!
//! Provides predicates for the report lines printed by git-status-of-many.

#![allow(dead_code)]

use predicates::prelude::*;
use std::path::Path;

/// Header line of a repository block
pub fn has_repo_header(path: &Path) -> impl Predicate<str> {
    predicates::str::contains(format!("cd {}; git status", path.display()))
}

/// Final summary line
pub fn has_summary(dirty: usize, total: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("OK. {dirty} of {total} repos dirty"))
}

pub fn has_untracked() -> impl Predicate<str> {
    predicates::str::contains("Has untracked files")
}

pub fn has_unstaged() -> impl Predicate<str> {
    predicates::str::contains("Has Changes not staged for commit")
}

pub fn has_commits_to_push(count: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("Has commits to push: {count}"))
}

pub fn has_tag_notice(tag: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Commits above tag {tag}"))
}

/// Remediation hint printed for a missing settings file
pub fn settings_hint() -> impl Predicate<str> {
    predicates::str::contains("cp settings.yml.example settings.yml")
}
