//! Predefined repository scenarios
//!
//! Each function builds one repository state under the workspace's scan root.

#![allow(dead_code)]

use super::repository::*;
use git_status_of_many::core::error::Result;
use std::path::PathBuf;

/// Scenario: committed and clean, nothing to report
pub fn clean_repo(workspace: &TestWorkspace, relative: &str) -> Result<PathBuf> {
    init_repo_with_commit(&workspace.repo_path(relative))
}

/// Scenario: a brand new file that was never added
pub fn untracked_repo(workspace: &TestWorkspace, relative: &str) -> Result<PathBuf> {
    let path = init_repo_with_commit(&workspace.repo_path(relative))?;
    create_file(&path, "notes.txt", "remember this\n")?;
    Ok(path)
}

/// Scenario: a tracked file modified but not staged
pub fn unstaged_repo(workspace: &TestWorkspace, relative: &str) -> Result<PathBuf> {
    let path = init_repo_with_commit(&workspace.repo_path(relative))?;
    create_file(&path, "README.md", "changed content\n")?;
    Ok(path)
}

/// Scenario: a clone with `count` local commits not pushed to its origin
pub fn ahead_repo(workspace: &TestWorkspace, relative: &str, count: usize) -> Result<PathBuf> {
    let origin = init_repo_with_commit(&workspace.outside_path(&format!("{relative}-origin")))?;
    let path = clone_repo(&origin, &workspace.repo_path(relative))?;
    for n in 0..count {
        commit_file(&path, &format!("local{n}.txt"), "local\n", &format!("Local change {n}"))?;
    }
    Ok(path)
}

/// Scenario: clean working tree with one stash entry
pub fn stashed_repo(workspace: &TestWorkspace, relative: &str) -> Result<PathBuf> {
    let path = init_repo_with_commit(&workspace.repo_path(relative))?;
    create_file(&path, "README.md", "work in progress\n")?;
    stash(&path)?;
    Ok(path)
}

/// Scenario: tag `tag_name` followed by `count` further commits
pub fn tagged_repo(
    workspace: &TestWorkspace,
    relative: &str,
    tag_name: &str,
    count: usize,
) -> Result<PathBuf> {
    let path = init_repo_with_commit(&workspace.repo_path(relative))?;
    tag(&path, tag_name)?;
    for n in 0..count {
        commit_file(&path, &format!("feature{n}.txt"), "feature\n", &format!("Feature {n}"))?;
    }
    Ok(path)
}
