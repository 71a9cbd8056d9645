//! Git repository management and setup utilities
//!
//! Provides a temporary workspace holding a scan root plus helpers for
//! creating repositories in specific states underneath it.

#![allow(dead_code)]

use git_status_of_many::core::error::{Result, StatusOfManyError};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Temporary directory holding the scan root, remotes and the settings file.
/// The TempDir must be kept alive for the duration of the test.
pub struct TestWorkspace {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().join("repos");
        fs::create_dir_all(&root)?;
        Ok(Self { temp_dir, root })
    }

    /// Path of `relative` inside the scan root
    pub fn repo_path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Path outside the scan root, for remotes
    pub fn outside_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Writes a YAML settings file pointing at the scan root
    pub fn write_settings(&self, favorites: &[&str], excluded: &[&str]) -> Result<PathBuf> {
        let mut content = format!(
            "settings:\n  your_home_of_all_git_repos: \"{}\"\n",
            self.root.display()
        );
        push_list(&mut content, "fav_repos", favorites);
        push_list(&mut content, "exclude_repos", excluded);

        let path = self.temp_dir.path().join("settings.yml");
        fs::write(&path, content)?;
        Ok(path)
    }
}

fn push_list(content: &mut String, key: &str, values: &[&str]) {
    if values.is_empty() {
        return;
    }
    content.push_str(&format!("  {key}:\n"));
    for value in values {
        content.push_str(&format!("    - '{value}'\n"));
    }
}

/// Runs git in `repo_path` and fails on a non-zero exit
pub fn git(repo_path: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .env("LC_ALL", "C")
        .output()?;

    if !output.status.success() {
        return Err(StatusOfManyError::git_command_failed(
            repo_path,
            args,
            String::from_utf8_lossy(&output.stderr).trim(),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Initializes a repository on branch `main` with a local identity
pub fn init_repo(path: &Path) -> Result<PathBuf> {
    fs::create_dir_all(path)?;
    git(path, &["init", "--quiet"])?;
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    configure_identity(path)?;
    Ok(path.to_path_buf())
}

/// Sets git config to avoid prompts and signing during tests
pub fn configure_identity(path: &Path) -> Result<()> {
    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;
    git(path, &["config", "commit.gpgsign", "false"])?;
    git(path, &["config", "tag.gpgsign", "false"])?;
    Ok(())
}

/// Initializes a repository with one committed file
pub fn init_repo_with_commit(path: &Path) -> Result<PathBuf> {
    init_repo(path)?;
    commit_file(path, "README.md", "initial content\n", "Initial commit")?;
    Ok(path.to_path_buf())
}

pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content)?;
    Ok(())
}

pub fn commit_file(repo_path: &Path, filename: &str, content: &str, message: &str) -> Result<()> {
    create_file(repo_path, filename, content)?;
    git(repo_path, &["add", filename])?;
    git(repo_path, &["commit", "--quiet", "-m", message])?;
    Ok(())
}

pub fn tag(repo_path: &Path, name: &str) -> Result<()> {
    git(repo_path, &["tag", name])?;
    Ok(())
}

pub fn stash(repo_path: &Path) -> Result<()> {
    git(repo_path, &["stash", "--quiet"])?;
    Ok(())
}

/// Clones `source` into `dest` and configures the clone for committing
pub fn clone_repo(source: &Path, dest: &Path) -> Result<PathBuf> {
    let parent = dest.parent().unwrap_or(dest);
    fs::create_dir_all(parent)?;
    let source = source.to_string_lossy().to_string();
    let target = dest.to_string_lossy().to_string();
    git(parent, &["clone", "--quiet", source.as_str(), target.as_str()])?;
    configure_identity(dest)?;
    Ok(dest.to_path_buf())
}
