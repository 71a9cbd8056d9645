//! External `git` invocations.
//!
//! [`GitRepo`] runs `git` as a child process with the repository as working
//! directory and captures standard output as lines. Arguments are always passed
//! as a list, never through a shell.
//!
//! # Public API
//! - [`RepoQueries`]: the read-only queries the status collector needs
//! - [`GitRepo`]: implementation backed by the `git` binary
//! - [`output_lines`]: splitting of captured output into lines

use crate::core::error::{Result, StatusOfManyError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Read-only queries issued against one repository.
///
/// Each query returns the output lines in order; an empty vector means the
/// command printed nothing.
pub trait RepoQueries {
    fn status(&self) -> Result<Vec<String>>;
    fn stash_list(&self) -> Result<Vec<String>>;
    /// One line of ref decorations per decorated commit, newest first
    fn decorated_log(&self) -> Result<Vec<String>>;
    /// Commit id the given revision points at
    fn rev_list(&self, revision: &str) -> Result<Vec<String>>;
    /// One-line summaries of the commits in `since..HEAD`
    fn log_since(&self, since: &str) -> Result<Vec<String>>;
}

pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Execute a git command in the repository's working directory
    fn execute_git_command(&self, args: &[&str]) -> Result<Vec<String>> {
        log::debug!("git {} (in {})", args.join(" "), self.path.display());

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .env("LC_ALL", "C")
            .env_remove("GIT_DIR")
            .env_remove("GIT_WORK_TREE")
            .output()
            .map_err(|e| StatusOfManyError::git_spawn_failed(&self.path, args, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StatusOfManyError::git_command_failed(
                &self.path,
                args,
                stderr.trim(),
            ));
        }

        Ok(output_lines(&output.stdout))
    }
}

impl RepoQueries for GitRepo {
    fn status(&self) -> Result<Vec<String>> {
        self.execute_git_command(&["status", "--long"])
    }

    fn stash_list(&self) -> Result<Vec<String>> {
        self.execute_git_command(&["stash", "list"])
    }

    fn decorated_log(&self) -> Result<Vec<String>> {
        self.execute_git_command(&[
            "log",
            "--simplify-by-decoration",
            "--decorate=short",
            "--pretty=format:%D",
        ])
    }

    fn rev_list(&self, revision: &str) -> Result<Vec<String>> {
        self.execute_git_command(&["rev-list", "-n", "1", revision])
    }

    fn log_since(&self, since: &str) -> Result<Vec<String>> {
        let range = format!("{since}..HEAD");
        self.execute_git_command(&["log", "--oneline", "--no-decorate", &range])
    }
}

/// Split captured output into lines, dropping surrounding whitespace of the
/// whole text so that empty output yields no lines at all
pub fn output_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .trim()
        .lines()
        .map(str::to_string)
        .collect()
}
