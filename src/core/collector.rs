//! Status collection for one repository.
//!
//! Every query is best effort: a failing `git` invocation is logged and
//! treated as empty output, so the repository is still reported with default
//! values for the affected fields.

use crate::core::error::Result;
use crate::core::git::RepoQueries;
use crate::core::options::Options;
use crate::core::repo_status::RepositoryStatus;
use crate::core::status_parser::parse_latest_tag;
use std::path::Path;

pub fn collect_status<Q: RepoQueries>(repo: &Q, path: &Path, options: &Options) -> RepositoryStatus {
    let mut builder = RepositoryStatus::builder(path)
        .status_lines(lines_or_empty(repo.status(), "status", path));

    if options.show_stashes {
        builder = builder.stash_lines(lines_or_empty(repo.stash_list(), "stash list", path));
    }

    if options.show_commits_after_tag {
        let decorations = lines_or_empty(repo.decorated_log(), "log --decorate", path);

        if let Some(tag) = parse_latest_tag(&decorations) {
            log::debug!("{}: latest tag is {tag}", path.display());
            let commits = commits_since(repo, &tag, path);
            builder = builder.latest_tag(tag).commits_since_tag(commits);
        }
    }

    builder.build()
}

fn commits_since<Q: RepoQueries>(repo: &Q, tag: &str, path: &Path) -> Vec<String> {
    let tagged = lines_or_empty(repo.rev_list(tag), "rev-list", path);

    match tagged.first() {
        Some(commit) => lines_or_empty(repo.log_since(commit.trim()), "log", path),
        None => Vec::new(),
    }
}

fn lines_or_empty(result: Result<Vec<String>>, query: &str, path: &Path) -> Vec<String> {
    result.unwrap_or_else(|e| {
        log::debug!("git {query} gave no output for {}: {e}", path.display());
        Vec::new()
    })
}
