//! Report rendering for one repository.
//!
//! Output goes to any [`Write`] so the report can be captured in tests; the
//! binary passes a locked stdout.

use crate::core::options::Options;
use crate::core::repo_status::RepositoryStatus;
use crate::core::templates::{render_template, TemplateContext, TEMPLATES};
use std::io::{self, Write};

/// Most commits listed above the latest tag
pub const MAX_TAG_COMMITS: usize = 21;

/// Print the block for `status`. Returns whether anything was printed.
pub fn render_repository<W: Write>(
    out: &mut W,
    status: &RepositoryStatus,
    options: &Options,
) -> io::Result<bool> {
    if !status.is_noteworthy(options) {
        return Ok(false);
    }

    let repo_path = status.path().display().to_string();
    let header = TemplateContext {
        repo_path: Some(&repo_path),
        branch_name: Some(status.branch_name()),
        ..Default::default()
    };
    writeln!(out, "{}", render_template(&TEMPLATES.repo_header, &header))?;

    if options.silent {
        return Ok(true);
    }

    let stashes = status.raw_stash_lines();
    if options.show_stashes && !stashes.is_empty() {
        writeln!(
            out,
            "{}",
            render_template(&TEMPLATES.stashes_label, &TemplateContext::default())
        )?;
        for stash in stashes {
            let context = TemplateContext {
                stash: Some(stash),
                ..Default::default()
            };
            writeln!(out, "{}", render_template(&TEMPLATES.stash_line, &context))?;
        }
    }

    if status.has_untracked_files() {
        writeln!(
            out,
            "{}",
            render_template(&TEMPLATES.untracked, &TemplateContext::default())
        )?;
    }

    if status.has_unstaged_changes() {
        writeln!(
            out,
            "{}",
            render_template(&TEMPLATES.unstaged, &TemplateContext::default())
        )?;
    }

    if status.has_outgoing_commits() {
        let context = TemplateContext {
            count: Some(status.outgoing_commit_count()),
            ..Default::default()
        };
        writeln!(out, "{}", render_template(&TEMPLATES.outgoing, &context))?;
    }

    if options.show_commits_after_tag {
        if let (Some(tag), Some(commits)) = (status.latest_tag(), status.commits_since_tag()) {
            render_commits_above_tag(out, tag, commits)?;
        }
    }

    writeln!(out)?;
    Ok(true)
}

fn render_commits_above_tag<W: Write>(out: &mut W, tag: &str, commits: &[String]) -> io::Result<()> {
    for commit in commits.iter().take(MAX_TAG_COMMITS) {
        let context = TemplateContext {
            commit: Some(commit),
            ..Default::default()
        };
        writeln!(out, "{}", render_template(&TEMPLATES.tag_commit_line, &context))?;
    }

    let context = TemplateContext {
        tag_name: Some(tag),
        ..Default::default()
    };
    writeln!(out, "{}", render_template(&TEMPLATES.tag_notice, &context))
}
