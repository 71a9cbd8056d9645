use crate::core::{
    collector::collect_status,
    config::Settings,
    discovery::discover_repositories,
    error::Result,
    git::GitRepo,
    options::Options,
    prompt,
    render::render_repository,
    templates::{render_template, TemplateContext, TEMPLATES},
};
use std::io::{self, Write};
use std::time::Instant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Repositories that had something to show
    pub dirty: usize,
    pub total: usize,
}

pub fn execute_report(settings: &Settings, options: &Options) -> Result<ReportSummary> {
    let mut out = io::stdout();
    report_repositories(&mut out, settings, options)
}

/// Discover, collect and print every repository in path order, then the
/// summary line
pub fn report_repositories<W: Write>(
    out: &mut W,
    settings: &Settings,
    options: &Options,
) -> Result<ReportSummary> {
    let started = Instant::now();
    let repos = discover_repositories(settings, options);
    let mut summary = ReportSummary {
        dirty: 0,
        total: repos.len(),
    };

    for path in &repos {
        if options.verbose {
            let repo_path = path.display().to_string();
            let context = TemplateContext {
                repo_path: Some(&repo_path),
                ..Default::default()
            };
            writeln!(out, "{}", render_template(&TEMPLATES.processing, &context))?;
        }

        let status = collect_status(&GitRepo::new(path), path, options);

        if render_repository(out, &status, options)? {
            summary.dirty += 1;

            if options.pause {
                out.flush()?;
                prompt::question();
            }
        }
    }

    let context = TemplateContext {
        count: Some(summary.dirty),
        total: Some(summary.total),
        ..Default::default()
    };
    writeln!(out, "{}", render_template(&TEMPLATES.summary, &context))?;
    out.flush()?;

    log::debug!(
        "Checked {} repositories in {:?}",
        summary.total,
        started.elapsed()
    );

    Ok(summary)
}
