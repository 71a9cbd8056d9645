//! git-status-of-many - report unsaved and unpushed work across many local git repositories.
//!
//! The crate is a single sequential pipeline: read the settings, discover repositories
//! under the configured root, run read-only `git` queries in each, parse the output into
//! a [`RepositoryStatus`] and print the repositories that have something to show.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, and the whole
//! pipeline is driven by [`commands::execute_report`].

pub mod commands;
pub mod core;

pub use crate::core::{
    collect_status,
    // Color system
    colorize,
    discover_repositories,
    parse_status_lines,
    render_repository,
    render_template,
    render_template_plain,
    strip_ansi_codes,

    Color,
    // Git queries
    GitRepo,
    // Settings and options
    Options,
    ParsedStatus,
    RepoPatterns,
    RepoQueries,
    // Status records
    RepositoryStatus,
    RepositoryStatusBuilder,
    Result,
    Settings,
    // Error handling
    StatusOfManyError,

    Template,
    TemplateContext,
    Templates,
    TEMPLATES,
};
