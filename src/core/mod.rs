//! Core functionality for the git-status-of-many tool.
//!
//! This module provides the pipeline stages (settings, discovery, status
//! collection, rendering) and the shared error and output helpers.

pub mod collector;
pub mod colors;
pub mod config;
pub mod dirs;
pub mod discovery;
pub mod error;
pub mod git;
pub mod options;
pub mod output;
pub mod prompt;
pub mod render;
pub mod repo_status;
pub mod status_parser;
pub mod templates;

// === Error handling ===
pub use error::{Result, StatusOfManyError};

// === Settings and options ===
// Immutable values built once per run
pub use config::{RepoPatterns, Settings};
pub use options::Options;

// === Discovery ===
pub use discovery::discover_repositories;

// === Git queries and status ===
// Process-backed queries, the pure output parser and the finalized record
pub use collector::collect_status;
pub use git::{GitRepo, RepoQueries};
pub use repo_status::{RepositoryStatus, RepositoryStatusBuilder};
pub use status_parser::{parse_status_lines, ParsedStatus};

// === Rendering ===
pub use colors::{colorize, Color};
pub use render::render_repository;
pub use templates::{
    render_template, render_template_plain, strip_ansi_codes, Template, TemplateContext,
    Templates, TEMPLATES,
};

// === Output formatting ===
pub use output::{print_error, print_error_with_hint, report_failure};
