//! Template system for the report output.
//!
//! Every line the report prints comes from a named [`Template`] in [`TEMPLATES`].
//! A template is plain text with `{placeholder}` slots and an optional color for
//! the whole line. Rendering is a single pass over the template text.
//!
//! # Public API
//! - [`Template`]: template text plus line color
//! - [`Templates`] / [`TEMPLATES`]: all report templates
//! - [`TemplateContext`]: values for the placeholders
//! - [`render_template`]: rendering with colors
//! - [`render_template_plain`]: rendering without colors, for tests
//! - [`strip_ansi_codes`]: removal of color escape sequences
//!
//! # Placeholders
//! `{repo_path}` (yellow), `{branch_name}` (cyan), `{stash}`, `{commit}`,
//! `{tag_name}`, `{count}`, `{total}`. Unknown placeholders are kept verbatim.

use crate::core::colors::{colorize, Color};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub text: &'static str,
    pub color: Option<Color>,
}

impl Template {
    pub const fn plain(text: &'static str) -> Self {
        Self { text, color: None }
    }

    pub const fn colored(text: &'static str, color: Color) -> Self {
        Self {
            text,
            color: Some(color),
        }
    }
}

/// Template definitions for all report output
pub struct Templates {
    // Per-repository header
    pub repo_header: Template,
    pub processing: Template,

    // Details
    pub stashes_label: Template,
    pub stash_line: Template,
    pub untracked: Template,
    pub unstaged: Template,
    pub outgoing: Template,
    pub tag_commit_line: Template,
    pub tag_notice: Template,

    // Run level
    pub summary: Template,
    pub prompt: Template,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    repo_header: Template::plain("cd {repo_path}; git status  # {branch_name}"),
    processing: Template::plain("Checking {repo_path}"),
    stashes_label: Template::colored("STASHES:", Color::Yellow),
    stash_line: Template::plain("  {stash}"),
    untracked: Template::colored("Has untracked files", Color::Red),
    unstaged: Template::colored("Has Changes not staged for commit", Color::Yellow),
    outgoing: Template::colored("Has commits to push: {count}", Color::Red),
    tag_commit_line: Template::colored("  ➤ {commit}", Color::Cyan),
    tag_notice: Template::colored("Commits above tag {tag_name}", Color::Magenta),
    summary: Template::colored("OK. {count} of {total} repos dirty", Color::Green),
    prompt: Template::colored("Press [ENTER] to continue. CTRL-C to abort.", Color::Blue),
};

/// Context for template rendering
#[derive(Debug, Default)]
pub struct TemplateContext<'a> {
    pub repo_path: Option<&'a str>,
    pub branch_name: Option<&'a str>,
    pub stash: Option<&'a str>,
    pub commit: Option<&'a str>,
    pub tag_name: Option<&'a str>,
    pub count: Option<usize>,
    pub total: Option<usize>,
}

/// Render a template with context and apply colors
pub fn render_template(template: &Template, context: &TemplateContext) -> String {
    let estimated_capacity = template.text.len()
        + context.repo_path.map_or(0, str::len)
        + context.branch_name.map_or(0, str::len)
        + context.stash.map_or(0, str::len)
        + context.commit.map_or(0, str::len)
        + context.tag_name.map_or(0, str::len)
        + 32; // numbers and color codes

    let mut result = String::with_capacity(estimated_capacity);
    render_template_single_pass(template.text, context, &mut result);

    match template.color {
        Some(color) => colorize(color, &result).to_string(),
        None => result,
    }
}

/// Render template without colors for testing
pub fn render_template_plain(template: &Template, context: &TemplateContext) -> String {
    strip_ansi_codes(&render_template(template, context))
}

fn render_template_single_pass(template: &str, context: &TemplateContext, output: &mut String) {
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find('}') else {
            // No closing brace, treat the remainder as literal
            output.push_str(&rest[open..]);
            return;
        };

        let placeholder = &after_open[..close];
        if !write_placeholder(placeholder, context, output) {
            output.push('{');
            output.push_str(placeholder);
            output.push('}');
        }
        rest = &after_open[close + 1..];
    }

    output.push_str(rest);
}

/// Writes the value for `placeholder`; false if the placeholder is unknown
fn write_placeholder(placeholder: &str, context: &TemplateContext, output: &mut String) -> bool {
    match placeholder {
        "repo_path" => {
            if let Some(value) = context.repo_path {
                let _ = write!(output, "{}", colorize(Color::Yellow, value));
            }
        }
        "branch_name" => {
            if let Some(value) = context.branch_name {
                let _ = write!(output, "{}", colorize(Color::Cyan, value));
            }
        }
        "stash" => output.push_str(context.stash.unwrap_or_default()),
        "commit" => output.push_str(context.commit.unwrap_or_default()),
        "tag_name" => output.push_str(context.tag_name.unwrap_or_default()),
        "count" => {
            if let Some(value) = context.count {
                let _ = write!(output, "{value}");
            }
        }
        "total" => {
            if let Some(value) = context.total {
                let _ = write!(output, "{value}");
            }
        }
        _ => return false,
    }
    true
}

/// Strip ANSI color codes
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next(); // consume '['
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break; // End of escape sequence
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_repo_header() {
        let context = TemplateContext {
            repo_path: Some("/home/me/code/api"),
            branch_name: Some("main"),
            ..Default::default()
        };
        let result = render_template_plain(&TEMPLATES.repo_header, &context);
        assert_eq!(result, "cd /home/me/code/api; git status  # main");
    }

    #[test]
    fn test_render_outgoing() {
        let context = TemplateContext {
            count: Some(3),
            ..Default::default()
        };
        assert_eq!(
            render_template_plain(&TEMPLATES.outgoing, &context),
            "Has commits to push: 3"
        );
    }

    #[test]
    fn test_render_summary() {
        let context = TemplateContext {
            count: Some(0),
            total: Some(12),
            ..Default::default()
        };
        assert_eq!(
            render_template_plain(&TEMPLATES.summary, &context),
            "OK. 0 of 12 repos dirty"
        );
    }

    #[test]
    fn test_render_tag_lines() {
        let context = TemplateContext {
            commit: Some("1a2b3c4 Fix parser"),
            tag_name: Some("v1.0"),
            ..Default::default()
        };
        assert_eq!(
            render_template_plain(&TEMPLATES.tag_commit_line, &context),
            "  ➤ 1a2b3c4 Fix parser"
        );
        assert_eq!(
            render_template_plain(&TEMPLATES.tag_notice, &context),
            "Commits above tag v1.0"
        );
    }

    #[test]
    fn test_stash_line_is_verbatim() {
        let context = TemplateContext {
            stash: Some("stash@{0}: WIP on main: 1a2b3c4 {braces} kept"),
            ..Default::default()
        };
        assert_eq!(
            render_template_plain(&TEMPLATES.stash_line, &context),
            "  stash@{0}: WIP on main: 1a2b3c4 {braces} kept"
        );
    }

    #[test]
    fn test_unknown_placeholder_kept() {
        let mut output = String::new();
        render_template_single_pass("Hello {name}!", &TemplateContext::default(), &mut output);
        assert_eq!(output, "Hello {name}!");
    }

    #[test]
    fn test_malformed_placeholder_kept() {
        let mut output = String::new();
        render_template_single_pass("Hello {incomplete", &TemplateContext::default(), &mut output);
        assert_eq!(output, "Hello {incomplete");
    }

    #[test]
    fn test_missing_values_render_empty() {
        let mut output = String::new();
        render_template_single_pass("[{count}][{tag_name}]", &TemplateContext::default(), &mut output);
        assert_eq!(output, "[][]");
    }

    #[test]
    fn test_strip_ansi_codes() {
        assert_eq!(
            strip_ansi_codes("\x1b[31mHas untracked files\x1b[0m"),
            "Has untracked files"
        );
    }

    #[test]
    fn test_strip_ansi_codes_plain_text() {
        assert_eq!(strip_ansi_codes("no colors here"), "no colors here");
    }
}
