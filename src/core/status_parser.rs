//! Scraping of human-oriented `git` output.
//!
//! Everything that depends on the exact wording of `git status` and `git log`
//! lives here, as pure functions over captured lines, so it can be tested
//! without spawning processes.

pub const UNKNOWN_BRANCH: &str = "?";

pub const MSG_HAS_COMMITS: &str = "Your branch is ahead of";
pub const MSG_IS_DIRTY: &str = "Changes not staged for commit";
pub const MSG_UNTRACKED: &str = "untracked files";

const BRANCH_MARKER: &str = "branch";
const BRANCH_PREFIX_LEN: usize = "On branch ".len();
const TAG_DECORATION: &str = "tag: ";

/// Fields derived from `git status` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStatus {
    pub branch_name: String,
    pub has_untracked_files: bool,
    pub has_unstaged_changes: bool,
    pub has_outgoing_commits: bool,
    pub outgoing_commit_count: usize,
}

impl Default for ParsedStatus {
    fn default() -> Self {
        Self {
            branch_name: UNKNOWN_BRANCH.to_string(),
            has_untracked_files: false,
            has_unstaged_changes: false,
            has_outgoing_commits: false,
            outgoing_commit_count: 0,
        }
    }
}

pub fn parse_status_lines<S: AsRef<str>>(lines: &[S]) -> ParsedStatus {
    let outgoing_commit_count = parse_outgoing_commit_count(lines);

    ParsedStatus {
        branch_name: parse_branch_name(lines),
        has_untracked_files: lines
            .iter()
            .any(|line| line.as_ref().to_lowercase().contains(MSG_UNTRACKED)),
        has_unstaged_changes: lines
            .iter()
            .any(|line| line.as_ref().contains(MSG_IS_DIRTY)),
        has_outgoing_commits: outgoing_commit_count.is_some(),
        outgoing_commit_count: outgoing_commit_count.unwrap_or(0),
    }
}

/// Branch label from the first line mentioning "branch", or [`UNKNOWN_BRANCH`]
pub fn parse_branch_name<S: AsRef<str>>(lines: &[S]) -> String {
    let Some(line) = lines
        .iter()
        .map(AsRef::as_ref)
        .find(|line| line.contains(BRANCH_MARKER))
    else {
        return UNKNOWN_BRANCH.to_string();
    };

    // Older git prefixes every status line with a comment marker
    let line = line.strip_prefix("# ").unwrap_or(line);
    line.get(BRANCH_PREFIX_LEN..).unwrap_or("").trim().to_string()
}

/// `Some(count)` when the branch is ahead of its upstream.
///
/// The count is whatever follows " by "; without a " by " clause, or when it
/// carries no number, one commit is assumed.
pub fn parse_outgoing_commit_count<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
    let line = lines
        .iter()
        .map(AsRef::as_ref)
        .find(|line| line.contains(MSG_HAS_COMMITS))?;

    let count = line
        .split(" by ")
        .nth(1)
        .and_then(|rest| {
            let digits: String = rest
                .trim_start()
                .chars()
                .take_while(char::is_ascii_digit)
                .collect();
            digits.parse().ok()
        })
        .unwrap_or(1);

    Some(count)
}

/// First tag name in `git log --simplify-by-decoration --pretty=format:%D` output.
///
/// Lines look like `HEAD -> main, tag: v1.2, origin/main`; the first line
/// carrying a `tag: ` decoration is the most recent tag reachable from HEAD.
pub fn parse_latest_tag<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    lines.iter().map(AsRef::as_ref).find_map(|line| {
        line.split(',')
            .map(|decoration| decoration.trim().trim_start_matches('('))
            .find_map(|decoration| decoration.strip_prefix(TAG_DECORATION))
            .map(|tag| tag.trim_end_matches(')').trim().to_string())
            .filter(|tag| !tag.is_empty())
    })
}
