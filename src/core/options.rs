/// Report switches decided once on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub verbose: bool,
    pub silent: bool,
    pub show_stashes: bool,
    pub show_commits_after_tag: bool,
    pub favorites_only: bool,
    pub pause: bool,
}
