use clap::Parser;
use git_status_of_many::commands::execute_report;
use git_status_of_many::core::{
    config::Settings,
    dirs::default_settings_path,
    error::Result,
    options::Options,
    output::report_failure,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-status-of-many")]
#[command(about = "Show which of your many git repositories have uncommitted, unpushed or untagged work")]
#[command(version)]
struct Cli {
    /// Print each repository path as it is processed
    #[arg(short, long)]
    verbose: bool,

    /// Print only the header line of each repository
    #[arg(short, long)]
    silent: bool,

    /// Include stashes
    #[arg(short = 'a', long = "show-stashes")]
    show_stashes: bool,

    /// Include commits made after the latest tag
    #[arg(short = 't', long = "above-tag-commits")]
    above_tag_commits: bool,

    /// Only look at repositories matching the favorite patterns
    #[arg(short = 'f', long = "fav-repos")]
    fav_repos: bool,

    /// Wait for ENTER after each repository with something to show
    #[arg(long)]
    pause: bool,

    /// Settings file (default: ./settings.yml, then the user config directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            verbose: self.verbose,
            silent: self.silent,
            show_stashes: self.show_stashes,
            show_commits_after_tag: self.above_tag_commits,
            favorites_only: self.fav_repos,
            pause: self.pause,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    let default_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&cli) {
        std::process::exit(report_failure(&e));
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings_path = match &cli.config {
        Some(path) => path.clone(),
        None => default_settings_path()?,
    };

    let settings = Settings::load(&settings_path)?;
    let summary = execute_report(&settings, &cli.options())?;

    log::debug!("{} of {} repositories dirty", summary.dirty, summary.total);
    Ok(())
}
