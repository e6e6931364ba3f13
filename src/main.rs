use anyhow::Result;
use clap::Parser;
use seqcommit::{Config, ExcludeMatcher, GitCli};
use std::env;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Commit uncommitted name[.number].extension files as individual git commits, in sequence order",
    long_about = None
)]
struct Args {
    /// Show the rename and commit steps without touching the repository
    #[arg(long)]
    preview: bool,

    /// Skip paths matching this glob (* and ? wildcards, full-path match)
    // A bare `--exclude` surfaces as an empty pattern, which the matcher
    // rejects as a configuration error (exit 1) before any git call.
    #[arg(long, value_name = "GLOB", num_args = 0..=1, default_missing_value = "")]
    exclude: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let exclude = match args.exclude.as_deref() {
        Some(glob) => Some(ExcludeMatcher::new(glob)?),
        None => None,
    };
    let config = Config {
        preview: args.preview,
        exclude,
    };

    let root = env::current_dir()?;
    let vcs = GitCli::new(root.clone());
    seqcommit::run(&vcs, &root, &config)
}
