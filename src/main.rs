//! # ghpub
//!
//! **ghpub** bootstraps the current directory into a git repository and
//! publishes it to GitHub.
//!
//! What a run does:
//! - Generate a default `.gitignore` (unless one exists, or `--force` is set)
//! - `git init` if the directory is not yet a repository
//! - Create an initial commit if none exists
//! - Normalize the primary branch to `main`
//! - Create the remote repository with an authenticated `gh` and push, or
//!   fall back to configuring an `origin` remote and pushing manually
//!
//! This CLI is built with [clap](https://docs.rs/clap).

use anyhow::Result;
use clap::Parser;
use ghpub::{Settings, Visibility, cmd_publish};

/// Command-line interface definition.
///
/// Parsed using `clap` derive macros. There are no subcommands; the whole
/// tool is one workflow configured through flags.
#[derive(Parser, Debug)]
#[command(
    name = "ghpub",
    version,
    about = "ghpub - bootstrap a local git repository and publish it to GitHub"
)]
struct Cli {
    /// GitHub account or organization that owns the repository
    #[arg(long)]
    owner: Option<String>,

    /// Repository name (defaults to the current directory's name)
    #[arg(long)]
    repo_name: Option<String>,

    /// Visibility of the created repository
    #[arg(long, value_enum)]
    visibility: Option<Visibility>,

    /// Regenerate .gitignore even if it already exists
    #[arg(long)]
    force: bool,
}

/// CLI entry point.
///
/// Parses arguments with `clap`, resolves run settings against the optional
/// config file, and executes the publish workflow. A returned error exits
/// the process with status 1.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let dir = std::env::current_dir()?;
    let settings = Settings::resolve(cli.owner, cli.repo_name, cli.visibility, cli.force, &dir)?;
    cmd_publish(&dir, &settings)
}
