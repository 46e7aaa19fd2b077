use anyhow::{Result, bail};
use colored::Colorize;
use std::path::Path;

use crate::config::Settings;
use crate::git;
use crate::host;
use crate::ignore::ensure_ignore_file;
use crate::progress::{finish_err, finish_ok, step};

/// Conventional name every repository published by this tool ends up on.
const PRIMARY_BRANCH: &str = "main";

/// Remote name used by both publish strategies.
const REMOTE_NAME: &str = "origin";

const COMMIT_MESSAGE: &str = "Initial commit";
const FALLBACK_COMMIT_MESSAGE: &str = "chore: initial commit";

/// Run the full publish workflow against `dir`.
///
/// High-level flow:
/// 1. Verify `git` is invocable (fatal if not, before touching anything).
/// 2. Ensure `.gitignore`, the repository, an initial commit, and the
///    `main` branch exist (see [`prepare`]); each step is idempotent.
/// 3. Publish: create the remote repository through an authenticated `gh`
///    and push in one call, or fall back to adding an `origin` remote at
///    the conventional URL and pushing manually.
///
/// Each step prints one status line. The only retries anywhere are the
/// commit-message fallback inside [`prepare`] and the gh-then-manual
/// fallback here; a failed manual push is the end of the road and becomes
/// the process exit status.
pub fn cmd_publish(dir: &Path, settings: &Settings) -> Result<()> {
    if !git::git_available() {
        bail!("git is required but was not found in PATH; install git and retry");
    }
    prepare(dir, settings.force)?;
    publish(dir, settings, host::probe())
}

/// Steps 2-5 of the workflow: ignore file, repository, initial commit,
/// branch normalization. Safe to run repeatedly against the same directory.
///
/// A directory where staging produces nothing (everything ignored, or truly
/// empty) yields no commit; that outcome is tolerated and the workflow
/// continues. See DESIGN.md for why this is not treated as a failure.
pub(crate) fn prepare(dir: &Path, force: bool) -> Result<()> {
    let pb = step("checking .gitignore");
    let wrote = ensure_ignore_file(dir, force)?;
    finish_ok(
        &pb,
        if wrote {
            ".gitignore written with default patterns"
        } else {
            ".gitignore already present, leaving it untouched"
        },
    );

    let pb = step("checking repository");
    if git::is_repo(dir) {
        finish_ok(&pb, "already a git repository");
    } else {
        git::init_repo(dir)?;
        finish_ok(&pb, "initialized empty git repository");
    }

    let pb = step("checking for an initial commit");
    if git::has_commit(dir)? {
        finish_ok(&pb, "commit history exists");
    } else {
        git::stage_all(dir)?;
        let committed =
            git::commit(dir, COMMIT_MESSAGE)? || git::commit(dir, FALLBACK_COMMIT_MESSAGE)?;
        finish_ok(
            &pb,
            if committed {
                "created initial commit"
            } else {
                "nothing to commit"
            },
        );
    }

    let pb = step("normalizing primary branch");
    if git::current_branch(dir)? == PRIMARY_BRANCH {
        finish_ok(&pb, "primary branch is already 'main'");
    } else {
        git::rename_branch(dir, PRIMARY_BRANCH)?;
        finish_ok(&pb, "primary branch set to 'main'");
    }

    Ok(())
}

/// Make sure an `origin` remote exists, pointing at `url` when absent.
///
/// An existing remote is never overwritten, whatever URL it carries.
/// Returns `true` if the remote was added by this call.
pub(crate) fn ensure_remote(dir: &Path, url: &str) -> Result<bool> {
    if git::has_remote(dir, REMOTE_NAME)? {
        return Ok(false);
    }
    git::add_remote(dir, REMOTE_NAME, url)?;
    Ok(true)
}

/// Step 6: publish to GitHub, preferring the `gh` CLI when usable.
///
/// `gh` reflects the probed state of the hosting CLI; [`cmd_publish`]
/// passes in [`host::probe`]'s answer.
fn publish(dir: &Path, settings: &Settings, gh: host::GhState) -> Result<()> {
    match gh {
        host::GhState::Ready => {
            let pb = step("creating repository with gh");
            if host::create_and_push(dir, &settings.owner, &settings.repo_name, settings.visibility)?
            {
                finish_ok(&pb, "repository created and pushed via gh");
                println!("{} {}", "published:".green().bold(), settings.web_url());
                return Ok(());
            }
            finish_err(&pb, "gh repo create failed, falling back to manual remote setup");
        }
        host::GhState::Unauthenticated => {
            println!(
                "{}",
                "gh is installed but not authenticated (run `gh auth login`); using manual remote setup"
                    .yellow()
            );
        }
        host::GhState::Absent => {}
    }

    let url = settings.remote_url();

    let pb = step("configuring origin remote");
    if ensure_remote(dir, &url)? {
        finish_ok(&pb, &format!("origin -> {}", url));
    } else {
        finish_ok(&pb, "origin remote already configured, leaving it untouched");
    }

    let pb = step("pushing 'main' to origin");
    if git::push_upstream(dir, REMOTE_NAME, PRIMARY_BRANCH)? {
        finish_ok(&pb, "pushed with upstream tracking");
        println!("{} {}", "published:".green().bold(), settings.web_url());
        Ok(())
    } else {
        finish_err(&pb, "push failed");
        bail!(
            "push to {} failed. The repository may not exist on GitHub yet: \
             create it at {} (or authenticate gh so it can be created for you) and retry",
            url,
            settings.web_url()
        );
    }
}
