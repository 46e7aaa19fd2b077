//! GitHub CLI (`gh`) integration.
//!
//! The hosting CLI is strictly optional: when it is missing or not
//! authenticated, the publish workflow degrades to the manual remote+push
//! strategy instead of aborting. Only exit statuses are interpreted.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use crate::config::Visibility;

/// Usability of the `gh` CLI for this run, decided once up front.
///
/// Keeping this a plain value (rather than probing inside the publish
/// step) lets the strategy selection be driven explicitly, with
/// [`probe`] supplying the real state in production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhState {
    /// Installed and authenticated; the CLI-assisted strategy applies.
    Ready,
    /// Installed but `gh auth status` failed; hint and fall back.
    Unauthenticated,
    /// Not invocable at all; go straight to the manual strategy.
    Absent,
}

/// Probe the `gh` binary and its credentials.
pub fn probe() -> GhState {
    if !gh_available() {
        GhState::Absent
    } else if gh_authenticated() {
        GhState::Ready
    } else {
        GhState::Unauthenticated
    }
}

/// Check whether the `gh` binary is invocable.
fn gh_available() -> bool {
    Command::new("gh")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// Check whether `gh` holds valid credentials (`gh auth status`).
fn gh_authenticated() -> bool {
    Command::new("gh")
        .args(["auth", "status"])
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// Create `<owner>/<repo>` on GitHub from the local source in `dir`,
/// wiring it up as the `origin` remote and pushing in the same call.
///
/// Returns `true` when creation and push both succeeded. A `false` return
/// (repo already exists, name collision, transient API failure) sends the
/// caller down the manual strategy.
///
/// # Errors
/// Returns an error only if `gh` cannot be spawned.
pub fn create_and_push(
    dir: &Path,
    owner: &str,
    repo: &str,
    visibility: Visibility,
) -> Result<bool> {
    let slug = format!("{}/{}", owner, repo);
    let out = Command::new("gh")
        .args([
            "repo",
            "create",
            &slug,
            visibility.as_flag(),
            "--source=.",
            "--remote=origin",
            "--push",
        ])
        .current_dir(dir)
        .output()
        .context("failed to run `gh repo create`")?;

    if !out.status.success() && !out.stderr.is_empty() {
        eprint!("{}", String::from_utf8_lossy(&out.stderr));
    }
    Ok(out.status.success())
}
