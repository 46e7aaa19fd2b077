use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Run `git <args>` inside `dir` and capture its output.
///
/// Only spawn failures (git missing, dir gone) are errors here; a nonzero
/// exit from git itself is reported through the returned [`Output`] so each
/// caller can decide whether it matters.
fn git(dir: &Path, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .with_context(|| format!("failed to run `git {}`", args.join(" ")))
}

/// Check whether the `git` binary is invocable at all.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// Check whether `dir` is itself the top of a git repository.
///
/// Probes for a `.git` entry directly under `dir` instead of asking
/// `git rev-parse`, which would also match any parent repository.
pub fn is_repo(dir: &Path) -> bool {
    dir.join(".git").exists()
}

/// Initialize a new repository in `dir`.
///
/// # Errors
/// Returns an error if git cannot be spawned or `git init` fails.
pub fn init_repo(dir: &Path) -> Result<()> {
    let out = git(dir, &["init"])?;
    if !out.status.success() {
        anyhow::bail!("git init failed: {}", String::from_utf8_lossy(&out.stderr).trim());
    }
    Ok(())
}

/// Check whether the repository has at least one commit.
pub fn has_commit(dir: &Path) -> Result<bool> {
    let out = git(dir, &["rev-parse", "--verify", "HEAD"])?;
    Ok(out.status.success())
}

/// Stage every tracked and untracked file (`git add -A`).
///
/// # Errors
/// Returns an error if staging fails.
pub fn stage_all(dir: &Path) -> Result<()> {
    let out = git(dir, &["add", "-A"])?;
    if !out.status.success() {
        anyhow::bail!("git add -A failed: {}", String::from_utf8_lossy(&out.stderr).trim());
    }
    Ok(())
}

/// Attempt a commit with the given message.
///
/// Failure is not an error: "nothing to commit" is an expected outcome when
/// the ignore rules leave the staging area empty, and the caller tolerates
/// it. Returns `true` when a commit was created.
pub fn commit(dir: &Path, message: &str) -> Result<bool> {
    let out = git(dir, &["commit", "-m", message])?;
    Ok(out.status.success())
}

/// The current branch name, trimmed. Empty in detached-HEAD state (git
/// prints nothing for `--show-current` there); an unborn branch still
/// reports its name.
pub fn current_branch(dir: &Path) -> Result<String> {
    let out = git(dir, &["branch", "--show-current"])?;
    Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
}

/// Rename (or create) the current branch as `name`, moving history onto it.
///
/// Uses `git branch -M`, which is safe on a branch that already has the
/// target name and also works on an unborn HEAD.
///
/// # Errors
/// Returns an error if the rename fails.
pub fn rename_branch(dir: &Path, name: &str) -> Result<()> {
    let out = git(dir, &["branch", "-M", name])?;
    if !out.status.success() {
        anyhow::bail!(
            "git branch -M {} failed: {}",
            name,
            String::from_utf8_lossy(&out.stderr).trim()
        );
    }
    Ok(())
}

/// Check whether a remote with this name is configured.
pub fn has_remote(dir: &Path, name: &str) -> Result<bool> {
    let out = git(dir, &["remote", "get-url", name])?;
    Ok(out.status.success())
}

/// Add a named remote pointing at `url`.
///
/// Callers are expected to check [`has_remote`] first; an existing remote
/// is never overwritten by the workflow.
///
/// # Errors
/// Returns an error if `git remote add` fails.
pub fn add_remote(dir: &Path, name: &str, url: &str) -> Result<()> {
    let out = git(dir, &["remote", "add", name, url])?;
    if !out.status.success() {
        anyhow::bail!(
            "git remote add {} failed: {}",
            name,
            String::from_utf8_lossy(&out.stderr).trim()
        );
    }
    Ok(())
}

/// Push `branch` to `remote` with upstream tracking (`git push -u`).
///
/// git's own output is forwarded to stderr so the user sees what the push
/// actually did. Returns `true` on success; a failed push is reported as
/// `false` rather than an error so the caller can attach guidance.
pub fn push_upstream(dir: &Path, remote: &str, branch: &str) -> Result<bool> {
    let out = git(dir, &["push", "-u", remote, branch])?;
    if !out.stdout.is_empty() {
        eprint!("{}", String::from_utf8_lossy(&out.stdout));
    }
    if !out.stderr.is_empty() {
        eprint!("{}", String::from_utf8_lossy(&out.stderr));
    }
    Ok(out.status.success())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::tempdir;

    /// Give the test repo an identity so commits work without global config.
    fn set_identity(dir: &Path) {
        git(dir, &["config", "user.name", "test"]).unwrap();
        git(dir, &["config", "user.email", "test@example.com"]).unwrap();
    }

    /// Repo with one commit on `main`, ready to push somewhere.
    fn repo_with_commit() -> tempfile::TempDir {
        let td = tempdir().unwrap();
        init_repo(td.path()).unwrap();
        set_identity(td.path());
        fs::write(td.path().join("a.txt"), "hello").unwrap();
        stage_all(td.path()).unwrap();
        assert!(commit(td.path(), "first").unwrap());
        rename_branch(td.path(), "main").unwrap();
        td
    }

    #[test]
    #[serial]
    fn init_creates_repo_and_is_repo_detects_it() {
        if !git_available() {
            return;
        }
        let td = tempdir().unwrap();
        assert!(!is_repo(td.path()));
        init_repo(td.path()).unwrap();
        assert!(is_repo(td.path()));
    }

    #[test]
    #[serial]
    fn fresh_repo_has_no_commit_but_reports_its_unborn_branch() {
        if !git_available() {
            return;
        }
        let td = tempdir().unwrap();
        init_repo(td.path()).unwrap();
        assert!(!has_commit(td.path()).unwrap());
        // the exact name depends on init.defaultBranch, but there is one
        assert!(!current_branch(td.path()).unwrap().is_empty());
    }

    #[test]
    #[serial]
    fn stage_and_commit_then_rename_branch() {
        if !git_available() {
            return;
        }
        let td = tempdir().unwrap();
        init_repo(td.path()).unwrap();
        set_identity(td.path());

        fs::write(td.path().join("a.txt"), "hello").unwrap();
        stage_all(td.path()).unwrap();
        assert!(commit(td.path(), "first").unwrap());
        assert!(has_commit(td.path()).unwrap());

        rename_branch(td.path(), "main").unwrap();
        assert_eq!(current_branch(td.path()).unwrap(), "main");
        // renaming to the same name again is a no-op
        rename_branch(td.path(), "main").unwrap();
    }

    #[test]
    #[serial]
    fn commit_with_nothing_staged_is_tolerated() {
        if !git_available() {
            return;
        }
        let td = tempdir().unwrap();
        init_repo(td.path()).unwrap();
        set_identity(td.path());

        stage_all(td.path()).unwrap();
        assert!(!commit(td.path(), "empty").unwrap());
        assert!(!has_commit(td.path()).unwrap());
    }

    #[test]
    #[serial]
    fn remote_add_and_lookup() {
        if !git_available() {
            return;
        }
        let td = tempdir().unwrap();
        init_repo(td.path()).unwrap();

        assert!(!has_remote(td.path(), "origin").unwrap());
        add_remote(td.path(), "origin", "https://github.com/alice/demo.git").unwrap();
        assert!(has_remote(td.path(), "origin").unwrap());

        // adding the same remote twice is an error at the git level
        assert!(add_remote(td.path(), "origin", "https://github.com/bob/demo.git").is_err());
    }

    #[test]
    #[serial]
    fn push_upstream_succeeds_against_a_local_bare_remote() {
        if !git_available() {
            return;
        }
        let src = repo_with_commit();
        let remote = tempdir().unwrap();
        git(remote.path(), &["init", "--bare"]).unwrap();

        add_remote(src.path(), "origin", remote.path().to_str().unwrap()).unwrap();
        assert!(push_upstream(src.path(), "origin", "main").unwrap());

        let out = git(remote.path(), &["rev-list", "--count", "main"]).unwrap();
        assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "1");
    }

    #[test]
    #[serial]
    fn push_upstream_reports_failure_for_a_missing_remote() {
        if !git_available() {
            return;
        }
        let src = repo_with_commit();
        let gone = src.path().join("no-such-remote");
        add_remote(src.path(), "origin", gone.to_str().unwrap()).unwrap();

        assert!(!push_upstream(src.path(), "origin", "main").unwrap());
    }
}
