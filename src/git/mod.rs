//! Git integration layer.
//!
//! This module wraps the actual backend implementation (`cli_backend`) and
//! re-exports only the stable public API used by the publish workflow.
//!
//! The backend shells out to the system `git` binary rather than linking a
//! git library: the system git already handles credentials, SSH keys, and
//! proxies for remote operations, and the workflow only ever needs exit
//! statuses plus a trimmed line of stdout. Hiding that detail here keeps
//! the rest of the codebase free to swap backends later.

mod cli_backend;

pub use cli_backend::{
    add_remote, commit, current_branch, git_available, has_commit, has_remote, init_repo, is_repo,
    push_upstream, rename_branch, stage_all,
};
