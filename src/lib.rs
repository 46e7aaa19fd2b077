//! Crate entry point for **ghpub**.
//!
//! This library provides the internal implementation for the `ghpub` CLI.
//! Each submodule encapsulates one responsibility (settings resolution,
//! git invocation, ignore-file generation, the publish workflow, etc.).
//! The `pub use` re-exports make selected types and commands accessible
//! directly from the crate root.
//!
//! This file is primarily intended for developers hacking on `ghpub`.

mod config;
mod git;
mod host;
mod ignore;
mod paths;
mod progress;
mod publish;

/// Re-export commonly used types and commands so they can be accessed from `ghpub::*`.
pub use config::{Settings, Visibility};
pub use publish::cmd_publish;
