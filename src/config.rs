use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::paths::config_path;

/// Owner used when neither the CLI flag nor the config file supplies one.
const DEFAULT_OWNER: &str = "octocat";

/// Visibility of the repository created on GitHub.
///
/// Accepted on the command line (`--visibility public|private`) and in
/// `config.toml` (`visibility = "private"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    /// The `gh repo create` flag form, e.g. `--private`.
    pub fn as_flag(self) -> &'static str {
        match self {
            Visibility::Public => "--public",
            Visibility::Private => "--private",
        }
    }
}

/// Optional defaults loaded from `$XDG_CONFIG_HOME/.ghpub/config.toml`
/// (or `~/.config/.ghpub/config.toml`).
///
/// Example TOML:
/// ```toml
/// owner      = "alice"
/// visibility = "private"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub visibility: Option<Visibility>,
}

/// Load `config.toml` if it exists.
///
/// A missing file yields empty [`Defaults`]; a file that exists but cannot
/// be read or parsed is an error (silently ignoring a typo or a permission
/// problem there would surprise).
pub fn load_defaults() -> Result<Defaults> {
    let p = config_path()?;
    let txt = match fs::read_to_string(&p) {
        Ok(txt) => txt,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Defaults::default()),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", p.display()));
        }
    };
    let d: Defaults =
        toml::from_str(&txt).with_context(|| format!("failed to parse {}", p.display()))?;
    Ok(d)
}

/// Fully resolved configuration for one run. Immutable once built.
#[derive(Debug, Clone)]
pub struct Settings {
    pub owner: String,
    pub repo_name: String,
    pub visibility: Visibility,
    pub force: bool,
}

impl Settings {
    /// Merge CLI flags with config-file defaults and built-in fallbacks.
    ///
    /// Precedence per field: CLI flag > `config.toml` > built-in default.
    /// The repository name falls back to the leaf name of `dir`.
    ///
    /// # Errors
    /// - Returns an error if the config file exists but cannot be parsed.
    /// - Returns an error if no repository name can be derived (e.g. the
    ///   directory is a filesystem root).
    pub fn resolve(
        owner: Option<String>,
        repo_name: Option<String>,
        visibility: Option<Visibility>,
        force: bool,
        dir: &Path,
    ) -> Result<Self> {
        let defaults = load_defaults()?;

        let owner = owner
            .or(defaults.owner)
            .unwrap_or_else(|| DEFAULT_OWNER.to_string());
        let repo_name = repo_name
            .or_else(|| {
                dir.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
            })
            .context("cannot derive a repository name from the current directory")?;
        let visibility = visibility
            .or(defaults.visibility)
            .unwrap_or(Visibility::Public);

        Ok(Settings {
            owner,
            repo_name,
            visibility,
            force,
        })
    }

    /// The conventional clone URL: `https://github.com/<owner>/<repo>.git`.
    ///
    /// This is the only source of truth for the manual publish strategy.
    pub fn remote_url(&self) -> String {
        format!("https://github.com/{}/{}.git", self.owner, self.repo_name)
    }

    /// The browsable repository URL (no `.git` suffix), used in reports.
    pub fn web_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo_name)
    }
}
