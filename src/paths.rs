use anyhow::Result;
use std::{env, path::PathBuf};

pub fn ghpub_home() -> Result<PathBuf> {
    let xdg = env::var_os("XDG_CONFIG_HOME");
    let base = xdg
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env::var_os("HOME").unwrap_or_default()).join(".config"));
    Ok(base.join(".ghpub"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ghpub_home()?.join("config.toml"))
}
