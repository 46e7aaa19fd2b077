use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Well-known name of the ignore file managed by this tool.
pub const IGNORE_FILE: &str = ".gitignore";

/// Default ignore patterns, embedded at compile time.
///
/// The content of `assets/default.gitignore` is a frozen contract: scripts
/// and docs downstream assume exactly these patterns, so edits there should
/// be treated as a compatibility change, not a tweak.
const DEFAULT_IGNORE: &str = include_str!("../assets/default.gitignore");

/// Ensure `.gitignore` exists in `dir`.
///
/// Writes the default content when the file is missing or `force` is set;
/// an existing file is otherwise left untouched byte-for-byte.
///
/// Returns `true` if the file was (re)written.
///
/// # Errors
/// Returns an error if the write fails.
pub fn ensure_ignore_file(dir: &Path, force: bool) -> Result<bool> {
    let path = dir.join(IGNORE_FILE);
    if path.exists() && !force {
        return Ok(false);
    }
    fs::write(&path, DEFAULT_IGNORE)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn creates_file_with_default_content_when_missing() {
        let td = tempdir().unwrap();
        let wrote = ensure_ignore_file(td.path(), false).unwrap();
        assert!(wrote);

        let got = fs::read_to_string(td.path().join(IGNORE_FILE)).unwrap();
        assert_eq!(got, DEFAULT_IGNORE);
        assert!(got.contains("node_modules/"));
        assert!(got.contains(".env"));
    }

    #[test]
    fn leaves_existing_file_untouched_without_force() {
        let td = tempdir().unwrap();
        let path = td.path().join(IGNORE_FILE);
        fs::write(&path, "target/\n").unwrap();

        let wrote = ensure_ignore_file(td.path(), false).unwrap();
        assert!(!wrote);
        assert_eq!(fs::read_to_string(&path).unwrap(), "target/\n");
    }

    #[test]
    fn force_overwrites_existing_file() {
        let td = tempdir().unwrap();
        let path = td.path().join(IGNORE_FILE);
        fs::write(&path, "target/\n").unwrap();

        let wrote = ensure_ignore_file(td.path(), true).unwrap();
        assert!(wrote);
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_IGNORE);
    }
}
