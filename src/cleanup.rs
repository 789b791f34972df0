//! Best-effort cleanup passes run before encoding.
//!
//! Both passes look only at regular files directly inside one folder.
//! Subfolders are never entered or removed. A failure to list the folder or
//! to remove a file is reported and logged, and the run continues.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::ui;

/// Outcome of one cleanup pass.
#[derive(Debug, Default)]
pub struct Sweep {
    /// Files that were removed.
    pub removed: Vec<PathBuf>,
    /// Entries that could not be listed or removed, with the reason.
    pub failures: Vec<(PathBuf, String)>,
}

impl Sweep {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Deletes every file in `source` whose name lacks `version_tag`.
pub fn delete_non_matching(source: &Path, version_tag: &str) -> Sweep {
    let sweep = sweep_files(source, |name| !name.contains(version_tag), ui::show_deleted);
    if !sweep.is_clean() {
        ui::show_failure(&format!("Error occurred while deleting files from {}", source.display()));
    }

    sweep
}

/// Deletes every file in `common`, unconditionally.
///
/// Prior outputs are discarded on purpose: the folder only ever holds the
/// latest build.
pub fn clear_folder(common: &Path) -> Sweep {
    let sweep = sweep_files(common, |_| true, ui::show_cleared);
    if !sweep.is_clean() {
        ui::show_failure(&format!("Error clearing common folder {}", common.display()));
    }

    sweep
}

fn sweep_files<P, R>(dir: &Path, should_remove: P, report: R) -> Sweep
where
    P: Fn(&str) -> bool,
    R: Fn(&Path),
{
    let mut sweep = Sweep::default();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(dir).to_path_buf();
                warn!(path = %path.display(), error = %e, "failed to list entry");
                sweep.failures.push((path, e.to_string()));
                continue;
            }
        };

        // Follows symlinks; a link to a regular file counts as a file and the link itself is removed.
        if !entry.path().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !should_remove(&name) {
            debug!(file = %name, "kept");
            continue;
        }

        let path = entry.path();
        report(path);
        match fs::remove_file(path) {
            Ok(()) => sweep.removed.push(path.to_path_buf()),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to remove file");
                sweep.failures.push((path.to_path_buf(), e.to_string()));
            }
        }
    }

    sweep
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_delete_non_matching() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("foo_1.6.2.zip"), b"old").unwrap();
        fs::write(dir.path().join("foo_1.6.3.zip"), b"new").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let sweep = delete_non_matching(dir.path(), "_1.6.3");

        assert!(sweep.is_clean());
        assert_eq!(sweep.removed.len(), 2);
        assert!(!dir.path().join("foo_1.6.2.zip").exists());
        assert!(!dir.path().join("notes.txt").exists());
        assert_eq!(fs::read(dir.path().join("foo_1.6.3.zip")).unwrap(), b"new");
    }

    #[test]
    fn test_delete_non_matching_leaves_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("old_build")).unwrap();
        fs::write(dir.path().join("old_build").join("inner_1.0.zip"), b"x").unwrap();

        let sweep = delete_non_matching(dir.path(), "_1.6.3");

        assert!(sweep.removed.is_empty());
        assert!(dir.path().join("old_build").join("inner_1.0.zip").exists());
    }

    #[test]
    fn test_delete_non_matching_on_empty_folder() {
        let dir = tempdir().unwrap();
        let sweep = delete_non_matching(dir.path(), "_1.6.3");
        assert!(sweep.removed.is_empty());
        assert!(sweep.is_clean());
    }

    #[test]
    fn test_missing_folder_is_reported_not_fatal() {
        let dir = tempdir().unwrap();
        let sweep = clear_folder(&dir.path().join("absent"));
        assert!(sweep.removed.is_empty());
        assert!(!sweep.is_clean());
    }

    #[cfg(unix)]
    #[test]
    fn test_clear_folder_removes_symlinked_output_but_not_target() {
        let dir = tempdir().unwrap();
        let common = dir.path().join("common");
        fs::create_dir(&common).unwrap();
        let target = dir.path().join("previous-build");
        fs::write(&target, b"old ciphertext").unwrap();
        std::os::unix::fs::symlink(&target, common.join("Q29tcA")).unwrap();

        let sweep = clear_folder(&common);

        assert_eq!(sweep.removed, vec![common.join("Q29tcA")]);
        assert!(fs::symlink_metadata(common.join("Q29tcA")).is_err());
        assert_eq!(fs::read(&target).unwrap(), b"old ciphertext");
    }

    #[test]
    fn test_clear_folder_twice() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a"), b"1").unwrap();
        fs::write(dir.path().join("b_1.6.3"), b"2").unwrap();
        fs::create_dir(dir.path().join("keep")).unwrap();

        let first = clear_folder(dir.path());
        assert_eq!(first.removed.len(), 2);

        fs::write(dir.path().join("c"), b"3").unwrap();
        let second = clear_folder(dir.path());
        assert_eq!(second.removed.len(), 1);

        let remaining: Vec<String> = fs::read_dir(dir.path()).unwrap().map(|e| e.unwrap().file_name().to_string_lossy().into_owned()).collect();
        assert_eq!(remaining, vec!["keep".to_owned()]);
    }
}
