//! Crash-safe persistence of the rendered script
//!
//! Protocol for writing `text` to `path`:
//!
//! 1. write `path.tmp` completely (abort on failure, nothing else touched)
//! 2. rename an existing `path` to `path.bak` (best effort, logged)
//! 3. rename `path.tmp` to `path`; on failure move `path.bak` back
//!
//! All file-system calls go through [`FileOps`] so tests can inject
//! failures at any step.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::logging::Logger;

/// File-system operations used by [`persist`].
pub trait FileOps {
    /// Create or truncate `path` and write `contents` fully.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;

    fn remove(&self, path: &Path) -> io::Result<()>;
}

/// [`FileOps`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileOps;

impl FileOps for StdFileOps {
    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut file = File::create(path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}

/// What happened to the previous file during a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupStatus {
    /// The previous content now lives at this path.
    Created(PathBuf),
    /// There was no previous file.
    NoPrevious,
    /// The backup rename failed; the save went ahead without one.
    Failed(String),
}

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub path: PathBuf,
    pub backup: BackupStatus,
}

/// `path` with `suffix` appended to its file name (`.zshrc` -> `.zshrc.tmp`).
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

pub fn temp_path(path: &Path) -> PathBuf {
    with_suffix(path, ".tmp")
}

pub fn backup_path(path: &Path) -> PathBuf {
    with_suffix(path, ".bak")
}

/// Write `text` to `path` using the temp/backup/rename protocol.
pub fn persist(ops: &dyn FileOps, path: &Path, text: &str, logger: &Logger) -> Result<SaveReport> {
    let temp = temp_path(path);
    let backup = backup_path(path);

    if let Err(source) = ops.write(&temp, text) {
        logger.error(format_args!(
            "Failed to write temp file {}: {}",
            temp.display(),
            source
        ));
        return Err(ConfigError::WriteTemp { path: temp, source });
    }

    let backup_status = if ops.exists(path) {
        match ops.rename(path, &backup) {
            Ok(()) => BackupStatus::Created(backup.clone()),
            Err(e) => {
                logger.warn(format_args!("Failed to create backup: {}", e));
                BackupStatus::Failed(e.to_string())
            }
        }
    } else {
        BackupStatus::NoPrevious
    };

    if let Err(source) = ops.rename(&temp, path) {
        logger.error(format_args!(
            "Failed to move {} into place: {}",
            temp.display(),
            source
        ));
        let _ = ops.remove(&temp);

        if let BackupStatus::Created(_) = backup_status {
            if let Err(restore) = ops.rename(&backup, path) {
                logger.error(format_args!(
                    "Failed to restore {} from backup: {}",
                    path.display(),
                    restore
                ));
                return Err(ConfigError::ReplaceUnrecovered {
                    path: path.to_path_buf(),
                    source,
                    restore,
                });
            }
            logger.info(format_args!("Restored {} from backup", path.display()));
        }
        return Err(ConfigError::Replace {
            path: path.to_path_buf(),
            source,
        });
    }

    logger.info(format_args!("Saved {}", path.display()));
    Ok(SaveReport {
        path: path.to_path_buf(),
        backup: backup_status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tempfile::tempdir;

    /// Fails selected steps of the protocol, delegating the rest to `std::fs`.
    #[derive(Default)]
    struct FlakyOps {
        fail_write: bool,
        fail_backup: bool,
        fail_final_rename: bool,
        fail_restore: bool,
        renames: Cell<usize>,
    }

    impl FileOps for FlakyOps {
        fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
            if self.fail_write {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
            }
            StdFileOps.write(path, contents)
        }

        fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
            self.renames.set(self.renames.get() + 1);
            let from_name = from.to_string_lossy();
            let failing = (self.fail_backup && to.to_string_lossy().ends_with(".bak"))
                || (self.fail_final_rename && from_name.ends_with(".tmp"))
                || (self.fail_restore && from_name.ends_with(".bak"));
            if failing {
                return Err(io::Error::new(io::ErrorKind::Other, "simulated rename failure"));
            }
            StdFileOps.rename(from, to)
        }

        fn exists(&self, path: &Path) -> bool {
            StdFileOps.exists(path)
        }

        fn remove(&self, path: &Path) -> io::Result<()> {
            StdFileOps.remove(path)
        }
    }

    #[test]
    fn test_suffix_paths() {
        let path = Path::new("/home/user/.zshrc");
        assert_eq!(temp_path(path), PathBuf::from("/home/user/.zshrc.tmp"));
        assert_eq!(backup_path(path), PathBuf::from("/home/user/.zshrc.bak"));
    }

    #[test]
    fn test_persist_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".zshrc");

        let report = persist(&StdFileOps, &path, "alias ll='ls'\n", &Logger::disabled()).unwrap();

        assert_eq!(report.backup, BackupStatus::NoPrevious);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "alias ll='ls'\n");
        assert!(!temp_path(&path).exists());
        assert!(!backup_path(&path).exists());
    }

    #[test]
    fn test_persist_creates_backup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".zshrc");
        std::fs::write(&path, "old content").unwrap();

        let report = persist(&StdFileOps, &path, "new content", &Logger::disabled()).unwrap();

        assert_eq!(report.backup, BackupStatus::Created(backup_path(&path)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new content");
        assert_eq!(
            std::fs::read_to_string(backup_path(&path)).unwrap(),
            "old content"
        );
    }

    #[test]
    fn test_temp_write_failure_touches_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".zshrc");
        std::fs::write(&path, "old content").unwrap();

        let ops = FlakyOps {
            fail_write: true,
            ..Default::default()
        };
        let err = persist(&ops, &path, "new", &Logger::disabled()).unwrap_err();

        assert!(matches!(err, ConfigError::WriteTemp { .. }));
        assert!(err.original_intact());
        assert_eq!(ops.renames.get(), 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old content");
    }

    #[test]
    fn test_backup_failure_is_not_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".zshrc");
        std::fs::write(&path, "old content").unwrap();

        let ops = FlakyOps {
            fail_backup: true,
            ..Default::default()
        };
        let report = persist(&ops, &path, "new content", &Logger::disabled()).unwrap();

        assert!(matches!(report.backup, BackupStatus::Failed(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new content");
    }

    #[test]
    fn test_final_rename_failure_restores_original() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".zshrc");
        std::fs::write(&path, "old content").unwrap();

        let ops = FlakyOps {
            fail_final_rename: true,
            ..Default::default()
        };
        let err = persist(&ops, &path, "new content", &Logger::disabled()).unwrap_err();

        assert!(matches!(err, ConfigError::Replace { .. }));
        assert!(err.original_intact());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old content");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_failed_restore_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".zshrc");
        std::fs::write(&path, "old content").unwrap();

        let ops = FlakyOps {
            fail_final_rename: true,
            fail_restore: true,
            ..Default::default()
        };
        let err = persist(&ops, &path, "new content", &Logger::disabled()).unwrap_err();

        assert!(matches!(err, ConfigError::ReplaceUnrecovered { .. }));
        assert!(!err.original_intact());
        // previous content still recoverable from the backup
        assert_eq!(
            std::fs::read_to_string(backup_path(&path)).unwrap(),
            "old content"
        );
    }
}
