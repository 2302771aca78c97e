use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::process::Stdio;

use error_chain::error_chain;
use tracing::debug;

error_chain! {
    errors {
        NoHomeDir {
            description("cannot determine the user's home directory")
            display("Cannot determine the user's home directory")
        }
        OpenFailed(path: PathBuf) {
            description("cannot open log file for append")
            display("Cannot open log file `{}` for append", path.display())
        }
    }
    foreign_links {
        IOError(std::io::Error);
    }
}

pub fn log_path<P: AsRef<Path>>(home: P, file_name: &str) -> PathBuf {
    home.as_ref().join(file_name)
}

pub fn default_log_path(file_name: &str) -> Result<PathBuf> {
    match dirs::home_dir() {
        Some(home) => Ok(log_path(home, file_name)),
        None => Err(ErrorKind::NoHomeDir.into()),
    }
}

/// Append-only log shared by the child's stdout and stderr.
#[derive(Debug)]
pub struct LogFile {
    path: PathBuf,
    file: File,
}

impl LogFile {
    pub fn open_append<P: AsRef<Path>>(path: P) -> Result<LogFile> {
        let path = path.as_ref();
        let open = || -> std::io::Result<File> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            OpenOptions::new().append(true).create(true).open(path)
        };
        let file = open().chain_err(|| ErrorKind::OpenFailed(path.to_path_buf()))?;
        debug!(path = %path.display(), "opened log file");
        Ok(LogFile {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Handles for the child's stdout and stderr. Both are duplicates of one
    /// open file description, so writes land in the order they are made.
    pub fn stdio(&self) -> Result<(Stdio, Stdio)> {
        let stdout = self.file.try_clone()?;
        let stderr = self.file.try_clone()?;
        Ok((Stdio::from(stdout), Stdio::from(stderr)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn log_lives_directly_under_home() {
        assert_eq!(
            log_path("/home/someone", ".practice_log_launcher.log"),
            PathBuf::from("/home/someone/.practice_log_launcher.log")
        );
    }

    #[test]
    fn reopening_appends_instead_of_truncating() {
        let home = tempfile::tempdir().unwrap();
        let path = log_path(home.path(), "launch.log");
        fs::write(&path, b"earlier run\n").unwrap();

        let log = LogFile::open_append(&path).unwrap();
        (&log.file).write_all(b"later run\n").unwrap();
        drop(log);

        assert_eq!(fs::read(&path).unwrap(), b"earlier run\nlater run\n");
    }

    #[test]
    fn missing_parent_dirs_are_created() {
        let home = tempfile::tempdir().unwrap();
        let path = home.path().join("nested").join("dir").join("launch.log");
        let log = LogFile::open_append(&path).unwrap();
        assert_eq!(log.path(), path.as_path());
        assert!(path.is_file());
    }

    #[test]
    fn home_that_is_a_file_cannot_hold_the_log() {
        let scratch = tempfile::tempdir().unwrap();
        let fake_home = scratch.path().join("home");
        fs::write(&fake_home, b"").unwrap();
        let path = log_path(&fake_home, "launch.log");

        let err = LogFile::open_append(&path).unwrap_err();
        match err.kind() {
            ErrorKind::OpenFailed(failed) => assert_eq!(failed, &path),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
