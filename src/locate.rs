use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use error_chain::error_chain;
use tracing::debug;

error_chain! {
    errors {
        NoParentDir(exe: PathBuf) {
            description("executable has no parent directory")
            display("Executable `{}` has no parent directory", exe.display())
        }
        EnterDir(dir: PathBuf) {
            description("cannot change into launcher directory")
            display("Cannot change into launcher directory `{}`", dir.display())
        }
    }
    foreign_links {
        ResolveError(std::io::Error);
    }
}

/// Directory holding the running executable, with symlinks resolved so a
/// linked launcher still runs from its install location.
pub fn launcher_dir() -> Result<PathBuf> {
    let exe = fs::canonicalize(env::current_exe()?)?;
    match exe.parent() {
        Some(dir) => {
            debug!(dir = %dir.display(), "resolved launcher directory");
            Ok(dir.to_path_buf())
        }
        None => Err(ErrorKind::NoParentDir(exe.clone()).into()),
    }
}

pub fn enter<P: AsRef<Path>>(dir: P) -> Result<()> {
    env::set_current_dir(dir.as_ref())
        .chain_err(|| ErrorKind::EnterDir(dir.as_ref().to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launcher_dir_holds_the_running_executable() {
        let dir = launcher_dir().unwrap();
        let exe = fs::canonicalize(env::current_exe().unwrap()).unwrap();
        assert!(dir.is_dir());
        assert_eq!(exe.parent().unwrap(), dir.as_path());
        assert!(dir.is_absolute());
    }

    #[test]
    fn entering_a_missing_dir_fails() {
        let scratch = tempfile::tempdir().unwrap();
        let missing = scratch.path().join("gone");
        let err = enter(&missing).unwrap_err();
        match err.kind() {
            ErrorKind::EnterDir(dir) => assert_eq!(dir, &missing),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
