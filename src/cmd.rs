use crate::logfile::{self, LogFile};
use crate::settings::{Handoff, Settings};
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use error_chain::error_chain;
use tracing::{debug, info};

/// Exit code when the launcher fails before the target program starts.
pub const LAUNCH_FAILURE: i32 = 125;
pub const NOT_EXECUTABLE: i32 = 126;
pub const NOT_FOUND: i32 = 127;

error_chain! {
    links {
        LogFileError(logfile::Error, logfile::ErrorKind);
    }
    foreign_links {
        SpawnError(std::io::Error);
    }
}

pub fn command(settings: &Settings, workdir: &Path, log: &LogFile) -> Result<Command> {
    let (stdout, stderr) = log.stdio()?;
    let mut command = Command::new(&settings.program);
    command
        .args(&settings.args)
        .current_dir(workdir)
        .stdout(stdout)
        .stderr(stderr);
    Ok(command)
}

/// Hands the process over to the target program. With `Handoff::Exec` this
/// only returns if the exec itself failed.
pub fn launch(settings: &Settings, workdir: &Path, log: &LogFile) -> Result<i32> {
    let mut command = command(settings, workdir, log)?;
    info!(
        program = ?settings.program,
        args = ?settings.args,
        workdir = %workdir.display(),
        log = %log.path().display(),
        handoff = ?settings.handoff,
        "launching target program"
    );
    match settings.handoff {
        Handoff::Exec => exec(command),
        Handoff::Wait => {
            let status = command.status()?;
            debug!(%status, "target program exited");
            Ok(exit_code(status))
        }
    }
}

#[cfg(unix)]
fn exec(mut command: Command) -> Result<i32> {
    use std::os::unix::process::CommandExt;
    Err(command.exec().into())
}

#[cfg(not(unix))]
fn exec(mut command: Command) -> Result<i32> {
    Ok(exit_code(command.status()?))
}

#[cfg(unix)]
pub fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => 1,
    }
}

#[cfg(not(unix))]
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

pub fn spawn_failure_code(err: &io::Error) -> i32 {
    match err.kind() {
        io::ErrorKind::NotFound => NOT_FOUND,
        io::ErrorKind::PermissionDenied => NOT_EXECUTABLE,
        _ => LAUNCH_FAILURE,
    }
}
