mod cmd;
mod locate;
mod logfile;
mod settings;

use error_chain::{error_chain, ChainedError};
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

const LOG_FILTER_ENV: &str = "PRACTICE_LOG_LAUNCHER_LOG";

error_chain! {
    links {
        LocateError(locate::Error, locate::ErrorKind);
        LogFileError(logfile::Error, logfile::ErrorKind);
        RunCmdError(cmd::Error, cmd::ErrorKind);
    }
}

fn run() -> Result<i32> {
    let settings = settings::Settings::from_env();
    let dir = locate::launcher_dir()?;
    locate::enter(&dir)?;
    let log = logfile::LogFile::open_append(logfile::default_log_path(&settings.log_file_name)?)?;
    Ok(cmd::launch(&settings, &dir, &log)?)
}

fn failure_code(err: &Error) -> i32 {
    match err.kind() {
        ErrorKind::RunCmdError(cmd::ErrorKind::SpawnError(io_err)) => cmd::spawn_failure_code(io_err),
        _ => cmd::LAUNCH_FAILURE,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            error!("{}", err.display_chain());
            process::exit(failure_code(&err));
        }
    }
}
