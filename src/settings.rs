use std::env;
use std::ffi::OsString;

pub const LOG_FILE_NAME: &str = ".practice_log_launcher.log";
pub const DEFAULT_PYTHON: &str = "python3";
pub const DEFAULT_SCRIPT: &str = "practice_gui.py";

pub const PYTHON_ENV: &str = "PRACTICE_LOG_LAUNCHER_PYTHON";
pub const SCRIPT_ENV: &str = "PRACTICE_LOG_LAUNCHER_SCRIPT";

/// How the launcher gives way to the target program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handoff {
    /// Replace the launcher's process image with the target.
    Exec,
    /// Spawn the target, wait for it and propagate its status.
    Wait,
}

impl Default for Handoff {
    fn default() -> Self {
        if cfg!(unix) {
            Handoff::Exec
        } else {
            Handoff::Wait
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub log_file_name: String,
    pub handoff: Handoff,
}

impl Settings {
    pub fn from_env() -> Settings {
        Self::from_lookup(|key| env::var_os(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let non_empty = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.into())
        };
        Settings {
            program: non_empty(PYTHON_ENV, DEFAULT_PYTHON),
            args: vec![non_empty(SCRIPT_ENV, DEFAULT_SCRIPT)],
            log_file_name: LOG_FILE_NAME.to_owned(),
            handoff: Handoff::default(),
        }
    }
}
