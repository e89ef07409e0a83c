use std::fmt;

pub mod executor;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    IncorrectUsage(String),
    Wait(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => {
                write!(f, "Error: Command '{}' not found.", cmd)
            }
            ProcessError::IncorrectUsage(cmd) => write!(
                f,
                "Error: Incorrect usage of '{}'. Try '{} --help' for correct syntax.",
                cmd, cmd
            ),
            ProcessError::Wait(e) => write!(f, "Error: Failed to wait for child: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
