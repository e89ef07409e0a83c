use std::io::ErrorKind;
use std::process::{Command, ExitStatus, Stdio};

use log::debug;

use super::ProcessError;

/// Runs external programs one at a time, blocking until each exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `program` with `args` on the shell's own stdio and waits.
    pub fn spawn_process(&self, program: &str, args: &[String]) -> Result<ExitStatus, ProcessError> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ProcessError::CommandNotFound(program.to_string()));
            }
            Err(e) => {
                debug!("failed to start {}: {}", program, e);
                return Err(ProcessError::IncorrectUsage(program.to_string()));
            }
        };

        let status = child.wait().map_err(ProcessError::Wait)?;
        debug!("{} (pid {}) exited with {}", program, child.id(), status);
        Ok(status)
    }
}
