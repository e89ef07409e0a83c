use std::io::Write;

use super::{Command, CommandError, Flow};
use crate::core::state::ShellState;

#[derive(Clone, Copy, Default)]
pub struct StopCommand;

impl StopCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for StopCommand {
    fn execute(
        &self,
        _state: &mut ShellState,
        _args: &[String],
        _out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        Ok(Flow::Stop)
    }
}
