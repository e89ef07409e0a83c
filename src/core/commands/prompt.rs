use std::io::Write;

use super::{Command, CommandError, Flow};
use crate::core::state::ShellState;

#[derive(Clone, Copy)]
enum PromptField {
    Name,
    Terminator,
}

/// `SETSHELLNAME` and `SETTERMINATOR`: replace one piece of the prompt.
#[derive(Clone, Copy)]
pub struct SetPromptCommand {
    field: PromptField,
}

impl SetPromptCommand {
    pub fn shell_name() -> Self {
        Self {
            field: PromptField::Name,
        }
    }

    pub fn terminator() -> Self {
        Self {
            field: PromptField::Terminator,
        }
    }

    fn usage(&self) -> &'static str {
        match self.field {
            PromptField::Name => "Usage: SETSHELLNAME <name>",
            PromptField::Terminator => "Usage: SETTERMINATOR <symbol>",
        }
    }
}

impl Command for SetPromptCommand {
    fn execute(
        &self,
        state: &mut ShellState,
        args: &[String],
        _out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let [value] = args else {
            return Err(CommandError::Usage(self.usage()));
        };

        match self.field {
            PromptField::Name => state.set_shell_name(value),
            PromptField::Terminator => state.set_terminator(value),
        }
        Ok(Flow::Continue)
    }
}
