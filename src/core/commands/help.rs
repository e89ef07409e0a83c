use std::io::Write;

use super::{Command, CommandError, Flow};
use crate::core::state::ShellState;

const HELP_TEXT: &str = "\
Available Commands:
STOP - Exit the shell
HELP - Show this help
SETSHELLNAME <name> - Change the shell prompt name
SETTERMINATOR <symbol> - Change the shell prompt terminator
NEWNAME <alias> <command> - Create an alias for a command
NEWNAME <alias> - Remove an alias
LISTNEWNAMES - List all command aliases
SAVENEWNAMES <file> - Save aliases to a file
READNEWNAMES <file> - Load aliases from a file
<Unix command> - Execute any valid Unix command
Tip: Start by setting aliases with NEWNAME or customizing the shell prompt with SETSHELLNAME.
";

#[derive(Clone, Copy, Default)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(
        &self,
        _state: &mut ShellState,
        _args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        out.write_all(HELP_TEXT.as_bytes())?;
        Ok(Flow::Continue)
    }
}
