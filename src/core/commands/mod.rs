use std::collections::BTreeMap;
use std::io::{self, Write};

mod alias;
mod help;
mod prompt;
mod stop;

pub use alias::AliasCommand;
pub use help::HelpCommand;
pub use prompt::SetPromptCommand;
pub use stop::StopCommand;

use log::debug;

use crate::config::Config;
use crate::core::aliases::AliasError;
use crate::core::state::ShellState;
use crate::process::{ProcessError, ProcessExecutor};

pub const BUILTIN_NAMES: [&str; 8] = [
    "STOP",
    "HELP",
    "SETSHELLNAME",
    "SETTERMINATOR",
    "NEWNAME",
    "LISTNEWNAMES",
    "SAVENEWNAMES",
    "READNEWNAMES",
];

#[derive(Debug)]
pub enum CommandError {
    Usage(&'static str),
    Alias(AliasError),
    Process(ProcessError),
    IoError(io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Usage(usage) => write!(f, "{}", usage),
            CommandError::Alias(err) => write!(f, "{}", err),
            CommandError::Process(err) => write!(f, "{}", err),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<AliasError> for CommandError {
    fn from(err: AliasError) -> Self {
        CommandError::Alias(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::Process(err)
    }
}

/// What the read loop should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub trait Command {
    fn execute(
        &self,
        state: &mut ShellState,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError>;
}

#[derive(Clone, Copy)]
enum CommandType {
    Stop(StopCommand),
    Help(HelpCommand),
    SetPrompt(SetPromptCommand),
    Alias(AliasCommand),
}

impl Command for CommandType {
    fn execute(
        &self,
        state: &mut ShellState,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        match self {
            CommandType::Stop(cmd) => cmd.execute(state, args, out),
            CommandType::Help(cmd) => cmd.execute(state, args, out),
            CommandType::SetPrompt(cmd) => cmd.execute(state, args, out),
            CommandType::Alias(cmd) => cmd.execute(state, args, out),
        }
    }
}

/// Routes a tokenized line to a built-in or to an external program.
pub struct Dispatcher {
    commands: BTreeMap<&'static str, CommandType>,
    process_executor: ProcessExecutor,
    state: ShellState,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Dispatcher {
    pub fn new(config: &Config) -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("STOP", CommandType::Stop(StopCommand::new()));
        commands.insert("HELP", CommandType::Help(HelpCommand::new()));
        commands.insert(
            "SETSHELLNAME",
            CommandType::SetPrompt(SetPromptCommand::shell_name()),
        );
        commands.insert(
            "SETTERMINATOR",
            CommandType::SetPrompt(SetPromptCommand::terminator()),
        );
        commands.insert("NEWNAME", CommandType::Alias(AliasCommand::define()));
        commands.insert("LISTNEWNAMES", CommandType::Alias(AliasCommand::list()));
        commands.insert("SAVENEWNAMES", CommandType::Alias(AliasCommand::save()));
        commands.insert("READNEWNAMES", CommandType::Alias(AliasCommand::read()));

        Self {
            commands,
            process_executor: ProcessExecutor::new(),
            state: ShellState::new(config),
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    #[cfg(test)]
    fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    /// Handles one line, writing built-in output to stdout.
    pub fn handle(&mut self, tokens: &[String]) -> Result<Flow, CommandError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let flow = self.handle_with_output(tokens, &mut out);
        out.flush()?;
        flow
    }

    pub fn handle_with_output(
        &mut self,
        tokens: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let Some((name, args)) = tokens.split_first() else {
            return Ok(Flow::Continue);
        };

        if let Some(cmd) = self.commands.get(name.as_str()) {
            debug!("builtin {} with {} args", name, args.len());
            return cmd.execute(&mut self.state, args, out);
        }

        let program = self.state.aliases().resolve(name);
        debug!("external {:?} resolved to {:?}", name, program);
        // Flush before the child writes to the same terminal.
        out.flush()?;
        self.process_executor.spawn_process(program, args)?;
        Ok(Flow::Continue)
    }
}
