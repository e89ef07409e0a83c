use std::io::Write;

use super::{Command, CommandError, Flow};
use crate::core::state::ShellState;

#[derive(Clone, Copy)]
enum AliasAction {
    Define,
    List,
    Save,
    Read,
}

/// The alias built-ins: `NEWNAME`, `LISTNEWNAMES`, `SAVENEWNAMES` and
/// `READNEWNAMES`.
#[derive(Clone, Copy)]
pub struct AliasCommand {
    action: AliasAction,
}

impl AliasCommand {
    pub fn define() -> Self {
        Self {
            action: AliasAction::Define,
        }
    }

    pub fn list() -> Self {
        Self {
            action: AliasAction::List,
        }
    }

    pub fn save() -> Self {
        Self {
            action: AliasAction::Save,
        }
    }

    pub fn read() -> Self {
        Self {
            action: AliasAction::Read,
        }
    }

    fn define_alias(state: &mut ShellState, args: &[String]) -> Result<(), CommandError> {
        match args {
            [alias, command] => state.aliases_mut().set(alias, command)?,
            [alias] => state.aliases_mut().remove(alias)?,
            _ => {
                return Err(CommandError::Usage(
                    "Usage: NEWNAME <alias> <command> or NEWNAME <alias> to remove",
                ))
            }
        }
        Ok(())
    }

    fn list_aliases(state: &ShellState, out: &mut dyn Write) -> Result<(), CommandError> {
        for (alias, command) in state.aliases().list() {
            writeln!(out, "{} -> {}", alias, command)?;
        }
        Ok(())
    }
}

impl Command for AliasCommand {
    fn execute(
        &self,
        state: &mut ShellState,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        match self.action {
            AliasAction::Define => Self::define_alias(state, args)?,
            AliasAction::List => Self::list_aliases(state, out)?,
            AliasAction::Save => {
                let [file] = args else {
                    return Err(CommandError::Usage("Usage: SAVENEWNAMES <file>"));
                };
                state.aliases().save(file)?;
            }
            AliasAction::Read => {
                let [file] = args else {
                    return Err(CommandError::Usage("Usage: READNEWNAMES <file>"));
                };
                state.aliases_mut().load(file)?;
                writeln!(out, "Aliases successfully loaded from {}.", file)?;
            }
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aliases::AliasError;
    use std::{env, fs};

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_define_and_list() -> Result<(), CommandError> {
        let mut state = ShellState::default();
        let mut out = Vec::new();

        AliasCommand::define().execute(&mut state, &args(&["ll", "ls -l"]), &mut out)?;
        AliasCommand::list().execute(&mut state, &[], &mut out)?;

        assert_eq!(String::from_utf8_lossy(&out), "ll -> ls -l\n");
        Ok(())
    }

    #[test]
    fn test_define_with_one_arg_removes() -> Result<(), CommandError> {
        let mut state = ShellState::default();
        let cmd = AliasCommand::define();
        cmd.execute(&mut state, &args(&["ll", "ls"]), &mut Vec::new())?;
        cmd.execute(&mut state, &args(&["ll"]), &mut Vec::new())?;
        assert!(state.aliases().is_empty());

        let result = cmd.execute(&mut state, &args(&["ll"]), &mut Vec::new());
        assert!(matches!(
            result,
            Err(CommandError::Alias(AliasError::NotFound(_)))
        ));
        Ok(())
    }

    #[test]
    fn test_define_bad_arity() {
        let mut state = ShellState::default();
        let cmd = AliasCommand::define();
        assert!(matches!(
            cmd.execute(&mut state, &[], &mut Vec::new()),
            Err(CommandError::Usage(_))
        ));
        assert!(matches!(
            cmd.execute(&mut state, &args(&["a", "b", "c"]), &mut Vec::new()),
            Err(CommandError::Usage(_))
        ));
        assert!(state.aliases().is_empty());
    }

    #[test]
    fn test_save_and_read() -> Result<(), CommandError> {
        let path = env::temp_dir().join(format!("myshell_alias_cmd_{}", std::process::id()));
        let file = path.to_string_lossy().to_string();

        let mut state = ShellState::default();
        AliasCommand::define().execute(&mut state, &args(&["gs", "git"]), &mut Vec::new())?;
        AliasCommand::save().execute(&mut state, &args(&[&file]), &mut Vec::new())?;

        let mut fresh = ShellState::default();
        let mut out = Vec::new();
        AliasCommand::read().execute(&mut fresh, &args(&[&file]), &mut out)?;

        assert_eq!(fresh.aliases().resolve("gs"), "git");
        assert_eq!(
            String::from_utf8_lossy(&out),
            format!("Aliases successfully loaded from {}.\n", file)
        );

        let _ = fs::remove_file(path);
        Ok(())
    }

    #[test]
    fn test_save_and_read_need_one_file() {
        let mut state = ShellState::default();
        assert!(matches!(
            AliasCommand::save().execute(&mut state, &[], &mut Vec::new()),
            Err(CommandError::Usage("Usage: SAVENEWNAMES <file>"))
        ));
        assert!(matches!(
            AliasCommand::read().execute(&mut state, &args(&["a", "b"]), &mut Vec::new()),
            Err(CommandError::Usage("Usage: READNEWNAMES <file>"))
        ));
    }
}
