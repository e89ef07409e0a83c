use crate::config::Config;
use crate::core::aliases::AliasTable;

/// Everything a line can change that outlives the line itself.
#[derive(Debug, Clone)]
pub struct ShellState {
    shell_name: String,
    terminator: String,
    aliases: AliasTable,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ShellState {
    pub fn new(config: &Config) -> Self {
        Self {
            shell_name: config.shell_name.clone(),
            terminator: config.terminator.clone(),
            aliases: AliasTable::with_capacity(config.alias_capacity),
        }
    }

    pub fn shell_name(&self) -> &str {
        &self.shell_name
    }

    pub fn set_shell_name(&mut self, name: &str) {
        self.shell_name = name.to_owned();
    }

    pub fn terminator(&self) -> &str {
        &self.terminator
    }

    pub fn set_terminator(&mut self, terminator: &str) {
        self.terminator = terminator.to_owned();
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn aliases_mut(&mut self) -> &mut AliasTable {
        &mut self.aliases
    }
}
