use crate::core::aliases::DEFAULT_CAPACITY;

/// Startup defaults for a shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub shell_name: String,
    pub terminator: String,
    pub alias_capacity: usize,
    pub history_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shell_name: "myshell".to_string(),
            terminator: ">".to_string(),
            alias_capacity: DEFAULT_CAPACITY,
            history_size: 1000,
        }
    }
}
