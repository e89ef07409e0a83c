pub mod aliases;
pub mod commands;
pub mod state;
pub mod tokenizer;

pub use aliases::{AliasError, AliasTable};
pub use commands::{CommandError, Dispatcher, Flow};
pub use state::ShellState;
pub use tokenizer::tokenize;
