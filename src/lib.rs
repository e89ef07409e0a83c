pub mod config;
pub mod core;
pub mod error;
pub mod process;
pub mod shell;
