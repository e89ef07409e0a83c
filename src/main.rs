use myshell::config::Config;
use myshell::shell::Shell;

fn main() -> Result<(), myshell::error::ShellError> {
    env_logger::init();

    let mut shell = Shell::new(Config::default())?;
    shell.run()
}
