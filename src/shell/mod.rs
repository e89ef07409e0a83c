use rustyline::{config::Configurer, error::ReadlineError, DefaultEditor};

mod prompt;

pub use prompt::{collapse_home, Prompt};

use crate::{
    config::Config,
    core::{tokenize, Dispatcher, Flow},
    error::ShellError,
};

pub struct Shell {
    editor: DefaultEditor,
    dispatcher: Dispatcher,
    prompt: Prompt,
}

impl Shell {
    pub fn new(config: Config) -> Result<Self, ShellError> {
        let mut editor = DefaultEditor::new()?;
        editor.set_max_history_size(config.history_size)?;
        editor.set_auto_add_history(true);

        // The shell outlives a Ctrl-C aimed at a running child.
        ctrlc::set_handler(|| println!())?;

        Ok(Shell {
            editor,
            dispatcher: Dispatcher::new(&config),
            prompt: Prompt::new(),
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            println!("{}", self.prompt.header(self.dispatcher.state()));
            let input_line = self.prompt.input_line(self.dispatcher.state());

            let line = match self.editor.readline(&input_line) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    continue;
                }
            };

            let Some(tokens) = tokenize(&line) else {
                continue;
            };

            match self.dispatcher.handle(&tokens) {
                Ok(Flow::Stop) => break,
                Ok(Flow::Continue) => {}
                Err(e) => eprintln!("{}", e),
            }
        }
        Ok(())
    }
}
