#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    CtrlC(String),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::CtrlC(msg) => write!(f, "Ctrl-C error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::error::ReadlineError;

    #[test]
    fn test_shell_error_display() {
        let err: ShellError = ReadlineError::Eof.into();
        assert!(matches!(err, ShellError::Readline(ReadlineError::Eof)));
        assert!(err.to_string().starts_with("Readline error:"));

        let err = ShellError::CtrlC("handler already set".to_string());
        assert_eq!(err.to_string(), "Ctrl-C error: handler already set");
    }
}
