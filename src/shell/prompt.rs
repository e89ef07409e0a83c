use std::env;
use std::ffi::CStr;
use std::path::{Path, PathBuf};

use inksac::prelude::*;

use crate::core::ShellState;

/// Renders the two-line prompt: `user@name cwd` over `╰─terminator `.
#[derive(Debug, Clone)]
pub struct Prompt {
    color_support: ColorSupport,
    user: String,
    home: Option<PathBuf>,
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt {
    pub fn new() -> Self {
        Self {
            color_support: check_color_support().unwrap_or(ColorSupport::NoColor),
            user: current_user(),
            home: dirs::home_dir(),
        }
    }

    pub fn header(&self, state: &ShellState) -> String {
        let cwd = env::current_dir()
            .map(|dir| collapse_home(&dir, self.home.as_deref()))
            .unwrap_or_default();

        let identity = format!("{}@{}", self.user, state.shell_name());
        format!(
            "{} {}",
            self.paint(&identity, Color::Green),
            self.paint(&cwd, Color::Blue)
        )
    }

    pub fn input_line(&self, state: &ShellState) -> String {
        format!("{} ", self.paint(&format!("╰─{}", state.terminator()), Color::Cyan))
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return text.to_string();
        }

        let style = Style::builder().foreground(color).bold().build();
        text.style(style).to_string()
    }
}

fn current_user() -> String {
    // SAFETY: getpwuid returns null or a pointer to a static passwd record,
    // which is only read before any other passwd call on this thread.
    let name = unsafe {
        let pw = libc::getpwuid(libc::getuid());
        if pw.is_null() || (*pw).pw_name.is_null() {
            None
        } else {
            Some(CStr::from_ptr((*pw).pw_name).to_string_lossy().into_owned())
        }
    };

    name.or_else(|| env::var("USER").ok()).unwrap_or_default()
}

/// Replaces a leading home directory with `~`.
pub fn collapse_home(cwd: &Path, home: Option<&Path>) -> String {
    match home.and_then(|home| cwd.strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.display()),
        None => cwd.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_prompt() -> Prompt {
        Prompt {
            color_support: ColorSupport::NoColor,
            user: "alice".to_string(),
            home: Some(PathBuf::from("/home/alice")),
        }
    }

    #[test]
    fn test_collapse_home() {
        let home = Path::new("/home/alice");
        assert_eq!(collapse_home(Path::new("/home/alice"), Some(home)), "~");
        assert_eq!(
            collapse_home(Path::new("/home/alice/src/shell"), Some(home)),
            "~/src/shell"
        );
        assert_eq!(collapse_home(Path::new("/tmp"), Some(home)), "/tmp");
        assert_eq!(
            collapse_home(Path::new("/home/alicia"), Some(home)),
            "/home/alicia"
        );
        assert_eq!(collapse_home(Path::new("/home/alice"), None), "/home/alice");
    }

    #[test]
    fn test_plain_prompt() {
        let prompt = plain_prompt();
        let mut state = ShellState::default();

        assert!(prompt.header(&state).starts_with("alice@myshell "));
        assert_eq!(prompt.input_line(&state), "╰─> ");

        state.set_shell_name("box");
        state.set_terminator("$");
        assert!(prompt.header(&state).starts_with("alice@box "));
        assert_eq!(prompt.input_line(&state), "╰─$ ");
    }
}
