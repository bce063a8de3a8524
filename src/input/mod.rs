use std::path::Path;

use crate::error::ShellError;

mod completer;
mod editor;
mod history;

pub use completer::ShellHelper;
pub use editor::LineEditor;
pub use history::PlainHistory;

/// Source of interactive input lines plus the history that goes with them.
pub trait LineReader {
    /// Reads one line; `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError>;

    fn append_history(&mut self, line: &str);

    fn load_history(&mut self, path: &Path) -> Result<(), ShellError>;

    fn save_history(&mut self, path: &Path) -> Result<(), ShellError>;
}
