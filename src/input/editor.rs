use std::path::Path;

use rustyline::{
    error::ReadlineError, history::FileHistory, CompletionType, Config, Editor,
};
use tracing::{debug, warn};

use super::{LineReader, PlainHistory, ShellHelper};
use crate::core::config::ShellConfig;
use crate::error::ShellError;
use crate::highlight::Palette;

/// `rustyline`-backed reader with completion and a colored prompt.
///
/// The on-disk history is kept by [`PlainHistory`] so the file stays one command per line;
/// rustyline's own history only serves in-session recall.
pub struct LineEditor {
    editor: Editor<ShellHelper, FileHistory>,
    history: PlainHistory,
}

impl LineEditor {
    pub fn new(config: &ShellConfig, palette: Palette) -> Result<Self, ShellError> {
        let editor_config = Config::builder()
            .max_history_size(config.history_size)?
            .auto_add_history(false)
            .completion_type(CompletionType::List)
            .build();

        let mut editor = Editor::<ShellHelper, FileHistory>::with_config(editor_config)?;
        editor.set_helper(Some(ShellHelper::new(palette)));

        Ok(Self {
            editor,
            history: PlainHistory::new(config.history_size),
        })
    }
}

impl LineReader for LineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // Ctrl-C at the prompt abandons the line being edited
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn append_history(&mut self, line: &str) {
        self.history.push(line);
        if let Err(e) = self.editor.add_history_entry(line) {
            warn!("couldn't add to history: {}", e);
        }
    }

    fn load_history(&mut self, path: &Path) -> Result<(), ShellError> {
        self.history.load(path)?;
        for entry in self.history.iter() {
            self.editor.add_history_entry(entry)?;
        }
        debug!(path = %path.display(), "history loaded");
        Ok(())
    }

    fn save_history(&mut self, path: &Path) -> Result<(), ShellError> {
        self.history.save(path)?;
        debug!(path = %path.display(), "history saved");
        Ok(())
    }
}
