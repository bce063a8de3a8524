use std::path::PathBuf;

use tracing::{debug, error, info, warn};

mod prompt;

pub use prompt::{current_dir_display, Identity};

use crate::{
    core::{
        commands::{CommandError, CommandExecutor, Outcome},
        config::ShellConfig,
        env::EnvStore,
        tokenizer::Tokenizer,
    },
    error::ShellError,
    highlight::Palette,
    input::{LineEditor, LineReader},
    process::{InterruptFlag, Launcher},
};

/// Status used when the line reader itself fails.
const STATUS_READER_FAILED: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Terminated(i32),
}

pub struct Shell<R: LineReader> {
    reader: R,
    env: EnvStore,
    tokenizer: Tokenizer,
    executor: CommandExecutor,
    identity: Identity,
    palette: Palette,
    history_file: Option<PathBuf>,
    state: ShellState,
}

impl Shell<LineEditor> {
    /// Builds the interactive shell: line editor, SIGINT handler and seeded environment.
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let palette = Palette::new(config.color);
        let reader = LineEditor::new(&config, palette)?;
        let interrupts = InterruptFlag::install()?;

        Ok(Self::with_reader(
            reader,
            &config,
            Launcher::new(Some(interrupts)),
        ))
    }
}

impl<R: LineReader> Shell<R> {
    pub fn with_reader(mut reader: R, config: &ShellConfig, launcher: Launcher) -> Self {
        if let Some(path) = &config.history_file {
            if let Err(e) = reader.load_history(path) {
                warn!("couldn't load history from {}: {}", path.display(), e);
            }
        }

        Shell {
            reader,
            env: EnvStore::seeded(),
            tokenizer: config.tokenizer(),
            executor: CommandExecutor::new(launcher),
            identity: Identity::resolve(),
            palette: Palette::new(config.color),
            history_file: config.history_file.clone(),
            state: ShellState::Running,
        }
    }

    /// Runs until end of input or `exit`, returning the shell's exit status.
    pub fn run(&mut self) -> i32 {
        info!("shell started");
        while self.state == ShellState::Running {
            self.step();
        }
        self.shutdown()
    }

    /// Reads and handles a single line.
    pub fn step(&mut self) {
        let prompt = self.identity.prompt(&current_dir_display());
        match self.reader.read_line(&prompt) {
            Ok(Some(line)) => self.handle_line(&line),
            Ok(None) => {
                debug!("end of input");
                println!();
                self.state = ShellState::Terminated(0);
            }
            Err(e) => {
                error!("line reader failed: {}", e);
                self.report(&e.to_string());
                self.state = ShellState::Terminated(STATUS_READER_FAILED);
            }
        }
    }

    pub fn handle_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        self.reader.append_history(line);

        let result = self
            .tokenizer
            .tokenize(line)
            .map_err(CommandError::from)
            .and_then(|tokens| self.executor.execute(&tokens, &mut self.env));

        match result {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Exit(code)) => self.state = ShellState::Terminated(code),
            Err(e) => {
                debug!(status = e.status(), "command error: {:?}", e);
                self.report(&e.to_string());
            }
        }
    }

    fn report(&self, message: &str) {
        eprintln!("{}", self.palette.error(&format!("nshell: {}", message)));
    }

    /// Persists history and releases the environment store.
    fn shutdown(&mut self) -> i32 {
        if let Some(path) = &self.history_file {
            if let Err(e) = self.reader.save_history(path) {
                warn!("couldn't save history to {}: {}", path.display(), e);
            }
        }
        self.env = EnvStore::new();

        let code = match self.state {
            ShellState::Terminated(code) => code,
            ShellState::Running => 0,
        };
        info!(code, "shell terminated");
        code
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn env(&self) -> &EnvStore {
        &self.env
    }

    pub fn last_status(&self) -> i32 {
        self.executor.last_status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::VecDeque;
    use std::path::Path;
    use std::{env, fs};

    /// Feeds a fixed script of lines and records what the shell does with history.
    #[derive(Default)]
    struct ScriptedReader {
        lines: VecDeque<String>,
        prompts: Vec<String>,
        history: Vec<String>,
        loaded: Vec<PathBuf>,
    }

    impl ScriptedReader {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|l| l.to_string()).collect(),
                ..Self::default()
            }
        }
    }

    impl LineReader for ScriptedReader {
        fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
            self.prompts.push(prompt.to_string());
            Ok(self.lines.pop_front())
        }

        fn append_history(&mut self, line: &str) {
            self.history.push(line.to_string());
        }

        fn load_history(&mut self, path: &Path) -> Result<(), ShellError> {
            self.loaded.push(path.to_path_buf());
            Ok(())
        }

        fn save_history(&mut self, path: &Path) -> Result<(), ShellError> {
            let mut content = self.history.join("\n");
            content.push('\n');
            fs::write(path, content)?;
            Ok(())
        }
    }

    struct CwdGuard(PathBuf);

    impl Drop for CwdGuard {
        fn drop(&mut self) {
            let _ = env::set_current_dir(&self.0);
        }
    }

    fn config_without_history() -> ShellConfig {
        ShellConfig {
            history_file: None,
            color: false,
            ..ShellConfig::default()
        }
    }

    fn shell_with(lines: &[&str], config: &ShellConfig) -> Shell<ScriptedReader> {
        Shell::with_reader(ScriptedReader::new(lines), config, Launcher::default())
    }

    #[test]
    #[serial]
    fn test_set_home_then_cd() -> Result<(), Box<dyn std::error::Error>> {
        let _guard = CwdGuard(env::current_dir()?);
        let config = config_without_history();
        let mut shell = shell_with(&["set HOME /tmp x", "cd", "pwd"], &config);

        assert_eq!(shell.run(), 0);
        assert_eq!(env::current_dir()?, fs::canonicalize("/tmp")?);
        assert_eq!(shell.state(), ShellState::Terminated(0));
        Ok(())
    }

    #[test]
    #[serial]
    fn test_errors_do_not_stop_the_loop() -> Result<(), Box<dyn std::error::Error>> {
        let before = env::current_dir()?;
        let config = config_without_history();
        let mut shell = shell_with(&[], &config);

        shell.handle_line("cd /nonexistent/nshell/dir");
        assert_eq!(env::current_dir()?, before);
        shell.handle_line("set ONLY_NAME");
        assert!(shell.env().get("ONLY_NAME").is_none());
        shell.handle_line("nshell-missing-program --flag");
        assert_eq!(shell.last_status(), 127);
        shell.handle_line(&vec!["x"; config.max_args + 1].join(" "));
        shell.handle_line("set ONLY_NAME value");

        assert_eq!(shell.state(), ShellState::Running);
        assert_eq!(shell.env().get("ONLY_NAME").as_deref(), Some("value"));
        Ok(())
    }

    #[test]
    fn test_exit_stops_reading() {
        let config = config_without_history();
        let mut shell = shell_with(&["exit 3", "set NEVER reached"], &config);

        assert_eq!(shell.run(), 3);
        assert_eq!(shell.reader.lines.len(), 1);
    }

    #[test]
    fn test_end_of_input_exits_zero() {
        let config = config_without_history();
        let mut shell = shell_with(&["false"], &config);
        assert_eq!(shell.run(), 0);
        assert_eq!(shell.reader.prompts.len(), 2);
    }

    #[test]
    fn test_blank_lines_skip_history() {
        let config = config_without_history();
        let mut shell = shell_with(&["", "   ", "true", "\t"], &config);
        shell.run();
        assert_eq!(shell.reader.history, vec!["true"]);
    }

    #[test]
    #[serial]
    fn test_prompt_shows_directory() {
        let config = config_without_history();
        let mut shell = shell_with(&["true"], &config);
        shell.step();

        let prompt = &shell.reader.prompts[0];
        assert!(prompt.contains('@'));
        assert!(prompt.ends_with("$ "));
        assert!(prompt.contains(&current_dir_display()));
    }

    #[test]
    fn test_history_loaded_and_saved() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let history_file = dir.path().join("history");
        let config = ShellConfig {
            history_file: Some(history_file.clone()),
            ..config_without_history()
        };

        let mut shell = shell_with(&["set A 1", "true"], &config);
        assert_eq!(shell.reader.loaded, vec![history_file.clone()]);
        shell.run();

        assert_eq!(fs::read_to_string(&history_file)?, "set A 1\ntrue\n");
        assert!(shell.env().is_empty());
        Ok(())
    }

    #[test]
    fn test_substitution_end_to_end() {
        let config = config_without_history();
        let mut shell = shell_with(&[], &config);
        shell.handle_line("set GREETING hello");
        shell.handle_line("test $GREETING = hello");
        assert_eq!(shell.last_status(), 0);
        shell.handle_line("test $NSHELL_UNSET_VAR = $NSHELL_UNSET_VAR");
        assert_eq!(shell.last_status(), 0);
    }
}
