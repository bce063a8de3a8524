use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

mod cd;
mod exit;
mod set;
mod unset;
mod vars;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use set::SetCommand;
pub use unset::UnsetCommand;
pub use vars::VarsCommand;

use super::env::EnvStore;
use super::tokenizer::TokenizeError;
use crate::process::{LaunchError, Launcher};

#[derive(Debug, Error)]
pub enum BuiltinError {
    #[error("{command}: usage: {usage}")]
    InvalidUsage {
        command: &'static str,
        usage: &'static str,
    },
    #[error("cd: {}: {}", .path.display(), .source)]
    ChangeDirectoryFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cd: HOME not set")]
    HomeNotSet,
    #[error("{command}: write error: {source}")]
    Output {
        command: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Any failure while processing one input line.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error(transparent)]
    Builtin(#[from] BuiltinError),
    #[error(transparent)]
    Launch(#[from] LaunchError),
}

impl CommandError {
    pub fn status(&self) -> i32 {
        match self {
            CommandError::Launch(e) => e.status(),
            CommandError::Tokenize(_) | CommandError::Builtin(_) => 1,
        }
    }
}

/// What the shell loop should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit(i32),
}

pub trait Builtin {
    /// Runs the builtin; `args` excludes the command name.
    fn execute(&self, args: &[&str], env: &mut EnvStore) -> Result<Outcome, BuiltinError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinKind {
    Cd,
    Exit,
    Set,
    Unset,
    Vars,
}

impl BuiltinKind {
    pub const ALL: [BuiltinKind; 5] = [
        BuiltinKind::Cd,
        BuiltinKind::Exit,
        BuiltinKind::Set,
        BuiltinKind::Unset,
        BuiltinKind::Vars,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            BuiltinKind::Cd => "cd",
            BuiltinKind::Exit => "exit",
            BuiltinKind::Set => "set",
            BuiltinKind::Unset => "unset",
            BuiltinKind::Vars => "vars",
        }
    }
}

impl Builtin for BuiltinKind {
    fn execute(&self, args: &[&str], env: &mut EnvStore) -> Result<Outcome, BuiltinError> {
        match self {
            BuiltinKind::Cd => CdCommand.execute(args, env),
            BuiltinKind::Exit => ExitCommand.execute(args, env),
            BuiltinKind::Set => SetCommand.execute(args, env),
            BuiltinKind::Unset => UnsetCommand.execute(args, env),
            BuiltinKind::Vars => VarsCommand.execute(args, env),
        }
    }
}

/// Routes a tokenized line to a builtin or to the process launcher.
#[derive(Debug, Clone, Default)]
pub struct CommandExecutor {
    launcher: Launcher,
    last_status: i32,
}

impl CommandExecutor {
    pub fn new(launcher: Launcher) -> Self {
        Self {
            launcher,
            last_status: 0,
        }
    }

    pub fn execute(&mut self, tokens: &[&str], env: &mut EnvStore) -> Result<Outcome, CommandError> {
        let result = self.dispatch(tokens, env);
        if let Err(e) = &result {
            self.last_status = e.status();
        }
        result
    }

    fn dispatch(&mut self, tokens: &[&str], env: &mut EnvStore) -> Result<Outcome, CommandError> {
        let Some((&name, args)) = tokens.split_first() else {
            return Ok(Outcome::Continue);
        };

        match BuiltinKind::from_name(name) {
            Some(builtin) => {
                debug!(builtin = name, "running builtin");
                let outcome = builtin.execute(args, env)?;
                self.last_status = 0;
                Ok(outcome)
            }
            None => {
                self.last_status = self.launcher.execute(tokens, env)?;
                if self.last_status != 0 {
                    debug!(program = name, status = self.last_status, "command failed");
                }
                Ok(Outcome::Continue)
            }
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        BuiltinKind::from_name(command).is_some()
    }

    /// Status of the most recently executed line.
    pub fn last_status(&self) -> i32 {
        self.last_status
    }
}
