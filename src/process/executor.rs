use std::borrow::Cow;
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, ExitStatus};

use tracing::debug;

use super::{InterruptFlag, LaunchError};
use crate::core::env::EnvStore;

/// Replaces every `$NAME` token with its value from `env`.
///
/// Tokens whose variable cannot be resolved are passed through untouched, `$` included.
pub fn substitute<'a>(tokens: &[&'a str], env: &'a EnvStore) -> Vec<Cow<'a, str>> {
    tokens
        .iter()
        .map(|&token| {
            token
                .strip_prefix('$')
                .filter(|name| !name.is_empty())
                .and_then(|name| env.get(name))
                .unwrap_or(Cow::Borrowed(token))
        })
        .collect()
}

/// Runs external programs in the foreground, one at a time.
#[derive(Debug, Clone, Default)]
pub struct Launcher {
    interrupts: Option<InterruptFlag>,
}

impl Launcher {
    pub fn new(interrupts: Option<InterruptFlag>) -> Self {
        Self { interrupts }
    }

    /// Spawns `tokens[0]` and blocks until it exits, returning its status.
    ///
    /// The child inherits stdio and the process environment, overlaid with the store's entries.
    pub fn execute(&self, tokens: &[&str], env: &EnvStore) -> Result<i32, LaunchError> {
        let args = substitute(tokens, env);
        let Some((program, rest)) = args.split_first() else {
            return Ok(0);
        };

        let mut command = Command::new(&**program);
        command
            .args(rest.iter().map(|arg| &**arg))
            .envs(env.iter().map(|e| (e.name.as_str(), e.value.as_str())));

        let mut child = command
            .spawn()
            .map_err(|e| LaunchError::from_spawn(program, e))?;
        debug!(pid = child.id(), program = %program, "spawned child");

        let status = child.wait().map_err(|source| LaunchError::WaitFailed {
            program: program.to_string(),
            source,
        })?;

        if self.interrupts.as_ref().is_some_and(InterruptFlag::take) {
            println!();
        }

        let code = exit_code(status);
        debug!(pid = child.id(), code, "child reaped");
        Ok(code)
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    status
        .code()
        .unwrap_or_else(|| 128 + status.signal().unwrap_or(0))
}
