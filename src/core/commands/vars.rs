use std::io::{self, Write};

use super::{Builtin, BuiltinError, Outcome};
use crate::core::env::EnvStore;

/// Lists the shell-owned variables as `NAME=value`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VarsCommand;

impl VarsCommand {
    fn write_to(&self, out: &mut impl Write, store: &EnvStore) -> io::Result<()> {
        for entry in store.iter() {
            writeln!(out, "{}={}", entry.name, entry.value)?;
        }
        out.flush()
    }
}

impl Builtin for VarsCommand {
    fn execute(&self, _args: &[&str], store: &mut EnvStore) -> Result<Outcome, BuiltinError> {
        self.write_to(&mut io::stdout().lock(), store)
            .map_err(|source| BuiltinError::Output {
                command: "vars",
                source,
            })?;
        Ok(Outcome::Continue)
    }
}
