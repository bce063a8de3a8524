use tracing::warn;

use super::{Builtin, BuiltinError, Outcome};
use crate::core::env::EnvStore;

/// Status used when `exit` is given something that is not a number.
const STATUS_BAD_ARGUMENT: i32 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCommand;

impl Builtin for ExitCommand {
    fn execute(&self, args: &[&str], _store: &mut EnvStore) -> Result<Outcome, BuiltinError> {
        let code = match args.first() {
            None => 0,
            // only the low byte reaches the parent
            Some(arg) => match arg.parse::<i64>() {
                Ok(code) => (code & 0xff) as i32,
                Err(_) => {
                    eprintln!("nshell: exit: {}: numeric argument required", arg);
                    warn!(arg, "non-numeric exit status");
                    STATUS_BAD_ARGUMENT
                }
            },
        };
        Ok(Outcome::Exit(code))
    }
}
