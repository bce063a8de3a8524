use super::{Builtin, BuiltinError, Outcome};
use crate::core::env::EnvStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct UnsetCommand;

impl Builtin for UnsetCommand {
    fn execute(&self, args: &[&str], store: &mut EnvStore) -> Result<Outcome, BuiltinError> {
        if args.is_empty() {
            return Err(BuiltinError::InvalidUsage {
                command: "unset",
                usage: "unset <name>...",
            });
        }

        for name in args {
            store.unset(name);
        }
        Ok(Outcome::Continue)
    }
}
