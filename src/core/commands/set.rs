use tracing::debug;

use super::{Builtin, BuiltinError, Outcome};
use crate::core::env::EnvStore;

const USAGE: &str = "set <name> <value> [owner]";

#[derive(Debug, Clone, Copy, Default)]
pub struct SetCommand;

impl Builtin for SetCommand {
    fn execute(&self, args: &[&str], store: &mut EnvStore) -> Result<Outcome, BuiltinError> {
        let [name, value, rest @ ..] = args else {
            return Err(BuiltinError::InvalidUsage {
                command: "set",
                usage: USAGE,
            });
        };

        // the owner label is accepted for compatibility but carries no meaning
        if let Some(owner) = rest.first() {
            debug!(name, owner, "ignoring owner label");
        }

        store.set(name, value);
        Ok(Outcome::Continue)
    }
}
