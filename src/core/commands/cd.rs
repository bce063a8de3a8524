use std::env;
use std::path::PathBuf;

use super::{Builtin, BuiltinError, Outcome};
use crate::core::env::EnvStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct CdCommand;

impl Builtin for CdCommand {
    fn execute(&self, args: &[&str], store: &mut EnvStore) -> Result<Outcome, BuiltinError> {
        let target = match args.first() {
            Some(path) => PathBuf::from(*path),
            None => store
                .get("HOME")
                .map(|home| PathBuf::from(home.into_owned()))
                .ok_or(BuiltinError::HomeNotSet)?,
        };

        env::set_current_dir(&target)
            .map_err(|source| BuiltinError::ChangeDirectoryFailed {
                path: target,
                source,
            })?;
        Ok(Outcome::Continue)
    }
}
