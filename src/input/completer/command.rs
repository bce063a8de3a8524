use std::{collections::BTreeSet, env, fs, ops::Bound, os::unix::fs::PermissionsExt};

use rustyline::completion::Pair;

use crate::core::commands::BuiltinKind;

/// Builtin names plus every executable found on `PATH`.
pub struct CommandCompleter {
    commands: BTreeSet<String>,
}

impl CommandCompleter {
    pub fn new() -> Self {
        let mut completer = Self {
            commands: BTreeSet::new(),
        };
        completer.refresh_commands();
        completer
    }

    fn refresh_commands(&mut self) {
        self.commands.clear();
        self.add_builtin_commands();
        self.add_path_commands();
    }

    fn add_builtin_commands(&mut self) {
        for builtin in BuiltinKind::ALL {
            self.commands.insert(builtin.name().to_string());
        }
    }

    fn add_path_commands(&mut self) {
        let Some(path_var) = env::var_os("PATH") else {
            return;
        };

        for dir in env::split_paths(&path_var) {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                let executable = fs::metadata(entry.path())
                    .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
                    .unwrap_or(false);
                if !executable {
                    continue;
                }
                if let Some(name) = entry.file_name().to_str() {
                    self.commands.insert(name.to_string());
                }
            }
        }
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect()
    }
}
