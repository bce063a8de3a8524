use std::borrow::Cow;
use std::env;

use tracing::{debug, warn};

/// Variables copied from the inherited environment at startup.
const SEEDED_VARS: [&str; 2] = ["HOME", "PATH"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    pub name: String,
    pub value: String,
}

/// Shell-owned variables, kept in insertion order.
///
/// Lookups fall back to the inherited process environment, but nothing written here ever
/// reaches that environment; children see the entries through [`EnvStore::iter`].
#[derive(Debug, Clone, Default)]
pub struct EnvStore {
    entries: Vec<EnvEntry>,
}

impl EnvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `HOME` and `PATH` from the inherited environment.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for name in SEEDED_VARS {
            match env::var(name) {
                Ok(value) => store.set(name, &value),
                Err(e) => warn!("not seeding {}: {}", name, e),
            }
        }
        store
    }

    pub fn set(&mut self, name: &str, value: &str) {
        let value = value.to_owned();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.value = value,
            None => self.entries.push(EnvEntry {
                name: name.to_owned(),
                value,
            }),
        }
        debug!(name, "variable set");
    }

    pub fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        if let Some(entry) = self.entries.iter().find(|e| e.name == name) {
            return Some(Cow::Borrowed(&entry.value));
        }
        if name.is_empty() {
            return None;
        }
        env::var_os(name)
            .and_then(|v| v.into_string().ok())
            .map(Cow::Owned)
    }

    /// Removes `name`, returning whether it was present.
    pub fn unset(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        before != self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnvEntry> {
        self.entries.iter()
    }
}
