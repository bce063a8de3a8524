use std::collections::VecDeque;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

/// Bounded command history persisted as plain text, one command per line.
#[derive(Debug, Clone)]
pub struct PlainHistory {
    entries: VecDeque<String>,
    max_size: usize,
}

impl PlainHistory {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_size,
        }
    }

    pub fn push(&mut self, line: &str) {
        if self.max_size == 0 {
            return;
        }
        if self.entries.len() == self.max_size {
            self.entries.pop_front();
        }
        self.entries.push_back(line.to_string());
    }

    /// Reads `path`, keeping the newest entries. A missing file is an empty history.
    pub fn load(&mut self, path: &Path) -> io::Result<()> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e),
        };

        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            self.push(line);
        }
        debug!(path = %path.display(), entries = self.entries.len(), "history read");
        Ok(())
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut file = io::BufWriter::new(fs::File::create(path)?);
        for entry in &self.entries {
            writeln!(file, "{}", entry)?;
        }
        file.flush()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_as_plain_lines() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("history");

        let mut history = PlainHistory::new(10);
        history.push("echo a\\b");
        history.push("ls");
        history.save(&path)?;

        assert_eq!(fs::read_to_string(&path)?, "echo a\\b\nls\n");
        Ok(())
    }

    #[test]
    fn test_load_keeps_newest() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("history");
        fs::write(&path, "one\n\ntwo\nthree\n")?;

        let mut history = PlainHistory::new(2);
        history.load(&path)?;
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["two", "three"]);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_empty() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut history = PlainHistory::new(5);
        history.load(&dir.path().join("absent"))?;
        assert_eq!(history.iter().count(), 0);
        Ok(())
    }

    #[test]
    fn test_zero_size_keeps_nothing() {
        let mut history = PlainHistory::new(0);
        history.push("ls");
        assert_eq!(history.iter().count(), 0);
    }
}
