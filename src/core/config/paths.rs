use std::path::PathBuf;

const HISTORY_FILE: &str = ".nshell_history";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub history_path: Option<PathBuf>,
}

impl ConfigPaths {
    pub fn resolve() -> Self {
        Self::from_home(dirs::home_dir())
    }

    pub fn from_home(home: Option<PathBuf>) -> Self {
        ConfigPaths {
            history_path: home.map(|h| h.join(HISTORY_FILE)),
        }
    }
}
