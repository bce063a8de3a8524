use std::env;
use std::ffi::CStr;

const UNKNOWN: &str = "unknown";
const UNKNOWN_DIR: &str = "(unknown)";

/// User and host names, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user: String,
    host: String,
}

impl Identity {
    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
        }
    }

    pub fn resolve() -> Self {
        Self::new(
            login_name().unwrap_or_else(|| UNKNOWN.to_string()),
            host_name().unwrap_or_else(|| UNKNOWN.to_string()),
        )
    }

    pub fn prompt(&self, cwd: &str) -> String {
        format!("{}@{}:{}$ ", self.user, self.host, cwd)
    }
}

/// The working directory for display, or a placeholder when it cannot be read.
pub fn current_dir_display() -> String {
    env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| UNKNOWN_DIR.to_string())
}

fn login_name() -> Option<String> {
    // SAFETY: getlogin returns null or a pointer to a NUL-terminated static buffer,
    // which is copied out before any other libc call can overwrite it.
    let login = unsafe { libc::getlogin() };
    if !login.is_null() {
        return Some(unsafe { CStr::from_ptr(login) }.to_string_lossy().into_owned());
    }

    // SAFETY: same contract as above for the passwd record and its name field.
    let passwd = unsafe { libc::getpwuid(libc::geteuid()) };
    if !passwd.is_null() {
        let name = unsafe { (*passwd).pw_name };
        if !name.is_null() {
            return Some(unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned());
        }
    }

    env::var("USER").ok()
}

fn host_name() -> Option<String> {
    let mut buf = [0u8; 256];
    // SAFETY: the buffer is valid for `buf.len()` bytes.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len()) };
    if rc != 0 {
        return None;
    }
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    let name = String::from_utf8_lossy(&buf[..end]).into_owned();
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_format() {
        let identity = Identity::new("alice", "box");
        assert_eq!(identity.prompt("/home/alice"), "alice@box:/home/alice$ ");
    }

    #[test]
    fn test_resolve_has_names() {
        let identity = Identity::resolve();
        assert!(!identity.user.is_empty());
        assert!(!identity.host.is_empty());
    }

    #[test]
    fn test_current_dir_display() {
        let shown = current_dir_display();
        assert!(shown.starts_with('/') || shown == UNKNOWN_DIR);
    }
}
