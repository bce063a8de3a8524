use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

/// Records SIGINT deliveries so the shell survives Ctrl-C while a child runs.
///
/// The child gets the default disposition back on exec, so the interrupt still reaches it.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    /// Installs the process-wide SIGINT handler. Only one may exist per process.
    pub fn install() -> Result<Self, ctrlc::Error> {
        let flag = Self::default();
        let handle = flag.clone();
        ctrlc::set_handler(move || {
            handle.0.store(true, Ordering::SeqCst);
        })?;
        debug!("interrupt handler installed");
        Ok(flag)
    }

    /// Returns whether an interrupt arrived since the last call, clearing it.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}
