//! Cancellation token for the watch loop

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag that stops a running scheduler.
///
/// Cloning shares the flag, so a clone can be handed to a signal handler.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let token = CancellationToken::new();
        let handle = token.clone();
        assert!(!token.is_cancelled());

        handle.cancel();

        assert!(token.is_cancelled());
    }
}
