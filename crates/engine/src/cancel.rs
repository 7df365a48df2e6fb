use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Run-wide abort flag. Raised by the first failing task, observed by every
/// byte source before it refills.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
