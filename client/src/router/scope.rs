//! Per-mount scope handed to page initializers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page `init` callbacks start async fetches the router never awaits. Each
//! mount gets a fresh [`CancelToken`]; the router cancels it before the next
//! page mounts, so a late response can tell it belongs to a page that is gone.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation flag. Clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Handle given to a page's `init` for the lifetime of one mount.
#[derive(Clone)]
pub struct PageScope {
    token: CancelToken,
    navigate: Rc<dyn Fn(&str)>,
}

impl PageScope {
    pub fn new(token: CancelToken, navigate: Rc<dyn Fn(&str)>) -> Self {
        Self { token, navigate }
    }

    /// Token to move into spawned tasks.
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Request navigation. Handled after the current mount completes.
    pub fn navigate(&self, path: &str) {
        (self.navigate)(path);
    }
}

impl std::fmt::Debug for PageScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageScope").field("token", &self.token).finish_non_exhaustive()
    }
}
