//! URL fragment access for the router.
//!
//! SYSTEM CONTEXT
//! ==============
//! The fragment is the only routing address and the single source of truth
//! for the current page. Writing it never mounts anything directly; it only
//! produces a change event that the router handles like any other.
//!
//! Every `set_fragment` call yields exactly one change event, even when the
//! fragment is unchanged. Browsers fire no `hashchange` in that case, so
//! [`HashLocation`] dispatches a deferred synthetic one.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Read/write access to the routing fragment.
pub trait Location: Clone + 'static {
    /// Current fragment without the leading `#`; empty when absent.
    fn fragment(&self) -> String;

    /// Rewrite the fragment, scheduling one change event.
    fn set_fragment(&self, path: &str);
}

/// Strip a single leading `#` from a raw `location.hash` value.
pub fn strip_hash(raw: &str) -> &str {
    raw.strip_prefix('#').unwrap_or(raw)
}

/// In-memory fragment with a pending change-event counter.
#[derive(Clone, Debug, Default)]
pub struct MemoryLocation {
    inner: Rc<RefCell<MemoryLocationInner>>,
}

#[derive(Debug, Default)]
struct MemoryLocationInner {
    fragment: String,
    pending: usize,
    history: Vec<String>,
}

impl MemoryLocation {
    /// Location whose fragment is `raw` (with or without `#`). No event is
    /// pending; the initial resolution is driven explicitly.
    pub fn new(raw: &str) -> Self {
        let loc = Self::default();
        loc.inner.borrow_mut().fragment = strip_hash(raw).to_owned();
        loc
    }

    /// Consume one pending change event, if any.
    pub fn take_event(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.pending == 0 {
            return false;
        }
        inner.pending -= 1;
        true
    }

    pub fn pending_events(&self) -> usize {
        self.inner.borrow().pending
    }

    /// Every fragment written through `set_fragment`, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.inner.borrow().history.clone()
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> String {
        self.inner.borrow().fragment.clone()
    }

    fn set_fragment(&self, path: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.fragment = strip_hash(path).to_owned();
        let fragment = inner.fragment.clone();
        inner.history.push(fragment);
        inner.pending += 1;
    }
}

/// Browser `window.location.hash`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct HashLocation;

#[cfg(feature = "csr")]
impl Location for HashLocation {
    fn fragment(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|raw| strip_hash(&raw).to_owned())
            .unwrap_or_default()
    }

    fn set_fragment(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let path = strip_hash(path);
        if self.fragment() == path {
            gloo_timers::callback::Timeout::new(0, dispatch_hashchange).forget();
            return;
        }
        if let Err(e) = window.location().set_hash(path) {
            log::warn!("failed to set location hash to {path:?}: {e:?}");
        }
    }
}

#[cfg(feature = "csr")]
fn dispatch_hashchange() {
    let Some(window) = web_sys::window() else {
        return;
    };
    match web_sys::Event::new("hashchange") {
        Ok(event) => {
            let _ = window.dispatch_event(&event);
        }
        Err(e) => log::warn!("failed to build hashchange event: {e:?}"),
    }
}
