//! Authentication session flag and bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router reads the flag through [`SessionState`] only. Login and logout
//! handlers are the sole writers, through [`SessionStore`].
//!
//! TRADE-OFFS
//! ==========
//! The browser session lives in `localStorage` and is re-read on every query,
//! so a logout in another tab is picked up by the next navigation here.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

#[cfg(feature = "csr")]
const AUTH_FLAG_KEY: &str = "processmart_authenticated";
#[cfg(feature = "csr")]
const TOKEN_KEY: &str = "processmart_token";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("browser storage is unavailable")]
    StorageUnavailable,
    #[error("could not write session to storage")]
    WriteFailed,
}

/// Read-only view of the session used by the router.
pub trait SessionState {
    fn is_authenticated(&self) -> bool;
}

/// Writable session used by login/logout handlers and the API client.
pub trait SessionStore: SessionState {
    fn token(&self) -> Option<String>;
    /// Persist the session. On error nothing is left marked as signed in.
    fn sign_in(&self, token: Option<&str>) -> Result<(), SessionError>;
    fn sign_out(&self);
}

impl<T: SessionState + ?Sized> SessionState for Rc<T> {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}

/// In-memory session for native builds and tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    inner: Rc<RefCell<MemorySessionInner>>,
}

#[derive(Debug, Default)]
struct MemorySessionInner {
    authenticated: bool,
    token: Option<String>,
}

impl MemorySession {
    pub fn new(authenticated: bool) -> Self {
        let session = Self::default();
        session.inner.borrow_mut().authenticated = authenticated;
        session
    }
}

impl SessionState for MemorySession {
    fn is_authenticated(&self) -> bool {
        self.inner.borrow().authenticated
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.inner.borrow().token.clone()
    }

    fn sign_in(&self, token: Option<&str>) -> Result<(), SessionError> {
        let mut inner = self.inner.borrow_mut();
        inner.authenticated = true;
        inner.token = token.map(str::to_owned);
        Ok(())
    }

    fn sign_out(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.authenticated = false;
        inner.token = None;
    }
}

/// Session persisted in browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSession;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionState for LocalSession {
    fn is_authenticated(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            local_storage()
                .and_then(|s| s.get_item(AUTH_FLAG_KEY).ok().flatten())
                .is_some_and(|v| v == "true")
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }
}

impl SessionStore for LocalSession {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn sign_in(&self, token: Option<&str>) -> Result<(), SessionError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(SessionError::StorageUnavailable)?;
            let written = match token {
                Some(token) => storage.set_item(TOKEN_KEY, token),
                None => storage.remove_item(TOKEN_KEY),
            }
            .and_then(|()| storage.set_item(AUTH_FLAG_KEY, "true"));
            if written.is_err() {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(AUTH_FLAG_KEY);
                return Err(SessionError::WriteFailed);
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(SessionError::StorageUnavailable)
        }
    }

    fn sign_out(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(AUTH_FLAG_KEY);
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}
