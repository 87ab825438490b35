//! Hash router with authentication gating and page lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The URL fragment is the single source of truth for which page is shown.
//! Every change event runs one resolution cycle:
//!
//! ```text
//! Resolving -> Redirecting            (unknown path, missing session,
//!                                      or signed-in user on `login`)
//! Resolving -> Mounting -> Mounted    (render, then init)
//! ```
//!
//! Redirects only rewrite the fragment. The corrected page is mounted by the
//! next change event, so there is exactly one mounting code path whether the
//! navigation came from a link, a redirect, or the initial load.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error at runtime. Unknown and unauthorized paths
//! resolve to silent redirects; table misconfiguration is rejected earlier by
//! [`RouteTable::new`].

pub mod location;
pub mod mount;
pub mod route;
pub mod scope;


use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::session::SessionState;

pub use location::{Location, MemoryLocation};
#[cfg(feature = "csr")]
pub use location::HashLocation;
pub use mount::MountTarget;
#[cfg(feature = "csr")]
pub use mount::DomMount;
pub use route::{PagePath, RouteDefinition, RouteTable, RouterError};
pub use scope::{CancelToken, PageScope};

/// Navigate the browser fragment from UI code outside a page `init`, such as
/// login and logout handlers.
pub fn go(path: PagePath) {
    #[cfg(feature = "csr")]
    location::HashLocation.set_fragment(path.as_str());
    #[cfg(not(feature = "csr"))]
    let _ = path;
}

/// Why a resolution cycle ended in a redirect instead of a mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectReason {
    /// The fragment names no registered route.
    UnknownPath,
    /// The route requires a session and none is active.
    Unauthenticated,
    /// A signed-in user asked for the login page.
    AlreadyAuthenticated,
}

/// Result of one [`Router::handle_route_change`] cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    Mounted { path: PagePath },
    Redirected { from: String, to: PagePath, reason: RedirectReason },
}

/// Resolves fragments to pages and drives the mount lifecycle.
pub struct Router<V, S, L, M> {
    table: RouteTable<V>,
    session: S,
    location: L,
    target: M,
    active: Option<CancelToken>,
}

impl<V, S, L, M> Router<V, S, L, M>
where
    S: SessionState,
    L: Location,
    M: MountTarget<V>,
{
    pub fn new(table: RouteTable<V>, session: S, location: L, target: M) -> Self {
        Self { table, session, location, target, active: None }
    }

    /// Fragment key to route; empty fragments map to the landing page.
    pub fn resolve_current_path(&self) -> String {
        let fragment = self.location.fragment();
        if fragment.is_empty() {
            return PagePath::landing(self.session.is_authenticated()).as_str().to_owned();
        }
        fragment
    }

    pub fn find_route(&self, path: &str) -> Option<&RouteDefinition<V>> {
        self.table.find(path)
    }

    /// Rewrite the fragment. Mounting happens on the resulting change event.
    pub fn navigate(&self, path: &str) {
        self.location.set_fragment(path);
    }

    /// Run one resolution cycle for the current fragment.
    pub fn handle_route_change(&mut self) -> RouteOutcome {
        let authenticated = self.session.is_authenticated();
        let path = self.resolve_current_path();

        let Some(route) = self.table.find(&path).cloned() else {
            return self.redirect(path, PagePath::landing(authenticated), RedirectReason::UnknownPath);
        };
        if route.requires_auth && !authenticated {
            return self.redirect(path, PagePath::Login, RedirectReason::Unauthenticated);
        }
        if !route.requires_auth && authenticated && route.path == PagePath::Login {
            return self.redirect(path, PagePath::Dashboard, RedirectReason::AlreadyAuthenticated);
        }

        self.mount(&route);
        RouteOutcome::Mounted { path: route.path }
    }

    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn target(&self) -> &M {
        &self.target
    }

    fn redirect(&self, from: String, to: PagePath, reason: RedirectReason) -> RouteOutcome {
        log::debug!("route {from:?} redirected to {to} ({reason:?})");
        self.navigate(to.as_str());
        RouteOutcome::Redirected { from, to, reason }
    }

    fn mount(&mut self, route: &RouteDefinition<V>) {
        if let Some(prev) = self.active.take() {
            prev.cancel();
        }
        self.target.replace(route.render);

        let token = CancelToken::new();
        self.active = Some(token.clone());
        if let Some(init) = route.init {
            let location = self.location.clone();
            let scope = PageScope::new(token, Rc::new(move |path: &str| location.set_fragment(path)));
            self.target.within(&mut || init(&scope));
        }
        log::debug!("mounted {}", route.path);
    }
}

/// Shared entry point for change events.
///
/// Events that arrive while a cycle is already running (for example a
/// synchronous dispatch from inside a page's `init`) are counted and handled,
/// in order, once the running cycle returns.
pub struct RouterHandle<V, S, L, M> {
    router: Rc<RefCell<Router<V, S, L, M>>>,
    pending: Rc<Cell<usize>>,
}

impl<V, S, L, M> Clone for RouterHandle<V, S, L, M> {
    fn clone(&self) -> Self {
        Self { router: self.router.clone(), pending: self.pending.clone() }
    }
}

impl<V, S, L, M> RouterHandle<V, S, L, M>
where
    S: SessionState,
    L: Location,
    M: MountTarget<V>,
{
    pub fn new(router: Router<V, S, L, M>) -> Self {
        Self { router: Rc::new(RefCell::new(router)), pending: Rc::new(Cell::new(0)) }
    }

    /// Handle one change event. Returns the outcomes of every cycle this call
    /// ran, or nothing when the event was queued behind a running cycle.
    pub fn notify(&self) -> Vec<RouteOutcome> {
        self.pending.set(self.pending.get() + 1);
        let Ok(mut router) = self.router.try_borrow_mut() else {
            return Vec::new();
        };
        let mut outcomes = Vec::new();
        while self.pending.get() > 0 {
            self.pending.set(self.pending.get() - 1);
            outcomes.push(router.handle_route_change());
        }
        outcomes
    }

    /// Borrow the router. Returns `None` when called from inside a running
    /// cycle.
    pub fn with<R>(&self, f: impl FnOnce(&Router<V, S, L, M>) -> R) -> Option<R> {
        let router = self.router.try_borrow().ok()?;
        Some(f(&router))
    }
}
