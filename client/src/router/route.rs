//! Route registry: page paths, route definitions, and the validated table.
//!
//! DESIGN
//! ======
//! Paths are a closed enum so every string conversion is an exhaustive match.
//! The table is checked once at construction; after that, lookups cannot
//! produce a redirect cycle because both landing pages are guaranteed to exist
//! and `login` is always reachable without a session.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use std::collections::HashMap;
use std::fmt;

use super::scope::PageScope;

/// Every navigable page in the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PagePath {
    Login,
    Dashboard,
    Tareas,
    Areas,
    Usuarios,
    Riesgo,
    Duracion,
    Recomendacion,
    Rendimiento,
    Procesos,
}

impl PagePath {
    pub const ALL: [PagePath; 10] = [
        PagePath::Login,
        PagePath::Dashboard,
        PagePath::Tareas,
        PagePath::Areas,
        PagePath::Usuarios,
        PagePath::Riesgo,
        PagePath::Duracion,
        PagePath::Recomendacion,
        PagePath::Rendimiento,
        PagePath::Procesos,
    ];

    /// Fragment key for this page (no leading `#`).
    pub fn as_str(self) -> &'static str {
        match self {
            PagePath::Login => "login",
            PagePath::Dashboard => "dashboard",
            PagePath::Tareas => "tareas",
            PagePath::Areas => "areas",
            PagePath::Usuarios => "usuarios",
            PagePath::Riesgo => "riesgo",
            PagePath::Duracion => "duracion",
            PagePath::Recomendacion => "recomendacion",
            PagePath::Rendimiento => "rendimiento",
            PagePath::Procesos => "procesos",
        }
    }

    /// Exact, case-sensitive match of a fragment key.
    pub fn parse(key: &str) -> Option<PagePath> {
        match key {
            "login" => Some(PagePath::Login),
            "dashboard" => Some(PagePath::Dashboard),
            "tareas" => Some(PagePath::Tareas),
            "areas" => Some(PagePath::Areas),
            "usuarios" => Some(PagePath::Usuarios),
            "riesgo" => Some(PagePath::Riesgo),
            "duracion" => Some(PagePath::Duracion),
            "recomendacion" => Some(PagePath::Recomendacion),
            "rendimiento" => Some(PagePath::Rendimiento),
            "procesos" => Some(PagePath::Procesos),
            _ => None,
        }
    }

    /// Landing page for the given session state.
    pub fn landing(authenticated: bool) -> PagePath {
        if authenticated { PagePath::Dashboard } else { PagePath::Login }
    }
}

impl fmt::Display for PagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One navigable page: how to draw it and what to wire up afterwards.
///
/// `V` is whatever the mount target consumes; the browser build uses
/// `AnyView`, native tests use plain markup strings.
pub struct RouteDefinition<V> {
    pub path: PagePath,
    pub render: fn() -> V,
    pub init: Option<fn(&PageScope)>,
    pub requires_auth: bool,
}

impl<V> RouteDefinition<V> {
    /// Route reachable only with an active session.
    pub fn protected(path: PagePath, render: fn() -> V) -> Self {
        Self { path, render, init: None, requires_auth: true }
    }

    /// Route reachable without a session.
    pub fn public(path: PagePath, render: fn() -> V) -> Self {
        Self { path, render, init: None, requires_auth: false }
    }

    #[must_use]
    pub fn with_init(mut self, init: fn(&PageScope)) -> Self {
        self.init = Some(init);
        self
    }
}

impl<V> Clone for RouteDefinition<V> {
    fn clone(&self) -> Self {
        Self { path: self.path, render: self.render, init: self.init, requires_auth: self.requires_auth }
    }
}

impl<V> fmt::Debug for RouteDefinition<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDefinition")
            .field("path", &self.path)
            .field("has_init", &self.init.is_some())
            .field("requires_auth", &self.requires_auth)
            .finish_non_exhaustive()
    }
}

/// Error returned by [`RouteTable::new`] for a misconfigured registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("route `{0}` is registered more than once")]
    DuplicatePath(PagePath),
    #[error("landing route `{0}` is not registered")]
    MissingLanding(PagePath),
    #[error("route `login` must not require authentication")]
    GuardedLogin,
}

/// Validated, immutable path -> route registry.
pub struct RouteTable<V> {
    routes: HashMap<PagePath, RouteDefinition<V>>,
}

impl<V> RouteTable<V> {
    /// Build the registry from route definitions. Ordering is irrelevant.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::DuplicatePath`] when a path appears twice,
    /// [`RouterError::MissingLanding`] when `login` or `dashboard` is absent,
    /// and [`RouterError::GuardedLogin`] when `login` requires a session.
    pub fn new(definitions: Vec<RouteDefinition<V>>) -> Result<Self, RouterError> {
        let mut routes = HashMap::with_capacity(definitions.len());
        for def in definitions {
            let path = def.path;
            if routes.insert(path, def).is_some() {
                return Err(RouterError::DuplicatePath(path));
            }
        }
        for landing in [PagePath::Login, PagePath::Dashboard] {
            if !routes.contains_key(&landing) {
                return Err(RouterError::MissingLanding(landing));
            }
        }
        if routes.get(&PagePath::Login).is_some_and(|r| r.requires_auth) {
            return Err(RouterError::GuardedLogin);
        }
        Ok(Self { routes })
    }

    /// Exact-match lookup of a fragment key.
    pub fn find(&self, key: &str) -> Option<&RouteDefinition<V>> {
        PagePath::parse(key).and_then(|path| self.routes.get(&path))
    }

    pub fn get(&self, path: PagePath) -> Option<&RouteDefinition<V>> {
        self.routes.get(&path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Registered paths in declaration order of [`PagePath::ALL`].
    pub fn paths(&self) -> impl Iterator<Item = PagePath> + '_ {
        PagePath::ALL.into_iter().filter(|p| self.routes.contains_key(p))
    }
}
