//! Backend catalogs (tasks, areas, users) and their load status.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{Area, Task, User};

/// Fetch status of one remote value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Loadable::Ready(value),
            Err(e) => Loadable::Failed(e.to_string()),
        }
    }
}

impl<T> Loadable<Vec<T>> {
    /// Items when loaded, empty otherwise.
    pub fn items(&self) -> &[T] {
        self.ready().map_or(&[], Vec::as_slice)
    }

    /// Mark as loading without discarding items already shown.
    pub fn begin_refresh(&mut self) {
        if self.ready().is_none() {
            *self = Loadable::Loading;
        }
    }

    fn upsert(&mut self, item: T, same: impl Fn(&T, &T) -> bool) {
        match self {
            Loadable::Ready(items) => match items.iter_mut().find(|existing| same(existing, &item)) {
                Some(existing) => *existing = item,
                None => items.push(item),
            },
            other => *other = Loadable::Ready(vec![item]),
        }
    }

    fn remove(&mut self, keep: impl Fn(&T) -> bool) {
        if let Loadable::Ready(items) = self {
            items.retain(keep);
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub tasks: Loadable<Vec<Task>>,
    pub areas: Loadable<Vec<Area>>,
    pub users: Loadable<Vec<User>>,
}

impl CatalogState {
    /// Insert a created task, or replace the stored copy of an updated one.
    pub fn upsert_task(&mut self, task: Task) {
        self.tasks.upsert(task, |a, b| a.id == b.id);
    }

    pub fn remove_task(&mut self, id: &str) {
        self.tasks.remove(|t| t.id != id);
    }

    pub fn upsert_area(&mut self, area: Area) {
        self.areas.upsert(area, |a, b| a.id == b.id);
    }

    /// Remove an area. Tasks pointing at it keep their id and fall into the
    /// no-area bucket in summaries.
    pub fn remove_area(&mut self, id: &str) {
        self.areas.remove(|a| a.id != id);
    }

    pub fn upsert_user(&mut self, user: User) {
        self.users.upsert(user, |a, b| a.id == b.id);
    }

    pub fn remove_user(&mut self, id: &str) {
        self.users.remove(|u| u.id != id);
    }
}
