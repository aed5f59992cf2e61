//! Navigation history.
//!
//! The reconciler needs three things from whatever hosts it: the current
//! route, a way to navigate (new entry) and a way to replace (same entry).
//! [`History`] captures exactly that. [`MemoryHistory`] is the in-process
//! implementation used by the CLI and by tests, with back/forward so the
//! difference between push and replace is observable.

use crate::route::Route;

pub trait History {
    fn current(&self) -> &Route;

    /// Navigate to `route`, adding a history entry.
    fn push(&mut self, route: Route);

    /// Swap the current entry for `route` without adding one.
    fn replace(&mut self, route: Route);
}

#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Route>,
    cursor: usize,
    replacements: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

#[allow(clippy::len_without_is_empty)]
impl MemoryHistory {
    pub fn new(initial: Route) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            replacements: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// How many replace-style navigations have happened.
    pub fn replacements(&self) -> usize {
        self.replacements
    }

    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

impl History for MemoryHistory {
    fn current(&self) -> &Route {
        &self.entries[self.cursor]
    }

    fn push(&mut self, route: Route) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(route);
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, route: Route) {
        self.entries[self.cursor] = route;
        self.replacements += 1;
    }
}
