// ============================================================================
// NAVIGATION STORE - Holder of the navigation snapshot
// ============================================================================
// Written by the navigation guard, read by the home view on mount.
// Shared through the app context; clones point at the same holder.
// Reading never clears: a snapshot lives until the next qualifying
// navigation overwrites it.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::NavigationSnapshot;

#[derive(Clone, Default)]
pub struct NavigationStore {
    snapshot: Rc<RefCell<Option<NavigationSnapshot>>>,
}

impl NavigationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previous snapshot. Never merges.
    pub fn replace(&self, snapshot: NavigationSnapshot) {
        *self.snapshot.borrow_mut() = Some(snapshot);
    }

    pub fn snapshot(&self) -> Option<NavigationSnapshot> {
        self.snapshot.borrow().clone()
    }

    pub fn is_present(&self) -> bool {
        self.snapshot.borrow().is_some()
    }
}

impl PartialEq for NavigationStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.snapshot, &other.snapshot)
    }
}

impl std::fmt::Debug for NavigationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationStore")
            .field("snapshot", &*self.snapshot.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = NavigationStore::new();
        assert!(!store.is_present());
        assert_eq!(store.snapshot(), None);
    }

    #[test]
    fn clones_share_the_holder() {
        let store = NavigationStore::new();
        let view_side = store.clone();
        store.replace(NavigationSnapshot::new(Vec::new(), "Why?"));
        assert_eq!(view_side.snapshot().unwrap().question, "Why?");
        assert_eq!(store, view_side);
        assert_ne!(store, NavigationStore::new());
    }

    #[test]
    fn reading_does_not_consume() {
        let store = NavigationStore::new();
        store.replace(NavigationSnapshot::new(Vec::new(), "Q"));
        assert!(store.snapshot().is_some());
        assert!(store.snapshot().is_some());
        assert!(store.is_present());
    }
}
