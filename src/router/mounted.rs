// ============================================================================
// MOUNTED VIEWS - Weak handles to the views currently on screen
// ============================================================================
// A view registers itself while mounted and offers a snapshot of its
// transient state. The navigation layer only ever sees `SnapshotSource`,
// never the view's own fields.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::models::NavigationSnapshot;
use crate::router::RouteName;

/// Capability offered by a view whose state survives navigation
pub trait SnapshotSource {
    /// Up-to-date copy of the view state, `None` when nothing can be read
    fn capture(&self) -> Option<NavigationSnapshot>;
}

#[derive(Clone, Default)]
pub struct MountedViews {
    views: Rc<RefCell<HashMap<RouteName, Weak<dyn SnapshotSource>>>>,
}

impl MountedViews {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `source` for `route`. The registration lasts as long as the
    /// returned token; dropping it unmounts.
    #[must_use = "the view is unmounted as soon as the token is dropped"]
    pub fn mount(&self, route: RouteName, source: &Rc<dyn SnapshotSource>) -> Mounted {
        let weak = Rc::downgrade(source);
        self.views.borrow_mut().insert(route, weak.clone());
        log::debug!("📌 View mounted: {}", route.as_str());
        Mounted {
            views: self.clone(),
            route,
            source: weak,
        }
    }

    /// Live view for `route`, if one is mounted and still alive
    pub fn resolve(&self, route: RouteName) -> Option<Rc<dyn SnapshotSource>> {
        self.views.borrow().get(&route).and_then(Weak::upgrade)
    }

    pub fn is_mounted(&self, route: RouteName) -> bool {
        self.resolve(route).is_some()
    }

    fn unmount(&self, route: RouteName, source: &Weak<dyn SnapshotSource>) {
        let mut views = self.views.borrow_mut();
        // A newer instance of the same view may already have replaced us
        if views.get(&route).is_some_and(|current| Weak::ptr_eq(current, source)) {
            views.remove(&route);
            log::debug!("📤 View unmounted: {}", route.as_str());
        }
    }
}

/// Registration token returned by [`MountedViews::mount`]
pub struct Mounted {
    views: MountedViews,
    route: RouteName,
    source: Weak<dyn SnapshotSource>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.views.unmount(self.route, &self.source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl SnapshotSource for Fixed {
        fn capture(&self) -> Option<NavigationSnapshot> {
            Some(NavigationSnapshot::new(Vec::new(), self.0))
        }
    }

    fn source(question: &'static str) -> Rc<dyn SnapshotSource> {
        Rc::new(Fixed(question))
    }

    #[test]
    fn resolves_while_mounted() {
        let views = MountedViews::new();
        let home = source("Q");
        let token = views.mount(RouteName::Home, &home);
        assert_eq!(views.resolve(RouteName::Home).unwrap().capture().unwrap().question, "Q");
        assert!(!views.is_mounted(RouteName::LearnMore));

        drop(token);
        assert!(!views.is_mounted(RouteName::Home));
    }

    #[test]
    fn dropped_view_is_unreachable() {
        let views = MountedViews::new();
        let home = source("Q");
        let _token = views.mount(RouteName::Home, &home);
        drop(home);
        assert!(views.resolve(RouteName::Home).is_none());
    }

    #[test]
    fn stale_token_keeps_newer_registration() {
        let views = MountedViews::new();
        let old = source("old");
        let new = source("new");
        let old_token = views.mount(RouteName::Home, &old);
        let _new_token = views.mount(RouteName::Home, &new);
        drop(old_token);
        assert_eq!(views.resolve(RouteName::Home).unwrap().capture().unwrap().question, "new");
    }
}
