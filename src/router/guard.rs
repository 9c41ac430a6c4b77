// ============================================================================
// NAVIGATION GUARD - Runs before every route change
// ============================================================================
// home -> learn-more copies the outgoing home view state into the
// navigation store. Every other edge is left alone. The guard can never
// cancel or redirect a navigation.
// ============================================================================

use crate::router::{RouteName, SnapshotSource};
use crate::stores::NavigationStore;

/// Result of a guard run. There is no way to block a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Proceed,
}

#[derive(Clone)]
pub struct NavigationGuard {
    store: NavigationStore,
}

impl NavigationGuard {
    pub fn new(store: NavigationStore) -> Self {
        Self { store }
    }

    pub fn is_qualifying(from: RouteName, to: RouteName) -> bool {
        from == RouteName::Home && to == RouteName::LearnMore
    }

    /// `outgoing` is the view being left, if it is still reachable
    pub fn before_each(
        &self,
        from: RouteName,
        to: RouteName,
        outgoing: Option<&dyn SnapshotSource>,
    ) -> GuardOutcome {
        if !Self::is_qualifying(from, to) {
            return GuardOutcome::Proceed;
        }

        match outgoing.and_then(|view| view.capture()) {
            Some(snapshot) => {
                log::debug!(
                    "💾 Navigation snapshot saved: {} quotes, question {:?}",
                    snapshot.quotes.len(),
                    snapshot.question
                );
                self.store.replace(snapshot);
            }
            None => log::debug!("Home view not reachable, snapshot skipped"),
        }

        GuardOutcome::Proceed
    }
}
