// ============================================================================
// NAVIGATION - Glue between route changes, the guard and analytics
// ============================================================================

use std::rc::Rc;

use serde::Serialize;
use yew_router::Routable;

use crate::router::{GuardOutcome, MountedViews, NavigationGuard, Route};
use crate::services::AnalyticsReporter;
use crate::stores::NavigationStore;

/// Pageview event properties
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageView {
    pub page: &'static str,
    pub path: String,
}

impl PageView {
    pub fn for_route(route: &Route) -> Self {
        Self {
            page: route.name().as_str(),
            path: route.to_path(),
        }
    }
}

pub struct Navigation {
    guard: NavigationGuard,
    views: MountedViews,
    analytics: Rc<dyn AnalyticsReporter>,
}

impl Navigation {
    pub fn new(
        store: NavigationStore,
        views: MountedViews,
        analytics: Rc<dyn AnalyticsReporter>,
    ) -> Self {
        Self {
            guard: NavigationGuard::new(store),
            views,
            analytics,
        }
    }

    pub fn views(&self) -> &MountedViews {
        &self.views
    }

    /// Called once per route change, before the destination view renders.
    /// `from` is `None` on the initial load.
    pub fn transition(&self, from: Option<&Route>, to: &Route) -> GuardOutcome {
        let outcome = match from {
            Some(from) => {
                log::debug!("🧭 Navigation {} -> {}", from.name().as_str(), to.name().as_str());
                let outgoing = self.views.resolve(from.name());
                self.guard.before_each(from.name(), to.name(), outgoing.as_deref())
            }
            None => GuardOutcome::Proceed,
        };

        self.analytics.track_pageview(&PageView::for_route(to));
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NavigationSnapshot, Quote};
    use crate::router::SnapshotSource;
    use crate::services::analytics::RecordingReporter;
    use std::cell::RefCell;

    fn detail() -> Route {
        Route::LearnMore {
            author_info: "Simone Weil, Gravity and Grace".to_string(),
            user_question: "why".to_string(),
            quote: "Attention".to_string(),
        }
    }

    fn setup() -> (Navigation, NavigationStore, Rc<RecordingReporter>) {
        let store = NavigationStore::new();
        let reporter = Rc::new(RecordingReporter::default());
        let navigation = Navigation::new(store.clone(), MountedViews::new(), reporter.clone());
        (navigation, store, reporter)
    }

    #[test]
    fn initial_load_only_tracks_pageview() {
        let (navigation, store, reporter) = setup();
        assert_eq!(navigation.transition(None, &Route::Home), GuardOutcome::Proceed);
        assert!(!store.is_present());
        assert_eq!(reporter.pageviews(), vec![PageView { page: "Home", path: "/".to_string() }]);
    }

    #[test]
    fn leaving_mounted_home_saves_snapshot() {
        let (navigation, store, reporter) = setup();
        let quote = Quote {
            text: "Attention is the rarest and purest form of generosity.".to_string(),
            philosopher: "Simone Weil".to_string(),
            source: "Letters".to_string(),
            year: None,
        };
        let live: Rc<RefCell<crate::stores::HomeStore>> = Rc::new(RefCell::new(
            crate::stores::HomeStore::restored(NavigationSnapshot::new(vec![quote.clone()], "why")),
        ));
        let source: Rc<dyn SnapshotSource> = live;
        let _mounted = navigation.views().mount(crate::router::RouteName::Home, &source);

        navigation.transition(Some(&Route::Home), &detail());

        assert_eq!(store.snapshot(), Some(NavigationSnapshot::new(vec![quote], "why")));
        assert_eq!(reporter.pageviews().len(), 1);
        assert_eq!(reporter.pageviews()[0].page, "LearnMore");
    }

    #[test]
    fn unmounted_home_is_a_no_op() {
        let (navigation, store, _) = setup();
        assert_eq!(navigation.transition(Some(&Route::Home), &detail()), GuardOutcome::Proceed);
        assert!(!store.is_present());
    }
}
