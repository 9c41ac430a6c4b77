// ============================================================================
// APP CONTEXT - Collaborators shared with every component
// ============================================================================
// Built once at startup and handed down through a Yew ContextProvider.
// The navigation store lives here, not on the router, so both the
// navigation layer and the views receive it explicitly.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::config::AppConfig;
use crate::router::{MountedViews, Navigation};
use crate::services::{AnalyticsReporter, ApiClient, NoopReporter};
use crate::stores::NavigationStore;
use crate::utils::IconRegistry;

#[derive(Clone)]
pub struct AppContext {
    pub api: ApiClient,
    pub navigation_store: NavigationStore,
    pub navigation: Rc<Navigation>,
    pub analytics: Rc<dyn AnalyticsReporter>,
    pub icons: Rc<IconRegistry>,
}

impl AppContext {
    pub fn new(config: &AppConfig, analytics: Rc<dyn AnalyticsReporter>) -> Self {
        let navigation_store = NavigationStore::new();
        let navigation = Navigation::new(
            navigation_store.clone(),
            MountedViews::new(),
            analytics.clone(),
        );
        Self {
            api: ApiClient::from_config(config),
            navigation_store,
            navigation: Rc::new(navigation),
            analytics,
            icons: Rc::new(IconRegistry::with_defaults()),
        }
    }
}

/// Detached context for components rendered outside the provider
impl Default for AppContext {
    fn default() -> Self {
        log::warn!("⚠️ AppContext missing, using a detached default");
        Self::new(&AppConfig::default(), Rc::new(NoopReporter))
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.navigation, &other.navigation)
    }
}

#[derive(Properties, PartialEq)]
pub struct AppContextProviderProps {
    pub context: AppContext,
    pub children: Children,
}

#[function_component(AppContextProvider)]
pub fn app_context_provider(props: &AppContextProviderProps) -> Html {
    html! {
        <ContextProvider<AppContext> context={props.context.clone()}>
            {props.children.clone()}
        </ContextProvider<AppContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_collaborators() {
        let ctx = AppContext::new(&AppConfig::default(), Rc::new(NoopReporter));
        let clone = ctx.clone();
        assert!(ctx == clone);
        assert_eq!(ctx.navigation_store, clone.navigation_store);
        assert!(ctx != AppContext::new(&AppConfig::default(), Rc::new(NoopReporter)));
        assert_eq!(ctx.api.url("/api/quote"), "http://127.0.0.1:5001/api/quote");
    }
}
