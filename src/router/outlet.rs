use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::AppContext;
use crate::router::{switch, GuardOutcome, Route};

/// Renders the current route. Runs the navigation guard during its own
/// render, while the outgoing view is still mounted.
#[function_component(RouterOutlet)]
pub fn router_outlet() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let ctx = use_context::<AppContext>().unwrap_or_default();
    let previous = use_mut_ref(|| None::<Route>);

    let changed = previous.borrow().as_ref() != Some(&route);
    if changed {
        let from = previous.borrow_mut().replace(route.clone());
        let GuardOutcome::Proceed = ctx.navigation.transition(from.as_ref(), &route);
    }

    switch(route)
}
