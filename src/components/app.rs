use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::{AppContext, AppContextProvider};
use crate::router::RouterOutlet;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub context: AppContext,
}

/// Application shell: context, router, outlet
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <AppContextProvider context={props.context.clone()}>
            <BrowserRouter>
                <RouterOutlet />
            </BrowserRouter>
        </AppContextProvider>
    }
}
