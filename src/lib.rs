// ============================================================================
// LIFE STORE - Philosophy quote finder (Yew single-page client)
// ============================================================================
// - Components: Yew function components (rendering only)
// - Hooks: view state + actions, wired to the viewmodels
// - ViewModels: UI logic, return values
// - Services: HTTP and analytics only
// - Stores: state containers (reducers, navigation snapshot)
// - Router: route table, navigation guard, outlet
// ============================================================================

pub mod components;
pub mod config;
pub mod context;
pub mod hooks;
pub mod models;
pub mod router;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;

use crate::components::{App, AppProps};
use crate::config::CONFIG;
use crate::context::AppContext;

/// Initialises logging and analytics, then mounts the app on <body>
pub fn run_app() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 Life Store starting ({} mode, API {})",
        CONFIG.environment,
        CONFIG.api_base_url
    );

    let analytics = services::init_analytics(&CONFIG.analytics);
    let context = AppContext::new(&CONFIG, analytics);

    yew::Renderer::<App>::with_props(AppProps { context }).render();
}
