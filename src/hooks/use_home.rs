// ============================================================================
// USE HOME HOOK - State and actions of the home view
// ============================================================================
// Restores from the navigation snapshot on mount, keeps a live mirror of
// its state and registers it with the router so the guard can capture it.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::AppContext;
use crate::router::{Route, RouteName, SnapshotSource};
use crate::stores::{HomeAction, HomeStore};
use crate::viewmodels::{validate_question, QuoteViewModel, EMPTY_QUESTION_MESSAGE};

#[derive(Clone)]
pub struct UseHomeHandle {
    pub state: UseReducerHandle<HomeStore>,
    pub set_question: Callback<String>,
    pub ask: Callback<()>,
    /// Index into `state.quotes`
    pub learn_more: Callback<usize>,
    pub dismiss_error: Callback<()>,
}

#[hook]
pub fn use_home() -> UseHomeHandle {
    let ctx = use_context::<AppContext>().unwrap_or_default();
    let navigator = use_navigator();

    let state = {
        let store = ctx.navigation_store.clone();
        use_reducer(move || match store.snapshot() {
            Some(snapshot) => {
                log::info!("♻️ Restoring home view: {} quotes", snapshot.quotes.len());
                HomeStore::restored(snapshot)
            }
            None => HomeStore::default(),
        })
    };

    // Mirror read by the navigation guard; refreshed on every render
    let live = use_mut_ref(HomeStore::default);
    *live.borrow_mut() = (*state).clone();

    {
        let views = ctx.navigation.views().clone();
        let live = live.clone();
        use_effect_with((), move |_| {
            let source: Rc<dyn SnapshotSource> = live;
            let mounted = views.mount(RouteName::Home, &source);
            move || drop(mounted)
        });
    }

    let set_question = {
        let state = state.clone();
        Callback::from(move |question: String| state.dispatch(HomeAction::SetQuestion(question)))
    };

    let ask = {
        let state = state.clone();
        let vm = QuoteViewModel::new(ctx.api.clone(), ctx.analytics.clone());
        Callback::from(move |_| {
            if state.loading {
                return;
            }
            let question = match validate_question(&state.question) {
                Ok(question) => question.to_string(),
                Err(message) => {
                    state.dispatch(HomeAction::AskFailed(message));
                    return;
                }
            };

            state.dispatch(HomeAction::AskStarted);
            let state = state.clone();
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.ask(&question).await;
                match result {
                    Ok(quote) => state.dispatch(HomeAction::QuoteReceived { question, quote }),
                    Err(message) => state.dispatch(HomeAction::AskFailed(message)),
                }
            });
        })
    };

    let learn_more = {
        let state = state.clone();
        let vm = QuoteViewModel::new(ctx.api.clone(), ctx.analytics.clone());
        Callback::from(move |index: usize| {
            let Some(quote) = state.quotes.get(index) else {
                log::warn!("⚠️ No quote at index {}", index);
                return;
            };
            let Some(navigator) = navigator.as_ref() else {
                log::error!("❌ Learn more clicked outside of a router");
                return;
            };
            let Some(route) = state
                .learn_more_question()
                .and_then(|question| Route::learn_more(quote, &question))
            else {
                log::warn!("⚠️ No question to explain the quote against");
                state.dispatch(HomeAction::AskFailed(EMPTY_QUESTION_MESSAGE.to_string()));
                return;
            };
            vm.record_learn_more(quote);
            navigator.push(&route);
        })
    };

    let dismiss_error = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(HomeAction::DismissError))
    };

    UseHomeHandle {
        state,
        set_question,
        ask,
        learn_more,
        dismiss_error,
    }
}
