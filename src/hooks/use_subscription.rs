use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::context::AppContext;
use crate::stores::{SubscriptionAction, SubscriptionStore};
use crate::utils::constants::NOTICE_TIMEOUT_MS;
use crate::viewmodels::SubscriptionViewModel;

#[derive(Clone)]
pub struct UseSubscriptionHandle {
    pub state: UseReducerHandle<SubscriptionStore>,
    pub set_email: Callback<String>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_subscription() -> UseSubscriptionHandle {
    let ctx = use_context::<AppContext>().unwrap_or_default();
    let state = use_reducer(SubscriptionStore::default);
    // Pending notice dismissal; replacing it cancels the previous timer
    let notice_timer = use_mut_ref(|| None::<Timeout>);
    let attempts = use_mut_ref(|| 0u64);

    let set_email = {
        let state = state.clone();
        Callback::from(move |email: String| state.dispatch(SubscriptionAction::SetEmail(email)))
    };

    let submit = {
        let state = state.clone();
        let vm = SubscriptionViewModel::new(ctx.api.clone(), ctx.analytics.clone());
        Callback::from(move |_| {
            if state.submitting {
                return;
            }
            notice_timer.borrow_mut().take();
            let attempt = {
                let mut counter = attempts.borrow_mut();
                *counter += 1;
                *counter
            };
            state.dispatch(SubscriptionAction::Started(attempt));
            let state = state.clone();
            let vm = vm.clone();
            let notice_timer = notice_timer.clone();
            let email = state.email.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.subscribe(&email).await;
                match result {
                    Ok(message) => state.dispatch(SubscriptionAction::Succeeded(message)),
                    Err(message) => state.dispatch(SubscriptionAction::Failed(message)),
                }
                let timer = Timeout::new(NOTICE_TIMEOUT_MS, move || {
                    state.dispatch(SubscriptionAction::DismissNotice(attempt))
                });
                *notice_timer.borrow_mut() = Some(timer);
            });
        })
    };

    UseSubscriptionHandle {
        state,
        set_email,
        submit,
    }
}
