use yew::prelude::*;

use crate::context::AppContext;
use crate::router::LearnMoreParams;
use crate::stores::{LearnMoreAction, LearnMoreStore};
use crate::viewmodels::LearnMoreViewModel;

/// Fetches the explanation whenever the route parameters change
#[hook]
pub fn use_learn_more(params: &LearnMoreParams) -> UseReducerHandle<LearnMoreStore> {
    let ctx = use_context::<AppContext>().unwrap_or_default();
    let state = use_reducer(LearnMoreStore::default);
    let next_request = use_mut_ref(|| 0u64);

    {
        let state = state.clone();
        let vm = LearnMoreViewModel::new(ctx.api.clone());
        use_effect_with(params.clone(), move |params| {
            let params = params.clone();
            let request = {
                let mut counter = next_request.borrow_mut();
                *counter += 1;
                *counter
            };
            state.dispatch(LearnMoreAction::Started(request));
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.explain(&params).await;
                match result {
                    Ok(content) => state.dispatch(LearnMoreAction::Loaded { request, content }),
                    Err(message) => state.dispatch(LearnMoreAction::Failed { request, message }),
                }
            });
            || ()
        });
    }

    state
}
