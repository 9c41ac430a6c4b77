use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::Icon;
use crate::hooks::use_subscription;

#[function_component(SubscribeForm)]
pub fn subscribe_form() -> Html {
    let handle = use_subscription();
    let state = handle.state.clone();

    let oninput = {
        let set_email = handle.set_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_email.emit(input.value());
        })
    };

    let onsubmit = {
        let submit = handle.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <section class="subscribe">
            <h2>{"A thought a week, in your inbox"}</h2>
            <form class="subscribe-form" {onsubmit}>
                <Icon name="mdiEmailOutline" size={20} />
                <input
                    type="email"
                    placeholder="you@example.com"
                    value={state.email.clone()}
                    {oninput}
                    disabled={state.submitting}
                />
                <button type="submit" disabled={state.submitting}>
                    { if state.submitting { "Subscribing..." } else { "Subscribe" } }
                </button>
            </form>
            if let Some(notice) = &state.notice {
                <p class={classes!("notice", notice.is_error.then_some("notice-error"))}>
                    {&notice.message}
                </p>
            }
        </section>
    }
}
