// ============================================================================
// HOME VIEW - Question form and the quotes received so far
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{Icon, QuoteCard, SubscribeForm};
use crate::hooks::use_home;

#[function_component(Home)]
pub fn home() -> Html {
    let handle = use_home();
    let state = handle.state.clone();

    let oninput = {
        let set_question = handle.set_question.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_question.emit(input.value());
        })
    };

    let onsubmit = {
        let ask = handle.ask.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            ask.emit(());
        })
    };

    let on_dismiss = {
        let dismiss_error = handle.dismiss_error.clone();
        Callback::from(move |_: MouseEvent| dismiss_error.emit(()))
    };

    html! {
        <main class="home">
            <header class="hero">
                <h1>{"Life Store"}</h1>
                <p class="tagline">{"Ask life a question. Hear back from the great thinkers."}</p>
            </header>

            <form class="question-form" {onsubmit}>
                <input
                    type="text"
                    class="question-input"
                    placeholder="What is on your mind?"
                    value={state.question.clone()}
                    {oninput}
                />
                <button type="submit" class="btn-ask" disabled={!state.can_ask()}>
                    if state.loading {
                        <Icon name="mdiLoading" class={classes!("spin")} />
                    } else {
                        <Icon name="mdiSend" />
                    }
                </button>
            </form>

            if let Some(error) = &state.error {
                <div class="error-banner" role="alert">
                    <Icon name="mdiAlertCircleOutline" />
                    <span>{error}</span>
                    <button class="btn-close" onclick={on_dismiss}>
                        <Icon name="mdiClose" size={18} />
                    </button>
                </div>
            }

            <section class="quotes">
                { for state.quotes.iter().enumerate().map(|(index, quote)| html! {
                    <QuoteCard
                        key={index}
                        quote={quote.clone()}
                        {index}
                        on_learn_more={handle.learn_more.clone()}
                    />
                }) }
            </section>

            <SubscribeForm />
        </main>
    }
}
