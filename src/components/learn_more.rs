use yew::prelude::*;
use yew_router::prelude::*;

use super::Icon;
use crate::hooks::use_learn_more;
use crate::router::{LearnMoreParams, Route};

#[derive(Properties, PartialEq)]
pub struct LearnMoreProps {
    pub params: LearnMoreParams,
}

#[function_component(LearnMore)]
pub fn learn_more(props: &LearnMoreProps) -> Html {
    let state = use_learn_more(&props.params);
    let quote = &props.params.quote;

    html! {
        <main class="learn-more">
            <Link<Route> to={Route::Home} classes={classes!("btn-back")}>
                <Icon name="mdiArrowLeft" size={20} />
                {"Back"}
            </Link<Route>>

            <header class="learn-more-header">
                <blockquote class="quote-text">{&quote.text}</blockquote>
                <p class="quote-attribution">{quote.attribution().to_string()}</p>
                if !props.params.user_question.is_empty() {
                    <p class="user-question">{format!("Your question: {}", props.params.user_question)}</p>
                }
            </header>

            if state.loading {
                <div class="loading">
                    <Icon name="mdiLoading" class={classes!("spin")} size={32} />
                    <span>{"Reading up on this thinker..."}</span>
                </div>
            }

            if let Some(error) = &state.error {
                <div class="error-banner" role="alert">
                    <Icon name="mdiAlertCircleOutline" />
                    <span>{error}</span>
                </div>
            }

            if let Some(content) = &state.content {
                <article class="learn-more-content">
                    { Html::from_html_unchecked(AttrValue::from(content.clone())) }
                </article>
            }
        </main>
    }
}
