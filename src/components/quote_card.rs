use yew::prelude::*;

use super::Icon;
use crate::models::Quote;

#[derive(Properties, PartialEq)]
pub struct QuoteCardProps {
    pub quote: Quote,
    pub index: usize,
    pub on_learn_more: Callback<usize>,
}

#[function_component(QuoteCard)]
pub fn quote_card(props: &QuoteCardProps) -> Html {
    let onclick = {
        let on_learn_more = props.on_learn_more.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| on_learn_more.emit(index))
    };

    html! {
        <article class="quote-card">
            <Icon name="mdiFormatQuoteOpen" size={32} class={classes!("quote-mark")} />
            <blockquote class="quote-text">{&props.quote.text}</blockquote>
            <p class="quote-attribution">
                <span class="philosopher">{&props.quote.philosopher}</span>
                {", "}
                <cite>{&props.quote.source}</cite>
                if let Some(year) = &props.quote.year {
                    <span class="year">{format!(", {}", year)}</span>
                }
            </p>
            <button class="btn-learn-more" {onclick}>
                {"Learn more"}
                <Icon name="mdiChevronRight" size={18} />
            </button>
        </article>
    }
}
