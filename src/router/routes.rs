use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Home, LearnMore, NotFound};
use crate::models::{Attribution, Quote, QuoteFormatError};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/learn-more/:author_info/:user_question/:quote")]
    LearnMore {
        author_info: String,
        user_question: String,
        quote: String,
    },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route identity compared by the navigation guard
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    LearnMore,
    NotFound,
}

impl RouteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Home => "Home",
            RouteName::LearnMore => "LearnMore",
            RouteName::NotFound => "NotFound",
        }
    }
}

impl Route {
    pub fn name(&self) -> RouteName {
        match self {
            Route::Home => RouteName::Home,
            Route::LearnMore { .. } => RouteName::LearnMore,
            Route::NotFound => RouteName::NotFound,
        }
    }

    /// Builds the detail route for a quote. The router percent-encodes the
    /// parameters, so commas, slashes and `?` survive the path. An empty
    /// segment would not match the route, so a blank question gives `None`.
    pub fn learn_more(quote: &Quote, user_question: &str) -> Option<Self> {
        let user_question = user_question.trim();
        if user_question.is_empty() || quote.text.trim().is_empty() {
            return None;
        }
        Some(Route::LearnMore {
            author_info: quote.attribution().to_string(),
            user_question: user_question.to_string(),
            quote: quote.text.clone(),
        })
    }

    /// Parameters of a learn-more route, `None` for other routes
    pub fn learn_more_params(&self) -> Option<Result<LearnMoreParams, QuoteFormatError>> {
        match self {
            Route::LearnMore {
                author_info,
                user_question,
                quote,
            } => Some(LearnMoreParams::from_decoded(author_info, user_question, quote)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LearnMoreParams {
    pub quote: Quote,
    pub user_question: String,
}

impl LearnMoreParams {
    pub fn from_decoded(
        author_info: &str,
        user_question: &str,
        quote_text: &str,
    ) -> Result<Self, QuoteFormatError> {
        let attribution = Attribution::parse(author_info)?;
        Ok(Self {
            quote: Quote {
                text: quote_text.trim().to_string(),
                philosopher: attribution.philosopher,
                source: attribution.source,
                year: attribution.year,
            },
            user_question: user_question.trim().to_string(),
        })
    }
}

pub fn switch(route: Route) -> Html {
    match route.learn_more_params() {
        Some(Ok(params)) => html! { <LearnMore params={params} /> },
        Some(Err(e)) => {
            log::warn!("⚠️ Invalid learn-more parameters: {}", e);
            html! { <NotFound /> }
        }
        None => match route {
            Route::Home => html! { <Home /> },
            _ => html! { <NotFound /> },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_names() {
        assert_eq!(Route::Home.name(), RouteName::Home);
        assert_eq!(Route::NotFound.name(), RouteName::NotFound);
        let detail = Route::LearnMore {
            author_info: "a".to_string(),
            user_question: "b".to_string(),
            quote: "c".to_string(),
        };
        assert_eq!(detail.name(), RouteName::LearnMore);
        assert_eq!(detail.name().as_str(), "LearnMore");
    }

    #[test]
    fn route_table_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(
            Route::recognize("/learn-more/Seneca/why/time"),
            Some(Route::LearnMore {
                author_info: "Seneca".to_string(),
                user_question: "why".to_string(),
                quote: "time".to_string(),
            })
        );
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn params_from_decoded_values() {
        let params = LearnMoreParams::from_decoded(
            "Hannah Arendt, The Human Condition, 1958",
            " What is work? ",
            "Action, as distinguished from fabrication, is never possible in isolation.",
        )
        .unwrap();
        assert_eq!(params.quote.philosopher, "Hannah Arendt");
        assert_eq!(params.quote.source, "The Human Condition");
        assert_eq!(params.quote.year.as_deref(), Some("1958"));
        assert_eq!(params.user_question, "What is work?");

        assert!(LearnMoreParams::from_decoded("Nobody", "q", "t").is_err());
    }

    #[test]
    fn detail_route_survives_the_path() {
        let quote = Quote {
            text: "What is 100% of nothing? / Still nothing, friend.".to_string(),
            philosopher: "Seneca".to_string(),
            source: "Letters, Book I".to_string(),
            year: Some("65".to_string()),
        };
        assert_eq!(Route::learn_more(&quote, "   "), None);

        let route = Route::learn_more(&quote, " Why? Is it 50% luck / 50% work? ").unwrap();
        let path = route.to_path();
        assert!(path.starts_with("/learn-more/"));
        assert!(!path.contains("%252"));
        assert_eq!(path.matches('/').count(), 4);

        let recognized = Route::recognize(&path).unwrap();
        assert_eq!(recognized, route);

        let params = recognized.learn_more_params().unwrap().unwrap();
        assert_eq!(params.quote, quote);
        assert_eq!(params.user_question, "Why? Is it 50% luck / 50% work?");
    }
}
