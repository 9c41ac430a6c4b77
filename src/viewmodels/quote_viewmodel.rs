// ============================================================================
// QUOTE VIEWMODEL - Asking the backend for a quote
// ============================================================================
// Returns values; the hooks update state.
// ============================================================================

use std::rc::Rc;

use crate::models::Quote;
use crate::services::{AnalyticsReporter, ApiClient, ApiError};
use crate::utils::constants::{EVENT_ASK_QUESTION, EVENT_LEARN_MORE};

pub const EMPTY_QUESTION_MESSAGE: &str = "Please enter a question or topic first.";

pub fn validate_question(question: &str) -> Result<&str, String> {
    let question = question.trim();
    if question.is_empty() {
        Err(EMPTY_QUESTION_MESSAGE.to_string())
    } else {
        Ok(question)
    }
}

#[derive(Clone)]
pub struct QuoteViewModel {
    api: ApiClient,
    analytics: Rc<dyn AnalyticsReporter>,
}

impl QuoteViewModel {
    pub fn new(api: ApiClient, analytics: Rc<dyn AnalyticsReporter>) -> Self {
        Self { api, analytics }
    }

    pub async fn ask(&self, question: &str) -> Result<Quote, String> {
        let question = validate_question(question)?;
        log::info!("💬 Asking for a quote: {:?}", question);

        let response = self
            .api
            .get_quote(question)
            .await
            .map_err(|e| e.user_message())?;

        let quote = Quote::parse(&response.quote).map_err(|e| {
            log::error!("❌ Quote rejected ({}): {:?}", e, response.quote);
            ApiError::from(e).user_message()
        })?;

        log::info!("✅ Quote received from {}", quote.philosopher);
        self.analytics.track(
            EVENT_ASK_QUESTION,
            serde_json::json!({ "philosopher": quote.philosopher }),
        );
        Ok(quote)
    }

    pub fn record_learn_more(&self, quote: &Quote) {
        self.analytics.track(
            EVENT_LEARN_MORE,
            serde_json::json!({ "philosopher": quote.philosopher, "source": quote.source }),
        );
    }
}
