// ============================================================================
// API MODELS - Request/response bodies of the quote backend
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::quote::Quote;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnMoreRequest {
    pub quote: String,
    pub philosopher: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(rename = "userQuestion")]
    pub user_question: String,
}

impl LearnMoreRequest {
    pub fn new(quote: &Quote, user_question: &str) -> Self {
        Self {
            quote: quote.text.clone(),
            philosopher: quote.philosopher.clone(),
            source: quote.source.clone(),
            year: quote.year.clone(),
            user_question: user_question.to_string(),
        }
    }
}

/// `content` is an HTML fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnMoreResponse {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscribeResponse {
    pub message: String,
}

/// Body of every non-2xx response. `error` is safe to show to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub dev_error: Option<String>,
}

impl ApiErrorBody {
    pub fn user_message(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}
