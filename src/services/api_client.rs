// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// JSON POSTs against the quote backend. Failures are logged here and
// returned to the caller as `ApiError`.
// ============================================================================

use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::{
    ApiErrorBody, LearnMoreRequest, LearnMoreResponse, QuoteFormatError, QuoteRequest,
    QuoteResponse, SubscribeRequest, SubscribeResponse,
};
use crate::utils::constants::{LEARN_MORE_PATH, QUOTE_PATH, SUBSCRIBE_PATH};

const GENERIC_ERROR: &str = "An unexpected error occurred. Please try again later.";
const RATE_LIMIT_ERROR: &str = "We're experiencing high demand. Please try again in a few minutes.";
const INVALID_RESPONSE_ERROR: &str =
    "We couldn't generate a proper response. Please try again or rephrase your query.";
const NETWORK_ERROR: &str =
    "We couldn't reach the quote service. Please check your connection and try again.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("rate limited: {message}")]
    RateLimited { message: String },
    #[error("unauthorized")]
    Unauthorized,
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        user_message: Option<String>,
    },
    #[error("invalid quote: {0}")]
    InvalidQuote(#[from] QuoteFormatError),
}

impl ApiError {
    pub fn from_status(status: u16, status_text: &str, body: Option<ApiErrorBody>) -> Self {
        let user_message = body
            .as_ref()
            .and_then(|b| b.user_message())
            .map(str::to_string);
        match status {
            401 => ApiError::Unauthorized,
            429 => ApiError::RateLimited {
                message: user_message.unwrap_or_else(|| RATE_LIMIT_ERROR.to_string()),
            },
            _ => ApiError::Http {
                status,
                message: body
                    .and_then(|b| b.dev_error)
                    .unwrap_or_else(|| status_text.to_string()),
                user_message,
            },
        }
    }

    /// Text safe to show in the UI
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => NETWORK_ERROR.to_string(),
            ApiError::RateLimited { message } => message.clone(),
            ApiError::Http {
                user_message: Some(message),
                ..
            } => message.clone(),
            ApiError::Parse(_) | ApiError::InvalidQuote(_) => INVALID_RESPONSE_ERROR.to_string(),
            ApiError::Serialization(_) | ApiError::Unauthorized | ApiError::Http { .. } => {
                GENERIC_ERROR.to_string()
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Ask the backend for a quote answering `question`
    pub async fn get_quote(&self, question: &str) -> Result<QuoteResponse, ApiError> {
        let request = QuoteRequest {
            question: question.to_string(),
        };
        self.post_json(QUOTE_PATH, &request).await
    }

    /// HTML explanation of a quote in the context of the user's question
    pub async fn learn_more(&self, request: &LearnMoreRequest) -> Result<LearnMoreResponse, ApiError> {
        log::info!("📖 Learn more: {} ({})", request.philosopher, request.source);
        self.post_json(LEARN_MORE_PATH, request).await
    }

    pub async fn subscribe(&self, email: &str) -> Result<SubscribeResponse, ApiError> {
        let request = SubscribeRequest {
            email: email.to_string(),
        };
        self.post_json(SUBSCRIBE_PATH, &request).await
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let result = self.send(&self.url(path), body).await;
        match &result {
            Err(ApiError::Unauthorized) => log::warn!("⚠️ API Error ({}): unauthorized", path),
            Err(e) => log::error!("❌ API Error ({}): {}", path, e),
            Ok(_) => log::debug!("✅ POST {} ok", path),
        }
        result
    }

    async fn send<B, R>(&self, url: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let status_text = response.status_text();
            let body = response.json::<ApiErrorBody>().await.ok();
            return Err(ApiError::from_status(status, &status_text, body));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}
