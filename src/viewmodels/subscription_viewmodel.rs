use std::rc::Rc;

use crate::services::{AnalyticsReporter, ApiClient};
use crate::utils::constants::EVENT_SUBSCRIBE;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Cheap shape check; the backend has the final word
pub fn validate_email(email: &str) -> Result<&str, String> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    };
    if valid {
        Ok(email)
    } else {
        Err(INVALID_EMAIL_MESSAGE.to_string())
    }
}

#[derive(Clone)]
pub struct SubscriptionViewModel {
    api: ApiClient,
    analytics: Rc<dyn AnalyticsReporter>,
}

impl SubscriptionViewModel {
    pub fn new(api: ApiClient, analytics: Rc<dyn AnalyticsReporter>) -> Self {
        Self { api, analytics }
    }

    pub async fn subscribe(&self, email: &str) -> Result<String, String> {
        let email = validate_email(email)?;
        let response = self
            .api
            .subscribe(email)
            .await
            .map_err(|e| e.user_message())?;
        log::info!("📬 Subscribed to the newsletter");
        self.analytics
            .track(EVENT_SUBSCRIBE, serde_json::json!({ "previous_interactions": 0 }));
        Ok(response.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert_eq!(validate_email(" ada@example.org "), Ok("ada@example.org"));
        assert!(validate_email("a.b+c@mail.co.uk").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in ["", "ada", "@example.org", "ada@", "ada@example", "ada@@example.org", "a da@example.org", "ada@.org"] {
            assert!(validate_email(email).is_err(), "{} should be rejected", email);
        }
    }
}
