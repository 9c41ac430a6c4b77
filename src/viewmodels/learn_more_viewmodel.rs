use crate::models::LearnMoreRequest;
use crate::router::LearnMoreParams;
use crate::services::ApiClient;

#[derive(Clone)]
pub struct LearnMoreViewModel {
    api: ApiClient,
}

impl LearnMoreViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn request_for(params: &LearnMoreParams) -> LearnMoreRequest {
        LearnMoreRequest::new(&params.quote, &params.user_question)
    }

    /// HTML fragment explaining the quote, or a user-facing error
    pub async fn explain(&self, params: &LearnMoreParams) -> Result<String, String> {
        let request = Self::request_for(params);
        let response = self
            .api
            .learn_more(&request)
            .await
            .map_err(|e| e.user_message())?;
        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_route_params() {
        let params = LearnMoreParams::from_decoded(
            "Confucius, Analects, 475 BC",
            "How should I learn?",
            "Learning without thought is labor lost.",
        )
        .unwrap();
        let request = LearnMoreViewModel::request_for(&params);
        assert_eq!(request.philosopher, "Confucius");
        assert_eq!(request.source, "Analects");
        assert_eq!(request.year.as_deref(), Some("475 BC"));
        assert_eq!(request.user_question, "How should I learn?");
        assert_eq!(request.quote, "Learning without thought is labor lost.");
    }
}
