use serde::{Deserialize, Serialize};

use crate::models::quote::Quote;

/// Transient home-view state preserved across the home -> learn-more
/// navigation. The router never looks inside `quotes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationSnapshot {
    pub quotes: Vec<Quote>,
    pub question: String,
}

impl NavigationSnapshot {
    pub fn new(quotes: Vec<Quote>, question: impl Into<String>) -> Self {
        Self {
            quotes,
            question: question.into(),
        }
    }
}
