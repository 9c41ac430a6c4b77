pub mod api;
pub mod quote;
pub mod snapshot;

pub use api::{
    ApiErrorBody, LearnMoreRequest, LearnMoreResponse, QuoteRequest, QuoteResponse,
    SubscribeRequest, SubscribeResponse,
};
pub use quote::{is_valid_quote, Attribution, Quote, QuoteFormatError};
pub use snapshot::NavigationSnapshot;
