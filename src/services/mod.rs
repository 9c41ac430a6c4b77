pub mod analytics;
pub mod api_client;

pub use analytics::{init_analytics, AnalyticsReporter, MixpanelReporter, NoopReporter};
pub use api_client::{ApiClient, ApiError};
