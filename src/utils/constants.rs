/// Backend used when API_BASE_URL is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5001";

pub const DEFAULT_ANALYTICS_PERSISTENCE: &str = "localStorage";

// Backend endpoints
pub const QUOTE_PATH: &str = "/api/quote";
pub const LEARN_MORE_PATH: &str = "/api/learn-more";
/// Served outside the /api scope by the backend
pub const SUBSCRIBE_PATH: &str = "/subscribe";

// Analytics event names
pub const EVENT_ASK_QUESTION: &str = "Ask Question";
pub const EVENT_LEARN_MORE: &str = "Learn More";
pub const EVENT_SUBSCRIBE: &str = "Subscribe";

/// Milliseconds the subscription notice stays on screen
pub const NOTICE_TIMEOUT_MS: u32 = 5_000;
