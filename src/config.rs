use serde::{Deserialize, Serialize};

use crate::utils::constants::{DEFAULT_API_BASE_URL, DEFAULT_ANALYTICS_PERSISTENCE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: Option<String>,
    pub analytics: AnalyticsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: None,
            analytics: AnalyticsConfig::default(),
        }
    }
}

/// Options handed to `mixpanel.init`. Serialized as-is into the JS config object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(skip)]
    pub token: String,
    pub debug: bool,
    pub track_pageview: bool,
    pub persistence: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            debug: true,
            track_pageview: true,
            persistence: DEFAULT_ANALYTICS_PERSISTENCE.to_string(),
        }
    }
}

impl AnalyticsConfig {
    pub fn is_enabled(&self) -> bool {
        !self.token.trim().is_empty()
    }
}

impl AppConfig {
    /// Loads the configuration baked in at compile time (see build.rs)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "API_BASE_URL" => option_env!("API_BASE_URL"),
            "ENVIRONMENT" => option_env!("ENVIRONMENT"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "LOG_LEVEL" => option_env!("LOG_LEVEL"),
            "MIXPANEL_TOKEN" => option_env!("MIXPANEL_TOKEN"),
            "MIXPANEL_DEBUG" => option_env!("MIXPANEL_DEBUG"),
            "MIXPANEL_TRACK_PAGEVIEW" => option_env!("MIXPANEL_TRACK_PAGEVIEW"),
            "MIXPANEL_PERSISTENCE" => option_env!("MIXPANEL_PERSISTENCE"),
            _ => None,
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'static str>,
    {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| {
            lookup(key)
                .and_then(|v| v.trim().parse::<bool>().ok())
                .unwrap_or(default)
        };

        Self {
            api_base_url: lookup("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            environment: lookup("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: flag("ENABLE_LOGGING", defaults.enable_logging),
            log_level: lookup("LOG_LEVEL").map(str::to_string),
            analytics: AnalyticsConfig {
                token: lookup("MIXPANEL_TOKEN").unwrap_or("").to_string(),
                debug: flag("MIXPANEL_DEBUG", defaults.analytics.debug),
                track_pageview: flag("MIXPANEL_TRACK_PAGEVIEW", defaults.analytics.track_pageview),
                persistence: lookup("MIXPANEL_PERSISTENCE")
                    .map(str::to_string)
                    .unwrap_or(defaults.analytics.persistence),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Level for wasm-logger. Logging disabled still lets errors through.
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        match self.log_level.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("error") => log::Level::Error,
            Some("warn") => log::Level::Warn,
            Some("info") => log::Level::Info,
            Some("debug") => log::Level::Debug,
            Some("trace") => log::Level::Trace,
            _ if self.is_production() => log::Level::Info,
            _ => log::Level::Debug,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
