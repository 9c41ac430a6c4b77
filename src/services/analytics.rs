// ============================================================================
// ANALYTICS - Pageview and event reporting
// ============================================================================
// Initialised once at startup. Without a token every call is a no-op.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::config::AnalyticsConfig;
use crate::router::PageView;
use crate::utils::mixpanel_ffi::{
    js_error_message, mixpanel_init, mixpanel_track, mixpanel_track_pageview, to_js_object,
};

pub trait AnalyticsReporter {
    fn track_pageview(&self, page: &PageView);
    fn track(&self, event: &str, properties: serde_json::Value);
}

/// Used when analytics is not configured
#[derive(Default)]
pub struct NoopReporter;

impl AnalyticsReporter for NoopReporter {
    fn track_pageview(&self, page: &PageView) {
        log::trace!("Analytics disabled, pageview {} dropped", page.path);
    }

    fn track(&self, event: &str, _properties: serde_json::Value) {
        log::trace!("Analytics disabled, event {} dropped", event);
    }
}

pub struct MixpanelReporter {
    // mixpanel records the landing pageview itself when track_pageview is on
    skip_next_pageview: Cell<bool>,
}

impl MixpanelReporter {
    pub fn init(config: &AnalyticsConfig) -> Result<Self, String> {
        let options = to_js_object(config)?;
        mixpanel_init(&config.token, &options).map_err(|e| js_error_message(&e))?;
        log::info!(
            "📊 Mixpanel initialised (debug: {}, persistence: {})",
            config.debug,
            config.persistence
        );
        Ok(Self {
            skip_next_pageview: Cell::new(config.track_pageview),
        })
    }
}

impl AnalyticsReporter for MixpanelReporter {
    fn track_pageview(&self, page: &PageView) {
        if self.skip_next_pageview.replace(false) {
            return;
        }
        let result = to_js_object(page).and_then(|props| {
            mixpanel_track_pageview(&props).map_err(|e| js_error_message(&e))
        });
        if let Err(e) = result {
            log::error!("❌ Pageview tracking failed for {}: {}", page.path, e);
        }
    }

    fn track(&self, event: &str, properties: serde_json::Value) {
        let result = to_js_object(&properties)
            .and_then(|props| mixpanel_track(event, &props).map_err(|e| js_error_message(&e)));
        if let Err(e) = result {
            log::error!("❌ Event tracking failed for {}: {}", event, e);
        }
    }
}

/// Process-wide analytics set-up. Falls back to a no-op reporter when no
/// token is configured or the mixpanel script failed to load.
pub fn init_analytics(config: &AnalyticsConfig) -> Rc<dyn AnalyticsReporter> {
    if !config.is_enabled() {
        log::info!("📊 Analytics disabled (no MIXPANEL_TOKEN)");
        return Rc::new(NoopReporter);
    }
    match MixpanelReporter::init(config) {
        Ok(reporter) => Rc::new(reporter),
        Err(e) => {
            log::error!("❌ Mixpanel init failed, analytics disabled: {}", e);
            Rc::new(NoopReporter)
        }
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct RecordingReporter {
    pageviews: std::cell::RefCell<Vec<PageView>>,
    events: std::cell::RefCell<Vec<(String, serde_json::Value)>>,
}

#[cfg(test)]
impl RecordingReporter {
    pub fn pageviews(&self) -> Vec<PageView> {
        self.pageviews.borrow().clone()
    }

    pub fn events(&self) -> Vec<(String, serde_json::Value)> {
        self.events.borrow().clone()
    }
}

#[cfg(test)]
impl AnalyticsReporter for RecordingReporter {
    fn track_pageview(&self, page: &PageView) {
        self.pageviews.borrow_mut().push(page.clone());
    }

    fn track(&self, event: &str, properties: serde_json::Value) {
        self.events.borrow_mut().push((event.to_string(), properties));
    }
}
