// ============================================================================
// ICON REGISTRY - Material Design icon paths by name
// ============================================================================

use std::collections::HashMap;

// 24x24 viewBox path data from @mdi/js
pub const MDI_ARROW_LEFT: &str = "M20,11V13H8L13.5,18.5L12.08,19.92L4.16,12L12.08,4.08L13.5,5.5L8,11H20Z";
pub const MDI_SEND: &str = "M2,21L23,12L2,3V10L17,12L2,14V21Z";
pub const MDI_CHEVRON_RIGHT: &str = "M8.59,16.58L13.17,12L8.59,7.41L10,6L16,12L10,18L8.59,16.58Z";
pub const MDI_FORMAT_QUOTE_OPEN: &str = "M10,7L8,11H11V17H5V11L7,7H10M18,7L16,11H19V17H13V11L15,7H18Z";
pub const MDI_EMAIL_OUTLINE: &str = "M22 6C22 4.9 21.1 4 20 4H4C2.9 4 2 4.9 2 6V18C2 19.1 2.9 20 4 20H20C21.1 20 22 19.1 22 18V6M20 6L12 11L4 6H20M20 18H4V8L12 13L20 8V18Z";
pub const MDI_ALERT_CIRCLE_OUTLINE: &str = "M11,15H13V17H11V15M11,7H13V13H11V7M12,2C6.47,2 2,6.5 2,12A10,10 0 0,0 12,22A10,10 0 0,0 22,12A10,10 0 0,0 12,2M12,20A8,8 0 0,1 4,12A8,8 0 0,1 12,4A8,8 0 0,1 20,12A8,8 0 0,1 12,20Z";
pub const MDI_LOADING: &str = "M12,4V2A10,10 0 0,0 2,12H4A8,8 0 0,1 12,4Z";
pub const MDI_CLOSE: &str = "M19,6.41L17.59,5L12,10.59L6.41,5L5,6.41L10.59,12L5,17.59L6.41,19L12,13.41L17.59,19L19,17.59L13.41,12L19,6.41Z";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconRegistry {
    icons: HashMap<&'static str, &'static str>,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every icon the views use, under its @mdi/js export name
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .register("mdiArrowLeft", MDI_ARROW_LEFT)
            .register("mdiSend", MDI_SEND)
            .register("mdiChevronRight", MDI_CHEVRON_RIGHT)
            .register("mdiFormatQuoteOpen", MDI_FORMAT_QUOTE_OPEN)
            .register("mdiEmailOutline", MDI_EMAIL_OUTLINE)
            .register("mdiAlertCircleOutline", MDI_ALERT_CIRCLE_OUTLINE)
            .register("mdiLoading", MDI_LOADING)
            .register("mdiClose", MDI_CLOSE);
        registry
    }

    /// Later registrations under the same name win
    pub fn register(&mut self, name: &'static str, path: &'static str) -> &mut Self {
        self.icons.insert(name, path);
        self
    }

    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.icons.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
