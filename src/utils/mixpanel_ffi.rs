// ============================================================================
// MIXPANEL FFI - Bindings to the mixpanel-browser global
// ============================================================================
// Wrappers only, no state. `catch` turns a missing `mixpanel` global into
// an Err instead of a trap.
// ============================================================================

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = mixpanel, js_name = init)]
    pub fn mixpanel_init(token: &str, config: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = mixpanel, js_name = track_pageview)]
    pub fn mixpanel_track_pageview(properties: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = mixpanel, js_name = track)]
    pub fn mixpanel_track(event: &str, properties: &JsValue) -> Result<(), JsValue>;
}

/// Plain JS object (not a Map) from any serializable value
pub fn to_js_object<T: Serialize>(value: &T) -> Result<JsValue, String> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| format!("Serialization error: {}", e))
}

pub fn js_error_message(error: &JsValue) -> String {
    error
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(error, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", error))
}
