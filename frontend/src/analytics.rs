use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Function, Reflect};
use web_sys::window;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EventParams {
    pub event_category: &'static str,
    pub event_label: &'static str,
}

fn gtag() -> Option<Function> {
    let window = window()?;
    let value = Reflect::get(&window, &JsValue::from_str("gtag")).ok()?;
    value.dyn_into::<Function>().ok()
}

pub fn track(event: &str, params: &EventParams) {
    let Some(gtag) = gtag() else {
        debug!("gtag not present, skipping {} event", event);
        return;
    };
    let params = match serde_wasm_bindgen::to_value(params) {
        Ok(params) => params,
        Err(e) => {
            warn!("failed to encode {} params: {}", event, e);
            return;
        }
    };
    if let Err(e) = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(event),
        &params,
    ) {
        warn!("gtag call for {} failed: {:?}", event, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn params_use_gtag_field_names() {
        let params = EventParams {
            event_category: "booking",
            event_label: "hero",
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "event_category": "booking", "event_label": "hero" })
        );
    }
}
