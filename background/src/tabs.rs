//! Tab-control edge: bindings to the extension tab API.
//!
//! Everything here is fire-and-forget. A query that yields no active tab
//! ends the operation silently.

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};

use crate::router::TabOp;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["chrome", "tabs"], js_name = query)]
    fn tabs_query(query_info: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = ["chrome", "tabs"], js_name = remove)]
    fn tabs_remove(tab_id: i32);

    #[wasm_bindgen(js_namespace = ["chrome", "tabs"], js_name = reload)]
    fn tabs_reload(tab_id: i32);

    #[wasm_bindgen(js_namespace = ["chrome", "tabs"], js_name = goBack)]
    fn tabs_go_back(tab_id: i32);

    #[wasm_bindgen(js_namespace = ["chrome", "tabs"], js_name = goForward)]
    fn tabs_go_forward(tab_id: i32);
}

/// Apply `op` to the active tab of the focused window, if there is one.
pub async fn apply_to_active(op: TabOp) {
    let Some(tab_id) = active_tab_id().await else {
        return;
    };

    match op {
        TabOp::Close => tabs_remove(tab_id),
        TabOp::Reload => tabs_reload(tab_id),
        TabOp::Back => tabs_go_back(tab_id),
        TabOp::Forward => tabs_go_forward(tab_id),
    }
}

/// Id of the active tab in the focused window, if any.
#[allow(clippy::cast_possible_truncation)]
async fn active_tab_id() -> Option<i32> {
    let query = js_sys::Object::new();
    js_sys::Reflect::set(&query, &JsValue::from_str("active"), &JsValue::TRUE).ok()?;
    js_sys::Reflect::set(&query, &JsValue::from_str("currentWindow"), &JsValue::TRUE).ok()?;

    let tabs = wasm_bindgen_futures::JsFuture::from(tabs_query(&query)).await.ok()?;
    let tabs: js_sys::Array = tabs.dyn_into().ok()?;
    let first = tabs.get(0);

    let id = js_sys::Reflect::get(&first, &JsValue::from_str("id")).ok()?;
    id.as_f64().map(|v| v as i32)
}
