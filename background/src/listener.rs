//! Runtime message listener: the privileged end of the one-way channel.

use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::router;
use crate::tabs;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["chrome", "runtime", "onMessage"], js_name = addListener)]
    fn on_message_add_listener(listener: &JsValue);
}

/// Register the runtime message listener.
///
/// Each incoming message is decoded and its operation (if any) spawned
/// fire-and-forget. Receipt is acknowledged regardless of outcome so the
/// channel stays open.
pub fn install() {
    let listener = Closure::wrap(Box::new(move |message: JsValue| {
        handle_message(&message);
        JsValue::TRUE
    }) as Box<dyn FnMut(JsValue) -> JsValue>);

    on_message_add_listener(listener.as_ref());
    listener.forget();
}

fn handle_message(message: &JsValue) {
    // The runtime hands over a structured value; routing works on its JSON
    // text form.
    let Ok(raw) = js_sys::JSON::stringify(message) else {
        return;
    };
    let Some(raw) = raw.as_string() else {
        return;
    };

    if let Some(op) = router::decode_op(&raw) {
        wasm_bindgen_futures::spawn_local(tabs::apply_to_active(op));
    }
}
