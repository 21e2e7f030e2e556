use wasm_bindgen::JsValue;

fn main() {
    if let Err(err) = touch_canvas::logging::init() {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logging disabled: {err}")));
    }

    yew::Renderer::<touch_canvas::App>::new().render();
}
