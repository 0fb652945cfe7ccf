use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Modal;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    fn new(target: &Element) -> Modal;

    #[wasm_bindgen(method)]
    fn show(this: &Modal);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Toast;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    fn new(target: &Element) -> Toast;

    #[wasm_bindgen(method)]
    fn show(this: &Toast);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Alert;

    #[wasm_bindgen(static_method_of = Alert, js_namespace = bootstrap, js_name = getOrCreateInstance)]
    fn get_or_create_instance(target: &Element) -> Alert;

    #[wasm_bindgen(method)]
    fn close(this: &Alert);
}

/// Minimal surface of the page's modal/toast/alert library. The controller
/// reaches vendor UI only through this trait.
pub trait TransientDialog {
    /// Opens a page-blocking modal dialog rooted at `target`.
    fn show_modal(&self, target: &Element);

    /// Shows a transient confirmation toast rooted at `target`.
    fn show_toast(&self, target: &Element);

    /// Dismisses a previously inserted alert element.
    fn dismiss_alert(&self, target: &Element);
}

/// Production implementation backed by the bootstrap bundle loaded by the
/// page.
pub struct BootstrapDialog;

impl TransientDialog for BootstrapDialog {
    fn show_modal(&self, target: &Element) {
        Modal::new(target).show();
    }

    fn show_toast(&self, target: &Element) {
        Toast::new(target).show();
    }

    fn dismiss_alert(&self, target: &Element) {
        Alert::get_or_create_instance(target).close();
    }
}
