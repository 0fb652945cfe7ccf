use std::rc::Rc;

use briefroom_wasm_app::clipboard;
use briefroom_wasm_app::{BootstrapDialog, FeatherIcons, FormController};
use wasm_bindgen::prelude::*;

/// Binds every form interaction to the rendered page. The page calls this
/// once, after the document has loaded.
#[wasm_bindgen]
pub fn bind_form_interactions() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let window = web_sys::window().ok_or("window")?;
    let document = window.document().ok_or("document")?;
    FormController::bind(&document, Rc::new(FeatherIcons), Rc::new(BootstrapDialog)).forget();
    Ok(())
}

/// Fetches the generated brief for `session_id` and copies it to the system
/// clipboard, confirming with a toast. Wired to the page's copy buttons.
#[wasm_bindgen(js_name = copyToClipboard)]
pub async fn copy_to_clipboard(session_id: String) {
    clipboard::copy_session_content(&session_id, Rc::new(FeatherIcons), Rc::new(BootstrapDialog))
        .await;
}

fn main() {}
