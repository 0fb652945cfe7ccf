use std::rc::Rc;

use gloo::timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::console_log;
use crate::dialog::TransientDialog;

/// How long an untouched banner stays up.
pub const AUTO_DISMISS_MS: u32 = 5_000;

/// Prepends a dismissible alert to the main content area, so the newest
/// banner stacks on top. The alert dismisses itself after
/// [`AUTO_DISMISS_MS`] unless the user closed it first. Pages without a
/// `main.container` host show nothing.
pub fn show_error(document: &Document, dialog: Rc<dyn TransientDialog>, message: &str) {
    if let Err(err) = insert_alert(document, dialog, message) {
        console_log!("failed to show error banner: {err:?}");
    }
}

fn insert_alert(
    document: &Document,
    dialog: Rc<dyn TransientDialog>,
    message: &str,
) -> Result<(), JsValue> {
    let Some(container) = document.query_selector("main.container")? else {
        return Ok(());
    };
    let alert = build_alert(document, message)?;
    container.insert_before(&alert, container.first_child().as_ref())?;
    let timer_target = alert.clone();
    Timeout::new(AUTO_DISMISS_MS, move || {
        dialog.dismiss_alert(&timer_target);
    })
    .forget();
    Ok(())
}

fn build_alert(document: &Document, message: &str) -> Result<Element, JsValue> {
    let alert = document.create_element("div")?;
    alert.set_class_name("alert alert-danger alert-dismissible fade show");
    alert.set_text_content(Some(message));
    let close = document.create_element("button")?;
    close.set_class_name("btn-close");
    close.set_attribute("type", "button")?;
    close.set_attribute("data-bs-dismiss", "alert")?;
    alert.append_child(&close)?;
    Ok(alert)
}
