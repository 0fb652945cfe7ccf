use std::rc::Rc;

use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Request, RequestCache, RequestInit, RequestMode, Response};

use crate::banner;
use crate::console_log;
use crate::dialog::TransientDialog;
use crate::icons::IconRenderer;

/// Body of `GET /api/copy-content/{session_id}`. Error payloads carry no
/// `content` field and deserialize to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct CopyContent {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("fetching copy content failed: {0}")]
    Fetch(String),

    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}

impl CopyError {
    /// The fixed banner message for each failure class.
    pub fn banner_message(&self) -> &'static str {
        match self {
            CopyError::Fetch(_) => "Failed to copy content",
            CopyError::Clipboard(_) => "Failed to copy to clipboard",
        }
    }
}

/// Fetches the session's generated brief and places it on the system
/// clipboard, confirming with the copy toast. A body without content is a
/// no-op; failures surface as error banners and leave the page re-triable.
pub async fn copy_session_content(
    session_id: &str,
    icons: Rc<dyn IconRenderer>,
    dialog: Rc<dyn TransientDialog>,
) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    match copy_once(session_id).await {
        Ok(true) => show_copy_toast(&document, icons.as_ref(), dialog.as_ref()),
        Ok(false) => {}
        Err(err) => {
            console_log!("{err}");
            banner::show_error(&document, dialog, err.banner_message());
        }
    }
}

async fn copy_once(session_id: &str) -> Result<bool, CopyError> {
    let body = fetch_copy_content(session_id).await?;
    match body.content {
        Some(content) if !content.is_empty() => {
            write_clipboard(&content).await?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

async fn fetch_copy_content(session_id: &str) -> Result<CopyContent, CopyError> {
    fetch_json(session_id)
        .await
        .map_err(|err| CopyError::Fetch(format!("{err:?}")))
}

async fn fetch_json(session_id: &str) -> Result<CopyContent, JsValue> {
    let window = web_sys::window().ok_or("window")?;
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    opts.set_cache(RequestCache::NoCache);
    let url = format!("/api/copy-content/{session_id}");
    let request = Request::new_with_str_and_init(&url, &opts)?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;
    // HTTP error statuses still resolve; their JSON bodies simply carry no
    // `content` and fall into the no-op path.
    let body = JsFuture::from(resp.json()?).await?;
    serde_wasm_bindgen::from_value(body).map_err(|err| JsValue::from_str(&err.to_string()))
}

async fn write_clipboard(text: &str) -> Result<(), CopyError> {
    let clipboard = web_sys::window()
        .ok_or_else(|| CopyError::Clipboard("no window".to_string()))?
        .navigator()
        .clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| CopyError::Clipboard(format!("{err:?}")))
}

fn show_copy_toast(document: &Document, icons: &dyn IconRenderer, dialog: &dyn TransientDialog) {
    if let Some(toast) = document.get_element_by_id("copyToast") {
        dialog.show_toast(&toast);
        // The toast body carries `data-feather` placeholders.
        icons.render();
    }
}
