use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::{Document, Element, HtmlFormElement};

use crate::dialog::TransientDialog;
use crate::dom;

pub const STATUS_TRANSCRIBING: &str = "Transcribing audio file...";
pub const STATUS_ANALYZING: &str = "Analyzing content and generating brief...";

/// Delay before the audio status line flips to the analysis message. This is
/// a cosmetic fixed delay, not correlated with server-side progress.
pub const STATUS_SWAP_DELAY_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    Audio,
    Text,
}

impl SubmitKind {
    pub fn initial_status(self) -> &'static str {
        match self {
            SubmitKind::Audio => STATUS_TRANSCRIBING,
            SubmitKind::Text => STATUS_ANALYZING,
        }
    }
}

/// The processing dialog shown while a native form submission navigates
/// away. Nothing here dismisses it; the navigation supersedes it.
struct ProcessingModal {
    root: Element,
    status: Option<Element>,
}

impl ProcessingModal {
    fn find(document: &Document) -> Option<Self> {
        let root = document.get_element_by_id("processingModal")?;
        let status = document.get_element_by_id("processingStatus");
        Some(Self { root, status })
    }

    fn show(&self, kind: SubmitKind, dialog: &dyn TransientDialog) {
        if let Some(status) = &self.status {
            status.set_text_content(Some(kind.initial_status()));
            if kind == SubmitKind::Audio {
                let status = status.clone();
                Timeout::new(STATUS_SWAP_DELAY_MS, move || {
                    status.set_text_content(Some(STATUS_ANALYZING));
                })
                .forget();
            }
        }
        dialog.show_modal(&self.root);
    }
}

/// Observes both tracked forms. Native submission proceeds untouched; the
/// modal only covers the time until the browser navigates.
pub(crate) fn bind(document: &Document, dialog: Rc<dyn TransientDialog>) -> Vec<EventListener> {
    let Some(modal) = ProcessingModal::find(document) else {
        return Vec::new();
    };
    let modal = Rc::new(modal);
    let mut listeners = Vec::new();
    let forms = [
        ("audioForm", SubmitKind::Audio),
        ("textForm", SubmitKind::Text),
    ];
    for (form_id, kind) in forms {
        let Some(form) = dom::element_by_id::<HtmlFormElement>(document, form_id) else {
            continue;
        };
        let modal = modal.clone();
        let dialog = dialog.clone();
        listeners.push(EventListener::new(&form, "submit", move |_| {
            modal.show(kind, dialog.as_ref())
        }));
    }
    listeners
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_kinds_pick_their_status_line() {
        assert_eq!(SubmitKind::Audio.initial_status(), STATUS_TRANSCRIBING);
        assert_eq!(SubmitKind::Text.initial_status(), STATUS_ANALYZING);
    }
}
