use gloo::events::EventListener;
use web_sys::{Document, HtmlButtonElement, HtmlTextAreaElement};

use crate::dom;

/// Renders a character count with thousands separators.
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Tracks the text box: on every `input` event the counter label is updated
/// and the text submit control is enabled iff the box is non-empty.
/// Whitespace counts.
pub(crate) fn bind(document: &Document) -> Vec<EventListener> {
    let Some(text) = dom::element_by_id::<HtmlTextAreaElement>(document, "textContent") else {
        return Vec::new();
    };
    let counter = document.get_element_by_id("charCount");
    let submit = dom::element_by_id::<HtmlButtonElement>(document, "textSubmit");
    let target = text.clone();
    let listener = EventListener::new(&target, "input", move |_| {
        let count = text.value().chars().count();
        if let Some(counter) = &counter {
            counter.set_text_content(Some(&format_count(count)));
        }
        if let Some(submit) = &submit {
            submit.set_disabled(count == 0);
        }
    });
    vec![listener]
}
