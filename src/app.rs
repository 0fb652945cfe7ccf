use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::Document;

use crate::dialog::TransientDialog;
use crate::icons::IconRenderer;
use crate::{counter, modal, upload};

/// Wires every form interaction to the already-rendered page.
///
/// Element references are resolved once, here, and moved into the handlers;
/// a feature whose elements are missing is skipped without raising. The
/// controller owns its listeners until [`FormController::forget`] hands them
/// to the page lifetime.
pub struct FormController {
    listeners: Vec<EventListener>,
}

impl FormController {
    pub fn bind(
        document: &Document,
        icons: Rc<dyn IconRenderer>,
        dialog: Rc<dyn TransientDialog>,
    ) -> Self {
        let mut listeners = Vec::new();
        listeners.extend(upload::bind(document, icons.clone(), dialog.clone()));
        listeners.extend(counter::bind(document));
        listeners.extend(modal::bind(document, dialog));

        // Switching bootstrap tab panes reveals markup whose glyphs have not
        // been rendered yet.
        let tab_icons = icons.clone();
        listeners.push(EventListener::new(document, "shown.bs.tab", move |_| {
            tab_icons.render()
        }));

        icons.render();
        Self { listeners }
    }

    /// Leaks every listener so the bindings survive for the rest of the page
    /// lifetime.
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget()
        }
    }
}
