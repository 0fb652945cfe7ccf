use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, DragEvent, Element, File, HtmlButtonElement, HtmlInputElement};

use crate::banner;
use crate::console_log;
use crate::dialog::TransientDialog;
use crate::dom;
use crate::icons::IconRenderer;

pub const INVALID_FILE_MESSAGE: &str = "Please upload only MP3 or WAV files.";

const VALID_TYPES: [&str; 3] = ["audio/mpeg", "audio/mp3", "audio/wav"];
const VALID_EXTENSIONS: [&str; 2] = [".mp3", ".wav"];

/// A file is acceptable iff its declared media type is on the allow-list or
/// its name carries an allowed extension, case-insensitively.
pub fn is_valid_audio_file(name: &str, media_type: &str) -> bool {
    if VALID_TYPES.contains(&media_type) {
        return true;
    }
    let name = name.to_lowercase();
    VALID_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Binary-prefix size rendering: base 1024, two decimals, trailing zeros
/// trimmed. Sizes past the unit table stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut exponent = 0;
    let mut scaled = bytes;
    while scaled >= 1024 && exponent < UNITS.len() - 1 {
        scaled /= 1024;
        exponent += 1;
    }
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    format!("{} {}", (value * 100.0).round() / 100.0, UNITS[exponent])
}

/// The upload feature's element group, resolved once at bind time. The
/// remove control is the only optional member; everything else missing
/// disables the feature.
struct UploadElements {
    area: Element,
    input: HtmlInputElement,
    placeholder: Element,
    preview: Element,
    file_name: Element,
    file_size: Element,
    submit: HtmlButtonElement,
    remove: Option<Element>,
}

impl UploadElements {
    fn find(document: &Document) -> Option<Self> {
        let area = document.get_element_by_id("uploadArea")?;
        let input = dom::element_by_id::<HtmlInputElement>(document, "audioFile")?;
        let placeholder = area.query_selector(".upload-placeholder").ok().flatten()?;
        let preview = document.get_element_by_id("uploadPreview")?;
        let file_name = document.get_element_by_id("fileName")?;
        let file_size = document.get_element_by_id("fileSize")?;
        let submit = dom::element_by_id::<HtmlButtonElement>(document, "audioSubmit")?;
        let remove = document.get_element_by_id("removeFile");
        Some(Self {
            area,
            input,
            placeholder,
            preview,
            file_name,
            file_size,
            submit,
            remove,
        })
    }

    fn show_preview(&self, file: &File, icons: &dyn IconRenderer) -> Result<(), JsValue> {
        self.file_name.set_text_content(Some(&file.name()));
        self.file_size
            .set_text_content(Some(&format_file_size(file.size() as u64)));
        self.placeholder.class_list().add_1("d-none")?;
        self.preview.class_list().remove_1("d-none")?;
        self.submit.set_disabled(false);
        // The preview markup carries `data-feather` placeholders.
        icons.render();
        Ok(())
    }

    fn clear_selection(&self) -> Result<(), JsValue> {
        self.input.set_value("");
        self.placeholder.class_list().remove_1("d-none")?;
        self.preview.class_list().add_1("d-none")?;
        self.submit.set_disabled(true);
        Ok(())
    }

    fn accept(&self, file: &File, icons: &dyn IconRenderer) {
        if let Err(err) = self.show_preview(file, icons) {
            console_log!("failed to render upload preview: {err:?}");
        }
    }
}

/// Wires the upload area: click-to-pick, the drag-and-drop trio, file-picker
/// changes and explicit removal.
pub(crate) fn bind(
    document: &Document,
    icons: Rc<dyn IconRenderer>,
    dialog: Rc<dyn TransientDialog>,
) -> Vec<EventListener> {
    let Some(els) = UploadElements::find(document) else {
        return Vec::new();
    };
    let els = Rc::new(els);
    let mut listeners = Vec::new();

    // Click anywhere in the area (except the remove control) opens the
    // native picker.
    {
        let area = els.area.clone();
        let els = els.clone();
        listeners.push(EventListener::new(&area, "click", move |event| {
            let clicked_remove = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .is_some_and(|element| element.id() == "removeFile");
            if !clicked_remove {
                els.input.click();
            }
        }));
    }

    // The drag trio needs non-passive listeners: the default action of
    // dragover/drop is to refuse the drop / navigate to the file.
    {
        let area = els.area.clone();
        let target = area.clone();
        listeners.push(EventListener::new_with_options(
            &target,
            "dragover",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let _ = area.class_list().add_1("dragover");
            },
        ));
    }
    {
        let area = els.area.clone();
        let target = area.clone();
        listeners.push(EventListener::new_with_options(
            &target,
            "dragleave",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let _ = area.class_list().remove_1("dragover");
            },
        ));
    }
    {
        let target = els.area.clone();
        let els = els.clone();
        let icons = icons.clone();
        let dialog = dialog.clone();
        let document = document.clone();
        listeners.push(EventListener::new_with_options(
            &target,
            "drop",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let _ = els.area.class_list().remove_1("dragover");
                let Some(drag) = event.dyn_ref::<DragEvent>() else {
                    return;
                };
                let Some(files) = drag.data_transfer().and_then(|transfer| transfer.files())
                else {
                    return;
                };
                let Some(file) = files.get(0) else {
                    return;
                };
                if is_valid_audio_file(&file.name(), &file.type_()) {
                    // Hand the dropped list to the hidden input so the
                    // native form submission carries the file.
                    els.input.set_files(Some(&files));
                    els.accept(&file, icons.as_ref());
                } else {
                    banner::show_error(&document, dialog.clone(), INVALID_FILE_MESSAGE);
                }
            },
        ));
    }

    // File-picker selection.
    {
        let target = els.input.clone();
        let els = els.clone();
        let icons = icons.clone();
        let dialog = dialog.clone();
        let document = document.clone();
        listeners.push(EventListener::new(&target, "change", move |_| {
            let Some(file) = els.input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if is_valid_audio_file(&file.name(), &file.type_()) {
                els.accept(&file, icons.as_ref());
            } else {
                banner::show_error(&document, dialog.clone(), INVALID_FILE_MESSAGE);
                els.input.set_value("");
            }
        }));
    }

    // Explicit removal. Propagation stops here so the area's click handler
    // does not reopen the picker.
    if let Some(remove) = els.remove.clone() {
        let els = els.clone();
        listeners.push(EventListener::new(&remove, "click", move |event| {
            event.stop_propagation();
            if let Err(err) = els.clear_selection() {
                console_log!("failed to clear file selection: {err:?}");
            }
        }));
    }

    listeners
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allowed_types_and_extensions() {
        assert!(is_valid_audio_file("talk.mp3", "audio/mpeg"));
        assert!(is_valid_audio_file("talk.bin", "audio/mp3"));
        assert!(is_valid_audio_file("talk.bin", "audio/wav"));
        assert!(is_valid_audio_file("TALK.MP3", ""));
        assert!(is_valid_audio_file("interview.Wav", "application/octet-stream"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!is_valid_audio_file("notes.txt", "text/plain"));
        assert!(!is_valid_audio_file("talk.m4a", "audio/mp4"));
        assert!(!is_valid_audio_file("talk.ogg", "audio/ogg"));
        assert!(!is_valid_audio_file("mp3", ""));
        assert!(!is_valid_audio_file("", ""));
    }

    #[test]
    fn formats_binary_sizes() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1234), "1.21 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(2_621_440), "2.5 MB");
        assert_eq!(format_file_size(1_073_741_824), "1 GB");
    }

    #[test]
    fn clamps_past_the_unit_table() {
        assert_eq!(format_file_size(1 << 40), "1024 GB");
    }
}
