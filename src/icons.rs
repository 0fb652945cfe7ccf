use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // feather.replace() swaps every `data-feather` placeholder currently in
    // the document for an inline svg.
    #[wasm_bindgen(js_namespace = feather, js_name = replace)]
    fn feather_replace();
}

/// Re-renders icon glyphs after DOM insertions.
pub trait IconRenderer {
    fn render(&self);
}

/// Production renderer backed by the feather bundle loaded by the page.
pub struct FeatherIcons;

impl IconRenderer for FeatherIcons {
    fn render(&self) {
        feather_replace();
    }
}
