use wasm_bindgen::prelude::*;

pub mod app;
pub mod banner;
pub mod clipboard;
pub mod counter;
pub mod dialog;
mod dom;
pub mod icons;
pub mod modal;
pub mod upload;

pub use app::FormController;
pub use dialog::{BootstrapDialog, TransientDialog};
pub use icons::{FeatherIcons, IconRenderer};

#[wasm_bindgen]
extern "C" {
    // Use `js_namespace` here to bind `console.log(..)` instead of just
    // `log(..)`
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}
