use wasm_bindgen::JsCast;
use web_sys::Document;

/// Looks up an element by id and casts it to the expected concrete type.
///
/// The page contract is lookup-by-id: a missing element, or one of an
/// unexpected type, yields `None` and the owning feature is skipped without
/// raising.
pub(crate) fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}
