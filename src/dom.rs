use crate::constants::{BINDINGS_PARAM, HINT_ID, LOCK_ID};
use web_sys as web;

#[inline]
pub fn hide_lock(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOCK_ID) {
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn set_hint(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        el.set_text_content(Some(text));
    }
}

/// Raw key binding overrides from the page URL, if any.
pub fn binding_overrides() -> Option<String> {
    let search = web::window()?.location().search().ok()?;
    let params = web::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(BINDINGS_PARAM).filter(|s| !s.trim().is_empty())
}
