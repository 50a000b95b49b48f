use crate::constants::{LABEL_VISIBLE_CLASS, QUAKE_LABEL_ID};
use web_sys as web;

/// Put `text` into `#quake-label` and reveal it.
pub fn show_label(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(QUAKE_LABEL_ID) {
        el.set_text_content(Some(text));
        _ = el.class_list().add_1(LABEL_VISIBLE_CLASS);
    }
}

#[inline]
pub fn hide_label(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(QUAKE_LABEL_ID) {
        _ = el.class_list().remove_1(LABEL_VISIBLE_CLASS);
    }
}
