use crate::constants::*;
use crate::dom;
use particle_core::Rgb;
use web_sys as web;

#[inline]
pub fn set_gesture_status(document: &web::Document, text: &str) {
    dom::set_text(document, GESTURE_STATUS_SELECTOR, text);
}

#[inline]
pub fn set_color_label(document: &web::Document, color: Rgb) {
    if let Some(el) = document.get_element_by_id(COLOR_VALUE_ID) {
        el.set_text_content(Some(&color.to_hex_upper()));
    }
}

/// Highlight the shape button whose `data-model` equals `id`.
pub fn mark_active_shape(document: &web::Document, id: &str) {
    for el in dom::query_all(document, SHAPE_BUTTON_SELECTOR) {
        let cl = el.class_list();
        if el.get_attribute(SHAPE_BUTTON_ATTR).as_deref() == Some(id) {
            _ = cl.add_1(ACTIVE_CLASS);
        } else {
            _ = cl.remove_1(ACTIVE_CLASS);
        }
    }
}
