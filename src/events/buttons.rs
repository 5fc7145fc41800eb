use crate::constants::*;
use crate::{dom, overlay};
use particle_core::{ParticleSystem, PointStyle, Rgb};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_shape_buttons(document: &web::Document, system: Rc<RefCell<ParticleSystem>>) {
    let buttons = dom::query_all(document, SHAPE_BUTTON_SELECTOR);
    if buttons.is_empty() {
        log::warn!("[controls] no {SHAPE_BUTTON_SELECTOR} buttons found");
    }
    for button in buttons {
        let doc = document.clone();
        let system = system.clone();
        let el = button.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let id = el.get_attribute(SHAPE_BUTTON_ATTR).unwrap_or_default();
            super::select_shape(&doc, &system, &id);
        }) as Box<dyn FnMut()>);
        _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_color_input(document: &web::Document, style: Rc<RefCell<PointStyle>>) {
    let Some(input) = document
        .get_element_by_id(COLOR_INPUT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        log::warn!("[controls] missing #{COLOR_INPUT_ID}");
        return;
    };
    let doc = document.clone();
    let input_for_cb = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let value = input_for_cb.value();
        match Rgb::from_hex(&value) {
            Ok(color) => {
                style.borrow_mut().color = color;
                overlay::set_color_label(&doc, color);
            }
            Err(e) => log::warn!("[controls] ignoring color input: {e}"),
        }
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_fullscreen_toggle(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, FULLSCREEN_TOGGLE_ID, move || {
        dom::toggle_fullscreen(&doc);
    });
}
