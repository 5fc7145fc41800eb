use crate::controls::is_fullscreen_key;
use crate::dom;
use particle_core::{ParticleSystem, ShapeKind};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    document: &web::Document,
    system: &Rc<RefCell<ParticleSystem>>,
) {
    // leave browser shortcuts alone
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    if let Some(shape) = ShapeKind::from_key(&key) {
        super::select_shape(document, system, shape.id());
        ev.prevent_default();
        return;
    }
    if is_fullscreen_key(&key) {
        dom::toggle_fullscreen(document);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(document: web::Document, system: Rc<RefCell<ParticleSystem>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &document, &system);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
