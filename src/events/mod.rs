pub mod buttons;
pub mod keyboard;

pub use buttons::{wire_color_input, wire_fullscreen_toggle, wire_shape_buttons};
pub use keyboard::wire_global_keydown;

use crate::overlay;
use particle_core::{ParticleSystem, ShapeKind};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Retarget the cloud and sync the button highlight. `id` is whatever the UI
/// asked for; unknown ids land on the default scatter.
pub fn select_shape(document: &web::Document, system: &Rc<RefCell<ParticleSystem>>, id: &str) {
    let shape = ShapeKind::from_id(id);
    system.borrow_mut().switch_shape(shape);
    overlay::mark_active_shape(document, id);
}
