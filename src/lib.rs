#![cfg(target_arch = "wasm32")]
use particle_core::{GestureInput, Latest, ParticleParams, ParticleSystem, SceneView};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod controls;
mod dom;
mod events;
mod frame;
mod hands;
mod overlay;
mod render;

use constants::CANVAS_ID;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let params = ParticleParams::default();
    let style = Rc::new(RefCell::new(params.style));
    let initial_shape = params.initial_shape;
    let system = ParticleSystem::new(params, js_sys::Date::now() as u64)
        .map_err(|e| anyhow::anyhow!("particle setup: {e}"))?;
    let capacity = system.len();
    let system = Rc::new(RefCell::new(system));

    events::wire_shape_buttons(&document, system.clone());
    events::wire_color_input(&document, style.clone());
    events::wire_fullscreen_toggle(&document);
    events::wire_global_keydown(document.clone(), system.clone());
    overlay::mark_active_shape(&document, initial_shape.id());
    overlay::set_color_label(&document, style.borrow().color);

    // Camera/model failures leave the cloud running without gesture input
    let gesture: Latest<GestureInput> = Latest::new();
    if let Err(e) = hands::start_hand_tracking(&document, gesture.clone()) {
        log::error!("[hands] tracking disabled: {:?}", e);
    }

    let gpu = frame::init_gpu(&canvas, capacity).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        system,
        style,
        gesture,
        view: SceneView::new(canvas.width(), canvas.height()),
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
