//! Bridge to the MediaPipe `Hands` model and its `Camera` helper, both loaded
//! as globals by the page. Results are reduced to a [`GestureInput`] and
//! dropped into a latest-value slot for the frame loop.

use crate::constants::*;
use crate::controls::{locate_file_url, HandsOptions, StatusLatch};
use crate::overlay;
use particle_core::{GestureInput, Landmark, Latest};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, Debug)]
    type Hands;

    #[wasm_bindgen(constructor, catch, js_class = "Hands")]
    fn new(config: &JsValue) -> Result<Hands, JsValue>;

    #[wasm_bindgen(method, js_class = "Hands", js_name = setOptions)]
    fn set_options(this: &Hands, options: &JsValue);

    #[wasm_bindgen(method, js_class = "Hands", js_name = onResults)]
    fn on_results(this: &Hands, callback: &js_sys::Function);

    #[wasm_bindgen(method, js_class = "Hands")]
    fn send(this: &Hands, inputs: &JsValue) -> js_sys::Promise;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Camera)]
    #[derive(Clone, Debug)]
    type CaptureCamera;

    #[wasm_bindgen(constructor, catch, js_class = "Camera")]
    fn new(
        video: &web::HtmlVideoElement,
        options: &JsValue,
    ) -> Result<CaptureCamera, JsValue>;

    #[wasm_bindgen(method, js_class = "Camera")]
    fn start(this: &CaptureCamera) -> js_sys::Promise;
}

#[derive(Deserialize)]
struct RawLandmark {
    x: f32,
    y: f32,
    #[serde(default)]
    z: f32,
}

fn set_prop(target: &js_sys::Object, key: &str, value: &JsValue) -> anyhow::Result<()> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map_err(|e| anyhow::anyhow!("setting {key}: {:?}", e))?;
    Ok(())
}

/// Reduce one `onResults` payload to gesture input. Anything unreadable
/// counts as "no hand".
fn gesture_from_results(results: &JsValue) -> GestureInput {
    let raw = match js_sys::Reflect::get(results, &JsValue::from_str("multiHandLandmarks")) {
        Ok(v) if !v.is_undefined() && !v.is_null() => v,
        _ => return GestureInput::Lost,
    };
    #[allow(deprecated)]
    let hands: Vec<Vec<RawLandmark>> = match raw.into_serde() {
        Ok(h) => h,
        Err(e) => {
            log::warn!("[hands] unreadable landmarks: {e}");
            return GestureInput::Lost;
        }
    };
    let hands: Vec<Vec<Landmark>> = hands
        .into_iter()
        .map(|hand| {
            hand.into_iter()
                .map(|p| Landmark::new(p.x, p.y, p.z))
                .collect()
        })
        .collect();
    GestureInput::from_hands(&hands)
}

/// Start camera capture and landmark inference. Each inferred frame
/// publishes into `slot`; the status line follows hand acquisition/loss.
pub fn start_hand_tracking(
    document: &web::Document,
    slot: Latest<GestureInput>,
) -> anyhow::Result<()> {
    let video: web::HtmlVideoElement = document
        .get_element_by_id(VIDEO_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{VIDEO_ID}"))?
        .dyn_into::<web::HtmlVideoElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let locate_file = Closure::wrap(Box::new(|file: String| locate_file_url(&file))
        as Box<dyn Fn(String) -> String>);
    let config = js_sys::Object::new();
    set_prop(&config, "locateFile", locate_file.as_ref())?;
    locate_file.forget();

    let hands = Hands::new(&config).map_err(|e| anyhow::anyhow!("Hands unavailable: {:?}", e))?;
    #[allow(deprecated)]
    let options = JsValue::from_serde(&HandsOptions::default())?;
    hands.set_options(&options);

    let doc = document.clone();
    let mut latch = StatusLatch::default();
    let on_results = Closure::wrap(Box::new(move |results: JsValue| {
        let input = gesture_from_results(&results);
        slot.publish(input);
        if let Some(text) = latch.observe(input) {
            log::info!("[hands] {text}");
            overlay::set_gesture_status(&doc, text);
        }
    }) as Box<dyn FnMut(JsValue)>);
    hands.on_results(on_results.as_ref().unchecked_ref());
    on_results.forget();

    // One send per captured frame; MediaPipe keeps a single inference in flight.
    let hands_for_frame = hands.clone();
    let video_for_frame = video.clone();
    let on_frame = Closure::wrap(Box::new(move || -> js_sys::Promise {
        let inputs = js_sys::Object::new();
        _ = js_sys::Reflect::set(&inputs, &JsValue::from_str("image"), &video_for_frame);
        hands_for_frame.send(&inputs)
    }) as Box<dyn FnMut() -> js_sys::Promise>);
    let camera_opts = js_sys::Object::new();
    set_prop(&camera_opts, "onFrame", on_frame.as_ref())?;
    set_prop(&camera_opts, "width", &JsValue::from(CAPTURE_WIDTH))?;
    set_prop(&camera_opts, "height", &JsValue::from(CAPTURE_HEIGHT))?;
    on_frame.forget();

    let camera = CaptureCamera::new(&video, &camera_opts)
        .map_err(|e| anyhow::anyhow!("Camera unavailable: {:?}", e))?;
    let started = camera.start();
    spawn_local(async move {
        match JsFuture::from(started).await {
            Ok(_) => log::info!("[hands] camera started"),
            Err(e) => log::error!("[hands] camera start failed: {:?}", e),
        }
    });
    log::info!("[hands] tracking wired ({}x{})", CAPTURE_WIDTH, CAPTURE_HEIGHT);
    Ok(())
}
