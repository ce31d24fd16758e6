#![cfg(target_arch = "wasm32")]
use haunt_core::{HauntedHouse, SceneConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod dom;
mod events;
mod frame;
mod input;
mod panel;
mod query;
mod viewport;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("haunt-web starting");

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
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(dom::js_err)?;
    dom::sync_canvas_backing_size(&canvas);
    dom::add_resize_listener(&window, &canvas);

    let grave_seed = window
        .location()
        .search()
        .ok()
        .and_then(|s| query::parse_seed(&s))
        .unwrap_or_else(random_seed);
    let config = SceneConfig {
        grave_seed,
        ..SceneConfig::default()
    };
    let mut house = HauntedHouse::build(config)?;
    house.resize(canvas.width(), canvas.height());

    // Nothing is drawn until every texture has arrived
    let bundle = assets::fetch_bundle(&window, &house.config).await?;
    let renderer = frame::init_gpu(&canvas, &house, &bundle).await?;
    drop(bundle);

    let house = Rc::new(RefCell::new(house));
    panel::mount(&document, house.clone())?;
    events::attach_orbit_input(&canvas, house.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        house, renderer, canvas,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}
