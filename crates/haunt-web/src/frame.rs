use haunt_core::{AssetBundle, FrameClock, HauntedHouse};
use haunt_render::Renderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub house: Rc<RefCell<HauntedHouse>>,
    pub renderer: Renderer<'static>,
    pub canvas: web::HtmlCanvasElement,
    pub clock: FrameClock,
}

impl FrameContext {
    pub fn new(
        house: Rc<RefCell<HauntedHouse>>,
        renderer: Renderer<'static>,
        canvas: web::HtmlCanvasElement,
    ) -> Self {
        Self {
            house,
            renderer,
            canvas,
            clock: FrameClock::new(),
        }
    }

    pub fn frame(&mut self) {
        let (elapsed, _dt) = self.clock.tick();
        let mut house = self.house.borrow_mut();

        let size = (self.canvas.width(), self.canvas.height());
        if size != self.renderer.size() {
            self.renderer.resize(size.0, size.1);
            house.resize(size.0, size.1);
            log::debug!("[gpu] resize {}x{}", size.0, size.1);
        }

        house.frame(elapsed);
        if let Err(e) = self.renderer.render(&house) {
            if !self.renderer.recover(&e) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    house: &HauntedHouse,
    assets: &AssetBundle,
) -> anyhow::Result<Renderer<'static>> {
    // Falls back to WebGL2 when navigator.gpu exists but yields no adapter
    let instance =
        wgpu::util::new_instance_with_webgpu_detection(&wgpu::InstanceDescriptor::default()).await;
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    let renderer = Renderer::new(
        &instance,
        surface,
        canvas.width(),
        canvas.height(),
        house,
        assets,
    )
    .await?;
    Ok(renderer)
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
