use crate::input::{self, DragMode};
use crate::panel::{self, KeyboardPanel};
use haunt_core::{AssetBundle, FrameClock, HauntedHouse};
use haunt_render::Renderer;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};
use winit::window::{Window, WindowId};

pub struct App {
    house: HauntedHouse,
    // handed to the renderer on first resume
    assets: Option<AssetBundle>,
    // declared before `window` so the surface drops first
    renderer: Option<Renderer<'static>>,
    window: Option<Arc<Window>>,
    clock: FrameClock,
    panel: KeyboardPanel,
    modifiers: ModifiersState,
    drag: Option<DragMode>,
    cursor: Option<PhysicalPosition<f64>>,
    fatal: Option<anyhow::Error>,
}

impl App {
    pub fn new(house: HauntedHouse, assets: AssetBundle) -> Self {
        Self {
            house,
            assets: Some(assets),
            renderer: None,
            window: None,
            clock: FrameClock::new(),
            panel: KeyboardPanel::default(),
            modifiers: ModifiersState::empty(),
            drag: None,
            cursor: None,
            fatal: None,
        }
    }

    /// Surface any error that stopped the event loop.
    pub fn finish(self) -> anyhow::Result<()> {
        match self.fatal {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn init_gpu(&mut self, window: Arc<Window>) -> anyhow::Result<Renderer<'static>> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let assets = self
            .assets
            .take()
            .ok_or_else(|| anyhow::anyhow!("textures already consumed"))?;
        self.house.resize(size.width, size.height);
        let renderer = pollster::block_on(Renderer::new(
            &instance,
            surface,
            size.width,
            size.height,
            &self.house,
            &assets,
        ))?;
        Ok(renderer)
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{:?}", err);
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        if code == KeyCode::Escape {
            event_loop.exit();
            return;
        }
        let Some(action) = panel::action_for_key(code, self.modifiers.shift_key()) else {
            return;
        };
        self.panel.apply(action, &mut self.house.lights);
        log::info!("[panel] {}", self.panel.describe(&self.house.lights));
    }

    fn handle_cursor(&mut self, position: PhysicalPosition<f64>) {
        let last = self.cursor.replace(position);
        let (Some(mode), Some(last)) = (self.drag, last) else {
            return;
        };
        let dx = (position.x - last.x) as f32;
        let dy = (position.y - last.y) as f32;
        let viewport_h = self.renderer.as_ref().map_or(1, |r| r.size().1) as f32;
        let house = &mut self.house;
        match mode {
            DragMode::Rotate => house.controls.rotate(dx, dy, viewport_h),
            DragMode::Pan => house.controls.pan(&house.camera, dx, dy, viewport_h),
        }
    }

    fn redraw(&mut self) {
        let (elapsed, _dt) = self.clock.tick();
        self.house.frame(elapsed);
        if let Some(renderer) = &mut self.renderer {
            if let Err(e) = renderer.render(&self.house) {
                if !renderer.recover(&e) {
                    log::error!("render error: {:?}", e);
                }
            }
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes()
            .with_title("Haunted House")
            .with_inner_size(LogicalSize::new(1280, 720));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => return self.fail(event_loop, e.into()),
        };
        match self.init_gpu(window.clone()) {
            Ok(renderer) => {
                log::info!(
                    "[gpu] window {}x{} @ {}x",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                log::info!(
                    "[panel] Tab selects, Up/Down nudges (Shift x100): {}",
                    self.panel.describe(&self.house.lights)
                );
                self.renderer = Some(renderer);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                self.house.resize(size.width, size.height);
                log::debug!("[gpu] resize {}x{}", size.width, size.height);
            }
            WindowEvent::ModifiersChanged(m) => self.modifiers = m.state(),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        self.handle_key(event_loop, code);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.drag = match state {
                    ElementState::Pressed => {
                        let modifier = self.modifiers.shift_key() || self.modifiers.control_key();
                        input::drag_mode(button, modifier)
                    }
                    ElementState::Released => None,
                };
            }
            WindowEvent::CursorMoved { position, .. } => self.handle_cursor(position),
            WindowEvent::CursorLeft { .. } => self.cursor = None,
            WindowEvent::MouseWheel { delta, .. } => {
                let notches = input::scroll_notches(delta);
                if notches != 0.0 {
                    self.house.controls.dolly(notches);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }
}
