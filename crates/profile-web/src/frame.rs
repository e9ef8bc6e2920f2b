use crate::render;
use instant::Instant;
use profile_core::Scene;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Frames between periodic camera/frame-count debug lines.
const DEBUG_LOG_INTERVAL: u64 = 600;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub gpu: render::GpuState,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    /// Advance the scene by one tick and draw it.
    pub fn frame(&mut self) {
        let (width, height) = render::fit_canvas(&self.canvas, self.gpu.max_dimension());
        let mut scene = self.scene.borrow_mut();
        scene.set_viewport(width, height);
        scene.tick(Instant::now());

        self.gpu.resize_if_needed(width, height);
        match self.gpu.render(&scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[frame] surface lost; reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }

        if scene.frame_count() % DEBUG_LOG_INTERVAL == 0 {
            let eye = scene.camera.eye;
            log::debug!(
                "[frame] #{} eye=({:.2},{:.2},{:.2}) azimuth={:.3}",
                scene.frame_count(),
                eye.x,
                eye.y,
                eye.z,
                scene.controls.azimuth()
            );
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop that can be cancelled.
///
/// The tick closure re-schedules itself through `slot`, so the loop keeps the
/// frame context alive until `stop` empties the slot.
pub struct AnimationLoop {
    running: Rc<Cell<bool>>,
    handle: Rc<Cell<Option<i32>>>,
    slot: TickSlot,
}

impl AnimationLoop {
    pub fn start(mut ctx: FrameContext) -> Self {
        let running = Rc::new(Cell::new(true));
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let slot: TickSlot = Rc::new(RefCell::new(None));

        let running_tick = running.clone();
        let handle_tick = handle.clone();
        let slot_tick = slot.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            if !running_tick.get() {
                return;
            }
            ctx.frame();
            if let Some(cb) = slot_tick.borrow().as_ref() {
                handle_tick.set(request_frame(cb));
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = slot.borrow().as_ref() {
            handle.set(request_frame(cb));
        }
        log::info!("[frame] animation loop started");
        Self {
            running,
            handle,
            slot,
        }
    }

    pub fn stop(&mut self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Dropping the closure releases the frame context and its GPU resources.
        self.slot.borrow_mut().take();
        log::info!("[frame] animation loop stopped");
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}
