#![cfg(target_arch = "wasm32")]
mod dom;
mod events;
mod fonts;
mod frame;
mod input;
mod overlay;
mod render;
mod viewport;

use fnv::FnvHashMap;
use profile_core::constants::BACKGROUND_CSS;
use profile_core::{ControlsConfig, FontSource, ProfileContent, Scene};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Everything a mounted view owns. Dropping it tears the view down.
struct MountedView {
    animation: Option<frame::AnimationLoop>,
    listeners: Vec<dom::EventListener>,
    overlay: Option<overlay::Overlay>,
}

impl Drop for MountedView {
    fn drop(&mut self) {
        if let Some(mut animation) = self.animation.take() {
            animation.stop();
        }
        self.listeners.clear();
        if let Some(overlay) = self.overlay.take() {
            overlay.remove();
        }
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<MountedView>> = const { RefCell::new(None) };
    // Bumped on every mount/unmount so a slow init can tell it was superseded.
    static GENERATION: Cell<u32> = const { Cell::new(0) };
}

fn next_generation() -> u32 {
    GENERATION.with(|g| {
        let n = g.get().wrapping_add(1);
        g.set(n);
        n
    })
}

fn is_current(generation: u32) -> bool {
    GENERATION.with(|g| g.get() == generation)
}

fn take_mounted() -> Option<MountedView> {
    MOUNTED.with(|m| m.borrow_mut().take())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("profile-web starting");
    mount();
    Ok(())
}

/// Build the scene on `#app-canvas`, replacing any view already mounted.
#[wasm_bindgen]
pub fn mount() {
    let generation = next_generation();
    drop(take_mounted());
    spawn_local(async move {
        match init(generation).await {
            Ok(view) if is_current(generation) => {
                MOUNTED.with(|m| *m.borrow_mut() = Some(view));
                log::info!("[mount] view mounted");
            }
            Ok(_) => log::info!("[mount] superseded before init finished; discarding"),
            Err(e) => log::error!("init error: {:?}", e),
        }
    });
}

/// Stop the loop, detach listeners, remove the overlay and release GPU resources.
#[wasm_bindgen]
pub fn unmount() {
    next_generation();
    if take_mounted().is_some() {
        log::info!("[mount] view unmounted");
    }
}

async fn init(generation: u32) -> anyhow::Result<MountedView> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::style_viewport(&document, &canvas, BACKGROUND_CSS);
    dom::sync_canvas_backing_size(&canvas);

    let content = ProfileContent::new()?;
    let overlay = overlay::Overlay::mount(&document, &content.overlay)
        .map_err(|e| anyhow::anyhow!(format!("overlay: {:?}", e)))?;

    // From here on the view owns what it has built, so an early return cleans up.
    let mut view = MountedView {
        animation: None,
        listeners: Vec::new(),
        overlay: Some(overlay),
    };

    let canvas_resize = canvas.clone();
    view.listeners.push(dom::EventListener::new(&window, "resize", move |_| {
        dom::sync_canvas_backing_size(&canvas_resize);
    }));

    let scene = Rc::new(RefCell::new(Scene::new(&content, ControlsConfig::default())));

    let sources: Vec<Option<FontSource>> = scene.borrow().labels().map(|l| l.font.clone()).collect();
    let label_fonts = resolve_fonts(&document, &sources).await;
    if !is_current(generation) {
        return Ok(view);
    }

    let gpu = {
        let scene_ref = scene.borrow();
        render::GpuState::new(&canvas, &document, &scene_ref, &label_fonts).await
    };
    let gpu = match gpu {
        Ok(gpu) => gpu,
        Err(e) => {
            // The overlay stays up without a renderer.
            log::error!("[mount] WebGPU unavailable: {:?}", e);
            return Ok(view);
        }
    };
    if !is_current(generation) {
        return Ok(view);
    }

    let pointers = Rc::new(RefCell::new(input::PointerTracker::default()));
    view.listeners.extend(events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        pointers,
    }));
    view.listeners.push(events::wire_wheel(&canvas, scene.clone()));

    view.animation = Some(frame::AnimationLoop::start(frame::FrameContext {
        scene,
        gpu,
        canvas,
    }));
    Ok(view)
}

/// CSS family list for each label; each distinct remote font is fetched once.
async fn resolve_fonts(document: &web::Document, sources: &[Option<FontSource>]) -> Vec<String> {
    let mut loaded: FnvHashMap<String, String> = FnvHashMap::default();
    let mut families = Vec::with_capacity(sources.len());
    for source in sources {
        let family = match source {
            None => fonts::FALLBACK_FAMILY.to_string(),
            Some(src) => match loaded.get(&src.url) {
                Some(f) => f.clone(),
                None => {
                    let f = fonts::load(document, src).await;
                    loaded.insert(src.url.clone(), f.clone());
                    f
                }
            },
        };
        families.push(family);
    }
    families
}
