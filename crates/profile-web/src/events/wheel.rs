use crate::dom::EventListener;
use crate::input;
use profile_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scroll zoom. Registered non-passive so the page itself does not scroll.
pub fn wire_wheel(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<Scene>>) -> EventListener {
    let target: web::EventTarget = canvas.clone().into();
    EventListener::new_active(&target, "wheel", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        let mut scene = scene.borrow_mut();
        if !scene.controls.config.enable_zoom {
            return;
        }
        ev.prevent_default();
        scene
            .controls
            .wheel(input::wheel_delta_px(ev.delta_y(), ev.delta_mode()));
    })
}
