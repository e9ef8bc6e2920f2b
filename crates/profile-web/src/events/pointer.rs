use crate::dom::EventListener;
use crate::input::{self, Gesture, PointerTracker};
use profile_core::{Interaction, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub pointers: Rc<RefCell<PointerTracker>>,
}

/// Attach pointer handlers to the canvas. Dropping the returned listeners
/// detaches them.
pub fn wire_input_handlers(w: InputWiring) -> Vec<EventListener> {
    vec![
        wire_pointerdown(&w),
        wire_pointermove(&w),
        wire_pointerup(&w, "pointerup"),
        wire_pointerup(&w, "pointercancel"),
        wire_contextmenu(&w),
    ]
}

fn viewport_height(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.get_bounding_client_rect().height() as f32
}

fn wire_pointerdown(w: &InputWiring) -> EventListener {
    let w = w.clone();
    let target: web::EventTarget = w.canvas.clone().into();
    EventListener::new(&target, "pointerdown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let pos = input::pointer_canvas_css(ev, &w.canvas);
        let gesture = {
            let mut pointers = w.pointers.borrow_mut();
            pointers.press(ev.pointer_id(), pos);
            input::gesture_for(&pointers, ev.button(), ev.shift_key() || ev.ctrl_key())
        };
        {
            let mut scene = w.scene.borrow_mut();
            match gesture {
                Gesture::Rotate => scene.controls.begin_rotate(),
                Gesture::Pan => scene.controls.begin_pan(),
                Gesture::Pinch(d) => scene.controls.begin_pinch(d),
            }
            log::debug!("[controls] {:?} -> {:?}", gesture, scene.controls.interaction());
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    })
}

fn wire_pointermove(w: &InputWiring) -> EventListener {
    let w = w.clone();
    let target: web::EventTarget = w.canvas.clone().into();
    EventListener::new(&target, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let pos = input::pointer_canvas_css(ev, &w.canvas);
        let (delta, pinch) = {
            let mut pointers = w.pointers.borrow_mut();
            let delta = pointers.move_to(ev.pointer_id(), pos);
            (delta, pointers.pinch_distance())
        };
        let Some(delta) = delta else {
            return;
        };
        let h = viewport_height(&w.canvas);
        let mut scene = w.scene.borrow_mut();
        let controls = &mut scene.controls;
        match (controls.interaction(), pinch) {
            (Interaction::Pinching { .. }, Some(d)) => controls.pinch_to(d),
            (Interaction::Rotating, _) => controls.rotate_by_pixels(delta.x, delta.y, h),
            (Interaction::Panning, _) => controls.pan_by_pixels(delta.x, delta.y, h),
            _ => {}
        }
    })
}

fn wire_pointerup(w: &InputWiring, event: &'static str) -> EventListener {
    let w = w.clone();
    let target: web::EventTarget = w.canvas.clone().into();
    EventListener::new(&target, event, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let all_released = {
            let mut pointers = w.pointers.borrow_mut();
            if !pointers.release(ev.pointer_id()) {
                return;
            }
            pointers.is_empty()
        };
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
        let mut scene = w.scene.borrow_mut();
        if all_released {
            scene.controls.end_interaction();
        } else {
            // One finger left after a pinch keeps rotating.
            scene.controls.begin_rotate();
        }
    })
}

fn wire_contextmenu(w: &InputWiring) -> EventListener {
    let target: web::EventTarget = w.canvas.clone().into();
    EventListener::new(&target, "contextmenu", move |ev: web::Event| {
        ev.prevent_default();
    })
}
