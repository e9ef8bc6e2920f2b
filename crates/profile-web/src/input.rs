use glam::Vec2;
use smallvec::SmallVec;
use web_sys as web;

/// Buttons as reported by `PointerEvent.button`.
pub const BUTTON_PRIMARY: i16 = 0;
pub const BUTTON_SECONDARY: i16 = 2;

/// Pointers currently pressed on the canvas, keyed by pointer id.
#[derive(Default, Clone, Debug)]
pub struct PointerTracker {
    active: SmallVec<[(i32, Vec2); 2]>,
}

impl PointerTracker {
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn press(&mut self, id: i32, pos: Vec2) {
        match self.active.iter_mut().find(|(pid, _)| *pid == id) {
            Some(entry) => entry.1 = pos,
            None => self.active.push((id, pos)),
        }
    }

    /// Record a move and return the displacement since the last sample.
    pub fn move_to(&mut self, id: i32, pos: Vec2) -> Option<Vec2> {
        let entry = self.active.iter_mut().find(|(pid, _)| *pid == id)?;
        let delta = pos - entry.1;
        entry.1 = pos;
        Some(delta)
    }

    pub fn release(&mut self, id: i32) -> bool {
        let before = self.active.len();
        self.active.retain(|(pid, _)| *pid != id);
        self.active.len() != before
    }

    /// Gap between the first two pointers, if two are down.
    pub fn pinch_distance(&self) -> Option<f32> {
        match self.active.as_slice() {
            [(_, a), (_, b), ..] => Some(a.distance(*b)),
            _ => None,
        }
    }
}

/// What a pointer gesture should do to the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Rotate,
    Pan,
    Pinch(f32),
}

/// Classify the gesture after a press: two pointers pinch, otherwise the
/// button decides.
#[inline]
pub fn gesture_for(pointers: &PointerTracker, button: i16, shift_or_ctrl: bool) -> Gesture {
    if let Some(d) = pointers.pinch_distance() {
        return Gesture::Pinch(d);
    }
    if button == BUTTON_SECONDARY || (button == BUTTON_PRIMARY && shift_or_ctrl) {
        Gesture::Pan
    } else {
        Gesture::Rotate
    }
}

/// Normalise wheel deltas reported in lines or pages to pixels.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32) -> f32 {
    match delta_mode {
        1 => (delta_y * 16.0) as f32,
        2 => (delta_y * 800.0) as f32,
        _ => delta_y as f32,
    }
}

/// Pointer position in CSS pixels relative to the canvas' top-left corner.
#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}
