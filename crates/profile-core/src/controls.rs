//! Orbit camera controls: drag to rotate, wheel/pinch to zoom, auto-rotate
//! while idle. Angles live in spherical coordinates around a fixed target.

use crate::constants::*;
use crate::elements::FrameUpdate;
use crate::state::{wrap_pi, Camera, FrameTime};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Debug, PartialEq)]
pub struct ControlsConfig {
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub enable_rotate: bool,
    pub auto_rotate: bool,
    /// 2.0 completes a turn every 30 s.
    pub auto_rotate_speed: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            enable_zoom: true,
            enable_pan: false,
            enable_rotate: true,
            auto_rotate: true,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
        }
    }
}

/// What the user is currently doing with the camera.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Interaction {
    #[default]
    Idle,
    Rotating,
    Panning,
    Pinching { distance: f32 },
}

/// Radius, azimuth `theta` (around +Y, 0 looking down -Z) and polar `phi`
/// (0 at +Y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
}

impl Spherical {
    pub fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self {
                radius,
                theta: 0.0,
                phi: 0.0,
            };
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let s = self.phi.sin() * self.radius;
        Vec3::new(s * self.theta.sin(), self.phi.cos() * self.radius, s * self.theta.cos())
    }
}

pub struct OrbitControls {
    pub config: ControlsConfig,
    target: Vec3,
    spherical: Spherical,
    interaction: Interaction,
}

impl OrbitControls {
    pub fn new(camera: &Camera, config: ControlsConfig) -> Self {
        Self {
            config,
            target: camera.target,
            spherical: Spherical::from_offset(camera.eye - camera.target),
            interaction: Interaction::Idle,
        }
    }

    pub fn spherical(&self) -> Spherical {
        self.spherical
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn azimuth(&self) -> f32 {
        self.spherical.theta
    }

    pub fn distance(&self) -> f32 {
        self.spherical.radius
    }

    pub fn eye(&self) -> Vec3 {
        self.target + self.spherical.to_offset()
    }

    pub fn apply_to(&self, camera: &mut Camera) {
        camera.target = self.target;
        camera.eye = self.eye();
    }

    /// Angle covered by auto-rotation in `dt` seconds.
    pub fn auto_rotation_angle(&self, dt: f32) -> f32 {
        TAU / 60.0 * self.config.auto_rotate_speed * dt
    }

    /// Primary pointer pressed on the canvas.
    pub fn begin_rotate(&mut self) {
        if self.config.enable_rotate {
            self.interaction = Interaction::Rotating;
        }
    }

    /// Drag by `(dx, dy)` pixels on a viewport `viewport_height` pixels tall.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if !self.config.enable_rotate || self.interaction != Interaction::Rotating {
            return;
        }
        let h = viewport_height.max(1.0);
        self.rotate_left(TAU * dx / h * self.config.rotate_speed);
        self.rotate_up(TAU * dy / h * self.config.rotate_speed);
    }

    /// Two fingers down; `distance` is the gap between them in pixels.
    pub fn begin_pinch(&mut self, distance: f32) {
        if self.config.enable_zoom {
            self.interaction = Interaction::Pinching { distance };
        } else {
            self.interaction = Interaction::Idle;
        }
    }

    pub fn pinch_to(&mut self, distance: f32) {
        if let Interaction::Pinching { distance: prev } = self.interaction {
            if distance > 0.0 && prev > 0.0 {
                self.scale_distance(prev / distance);
            }
            self.interaction = Interaction::Pinching { distance };
        }
    }

    /// All pointers released.
    pub fn end_interaction(&mut self) {
        self.interaction = Interaction::Idle;
    }

    /// Mouse wheel. Negative `delta_y` (scroll up) moves the camera closer.
    pub fn wheel(&mut self, delta_y: f32) {
        if !self.config.enable_zoom || delta_y == 0.0 || !delta_y.is_finite() {
            return;
        }
        let step = self.zoom_scale();
        if delta_y < 0.0 {
            self.scale_distance(step);
        } else {
            self.scale_distance(1.0 / step);
        }
    }

    /// Secondary-button drag. Leaves the controls idle when panning is off.
    pub fn begin_pan(&mut self) {
        if self.config.enable_pan {
            self.interaction = Interaction::Panning;
        }
    }

    pub fn pan_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if !self.config.enable_pan || self.interaction != Interaction::Panning {
            return;
        }
        let offset = self.spherical.to_offset();
        let forward = (-offset).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        // Move by the visible world height per pixel at the target distance.
        let per_px = 2.0 * self.spherical.radius * (CAMERA_FOV_DEGREES.to_radians() * 0.5).tan()
            / viewport_height.max(1.0);
        self.target += (-right * dx + up * dy) * per_px;
    }

    fn zoom_scale(&self) -> f32 {
        ORBIT_ZOOM_BASE.powf(self.config.zoom_speed)
    }

    fn rotate_left(&mut self, angle: f32) {
        self.spherical.theta = wrap_pi(self.spherical.theta - angle);
    }

    fn rotate_up(&mut self, angle: f32) {
        let lo = self.config.min_polar_angle.max(ORBIT_POLAR_EPSILON);
        let hi = self.config.max_polar_angle.min(PI - ORBIT_POLAR_EPSILON);
        self.spherical.phi = (self.spherical.phi - angle).max(lo).min(hi);
    }

    fn scale_distance(&mut self, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let floor = self.config.min_distance.max(ORBIT_MIN_DISTANCE);
        self.spherical.radius = (self.spherical.radius * factor)
            .max(floor)
            .min(self.config.max_distance.max(floor));
    }
}

impl FrameUpdate for OrbitControls {
    fn update(&mut self, frame: &FrameTime) {
        if self.config.auto_rotate && self.interaction == Interaction::Idle {
            let angle = self.auto_rotation_angle(frame.delta.max(0.0));
            self.rotate_left(angle);
        }
    }
}
