//! Visual-side state types shared with the web frontend.
//!
//! These types avoid referencing platform-specific APIs. The web frontend
//! consumes them to build camera matrices, light uniforms and model matrices.

use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec3};
use instant::Instant;
use std::time::Duration;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from(CAMERA_POSITION),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
    /// World-space right and up axes of the view, used to orient billboards.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize_or_zero();
        let right = forward.cross(self.up).normalize_or_zero();
        let up = right.cross(forward);
        (right, up)
    }
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }
}

/// Ambient fill plus one point light and one soft spot light.
#[derive(Clone, Debug)]
pub struct Lighting {
    pub ambient_intensity: f32,
    pub point: PointLight,
    pub spot: SpotLight,
}

#[derive(Clone, Debug)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Debug)]
pub struct SpotLight {
    pub position: Vec3,
    pub target: Vec3,
    /// Half-angle of the cone in radians.
    pub angle: f32,
    /// Fraction of the cone that fades out towards the edge, 0..=1.
    pub penumbra: f32,
    pub intensity: f32,
}

impl SpotLight {
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }
    /// Cosines of the inner (full intensity) and outer (zero intensity) cone.
    pub fn cone_cosines(&self) -> (f32, f32) {
        let outer = self.angle.cos();
        let inner = (self.angle * (1.0 - self.penumbra.clamp(0.0, 1.0))).cos();
        (inner, outer)
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient_intensity: AMBIENT_INTENSITY,
            point: PointLight {
                position: Vec3::from(POINT_LIGHT_POSITION),
                intensity: POINT_LIGHT_INTENSITY,
            },
            spot: SpotLight {
                position: Vec3::from(SPOT_LIGHT_POSITION),
                target: Vec3::ZERO,
                angle: SPOT_LIGHT_ANGLE,
                penumbra: SPOT_LIGHT_PENUMBRA,
                intensity: SPOT_LIGHT_INTENSITY,
            },
        }
    }
}

/// A spin angle that only ever grows. Accumulated in f64 so per-frame steps
/// are never rounded away, and read back wrapped into `[0, 2π)` for rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Angle(f64);

impl Angle {
    pub fn new(radians: f64) -> Self {
        Self(radians)
    }

    pub fn advance(&mut self, radians: f32) {
        self.0 += radians as f64;
    }

    /// Unwrapped total.
    pub fn total(self) -> f64 {
        self.0
    }

    pub fn wrapped(self) -> f32 {
        self.0.rem_euclid(std::f64::consts::TAU) as f32
    }
}

/// Wrap an angle into `-π..=π`.
#[inline]
pub fn wrap_pi(radians: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    (radians + PI).rem_euclid(TAU) - PI
}

/// Position, Euler rotation (radians, XYZ order) and scale of a scene node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let q = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, q, self.position)
    }
}

/// Timing handed to every per-frame update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock was created. Kept in f64 so phases driven by
    /// it stay smooth on long-running pages.
    pub elapsed: f64,
    /// Seconds since the previous frame.
    pub delta: f32,
}

/// Accumulates elapsed time across frames.
#[derive(Clone, Debug)]
pub struct FrameClock {
    last: Option<Instant>,
    elapsed: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: None,
            elapsed: 0.0,
        }
    }

    /// Sample the clock at `now`. The first sample yields a zero delta.
    pub fn tick(&mut self, now: Instant) -> FrameTime {
        let dt = match self.last {
            Some(prev) if now > prev => now - prev,
            _ => Duration::ZERO,
        };
        self.last = Some(now);
        self.advance(dt)
    }

    /// Advance by an explicit step.
    pub fn advance(&mut self, dt: Duration) -> FrameTime {
        self.elapsed += dt.as_secs_f64();
        FrameTime {
            elapsed: self.elapsed,
            delta: dt.as_secs_f32(),
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
