//! Animated scene elements. Each one owns its transform and only mutates it
//! from its own `update`.

use crate::color::Color;
use crate::constants::*;
use crate::content::{LabelSpec, SkillDescriptor};
use crate::mesh::MeshKind;
use crate::state::{Angle, FrameTime, Transform};
use glam::Vec3;

/// Per-frame hook, called once per rendered frame in mount order.
pub trait FrameUpdate {
    fn update(&mut self, frame: &FrameTime);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub roughness: f32,
    pub metalness: f32,
    pub wireframe: bool,
}

impl Material {
    pub fn standard(color: Color) -> Self {
        Self {
            color,
            roughness: DEFAULT_ROUGHNESS,
            metalness: DEFAULT_METALNESS,
            wireframe: false,
        }
    }
}

/// A mesh the renderer should draw this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshInstance {
    pub kind: MeshKind,
    pub transform: Transform,
    pub material: Material,
}

/// Metallic sphere spinning on X and Y.
#[derive(Clone, Debug)]
pub struct Avatar {
    pub transform: Transform,
    pub material: Material,
    pub spin_x: Angle,
    pub spin_y: Angle,
}

impl Default for Avatar {
    fn default() -> Self {
        Self {
            transform: Transform::at(Vec3::from(AVATAR_POSITION)),
            material: Material {
                color: Color::hex(AVATAR_COLOR),
                roughness: AVATAR_ROUGHNESS,
                metalness: AVATAR_METALNESS,
                wireframe: false,
            },
            spin_x: Angle::default(),
            spin_y: Angle::default(),
        }
    }
}

impl FrameUpdate for Avatar {
    fn update(&mut self, frame: &FrameTime) {
        self.spin_x.advance(frame.delta * AVATAR_SPIN_X_PER_SEC);
        self.spin_y.advance(frame.delta * AVATAR_SPIN_Y_PER_SEC);
        self.transform.rotation.x = self.spin_x.wrapped();
        self.transform.rotation.y = self.spin_y.wrapped();
    }
}

impl Avatar {
    pub fn instance(&self) -> MeshInstance {
        MeshInstance {
            kind: MeshKind::Sphere,
            transform: self.transform,
            material: self.material,
        }
    }
}

/// Bobbing, spinning cube with a label underneath.
#[derive(Clone, Debug)]
pub struct SkillMarker {
    base: Vec3,
    pub transform: Transform,
    pub material: Material,
    pub label: LabelSpec,
    pub spin: Angle,
}

impl SkillMarker {
    pub fn new(skill: &SkillDescriptor) -> Self {
        Self {
            base: skill.position,
            transform: Transform::at(skill.position),
            material: Material::standard(skill.color),
            label: LabelSpec::centered(
                &skill.label,
                skill.position - Vec3::Y * MARKER_LABEL_DROP,
                MARKER_LABEL_FONT_SIZE,
                Color::WHITE,
            ),
            spin: Angle::default(),
        }
    }

    pub fn base(&self) -> Vec3 {
        self.base
    }

    /// Current vertical displacement from the base position.
    pub fn bob_offset(&self) -> f32 {
        self.transform.position.y - self.base.y
    }

    pub fn instance(&self) -> MeshInstance {
        MeshInstance {
            kind: MeshKind::Cube,
            transform: self.transform,
            material: self.material,
        }
    }
}

/// Vertical offset of a marker whose base X is `base_x` at `elapsed` seconds.
/// The X term de-synchronises markers placed at different columns.
#[inline]
pub fn bob(elapsed: f64, base_x: f32) -> f32 {
    (elapsed + base_x as f64).sin() as f32 * MARKER_BOB_AMPLITUDE
}

impl FrameUpdate for SkillMarker {
    fn update(&mut self, frame: &FrameTime) {
        self.transform.position.y = self.base.y + bob(frame.elapsed, self.base.x);
        // Fixed step per frame: spin speed follows the display refresh rate.
        self.spin.advance(MARKER_SPIN_PER_FRAME);
        self.transform.rotation.y = self.spin.wrapped();
    }
}

/// Large wireframe torus spinning around Z.
#[derive(Clone, Debug)]
pub struct DecorativeRing {
    pub transform: Transform,
    pub material: Material,
    pub spin_z: Angle,
}

impl Default for DecorativeRing {
    fn default() -> Self {
        Self {
            transform: Transform::at(Vec3::from(RING_POSITION)),
            material: Material {
                wireframe: true,
                ..Material::standard(Color::hex(RING_COLOR))
            },
            spin_z: Angle::default(),
        }
    }
}

impl FrameUpdate for DecorativeRing {
    fn update(&mut self, frame: &FrameTime) {
        self.spin_z.advance(frame.delta * RING_SPIN_Z_PER_SEC);
        self.transform.rotation.z = self.spin_z.wrapped();
    }
}

impl DecorativeRing {
    pub fn instance(&self) -> MeshInstance {
        MeshInstance {
            kind: MeshKind::Torus,
            transform: self.transform,
            material: self.material,
        }
    }
}
