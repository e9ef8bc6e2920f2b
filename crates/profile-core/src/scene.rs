//! Scene composition and the per-frame update pass.

use crate::content::{LabelSpec, ProfileContent};
use crate::controls::{ControlsConfig, OrbitControls};
use crate::elements::{Avatar, DecorativeRing, FrameUpdate, MeshInstance, SkillMarker};
use crate::state::{Camera, FrameClock, FrameTime, Lighting};
use instant::Instant;
use smallvec::SmallVec;

/// Meshes drawn per frame: one avatar, a handful of markers, one ring.
pub type DrawList = SmallVec<[MeshInstance; 8]>;

/// The whole profile scene. Built once, then mutated in place each frame.
pub struct Scene {
    pub camera: Camera,
    pub lighting: Lighting,
    pub controls: OrbitControls,
    pub avatar: Avatar,
    pub headlines: Vec<LabelSpec>,
    pub markers: Vec<SkillMarker>,
    pub ring: DecorativeRing,
    clock: FrameClock,
    frame_count: u64,
}

impl Scene {
    pub fn new(content: &ProfileContent, controls: ControlsConfig) -> Self {
        let camera = Camera::default();
        let controls = OrbitControls::new(&camera, controls);
        let markers: Vec<SkillMarker> = content.skills.iter().map(SkillMarker::new).collect();
        log::info!(
            "[scene] composed avatar, {} skill markers, ring; camera at ({:.1},{:.1},{:.1})",
            markers.len(),
            camera.eye.x,
            camera.eye.y,
            camera.eye.z
        );
        Self {
            camera,
            lighting: Lighting::default(),
            controls,
            avatar: Avatar::default(),
            headlines: vec![content.name.clone(), content.title.clone()],
            markers,
            ring: DecorativeRing::default(),
            clock: FrameClock::new(),
            frame_count: 0,
        }
    }

    /// Sample the clock and run one update pass.
    pub fn tick(&mut self, now: Instant) -> FrameTime {
        let frame = self.clock.tick(now);
        self.update(&frame);
        frame
    }

    /// Run every element's update in mount order, then sync the camera.
    pub fn update(&mut self, frame: &FrameTime) {
        self.avatar.update(frame);
        for marker in &mut self.markers {
            marker.update(frame);
        }
        self.ring.update(frame);
        self.controls.update(frame);
        self.controls.apply_to(&mut self.camera);
        self.frame_count += 1;
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    pub fn mesh_instances(&self) -> DrawList {
        let mut list = DrawList::new();
        list.push(self.avatar.instance());
        list.extend(self.markers.iter().map(SkillMarker::instance));
        list.push(self.ring.instance());
        list
    }

    /// Headline labels first, then one label per skill marker.
    pub fn labels(&self) -> impl Iterator<Item = &LabelSpec> {
        self.headlines
            .iter()
            .chain(self.markers.iter().map(|m| &m.label))
    }
}
