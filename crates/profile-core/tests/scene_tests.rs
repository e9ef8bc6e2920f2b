// Host-side tests for scene composition, mount order and the frame clock.

use glam::Vec3;
use instant::Instant;
use profile_core::*;
use std::time::Duration;

fn scene() -> Scene {
    Scene::new(&ProfileContent::new().unwrap(), ControlsConfig::default())
}

#[test]
fn default_content_composes_four_markers_and_labels() {
    let s = scene();
    assert_eq!(s.markers.len(), 4);
    let expected = [
        (Vec3::new(-3.0, 1.0, 0.0), Color::hex(0xef4444), "React"),
        (Vec3::new(3.0, 1.0, 0.0), Color::hex(0x3b82f6), "TypeScript"),
        (Vec3::new(-2.0, -1.0, 2.0), Color::hex(0xf59e0b), "Three.js"),
        (Vec3::new(2.0, -1.0, 2.0), Color::hex(0x8b5cf6), "Node.js"),
    ];
    for (marker, (pos, color, label)) in s.markers.iter().zip(expected) {
        assert_eq!(marker.base(), pos);
        assert_eq!(marker.material.color, color);
        assert_eq!(marker.label.text, label);
        assert_eq!(marker.label.position, pos - Vec3::Y);
    }
    let skill_labels = s.labels().filter(|l| (l.font_size - 0.3).abs() < 1e-6).count();
    assert_eq!(skill_labels, 4);
    // Two headline labels plus one per marker.
    assert_eq!(s.labels().count(), 6);
}

#[test]
fn draw_list_is_in_mount_order() {
    let s = scene();
    let kinds: Vec<MeshKind> = s.mesh_instances().iter().map(|m| m.kind).collect();
    assert_eq!(
        kinds,
        vec![
            MeshKind::Sphere,
            MeshKind::Cube,
            MeshKind::Cube,
            MeshKind::Cube,
            MeshKind::Cube,
            MeshKind::Torus
        ]
    );
    assert!(!s.mesh_instances().spilled());
}

#[test]
fn headline_labels_match_profile() {
    let s = scene();
    let name = &s.headlines[0];
    assert_eq!(name.position, Vec3::new(0.0, 4.0, 0.0));
    assert!((name.font_size - 1.0).abs() < 1e-6);
    let font = name.font.as_ref().map(|f| f.url.as_str());
    assert_eq!(font, Some(constants::NAME_FONT_URL));
    let title = &s.headlines[1];
    assert_eq!(title.position, Vec3::new(0.0, 3.2, 0.0));
    assert_eq!(title.color, Color::hex(0xe5e7eb));
    assert!(title.font.is_none());
}

#[test]
fn update_moves_every_element_and_camera() {
    let mut s = scene();
    let eye_before = s.camera.eye;
    s.update(&FrameTime {
        elapsed: 1.0,
        delta: 0.5,
    });
    assert!((s.avatar.transform.rotation.x - 0.25).abs() < 1e-6);
    assert!((s.ring.transform.rotation.z - 0.15).abs() < 1e-6);
    for m in &s.markers {
        assert!((m.transform.rotation.y - 0.01).abs() < 1e-7);
    }
    assert_ne!(s.camera.eye, eye_before);
    assert_eq!(s.frame_count(), 1);
}

#[test]
fn custom_skill_list_sizes_the_scene() {
    let content = ProfileContent {
        skills: vec![SkillDescriptor::new([0.0, 0.0, 0.0], Color::WHITE, "Rust")],
        ..ProfileContent::new().unwrap()
    };
    let s = Scene::new(&content, ControlsConfig::default());
    assert_eq!(s.markers.len(), 1);
    assert_eq!(s.mesh_instances().len(), 3);
}

#[test]
fn tick_feeds_elapsed_and_delta_from_clock() {
    let mut s = scene();
    let t0 = Instant::now();
    let first = s.tick(t0);
    assert_eq!(first.delta, 0.0);
    assert_eq!(first.elapsed, 0.0);
    let second = s.tick(t0 + Duration::from_millis(500));
    assert!((second.delta - 0.5).abs() < 1e-6);
    assert!((second.elapsed - 0.5).abs() < 1e-6);
    let third = s.tick(t0 + Duration::from_millis(750));
    assert!((third.delta - 0.25).abs() < 1e-6);
    assert!((third.elapsed - 0.75).abs() < 1e-6);
}

#[test]
fn clock_ignores_samples_that_go_backwards() {
    let mut clock = FrameClock::new();
    let t0 = Instant::now() + Duration::from_secs(1);
    clock.tick(t0);
    let back = clock.tick(t0 - Duration::from_millis(100));
    assert_eq!(back.delta, 0.0);
    assert_eq!(clock.elapsed(), 0.0);
}

#[test]
fn camera_defaults_and_viewport() {
    let mut cam = Camera::default();
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 8.0));
    assert!((cam.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
    cam.set_viewport(1600, 800);
    assert!((cam.aspect - 2.0).abs() < 1e-6);
    cam.set_viewport(0, 0);
    assert!((cam.aspect - 1.0).abs() < 1e-6);
    let (right, up) = Camera::default().billboard_axes();
    assert!((right - Vec3::X).length() < 1e-6);
    assert!((up - Vec3::Y).length() < 1e-6);
}

#[test]
fn spot_light_cone_with_full_penumbra() {
    let lighting = Lighting::default();
    let (inner, outer) = lighting.spot.cone_cosines();
    assert!((inner - 1.0).abs() < 1e-6);
    assert!((outer - 0.15f32.cos()).abs() < 1e-6);
    let dir = lighting.spot.direction();
    assert!((dir - Vec3::ONE.normalize()).length() < 1e-6);
}

#[test]
fn transform_matrix_applies_translation_and_rotation() {
    let mut t = Transform::at(Vec3::new(0.0, 0.0, -2.0));
    t.rotation.z = std::f32::consts::FRAC_PI_2;
    let p = t.matrix().transform_point3(Vec3::X);
    assert!((p - Vec3::new(0.0, 1.0, -2.0)).length() < 1e-5);
}
