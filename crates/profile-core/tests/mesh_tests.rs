// Host-side tests for procedural mesh generation.

use profile_core::*;

fn in_bounds(mesh: &Mesh) -> bool {
    let n = mesh.vertices.len() as u32;
    mesh.indices.iter().all(|&i| i < n)
}

#[test]
fn avatar_sphere_counts() {
    let m = MeshKind::Sphere.build();
    assert_eq!(m.vertices.len(), 33 * 33);
    // Pole rows contribute one triangle per segment.
    assert_eq!(m.triangle_count(), 2 * 32 * 32 - 2 * 32);
    assert!(in_bounds(&m));
}

#[test]
fn sphere_vertices_lie_on_radius_with_outward_normals() {
    let m = Mesh::sphere(1.0, 16, 12);
    for v in &m.vertices {
        let p = glam::Vec3::from(v.position);
        let n = glam::Vec3::from(v.normal);
        assert!((p.length() - 1.0).abs() < 1e-5);
        assert!((n - p).length() < 1e-5);
    }
}

#[test]
fn cube_counts_and_extent() {
    let m = MeshKind::Cube.build();
    assert_eq!(m.vertices.len(), 24);
    assert_eq!(m.indices.len(), 36);
    for v in &m.vertices {
        for c in v.position {
            assert!((c.abs() - 0.4).abs() < 1e-6);
        }
    }
    assert!(in_bounds(&m));
}

#[test]
fn cube_normals_point_away_from_centre() {
    let m = Mesh::cuboid(1.0, 2.0, 3.0);
    for v in &m.vertices {
        let p = glam::Vec3::from(v.position);
        let n = glam::Vec3::from(v.normal);
        assert!(p.dot(n) > 0.0);
    }
}

#[test]
fn ring_torus_counts() {
    let m = MeshKind::Torus.build();
    assert_eq!(m.vertices.len(), 17 * 101);
    assert_eq!(m.triangle_count(), 16 * 100 * 2);
    assert!(in_bounds(&m));
}

#[test]
fn torus_vertices_sit_on_tube_surface() {
    let m = Mesh::torus(3.0, 0.1, 16, 100);
    for v in &m.vertices {
        let p = glam::Vec3::from(v.position);
        let ring_dist = (p.x * p.x + p.y * p.y).sqrt() - 3.0;
        let tube = (ring_dist * ring_dist + p.z * p.z).sqrt();
        assert!((tube - 0.1).abs() < 1e-4);
    }
}

#[test]
fn wireframe_lists_each_edge_once() {
    let cube = MeshKind::Cube.build();
    let lines = cube.wireframe_indices();
    // Four sides plus one diagonal per face.
    assert_eq!(lines.len(), 6 * 5 * 2);

    let torus = MeshKind::Torus.build();
    let lines = torus.wireframe_indices();
    let edges: Vec<(u32, u32)> = lines
        .chunks_exact(2)
        .map(|e| (e[0].min(e[1]), e[0].max(e[1])))
        .collect();
    let unique: fnv::FnvHashSet<_> = edges.iter().copied().collect();
    assert_eq!(unique.len(), edges.len());
    assert_eq!(edges.len(), 17 * 100 + 16 * 101 + 16 * 100);
}

#[test]
fn degenerate_segment_counts_are_raised() {
    let m = Mesh::sphere(1.0, 0, 0);
    assert_eq!(m.vertices.len(), 4 * 3);
    assert!(in_bounds(&m));
}
