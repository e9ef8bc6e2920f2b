use profile_core::{Mesh, MeshKind, Vertex};
use wgpu::util::DeviceExt;

/// One uploaded primitive with both triangle and edge index buffers.
pub(crate) struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) triangles: wgpu::Buffer,
    pub(crate) triangle_index_count: u32,
    pub(crate) lines: wgpu::Buffer,
    pub(crate) line_index_count: u32,
}

impl GpuMesh {
    pub(crate) fn upload(device: &wgpu::Device, kind: MeshKind, mesh: &Mesh) -> Self {
        let lines = mesh.wireframe_indices();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?}_vb", kind)),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let triangles = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?}_tris", kind)),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let line_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?}_lines", kind)),
            contents: bytemuck::cast_slice(&lines),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            triangles,
            triangle_index_count: mesh.indices.len() as u32,
            lines: line_buffer,
            line_index_count: lines.len() as u32,
        }
    }
}

/// GPU meshes for every primitive the scene uses, indexed by kind.
pub(crate) struct MeshLibrary {
    meshes: Vec<(MeshKind, GpuMesh)>,
}

impl MeshLibrary {
    pub(crate) fn new(device: &wgpu::Device) -> Self {
        let meshes = MeshKind::ALL
            .iter()
            .map(|&kind| {
                let mesh = kind.build();
                log::info!(
                    "[render] mesh {:?}: {} vertices, {} triangles",
                    kind,
                    mesh.vertices.len(),
                    mesh.triangle_count()
                );
                (kind, GpuMesh::upload(device, kind, &mesh))
            })
            .collect();
        Self { meshes }
    }

    pub(crate) fn get(&self, kind: MeshKind) -> Option<&GpuMesh> {
        self.meshes.iter().find(|(k, _)| *k == kind).map(|(_, m)| m)
    }
}

pub(crate) fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRS,
    }
}
