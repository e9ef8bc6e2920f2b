pub mod helpers;
mod labels;
mod meshes;
mod targets;

use crate::viewport;
use glam::Mat4;
use labels::LabelResources;
use meshes::MeshLibrary;
use profile_core::{Color, MeshInstance, Scene};
use targets::RenderTargets;
use web_sys as web;
use wgpu;

/// Per-frame camera and lighting block shared by every pipeline (group 0).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    camera_right: [f32; 4],
    camera_up: [f32; 4],
    ambient: [f32; 4],
    point_light: [f32; 4],
    spot_light: [f32; 4],
    spot_dir: [f32; 4],
    spot_cone: [f32; 4],
}

impl Globals {
    fn from_scene(scene: &Scene) -> Self {
        let cam = &scene.camera;
        let (right, up) = cam.billboard_axes();
        let light = &scene.lighting;
        let (cos_inner, cos_outer) = light.spot.cone_cosines();
        Self {
            view_proj: cam.view_projection().to_cols_array_2d(),
            camera_pos: cam.eye.extend(1.0).to_array(),
            camera_right: right.extend(0.0).to_array(),
            camera_up: up.extend(0.0).to_array(),
            ambient: [light.ambient_intensity, 0.0, 0.0, 0.0],
            point_light: light.point.position.extend(light.point.intensity).to_array(),
            spot_light: light.spot.position.extend(light.spot.intensity).to_array(),
            spot_dir: light.spot.direction().extend(cos_outer).to_array(),
            spot_cone: [cos_inner, 0.0, 0.0, 0.0],
        }
    }
}

/// Model transform and material of one draw (group 1).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    model: [[f32; 4]; 4],
    normal_matrix: [[f32; 4]; 4],
    color: [f32; 4],
    material: [f32; 4],
}

impl ObjectUniforms {
    fn from_instance(inst: &MeshInstance) -> Self {
        let model: Mat4 = inst.transform.matrix();
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
            color: inst.material.color.to_linear().to_array(),
            material: [inst.material.roughness, inst.material.metalness, 0.0, 0.0],
        }
    }
}

struct ObjectSlot {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    object_bgl: wgpu::BindGroupLayout,
    objects: Vec<ObjectSlot>,

    solid_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    meshes: MeshLibrary,
    labels: LabelResources,

    width: u32,
    height: u32,
    max_dimension: u32,
    clear_color: wgpu::Color,
}

/// Clamp the canvas backing store to what the device can render into and
/// return the size actually used.
pub fn fit_canvas(canvas: &web::HtmlCanvasElement, max_dimension: u32) -> (u32, u32) {
    let (w, h) = (canvas.width(), canvas.height());
    let (width, height) = viewport::fit_within(w, h, max_dimension);
    if (width, height) != (w, h) {
        canvas.set_width(width);
        canvas.set_height(height);
    }
    if w.max(h) > max_dimension {
        log::warn!(
            "[render] canvas {}x{} exceeds device limit {}; using {}x{}",
            w,
            h,
            max_dimension,
            width,
            height
        );
    }
    (width, height)
}

impl GpuState {
    /// Acquire WebGPU on `canvas` and upload everything `scene` draws.
    ///
    /// `label_fonts` holds the CSS font family list for each label, in the
    /// order `Scene::labels` yields them.
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        document: &web::Document,
        scene: &Scene,
        label_fonts: &[String],
    ) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let max_dimension = device.limits().max_texture_dimension_2d;
        let (width, height) = fit_canvas(canvas, max_dimension);
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // A premultiplied surface lets the page gradient show through the cleared canvas.
        let transparent = caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied);
        let alpha_mode = if transparent {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[render] surface {}x{} {:?}, alpha {:?}",
            width,
            height,
            format,
            alpha_mode
        );

        let clear_color = if transparent {
            wgpu::Color::TRANSPARENT
        } else {
            let c = Color::hex(profile_core::constants::BACKGROUND_FALLBACK_COLOR).to_linear();
            wgpu::Color {
                r: c.x as f64,
                g: c.y as f64,
                b: c.z as f64,
                a: 1.0,
            }
        };

        let targets = RenderTargets::new(&device, format, width, height);

        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let globals_buffer = helpers::create_uniform_buffer::<Globals>(&device, "globals");
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(profile_core::SCENE_WGSL.into()),
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_bgl, &object_bgl],
            push_constant_ranges: &[],
        });
        let mesh_pipeline = |label: &str, topology: wgpu::PrimitiveTopology| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[meshes::vertex_layout()],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                primitive: wgpu::PrimitiveState {
                    topology,
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: Some(helpers::depth_state(true)),
                multisample: helpers::multisample_state(),
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                cache: None,
                multiview: None,
            })
        };
        let solid_pipeline = mesh_pipeline("solid_pipeline", wgpu::PrimitiveTopology::TriangleList);
        let line_pipeline = mesh_pipeline("line_pipeline", wgpu::PrimitiveTopology::LineList);

        let meshes = MeshLibrary::new(&device);

        let mut labels = LabelResources::new(&device, &globals_bgl, format);
        for (i, spec) in scene.labels().enumerate() {
            let family = label_fonts
                .get(i)
                .map(String::as_str)
                .unwrap_or(crate::fonts::FALLBACK_FAMILY);
            if let Err(e) = labels.add(&device, &queue, document, spec, family) {
                log::warn!("[render] label '{}' skipped: {:?}", spec.text, e);
            }
        }
        log::info!("[render] {} labels ready", labels.len());

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            globals_buffer,
            globals_bind_group,
            object_bgl,
            objects: Vec::new(),
            solid_pipeline,
            line_pipeline,
            meshes,
            labels,
            width,
            height,
            max_dimension,
            clear_color,
        })
    }

    /// Largest surface side the device accepts.
    pub fn max_dimension(&self) -> u32 {
        self.max_dimension
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let (width, height) = viewport::fit_within(width, height, self.max_dimension);
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Reapply the current configuration after the surface was lost or outdated.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn ensure_object_slots(&mut self, count: usize) {
        while self.objects.len() < count {
            let buffer =
                helpers::create_uniform_buffer::<ObjectUniforms>(&self.device, "object_uniforms");
            let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("object_bg"),
                layout: &self.object_bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            });
            self.objects.push(ObjectSlot { buffer, bind_group });
        }
    }

    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let globals = Globals::from_scene(scene);
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let draws = scene.mesh_instances();
        self.ensure_object_slots(draws.len());
        for (slot, inst) in self.objects.iter().zip(draws.iter()) {
            let uniforms = ObjectUniforms::from_instance(inst);
            self.queue
                .write_buffer(&slot.buffer, 0, bytemuck::bytes_of(&uniforms));
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            for (slot, inst) in self.objects.iter().zip(draws.iter()) {
                let Some(mesh) = self.meshes.get(inst.kind) else {
                    continue;
                };
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_bind_group(1, &slot.bind_group, &[]);
                if inst.material.wireframe {
                    rpass.set_pipeline(&self.line_pipeline);
                    rpass.set_index_buffer(mesh.lines.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..mesh.line_index_count, 0, 0..1);
                } else {
                    rpass.set_pipeline(&self.solid_pipeline);
                    rpass.set_index_buffer(mesh.triangles.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..mesh.triangle_index_count, 0, 0..1);
                }
            }
            // Labels last so their blended edges land on top of the meshes behind them.
            self.labels.draw(&mut rpass, &self.globals_bind_group);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
