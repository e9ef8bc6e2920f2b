//! Camera-facing text labels.
//!
//! Each label's text is rasterized once with a 2D canvas into a white-on-
//! transparent RGBA texture, then drawn as a billboard quad whose world size
//! follows the label's font size.

use super::helpers;
use fnv::FnvHashMap;
use profile_core::{Anchor, LabelSpec};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Rasterization size of one em, in canvas pixels.
const GLYPH_PX: f64 = 96.0;
const LINE_HEIGHT: f64 = 1.25;
const PADDING_PX: f64 = 8.0;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct LabelUniforms {
    center: [f32; 4],
    size: [f32; 4],
    color: [f32; 4],
}

/// Pixels of one rasterized string.
pub(crate) struct RasterizedText {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) pixels: Vec<u8>,
}

pub(crate) fn rasterize(
    document: &web::Document,
    text: &str,
    family: &str,
) -> anyhow::Result<RasterizedText> {
    let js = |e: wasm_bindgen::JsValue| anyhow::anyhow!("{:?}", e);
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("not a canvas"))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js)?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("not a 2d context"))?;
    let font = format!("{}px {}", GLYPH_PX, family);
    ctx.set_font(&font);
    let text_width = ctx.measure_text(text).map_err(js)?.width();
    let width = (text_width + 2.0 * PADDING_PX).ceil().max(1.0) as u32;
    let height = (GLYPH_PX * LINE_HEIGHT + 2.0 * PADDING_PX).ceil() as u32;
    // Resizing resets the context state.
    canvas.set_width(width);
    canvas.set_height(height);
    ctx.set_font(&font);
    ctx.set_fill_style_str("#ffffff");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(text, width as f64 / 2.0, height as f64 / 2.0)
        .map_err(js)?;
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(js)?;
    Ok(RasterizedText {
        width,
        height,
        pixels: data.data().0,
    })
}

/// Quad offset, in quad-size units, that puts the anchor point at the label
/// position. Y grows upwards.
pub(crate) fn anchor_shift(x: Anchor, y: Anchor) -> [f32; 2] {
    let sx = match x {
        Anchor::Start => 0.5,
        Anchor::Center => 0.0,
        Anchor::End => -0.5,
    };
    let sy = match y {
        Anchor::Start => -0.5,
        Anchor::Center => 0.0,
        Anchor::End => 0.5,
    };
    [sx, sy]
}

struct GlyphTexture {
    view: wgpu::TextureView,
    width: u32,
    height: u32,
}

pub(crate) struct LabelResources {
    pipeline: wgpu::RenderPipeline,
    bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    textures: Vec<GlyphTexture>,
    by_key: FnvHashMap<(String, String), usize>,
    /// One bind group per label; it holds the label's uniform buffer alive.
    sprites: Vec<wgpu::BindGroup>,
}

impl LabelResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        globals_bgl: &wgpu::BindGroupLayout,
        color_format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("label_shader"),
            source: wgpu::ShaderSource::Wgsl(profile_core::LABEL_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("label_bgl"),
            entries: &[
                helpers::uniform_layout_entry(
                    0,
                    wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("label_pl"),
            bind_group_layouts: &[globals_bgl, &bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("label_pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_label"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(helpers::depth_state(false)),
            multisample: helpers::multisample_state(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_label"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("label_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        Self {
            pipeline,
            bgl,
            sampler,
            textures: Vec::new(),
            by_key: FnvHashMap::default(),
            sprites: Vec::new(),
        }
    }

    /// Rasterize (or reuse) the glyph texture for `spec` and add a sprite.
    pub(crate) fn add(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        document: &web::Document,
        spec: &LabelSpec,
        family: &str,
    ) -> anyhow::Result<()> {
        let key = (spec.text.clone(), family.to_string());
        let tex_index = match self.by_key.get(&key) {
            Some(&i) => i,
            None => {
                let raster = rasterize(document, &spec.text, family)?;
                self.textures.push(upload_glyphs(device, queue, &spec.text, &raster));
                let i = self.textures.len() - 1;
                self.by_key.insert(key, i);
                i
            }
        };
        let glyphs = &self.textures[tex_index];

        let em = spec.font_size / GLYPH_PX as f32;
        let uniforms = LabelUniforms {
            center: spec.position.extend(1.0).to_array(),
            size: {
                let [sx, sy] = anchor_shift(spec.anchor_x, spec.anchor_y);
                [glyphs.width as f32 * em, glyphs.height as f32 * em, sx, sy]
            },
            color: spec.color.to_linear().to_array(),
        };
        let uniform_buffer = helpers::create_uniform_buffer::<LabelUniforms>(device, "label_uniforms");
        queue.write_buffer(&uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("label_bg"),
            layout: &self.bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&glyphs.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });
        self.sprites.push(bind_group);
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.sprites.len()
    }

    pub(crate) fn draw<'p>(&'p self, rpass: &mut wgpu::RenderPass<'p>, globals: &'p wgpu::BindGroup) {
        if self.sprites.is_empty() {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, globals, &[]);
        for bind_group in &self.sprites {
            rpass.set_bind_group(1, bind_group, &[]);
            rpass.draw(0..6, 0..1);
        }
    }
}

fn upload_glyphs(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    text: &str,
    raster: &RasterizedText,
) -> GlyphTexture {
    let size = wgpu::Extent3d {
        width: raster.width,
        height: raster.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(&format!("glyphs:{}", text)),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &raster.pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * raster.width),
            rows_per_image: Some(raster.height),
        },
        size,
    );
    GlyphTexture {
        view: texture.create_view(&wgpu::TextureViewDescriptor::default()),
        width: raster.width,
        height: raster.height,
    }
}
