use super::helpers;
use wgpu;

/// Offscreen attachments for the scene pass.
///
/// - `msaa_view` is the multisampled color target, resolved into the swapchain.
/// - `depth_view` is the matching multisampled depth buffer.
///
/// A view keeps its texture alive, so only the views are stored.
pub(crate) struct RenderTargets {
    pub(crate) msaa_view: wgpu::TextureView,
    pub(crate) depth_view: wgpu::TextureView,
    color_format: wgpu::TextureFormat,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            msaa_view: Self::color(device, color_format, width, height),
            depth_view: Self::depth(device, width, height),
            color_format,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.msaa_view = Self::color(device, self.color_format, width, height);
        self.depth_view = Self::depth(device, width, height);
    }

    fn color(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> wgpu::TextureView {
        let (_, view) = helpers::create_render_texture(
            device,
            "msaa_color",
            width,
            height,
            format,
            helpers::SAMPLE_COUNT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        view
    }

    fn depth(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let (_, view) = helpers::create_render_texture(
            device,
            "depth",
            width,
            height,
            helpers::DEPTH_FORMAT,
            helpers::SAMPLE_COUNT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        view
    }
}
