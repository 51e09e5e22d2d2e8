use std::sync::Arc;

use winit::window::Window;

use helix_config::schema::HelixConfig;

use crate::gpu::{GpuContext, RendererError, SceneUniforms, SharedUniforms};
use crate::points::{PointField, PointsPipeline};

use super::post::{PostPipelines, HDR_FORMAT};
use super::scene::SceneStyle;

/// Core rendering state: GPU context, shared uniforms, point pipeline,
/// and the optional post-processing chain.
pub struct RenderState {
    pub gpu: GpuContext,
    pub shared: SharedUniforms,
    pub uniforms: SceneUniforms,
    pub(super) points: PointsPipeline,
    pub(super) post: Option<PostPipelines>,
    pub(super) style: SceneStyle,
    pub clear_color: wgpu::Color,
}

impl RenderState {
    /// Create a fully initialized render state from a window, config, and
    /// generated point field.
    pub async fn new(
        window: Arc<Window>,
        config: &HelixConfig,
        field: &PointField,
    ) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, config.window.max_pixel_ratio).await?;

        let shared = SharedUniforms::new(&gpu.device);
        let mut uniforms =
            SceneUniforms::new(config.animation.progress, gpu.scale_factor as f32);
        uniforms.update_viewport(gpu.size.width, gpu.size.height);

        let post = PostPipelines::try_create(
            &gpu.device,
            &shared.layout,
            gpu.format(),
            gpu.size.width,
            gpu.size.height,
            &config.effects,
        );

        // Points render into the HDR scene target when the post chain is
        // active, otherwise straight to the surface.
        let target_format = if post.is_some() { HDR_FORMAT } else { gpu.format() };
        let points = PointsPipeline::new(
            &gpu.device,
            &shared.layout,
            &field.instances(),
            target_format,
        );

        tracing::info!(
            points = field.len(),
            post = post.is_some(),
            "render state ready"
        );

        Ok(Self {
            gpu,
            shared,
            uniforms,
            points,
            post,
            style: SceneStyle::from_config(config),
            clear_color: wgpu::Color::BLACK,
        })
    }

    /// Handle a window resize: reconfigure the surface, resize offscreen
    /// targets, and refresh the viewport uniforms.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.gpu.resize(width, height);
        self.uniforms.update_viewport(width, height);
        if let Some(post) = &mut self.post {
            post.resize(&self.gpu.device, width, height);
        }
    }
}
