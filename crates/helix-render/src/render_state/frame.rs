//! Per-frame orchestration: upload uniforms, record the pass chain,
//! present.

use crate::camera::matrix::Mat4;
use crate::gpu::RendererError;

use super::helpers::log_first_frame;
use super::scene;
use super::state::RenderState;

/// Everything the frame updater publishes into a frame: elapsed time, the
/// progress scalar, the field's rigid-body rotation, and the camera view.
#[derive(Debug, Clone, Copy)]
pub struct FrameInputs {
    pub time: f32,
    pub progress: f32,
    pub rotation: f32,
    pub view: Mat4,
}

impl RenderState {
    /// Render a complete frame: points, bloom, composite, dispersion.
    pub fn render_frame(&mut self, frame: &FrameInputs) -> Result<(), RendererError> {
        self.uniforms.time = frame.time;
        self.uniforms.progress = frame.progress;
        self.shared.upload(&self.gpu.queue, &self.uniforms);

        let point_uniforms = scene::compute_point_uniforms(
            &self.style,
            self.uniforms.aspect_ratio,
            frame.rotation,
            &frame.view,
        );
        self.points.update_uniforms(&self.gpu.queue, &point_uniforms);

        if let Some(post) = &self.post {
            post.update_uniforms(&self.gpu.queue, self.gpu.size.width, self.gpu.size.height);
        }

        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(e) => {
                tracing::error!("failed to get surface texture: {e}");
                return Err(RendererError::SurfaceError(e.to_string()));
            }
        };

        let surface_view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("helix frame encoder"),
            });

        match &self.post {
            Some(post) => {
                self.points.render(
                    &mut encoder,
                    &post.scene_view,
                    &self.shared.bind_group,
                    wgpu::Color::TRANSPARENT,
                );
                post.render(&mut encoder, &surface_view, &self.shared.bind_group);
            }
            None => {
                self.points.render(
                    &mut encoder,
                    &surface_view,
                    &self.shared.bind_group,
                    self.clear_color,
                );
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}
