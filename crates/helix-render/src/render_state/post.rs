//! Post-processing chain wiring: scene target + bloom + composite +
//! dispersion creation, resize, and per-frame recording.

use helix_config::schema::EffectsConfig;

use crate::bloom::{BloomPipeline, BloomSettings};
use crate::dispersion::{DispersionPipeline, DispersionSettings};

use super::composite::CompositePipeline;

/// Offscreen HDR format shared by every intermediate target.
pub(super) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// The full post chain (created when effects are enabled).
pub(super) struct PostPipelines {
    pub scene_texture: wgpu::Texture,
    pub scene_view: wgpu::TextureView,
    pub bloom: BloomPipeline,
    pub composite: CompositePipeline,
    /// Present when the dispersion pass is enabled: the intermediate
    /// composite target plus the final pass reading from it.
    pub tail: Option<DispersionTail>,
}

pub(super) struct DispersionTail {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub pipeline: DispersionPipeline,
}

impl PostPipelines {
    /// Create the chain if the effects master switch is on.
    pub fn try_create(
        device: &wgpu::Device,
        shared_layout: &wgpu::BindGroupLayout,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        effects: &EffectsConfig,
    ) -> Option<Self> {
        if !effects.enabled {
            return None;
        }

        let (scene_texture, scene_view) = create_hdr_texture(device, width, height, "scene");

        let bloom = BloomPipeline::new(
            device,
            &scene_view,
            width,
            height,
            BloomSettings::from_config(effects),
        );

        let dispersion = DispersionSettings::from_config(effects);
        let tail = if dispersion.enabled {
            let (texture, view) = create_hdr_texture(device, width, height, "composite");
            let pipeline =
                DispersionPipeline::new(device, shared_layout, &view, format, dispersion);
            Some(DispersionTail {
                texture,
                view,
                pipeline,
            })
        } else {
            None
        };

        // Composite writes to the intermediate target when dispersion
        // follows, or straight to the surface otherwise.
        let composite_format = if tail.is_some() { HDR_FORMAT } else { format };
        let composite = CompositePipeline::new(
            device,
            &scene_view,
            bloom.output_view(),
            composite_format,
        );

        Some(Self {
            scene_texture,
            scene_view,
            bloom,
            composite,
            tail,
        })
    }

    /// Recreate every offscreen texture and rebuild bind groups.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        let (scene_texture, scene_view) = create_hdr_texture(device, width, height, "scene");
        self.scene_texture = scene_texture;
        self.scene_view = scene_view;

        self.bloom.resize(device, &self.scene_view, width, height);
        self.composite
            .resize(device, &self.scene_view, self.bloom.output_view());

        if let Some(tail) = &mut self.tail {
            let (texture, view) = create_hdr_texture(device, width, height, "composite");
            tail.texture = texture;
            tail.view = view;
            tail.pipeline.resize(device, &tail.view);
        }
    }

    /// Upload all per-frame pass uniforms.
    pub fn update_uniforms(&self, queue: &wgpu::Queue, width: u32, height: u32) {
        self.bloom.update_uniforms(queue, width, height);
        self.composite
            .update_uniforms(queue, self.bloom.settings.effective_strength());
        if let Some(tail) = &self.tail {
            tail.pipeline.update_uniforms(queue);
        }
    }

    /// Record the post chain. The point pass must already have rendered
    /// into `scene_view`.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        surface_view: &wgpu::TextureView,
        shared_bind_group: &wgpu::BindGroup,
    ) {
        self.bloom.render(encoder);

        match &self.tail {
            Some(tail) => {
                self.composite.render(encoder, &tail.view);
                tail.pipeline.render(encoder, surface_view, shared_bind_group);
            }
            None => {
                self.composite.render(encoder, surface_view);
            }
        }
    }
}

fn create_hdr_texture(
    device: &wgpu::Device,
    width: u32,
    height: u32,
    label: &str,
) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: HDR_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}
