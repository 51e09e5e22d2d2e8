//! GPU uniform buffer types shared across shader passes.
//!
//! `SceneUniforms` is the single shared uniform block uploaded each frame.
//! The point pass and the dispersion pass both read from it at group 0.

/// GPU-side uniform buffer matching the WGSL `Scene` struct.
///
/// Layout: 8 × f32 = 32 bytes, 16-byte aligned (wgpu requirement).
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    /// Elapsed time in seconds (wraps at ~6 hours to avoid precision loss).
    pub time: f32,
    /// User-controlled progress scalar (0.0-1.0).
    pub progress: f32,
    /// Viewport width in pixels.
    pub screen_width: f32,
    /// Viewport height in pixels.
    pub screen_height: f32,

    /// Viewport aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Capped device pixel ratio.
    pub pixel_ratio: f32,
    /// Padding to reach 32 bytes.
    pub _padding: [f32; 2],
}

impl SceneUniforms {
    /// Create uniforms with an initial progress value. Runtime-varying
    /// fields start at zero and are updated each frame.
    pub fn new(progress: f32, pixel_ratio: f32) -> Self {
        Self {
            time: 0.0,
            progress,
            screen_width: 0.0,
            screen_height: 0.0,
            aspect_ratio: 1.0,
            pixel_ratio,
            _padding: [0.0; 2],
        }
    }

    /// Update per-frame time. Wraps at ~6 hours to avoid f32 precision loss.
    pub fn update_time(&mut self, dt: f32) {
        self.time = (self.time + dt) % 21600.0;
    }

    /// Update viewport dimensions and recompute aspect ratio.
    ///
    /// A zero-height viewport yields aspect 1.0 rather than a NaN
    /// projection.
    pub fn update_viewport(&mut self, width: u32, height: u32) {
        self.screen_width = width as f32;
        self.screen_height = height as f32;
        self.aspect_ratio = if height > 0 {
            width as f32 / height as f32
        } else {
            1.0
        };
    }
}

/// The shared uniform buffer plus its bind group, consumed at group 0 by
/// the point and dispersion pipelines.
pub struct SharedUniforms {
    pub buffer: wgpu::Buffer,
    pub layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,
}

impl SharedUniforms {
    pub fn new(device: &wgpu::Device) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<SceneUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene bind group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            buffer,
            layout,
            bind_group,
        }
    }

    /// Upload the current frame's uniforms.
    pub fn upload(&self, queue: &wgpu::Queue, uniforms: &SceneUniforms) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(uniforms));
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_size_is_32_bytes() {
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 32);
    }

    #[test]
    fn uniforms_alignment_is_4_bytes() {
        assert_eq!(std::mem::align_of::<SceneUniforms>(), 4);
    }

    #[test]
    fn new_uniforms_start_at_zero_time() {
        let u = SceneUniforms::new(0.25, 2.0);
        assert!((u.time - 0.0).abs() < f32::EPSILON);
        assert!((u.progress - 0.25).abs() < f32::EPSILON);
        assert!((u.pixel_ratio - 2.0).abs() < f32::EPSILON);
        assert!((u.aspect_ratio - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn update_time_accumulates() {
        let mut u = SceneUniforms::new(0.0, 1.0);
        u.update_time(0.5);
        u.update_time(0.25);
        assert!((u.time - 0.75).abs() < 1e-6);
    }

    #[test]
    fn update_time_wraps() {
        let mut u = SceneUniforms::new(0.0, 1.0);
        u.time = 21599.0;
        u.update_time(2.0);
        // (21599 + 2) % 21600 = 1.0
        assert!((u.time - 1.0).abs() < 1e-3);
    }

    #[test]
    fn update_viewport_computes_aspect_ratio() {
        let mut u = SceneUniforms::new(0.0, 1.0);
        u.update_viewport(1920, 1080);
        assert!((u.screen_width - 1920.0).abs() < f32::EPSILON);
        assert!((u.screen_height - 1080.0).abs() < f32::EPSILON);
        assert!((u.aspect_ratio - (1920.0 / 1080.0)).abs() < 1e-4);
    }

    #[test]
    fn update_viewport_zero_height_gives_aspect_one() {
        let mut u = SceneUniforms::new(0.0, 1.0);
        u.update_viewport(800, 0);
        assert!((u.aspect_ratio - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn bytemuck_cast_works() {
        let u = SceneUniforms::new(0.0, 1.0);
        let bytes: &[u8] = bytemuck::bytes_of(&u);
        assert_eq!(bytes.len(), 32);
    }
}
