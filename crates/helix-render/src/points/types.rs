//! Point instance types and GPU buffer layout.

/// A single point of the field as uploaded to the instance buffer.
///
/// Layout: position(vec3) + jitter + color_seed + anim_offset = 24 bytes.
/// Each instance expands to a 6-vertex billboard quad in the vertex shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub position: [f32; 3],
    pub jitter: f32,
    pub color_seed: f32,
    pub anim_offset: f32,
}

impl PointInstance {
    /// Vertices per billboard quad (two triangles).
    pub const VERTICES_PER_POINT: u32 = 6;

    /// wgpu instance buffer layout for `PointInstance`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<PointInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // jitter: f32 at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32,
                offset: 12,
                shader_location: 1,
            },
            // color_seed: f32 at offset 16
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32,
                offset: 16,
                shader_location: 2,
            },
            // anim_offset: f32 at offset 20
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32,
                offset: 20,
                shader_location: 3,
            },
        ],
    };
}

/// Per-draw uniforms for the point pass: transforms + palette.
///
/// Uploaded to bind group 1 each frame. Layout: 48 × f32 = 192 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointUniforms {
    /// Model-View-Projection matrix (column-major).
    pub mvp: [f32; 16],
    /// Model matrix (the field's rigid-body rotation).
    pub model: [f32; 16],
    /// Point palette (RGBA).
    pub color1: [f32; 4],
    pub color2: [f32; 4],
    pub color3: [f32; 4],
    /// Base sprite size in pixels.
    pub size: f32,
    pub _padding: [f32; 3],
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_instance_size_is_24_bytes() {
        assert_eq!(std::mem::size_of::<PointInstance>(), 24);
    }

    #[test]
    fn point_instance_alignment_is_4_bytes() {
        assert_eq!(std::mem::align_of::<PointInstance>(), 4);
    }

    #[test]
    fn point_uniforms_size_is_192_bytes() {
        assert_eq!(std::mem::size_of::<PointUniforms>(), 192);
    }

    #[test]
    fn layout_stride_matches_struct() {
        assert_eq!(
            PointInstance::LAYOUT.array_stride,
            std::mem::size_of::<PointInstance>() as u64
        );
        assert_eq!(PointInstance::LAYOUT.attributes.len(), 4);
    }

    #[test]
    fn bytemuck_cast_works() {
        let inst = PointInstance {
            position: [1.0, 2.0, 3.0],
            jitter: 0.5,
            color_seed: 0.25,
            anim_offset: 0.75,
        };
        let bytes: &[u8] = bytemuck::bytes_of(&inst);
        assert_eq!(bytes.len(), 24);
    }
}
