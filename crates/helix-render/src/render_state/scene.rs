//! Per-frame point uniform computation: MVP from camera + field rotation,
//! palette from config.

use helix_common::Color;
use helix_config::schema::HelixConfig;

use crate::camera::matrix as mat;
use crate::points::PointUniforms;

/// Static styling captured from config at startup.
#[derive(Debug, Clone, Copy)]
pub(super) struct SceneStyle {
    pub color1: [f32; 4],
    pub color2: [f32; 4],
    pub color3: [f32; 4],
    pub size: f32,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl SceneStyle {
    pub fn from_config(config: &HelixConfig) -> Self {
        Self {
            color1: palette_entry(&config.points.color1),
            color2: palette_entry(&config.points.color2),
            color3: palette_entry(&config.points.color3),
            size: config.points.size,
            fov_y: config.camera.fov_degrees.to_radians(),
            near: config.camera.near,
            far: config.camera.far,
        }
    }
}

fn palette_entry(hex: &str) -> [f32; 4] {
    let [r, g, b] = Color::from_hex(hex)
        .map(|c| c.to_rgb_f32())
        .unwrap_or([1.0, 1.0, 1.0]);
    [r, g, b, 1.0]
}

/// Build MVP + model matrices and palette for the point shader.
pub(super) fn compute_point_uniforms(
    style: &SceneStyle,
    aspect: f32,
    rotation: f32,
    view: &mat::Mat4,
) -> PointUniforms {
    let proj = mat::perspective(style.fov_y, aspect, style.near, style.far);
    let model = mat::rotate_y(rotation);
    let mvp = mat::mul(&proj, &mat::mul(view, &model));

    PointUniforms {
        mvp,
        model,
        color1: style.color1,
        color2: style.color2,
        color3: style.color3,
        size: style.size,
        _padding: [0.0; 3],
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::matrix::IDENTITY;

    fn style() -> SceneStyle {
        SceneStyle::from_config(&HelixConfig::default())
    }

    #[test]
    fn style_from_default_config() {
        let s = style();
        // #612574 → r ≈ 0.38, #293583 → b ≈ 0.51
        assert!((s.color1[0] - 0x61 as f32 / 255.0).abs() < 1e-4);
        assert!((s.color2[2] - 0x83 as f32 / 255.0).abs() < 1e-4);
        assert!((s.size - 2.0).abs() < f32::EPSILON);
        assert!((s.fov_y - 75.0f32.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn style_bad_color_falls_back_to_white() {
        let mut config = HelixConfig::default();
        config.points.color3 = "not-a-color".into();
        let s = SceneStyle::from_config(&config);
        assert_eq!(s.color3, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn compute_point_uniforms_produces_valid_mvp() {
        let pu = compute_point_uniforms(&style(), 16.0 / 9.0, 0.0, &IDENTITY);
        let sum: f32 = pu.mvp.iter().map(|v| v.abs()).sum();
        assert!(sum > 0.0, "MVP matrix should not be all zeros");
    }

    #[test]
    fn compute_point_uniforms_rotation_changes_model() {
        let a = compute_point_uniforms(&style(), 1.0, 0.0, &IDENTITY);
        let b = compute_point_uniforms(&style(), 1.0, 1.0, &IDENTITY);
        let diff: f32 = a
            .model
            .iter()
            .zip(b.model.iter())
            .map(|(x, y)| (x - y).abs())
            .sum();
        assert!(diff > 0.01, "rotation should change the model matrix");
    }

    #[test]
    fn compute_point_uniforms_zero_rotation_is_identity_model() {
        let pu = compute_point_uniforms(&style(), 1.0, 0.0, &IDENTITY);
        for (a, b) in pu.model.iter().zip(IDENTITY.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }
}
