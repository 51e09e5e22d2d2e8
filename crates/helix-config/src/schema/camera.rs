//! Camera configuration.

use serde::{Deserialize, Serialize};

/// Orbit camera settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (valid range: 10-140).
    pub fov_degrees: f32,
    /// Near clip plane (must be > 0).
    pub near: f32,
    /// Far clip plane (must be > near).
    pub far: f32,
    /// Initial orbit distance from the target.
    pub distance: f32,
    /// Per-frame damping factor for orbit input (valid range: 0.0-1.0).
    pub damping: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 100.0,
            distance: 5.0,
            damping: 0.1,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_config_defaults() {
        let config = CameraConfig::default();
        assert!((config.fov_degrees - 75.0).abs() < f32::EPSILON);
        assert!((config.near - 0.1).abs() < f32::EPSILON);
        assert!((config.far - 100.0).abs() < f32::EPSILON);
        assert!((config.distance - 5.0).abs() < f32::EPSILON);
        assert!((config.damping - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn camera_config_partial_toml() {
        let toml_str = r#"
fov_degrees = 60.0
distance = 8.0
"#;
        let config: CameraConfig = toml::from_str(toml_str).unwrap();
        assert!((config.fov_degrees - 60.0).abs() < f32::EPSILON);
        assert!((config.distance - 8.0).abs() < f32::EPSILON);
        assert!((config.near - 0.1).abs() < f32::EPSILON);
    }
}
