//! Animation loop configuration.

use serde::{Deserialize, Serialize};

/// Per-frame animation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Rigid-body rotation applied to the field each frame, in radians.
    pub rotation_speed: f32,
    /// Initial progress value (valid range: 0.0-1.0).
    pub progress: f32,
    /// Step applied per progress key press (valid range: 0.001-0.5).
    pub progress_step: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 0.005,
            progress: 0.0,
            progress_step: 0.01,
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
    fn animation_config_defaults() {
        let config = AnimationConfig::default();
        assert!((config.rotation_speed - 0.005).abs() < f32::EPSILON);
        assert!((config.progress - 0.0).abs() < f32::EPSILON);
        assert!((config.progress_step - 0.01).abs() < f32::EPSILON);
    }

    #[test]
    fn animation_config_partial_toml() {
        let toml_str = r#"
progress = 0.5
"#;
        let config: AnimationConfig = toml::from_str(toml_str).unwrap();
        assert!((config.progress - 0.5).abs() < f32::EPSILON);
        assert!((config.rotation_speed - 0.005).abs() < f32::EPSILON);
    }
}
