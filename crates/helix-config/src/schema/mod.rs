//! Configuration schema: one file per section, all sections defaultable.

mod animation;
mod camera;
mod effects;
mod points;
mod window;

pub use animation::AnimationConfig;
pub use camera::CameraConfig;
pub use effects::{BloomConfig, DispersionConfig, EffectsConfig};
pub use points::{PointSource, PointsConfig};
pub use window::WindowConfig;

use serde::{Deserialize, Serialize};

/// Bumped when the on-disk schema changes incompatibly.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Top-level helix configuration.
///
/// Every section uses serde defaults, so a partial `config.toml` works out
/// of the box.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HelixConfig {
    pub points: PointsConfig,
    pub camera: CameraConfig,
    pub animation: AnimationConfig,
    pub effects: EffectsConfig,
    pub window: WindowConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_all_sections() {
        let config = HelixConfig::default();
        assert_eq!(config.points.count, 30_000);
        assert!((config.camera.fov_degrees - 75.0).abs() < f32::EPSILON);
        assert!((config.animation.rotation_speed - 0.005).abs() < f32::EPSILON);
        assert!(config.effects.enabled);
        assert_eq!(config.window.title, "helix");
    }

    #[test]
    fn empty_toml_is_default() {
        let config: HelixConfig = toml::from_str("").unwrap();
        assert_eq!(config.points.count, 30_000);
        assert!(config.effects.bloom.enabled);
    }

    #[test]
    fn partial_toml_overrides_one_section() {
        let toml_str = r#"
[points]
count = 500

[effects.bloom]
strength = 0.5
"#;
        let config: HelixConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.points.count, 500);
        assert!((config.effects.bloom.strength - 0.5).abs() < f32::EPSILON);
        // Untouched sections keep defaults
        assert!((config.camera.distance - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }
}
