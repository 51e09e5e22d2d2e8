//! Window configuration.

use serde::{Deserialize, Serialize};

/// Initial window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial logical width in pixels.
    pub width: u32,
    /// Initial logical height in pixels.
    pub height: u32,
    pub title: String,
    /// Cap applied to the OS device pixel ratio (valid range: 1.0-4.0).
    pub max_pixel_ratio: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "helix".into(),
            max_pixel_ratio: 2.0,
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
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 720);
        assert_eq!(config.title, "helix");
        assert!((config.max_pixel_ratio - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
title = "spiral"
max_pixel_ratio = 1.0
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.title, "spiral");
        assert!((config.max_pixel_ratio - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.width, 1280);
    }
}
