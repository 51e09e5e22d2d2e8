//! Post-processing effects configuration.
//!
//! Controls the bloom and spectral dispersion passes. Set `enabled = false`
//! to bypass post-processing entirely and render points straight to the
//! surface.

use serde::{Deserialize, Serialize};

/// Bloom (light bleed) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    pub enabled: bool,
    /// Bloom brightness multiplier applied at composite (valid range: 0.0-3.0).
    pub strength: f32,
    /// Blur kernel spread multiplier (valid range: 0.0-2.0).
    pub radius: f32,
    /// Luminance threshold for the prefilter pass (valid range: 0.0-1.0).
    pub threshold: f32,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            strength: 1.4,
            radius: 0.87,
            threshold: 0.01,
        }
    }
}

/// Barrel-distortion spectral dispersion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispersionConfig {
    pub enabled: bool,
    /// Maximum radial distortion amount (valid range: 0.0-3.0).
    pub amount: f32,
}

impl Default for DispersionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            amount: 1.2,
        }
    }
}

/// Master effects configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Master toggle — disables the whole post chain when false.
    pub enabled: bool,
    pub bloom: BloomConfig,
    pub dispersion: DispersionConfig,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bloom: BloomConfig::default(),
            dispersion: DispersionConfig::default(),
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
    fn effects_config_defaults() {
        let config = EffectsConfig::default();
        assert!(config.enabled);
        assert!(config.bloom.enabled);
        assert!((config.bloom.strength - 1.4).abs() < f32::EPSILON);
        assert!((config.bloom.radius - 0.87).abs() < f32::EPSILON);
        assert!((config.bloom.threshold - 0.01).abs() < f32::EPSILON);
        assert!(config.dispersion.enabled);
        assert!((config.dispersion.amount - 1.2).abs() < f32::EPSILON);
    }

    #[test]
    fn bloom_config_partial_toml() {
        let toml_str = r#"
strength = 2.0
threshold = 0.3
"#;
        let config: BloomConfig = toml::from_str(toml_str).unwrap();
        assert!(config.enabled); // default preserved
        assert!((config.strength - 2.0).abs() < f32::EPSILON);
        assert!((config.threshold - 0.3).abs() < f32::EPSILON);
        assert!((config.radius - 0.87).abs() < f32::EPSILON);
    }

    #[test]
    fn effects_master_toggle_in_toml() {
        let toml_str = r#"
enabled = false
"#;
        let config: EffectsConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.enabled);
        // Sub-configs still have their defaults
        assert!(config.bloom.enabled);
        assert!(config.dispersion.enabled);
    }

    #[test]
    fn effects_full_toml() {
        let toml_str = r#"
enabled = true

[bloom]
enabled = true
strength = 0.8
radius = 0.5

[dispersion]
enabled = false
"#;
        let config: EffectsConfig = toml::from_str(toml_str).unwrap();
        assert!((config.bloom.strength - 0.8).abs() < f32::EPSILON);
        assert!((config.bloom.radius - 0.5).abs() < f32::EPSILON);
        assert!(!config.dispersion.enabled);
    }

    #[test]
    fn effects_serialization_roundtrip() {
        let config = EffectsConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EffectsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.enabled, config.enabled);
        assert_eq!(deserialized.bloom.enabled, config.bloom.enabled);
        assert!((deserialized.dispersion.amount - config.dispersion.amount).abs() < f32::EPSILON);
    }
}
