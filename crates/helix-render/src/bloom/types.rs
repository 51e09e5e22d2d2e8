//! Bloom pipeline types.

use helix_config::schema::EffectsConfig;

/// Per-pass uniforms for the bloom shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BloomUniforms {
    /// 1.0 / texture_width, 1.0 / texture_height.
    pub texel_size: [f32; 2],
    /// Luminance cutoff for the prefilter pass.
    pub threshold: f32,
    /// Blur kernel spread multiplier.
    pub radius: f32,
}

/// Bloom configuration captured from app config at pipeline creation.
#[derive(Debug, Clone, Copy)]
pub struct BloomSettings {
    pub enabled: bool,
    /// Brightness multiplier applied at composite.
    pub strength: f32,
    pub radius: f32,
    pub threshold: f32,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            strength: 1.4,
            radius: 0.87,
            threshold: 0.01,
        }
    }
}

impl BloomSettings {
    /// Create bloom settings from the effects config.
    pub fn from_config(effects: &EffectsConfig) -> Self {
        Self {
            enabled: effects.enabled && effects.bloom.enabled,
            strength: effects.bloom.strength,
            radius: effects.bloom.radius,
            threshold: effects.bloom.threshold,
        }
    }

    /// The strength actually applied at composite: zero when disabled, so
    /// the (zero-initialized) bloom texture contributes nothing.
    pub fn effective_strength(&self) -> f32 {
        if self.enabled {
            self.strength
        } else {
            0.0
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
    fn bloom_uniforms_size_is_16_bytes() {
        assert_eq!(std::mem::size_of::<BloomUniforms>(), 16);
    }

    #[test]
    fn bloom_settings_default() {
        let s = BloomSettings::default();
        assert!(s.enabled);
        assert!((s.strength - 1.4).abs() < f32::EPSILON);
        assert!((s.radius - 0.87).abs() < f32::EPSILON);
        assert!((s.threshold - 0.01).abs() < f32::EPSILON);
    }

    #[test]
    fn bloom_settings_from_config_enabled() {
        let effects = EffectsConfig::default();
        let s = BloomSettings::from_config(&effects);
        assert!(s.enabled);
        assert!((s.strength - 1.4).abs() < f32::EPSILON);
    }

    #[test]
    fn bloom_settings_from_config_disabled_master() {
        let mut effects = EffectsConfig::default();
        effects.enabled = false;
        let s = BloomSettings::from_config(&effects);
        assert!(!s.enabled);
    }

    #[test]
    fn bloom_settings_from_config_disabled_bloom() {
        let mut effects = EffectsConfig::default();
        effects.bloom.enabled = false;
        let s = BloomSettings::from_config(&effects);
        assert!(!s.enabled);
    }

    #[test]
    fn effective_strength_zero_when_disabled() {
        let mut s = BloomSettings::default();
        assert!((s.effective_strength() - 1.4).abs() < f32::EPSILON);
        s.enabled = false;
        assert!((s.effective_strength() - 0.0).abs() < f32::EPSILON);
    }
}
