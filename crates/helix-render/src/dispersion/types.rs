//! Spectral dispersion pass types.

use helix_config::schema::EffectsConfig;

/// Per-pass uniforms for the dispersion shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DispersionUniforms {
    /// Maximum radial distortion amount.
    pub amount: f32,
    pub _padding: [f32; 3],
}

/// Dispersion configuration captured at pipeline creation.
#[derive(Debug, Clone, Copy)]
pub struct DispersionSettings {
    pub enabled: bool,
    pub amount: f32,
}

impl Default for DispersionSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            amount: 1.2,
        }
    }
}

impl DispersionSettings {
    pub fn from_config(effects: &EffectsConfig) -> Self {
        Self {
            enabled: effects.enabled && effects.dispersion.enabled,
            amount: effects.dispersion.amount,
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
    fn dispersion_uniforms_size_is_16_bytes() {
        assert_eq!(std::mem::size_of::<DispersionUniforms>(), 16);
    }

    #[test]
    fn dispersion_settings_default() {
        let s = DispersionSettings::default();
        assert!(s.enabled);
        assert!((s.amount - 1.2).abs() < f32::EPSILON);
    }

    #[test]
    fn dispersion_settings_from_config_disabled_master() {
        let mut effects = EffectsConfig::default();
        effects.enabled = false;
        let s = DispersionSettings::from_config(&effects);
        assert!(!s.enabled);
    }

    #[test]
    fn dispersion_settings_from_config_amount() {
        let mut effects = EffectsConfig::default();
        effects.dispersion.amount = 0.4;
        let s = DispersionSettings::from_config(&effects);
        assert!((s.amount - 0.4).abs() < f32::EPSILON);
    }
}
