//! Config validation: range checks over every numeric setting.

use helix_common::{Color, ConfigError};

use crate::schema::HelixConfig;

fn check_range(name: &str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ConfigError::ValidationError(format!(
            "{name} = {value} outside valid range {min}..{max}"
        )));
    }
    Ok(())
}

fn check_color(name: &str, value: &str) -> Result<(), ConfigError> {
    if Color::from_hex(value).is_none() {
        return Err(ConfigError::ValidationError(format!(
            "{name} = {value:?} is not a hex color"
        )));
    }
    Ok(())
}

/// Validate a full config, returning the first violation found.
pub fn validate(config: &HelixConfig) -> Result<(), ConfigError> {
    if config.points.count == 0 || config.points.count > 1_000_000 {
        return Err(ConfigError::ValidationError(format!(
            "points.count = {} outside valid range 1..1000000",
            config.points.count
        )));
    }
    check_color("points.color1", &config.points.color1)?;
    check_color("points.color2", &config.points.color2)?;
    check_color("points.color3", &config.points.color3)?;
    check_range("points.size", config.points.size, 0.5, 16.0)?;

    check_range("camera.fov_degrees", config.camera.fov_degrees, 10.0, 140.0)?;
    if config.camera.near <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "camera.near = {} must be positive",
            config.camera.near
        )));
    }
    if config.camera.far <= config.camera.near {
        return Err(ConfigError::ValidationError(format!(
            "camera.far = {} must exceed camera.near = {}",
            config.camera.far, config.camera.near
        )));
    }
    check_range("camera.damping", config.camera.damping, 0.0, 1.0)?;

    check_range("animation.progress", config.animation.progress, 0.0, 1.0)?;
    check_range(
        "animation.progress_step",
        config.animation.progress_step,
        0.001,
        0.5,
    )?;

    check_range("effects.bloom.strength", config.effects.bloom.strength, 0.0, 3.0)?;
    check_range("effects.bloom.radius", config.effects.bloom.radius, 0.0, 2.0)?;
    check_range(
        "effects.bloom.threshold",
        config.effects.bloom.threshold,
        0.0,
        1.0,
    )?;
    check_range(
        "effects.dispersion.amount",
        config.effects.dispersion.amount,
        0.0,
        3.0,
    )?;

    let ratio = config.window.max_pixel_ratio;
    if !(1.0..=4.0).contains(&ratio) {
        return Err(ConfigError::ValidationError(format!(
            "window.max_pixel_ratio = {ratio} outside valid range 1..4"
        )));
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(validate(&HelixConfig::default()).is_ok());
    }

    #[test]
    fn zero_points_rejected() {
        let mut config = HelixConfig::default();
        config.points.count = 0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("points.count"));
    }

    #[test]
    fn bad_color_rejected() {
        let mut config = HelixConfig::default();
        config.points.color2 = "purple".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("points.color2"));
    }

    #[test]
    fn out_of_range_progress_rejected() {
        let mut config = HelixConfig::default();
        config.animation.progress = 1.5;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("animation.progress"));
    }

    #[test]
    fn inverted_clip_planes_rejected() {
        let mut config = HelixConfig::default();
        config.camera.far = 0.05;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("camera.far"));
    }

    #[test]
    fn nan_rejected() {
        let mut config = HelixConfig::default();
        config.effects.bloom.strength = f32::NAN;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn excessive_bloom_strength_rejected() {
        let mut config = HelixConfig::default();
        config.effects.bloom.strength = 99.0;
        assert!(validate(&config).is_err());
    }
}
