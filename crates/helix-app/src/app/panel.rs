//! The one runtime-tunable parameter: progress.

use helix_config::schema::AnimationConfig;

/// A bound scalar in [0, 1], stepped by key presses and read by the frame
/// updater every tick.
pub struct ProgressControl {
    value: f32,
    step: f32,
}

impl ProgressControl {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            value: config.progress.clamp(0.0, 1.0),
            step: config.progress_step,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn increase(&mut self) {
        self.value = (self.value + self.step).clamp(0.0, 1.0);
    }

    pub fn decrease(&mut self) {
        self.value = (self.value - self.step).clamp(0.0, 1.0);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn control() -> ProgressControl {
        ProgressControl::new(&AnimationConfig::default())
    }

    #[test]
    fn starts_at_configured_value() {
        let mut config = AnimationConfig::default();
        config.progress = 0.4;
        let c = ProgressControl::new(&config);
        assert!((c.value() - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn out_of_range_initial_value_is_clamped() {
        let mut config = AnimationConfig::default();
        config.progress = 3.0;
        let c = ProgressControl::new(&config);
        assert!((c.value() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn steps_by_configured_increment() {
        let mut c = control();
        c.increase();
        assert!((c.value() - 0.01).abs() < 1e-6);
        c.decrease();
        assert!((c.value() - 0.0).abs() < 1e-6);
    }

    #[test]
    fn clamps_at_one() {
        let mut c = control();
        for _ in 0..200 {
            c.increase();
        }
        assert!((c.value() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn clamps_at_zero() {
        let mut c = control();
        c.decrease();
        assert!((c.value() - 0.0).abs() < 1e-6);
    }
}
