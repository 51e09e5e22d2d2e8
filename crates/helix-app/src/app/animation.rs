//! The frame updater's animation state machine.
//!
//! `Idle` until the point field is wired up, `Running` for the lifetime of
//! the window, `Failed` if startup cannot complete. `tick` is a pure state
//! transition so tests can drive a bounded number of ticks; the event loop
//! reschedules itself after each one.

use helix_config::schema::AnimationConfig;

/// Animation lifecycle states. There is no transition out of `Running`
/// other than teardown, and `Failed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Failed,
}

/// Elapsed time plus the field's accumulated rigid-body rotation.
pub struct Animation {
    phase: Phase,
    elapsed: f32,
    rotation: f32,
    rotation_speed: f32,
}

impl Animation {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            phase: Phase::Idle,
            elapsed: 0.0,
            rotation: 0.0,
            rotation_speed: config.rotation_speed,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `Idle → Running`, once the field is ready. No-op in other phases.
    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Running;
        }
    }

    /// Terminal failure transition.
    pub fn fail(&mut self) {
        self.phase = Phase::Failed;
    }

    /// Advance one frame tick: accumulate elapsed time and apply the
    /// fixed angular increment, wrapped modulo 2π. No-op unless running.
    pub fn tick(&mut self, dt: f32) {
        if self.phase != Phase::Running {
            return;
        }
        self.elapsed += dt;
        self.rotation = (self.rotation + self.rotation_speed) % std::f32::consts::TAU;
    }

    /// Seconds of animation time since `start`.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Current rigid-body rotation angle in radians, in [0, 2π).
    pub fn rotation(&self) -> f32 {
        self.rotation
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> Animation {
        let mut anim = Animation::new(&AnimationConfig::default());
        anim.start();
        anim
    }

    #[test]
    fn starts_idle() {
        let anim = Animation::new(&AnimationConfig::default());
        assert_eq!(anim.phase(), Phase::Idle);
    }

    #[test]
    fn idle_ticks_are_no_ops() {
        let mut anim = Animation::new(&AnimationConfig::default());
        anim.tick(1.0);
        anim.tick(1.0);
        assert!((anim.elapsed() - 0.0).abs() < f32::EPSILON);
        assert!((anim.rotation() - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn start_transitions_to_running() {
        let anim = running();
        assert_eq!(anim.phase(), Phase::Running);
    }

    #[test]
    fn elapsed_accumulates_without_drift() {
        let mut anim = running();
        let dt = 1.0 / 60.0;
        for _ in 0..600 {
            anim.tick(dt);
        }
        assert!((anim.elapsed() - 600.0 * dt).abs() < 1e-3);
    }

    #[test]
    fn rotation_is_speed_times_ticks_mod_tau() {
        let mut anim = running();
        for _ in 0..100 {
            anim.tick(1.0 / 60.0);
        }
        let expected = (0.005 * 100.0) % std::f32::consts::TAU;
        assert!((anim.rotation() - expected).abs() < 1e-4);
    }

    #[test]
    fn rotation_wraps_at_tau() {
        let mut config = AnimationConfig::default();
        config.rotation_speed = 1.0;
        let mut anim = Animation::new(&config);
        anim.start();
        for _ in 0..10 {
            anim.tick(0.016);
        }
        // 10 radians wraps past 2π once
        let expected = 10.0 % std::f32::consts::TAU;
        assert!((anim.rotation() - expected).abs() < 1e-4);
        assert!(anim.rotation() < std::f32::consts::TAU);
    }

    #[test]
    fn failed_is_terminal() {
        let mut anim = running();
        anim.fail();
        assert_eq!(anim.phase(), Phase::Failed);
        anim.start();
        assert_eq!(anim.phase(), Phase::Failed);
        anim.tick(1.0);
        assert!((anim.elapsed() - 0.0).abs() < f32::EPSILON);
    }
}
