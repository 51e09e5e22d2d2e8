//! Damped orbit camera.
//!
//! Mouse drag feeds target yaw/pitch, the wheel feeds target distance;
//! `update` eases the actual values toward the targets once per frame.

use helix_config::schema::CameraConfig;

use super::matrix::{self, Mat4};

/// Radians of orbit per pixel of drag.
const DRAG_SENSITIVITY: f32 = 0.005;
/// Fractional distance change per wheel line.
const ZOOM_SENSITIVITY: f32 = 0.1;
const MIN_DISTANCE: f32 = 0.5;
const MAX_DISTANCE: f32 = 50.0;
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Orbit camera around the origin with damped input.
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    target_yaw: f32,
    target_pitch: f32,
    target_distance: f32,
    damping: f32,
}

impl OrbitCamera {
    pub fn new(config: &CameraConfig) -> Self {
        let distance = config.distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance,
            target_yaw: 0.0,
            target_pitch: 0.0,
            target_distance: distance,
            damping: config.damping.clamp(0.0, 1.0),
        }
    }

    /// Feed a mouse drag delta in pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.target_yaw += dx * DRAG_SENSITIVITY;
        self.target_pitch =
            (self.target_pitch + dy * DRAG_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Feed a wheel scroll delta in lines (positive = zoom in).
    pub fn zoom(&mut self, lines: f32) {
        self.target_distance =
            (self.target_distance * (1.0 - lines * ZOOM_SENSITIVITY))
                .clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Ease actual values toward targets. Call once per frame tick.
    pub fn update(&mut self) {
        let t = if self.damping > 0.0 { self.damping } else { 1.0 };
        self.yaw += (self.target_yaw - self.yaw) * t;
        self.pitch += (self.target_pitch - self.pitch) * t;
        self.distance += (self.target_distance - self.distance) * t;
    }

    /// Eye position on the orbit sphere.
    pub fn eye(&self) -> [f32; 3] {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        [
            self.distance * cp * sy,
            self.distance * sp,
            self.distance * cp * cy,
        ]
    }

    /// View matrix looking at the origin.
    pub fn view_matrix(&self) -> Mat4 {
        matrix::look_at(self.eye(), [0.0, 0.0, 0.0], [0.0, 1.0, 0.0])
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        OrbitCamera::new(&CameraConfig::default())
    }

    #[test]
    fn initial_eye_sits_on_positive_z() {
        let cam = camera();
        let [x, y, z] = cam.eye();
        assert!((x - 0.0).abs() < 1e-5);
        assert!((y - 0.0).abs() < 1e-5);
        assert!((z - 5.0).abs() < 1e-5);
    }

    #[test]
    fn update_converges_to_target() {
        let mut cam = camera();
        cam.rotate(200.0, 0.0);
        for _ in 0..500 {
            cam.update();
        }
        assert!((cam.yaw - 200.0 * DRAG_SENSITIVITY).abs() < 1e-3);
    }

    #[test]
    fn damping_eases_rather_than_jumps() {
        let mut cam = camera();
        cam.rotate(100.0, 0.0);
        cam.update();
        let after_one = cam.yaw;
        assert!(after_one > 0.0);
        assert!(after_one < 100.0 * DRAG_SENSITIVITY);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = camera();
        cam.rotate(0.0, 1_000_000.0);
        for _ in 0..200 {
            cam.update();
        }
        assert!(cam.pitch <= PITCH_LIMIT + 1e-4);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = camera();
        cam.zoom(-1_000.0);
        for _ in 0..200 {
            cam.update();
        }
        assert!(cam.distance <= MAX_DISTANCE + 1e-3);

        cam.zoom(1_000.0);
        for _ in 0..200 {
            cam.update();
        }
        assert!(cam.distance >= MIN_DISTANCE - 1e-3);
    }

    #[test]
    fn zero_damping_snaps_immediately() {
        let mut config = CameraConfig::default();
        config.damping = 0.0;
        let mut cam = OrbitCamera::new(&config);
        cam.rotate(100.0, 0.0);
        cam.update();
        assert!((cam.yaw - 100.0 * DRAG_SENSITIVITY).abs() < 1e-6);
    }

    #[test]
    fn view_matrix_places_origin_ahead() {
        let cam = camera();
        let v = cam.view_matrix();
        // col3 z-component is -distance for an eye on +Z looking at origin
        assert!((v[14] - (-5.0)).abs() < 1e-4);
    }
}
