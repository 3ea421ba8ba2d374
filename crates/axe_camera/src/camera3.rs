//! Orbit camera
//!
//! A [`Camera3`] looks at `focus` from `distance` away. Yaw turns about the
//! Y axis, pitch raises the view direction and roll spins the up and right
//! vectors about the view direction. The derived vectors are rebuilt by
//! [`Camera3::validate`] and by every [`Attribute`] operation, so a camera
//! can be driven by paths and events like any other animated value.

use axe_anim::Attribute;
use axe_math::{numbers::PI2, Quaternion, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct Camera3 {
    /// Radians about the Y axis
    pub yaw: f32,
    /// Radians above the XZ plane
    pub pitch: f32,
    /// Radians about the view direction
    pub roll: f32,
    /// Distance from the focus to the eye
    pub distance: f32,
    pub focus: Vec3,

    // Derived by `orient`
    direction: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    position: Vec3,
}

impl Default for Camera3 {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, Vec3::ZERO)
    }
}

impl Camera3 {
    pub fn new(yaw: f32, pitch: f32, roll: f32, distance: f32, focus: Vec3) -> Self {
        let mut camera = Self {
            yaw,
            pitch,
            roll,
            distance,
            focus,
            direction: Vec3::FAR,
            forward: Vec3::FAR,
            right: Vec3::RIGHT,
            up: Vec3::UP,
            position: focus,
        };
        camera.orient();
        camera
    }

    /// Wrap every angle into `[0, 2π)` and rebuild the view vectors
    pub fn validate(&mut self) {
        self.yaw = wrap_angle(self.yaw);
        self.pitch = wrap_angle(self.pitch);
        self.roll = wrap_angle(self.roll);
        self.orient();
    }

    /// Copy the controllable values of `target`
    pub fn set(&mut self, target: &Camera3) {
        self.yaw = target.yaw;
        self.pitch = target.pitch;
        self.roll = target.roll;
        self.distance = target.distance;
        self.focus = target.focus;
        self.orient();
    }

    /// Unit vector from the eye toward the focus
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Direction flattened onto the XZ plane
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Eye position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    fn orient(&mut self) {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();

        self.forward = Vec3::new(sin_yaw, 0.0, cos_yaw);
        self.direction = Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch);

        let right = Vec3::UP.cross(self.forward);
        let up = self.direction.cross(right);
        let roll = Quaternion::from_axis_angle(self.direction, self.roll);
        self.right = roll.rotate(right);
        self.up = roll.rotate(up);

        self.position = self.focus - self.direction * self.distance;
    }
}

impl Attribute for Camera3 {
    fn interpolate(start: &Self, end: &Self, delta: f32) -> Self {
        Self::new(
            f32::interpolate(&start.yaw, &end.yaw, delta),
            f32::interpolate(&start.pitch, &end.pitch, delta),
            f32::interpolate(&start.roll, &end.roll, delta),
            f32::interpolate(&start.distance, &end.distance, delta),
            Vec3::interpolate(&start.focus, &end.focus, delta),
        )
    }

    fn add_scaled(&mut self, value: &Self, delta: f32) {
        self.yaw += value.yaw * delta;
        self.pitch += value.pitch * delta;
        self.roll += value.roll * delta;
        self.distance += value.distance * delta;
        self.focus += value.focus * delta;
        self.orient();
    }

    fn mul_assign_by(&mut self, value: &Self) {
        self.yaw *= value.yaw;
        self.pitch *= value.pitch;
        self.roll *= value.roll;
        self.distance *= value.distance;
        self.focus = self.focus.component_mul(value.focus);
        self.orient();
    }

    fn scale(&mut self, d: f32) {
        self.yaw *= d;
        self.pitch *= d;
        self.roll *= d;
        self.distance *= d;
        self.focus *= d;
        self.orient();
    }

    /// Distance between the eye positions
    fn distance(&self, to: &Self) -> f32 {
        self.position.distance(to.position)
    }

    fn zero() -> Self {
        Self::default()
    }
}

/// `rem_euclid` rounds tiny negative angles up to exactly 2π
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(PI2);
    if wrapped >= PI2 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON && (a.z - b.z).abs() < EPSILON
    }

    #[test]
    fn test_default_looks_down_z() {
        let camera = Camera3::new(0.0, 0.0, 0.0, 10.0, Vec3::ZERO);
        assert!(approx_eq(camera.direction(), Vec3::FAR));
        assert!(approx_eq(camera.right(), Vec3::RIGHT));
        assert!(approx_eq(camera.up(), Vec3::UP));
        assert!(approx_eq(camera.position(), Vec3::new(0.0, 0.0, -10.0)));
    }

    #[test]
    fn test_yaw_turns_about_y() {
        let camera = Camera3::new(FRAC_PI_2, 0.0, 0.0, 1.0, Vec3::ZERO);
        assert!(approx_eq(camera.direction(), Vec3::RIGHT));
        assert!((camera.direction().yaw() - FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn test_pitch_raises_direction() {
        let camera = Camera3::new(0.0, FRAC_PI_2, 0.0, 2.0, Vec3::ZERO);
        assert!(approx_eq(camera.direction(), Vec3::UP));
        assert!(approx_eq(camera.forward(), Vec3::FAR));
        assert!(approx_eq(camera.position(), Vec3::new(0.0, -2.0, 0.0)));
    }

    #[test]
    fn test_roll_spins_right_and_up() {
        let camera = Camera3::new(0.0, 0.0, FRAC_PI_2, 1.0, Vec3::ZERO);
        assert!(approx_eq(camera.right(), Vec3::UP));
        assert!(approx_eq(camera.up(), Vec3::LEFT));
        assert!(approx_eq(camera.direction(), Vec3::FAR));
    }

    #[test]
    fn test_validate_wraps_angles() {
        let mut camera = Camera3::new(-FRAC_PI_2, 5.0 * PI, PI2, 1.0, Vec3::ZERO);
        camera.validate();
        assert!((camera.yaw - 3.0 * FRAC_PI_2).abs() < EPSILON);
        assert!((camera.pitch - PI).abs() < EPSILON);
        assert_eq!(camera.roll, 0.0);
        assert!(camera.yaw >= 0.0 && camera.yaw < PI2);
    }

    #[test]
    fn test_validate_tiny_negative_angle_stays_below_full_turn() {
        let mut camera = Camera3::new(-1e-8, -1e-9, -f32::EPSILON, 1.0, Vec3::ZERO);
        camera.validate();
        for angle in [camera.yaw, camera.pitch, camera.roll] {
            assert!(angle >= 0.0 && angle < PI2);
        }
        assert_eq!(camera.yaw, 0.0);
    }

    #[test]
    fn test_interpolate_rebuilds_position() {
        let a = Camera3::new(0.0, 0.0, 0.0, 2.0, Vec3::ZERO);
        let b = Camera3::new(0.0, 0.0, 0.0, 4.0, Vec3::new(0.0, 0.0, 10.0));
        let mid = Camera3::interpolate(&a, &b, 0.5);
        assert_eq!(mid.distance, 3.0);
        assert!(approx_eq(mid.position(), Vec3::new(0.0, 0.0, 2.0)));
        assert!((a.distance(&b) - 8.0).abs() < EPSILON);
    }

    #[test]
    fn test_add_scaled_and_scale() {
        let mut camera = Camera3::new(0.0, 0.0, 0.0, 1.0, Vec3::ZERO);
        let velocity = Camera3::new(1.0, 0.0, 0.0, 2.0, Vec3::new(1.0, 0.0, 0.0));
        camera.add_scaled(&velocity, 0.5);
        assert_eq!(camera.yaw, 0.5);
        assert_eq!(camera.distance, 2.0);
        assert_eq!(camera.focus, Vec3::new(0.5, 0.0, 0.0));

        camera.scale(2.0);
        assert_eq!(camera.yaw, 1.0);
        assert_eq!(camera.distance, 4.0);
    }

    #[test]
    fn test_set_copies_values() {
        let mut camera = Camera3::default();
        let target = Camera3::new(0.3, 0.2, 0.1, 5.0, Vec3::UP);
        camera.set(&target);
        assert_eq!(camera, target);
    }
}
