//! 2D camera with queued motion and spring jitter
//!
//! Center, scale and rotation each have a queue of tweens that play one after
//! another, and a spring whose offset is layered on top of the queued value.
//! The springs give shaking (center), smacking (scale) and wobbling
//! (rotation) effects without disturbing where the camera is headed.

use std::collections::VecDeque;

use axe_anim::{ScalarSpring, Tween};
use axe_math::{Matrix3, Rect, Vec2, Vec3};
use serde::{Serialize, Deserialize};

/// Construction parameters for a [`Camera`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub size: Vec2,
    /// Rotation point as a fraction of the size
    pub anchor: Vec2,
    pub jitter_stiffness: f32,
    pub jitter_damping: f32,
    /// Jitter springs snap to rest once position and velocity are this close
    pub epsilon: f32,
    pub bounds: Option<Rect>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(800.0, 600.0),
            anchor: Vec2::new(0.5, 0.5),
            jitter_stiffness: ScalarSpring::DEFAULT_STIFFNESS,
            jitter_damping: ScalarSpring::DEFAULT_DAMPING,
            epsilon: Camera::EPSILON,
            bounds: None,
        }
    }
}

/// Tween queue and jitter spring for one scalar of the camera
#[derive(Clone, Debug, Default)]
struct Channel {
    queue: VecDeque<Tween>,
    jitter: Option<ScalarSpring>,
}

impl Channel {
    /// Run the front tween and write its value
    fn advance(&mut self, value: &mut f32, dt: f32) {
        if let Some(next) = self.queue.front_mut() {
            next.update(dt);
            *value = next.value();
            if next.is_complete() {
                self.queue.pop_front();
            }
        }
    }

    /// Step the spring and return its contribution
    fn jitter_offset(&mut self, dt: f32, epsilon: f32) -> f32 {
        let Some(spring) = self.jitter.as_mut() else {
            return 0.0;
        };
        spring.update(dt);
        let offset = spring.position;
        if (spring.position - spring.rest).abs() < epsilon && spring.velocity.abs() < epsilon {
            spring.position = spring.rest;
            spring.velocity = 0.0;
        }
        offset
    }

    fn enqueue(&mut self, mut tween: Tween, current: f32, set_start: bool) {
        if set_start {
            tween.start = self.queue.back().map_or(current, |last| last.end);
            tween.reset();
        }
        self.queue.push_back(tween);
    }

    fn kick(&mut self, velocity: f32, stiffness: f32, damping: f32) {
        self.jitter
            .get_or_insert_with(|| ScalarSpring::new(stiffness, damping))
            .velocity = velocity;
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.jitter = None;
    }
}

/// A 2D camera with size, center, scale and rotation
#[derive(Clone, Debug)]
pub struct Camera {
    pub size: Vec2,
    pub anchor: Vec2,
    pub center: Vec2,
    pub scale: Vec2,
    /// Radians
    pub rotation: f32,
    /// When set, the view is scaled and moved to stay inside this rectangle
    pub bounds: Option<Rect>,
    pub enabled: bool,
    pub epsilon: f32,
    pub jitter_stiffness: f32,
    pub jitter_damping: f32,
    pause_time: f32,
    center_x: Channel,
    center_y: Channel,
    scale_x: Channel,
    scale_y: Channel,
    spin: Channel,
    transform: Matrix3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::with_config(&CameraConfig::default())
    }
}

impl Camera {
    pub const EPSILON: f32 = 0.001;

    pub fn new(size: Vec2) -> Self {
        Self::with_config(&CameraConfig { size, ..CameraConfig::default() })
    }

    pub fn with_config(config: &CameraConfig) -> Self {
        log::debug!("Creating camera {}x{}", config.size.x, config.size.y);
        Self {
            size: config.size,
            anchor: config.anchor,
            center: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
            bounds: config.bounds,
            enabled: true,
            epsilon: config.epsilon,
            jitter_stiffness: config.jitter_stiffness,
            jitter_damping: config.jitter_damping,
            pause_time: 0.0,
            center_x: Channel::default(),
            center_y: Channel::default(),
            scale_x: Channel::default(),
            scale_y: Channel::default(),
            spin: Channel::default(),
            transform: Matrix3::IDENTITY,
        }
    }

    pub fn with_center(mut self, center: Vec2) -> Self {
        self.center = center;
        self
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Advance queues and jitter and rebuild the transform
    pub fn update(&mut self, dt: f32) {
        if !self.enabled {
            return;
        }
        if self.pause_time > 0.0 {
            self.pause_time = (self.pause_time - dt).max(0.0);
            return;
        }

        self.center_x.advance(&mut self.center.x, dt);
        self.center_y.advance(&mut self.center.y, dt);
        self.scale_x.advance(&mut self.scale.x, dt);
        self.scale_y.advance(&mut self.scale.y, dt);
        self.spin.advance(&mut self.rotation, dt);

        let epsilon = self.epsilon;
        let mut center = Vec2::new(
            self.center.x + self.center_x.jitter_offset(dt, epsilon),
            self.center.y + self.center_y.jitter_offset(dt, epsilon),
        );
        let mut scale = Vec2::new(
            self.scale.x + self.scale_x.jitter_offset(dt, epsilon),
            self.scale.y + self.scale_y.jitter_offset(dt, epsilon),
        );
        let rotation = self.rotation + self.spin.jitter_offset(dt, epsilon);

        if let Some(bounds) = self.bounds {
            self.fit_bounds(&bounds, rotation, &mut center, &mut scale);
        }

        let pivot = self.size.component_mul(self.anchor);
        self.transform = Matrix3::from_translation(Vec3::new(center.x, center.y, 0.0))
            .scale(scale.x, scale.y, 1.0)
            .rotate_z(rotation)
            .translate(Vec3::new(-pivot.x, -pivot.y, 0.0));
    }

    /// Shrink and shift the view so its axis-aligned extents stay in `bounds`
    fn fit_bounds(&self, bounds: &Rect, rotation: f32, center: &mut Vec2, scale: &mut Vec2) {
        let mut half = self.size * 0.5;
        if rotation != 0.0 {
            let cos = rotation.cos().abs();
            let sin = rotation.sin().abs();
            half = Vec2::new(
                (cos * self.size.x + sin * self.size.y) * 0.5,
                (cos * self.size.y + sin * self.size.x) * 0.5,
            );
        }

        let top = center.y - half.y;
        let bottom = center.y + half.y;
        let left = center.x - half.x;
        let right = center.x + half.x;

        let bounds_width = bounds.width as f32;
        let bounds_height = bounds.height as f32;
        let view_width = right - left;
        let view_height = bottom - top;
        if view_height > bounds_height {
            scale.y *= bounds_height / view_height;
        }
        if view_width > bounds_width {
            scale.x *= bounds_width / view_width;
        }

        if top < bounds.top() as f32 {
            center.y += bounds.top() as f32 - top;
        }
        if bottom > bounds.bottom() as f32 {
            center.y -= bottom - bounds.bottom() as f32;
        }
        if left < bounds.left() as f32 {
            center.x += bounds.left() as f32 - left;
        }
        if right > bounds.right() as f32 {
            center.x -= right - bounds.right() as f32;
        }
    }

    /// Queue a move; with `set_start` each tween begins where the last one ends
    pub fn queue_center(&mut self, x: Tween, y: Tween, set_start: bool) {
        self.queue_center_x(x, set_start);
        self.queue_center_y(y, set_start);
    }

    pub fn queue_center_x(&mut self, x: Tween, set_start: bool) {
        self.center_x.enqueue(x, self.center.x, set_start);
    }

    pub fn queue_center_y(&mut self, y: Tween, set_start: bool) {
        self.center_y.enqueue(y, self.center.y, set_start);
    }

    pub fn queue_scale(&mut self, x: Tween, y: Tween, set_start: bool) {
        self.queue_scale_x(x, set_start);
        self.queue_scale_y(y, set_start);
    }

    pub fn queue_scale_x(&mut self, x: Tween, set_start: bool) {
        self.scale_x.enqueue(x, self.scale.x, set_start);
    }

    pub fn queue_scale_y(&mut self, y: Tween, set_start: bool) {
        self.scale_y.enqueue(y, self.scale.y, set_start);
    }

    pub fn queue_rotation(&mut self, radians: Tween, set_start: bool) {
        self.spin.enqueue(radians, self.rotation, set_start);
    }

    /// Shake the center by giving its springs a velocity
    pub fn jitter_center(&mut self, x: f32, y: f32) {
        let (k, d) = (self.jitter_stiffness, self.jitter_damping);
        self.center_x.kick(x, k, d);
        self.center_y.kick(y, k, d);
    }

    pub fn jitter_scale(&mut self, x: f32, y: f32) {
        let (k, d) = (self.jitter_stiffness, self.jitter_damping);
        self.scale_x.kick(x, k, d);
        self.scale_y.kick(y, k, d);
    }

    pub fn jitter_rotation(&mut self, radians: f32) {
        let (k, d) = (self.jitter_stiffness, self.jitter_damping);
        self.spin.kick(radians, k, d);
    }

    /// Drop every queued tween and jitter spring
    pub fn clear(&mut self) {
        self.center_x.clear();
        self.center_y.clear();
        self.scale_x.clear();
        self.scale_y.clear();
        self.spin.clear();
    }

    /// Clear, then return to unit scale and no rotation
    pub fn reset(&mut self) {
        log::debug!("Resetting camera");
        self.clear();
        self.scale = Vec2::ONE;
        self.rotation = 0.0;
    }

    /// Hold still for `seconds` before resuming updates
    pub fn pause(&mut self, seconds: f32) {
        log::debug!("Pausing camera for {}s", seconds);
        self.pause_time = seconds.max(0.0);
    }

    pub fn pause_time(&self) -> f32 {
        self.pause_time
    }

    pub fn is_paused(&self) -> bool {
        self.pause_time > 0.0
    }

    /// True while any tween is queued
    pub fn is_moving(&self) -> bool {
        [&self.center_x, &self.center_y, &self.scale_x, &self.scale_y, &self.spin]
            .iter()
            .any(|c| !c.queue.is_empty())
    }

    pub fn center_jitter(&self) -> (Option<&ScalarSpring>, Option<&ScalarSpring>) {
        (self.center_x.jitter.as_ref(), self.center_y.jitter.as_ref())
    }

    pub fn scale_jitter(&self) -> (Option<&ScalarSpring>, Option<&ScalarSpring>) {
        (self.scale_x.jitter.as_ref(), self.scale_y.jitter.as_ref())
    }

    pub fn rotation_jitter(&self) -> Option<&ScalarSpring> {
        self.spin.jitter.as_ref()
    }

    /// Transform computed by the last update
    pub fn transform(&self) -> &Matrix3 {
        &self.transform
    }

    /// Map a world point through the camera transform
    pub fn world_to_view(&self, point: Vec2) -> Vec2 {
        let p = self.transform.transform(Vec3::from(point));
        Vec2::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    #[test]
    fn test_default_transform_offsets_by_anchor() {
        let mut camera = Camera::new(Vec2::new(100.0, 80.0));
        camera.update(0.0);
        let t = camera.transform().translation();
        assert_eq!(t, Vec3::new(-50.0, -40.0, 0.0));
    }

    #[test]
    fn test_queue_moves_center() {
        let mut camera = Camera::new(Vec2::new(100.0, 100.0));
        camera.queue_center_x(Tween::new(0.0, 10.0, 1.0), false);
        assert!(camera.is_moving());

        camera.update(0.5);
        assert!((camera.center.x - 5.0).abs() < EPSILON);
        camera.update(0.5);
        assert_eq!(camera.center.x, 10.0);
        assert!(!camera.is_moving());
    }

    #[test]
    fn test_set_start_chains_tweens() {
        let mut camera = Camera::new(Vec2::new(100.0, 100.0));
        camera.queue_center_x(Tween::new(0.0, 10.0, 1.0), true);
        camera.queue_center_x(Tween::new(99.0, 20.0, 1.0), true);

        camera.update(1.0);
        assert_eq!(camera.center.x, 10.0);
        camera.update(0.0);
        assert_eq!(camera.center.x, 10.0);
        camera.update(1.0);
        assert_eq!(camera.center.x, 20.0);
    }

    #[test]
    fn test_set_start_uses_current_value() {
        let mut camera = Camera::new(Vec2::new(100.0, 100.0));
        camera.rotation = 1.0;
        camera.queue_rotation(Tween::new(0.0, 2.0, 1.0), true);
        camera.update(0.5);
        assert!((camera.rotation - 1.5).abs() < EPSILON);
    }

    #[test]
    fn test_pause_holds_updates() {
        let mut camera = Camera::new(Vec2::new(100.0, 100.0));
        camera.queue_scale(Tween::new(1.0, 2.0, 1.0), Tween::new(1.0, 2.0, 1.0), false);
        camera.pause(0.5);

        camera.update(0.3);
        assert!(camera.is_paused());
        assert_eq!(camera.scale, Vec2::ONE);
        camera.update(0.3);
        assert_eq!(camera.pause_time(), 0.0);
        assert_eq!(camera.scale, Vec2::ONE);

        camera.update(1.0);
        assert_eq!(camera.scale, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_disabled_camera_ignores_updates() {
        let mut camera = Camera::new(Vec2::new(100.0, 100.0));
        camera.enabled = false;
        camera.queue_center_y(Tween::new(0.0, 5.0, 1.0), false);
        camera.update(1.0);
        assert_eq!(camera.center.y, 0.0);
        assert_eq!(*camera.transform(), Matrix3::IDENTITY);
    }

    #[test]
    fn test_jitter_offsets_without_moving_center() {
        let mut camera = Camera::new(Vec2::new(100.0, 100.0));
        camera.jitter_center(5.0, 0.0);
        camera.update(0.1);

        assert_eq!(camera.center, Vec2::ZERO);
        let t = camera.transform().translation();
        assert!(t.x > -50.0);
        assert_eq!(t.y, -50.0);
    }

    #[test]
    fn test_jitter_snaps_to_rest() {
        let mut camera = Camera::new(Vec2::new(100.0, 100.0));
        camera.jitter_center(5.0, -5.0);
        for _ in 0..3000 {
            camera.update(0.01);
        }
        let (x, y) = camera.center_jitter();
        let (x, y) = (x.unwrap(), y.unwrap());
        assert_eq!(x.position, 0.0);
        assert_eq!(x.velocity, 0.0);
        assert_eq!(y.position, 0.0);
    }

    #[test]
    fn test_rotation_about_anchor() {
        let mut camera = Camera::new(Vec2::new(100.0, 100.0));
        camera.rotation = FRAC_PI_2;
        camera.update(0.0);
        let p = camera.world_to_view(Vec2::new(100.0, 50.0));
        assert!(approx_eq(p, Vec2::new(0.0, 50.0)), "{:?}", p);
    }

    #[test]
    fn test_bounds_scale_down_wide_view() {
        let mut camera = Camera::new(Vec2::new(200.0, 100.0))
            .with_center(Vec2::new(50.0, 50.0))
            .with_bounds(Rect::new(0, 0, 100, 100));
        camera.update(0.0);

        assert!(approx_eq(camera.world_to_view(Vec2::ZERO), Vec2::ZERO));
        assert!(approx_eq(camera.world_to_view(Vec2::new(200.0, 100.0)), Vec2::new(100.0, 100.0)));
        assert_eq!(camera.scale, Vec2::ONE);
    }

    #[test]
    fn test_bounds_translate_inside() {
        let mut camera = Camera::new(Vec2::new(50.0, 50.0))
            .with_center(Vec2::new(10.0, 10.0))
            .with_bounds(Rect::new(0, 0, 100, 100));
        camera.update(0.0);

        assert!(approx_eq(camera.world_to_view(Vec2::ZERO), Vec2::ZERO));
        assert_eq!(camera.center, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_reset_clears_motion() {
        let mut camera = Camera::new(Vec2::new(100.0, 100.0));
        camera.scale = Vec2::new(3.0, 3.0);
        camera.rotation = 1.0;
        camera.queue_center_x(Tween::new(0.0, 1.0, 1.0), false);
        camera.jitter_rotation(0.5);

        camera.reset();
        assert!(!camera.is_moving());
        assert!(camera.rotation_jitter().is_none());
        assert_eq!(camera.scale, Vec2::ONE);
        assert_eq!(camera.rotation, 0.0);
    }

    #[test]
    fn test_negative_pause_is_ignored() {
        let mut camera = Camera::new(Vec2::new(100.0, 100.0));
        camera.pause(-1.0);
        assert!(!camera.is_paused());
        assert_eq!(camera.pause_time(), 0.0);
    }

    #[test]
    fn test_config_applies() {
        let config = CameraConfig {
            size: Vec2::new(320.0, 240.0),
            jitter_stiffness: -20.0,
            ..CameraConfig::default()
        };
        let mut camera = Camera::with_config(&config);
        camera.jitter_scale(1.0, 1.0);
        let (x, _) = camera.scale_jitter();
        assert_eq!(x.map(|s| s.stiffness), Some(-20.0));
        assert_eq!(camera.size, Vec2::new(320.0, 240.0));
        assert_eq!(camera.epsilon, Camera::EPSILON);
    }
}
