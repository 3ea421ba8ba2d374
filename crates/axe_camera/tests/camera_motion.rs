//! Cameras driven by the animation primitives

use axe_anim::{shared, Easing, EasingMethod, EasingType, Entity, Event, LinearPath, Tween, TweenPath};
use axe_camera::{Camera, Camera3};
use axe_math::{Vec2, Vec3};

const EPSILON: f32 = 0.0001;

#[test]
fn test_eased_pan_then_zoom() {
    let mut camera = Camera::new(Vec2::new(640.0, 480.0));
    let ease = Easing::new(EasingType::InOut, EasingMethod::Quadratic);
    camera.queue_center(
        Tween::new(0.0, 100.0, 1.0).with_easing(ease),
        Tween::new(0.0, 50.0, 1.0).with_easing(ease),
        true,
    );
    camera.queue_scale(Tween::new(1.0, 2.0, 0.5), Tween::new(1.0, 2.0, 0.5), true);

    for _ in 0..11 {
        camera.update(0.1);
    }
    assert!((camera.center.x - 100.0).abs() < EPSILON);
    assert!((camera.center.y - 50.0).abs() < EPSILON);
    assert_eq!(camera.scale, Vec2::new(2.0, 2.0));
    assert!(!camera.is_moving());
}

#[test]
fn test_event_orbits_camera() {
    let camera = shared(Camera3::new(0.0, 0.0, 0.0, 10.0, Vec3::ZERO));
    let end = Camera3::new(std::f32::consts::PI, 0.0, 0.0, 10.0, Vec3::ZERO);
    let start = camera.borrow().clone();
    let mut orbit = Event::new(camera.clone(), TweenPath::new(start, end), 2.0);

    orbit.update(1.0);
    let eye = camera.borrow().position();
    assert!((eye.x + 10.0).abs() < EPSILON, "{:?}", eye);
    assert!(eye.z.abs() < EPSILON);

    orbit.update(1.5);
    assert!(orbit.is_expired());
    let eye = camera.borrow().position();
    assert!((eye.z - 10.0).abs() < EPSILON);
}

#[test]
fn test_linear_path_through_cameras() {
    let points = vec![
        Camera3::new(0.0, 0.0, 0.0, 1.0, Vec3::ZERO),
        Camera3::new(0.0, 0.0, 0.0, 1.0, Vec3::new(0.0, 0.0, 4.0)),
        Camera3::new(0.0, 0.0, 0.0, 1.0, Vec3::new(4.0, 0.0, 4.0)),
    ];
    let path = LinearPath::new(points).unwrap();
    let camera = shared(Camera3::default());
    let mut travel = Event::new(camera.clone(), path, 1.0);

    travel.update(0.75);
    let focus = camera.borrow().focus;
    assert!((focus.x - 2.0).abs() < EPSILON);
    assert!((focus.z - 4.0).abs() < EPSILON);
}
