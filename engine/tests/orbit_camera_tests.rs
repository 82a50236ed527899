//! Orbit Camera Tests - Follow, Free-Look, Zoom and Collision
//!
//! Exercises OrbitCameraController through the public API against a
//! StaticScene, with targets shared the way a host shares its player body.

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Vec2, Vec3};
use third_person_rig::camera::{
    CameraError, CameraTransform, LookMode, OrbitCameraController, TargetPose,
};
use third_person_rig::config::OrbitCameraConfig;
use third_person_rig::input::OrbitInput;
use third_person_rig::physics::{LayerMask, OpenSky, SceneBox, StaticScene};
use third_person_rig::player::{CharacterBody, MovementController, SimpleBody};
use third_person_rig::MovementInput;

const DT: f32 = 1.0 / 60.0;
const EPSILON: f32 = 0.01;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn settle<T: third_person_rig::FollowTarget>(
    orbit: &mut OrbitCameraController<T>,
    scene: &StaticScene,
    camera: &mut CameraTransform,
    frames: usize,
) {
    for _ in 0..frames {
        orbit
            .late_update(DT, &OrbitInput::default(), scene, camera)
            .unwrap();
    }
}

// ============================================================================
// Missing Target
// ============================================================================

#[test]
fn test_no_target_leaves_camera_untouched() {
    let mut orbit: OrbitCameraController<TargetPose> =
        OrbitCameraController::new(OrbitCameraConfig::default());
    let mut camera = CameraTransform::new(Vec3::new(3.0, 4.0, 5.0), glam::Quat::from_rotation_y(0.5));
    let before = camera;

    for _ in 0..5 {
        let input = OrbitInput {
            look_pressed: true,
            look_delta: Vec2::new(5.0, 5.0),
            scroll_delta: 1.0,
            ..Default::default()
        };
        let result = orbit.late_update(DT, &input, &OpenSky, &mut camera);
        assert_eq!(result, Err(CameraError::MissingTarget));
    }
    assert_eq!(camera, before);
    assert!(!orbit.is_free_looking());
    assert!(CameraError::MissingTarget.to_string().contains("no target"));
}

#[test]
fn test_clearing_target_stops_updates() {
    let mut orbit = OrbitCameraController::new(OrbitCameraConfig::default())
        .with_target(TargetPose::default());
    let mut camera = CameraTransform::default();
    assert!(orbit.late_update(DT, &OrbitInput::default(), &OpenSky, &mut camera).is_ok());

    assert!(orbit.clear_target().is_some());
    let before = camera;
    assert!(orbit.late_update(DT, &OrbitInput::default(), &OpenSky, &mut camera).is_err());
    assert_eq!(camera, before);
}

// ============================================================================
// Following
// ============================================================================

#[test]
fn test_camera_settles_behind_target() {
    let scene = StaticScene::with_ground(0.0);
    let mut orbit = OrbitCameraController::new(OrbitCameraConfig::default())
        .with_target(TargetPose::new(Vec3::new(0.0, 1.0, 0.0), 0.0));
    let mut camera = CameraTransform::default();

    settle(&mut orbit, &scene, &mut camera, 300);

    assert!(camera.position.z < -3.0);
    assert!(camera.position.y > 1.0);
    assert!(approx_eq(camera.position.x, 0.0));
    let to_target = (Vec3::new(0.0, 1.0, 0.0) - camera.position).normalize();
    assert!((camera.forward() - to_target).length() < EPSILON);
}

#[test]
fn test_camera_follows_turning_body() {
    let scene = StaticScene::with_ground(0.0);
    let body = Rc::new(RefCell::new(SimpleBody::on_floor(Vec3::ZERO, 0.0)));
    let mut orbit = OrbitCameraController::new(OrbitCameraConfig::default())
        .with_target(Rc::clone(&body));
    let mut camera = CameraTransform::default();
    let mut movement = MovementController::default();

    // Turn the body 90 degrees to face +X, then let the camera catch up
    body.borrow_mut().rotate_yaw(90.0);
    for _ in 0..300 {
        movement.update(DT, &MovementInput::default(), &scene, &mut *body.borrow_mut(), None);
        orbit
            .late_update(DT, &OrbitInput::default(), &scene, &mut camera)
            .unwrap();
    }

    assert!(approx_eq(orbit.target_yaw(), 90.0));
    // Behind a +X facing body means on the -X side
    assert!(camera.position.x < -3.0);
    assert!(camera.position.z.abs() < 0.1);
}

// ============================================================================
// Free-Look
// ============================================================================

#[test]
fn test_vertical_angle_stays_in_range_for_any_input() {
    let config = OrbitCameraConfig {
        min_vertical_angle: -10.0,
        max_vertical_angle: 45.0,
        ..Default::default()
    };
    let mut orbit = OrbitCameraController::new(config).with_target(TargetPose::default());
    let mut camera = CameraTransform::default();

    let deltas = [-300.0, 12.5, 80.0, -0.5, 1000.0, -1000.0, 3.0, -45.0];
    for (i, dy) in deltas.iter().enumerate() {
        let input = OrbitInput {
            look_pressed: i % 3 == 0,
            look_released: i % 3 == 2,
            look_delta: Vec2::new(7.0, *dy),
            ..Default::default()
        };
        orbit.late_update(DT, &input, &OpenSky, &mut camera).unwrap();
        assert!(
            (-10.0..=45.0).contains(&orbit.vertical_angle()),
            "frame {i}: {}",
            orbit.vertical_angle()
        );
    }
}

#[test]
fn test_free_look_orbits_and_returns() {
    let scene = StaticScene::with_ground(0.0);
    let mut orbit = OrbitCameraController::new(OrbitCameraConfig::default())
        .with_target(TargetPose::new(Vec3::Y, 0.0));
    let mut camera = CameraTransform::default();
    settle(&mut orbit, &scene, &mut camera, 120);
    let behind = camera.position;

    // Hold the button and drag 60 degrees to the side
    let press = OrbitInput {
        look_pressed: true,
        look_delta: Vec2::new(20.0, 0.0),
        ..Default::default()
    };
    orbit.late_update(DT, &press, &scene, &mut camera).unwrap();
    assert_eq!(orbit.mode(), LookMode::FreeLooking);
    settle(&mut orbit, &scene, &mut camera, 120);
    assert!(approx_eq(orbit.horizontal_offset(), 60.0));
    assert!(camera.position.x < -1.0);

    let release = OrbitInput {
        look_released: true,
        ..Default::default()
    };
    orbit.late_update(DT, &release, &scene, &mut camera).unwrap();
    assert_eq!(orbit.mode(), LookMode::Following);

    settle(&mut orbit, &scene, &mut camera, 900);
    assert!(orbit.horizontal_offset().abs() < EPSILON);
    assert!((camera.position - behind).length() < 0.05);
}

// ============================================================================
// Zoom
// ============================================================================

#[test]
fn test_zoom_stays_in_range_for_any_scroll() {
    let mut orbit = OrbitCameraController::new(OrbitCameraConfig::default())
        .with_target(TargetPose::default());
    let mut camera = CameraTransform::default();
    let (min, max) = (orbit.config().min_zoom, orbit.config().max_zoom);

    for scroll in [1.0, 1.0, 50.0, -3.0, -0.25, -100.0, 0.0, 0.0, 2.5, -1.0] {
        let input = OrbitInput {
            scroll_delta: scroll,
            ..Default::default()
        };
        for _ in 0..5 {
            orbit.late_update(DT, &input, &OpenSky, &mut camera).unwrap();
            assert!((min..=max).contains(&orbit.target_zoom()));
            assert!((min..=max).contains(&orbit.current_zoom()));
        }
    }
}

#[test]
fn test_scroll_toward_user_zooms_out() {
    let mut orbit = OrbitCameraController::new(OrbitCameraConfig::default())
        .with_target(TargetPose::default());
    let mut camera = CameraTransform::default();
    let start = orbit.target_zoom();

    let input = OrbitInput {
        scroll_delta: -1.0,
        ..Default::default()
    };
    orbit.late_update(DT, &input, &OpenSky, &mut camera).unwrap();
    assert!(approx_eq(orbit.target_zoom(), start + 2.0));
    assert!(orbit.current_zoom() > start);
    assert!(orbit.current_zoom() < orbit.target_zoom());
}

#[test]
fn test_inverted_ranges_from_unvalidated_config() {
    let config = OrbitCameraConfig {
        min_zoom: 8.0,
        max_zoom: 3.0,
        min_vertical_angle: 60.0,
        max_vertical_angle: -10.0,
        ..Default::default()
    };
    assert!(config.validate().is_err());

    let mut orbit = OrbitCameraController::new(config).with_target(TargetPose::default());
    let mut camera = CameraTransform::default();
    for scroll in [0.0, 5.0, -50.0] {
        let input = OrbitInput {
            look_pressed: true,
            look_delta: Vec2::new(10.0, 200.0),
            scroll_delta: scroll,
            ..Default::default()
        };
        orbit.late_update(DT, &input, &OpenSky, &mut camera).unwrap();
        assert!(orbit.current_zoom() >= 3.0 && orbit.current_zoom() <= 8.0);
        assert!(orbit.vertical_angle() >= -10.0 && orbit.vertical_angle() <= 60.0);
    }
    assert!(camera.position.is_finite());
}

// ============================================================================
// Collision
// ============================================================================

fn wall_behind(z_near: f32, z_far: f32) -> SceneBox {
    SceneBox::new(Vec3::new(-10.0, -1.0, z_far), Vec3::new(10.0, 20.0, z_near))
}

#[test]
fn test_wall_pulls_camera_in_front() {
    let scene = StaticScene::with_ground(0.0).with_box(wall_behind(-3.0, -3.5));
    let mut orbit = OrbitCameraController::new(OrbitCameraConfig::default())
        .with_target(TargetPose::new(Vec3::Y, 0.0));
    let mut camera = CameraTransform::default();

    settle(&mut orbit, &scene, &mut camera, 300);

    assert!(orbit.is_obstructed());
    let radius = orbit.config().collision_radius;
    // Sphere touches the wall face once its center reaches z = -3.0 + radius
    let hit_distance = (3.0 - radius) / -orbit.view_direction().z;
    assert!(approx_eq(orbit.resolved_distance(), hit_distance - radius));
    assert!(orbit.resolved_distance() < orbit.current_zoom());
    assert!(approx_eq(camera.position.distance(Vec3::Y), orbit.resolved_distance()));
    assert!(camera.position.z > -3.0);
}

#[test]
fn test_close_wall_never_pulls_inside_min_zoom() {
    let scene = StaticScene::new().with_box(wall_behind(-0.6, -0.8));
    let mut orbit = OrbitCameraController::new(OrbitCameraConfig::default())
        .with_target(TargetPose::new(Vec3::Y, 0.0));
    let mut camera = CameraTransform::default();

    settle(&mut orbit, &scene, &mut camera, 300);

    assert!(orbit.is_obstructed());
    let min_zoom = orbit.config().min_zoom;
    assert!(approx_eq(orbit.resolved_distance(), min_zoom));
    assert!(camera.position.distance(Vec3::Y) >= min_zoom - EPSILON);
}

#[test]
fn test_collision_mask_ignores_other_layers() {
    let scene = StaticScene::new().with_box(wall_behind(-3.0, -3.5).on_layer(5));
    let config = OrbitCameraConfig {
        collision_mask: LayerMask::layer(1),
        ..Default::default()
    };
    let mut orbit = OrbitCameraController::new(config).with_target(TargetPose::new(Vec3::Y, 0.0));
    let mut camera = CameraTransform::default();

    settle(&mut orbit, &scene, &mut camera, 60);
    assert!(!orbit.is_obstructed());
    assert!(approx_eq(orbit.resolved_distance(), orbit.current_zoom()));
}

// ============================================================================
// Retarget and Reset
// ============================================================================

#[test]
fn test_retarget_takes_new_yaw_baseline() {
    let mut orbit = OrbitCameraController::new(OrbitCameraConfig::default())
        .with_target(TargetPose::new(Vec3::ZERO, 0.0));
    orbit.set_target(TargetPose::new(Vec3::new(5.0, 0.0, 5.0), 180.0));
    assert!(approx_eq(orbit.target_yaw(), 180.0));

    // Idempotent
    orbit.set_target(TargetPose::new(Vec3::new(5.0, 0.0, 5.0), 180.0));
    assert!(approx_eq(orbit.target_yaw(), 180.0));
    assert_eq!(orbit.target().map(|t| t.yaw_degrees), Some(180.0));
}

#[test]
fn test_reset_is_deterministic() {
    let mut orbit = OrbitCameraController::new(OrbitCameraConfig::default())
        .with_target(TargetPose::default());
    let mut camera = CameraTransform::default();
    let initial_zoom = OrbitCameraConfig::default().offset.length();

    let scripts = [
        OrbitInput {
            look_pressed: true,
            look_delta: Vec2::new(40.0, -30.0),
            scroll_delta: 2.0,
            ..Default::default()
        },
        OrbitInput {
            look_delta: Vec2::new(-5.0, 60.0),
            scroll_delta: -7.0,
            ..Default::default()
        },
    ];
    for input in &scripts {
        for _ in 0..20 {
            orbit.late_update(DT, input, &OpenSky, &mut camera).unwrap();
        }
        orbit.reset();
        assert_eq!(orbit.horizontal_offset(), 0.0);
        assert_eq!(orbit.vertical_angle(), 20.0);
        assert!(approx_eq(orbit.target_zoom(), initial_zoom));
        assert!(approx_eq(orbit.current_zoom(), initial_zoom));
        assert_eq!(orbit.mode(), LookMode::Following);
    }
}
