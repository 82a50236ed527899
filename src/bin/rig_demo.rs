//! Third-Person Rig Demo
//!
//! Run with: `cargo run --bin rig_demo [config.json]`
//!
//! Headless host loop at a fixed 60 Hz. A scripted "player" walks, sprints,
//! jumps, crouches, turns, orbits the camera with free-look, zooms out and
//! finally backs up until a wall pushes the camera in. A frame summary is
//! logged twice a second; set `RUST_LOG=debug` to see controller events.
//!
//! Script (seconds):
//! - 0-2: walk forward
//! - 2-3: sprint
//! - 3.0 / 3.3: jump, double jump
//! - 4-5: crouch walk
//! - 5-6: turn around with the mouse
//! - 6-7: free-look drag to the side, release
//! - 7-8: scroll out
//! - 8-10: back up toward the wall behind the camera

use std::cell::RefCell;
use std::error::Error;
use std::path::Path;
use std::rc::Rc;

use glam::{Vec2, Vec3};
use third_person_rig::camera::{CameraTransform, OrbitCameraController};
use third_person_rig::config::RigConfig;
use third_person_rig::debug::GizmoRecorder;
use third_person_rig::input::{ButtonEdge, LookAccumulator, MovementInput, OrbitInput};
use third_person_rig::physics::{SceneBox, StaticScene};
use third_person_rig::player::{MovementController, PitchPivot, SimpleBody};

const FRAME_RATE: f32 = 60.0;
const DURATION_SECONDS: f32 = 10.0;
const SUMMARY_EVERY: usize = 30;
/// Mouse motion events delivered per frame
const MOUSE_EVENTS_PER_FRAME: usize = 2;

/// Button levels and axes the scripted player produces at time `t`.
struct ScriptFrame {
    move_axis: Vec2,
    sprint: bool,
    jump: bool,
    crouch: bool,
    look: bool,
    mouse: Vec2,
    scroll: f32,
}

fn script(t: f32) -> ScriptFrame {
    let mut frame = ScriptFrame {
        move_axis: Vec2::ZERO,
        sprint: false,
        jump: false,
        crouch: false,
        look: false,
        mouse: Vec2::ZERO,
        scroll: 0.0,
    };

    match t {
        t if t < 2.0 => frame.move_axis = Vec2::Y,
        t if t < 3.0 => {
            frame.move_axis = Vec2::Y;
            frame.sprint = true;
        }
        t if t < 4.0 => {
            frame.move_axis = Vec2::Y;
            frame.jump = (3.0..3.05).contains(&t) || (3.3..3.35).contains(&t);
        }
        t if t < 5.0 => {
            frame.move_axis = Vec2::Y;
            frame.crouch = (4.0..4.05).contains(&t) || (4.9..4.95).contains(&t);
        }
        t if t < 6.0 => frame.mouse = Vec2::new(1.5, 0.0),
        t if t < 7.0 => {
            frame.look = t < 6.6;
            frame.mouse = Vec2::new(2.0, -0.5);
        }
        t if t < 8.0 => frame.scroll = -0.1,
        _ => frame.move_axis = Vec2::new(0.0, -1.0),
    }
    frame
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => RigConfig::load(Path::new(&path))?,
        None => RigConfig::default(),
    };

    let scene = StaticScene::with_ground(0.0)
        .with_box(SceneBox::new(Vec3::new(-20.0, 0.0, 36.0), Vec3::new(20.0, 6.0, 37.0)));

    let body = Rc::new(RefCell::new(SimpleBody::on_floor(Vec3::ZERO, 0.0)));
    let mut pivot = PitchPivot::default();
    let mut movement = MovementController::try_new(config.movement)?;
    let mut orbit = OrbitCameraController::try_new(config.camera)?.with_target(Rc::clone(&body));
    let mut camera = CameraTransform::new(Vec3::new(0.0, 2.0, -5.0), glam::Quat::IDENTITY);
    let mut gizmos = GizmoRecorder::new();

    let mut jump = ButtonEdge::new();
    let mut crouch = ButtonEdge::new();
    let mut look = ButtonEdge::new();
    let mut mouse = LookAccumulator::new();

    movement.activate();

    let dt = 1.0 / FRAME_RATE;
    let frames = (DURATION_SECONDS * FRAME_RATE) as usize;
    log::info!("Running {frames} frames at {FRAME_RATE} Hz");

    for frame in 0..frames {
        let t = frame as f32 * dt;
        let scripted = script(t);
        jump.update(scripted.jump);
        crouch.update(scripted.crouch);
        look.update(scripted.look);

        // The window reports motion in several events per frame
        let per_event = scripted.mouse / MOUSE_EVENTS_PER_FRAME as f32;
        for _ in 0..MOUSE_EVENTS_PER_FRAME {
            mouse.accumulate(per_event.x, per_event.y);
        }
        let mouse_delta = mouse.consume();

        // Mouse drives the body only while the camera is not free-looking
        let body_mouse = if look.is_held() { Vec2::ZERO } else { mouse_delta };
        let movement_input = MovementInput {
            move_axis: scripted.move_axis,
            sprint_held: scripted.sprint,
            jump_pressed: jump.just_pressed(),
            crouch_pressed: crouch.just_pressed(),
            look_delta: body_mouse,
        };
        let orbit_input = OrbitInput {
            look_pressed: look.just_pressed(),
            look_released: look.just_released(),
            look_delta: mouse_delta,
            scroll_delta: scripted.scroll,
        };

        movement.update(dt, &movement_input, &scene, &mut *body.borrow_mut(), Some(&mut pivot));
        orbit.late_update(dt, &orbit_input, &scene, &mut camera)?;

        if let Some(state) = movement.cursor_mut().take_pending() {
            log::info!("Cursor: locked={} visible={}", state.locked, state.visible);
        }

        gizmos.clear();
        movement.debug_draw(&mut gizmos);
        orbit.debug_draw(&camera, &mut gizmos);

        if frame % SUMMARY_EVERY == 0 {
            let body = body.borrow();
            log::info!(
                "t={t:5.2}s pos=({:6.2}, {:5.2}, {:6.2}) yaw={:6.1} speed={:4.2} grounded={} stance={:?} jumps={}",
                body.position.x,
                body.position.y,
                body.position.z,
                body.yaw_degrees(),
                movement.horizontal_speed(),
                movement.is_grounded(),
                movement.stance(),
                movement.jumps_remaining(),
            );
            log::info!(
                "          camera=({:6.2}, {:5.2}, {:6.2}) mode={:?} zoom={:4.2} distance={:4.2} obstructed={} gizmos={}",
                camera.position.x,
                camera.position.y,
                camera.position.z,
                orbit.mode(),
                orbit.current_zoom(),
                orbit.resolved_distance(),
                orbit.is_obstructed(),
                gizmos.gizmos.len(),
            );
        }
    }

    log::info!("Done");
    Ok(())
}
