use std::f32::consts::{FRAC_PI_2, PI};

use vantage::{
    Camera, Camera2D, CameraControls, CameraController, CameraMode, GamepadAxis, InputSnapshot,
    KeyCode, MIN_TARGET_DISTANCE, PITCH_LOCK_MARGIN, Projection, Ray, Vector2, Vector3,
    update_camera, world_to_screen,
};

fn close3(a: Vector3, b: Vector3, tol: f32) -> bool {
    (a - b).length() <= tol
}

fn origin_camera() -> Camera {
    Camera::new()
        .at(Vector3::new(0.0, 0.0, 5.0))
        .looking_at(Vector3::ZERO)
        .with_up(Vector3::Y)
}

#[test]
fn yaw_around_target_scenario() {
    let mut camera = origin_camera();
    camera.yaw(FRAC_PI_2, true);

    assert!(close3(camera.position, Vector3::new(5.0, 0.0, 0.0), 1e-4), "{:?}", camera.position);
    assert_eq!(camera.target, Vector3::ZERO);
}

#[test]
fn dolly_floor_scenario() {
    let mut camera = Camera::new()
        .at(Vector3::new(0.0, 0.0, 0.0005))
        .looking_at(Vector3::ZERO);
    camera.move_to_target(-10.0);

    let distance = camera.target_distance();
    assert!(distance > 0.0);
    assert!((distance - MIN_TARGET_DISTANCE).abs() < 1e-7, "{distance}");
}

#[test]
fn pitch_clamp_holds_for_every_locked_mode() {
    let frame = InputSnapshot::new().with_mouse_delta(Vector2::new(0.0, -5000.0));
    let down = InputSnapshot::new().with_mouse_delta(Vector2::new(0.0, 5000.0));

    for mode in [CameraMode::FirstPerson, CameraMode::ThirdPerson] {
        let mut camera = origin_camera();
        for input in std::iter::repeat_n(&frame, 20).chain(std::iter::repeat_n(&down, 20)) {
            update_camera(&mut camera, mode, input, 1.0 / 60.0);
            let angle = camera.up_vector().angle(camera.forward());
            assert!(angle >= PITCH_LOCK_MARGIN * 0.5, "{mode:?}: {angle}");
            assert!(angle <= PI - PITCH_LOCK_MARGIN * 0.5, "{mode:?}: {angle}");
        }
    }
}

#[test]
fn switching_modes_between_frames_keeps_camera_state() {
    let controller = CameraController::default();
    let mut camera = origin_camera();
    let walk = InputSnapshot::new().with_key(KeyCode::KeyW);

    controller.update(&mut camera, CameraMode::FirstPerson, &walk, 1.0 / 60.0);
    let after_walk = camera;

    controller.update(&mut camera, CameraMode::Custom, &walk, 1.0 / 60.0);
    assert_eq!(camera, after_walk);

    controller.update(&mut camera, CameraMode::Orbital, &InputSnapshot::new(), 1.0);
    assert!((camera.target_distance() - after_walk.target_distance()).abs() < 1e-3);
    assert_eq!(camera.target, after_walk.target);
}

#[test]
fn controls_loaded_from_toml_drive_controller() {
    let controls = CameraControls::from_toml_str("move_speed = 0.5\ngamepad_dead_zone = 0.05").unwrap();
    let controller = CameraController::new(controls);

    let mut camera = origin_camera();
    let nudge = InputSnapshot::new().with_gamepad_axis(GamepadAxis::LeftX, 0.1);
    controller.update(&mut camera, CameraMode::FirstPerson, &nudge, 1.0 / 60.0);

    assert!(close3(camera.position, Vector3::new(0.5, 0.0, 5.0), 1e-5), "{:?}", camera.position);
}

#[test]
fn picking_ray_from_screen_centre_follows_forward() {
    let screen = Vector2::new(1280.0, 720.0);
    for projection in [Projection::Perspective, Projection::Orthographic] {
        let camera = Camera::new()
            .at(Vector3::new(-4.0, 3.0, 7.0))
            .looking_at(Vector3::new(1.0, 0.0, -2.0))
            .with_projection(projection);

        let ray = Ray::from_screen(screen * 0.5, screen, &camera);
        assert!(close3(ray.direction, camera.forward(), 1e-3), "{projection:?}: {:?}", ray.direction);
    }
}

#[test]
fn picking_round_trip_through_screen() {
    let camera = Camera::new()
        .at(Vector3::new(2.0, 6.0, 9.0))
        .looking_at(Vector3::ZERO)
        .with_fovy(60.0);
    let (width, height) = (1024.0, 768.0);

    let world = Vector3::new(-1.0, 0.5, 2.0);
    let screen = world_to_screen(world, &camera, width, height);
    assert!(screen.x >= 0.0 && screen.x <= width);
    assert!(screen.y >= 0.0 && screen.y <= height);

    let ray = Ray::from_screen(screen, Vector2::new(width, height), &camera);
    let t = (world - ray.position).dot(ray.direction);
    assert!(close3(ray.point_at(t), world, 1e-3));
}

#[test]
fn camera_2d_screen_and_world_are_inverse() {
    let camera = Camera2D {
        offset: Vector2::new(512.0, 384.0),
        target: Vector2::new(30.0, -12.0),
        rotation: -45.0,
        zoom: 0.75,
    };

    for point in [Vector2::ZERO, Vector2::new(100.0, 100.0), Vector2::new(-7.0, 3.5)] {
        let screen = camera.world_to_screen(point);
        let back = camera.screen_to_world(screen);
        assert!((back - point).length() < 1e-3, "{point:?} -> {back:?}");
    }

    assert!((camera.world_to_screen(camera.target) - camera.offset).length() < 1e-3);
}
