//! Per-frame camera control: maps polled input onto [`Camera`] operators.
//!
//! The mode is passed on every call instead of being stored on the camera,
//! so callers can switch modes between frames without touching camera state.
//!
//! # Example
//!
//! ```
//! use vantage::{Camera, CameraController, CameraMode, InputSnapshot, KeyCode};
//!
//! let controller = CameraController::default();
//! let mut camera = Camera::new();
//!
//! let frame = InputSnapshot::new().with_key(KeyCode::KeyW);
//! controller.update(&mut camera, CameraMode::FirstPerson, &frame, 1.0 / 60.0);
//!
//! assert!(camera.position.z < 5.0);
//! ```

use serde::{Deserialize, Serialize};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::camera::Camera;
use crate::controls::CameraControls;
use crate::input::{CameraInput, GamepadAxis};
use crate::matrix::Matrix;
use crate::scalar::DEG2RAD;
use crate::vector::Vector3;

/// Built-in camera behaviours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraMode {
    /// Input is ignored; the caller drives the camera.
    #[default]
    Custom,
    /// Fly anywhere. Middle mouse pans, Space and left Control move vertically.
    Free,
    /// Automatic rotation around the target, wheel zooms.
    Orbital,
    /// Walk in the horizontal plane and look around.
    FirstPerson,
    /// Walk in the horizontal plane while orbiting the target.
    ThirdPerson,
}

impl CameraMode {
    pub const ALL: [CameraMode; 5] = [
        CameraMode::Custom,
        CameraMode::Free,
        CameraMode::Orbital,
        CameraMode::FirstPerson,
        CameraMode::ThirdPerson,
    ];

    /// Whether translation ignores the vertical component of the view.
    pub fn move_in_world_plane(self) -> bool {
        matches!(self, CameraMode::FirstPerson | CameraMode::ThirdPerson)
    }

    /// Whether rotation moves the position around a fixed target.
    pub fn rotate_around_target(self) -> bool {
        matches!(self, CameraMode::ThirdPerson | CameraMode::Orbital)
    }

    /// Whether pitch is clamped short of the up axis.
    pub fn lock_view(self) -> bool {
        matches!(
            self,
            CameraMode::FirstPerson | CameraMode::ThirdPerson | CameraMode::Orbital
        )
    }

    /// Whether pitch also tilts the up vector. No built-in mode does.
    pub fn rotate_up(self) -> bool {
        false
    }

    /// Whether the mouse wheel and keypad plus/minus dolly the camera.
    pub fn zooms(self) -> bool {
        matches!(
            self,
            CameraMode::ThirdPerson | CameraMode::Orbital | CameraMode::Free
        )
    }
}

/// Applies one frame of input to a camera according to a [`CameraMode`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraController {
    pub controls: CameraControls,
}

impl CameraController {
    pub fn new(controls: CameraControls) -> Self {
        Self { controls }
    }

    /// Update `camera` from one frame of `input`.
    ///
    /// `dt` is the frame time in seconds; only the orbital rotation uses it,
    /// every other step is per call.
    pub fn update(&self, camera: &mut Camera, mode: CameraMode, input: &impl CameraInput, dt: f32) {
        if mode == CameraMode::Custom {
            return;
        }

        let controls = &self.controls;
        let move_in_world_plane = mode.move_in_world_plane();
        let rotate_around_target = mode.rotate_around_target();
        let lock_view = mode.lock_view();
        let rotate_up = mode.rotate_up();

        if mode == CameraMode::Orbital {
            let rotation = Matrix::rotate(camera.up_vector(), controls.orbital_speed * dt);
            let view = (camera.position - camera.target).transform(rotation);
            camera.position = camera.target + view;
        } else {
            let rotation_speed = controls.rotation_speed;

            if input.key_down(KeyCode::ArrowDown) {
                camera.pitch(-rotation_speed, lock_view, rotate_around_target, rotate_up);
            }
            if input.key_down(KeyCode::ArrowUp) {
                camera.pitch(rotation_speed, lock_view, rotate_around_target, rotate_up);
            }
            if input.key_down(KeyCode::ArrowRight) {
                camera.yaw(-rotation_speed, rotate_around_target);
            }
            if input.key_down(KeyCode::ArrowLeft) {
                camera.yaw(rotation_speed, rotate_around_target);
            }
            if input.key_down(KeyCode::KeyQ) {
                camera.roll(-rotation_speed);
            }
            if input.key_down(KeyCode::KeyE) {
                camera.roll(rotation_speed);
            }

            if !input.gamepad_available() {
                let delta = input.mouse_delta();

                if mode == CameraMode::Free && input.mouse_down(MouseButton::Middle) {
                    let pan = controls.pan_speed;
                    if delta.x > 0.0 {
                        camera.move_right(pan, move_in_world_plane);
                    }
                    if delta.x < 0.0 {
                        camera.move_right(-pan, move_in_world_plane);
                    }
                    // Screen Y grows downwards
                    if delta.y > 0.0 {
                        camera.move_up(-pan);
                    }
                    if delta.y < 0.0 {
                        camera.move_up(pan);
                    }
                } else {
                    let sensitivity = controls.mouse_sensitivity;
                    camera.yaw(-delta.x * sensitivity, rotate_around_target);
                    camera.pitch(-delta.y * sensitivity, lock_view, rotate_around_target, rotate_up);
                }

                let speed = controls.move_speed;
                if input.key_down(KeyCode::KeyW) {
                    camera.move_forward(speed, move_in_world_plane);
                }
                if input.key_down(KeyCode::KeyA) {
                    camera.move_right(-speed, move_in_world_plane);
                }
                if input.key_down(KeyCode::KeyS) {
                    camera.move_forward(-speed, move_in_world_plane);
                }
                if input.key_down(KeyCode::KeyD) {
                    camera.move_right(speed, move_in_world_plane);
                }
            } else {
                let sensitivity = controls.mouse_sensitivity;
                let look_x = input.gamepad_axis(GamepadAxis::RightX);
                let look_y = input.gamepad_axis(GamepadAxis::RightY);
                camera.yaw(-(look_x * 2.0) * sensitivity, rotate_around_target);
                camera.pitch(
                    -(look_y * 2.0) * sensitivity,
                    lock_view,
                    rotate_around_target,
                    rotate_up,
                );

                let speed = controls.move_speed;
                let dead_zone = controls.gamepad_dead_zone;
                let stick_x = input.gamepad_axis(GamepadAxis::LeftX);
                let stick_y = input.gamepad_axis(GamepadAxis::LeftY);
                if stick_y <= -dead_zone {
                    camera.move_forward(speed, move_in_world_plane);
                }
                if stick_x <= -dead_zone {
                    camera.move_right(-speed, move_in_world_plane);
                }
                if stick_y >= dead_zone {
                    camera.move_forward(-speed, move_in_world_plane);
                }
                if stick_x >= dead_zone {
                    camera.move_right(speed, move_in_world_plane);
                }
            }

            if mode == CameraMode::Free {
                if input.key_down(KeyCode::Space) {
                    camera.move_up(controls.move_speed);
                }
                if input.key_down(KeyCode::ControlLeft) {
                    camera.move_up(-controls.move_speed);
                }
            }
        }

        if mode.zooms() {
            camera.move_to_target(-input.mouse_wheel() * controls.scroll_sensitivity);

            if input.key_pressed(KeyCode::NumpadSubtract) {
                camera.move_to_target(controls.keypad_zoom_step);
            }
            if input.key_pressed(KeyCode::NumpadAdd) {
                camera.move_to_target(-controls.keypad_zoom_step);
            }
        }

        log::trace!(
            "{:?} camera update: position {:?}, target {:?}",
            mode,
            camera.position,
            camera.target
        );
    }

    /// Drive the camera with explicit amounts instead of polled input.
    ///
    /// - `movement`: forward (`x`), right (`y`) and up (`z`) distances.
    ///   Forward and right stay in the horizontal plane.
    /// - `rotation`: yaw (`x`), pitch (`y`) and roll (`z`) in degrees.
    ///   Positive yaw turns right, positive pitch looks down.
    /// - `zoom`: change of distance to the target.
    pub fn update_pro(camera: &mut Camera, movement: Vector3, rotation: Vector3, zoom: f32) {
        camera.pitch(-rotation.y * DEG2RAD, true, false, false);
        camera.yaw(-rotation.x * DEG2RAD, false);
        camera.roll(rotation.z * DEG2RAD);

        camera.move_forward(movement.x, true);
        camera.move_right(movement.y, true);
        camera.move_up(movement.z);

        camera.move_to_target(zoom);
    }
}

/// Update `camera` with the default [`CameraControls`].
pub fn update_camera(camera: &mut Camera, mode: CameraMode, input: &impl CameraInput, dt: f32) {
    CameraController::default().update(camera, mode, input, dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Input, InputSnapshot};
    use crate::vector::Vector2;

    fn close3(a: Vector3, b: Vector3) -> bool {
        (a - b).length() < 1e-4
    }

    fn camera() -> Camera {
        Camera::new()
            .at(Vector3::new(0.0, 0.0, 5.0))
            .looking_at(Vector3::ZERO)
    }

    #[test]
    fn mode_policies() {
        use CameraMode::*;
        let world_plane: Vec<_> = CameraMode::ALL.iter().filter(|m| m.move_in_world_plane()).collect();
        let around_target: Vec<_> = CameraMode::ALL.iter().filter(|m| m.rotate_around_target()).collect();
        let locked: Vec<_> = CameraMode::ALL.iter().filter(|m| m.lock_view()).collect();

        assert_eq!(world_plane, [&FirstPerson, &ThirdPerson]);
        assert_eq!(around_target, [&Orbital, &ThirdPerson]);
        assert_eq!(locked, [&Orbital, &FirstPerson, &ThirdPerson]);
        assert!(CameraMode::ALL.iter().all(|m| !m.rotate_up()));
    }

    #[test]
    fn custom_mode_ignores_input() {
        let frame = InputSnapshot::new()
            .with_key(KeyCode::KeyW)
            .with_key(KeyCode::ArrowLeft)
            .with_mouse_delta(Vector2::new(50.0, 20.0))
            .with_mouse_wheel(3.0);

        let mut cam = camera();
        update_camera(&mut cam, CameraMode::Custom, &frame, 1.0);
        assert_eq!(cam, camera());
    }

    #[test]
    fn first_person_walks_in_plane() {
        let mut cam = Camera::new()
            .at(Vector3::new(0.0, 2.0, 5.0))
            .looking_at(Vector3::ZERO);
        let frame = InputSnapshot::new().with_key(KeyCode::KeyW);

        update_camera(&mut cam, CameraMode::FirstPerson, &frame, 1.0 / 60.0);
        assert!((cam.position.y - 2.0).abs() < 1e-6);
        assert!((cam.position.z - (5.0 - 0.09)).abs() < 1e-5, "{:?}", cam.position);
    }

    #[test]
    fn free_mode_flies_along_view() {
        let mut cam = Camera::new()
            .at(Vector3::new(0.0, 2.0, 5.0))
            .looking_at(Vector3::ZERO);
        let frame = InputSnapshot::new().with_key(KeyCode::KeyW);

        update_camera(&mut cam, CameraMode::Free, &frame, 1.0 / 60.0);
        assert!(cam.position.y < 2.0);
    }

    #[test]
    fn mouse_right_turns_view_right() {
        let mut cam = camera();
        let frame = InputSnapshot::new().with_mouse_delta(Vector2::new(100.0, 0.0));

        update_camera(&mut cam, CameraMode::FirstPerson, &frame, 1.0 / 60.0);
        assert_eq!(cam.position, camera().position);
        assert!(cam.forward().x > 0.0);
        assert!((cam.forward().angle(Vector3::new(0.0, 0.0, -1.0)) - 0.3).abs() < 1e-4);
    }

    #[test]
    fn third_person_mouse_orbits_target() {
        let mut cam = camera();
        let frame = InputSnapshot::new().with_mouse_delta(Vector2::new(-40.0, 25.0));

        update_camera(&mut cam, CameraMode::ThirdPerson, &frame, 1.0 / 60.0);
        assert_eq!(cam.target, Vector3::ZERO);
        assert!((cam.target_distance() - 5.0).abs() < 1e-4);
        assert!(!close3(cam.position, camera().position));
    }

    #[test]
    fn locked_pitch_survives_large_mouse_moves() {
        let mut cam = camera();
        let frame = InputSnapshot::new().with_mouse_delta(Vector2::new(0.0, -2000.0));

        for _ in 0..10 {
            update_camera(&mut cam, CameraMode::FirstPerson, &frame, 1.0 / 60.0);
            let angle = cam.up_vector().angle(cam.forward());
            assert!(angle > 0.0 && angle < std::f32::consts::PI);
            assert!(cam.forward().y > 0.99);
        }
    }

    #[test]
    fn free_mode_middle_drag_pans() {
        let mut cam = camera();
        let frame = InputSnapshot::new()
            .with_mouse_button(MouseButton::Middle)
            .with_mouse_delta(Vector2::new(12.0, 3.0));

        update_camera(&mut cam, CameraMode::Free, &frame, 1.0 / 60.0);
        assert!(close3(cam.position, Vector3::new(0.2, -0.2, 5.0)), "{:?}", cam.position);
        assert!(close3(cam.target, Vector3::new(0.2, -0.2, 0.0)));
    }

    #[test]
    fn middle_drag_outside_free_mode_looks() {
        let mut cam = camera();
        let frame = InputSnapshot::new()
            .with_mouse_button(MouseButton::Middle)
            .with_mouse_delta(Vector2::new(12.0, 0.0));

        update_camera(&mut cam, CameraMode::FirstPerson, &frame, 1.0 / 60.0);
        assert_eq!(cam.position, camera().position);
        assert!(cam.forward().x > 0.0);
    }

    #[test]
    fn orbital_rotation_preserves_distance() {
        let mut cam = camera();
        let idle = InputSnapshot::new();

        for _ in 0..30 {
            update_camera(&mut cam, CameraMode::Orbital, &idle, 0.1);
            assert!((cam.target_distance() - 5.0).abs() < 1e-3);
            assert_eq!(cam.target, Vector3::ZERO);
        }

        // 30 frames of 0.1s at 0.5 rad/s is 1.5 radians
        let swept = Vector3::new(0.0, 0.0, 5.0).angle(cam.position);
        assert!((swept - 1.5).abs() < 1e-3, "swept {swept}");
    }

    #[test]
    fn orbital_wheel_zooms_once_per_frame() {
        let mut cam = camera();
        let frame = InputSnapshot::new().with_mouse_wheel(1.0);

        update_camera(&mut cam, CameraMode::Orbital, &frame, 0.0);
        assert!((cam.target_distance() - 4.8).abs() < 1e-4);
    }

    #[test]
    fn keypad_zoom_only_in_zooming_modes() {
        let frame = InputSnapshot::new().with_key_press(KeyCode::NumpadAdd);

        let mut third = camera();
        update_camera(&mut third, CameraMode::ThirdPerson, &frame, 1.0 / 60.0);
        assert!((third.target_distance() - 3.0).abs() < 1e-4);

        let mut first = camera();
        update_camera(&mut first, CameraMode::FirstPerson, &frame, 1.0 / 60.0);
        assert!((first.target_distance() - 5.0).abs() < 1e-4);

        let out = InputSnapshot::new().with_key_press(KeyCode::NumpadSubtract);
        let mut free = camera();
        update_camera(&mut free, CameraMode::Free, &out, 1.0 / 60.0);
        assert!((free.target_distance() - 7.0).abs() < 1e-4);
    }

    #[test]
    fn held_keypad_zoom_steps_once_per_press() {
        let mut cam = Camera::new()
            .at(Vector3::new(0.0, 0.0, 20.0))
            .looking_at(Vector3::ZERO);
        let mut input = Input::new();
        input.press_key(KeyCode::NumpadSubtract);

        for _ in 0..3 {
            update_camera(&mut cam, CameraMode::ThirdPerson, &input, 1.0 / 60.0);
            input.begin_frame();
        }
        assert!((cam.target_distance() - 22.0).abs() < 1e-4);

        let held = InputSnapshot::new().with_key(KeyCode::NumpadSubtract);
        update_camera(&mut cam, CameraMode::ThirdPerson, &held, 1.0 / 60.0);
        assert!((cam.target_distance() - 22.0).abs() < 1e-4);
    }

    #[test]
    fn space_and_control_only_move_free_camera() {
        let up = InputSnapshot::new().with_key(KeyCode::Space);
        let down = InputSnapshot::new().with_key(KeyCode::ControlLeft);

        let mut free = camera();
        update_camera(&mut free, CameraMode::Free, &up, 1.0 / 60.0);
        assert!((free.position.y - 0.09).abs() < 1e-6);
        update_camera(&mut free, CameraMode::Free, &down, 1.0 / 60.0);
        assert!(free.position.y.abs() < 1e-6);

        let mut first = camera();
        update_camera(&mut first, CameraMode::FirstPerson, &up, 1.0 / 60.0);
        assert_eq!(first.position, camera().position);
    }

    #[test]
    fn gamepad_replaces_mouse_and_respects_dead_zone() {
        let mut cam = camera();
        let frame = InputSnapshot::new()
            .with_mouse_delta(Vector2::new(300.0, 0.0))
            .with_key(KeyCode::KeyW)
            .with_gamepad_axis(GamepadAxis::LeftY, -0.1);

        update_camera(&mut cam, CameraMode::FirstPerson, &frame, 1.0 / 60.0);
        assert_eq!(cam, camera());

        let push = InputSnapshot::new().with_gamepad_axis(GamepadAxis::LeftY, -0.8);
        update_camera(&mut cam, CameraMode::FirstPerson, &push, 1.0 / 60.0);
        assert!((cam.position.z - (5.0 - 0.09)).abs() < 1e-5);
    }

    #[test]
    fn gamepad_right_stick_looks() {
        let mut cam = camera();
        let frame = InputSnapshot::new().with_gamepad_axis(GamepadAxis::RightX, 1.0);

        update_camera(&mut cam, CameraMode::FirstPerson, &frame, 1.0 / 60.0);
        assert!(cam.forward().x > 0.0);
        assert!((cam.forward().angle(Vector3::new(0.0, 0.0, -1.0)) - 0.006).abs() < 1e-4);
    }

    #[test]
    fn arrow_keys_rotate_by_rotation_speed() {
        let mut cam = camera();
        let frame = InputSnapshot::new().with_key(KeyCode::ArrowUp);

        update_camera(&mut cam, CameraMode::FirstPerson, &frame, 1.0 / 60.0);
        assert!(cam.forward().y > 0.0);
        assert!((cam.forward().angle(Vector3::new(0.0, 0.0, -1.0)) - 0.03).abs() < 1e-4);
    }

    #[test]
    fn custom_controls_change_step_sizes() {
        let controller = CameraController::new(CameraControls {
            move_speed: 1.0,
            ..Default::default()
        });
        let mut cam = camera();
        let frame = InputSnapshot::new().with_key(KeyCode::KeyD);

        controller.update(&mut cam, CameraMode::FirstPerson, &frame, 1.0 / 60.0);
        assert!(close3(cam.position, Vector3::new(1.0, 0.0, 5.0)));
    }

    #[test]
    fn update_pro_applies_explicit_amounts() {
        let mut cam = camera();
        CameraController::update_pro(&mut cam, Vector3::new(1.0, 0.0, 0.5), Vector3::ZERO, 0.0);
        assert!(close3(cam.position, Vector3::new(0.0, 0.5, 4.0)), "{:?}", cam.position);

        let mut cam = camera();
        CameraController::update_pro(&mut cam, Vector3::ZERO, Vector3::new(90.0, 0.0, 0.0), 0.0);
        assert!(close3(cam.forward(), Vector3::X), "{:?}", cam.forward());

        let mut cam = camera();
        CameraController::update_pro(&mut cam, Vector3::ZERO, Vector3::ZERO, 2.0);
        assert!((cam.target_distance() - 7.0).abs() < 1e-4);
    }
}
