//! Input state consumed by the camera controller.
//!
//! [`CameraInput`] is the polling interface the controller reads. [`Input`]
//! fills it from winit window events with per-frame pressed and released
//! sets; [`InputSnapshot`] is a plain value for tests and replays.

use std::collections::HashSet;

use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::vector::Vector2;

/// Gamepad analog axes the camera controller reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GamepadAxis {
    LeftX,
    LeftY,
    RightX,
    RightY,
}

impl GamepadAxis {
    const ALL: [GamepadAxis; 4] = [
        GamepadAxis::LeftX,
        GamepadAxis::LeftY,
        GamepadAxis::RightX,
        GamepadAxis::RightY,
    ];

    fn index(self) -> usize {
        match self {
            GamepadAxis::LeftX => 0,
            GamepadAxis::LeftY => 1,
            GamepadAxis::RightX => 2,
            GamepadAxis::RightY => 3,
        }
    }
}

/// Polled input state consumed by [`CameraController`](crate::CameraController).
///
/// This is the seam between the camera math and whatever platform layer
/// gathers input. [`Input`] implements it from winit window events;
/// [`InputSnapshot`] is a plain value for scripted or replayed input.
pub trait CameraInput {
    /// Mouse movement since the last frame, in pixels. Y grows downwards.
    fn mouse_delta(&self) -> Vector2;

    /// Vertical wheel movement since the last frame, in lines.
    fn mouse_wheel(&self) -> f32;

    fn key_down(&self, key: KeyCode) -> bool;

    /// Whether the key went down this frame. Held keys report `false`
    /// after their first frame.
    fn key_pressed(&self, key: KeyCode) -> bool;

    fn mouse_down(&self, button: MouseButton) -> bool;

    /// Whether a gamepad is connected. When it is, the controller reads the
    /// sticks instead of the mouse and WASD keys.
    fn gamepad_available(&self) -> bool;

    /// Axis value in `[-1, 1]`. Zero when no gamepad is available.
    fn gamepad_axis(&self, axis: GamepadAxis) -> f32;
}

/// Tracks input state for keyboard, mouse and an optional gamepad.
pub struct Input {
    keys_down: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_buttons_pressed: HashSet<MouseButton>,
    mouse_buttons_released: HashSet<MouseButton>,
    mouse_position: Vector2,
    mouse_delta: Vector2,
    scroll_delta: Vector2,
    gamepad_axes: Option<[f32; 4]>,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            keys_down: HashSet::new(),
            keys_pressed: HashSet::new(),
            keys_released: HashSet::new(),
            mouse_buttons_down: HashSet::new(),
            mouse_buttons_pressed: HashSet::new(),
            mouse_buttons_released: HashSet::new(),
            mouse_position: Vector2::ZERO,
            mouse_delta: Vector2::ZERO,
            scroll_delta: Vector2::ZERO,
            gamepad_axes: None,
        }
    }
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at the start of each frame to reset per-frame state.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.mouse_buttons_pressed.clear();
        self.mouse_buttons_released.clear();
        self.mouse_delta = Vector2::ZERO;
        self.scroll_delta = Vector2::ZERO;
    }

    /// Process a window event and update input state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => self.press_key(key),
                        ElementState::Released => self.release_key(key),
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => self.press_mouse(*button),
                ElementState::Released => self.release_mouse(*button),
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.move_cursor(Vector2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let d = match delta {
                    MouseScrollDelta::LineDelta(x, y) => Vector2::new(*x, *y),
                    MouseScrollDelta::PixelDelta(pos) => {
                        Vector2::new(pos.x as f32, pos.y as f32) / 120.0
                    }
                };
                self.scroll_delta += d;
            }
            WindowEvent::Focused(false) => {
                // Keys released while unfocused never reach us
                self.keys_down.clear();
                self.mouse_buttons_down.clear();
            }
            _ => {}
        }
    }

    pub fn press_key(&mut self, key: KeyCode) {
        if self.keys_down.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    pub fn release_key(&mut self, key: KeyCode) {
        if self.keys_down.remove(&key) {
            self.keys_released.insert(key);
        }
    }

    pub fn press_mouse(&mut self, button: MouseButton) {
        if self.mouse_buttons_down.insert(button) {
            self.mouse_buttons_pressed.insert(button);
        }
    }

    pub fn release_mouse(&mut self, button: MouseButton) {
        if self.mouse_buttons_down.remove(&button) {
            self.mouse_buttons_released.insert(button);
        }
    }

    /// Record a new cursor position, accumulating the delta for this frame.
    pub fn move_cursor(&mut self, position: Vector2) {
        self.mouse_delta += position - self.mouse_position;
        self.mouse_position = position;
    }

    /// Set a gamepad axis, marking the gamepad as connected.
    ///
    /// Values are clamped into `[-1, 1]`.
    pub fn set_gamepad_axis(&mut self, axis: GamepadAxis, value: f32) {
        let axes = self.gamepad_axes.get_or_insert([0.0; 4]);
        axes[axis.index()] = value.clamp(-1.0, 1.0);
    }

    /// Mark the gamepad as disconnected.
    pub fn clear_gamepad(&mut self) {
        self.gamepad_axes = None;
    }

    /// Returns true if the key was released this frame.
    pub fn key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Returns true if the mouse button was pressed this frame.
    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons_pressed.contains(&button)
    }

    /// Returns true if the mouse button was released this frame.
    pub fn mouse_released(&self, button: MouseButton) -> bool {
        self.mouse_buttons_released.contains(&button)
    }

    /// Current mouse position in window coordinates.
    pub fn mouse_position(&self) -> Vector2 {
        self.mouse_position
    }

    /// Scroll wheel delta this frame (in "lines").
    pub fn scroll_delta(&self) -> Vector2 {
        self.scroll_delta
    }

    /// Freeze the current state into a plain value.
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            mouse_delta: self.mouse_delta,
            mouse_wheel: self.scroll_delta.y,
            keys_down: self.keys_down.clone(),
            keys_pressed: self.keys_pressed.clone(),
            mouse_buttons_down: self.mouse_buttons_down.clone(),
            gamepad: self.gamepad_axes,
        }
    }
}

impl CameraInput for Input {
    fn mouse_delta(&self) -> Vector2 {
        self.mouse_delta
    }

    fn mouse_wheel(&self) -> f32 {
        self.scroll_delta.y
    }

    fn key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    fn mouse_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    fn gamepad_available(&self) -> bool {
        self.gamepad_axes.is_some()
    }

    fn gamepad_axis(&self, axis: GamepadAxis) -> f32 {
        self.gamepad_axes.map_or(0.0, |axes| axes[axis.index()])
    }
}

/// One frame of input as a plain value.
///
/// # Example
///
/// ```
/// use vantage::{CameraInput, InputSnapshot, KeyCode, Vector2};
///
/// let frame = InputSnapshot::new()
///     .with_mouse_delta(Vector2::new(4.0, 0.0))
///     .with_key(KeyCode::KeyW);
///
/// assert!(frame.key_down(KeyCode::KeyW));
/// assert!(!frame.gamepad_available());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub mouse_delta: Vector2,
    pub mouse_wheel: f32,
    pub keys_down: HashSet<KeyCode>,
    /// Keys that went down this frame; a subset of `keys_down`.
    pub keys_pressed: HashSet<KeyCode>,
    pub mouse_buttons_down: HashSet<MouseButton>,
    /// Axis values in [`GamepadAxis`] order; `None` when disconnected.
    pub gamepad: Option<[f32; 4]>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mouse_delta(mut self, delta: Vector2) -> Self {
        self.mouse_delta = delta;
        self
    }

    pub fn with_mouse_wheel(mut self, wheel: f32) -> Self {
        self.mouse_wheel = wheel;
        self
    }

    /// Hold a key that was already down last frame.
    pub fn with_key(mut self, key: KeyCode) -> Self {
        self.keys_down.insert(key);
        self
    }

    /// Press a key this frame. It also counts as held.
    pub fn with_key_press(mut self, key: KeyCode) -> Self {
        self.keys_down.insert(key);
        self.keys_pressed.insert(key);
        self
    }

    pub fn with_mouse_button(mut self, button: MouseButton) -> Self {
        self.mouse_buttons_down.insert(button);
        self
    }

    /// Connect a gamepad (if needed) and set one axis.
    pub fn with_gamepad_axis(mut self, axis: GamepadAxis, value: f32) -> Self {
        let axes = self.gamepad.get_or_insert([0.0; 4]);
        axes[axis.index()] = value.clamp(-1.0, 1.0);
        self
    }

    /// Iterate over the connected gamepad's axes.
    pub fn gamepad_axes(&self) -> impl Iterator<Item = (GamepadAxis, f32)> + '_ {
        self.gamepad
            .iter()
            .flat_map(|axes| GamepadAxis::ALL.iter().map(move |axis| (*axis, axes[axis.index()])))
    }
}

impl CameraInput for InputSnapshot {
    fn mouse_delta(&self) -> Vector2 {
        self.mouse_delta
    }

    fn mouse_wheel(&self) -> f32 {
        self.mouse_wheel
    }

    fn key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    fn mouse_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    fn gamepad_available(&self) -> bool {
        self.gamepad.is_some()
    }

    fn gamepad_axis(&self, axis: GamepadAxis) -> f32 {
        self.gamepad.map_or(0.0, |axes| axes[axis.index()])
    }
}
