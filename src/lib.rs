//! # Vantage
//!
//! **Vector, matrix, quaternion and camera-control math for real-time 3D.**
//!
//! Plain `Copy` value types for the math a renderer needs, plus a camera and
//! the per-frame controller that turns mouse, keyboard and gamepad input into
//! camera motion.
//!
//! ## Quick Start
//!
//! ```
//! use vantage::*;
//!
//! let mut camera = Camera::new()
//!     .at(Vector3::new(0.0, 2.0, 10.0))
//!     .looking_at(Vector3::ZERO);
//!
//! let controller = CameraController::default();
//! let mut input = Input::new();
//!
//! // Each frame: feed window events into `input`, then
//! controller.update(&mut camera, CameraMode::ThirdPerson, &input, 1.0 / 60.0);
//! input.begin_frame();
//!
//! let view_proj = camera.view_matrix() * camera.projection_matrix(16.0 / 9.0);
//! let uniform: Mat4 = view_proj.into();
//! # let _ = uniform;
//! ```
//!
//! ## Conventions
//!
//! - Right-handed coordinates, Y up, cameras look down their forward vector.
//! - Matrices are column-major; `a * b` applies `a` first, then `b`.
//! - Angles are radians, except [`Camera::fovy`], [`Camera2D::rotation`] and
//!   the rotation argument of [`CameraController::update_pro`], which are degrees.
//! - Operations are total. Degenerate inputs (zero vectors, singular
//!   matrices) have defined results; see [`Matrix::try_invert`] for the
//!   checked variant.

mod camera;
mod camera2d;
mod controller;
mod controls;
mod error;
mod input;
mod interop;
mod matrix;
mod picking;
mod quaternion;
pub mod scalar;
mod transform;
mod vector;

pub use camera::{
    CULL_DISTANCE_FAR, CULL_DISTANCE_NEAR, Camera, MIN_TARGET_DISTANCE, PITCH_LOCK_MARGIN, Projection,
};
pub use camera2d::Camera2D;
pub use controller::{CameraController, CameraMode, update_camera};
pub use controls::CameraControls;
pub use error::{ControlsError, MathError};
pub use input::{CameraInput, GamepadAxis, Input, InputSnapshot};
pub use interop::CameraUniforms;
pub use matrix::{Mat2, Matrix};
pub use picking::{Ray, world_to_screen};
pub use quaternion::Quaternion;
pub use scalar::{DEG2RAD, EPSILON, RAD2DEG};
pub use transform::Transform;
pub use vector::{Vector2, Vector3, Vector4};

// Re-export glam math types for convenience
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

// Re-export commonly used winit types for convenience
pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;
