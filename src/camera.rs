//! A 3D camera and the primitive operators that move it.
//!
//! [`Camera`] is a plain value: position, target, up vector, vertical field
//! of view and projection kind. The up vector does not have to be
//! perpendicular to the view direction; every query derives an orthonormal
//! basis on demand.
//!
//! The operators (`move_*`, [`Camera::yaw`], [`Camera::pitch`],
//! [`Camera::roll`]) mutate the camera in place. They are the building
//! blocks [`CameraController`](crate::CameraController) uses to map input to
//! camera motion, and can be called directly for scripted cameras.
//!
//! # Example
//!
//! ```
//! use vantage::{Camera, Vector3};
//!
//! let mut camera = Camera::new()
//!     .at(Vector3::new(0.0, 0.0, 5.0))
//!     .looking_at(Vector3::ZERO);
//!
//! // Orbit a quarter turn around the target
//! camera.yaw(std::f32::consts::FRAC_PI_2, true);
//! assert!((camera.position.x - 5.0).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;
use crate::vector::Vector3;

/// Near clipping plane used by [`Camera::projection_matrix`].
pub const CULL_DISTANCE_NEAR: f64 = 0.01;

/// Far clipping plane used by [`Camera::projection_matrix`].
pub const CULL_DISTANCE_FAR: f64 = 1000.0;

/// Closest a camera may dolly towards its target.
pub const MIN_TARGET_DISTANCE: f32 = 0.001;

/// Margin kept between the view direction and the up axis when the view is locked.
pub const PITCH_LOCK_MARGIN: f32 = 0.001;

/// How the camera projects the scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Projection {
    #[default]
    Perspective,
    Orthographic,
}

/// A camera in 3D space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Eye position.
    pub position: Vector3,
    /// Point the camera looks at.
    pub target: Vector3,
    /// Up direction. Need not be unit length or perpendicular to the view.
    pub up: Vector3,
    /// Vertical field of view in degrees for perspective cameras; view
    /// height in world units for orthographic ones.
    pub fovy: f32,
    pub projection: Projection,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 5.0),
            target: Vector3::ZERO,
            up: Vector3::Y,
            fovy: 45.0,
            projection: Projection::Perspective,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the eye position.
    pub fn at(mut self, position: Vector3) -> Self {
        self.position = position;
        self
    }

    /// Set the target point.
    pub fn looking_at(mut self, target: Vector3) -> Self {
        self.target = target;
        self
    }

    pub fn with_up(mut self, up: Vector3) -> Self {
        self.up = up;
        self
    }

    /// Set the vertical field of view (degrees) or orthographic view height.
    pub fn with_fovy(mut self, fovy: f32) -> Self {
        self.fovy = fovy;
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    // ========================================================================
    // Basis
    // ========================================================================

    /// Unit vector from position towards target.
    pub fn forward(&self) -> Vector3 {
        (self.target - self.position).normalize()
    }

    /// Unit up vector, as stored (not re-orthogonalized).
    pub fn up_vector(&self) -> Vector3 {
        self.up.normalize()
    }

    /// Unit right vector, `forward x up`.
    pub fn right(&self) -> Vector3 {
        self.forward().cross(self.up_vector()).normalize()
    }

    /// Distance between position and target.
    pub fn target_distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    // ========================================================================
    // Matrices
    // ========================================================================

    /// View matrix for the renderer.
    pub fn view_matrix(&self) -> Matrix {
        Matrix::look_at(self.position, self.target, self.up)
    }

    /// Projection matrix using the default clipping planes.
    pub fn projection_matrix(&self, aspect: f32) -> Matrix {
        self.projection_matrix_with_planes(aspect, CULL_DISTANCE_NEAR, CULL_DISTANCE_FAR)
    }

    pub fn projection_matrix_with_planes(&self, aspect: f32, near: f64, far: f64) -> Matrix {
        let aspect = aspect as f64;
        match self.projection {
            Projection::Perspective => Matrix::perspective(self.fovy as f64, aspect, near, far),
            Projection::Orthographic => {
                let top = self.fovy as f64 / 2.0;
                let right = top * aspect;
                Matrix::ortho(-right, right, -top, top, near, far)
            }
        }
    }

    // ========================================================================
    // Movement
    // ========================================================================

    /// Move position and target along the forward vector.
    ///
    /// With `move_in_world_plane` the vertical component is dropped first, so
    /// walking never changes height.
    pub fn move_forward(&mut self, distance: f32, move_in_world_plane: bool) {
        let mut forward = self.forward();

        if move_in_world_plane {
            forward.y = 0.0;
            forward = forward.normalize();
        }

        let step = forward * distance;
        self.position += step;
        self.target += step;
    }

    /// Move position and target along the up vector.
    pub fn move_up(&mut self, distance: f32) {
        let step = self.up_vector() * distance;
        self.position += step;
        self.target += step;
    }

    /// Move position and target along the right vector.
    ///
    /// See [`Camera::move_forward`] for `move_in_world_plane`.
    pub fn move_right(&mut self, distance: f32, move_in_world_plane: bool) {
        let mut right = self.right();

        if move_in_world_plane {
            right.y = 0.0;
            right = right.normalize();
        }

        let step = right * distance;
        self.position += step;
        self.target += step;
    }

    /// Dolly: change the distance to the target by `delta`, keeping the
    /// target fixed.
    ///
    /// The resulting distance never drops to zero or below; it is floored
    /// at [`MIN_TARGET_DISTANCE`].
    pub fn move_to_target(&mut self, delta: f32) {
        let mut distance = self.target_distance() + delta;

        if distance <= 0.0 {
            distance = MIN_TARGET_DISTANCE;
        }

        let forward = self.forward();
        self.position = self.target + forward * -distance;
    }

    // ========================================================================
    // Rotation
    // ========================================================================

    /// Rotate around the up vector by `angle` radians.
    ///
    /// With `rotate_around_target` the position orbits a fixed target;
    /// otherwise the target swings around a fixed position.
    pub fn yaw(&mut self, angle: f32, rotate_around_target: bool) {
        let up = self.up_vector();

        let target_position = (self.target - self.position).rotate_by_axis_angle(up, angle);

        self.apply_view(target_position, rotate_around_target);
    }

    /// Rotate around the right vector by `angle` radians.
    ///
    /// - `lock_view` clamps the angle so the view never passes through the
    ///   up axis or its opposite.
    /// - `rotate_around_target` behaves as in [`Camera::yaw`].
    /// - `rotate_up` tilts the up vector along with the view.
    pub fn pitch(&mut self, angle: f32, lock_view: bool, rotate_around_target: bool, rotate_up: bool) {
        let up = self.up_vector();
        let target_position = self.target - self.position;

        let mut angle = angle;
        if lock_view {
            let max_angle_up = up.angle(target_position) - PITCH_LOCK_MARGIN;
            if angle > max_angle_up {
                angle = max_angle_up;
            }

            let max_angle_down = -up.negate().angle(target_position) + PITCH_LOCK_MARGIN;
            if angle < max_angle_down {
                angle = max_angle_down;
            }
        }

        let right = self.right();
        let target_position = target_position.rotate_by_axis_angle(right, angle);

        self.apply_view(target_position, rotate_around_target);

        if rotate_up {
            self.up = self.up.rotate_by_axis_angle(right, angle);
        }
    }

    /// Rotate the up vector around the forward vector by `angle` radians.
    pub fn roll(&mut self, angle: f32) {
        let forward = self.forward();
        self.up = self.up.rotate_by_axis_angle(forward, angle);
    }

    fn apply_view(&mut self, target_position: Vector3, rotate_around_target: bool) {
        if rotate_around_target {
            self.position = self.target - target_position;
        } else {
            self.target = self.position + target_position;
        }
    }
}
