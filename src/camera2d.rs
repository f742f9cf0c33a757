//! 2D camera for screen-space views: pan, rotate and zoom around a target.
//!
//! [`Camera2D::matrix`] maps world points to screen pixels;
//! `screen_to_world` applies its inverse.

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;
use crate::scalar::DEG2RAD;
use crate::vector::Vector2;

/// A 2D camera: a world point mapped to a screen offset, with rotation and zoom.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera2D {
    /// Screen position the target is drawn at, in pixels.
    pub offset: Vector2,
    /// World point the camera looks at.
    pub target: Vector2,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Scale factor; `1.0` is unscaled.
    pub zoom: f32,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self {
            offset: Vector2::ZERO,
            target: Vector2::ZERO,
            rotation: 0.0,
            zoom: 1.0,
        }
    }
}

impl Camera2D {
    pub fn new(offset: Vector2, target: Vector2) -> Self {
        Self {
            offset,
            target,
            ..Default::default()
        }
    }

    /// World-to-screen matrix.
    ///
    /// The target is moved to the origin, rotated, scaled, then moved to
    /// the screen offset.
    pub fn matrix(&self) -> Matrix {
        let origin = Matrix::translate(-self.target.x, -self.target.y, 0.0);
        let rotation = Matrix::rotate_z(self.rotation * DEG2RAD);
        let scale = Matrix::scale(self.zoom, self.zoom, 1.0);
        let translation = Matrix::translate(self.offset.x, self.offset.y, 0.0);

        origin * rotation * scale * translation
    }

    pub fn world_to_screen(&self, point: Vector2) -> Vector2 {
        point.transform(self.matrix())
    }

    /// Inverse of [`Camera2D::world_to_screen`]. A zero zoom has no inverse
    /// and yields non-finite coordinates.
    pub fn screen_to_world(&self, point: Vector2) -> Vector2 {
        point.transform(self.matrix().invert())
    }
}
