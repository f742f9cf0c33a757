//! Translation, rotation and scale packed into one value.
//!
//! [`Transform`] is the decomposed form of an affine model matrix. It is
//! easier to edit than a [`Matrix`] and converts to one on demand.
//!
//! ```
//! use vantage::{Quaternion, Transform, Vector3};
//!
//! let transform = Transform::new()
//!     .translation(Vector3::new(0.0, 2.0, -5.0))
//!     .rotation(Quaternion::from_axis_angle(Vector3::Y, 0.5))
//!     .uniform_scale(2.0);
//!
//! let back = transform.matrix().decompose();
//! assert!(back.translation.equals(transform.translation));
//! ```

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;
use crate::quaternion::Quaternion;
use crate::vector::Vector3;

/// Position, rotation and scale of an object.
///
/// Defaults to the identity: origin, no rotation, unit scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Translation.
    pub translation: Vector3,
    /// Rotation as a unit quaternion.
    pub rotation: Quaternion,
    /// Scale factors for each axis.
    pub scale: Vector3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vector3::ZERO,
            rotation: Quaternion::IDENTITY,
            scale: Vector3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transform that only translates.
    pub fn from_translation(translation: Vector3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    pub fn translation(mut self, translation: Vector3) -> Self {
        self.translation = translation;
        self
    }

    pub fn rotation(mut self, rotation: Quaternion) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn scale(mut self, scale: Vector3) -> Self {
        self.scale = scale;
        self
    }

    pub fn uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vector3::new(scale, scale, scale);
        self
    }

    /// The model matrix: scale first, then rotate, then translate.
    pub fn matrix(&self) -> Matrix {
        let s = Matrix::scale(self.scale.x, self.scale.y, self.scale.z);
        let r = self.rotation.normalize().to_matrix();
        let t = Matrix::translate(self.translation.x, self.translation.y, self.translation.z);
        s * r * t
    }
}

impl Matrix {
    /// Split an affine scale-rotate-translate matrix into its parts.
    ///
    /// A negative determinant is attributed to the X scale. Shear and
    /// projection terms are discarded.
    pub fn decompose(&self) -> Transform {
        let translation = self.translation();

        let col0 = Vector3::new(self.m0, self.m1, self.m2);
        let col1 = Vector3::new(self.m4, self.m5, self.m6);
        let col2 = Vector3::new(self.m8, self.m9, self.m10);

        let mut scale = Vector3::new(col0.length(), col1.length(), col2.length());
        if col0.cross(col1).dot(col2) < 0.0 {
            scale.x = -scale.x;
        }

        if scale.x == 0.0 || scale.y == 0.0 || scale.z == 0.0 {
            return Transform {
                translation,
                rotation: Quaternion::IDENTITY,
                scale,
            };
        }

        let c0 = col0 / scale.x;
        let c1 = col1 / scale.y;
        let c2 = col2 / scale.z;
        let rotation_matrix = Matrix {
            m0: c0.x,
            m1: c0.y,
            m2: c0.z,
            m4: c1.x,
            m5: c1.y,
            m6: c1.z,
            m8: c2.x,
            m9: c2.y,
            m10: c2.z,
            ..Matrix::IDENTITY
        };

        Transform {
            translation,
            rotation: Quaternion::from_matrix(rotation_matrix).normalize(),
            scale,
        }
    }
}
