//! 4x4 and 2x2 matrices.
//!
//! [`Matrix`] stores its sixteen elements as named fields in column-major
//! order: `m0..m3` is the first column and `m12 m13 m14` hold the
//! translation. Reading across a row therefore visits `m0 m4 m8 m12`.
//!
//! # Composition
//!
//! [`Matrix::multiply`] (and the `*` operator) follows the same ordering as
//! the rest of the renderer: `a.multiply(b)` applies `a` first, then `b`.
//! A model-view-projection chain is written `model * view * projection`.
//!
//! ```
//! use vantage::{Matrix, Vector3};
//!
//! let scale = Matrix::scale(2.0, 2.0, 2.0);
//! let shift = Matrix::translate(1.0, 0.0, 0.0);
//!
//! // scale first, then translate
//! let p = Vector3::new(1.0, 0.0, 0.0).transform(scale * shift);
//! assert_eq!(p, Vector3::new(3.0, 0.0, 0.0));
//! ```

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::vector::{Vector2, Vector3};

/// A 4x4 single-precision matrix, column-major.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct Matrix {
    pub m0: f32,
    pub m1: f32,
    pub m2: f32,
    pub m3: f32,
    pub m4: f32,
    pub m5: f32,
    pub m6: f32,
    pub m7: f32,
    pub m8: f32,
    pub m9: f32,
    pub m10: f32,
    pub m11: f32,
    pub m12: f32,
    pub m13: f32,
    pub m14: f32,
    pub m15: f32,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        m0: 1.0,
        m1: 0.0,
        m2: 0.0,
        m3: 0.0,
        m4: 0.0,
        m5: 1.0,
        m6: 0.0,
        m7: 0.0,
        m8: 0.0,
        m9: 0.0,
        m10: 1.0,
        m11: 0.0,
        m12: 0.0,
        m13: 0.0,
        m14: 0.0,
        m15: 1.0,
    };

    pub const ZERO: Matrix = Matrix {
        m0: 0.0,
        m1: 0.0,
        m2: 0.0,
        m3: 0.0,
        m4: 0.0,
        m5: 0.0,
        m6: 0.0,
        m7: 0.0,
        m8: 0.0,
        m9: 0.0,
        m10: 0.0,
        m11: 0.0,
        m12: 0.0,
        m13: 0.0,
        m14: 0.0,
        m15: 0.0,
    };

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Elements in storage order (`m0..m15`).
    pub fn to_float_array(&self) -> [f32; 16] {
        [
            self.m0, self.m1, self.m2, self.m3, self.m4, self.m5, self.m6, self.m7, self.m8,
            self.m9, self.m10, self.m11, self.m12, self.m13, self.m14, self.m15,
        ]
    }

    /// Build from elements in storage order (`m0..m15`).
    pub fn from_float_array(m: [f32; 16]) -> Self {
        Self {
            m0: m[0],
            m1: m[1],
            m2: m[2],
            m3: m[3],
            m4: m[4],
            m5: m[5],
            m6: m[6],
            m7: m[7],
            m8: m[8],
            m9: m[9],
            m10: m[10],
            m11: m[11],
            m12: m[12],
            m13: m[13],
            m14: m[14],
            m15: m[15],
        }
    }

    /// Determinant by full cofactor expansion.
    pub fn determinant(&self) -> f32 {
        let (a00, a01, a02, a03) = (self.m0, self.m1, self.m2, self.m3);
        let (a10, a11, a12, a13) = (self.m4, self.m5, self.m6, self.m7);
        let (a20, a21, a22, a23) = (self.m8, self.m9, self.m10, self.m11);
        let (a30, a31, a32, a33) = (self.m12, self.m13, self.m14, self.m15);

        a30 * a21 * a12 * a03 - a20 * a31 * a12 * a03 - a30 * a11 * a22 * a03
            + a10 * a31 * a22 * a03
            + a20 * a11 * a32 * a03
            - a10 * a21 * a32 * a03
            - a30 * a21 * a02 * a13
            + a20 * a31 * a02 * a13
            + a30 * a01 * a22 * a13
            - a00 * a31 * a22 * a13
            - a20 * a01 * a32 * a13
            + a00 * a21 * a32 * a13
            + a30 * a11 * a02 * a23
            - a10 * a31 * a02 * a23
            - a30 * a01 * a12 * a23
            + a00 * a31 * a12 * a23
            + a10 * a01 * a32 * a23
            - a00 * a11 * a32 * a23
            - a20 * a11 * a02 * a33
            + a10 * a21 * a02 * a33
            + a20 * a01 * a12 * a33
            - a00 * a21 * a12 * a33
            - a10 * a01 * a22 * a33
            + a00 * a11 * a22 * a33
    }

    /// Sum of the main diagonal.
    pub fn trace(&self) -> f32 {
        self.m0 + self.m5 + self.m10 + self.m15
    }

    pub fn transpose(&self) -> Matrix {
        Matrix {
            m0: self.m0,
            m1: self.m4,
            m2: self.m8,
            m3: self.m12,
            m4: self.m1,
            m5: self.m5,
            m6: self.m9,
            m7: self.m13,
            m8: self.m2,
            m9: self.m6,
            m10: self.m10,
            m11: self.m14,
            m12: self.m3,
            m13: self.m7,
            m14: self.m11,
            m15: self.m15,
        }
    }

    /// Adjugate-based inverse.
    ///
    /// A singular matrix divides by a zero determinant and the result is
    /// filled with infinities/NaN. Use [`Matrix::try_invert`] to detect that
    /// case instead.
    pub fn invert(&self) -> Matrix {
        let (inverse, det) = self.adjugate_inverse();
        if det == 0.0 {
            log::warn!("[matrix] inverting a singular matrix, result is not finite");
        }
        inverse
    }

    /// Inverse, or [`MathError::SingularMatrix`] when the determinant is zero.
    pub fn try_invert(&self) -> Result<Matrix, MathError> {
        let (inverse, determinant) = self.adjugate_inverse();
        if determinant == 0.0 {
            return Err(MathError::SingularMatrix { determinant });
        }
        Ok(inverse)
    }

    fn adjugate_inverse(&self) -> (Matrix, f32) {
        let (a00, a01, a02, a03) = (self.m0, self.m1, self.m2, self.m3);
        let (a10, a11, a12, a13) = (self.m4, self.m5, self.m6, self.m7);
        let (a20, a21, a22, a23) = (self.m8, self.m9, self.m10, self.m11);
        let (a30, a31, a32, a33) = (self.m12, self.m13, self.m14, self.m15);

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        let inv_det = 1.0 / det;

        let inverse = Matrix {
            m0: (a11 * b11 - a12 * b10 + a13 * b09) * inv_det,
            m1: (-a01 * b11 + a02 * b10 - a03 * b09) * inv_det,
            m2: (a31 * b05 - a32 * b04 + a33 * b03) * inv_det,
            m3: (-a21 * b05 + a22 * b04 - a23 * b03) * inv_det,
            m4: (-a10 * b11 + a12 * b08 - a13 * b07) * inv_det,
            m5: (a00 * b11 - a02 * b08 + a03 * b07) * inv_det,
            m6: (-a30 * b05 + a32 * b02 - a33 * b01) * inv_det,
            m7: (a20 * b05 - a22 * b02 + a23 * b01) * inv_det,
            m8: (a10 * b10 - a11 * b08 + a13 * b06) * inv_det,
            m9: (-a00 * b10 + a01 * b08 - a03 * b06) * inv_det,
            m10: (a30 * b04 - a31 * b02 + a33 * b00) * inv_det,
            m11: (-a20 * b04 + a21 * b02 - a23 * b00) * inv_det,
            m12: (-a10 * b09 + a11 * b07 - a12 * b06) * inv_det,
            m13: (a00 * b09 - a01 * b07 + a02 * b06) * inv_det,
            m14: (-a30 * b03 + a31 * b01 - a32 * b00) * inv_det,
            m15: (a20 * b03 - a21 * b01 + a22 * b00) * inv_det,
        };

        (inverse, det)
    }

    /// Divide every element by the determinant.
    ///
    /// This is not a normalization in any standard sense; it is kept for
    /// callers that depend on the formula. Nothing in the camera or
    /// projection path uses it. A zero determinant yields non-finite
    /// elements; see [`Matrix::try_normalize`].
    pub fn normalize(&self) -> Matrix {
        let det = self.determinant();
        if det == 0.0 {
            log::warn!("[matrix] normalizing a singular matrix, result is not finite");
        }
        self.map(|v| v / det)
    }

    /// [`Matrix::normalize`], or [`MathError::SingularMatrix`] when the
    /// determinant is zero.
    pub fn try_normalize(&self) -> Result<Matrix, MathError> {
        let determinant = self.determinant();
        if determinant == 0.0 {
            return Err(MathError::SingularMatrix { determinant });
        }
        Ok(self.map(|v| v / determinant))
    }

    fn map(&self, f: impl Fn(f32) -> f32) -> Matrix {
        Matrix::from_float_array(self.to_float_array().map(f))
    }

    fn zip(&self, other: &Matrix, f: impl Fn(f32, f32) -> f32) -> Matrix {
        let a = self.to_float_array();
        let b = other.to_float_array();
        Matrix::from_float_array(std::array::from_fn(|i| f(a[i], b[i])))
    }

    pub fn add(&self, other: &Matrix) -> Matrix {
        self.zip(other, |a, b| a + b)
    }

    pub fn subtract(&self, other: &Matrix) -> Matrix {
        self.zip(other, |a, b| a - b)
    }

    /// Compose two transforms: the result applies `self` first, then `right`.
    ///
    /// Element `(column c, row r)` of the result is
    /// `sum_k self[c][k] * right[k][r]` over the stored layout.
    pub fn multiply(&self, right: Matrix) -> Matrix {
        let l = self.to_float_array();
        let r = right.to_float_array();

        Matrix::from_float_array(std::array::from_fn(|i| {
            let col = i / 4;
            let row = i % 4;
            (0..4).map(|k| l[col * 4 + k] * r[k * 4 + row]).sum()
        }))
    }

    pub fn translate(x: f32, y: f32, z: f32) -> Matrix {
        Matrix {
            m12: x,
            m13: y,
            m14: z,
            ..Matrix::IDENTITY
        }
    }

    /// Rotation of `angle` radians around an arbitrary `axis`.
    ///
    /// The axis is normalized unless its squared length is exactly `0` or `1`.
    pub fn rotate(axis: Vector3, angle: f32) -> Matrix {
        let Vector3 { mut x, mut y, mut z } = axis;

        let length_squared = x * x + y * y + z * z;
        if length_squared != 1.0 && length_squared != 0.0 {
            let ilength = 1.0 / length_squared.sqrt();
            x *= ilength;
            y *= ilength;
            z *= ilength;
        }

        let (sinres, cosres) = angle.sin_cos();
        let t = 1.0 - cosres;

        Matrix {
            m0: x * x * t + cosres,
            m1: y * x * t + z * sinres,
            m2: z * x * t - y * sinres,
            m3: 0.0,

            m4: x * y * t - z * sinres,
            m5: y * y * t + cosres,
            m6: z * y * t + x * sinres,
            m7: 0.0,

            m8: x * z * t + y * sinres,
            m9: y * z * t - x * sinres,
            m10: z * z * t + cosres,
            m11: 0.0,

            m12: 0.0,
            m13: 0.0,
            m14: 0.0,
            m15: 1.0,
        }
    }

    pub fn rotate_x(angle: f32) -> Matrix {
        let (sin, cos) = angle.sin_cos();
        Matrix {
            m5: cos,
            m6: sin,
            m9: -sin,
            m10: cos,
            ..Matrix::IDENTITY
        }
    }

    pub fn rotate_y(angle: f32) -> Matrix {
        let (sin, cos) = angle.sin_cos();
        Matrix {
            m0: cos,
            m2: -sin,
            m8: sin,
            m10: cos,
            ..Matrix::IDENTITY
        }
    }

    pub fn rotate_z(angle: f32) -> Matrix {
        let (sin, cos) = angle.sin_cos();
        Matrix {
            m0: cos,
            m1: sin,
            m4: -sin,
            m5: cos,
            ..Matrix::IDENTITY
        }
    }

    /// Euler rotation, angles in radians, applied X then Y then Z.
    pub fn rotate_xyz(angle: Vector3) -> Matrix {
        let (sinz, cosz) = (-angle.z).sin_cos();
        let (siny, cosy) = (-angle.y).sin_cos();
        let (sinx, cosx) = (-angle.x).sin_cos();

        Matrix {
            m0: cosz * cosy,
            m1: (cosz * siny * sinx) - (sinz * cosx),
            m2: (cosz * siny * cosx) + (sinz * sinx),

            m4: sinz * cosy,
            m5: (sinz * siny * sinx) + (cosz * cosx),
            m6: (sinz * siny * cosx) - (cosz * sinx),

            m8: -siny,
            m9: cosy * sinx,
            m10: cosy * cosx,
            ..Matrix::IDENTITY
        }
    }

    /// Euler rotation, angles in radians, applied Z then Y then X.
    pub fn rotate_zyx(angle: Vector3) -> Matrix {
        let (sz, cz) = angle.z.sin_cos();
        let (sy, cy) = angle.y.sin_cos();
        let (sx, cx) = angle.x.sin_cos();

        Matrix {
            m0: cz * cy,
            m4: cz * sy * sx - cx * sz,
            m8: sz * sx + cz * cx * sy,
            m12: 0.0,

            m1: cy * sz,
            m5: cz * cx + sz * sy * sx,
            m9: cx * sz * sy - cz * sx,
            m13: 0.0,

            m2: -sy,
            m6: cy * sx,
            m10: cy * cx,
            m14: 0.0,

            m3: 0.0,
            m7: 0.0,
            m11: 0.0,
            m15: 1.0,
        }
    }

    pub fn scale(x: f32, y: f32, z: f32) -> Matrix {
        Matrix {
            m0: x,
            m5: y,
            m10: z,
            ..Matrix::IDENTITY
        }
    }

    /// Off-axis perspective projection.
    pub fn frustum(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Matrix {
        let rl = right - left;
        let tb = top - bottom;
        let fn_ = far - near;

        Matrix {
            m0: ((near * 2.0) / rl) as f32,
            m5: ((near * 2.0) / tb) as f32,
            m8: ((right + left) / rl) as f32,
            m9: ((top + bottom) / tb) as f32,
            m10: (-(far + near) / fn_) as f32,
            m11: -1.0,
            m14: (-(far * near * 2.0) / fn_) as f32,
            ..Matrix::ZERO
        }
    }

    /// Symmetric perspective projection. `fovy` is the vertical field of view
    /// in degrees.
    pub fn perspective(fovy: f64, aspect: f64, near: f64, far: f64) -> Matrix {
        let top = near * (fovy * std::f64::consts::PI / 360.0).tan();
        let right = top * aspect;

        Matrix::frustum(-right, right, -top, top, near, far)
    }

    /// Orthographic projection.
    pub fn ortho(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Matrix {
        let rl = (right - left) as f32;
        let tb = (top - bottom) as f32;
        let fn_ = (far - near) as f32;

        Matrix {
            m0: 2.0 / rl,
            m5: 2.0 / tb,
            m10: -2.0 / fn_,
            m12: -((left + right) as f32) / rl,
            m13: -((top + bottom) as f32) / tb,
            m14: -((far + near) as f32) / fn_,
            m15: 1.0,
            ..Matrix::ZERO
        }
    }

    /// Right-handed view matrix looking from `eye` towards `target`.
    pub fn look_at(eye: Vector3, target: Vector3, up: Vector3) -> Matrix {
        let vz = (eye - target).normalize();
        let vx = up.cross(vz).normalize();
        let vy = vz.cross(vx);

        Matrix {
            m0: vx.x,
            m1: vy.x,
            m2: vz.x,
            m3: 0.0,
            m4: vx.y,
            m5: vy.y,
            m6: vz.y,
            m7: 0.0,
            m8: vx.z,
            m9: vy.z,
            m10: vz.z,
            m11: 0.0,
            m12: -vx.dot(eye),
            m13: -vy.dot(eye),
            m14: -vz.dot(eye),
            m15: 1.0,
        }
    }

    /// The translation column.
    #[inline]
    pub fn translation(&self) -> Vector3 {
        Vector3::new(self.m12, self.m13, self.m14)
    }
}

impl Add for Matrix {
    type Output = Matrix;
    fn add(self, rhs: Matrix) -> Matrix {
        Matrix::add(&self, &rhs)
    }
}

impl Sub for Matrix {
    type Output = Matrix;
    fn sub(self, rhs: Matrix) -> Matrix {
        self.subtract(&rhs)
    }
}

impl Mul for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Matrix {
        self.multiply(rhs)
    }
}

/// A 2x2 matrix used for composing 2D rotations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mat2 {
    pub m00: f32,
    pub m01: f32,
    pub m10: f32,
    pub m11: f32,
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat2 {
    pub const fn identity() -> Self {
        Self {
            m00: 1.0,
            m01: 0.0,
            m10: 0.0,
            m11: 1.0,
        }
    }

    /// Counter-clockwise rotation by `radians`.
    pub fn from_radians(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self {
            m00: c,
            m01: -s,
            m10: s,
            m11: c,
        }
    }

    /// Overwrite with a rotation by `radians`.
    pub fn set_radians(&mut self, radians: f32) {
        *self = Self::from_radians(radians);
    }

    pub fn transpose(&self) -> Mat2 {
        Mat2 {
            m00: self.m00,
            m01: self.m10,
            m10: self.m01,
            m11: self.m11,
        }
    }

    pub fn multiply_vector2(&self, v: Vector2) -> Vector2 {
        Vector2::new(
            self.m00 * v.x + self.m01 * v.y,
            self.m10 * v.x + self.m11 * v.y,
        )
    }

    /// Standard matrix product `self * other`: applies `other` first.
    pub fn multiply(&self, other: &Mat2) -> Mat2 {
        Mat2 {
            m00: self.m00 * other.m00 + self.m01 * other.m10,
            m01: self.m00 * other.m01 + self.m01 * other.m11,
            m10: self.m10 * other.m00 + self.m11 * other.m10,
            m11: self.m10 * other.m01 + self.m11 * other.m11,
        }
    }
}
