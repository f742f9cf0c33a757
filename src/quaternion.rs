//! Quaternions for representing rotations.
//!
//! A rotation quaternion is expected to be unit length. Most constructors
//! here normalize their result, but arithmetic such as [`Quaternion::lerp`]
//! or [`Quaternion::scale`] can leave a non-unit value around; call
//! [`Quaternion::normalize`] before using it as a rotation.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;
use crate::scalar::float_equals;
use crate::vector::{Vector3, Vector4};

/// `x`, `y`, `z` hold the vector part, `w` the scalar part.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn add_value(self, value: f32) -> Quaternion {
        Quaternion::new(self.x + value, self.y + value, self.z + value, self.w + value)
    }

    pub fn subtract(self, other: Quaternion) -> Quaternion {
        self - other
    }

    pub fn subtract_value(self, value: f32) -> Quaternion {
        Quaternion::new(self.x - value, self.y - value, self.z - value, self.w - value)
    }

    #[inline]
    pub fn dot(self, other: Quaternion) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit quaternion in the same direction.
    ///
    /// A zero-length quaternion is divided by `1.0`, so the zero quaternion
    /// stays zero. It does not become the identity.
    pub fn normalize(self) -> Quaternion {
        let mut length = self.length();
        if length == 0.0 {
            length = 1.0;
        }
        self.scale(1.0 / length)
    }

    /// Multiplicative inverse: the conjugate divided by the squared length.
    /// The zero quaternion is returned unchanged.
    pub fn invert(self) -> Quaternion {
        let length_sq = self.dot(self);
        if length_sq == 0.0 {
            return self;
        }

        let inv = 1.0 / length_sq;
        Quaternion::new(-self.x * inv, -self.y * inv, -self.z * inv, self.w * inv)
    }

    /// Hamilton product. The result rotates by `other` first, then by `self`.
    pub fn multiply(self, other: Quaternion) -> Quaternion {
        let (qax, qay, qaz, qaw) = (self.x, self.y, self.z, self.w);
        let (qbx, qby, qbz, qbw) = (other.x, other.y, other.z, other.w);

        Quaternion {
            x: qax * qbw + qaw * qbx + qay * qbz - qaz * qby,
            y: qay * qbw + qaw * qby + qaz * qbx - qax * qbz,
            z: qaz * qbw + qaw * qbz + qax * qby - qay * qbx,
            w: qaw * qbw - qax * qbx - qay * qby - qaz * qbz,
        }
    }

    pub fn scale(self, scalar: f32) -> Quaternion {
        Quaternion::new(self.x * scalar, self.y * scalar, self.z * scalar, self.w * scalar)
    }

    /// Component-wise quotient.
    pub fn divide(self, other: Quaternion) -> Quaternion {
        Quaternion::new(
            self.x / other.x,
            self.y / other.y,
            self.z / other.z,
            self.w / other.w,
        )
    }

    /// Component-wise linear interpolation. Not normalized.
    pub fn lerp(self, other: Quaternion, amount: f32) -> Quaternion {
        Quaternion::new(
            self.x + amount * (other.x - self.x),
            self.y + amount * (other.y - self.y),
            self.z + amount * (other.z - self.z),
            self.w + amount * (other.w - self.w),
        )
    }

    /// Normalized linear interpolation.
    pub fn nlerp(self, other: Quaternion, amount: f32) -> Quaternion {
        self.lerp(other, amount).normalize()
    }

    /// Spherical linear interpolation from `self` to `other`.
    ///
    /// The inputs are not sign-aligned, so `slerp(q1, q2, 1)` returns `q2`
    /// even when `dot(q1, q2)` is negative (the long way round).
    ///
    /// - parallel inputs (`|cos| >= 1`) return `self` unchanged;
    /// - a half-angle sine below `0.001` averages the two inputs.
    pub fn slerp(self, other: Quaternion, amount: f32) -> Quaternion {
        let cos_half_theta = self.dot(other);

        if cos_half_theta.abs() >= 1.0 {
            return self;
        }

        let half_theta = cos_half_theta.acos();
        let sin_half_theta = half_theta.sin();

        if sin_half_theta.abs() < 0.001 {
            return Quaternion::new(
                self.x * 0.5 + other.x * 0.5,
                self.y * 0.5 + other.y * 0.5,
                self.z * 0.5 + other.z * 0.5,
                self.w * 0.5 + other.w * 0.5,
            );
        }

        let ratio_a = ((1.0 - amount) * half_theta).sin() / sin_half_theta;
        let ratio_b = (amount * half_theta).sin() / sin_half_theta;

        Quaternion::new(
            self.x * ratio_a + other.x * ratio_b,
            self.y * ratio_a + other.y * ratio_b,
            self.z * ratio_a + other.z * ratio_b,
            self.w * ratio_a + other.w * ratio_b,
        )
    }

    /// Shortest rotation taking direction `from` onto direction `to`.
    pub fn from_vector3_to_vector3(from: Vector3, to: Vector3) -> Quaternion {
        let cos2_theta = from.dot(to);
        let cross = from.cross(to);

        Quaternion::new(cross.x, cross.y, cross.z, 1.0 + cos2_theta).normalize()
    }

    /// Extract the rotation of an orthonormal rotation matrix.
    ///
    /// Uses the trace when it is positive; otherwise pivots on the largest
    /// diagonal element so the divisor stays well away from zero.
    pub fn from_matrix(mat: Matrix) -> Quaternion {
        let trace = mat.m0 + mat.m5 + mat.m10;

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Quaternion {
                x: (mat.m6 - mat.m9) / s,
                y: (mat.m8 - mat.m2) / s,
                z: (mat.m1 - mat.m4) / s,
                w: 0.25 * s,
            }
        } else if mat.m0 > mat.m5 && mat.m0 > mat.m10 {
            let s = (1.0 + mat.m0 - mat.m5 - mat.m10).sqrt() * 2.0;
            Quaternion {
                x: 0.25 * s,
                y: (mat.m1 + mat.m4) / s,
                z: (mat.m8 + mat.m2) / s,
                w: (mat.m6 - mat.m9) / s,
            }
        } else if mat.m5 > mat.m10 {
            let s = (1.0 + mat.m5 - mat.m0 - mat.m10).sqrt() * 2.0;
            Quaternion {
                x: (mat.m1 + mat.m4) / s,
                y: 0.25 * s,
                z: (mat.m6 + mat.m9) / s,
                w: (mat.m8 - mat.m2) / s,
            }
        } else {
            let s = (1.0 + mat.m10 - mat.m0 - mat.m5).sqrt() * 2.0;
            Quaternion {
                x: (mat.m8 + mat.m2) / s,
                y: (mat.m6 + mat.m9) / s,
                z: 0.25 * s,
                w: (mat.m1 - mat.m4) / s,
            }
        }
    }

    /// Rotation matrix for this (unit) quaternion.
    pub fn to_matrix(self) -> Matrix {
        let Quaternion { x, y, z, w } = self;

        let a2 = x * x;
        let b2 = y * y;
        let c2 = z * z;
        let ac = x * z;
        let ab = x * y;
        let bc = y * z;
        let ad = w * x;
        let bd = w * y;
        let cd = w * z;

        Matrix {
            m0: 1.0 - 2.0 * (b2 + c2),
            m1: 2.0 * (ab + cd),
            m2: 2.0 * (ac - bd),

            m4: 2.0 * (ab - cd),
            m5: 1.0 - 2.0 * (a2 + c2),
            m6: 2.0 * (bc + ad),

            m8: 2.0 * (ac + bd),
            m9: 2.0 * (bc - ad),
            m10: 1.0 - 2.0 * (a2 + b2),
            ..Matrix::IDENTITY
        }
    }

    /// Rotation of `angle` radians around `axis`. A zero axis gives the identity.
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Quaternion {
        if axis.length() == 0.0 {
            return Quaternion::IDENTITY;
        }

        let axis = axis.normalize();
        let (sin, cos) = (angle * 0.5).sin_cos();

        Quaternion::new(axis.x * sin, axis.y * sin, axis.z * sin, cos).normalize()
    }

    /// Axis and angle (radians) of this rotation.
    ///
    /// For a near-zero angle the axis is undefined and `(1, 0, 0)` is returned.
    pub fn to_axis_angle(self) -> (Vector3, f32) {
        let q = if self.w.abs() > 1.0 {
            self.normalize()
        } else {
            self
        };

        let angle = 2.0 * q.w.acos();
        let den = (1.0 - q.w * q.w).sqrt();

        let axis = if den > 0.0001 {
            Vector3::new(q.x / den, q.y / den, q.z / den)
        } else {
            Vector3::X
        };

        (axis, angle)
    }

    /// Rotation from Euler angles in radians: `pitch` about X, `yaw` about Y,
    /// `roll` about Z.
    pub fn from_euler(pitch: f32, yaw: f32, roll: f32) -> Quaternion {
        let (x1, x0) = (pitch * 0.5).sin_cos();
        let (y1, y0) = (yaw * 0.5).sin_cos();
        let (z1, z0) = (roll * 0.5).sin_cos();

        Quaternion {
            x: x1 * y0 * z0 - x0 * y1 * z1,
            y: x0 * y1 * z0 + x1 * y0 * z1,
            z: x0 * y0 * z1 - x1 * y1 * z0,
            w: x0 * y0 * z0 + x1 * y1 * z1,
        }
    }

    /// Euler angles in radians about X, Y and Z, the inverse of
    /// [`Quaternion::from_euler`] while the Y angle stays within `±PI/2`.
    pub fn to_euler(self) -> Vector3 {
        let Quaternion { x, y, z, w } = self;

        let x0 = 2.0 * (w * x + y * z);
        let x1 = 1.0 - 2.0 * (x * x + y * y);
        let y0 = (2.0 * (w * y - z * x)).clamp(-1.0, 1.0);
        let z0 = 2.0 * (w * z + x * y);
        let z1 = 1.0 - 2.0 * (y * y + z * z);

        Vector3::new(x0.atan2(x1), y0.asin(), z0.atan2(z1))
    }

    /// Treat the quaternion as a homogeneous 4-vector and multiply by `mat`.
    pub fn transform(self, mat: Matrix) -> Quaternion {
        let Quaternion { x, y, z, w } = self;
        Quaternion {
            x: mat.m0 * x + mat.m4 * y + mat.m8 * z + mat.m12 * w,
            y: mat.m1 * x + mat.m5 * y + mat.m9 * z + mat.m13 * w,
            z: mat.m2 * x + mat.m6 * y + mat.m10 * z + mat.m14 * w,
            w: mat.m3 * x + mat.m7 * y + mat.m11 * z + mat.m15 * w,
        }
    }

    /// Approximate equality that treats `q` and `-q` as the same rotation.
    pub fn equals(self, other: Quaternion) -> bool {
        let same = float_equals(self.x, other.x)
            && float_equals(self.y, other.y)
            && float_equals(self.z, other.z)
            && float_equals(self.w, other.w);
        let opposite = float_equals(self.x, -other.x)
            && float_equals(self.y, -other.y)
            && float_equals(self.z, -other.z)
            && float_equals(self.w, -other.w);
        same || opposite
    }
}

impl Add for Quaternion {
    type Output = Quaternion;
    fn add(self, rhs: Quaternion) -> Quaternion {
        Quaternion::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;
    fn sub(self, rhs: Quaternion) -> Quaternion {
        Quaternion::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;
    fn neg(self) -> Quaternion {
        Quaternion::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;
    fn mul(self, rhs: Quaternion) -> Quaternion {
        self.multiply(rhs)
    }
}

impl From<Vector4> for Quaternion {
    fn from(v: Vector4) -> Self {
        Quaternion::new(v.x, v.y, v.z, v.w)
    }
}
