//! Two, three and four component vectors.
//!
//! All three types are plain `#[repr(C)]` values. Every operation takes its
//! inputs by value and returns a new vector; nothing here mutates in place
//! except the `*Assign` operators and [`Vector3::ortho_normalize`].
//!
//! ```
//! use vantage::Vector3;
//!
//! let a = Vector3::new(1.0, 0.0, 0.0);
//! let b = Vector3::new(0.0, 1.0, 0.0);
//! assert_eq!(a.cross(b), Vector3::new(0.0, 0.0, 1.0));
//! assert_eq!((a + b).scale(2.0), Vector3::new(2.0, 2.0, 0.0));
//! ```

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;
use crate::quaternion::Quaternion;
use crate::scalar::{RAD2DEG, float_equals};

/// A 2D vector.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

/// A 3D vector.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A 4D vector.
///
/// Shares its layout with [`Quaternion`]; use `From` to move between the two.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Component-wise operator impls shared by all three vector types.
macro_rules! impl_vector_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl Add for $ty {
            type Output = $ty;
            #[inline]
            fn add(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl Sub for $ty {
            type Output = $ty;
            #[inline]
            fn sub(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl Mul<f32> for $ty {
            type Output = $ty;
            #[inline]
            fn mul(self, rhs: f32) -> $ty {
                $ty { $($field: self.$field * rhs),+ }
            }
        }

        impl Mul<$ty> for f32 {
            type Output = $ty;
            #[inline]
            fn mul(self, rhs: $ty) -> $ty {
                rhs * self
            }
        }

        impl Mul for $ty {
            type Output = $ty;
            #[inline]
            fn mul(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl Div<f32> for $ty {
            type Output = $ty;
            #[inline]
            fn div(self, rhs: f32) -> $ty {
                $ty { $($field: self.$field / rhs),+ }
            }
        }

        impl Div for $ty {
            type Output = $ty;
            #[inline]
            fn div(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field / rhs.$field),+ }
            }
        }

        impl Neg for $ty {
            type Output = $ty;
            #[inline]
            fn neg(self) -> $ty {
                $ty { $($field: -self.$field),+ }
            }
        }

        impl AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: $ty) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: $ty) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl MulAssign<f32> for $ty {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                $(self.$field *= rhs;)+
            }
        }

        impl $ty {
            /// Add `value` to every component.
            #[inline]
            pub fn add_value(self, value: f32) -> $ty {
                $ty { $($field: self.$field + value),+ }
            }

            /// Subtract `value` from every component.
            #[inline]
            pub fn subtract_value(self, value: f32) -> $ty {
                $ty { $($field: self.$field - value),+ }
            }

            /// Multiply every component by `scalar`.
            #[inline]
            pub fn scale(self, scalar: f32) -> $ty {
                self * scalar
            }

            /// Component-wise product.
            #[inline]
            pub fn multiply(self, other: $ty) -> $ty {
                self * other
            }

            /// Component-wise quotient.
            #[inline]
            pub fn divide(self, other: $ty) -> $ty {
                self / other
            }

            /// Component-wise reciprocal.
            #[inline]
            pub fn invert(self) -> $ty {
                $ty { $($field: 1.0 / self.$field),+ }
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(self, other: $ty) -> $ty {
                $ty { $($field: self.$field.min(other.$field)),+ }
            }

            /// Component-wise maximum.
            #[inline]
            pub fn max(self, other: $ty) -> $ty {
                $ty { $($field: self.$field.max(other.$field)),+ }
            }

            /// Clamp each component into the matching components of `min` and `max`.
            #[inline]
            pub fn clamp(self, min: $ty, max: $ty) -> $ty {
                $ty { $($field: self.$field.max(min.$field).min(max.$field)),+ }
            }

            /// Linear interpolation towards `other`.
            #[inline]
            pub fn lerp(self, other: $ty, amount: f32) -> $ty {
                $ty { $($field: self.$field + amount * (other.$field - self.$field)),+ }
            }

            /// Dot product.
            #[inline]
            pub fn dot(self, other: $ty) -> f32 {
                0.0 $(+ self.$field * other.$field)+
            }

            #[inline]
            pub fn length_sqr(self) -> f32 {
                self.dot(self)
            }

            #[inline]
            pub fn length(self) -> f32 {
                self.length_sqr().sqrt()
            }

            #[inline]
            pub fn distance(self, other: $ty) -> f32 {
                (other - self).length()
            }

            #[inline]
            pub fn distance_sqr(self, other: $ty) -> f32 {
                (other - self).length_sqr()
            }

            /// Approximate equality using [`float_equals`] per component.
            #[inline]
            pub fn equals(self, other: $ty) -> bool {
                true $(&& float_equals(self.$field, other.$field))+
            }

            /// Move towards `target` by at most `max_distance`.
            pub fn move_towards(self, target: $ty, max_distance: f32) -> $ty {
                let delta = target - self;
                let value = delta.length_sqr();

                if value == 0.0 || (max_distance >= 0.0 && value <= max_distance * max_distance) {
                    return target;
                }

                let dist = value.sqrt();
                self + delta / dist * max_distance
            }
        }
    };
}

impl_vector_ops!(Vector2 { x, y });
impl_vector_ops!(Vector3 { x, y, z });
impl_vector_ops!(Vector4 { x, y, z, w });

// ============================================================================
// Vector2
// ============================================================================

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    pub const ONE: Vector2 = Vector2 { x: 1.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn one() -> Self {
        Self::ONE
    }

    #[inline]
    pub fn subtract(self, other: Vector2) -> Vector2 {
        self - other
    }

    #[inline]
    pub fn negate(self) -> Vector2 {
        -self
    }

    /// 2D cross product (the z component of the 3D cross product).
    #[inline]
    pub fn cross(self, other: Vector2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Angle of the segment from `self` to `other`, in degrees within `[0, 360)`.
    pub fn angle(self, other: Vector2) -> f32 {
        let mut result = (other.y - self.y).atan2(other.x - self.x) * RAD2DEG;
        if result < 0.0 {
            result += 360.0;
        }
        result
    }

    /// Angle of the line from `start` to `end` relative to the X axis, in radians.
    ///
    /// Screen space convention: Y grows downwards, so the sign is flipped.
    pub fn line_angle(start: Vector2, end: Vector2) -> f32 {
        -(end.y - start.y).atan2(end.x - start.x)
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    pub fn normalize(self) -> Vector2 {
        let length = self.length();
        if length > 0.0 {
            self * (1.0 / length)
        } else {
            self
        }
    }

    /// Transform as a point (w = 1) by `mat`.
    pub fn transform(self, mat: Matrix) -> Vector2 {
        Vector2 {
            x: mat.m0 * self.x + mat.m4 * self.y + mat.m12,
            y: mat.m1 * self.x + mat.m5 * self.y + mat.m13,
        }
    }

    /// Reflect about `normal`, which must be normalized.
    pub fn reflect(self, normal: Vector2) -> Vector2 {
        let dot = self.dot(normal);
        self - normal * (2.0 * dot)
    }

    /// Rotate counter-clockwise by `angle` radians.
    pub fn rotate(self, angle: f32) -> Vector2 {
        let (sin, cos) = angle.sin_cos();
        Vector2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Clamp the length into `[min, max]`, keeping direction.
    pub fn clamp_value(self, min: f32, max: f32) -> Vector2 {
        let length = self.length_sqr();
        if length <= 0.0 {
            return self;
        }

        let length = length.sqrt();
        let scale = if length < min {
            min / length
        } else if length > max {
            max / length
        } else {
            1.0
        };
        self * scale
    }

    /// Refract through a surface with the given `normal` and ratio of
    /// refractive indices `r`. Returns zero on total internal reflection.
    pub fn refract(self, normal: Vector2, r: f32) -> Vector2 {
        let dot = self.dot(normal);
        let d = 1.0 - r * r * (1.0 - dot * dot);

        if d >= 0.0 {
            let d = d.sqrt();
            self * r - normal * (r * dot + d)
        } else {
            Vector2::ZERO
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

// ============================================================================
// Vector3
// ============================================================================

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Vector3 = Vector3 { x: 1.0, y: 1.0, z: 1.0 };
    pub const X: Vector3 = Vector3 { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Vector3 = Vector3 { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn one() -> Self {
        Self::ONE
    }

    #[inline]
    pub fn subtract(self, other: Vector3) -> Vector3 {
        self - other
    }

    #[inline]
    pub fn negate(self) -> Vector3 {
        -self
    }

    #[inline]
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Some vector perpendicular to `self`.
    ///
    /// Crosses with the cardinal axis that is least parallel to the input, so
    /// the result is never degenerate for a non-zero input.
    pub fn perpendicular(self) -> Vector3 {
        let mut min = self.x.abs();
        let mut cardinal_axis = Vector3::X;

        if self.y.abs() < min {
            min = self.y.abs();
            cardinal_axis = Vector3::Y;
        }

        if self.z.abs() < min {
            cardinal_axis = Vector3::Z;
        }

        self.cross(cardinal_axis)
    }

    /// Unsigned angle between two vectors, in radians.
    pub fn angle(self, other: Vector3) -> f32 {
        let cross_len = self.cross(other).length();
        let dot = self.dot(other);
        cross_len.atan2(dot)
    }

    /// Unit vector in the same direction.
    ///
    /// A zero-length vector is divided by `1.0` instead, so it comes back
    /// unchanged rather than as NaN.
    pub fn normalize(self) -> Vector3 {
        let mut length = self.length();
        if length == 0.0 {
            length = 1.0;
        }
        self * (1.0 / length)
    }

    /// Make `v1` unit length and `v2` a unit vector orthogonal to it,
    /// using Gram-Schmidt through the cross product.
    pub fn ortho_normalize(v1: &mut Vector3, v2: &mut Vector3) {
        *v1 = v1.normalize();
        let vn1 = v1.cross(*v2).normalize();
        *v2 = vn1.cross(*v1);
    }

    /// Transform as a point (w = 1) by `mat`.
    pub fn transform(self, mat: Matrix) -> Vector3 {
        let Vector3 { x, y, z } = self;
        Vector3 {
            x: mat.m0 * x + mat.m4 * y + mat.m8 * z + mat.m12,
            y: mat.m1 * x + mat.m5 * y + mat.m9 * z + mat.m13,
            z: mat.m2 * x + mat.m6 * y + mat.m10 * z + mat.m14,
        }
    }

    /// Rotate by a (unit) quaternion.
    pub fn rotate_by_quaternion(self, q: Quaternion) -> Vector3 {
        let Vector3 { x, y, z } = self;
        let (qx, qy, qz, qw) = (q.x, q.y, q.z, q.w);

        Vector3 {
            x: x * (qx * qx + qw * qw - qy * qy - qz * qz)
                + y * (2.0 * qx * qy - 2.0 * qw * qz)
                + z * (2.0 * qx * qz + 2.0 * qw * qy),
            y: x * (2.0 * qw * qz + 2.0 * qx * qy)
                + y * (qw * qw - qx * qx + qy * qy - qz * qz)
                + z * (-2.0 * qw * qx + 2.0 * qy * qz),
            z: x * (-2.0 * qw * qy + 2.0 * qx * qz)
                + y * (2.0 * qw * qx + 2.0 * qy * qz)
                + z * (qw * qw - qx * qx - qy * qy + qz * qz),
        }
    }

    /// Rotate around `axis` by `angle` radians (Euler-Rodrigues formula).
    ///
    /// Positive angles rotate counter-clockwise when looking down the axis
    /// towards the origin.
    pub fn rotate_by_axis_angle(self, axis: Vector3, angle: f32) -> Vector3 {
        let axis = axis.normalize();

        let (sin, cos) = (angle / 2.0).sin_cos();
        let w = axis * sin;

        let wv = w.cross(self);
        let wwv = w.cross(wv);

        self + wv * (2.0 * cos) + wwv * 2.0
    }

    /// Reflect about `normal`, which must be normalized.
    pub fn reflect(self, normal: Vector3) -> Vector3 {
        let dot = self.dot(normal);
        self - normal * (2.0 * dot)
    }

    /// Barycentric weights `(u, v, w)` of `p` with respect to the triangle
    /// `(a, b, c)`.
    ///
    /// A degenerate triangle divides by zero; the result is then non-finite.
    pub fn barycenter(p: Vector3, a: Vector3, b: Vector3, c: Vector3) -> Vector3 {
        let v0 = b - a;
        let v1 = c - a;
        let v2 = p - a;
        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);

        let denom = d00 * d11 - d01 * d01;

        let y = (d11 * d20 - d01 * d21) / denom;
        let z = (d00 * d21 - d01 * d20) / denom;
        Vector3 { x: 1.0 - (z + y), y, z }
    }

    /// Project a normalized-device-coordinate point back into world space.
    pub fn unproject(source: Vector3, projection: Matrix, view: Matrix) -> Vector3 {
        let view_proj_inv = view.multiply(projection).invert();

        let point = Quaternion::new(source.x, source.y, source.z, 1.0);
        let transformed = point.transform(view_proj_inv);

        Vector3 {
            x: transformed.x / transformed.w,
            y: transformed.y / transformed.w,
            z: transformed.z / transformed.w,
        }
    }

    /// Clamp the length into `[min, max]`, keeping direction.
    pub fn clamp_value(self, min: f32, max: f32) -> Vector3 {
        let length = self.length_sqr();
        if length <= 0.0 {
            return self;
        }

        let length = length.sqrt();
        let scale = if length < min {
            min / length
        } else if length > max {
            max / length
        } else {
            1.0
        };
        self * scale
    }

    /// Refract through a surface with the given `normal` and ratio of
    /// refractive indices `r`. Returns zero on total internal reflection.
    pub fn refract(self, normal: Vector3, r: f32) -> Vector3 {
        let dot = self.dot(normal);
        let d = 1.0 - r * r * (1.0 - dot * dot);

        if d >= 0.0 {
            let d = d.sqrt();
            self * r - normal * (r * dot + d)
        } else {
            Vector3::ZERO
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

// ============================================================================
// Vector4
// ============================================================================

impl Vector4 {
    pub const ZERO: Vector4 = Vector4 { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const ONE: Vector4 = Vector4 { x: 1.0, y: 1.0, z: 1.0, w: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn one() -> Self {
        Self::ONE
    }

    #[inline]
    pub fn subtract(self, other: Vector4) -> Vector4 {
        self - other
    }

    #[inline]
    pub fn negate(self) -> Vector4 {
        -self
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    pub fn normalize(self) -> Vector4 {
        let length = self.length();
        if length > 0.0 {
            self * (1.0 / length)
        } else {
            self
        }
    }

    #[inline]
    pub fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl From<Quaternion> for Vector4 {
    fn from(q: Quaternion) -> Self {
        Vector4::new(q.x, q.y, q.z, q.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn close3(a: Vector3, b: Vector3) -> bool {
        close(a.x, b.x) && close(a.y, b.y) && close(a.z, b.z)
    }

    #[test]
    fn normalize_is_idempotent_and_unit_length() {
        let inputs = [
            Vector3::new(3.0, 4.0, 0.0),
            Vector3::new(-1.0, 2.0, -7.5),
            Vector3::new(0.001, 0.0, 0.0),
            Vector3::new(1e4, -2e3, 5e2),
        ];

        for v in inputs {
            let n = v.normalize();
            assert!(close(n.length(), 1.0), "{v:?} -> {n:?}");
            assert!(close3(n.normalize(), n));
        }
    }

    #[test]
    fn zero_vector_normalizes_to_zero() {
        let n = Vector3::ZERO.normalize();
        assert_eq!(n, Vector3::ZERO);
        assert!(!n.x.is_nan());

        assert_eq!(Vector2::ZERO.normalize(), Vector2::ZERO);
        assert_eq!(Vector4::ZERO.normalize(), Vector4::ZERO);
    }

    #[test]
    fn vector2_angle_is_in_degrees_and_positive() {
        let origin = Vector2::ZERO;
        assert!(close(origin.angle(Vector2::new(1.0, 0.0)), 0.0));
        assert!(close(origin.angle(Vector2::new(0.0, 1.0)), 90.0));
        assert!(close(origin.angle(Vector2::new(-1.0, 0.0)), 180.0));
        assert!(close(origin.angle(Vector2::new(0.0, -1.0)), 270.0));
    }

    #[test]
    fn vector2_cross_and_rotate() {
        let x = Vector2::new(1.0, 0.0);
        let y = Vector2::new(0.0, 1.0);
        assert_eq!(x.cross(y), 1.0);
        assert_eq!(y.cross(x), -1.0);

        let r = x.rotate(FRAC_PI_2);
        assert!(close(r.x, 0.0) && close(r.y, 1.0));
    }

    #[test]
    fn perpendicular_uses_least_parallel_axis() {
        let inputs = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(1.0, 1.0, 0.2),
            Vector3::new(-3.0, 0.1, 2.0),
        ];

        for v in inputs {
            let p = v.perpendicular();
            assert!(p.length() > 0.0, "{v:?} produced degenerate perpendicular");
            assert!(close(p.dot(v), 0.0));
        }

        // x is the smallest component, so the cross is taken with X
        let v = Vector3::new(0.1, 2.0, 3.0);
        assert_eq!(v.perpendicular(), v.cross(Vector3::X));
    }

    #[test]
    fn barycenter_of_vertices_and_centroid() {
        let a = Vector3::new(0.0, 0.0, 0.0);
        let b = Vector3::new(1.0, 0.0, 0.0);
        let c = Vector3::new(0.0, 1.0, 0.0);

        assert!(close3(Vector3::barycenter(a, a, b, c), Vector3::new(1.0, 0.0, 0.0)));
        assert!(close3(Vector3::barycenter(b, a, b, c), Vector3::new(0.0, 1.0, 0.0)));
        assert!(close3(Vector3::barycenter(c, a, b, c), Vector3::new(0.0, 0.0, 1.0)));

        let centroid = (a + b + c) / 3.0;
        let w = Vector3::barycenter(centroid, a, b, c);
        assert!(close3(w, Vector3::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0)));
    }

    #[test]
    fn rotate_by_axis_angle_follows_right_hand_rule() {
        let v = Vector3::new(1.0, 0.0, 0.0);
        let r = v.rotate_by_axis_angle(Vector3::Y, FRAC_PI_2);
        assert!(close3(r, Vector3::new(0.0, 0.0, -1.0)));

        let r = v.rotate_by_axis_angle(Vector3::new(0.0, 0.0, 2.0), PI);
        assert!(close3(r, Vector3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn angle_between_vectors() {
        assert!(close(Vector3::X.angle(Vector3::Y), FRAC_PI_2));
        assert!(close(Vector3::X.angle(-Vector3::X), PI));
        assert!(close(Vector3::X.angle(Vector3::new(2.0, 0.0, 0.0)), 0.0));
    }

    #[test]
    fn ortho_normalize_produces_orthonormal_pair() {
        let mut a = Vector3::new(2.0, 0.0, 0.0);
        let mut b = Vector3::new(1.0, 1.0, 0.0);
        Vector3::ortho_normalize(&mut a, &mut b);

        assert!(close3(a, Vector3::X));
        assert!(close(b.length(), 1.0));
        assert!(close(a.dot(b), 0.0));
    }

    #[test]
    fn reflect_and_refract() {
        let v = Vector3::new(1.0, -1.0, 0.0);
        assert_eq!(v.reflect(Vector3::Y), Vector3::new(1.0, 1.0, 0.0));

        // Same medium: direction is unchanged
        let d = Vector3::new(0.0, -1.0, 0.0);
        assert!(close3(d.refract(Vector3::Y, 1.0), d));

        // Grazing ray leaving a dense medium
        let grazing = Vector3::new(0.99, -0.141, 0.0).normalize();
        assert_eq!(grazing.refract(Vector3::Y, 1.5), Vector3::ZERO);
    }

    #[test]
    fn move_towards_stops_at_target() {
        let a = Vector3::ZERO;
        let b = Vector3::new(10.0, 0.0, 0.0);
        assert_eq!(a.move_towards(b, 3.0), Vector3::new(3.0, 0.0, 0.0));
        assert_eq!(a.move_towards(b, 30.0), b);
    }

    #[test]
    fn clamp_value_limits_length() {
        let v = Vector3::new(10.0, 0.0, 0.0);
        assert!(close(v.clamp_value(1.0, 2.0).length(), 2.0));
        assert!(close(Vector3::new(0.1, 0.0, 0.0).clamp_value(1.0, 2.0).length(), 1.0));
    }

    #[test]
    fn component_helpers() {
        let a = Vector3::new(1.0, 5.0, -2.0);
        let b = Vector3::new(3.0, 2.0, -4.0);
        assert_eq!(a.min(b), Vector3::new(1.0, 2.0, -4.0));
        assert_eq!(a.max(b), Vector3::new(3.0, 5.0, -2.0));
        assert_eq!(a.lerp(b, 0.5), Vector3::new(2.0, 3.5, -3.0));
        assert_eq!(a.add_value(1.0), Vector3::new(2.0, 6.0, -1.0));
        assert_eq!(a.distance_sqr(b), 4.0 + 9.0 + 4.0);
        assert!(a.equals(a + Vector3::new(1e-8, 0.0, 0.0)));
    }
}
