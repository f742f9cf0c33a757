//! Conversions to `glam` types and GPU-ready layouts.
//!
//! The math types here and `glam`'s share the same memory layout (column-major
//! matrices, `x y z w` quaternions), but every conversion is an explicit
//! `From` impl rather than a reinterpretation of memory.
//!
//! ```
//! use vantage::{Matrix, Vector3};
//!
//! let m = Matrix::translate(1.0, 2.0, 3.0);
//! let g = glam::Mat4::from(m);
//! assert_eq!(g.transform_point3(glam::Vec3::ZERO), glam::Vec3::new(1.0, 2.0, 3.0));
//! assert_eq!(Matrix::from(g), m);
//! ```

use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

use crate::camera::Camera;
use crate::matrix::Matrix;
use crate::quaternion::Quaternion;
use crate::vector::{Vector2, Vector3, Vector4};

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector3> for Vec3 {
    fn from(v: Vector3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3 {
    fn from(v: Vec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector4> for Vec4 {
    fn from(v: Vector4) -> Self {
        Vec4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vec4> for Vector4 {
    fn from(v: Vec4) -> Self {
        Vector4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Quaternion> for Quat {
    fn from(q: Quaternion) -> Self {
        Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl From<Quat> for Quaternion {
    fn from(q: Quat) -> Self {
        Quaternion::new(q.x, q.y, q.z, q.w)
    }
}

impl From<Matrix> for Mat4 {
    fn from(m: Matrix) -> Self {
        Mat4::from_cols_array(&m.to_float_array())
    }
}

impl From<Mat4> for Matrix {
    fn from(m: Mat4) -> Self {
        Matrix::from_float_array(m.to_cols_array())
    }
}

impl From<Matrix> for [[f32; 4]; 4] {
    fn from(m: Matrix) -> Self {
        let a = m.to_float_array();
        [
            [a[0], a[1], a[2], a[3]],
            [a[4], a[5], a[6], a[7]],
            [a[8], a[9], a[10], a[11]],
            [a[12], a[13], a[14], a[15]],
        ]
    }
}

/// Camera data laid out for a uniform buffer.
///
/// Matrices are column arrays, matching WGSL `mat4x4<f32>`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    /// World to clip space.
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    /// Camera position in world space.
    pub camera_pos: [f32; 3],
    /// Elapsed time in seconds.
    pub time: f32,
}

impl CameraUniforms {
    pub fn new(camera: &Camera, aspect: f32, time: f32) -> Self {
        let view = camera.view_matrix();
        let proj = camera.projection_matrix(aspect);

        Self {
            view_proj: (view * proj).into(),
            view: view.into(),
            proj: proj.into(),
            camera_pos: camera.position.to_array(),
            time,
        }
    }

    /// Raw bytes for a buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
