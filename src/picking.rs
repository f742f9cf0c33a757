//! Screen-space picking: rays from the cursor into the world and the
//! reverse projection of world points onto the screen.
//!
//! # Example
//!
//! ```
//! use vantage::{Camera, Ray, Vector2, Vector3};
//!
//! let camera = Camera::new()
//!     .at(Vector3::new(0.0, 0.0, 5.0))
//!     .looking_at(Vector3::ZERO);
//! let screen = Vector2::new(800.0, 600.0);
//!
//! // The centre of the screen looks straight down the view direction
//! let ray = Ray::from_screen(Vector2::new(400.0, 300.0), screen, &camera);
//! assert!((ray.direction.z + 1.0).abs() < 1e-4);
//! assert_eq!(ray.intersect_sphere(Vector3::ZERO, 1.0).map(f32::round), Some(4.0));
//! ```

use crate::camera::{Camera, Projection};
use crate::quaternion::Quaternion;
use crate::vector::{Vector2, Vector3};

/// A ray in 3D space, used for raycasting and picking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// The starting point of the ray.
    pub position: Vector3,
    /// The normalized direction of the ray.
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray. The direction is normalized; a zero direction stays zero.
    pub fn new(position: Vector3, direction: Vector3) -> Self {
        Self {
            position,
            direction: direction.normalize(),
        }
    }

    /// Ray through a screen point, in pixels with Y growing downwards.
    ///
    /// Perspective rays start at the camera position. Orthographic rays
    /// start on the near plane under the cursor and all share the view
    /// direction.
    pub fn from_screen(point: Vector2, screen_size: Vector2, camera: &Camera) -> Self {
        let ndc_x = (2.0 * point.x) / screen_size.x - 1.0;
        let ndc_y = 1.0 - (2.0 * point.y) / screen_size.y;

        let aspect = screen_size.x / screen_size.y;
        let projection = camera.projection_matrix(aspect);
        let view = camera.view_matrix();

        let near_point = Vector3::unproject(Vector3::new(ndc_x, ndc_y, 0.0), projection, view);
        let far_point = Vector3::unproject(Vector3::new(ndc_x, ndc_y, 1.0), projection, view);
        let direction = (far_point - near_point).normalize();

        let position = match camera.projection {
            Projection::Perspective => camera.position,
            Projection::Orthographic => {
                Vector3::unproject(Vector3::new(ndc_x, ndc_y, -1.0), projection, view)
            }
        };

        Self { position, direction }
    }

    #[inline]
    pub fn point_at(&self, t: f32) -> Vector3 {
        self.position + self.direction * t
    }

    /// Distance along the ray to an axis-aligned box, or `None` on a miss.
    ///
    /// A ray starting inside the box reports the exit distance.
    pub fn intersect_box(&self, min: Vector3, max: Vector3) -> Option<f32> {
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        let origin = self.position.to_array();
        let direction = self.direction.to_array();
        let min = min.to_array();
        let max = max.to_array();

        for i in 0..3 {
            if direction[i].abs() < f32::EPSILON {
                // Parallel to this slab
                if origin[i] < min[i] || origin[i] > max[i] {
                    return None;
                }
            } else {
                let inv_dir = 1.0 / direction[i];
                let mut t1 = (min[i] - origin[i]) * inv_dir;
                let mut t2 = (max[i] - origin[i]) * inv_dir;

                if t1 > t2 {
                    std::mem::swap(&mut t1, &mut t2);
                }

                t_min = t_min.max(t1);
                t_max = t_max.min(t2);

                if t_min > t_max {
                    return None;
                }
            }
        }

        if t_min > 0.0 {
            Some(t_min)
        } else if t_max > 0.0 {
            Some(t_max)
        } else {
            None
        }
    }

    /// Distance along the ray to a sphere, or `None` on a miss.
    pub fn intersect_sphere(&self, center: Vector3, radius: f32) -> Option<f32> {
        let oc = self.position - center;
        let a = self.direction.dot(self.direction);
        let b = 2.0 * oc.dot(self.direction);
        let c = oc.dot(oc) - radius * radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 || a == 0.0 {
            return None;
        }

        let sqrt_disc = discriminant.sqrt();
        let t1 = (-b - sqrt_disc) / (2.0 * a);
        let t2 = (-b + sqrt_disc) / (2.0 * a);

        if t1 > 0.0 {
            Some(t1)
        } else if t2 > 0.0 {
            Some(t2)
        } else {
            None
        }
    }
}

/// Project a world point to screen pixels, Y growing downwards.
///
/// Points behind a perspective camera land mirrored through the centre;
/// check the view direction first when that matters.
pub fn world_to_screen(point: Vector3, camera: &Camera, width: f32, height: f32) -> Vector2 {
    let projection = camera.projection_matrix(width / height);
    let view = camera.view_matrix();

    let clip = Quaternion::new(point.x, point.y, point.z, 1.0)
        .transform(view)
        .transform(projection);

    let ndc = Vector3::new(clip.x / clip.w, -clip.y / clip.w, clip.z / clip.w);

    Vector2::new((ndc.x + 1.0) / 2.0 * width, (ndc.y + 1.0) / 2.0 * height)
}
