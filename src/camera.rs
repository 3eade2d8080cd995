//! Pinhole camera and primary ray generation.

use glam::Vec3A;

use crate::error::{RenderError, Result};
use crate::ray::Ray;

/// World up axis. Points down in y because pixel row 0 is the top row.
pub const WORLD_UP: Vec3A = Vec3A::new(0.0, -1.0, 0.0);

/// Pinhole camera with an orthonormal basis.
///
/// `forward`, `right` and `up` are unit length and mutually orthogonal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye position; origin of every primary ray.
    pub position: Vec3A,
    /// Viewing direction.
    pub forward: Vec3A,
    /// Horizontal image axis.
    pub right: Vec3A,
    /// Vertical image axis.
    pub up: Vec3A,
}

impl Camera {
    /// Build a camera at `position` looking at `target`.
    ///
    /// Fails with [`RenderError::DegenerateCamera`] when `target == position`
    /// or when the view direction is parallel to [`WORLD_UP`].
    pub fn look_at(position: Vec3A, target: Vec3A) -> Result<Self> {
        let degenerate = || RenderError::DegenerateCamera {
            position: position.to_array(),
            target: target.to_array(),
        };

        let forward = (target - position).try_normalize().ok_or_else(degenerate)?;
        let right = WORLD_UP.cross(forward).try_normalize().ok_or_else(degenerate)?;
        let up = right.cross(forward).normalize();

        Ok(Self {
            position,
            forward,
            right,
            up,
        })
    }

    /// Primary ray through pixel `(pixel_x, pixel_y)`, with `pixel_y`
    /// counted from the bottom of the image.
    ///
    /// The field of view spans one unit along the longer image axis, the
    /// shorter axis is scaled down so pixels stay square.
    pub fn ray_for_pixel(&self, pixel_x: u32, pixel_y: u32, width: u32, height: u32) -> Ray {
        let (width_f, height_f) = (width as f32, height as f32);
        let (width_scale, height_scale) = if width > height {
            (1.0, height_f / width_f)
        } else {
            (width_f / height_f, 1.0)
        };

        let u = pixel_x as f32 / width_f - 0.5;
        let v = pixel_y as f32 / height_f - 0.5;

        let direction = (self.forward
            + self.right * (u * width_scale)
            + self.up * (v * height_scale))
            .normalize();

        Ray::new(self.position, direction)
    }
}
