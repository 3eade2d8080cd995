//! Sphere primitive for ray casting.
//!
//! Intersects by projecting the center onto the ray, which avoids solving the
//! full quadratic.

use glam::Vec3A;

use crate::color::Color;
use crate::hittable::{Hittable, NO_HIT};
use crate::ray::Ray;

/// Sphere primitive defined by center, radius, and color.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere (always non-negative).
    ///
    /// Negative radius values are clamped to 0.0 in the constructor. A zero
    /// radius sphere is only hit by rays through its exact center.
    pub radius: f32,

    /// Surface color.
    pub color: Color,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Vec3A, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            color,
        }
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> f32 {
        // Vector from ray origin to sphere center and its projection on the ray
        let to_center = self.center - ray.origin;
        let proj = to_center.dot(ray.direction);

        // Center lies behind the origin
        if proj < 0.0 {
            return NO_HIT;
        }

        // Squared half-chord length; negative when the ray passes outside
        let discriminant = self.radius * self.radius + proj * proj - to_center.length_squared();
        if discriminant < 0.0 {
            return NO_HIT;
        }

        // Near root only
        proj - discriminant.sqrt()
    }

    fn normal_at(&self, point: Vec3A) -> Vec3A {
        (point - self.center).normalize()
    }
}
