//! Infinite plane primitive.

use glam::Vec3A;

use crate::color::Color;
use crate::hittable::{Hittable, NO_HIT};
use crate::ray::Ray;

/// Infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Any point on the plane.
    pub point: Vec3A,
    /// Unit normal. Shading uses it as-is, whichever side the ray came from.
    pub normal: Vec3A,
    /// Surface color.
    pub color: Color,
}

impl Plane {
    /// Create a plane, normalizing `normal`.
    ///
    /// A zero normal yields a plane no ray can hit.
    pub fn new(point: Vec3A, normal: Vec3A, color: Color) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
            color,
        }
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> f32 {
        let denom = ray.direction.dot(self.normal);
        // Parallel, including rays lying inside the plane
        if denom == 0.0 {
            return NO_HIT;
        }

        let distance = (self.point.dot(self.normal) - ray.origin.dot(self.normal)) / denom;
        if distance < 0.0 {
            NO_HIT
        } else {
            distance
        }
    }

    fn normal_at(&self, _point: Vec3A) -> Vec3A {
        self.normal
    }
}
