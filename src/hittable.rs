//! Ray-shape intersection system.
//!
//! Defines the [`Hittable`] trait implemented by every primitive and the
//! closed [`Shape`] enum the scene stores. Misses are reported as
//! [`NO_HIT`] (positive infinity) so that picking the nearest shape is a
//! plain minimum over distances.

use glam::Vec3A;

use crate::color::Color;
use crate::plane::Plane;
use crate::ray::Ray;
use crate::sphere::Sphere;

/// Distance returned when a ray does not hit a shape in front of its origin.
pub const NO_HIT: f32 = f32::INFINITY;

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) since every render worker reads the
/// same shapes.
pub trait Hittable: Sync + Send {
    /// Distance along `ray` to the nearest forward intersection, or
    /// [`NO_HIT`].
    fn intersect(&self, ray: &Ray) -> f32;

    /// Surface normal at `point`, which is assumed to lie on the surface.
    fn normal_at(&self, point: Vec3A) -> Vec3A;
}

/// Every primitive the tracer knows about.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// See [`Sphere`].
    Sphere(Sphere),
    /// See [`Plane`].
    Plane(Plane),
}

impl Shape {
    /// Surface color of the shape.
    pub fn color(&self) -> Color {
        match self {
            Shape::Sphere(sphere) => sphere.color,
            Shape::Plane(plane) => plane.color,
        }
    }
}

impl Hittable for Shape {
    fn intersect(&self, ray: &Ray) -> f32 {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Plane(plane) => plane.intersect(ray),
        }
    }

    fn normal_at(&self, point: Vec3A) -> Vec3A {
        match self {
            Shape::Sphere(sphere) => sphere.normal_at(point),
            Shape::Plane(plane) => plane.normal_at(point),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}
