//! Ray representation for 3D ray casting.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a semi-infinite
//! line in 3D space used for intersection testing.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera position for primary rays, a surface point for shadow rays.
    pub origin: Vec3A,

    /// Unit-length direction of the ray.
    ///
    /// Intersection distances are measured in multiples of this vector, so
    /// they are only true distances when it is normalized.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and an already normalized direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Create a ray starting at `origin` and aimed at `target`.
    ///
    /// `target` must differ from `origin`.
    pub fn towards(origin: Vec3A, target: Vec3A) -> Self {
        Self::new(origin, (target - origin).normalize())
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}
