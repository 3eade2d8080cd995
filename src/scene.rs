//! Scene container: shapes, light, camera, background and image size.
//!
//! Shapes are addressed by their index in [`Scene::shapes`]. Nearest-hit
//! selection and shadow tests use those indices, so excluding the shape
//! being shaded is a plain index comparison.

use glam::Vec3A;

use crate::camera::Camera;
use crate::color::Color;
use crate::error::{RenderError, Result};
use crate::hittable::{Hittable, Shape, NO_HIT};
use crate::light::Light;
use crate::ray::Ray;

/// Nearest intersection found along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the shape in [`Scene::shapes`].
    pub index: usize,
    /// Distance along the ray.
    pub distance: f32,
}

/// Everything needed to render one image. Immutable while rendering.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Shapes in scene order; order breaks distance ties.
    pub shapes: Vec<Shape>,
    /// The single point light.
    pub light: Light,
    /// Viewing camera.
    pub camera: Camera,
    /// Color of pixels whose ray hits nothing.
    pub background: Color,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl Scene {
    /// Create a scene, rejecting zero-sized images.
    pub fn new(
        width: u32,
        height: u32,
        background: Color,
        camera: Camera,
        light: Light,
        shapes: Vec<Shape>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self {
            shapes,
            light,
            camera,
            background,
            width,
            height,
        })
    }

    /// Nearest shape along `ray`.
    ///
    /// Linear scan; on equal distances the earlier shape wins. Returns `None`
    /// when every shape reports [`NO_HIT`].
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit> {
        let mut nearest = Hit {
            index: 0,
            distance: NO_HIT,
        };
        for (index, shape) in self.shapes.iter().enumerate() {
            let distance = shape.intersect(ray);
            if distance < nearest.distance {
                nearest = Hit { index, distance };
            }
        }

        (nearest.distance < NO_HIT).then_some(nearest)
    }

    /// Whether any shape other than `hit_index` lies between `hit_point`
    /// and the light.
    ///
    /// `bias` moves the shadow-ray origin toward the light before testing;
    /// with a bias of zero the ray starts exactly on the surface. A shape
    /// intersected exactly at the light's distance does not block.
    pub fn is_blocked(&self, hit_point: Vec3A, hit_index: usize, bias: f32) -> bool {
        let to_light = self.light.position - hit_point;
        let distance_to_light = to_light.length();
        if distance_to_light == 0.0 {
            return false;
        }

        let direction = to_light / distance_to_light;
        let shadow_ray = Ray::new(hit_point + direction * bias, direction);
        let remaining = distance_to_light - bias;

        self.shapes
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != hit_index)
            .any(|(_, shape)| shape.intersect(&shadow_ray) < remaining)
    }
}
