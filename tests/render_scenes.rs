//! End-to-end renders of small literal scenes.

use glam::Vec3A;
use prismcast::{Camera, Color, Light, RenderError, RenderOptions, Renderer, Scene, Shape, Sphere};

const ORANGE: Color = Color::rgb(255, 128, 0);

fn quiet() -> RenderOptions {
    RenderOptions {
        progress: false,
        ..Default::default()
    }
}

/// One sphere up and to the right of a camera looking down -z.
fn single_sphere_scene(target: Vec3A) -> Scene {
    let shapes: Vec<Shape> = vec![Sphere::new(Vec3A::new(2.0, 2.0, -10.0), 1.0, ORANGE).into()];
    let camera = Camera::look_at(Vec3A::ZERO, target).unwrap();
    let light = Light::new(Vec3A::new(0.0, 10.0, -2.0), 1.0).unwrap();
    Scene::new(640, 480, Color::TRANSPARENT, camera, light, shapes).unwrap()
}

fn assert_partially_lit(color: Color) {
    assert_eq!(color.a, 255, "expected a surface, got {color:?}");
    assert_ne!(color, Color::BLACK);
    assert!(color.r > 0 && color.r < ORANGE.r, "red channel {} not dimmed", color.r);
    assert!(color.g > 0 && color.g < ORANGE.g, "green channel {} not dimmed", color.g);
    assert_eq!(color.b, 0);
}

#[test]
fn test_sphere_seen_through_its_center_pixel() {
    let scene = single_sphere_scene(Vec3A::new(0.0, 0.0, -1.0));
    let renderer = Renderer::new(quiet());

    // u = 448/640 - 0.5 = 0.2, v = (368/480 - 0.5) * 480/640 = 0.2:
    // the ray points along (0.2, 0.2, -1), straight at the sphere center
    let color = renderer.shade_pixel(&scene, 448, 368);
    assert_partially_lit(color);

    let grid = renderer.render(&scene).unwrap();
    assert_eq!(grid.get(448, 480 - 368 - 1), color);

    // the exact image center looks down -z and passes beside the sphere
    assert_eq!(renderer.shade_pixel(&scene, 320, 240), Color::TRANSPARENT);
}

#[test]
fn test_image_center_when_aimed_at_sphere() {
    let scene = single_sphere_scene(Vec3A::new(2.0, 2.0, -10.0));
    let grid = Renderer::new(quiet()).render(&scene).unwrap();

    // camera pixel (320, 240) lands on grid row 480 - 240 - 1
    assert_partially_lit(grid.get(320, 239));
    // corners see only background
    assert_eq!(grid.get(0, 0), Color::TRANSPARENT);
    assert_eq!(grid.get(639, 479), Color::TRANSPARENT);
}

#[test]
fn test_empty_scene_renders_background_everywhere() {
    let camera = Camera::look_at(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0)).unwrap();
    let light = Light::new(Vec3A::new(0.0, 10.0, -2.0), 1.0).unwrap();
    let background = Color::argb(0, 0, 0, 0);
    let scene = Scene::new(640, 480, background, camera, light, vec![]).unwrap();

    let grid = Renderer::new(quiet()).render(&scene).unwrap();
    assert_eq!(grid.pixels().len(), 640 * 480);
    assert!(grid.pixels().iter().all(|c| *c == background));
}

#[test]
fn test_rendering_is_deterministic() {
    let scene = single_sphere_scene(Vec3A::new(1.0, 1.0, -10.0));
    let first = Renderer::new(quiet()).render(&scene).unwrap();
    let second = Renderer::new(RenderOptions {
        threads: Some(2),
        band_height: 5,
        ..quiet()
    })
    .render(&scene)
    .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_render_and_save_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sphere.png");
    let scene = single_sphere_scene(Vec3A::new(2.0, 2.0, -10.0));

    let grid = prismcast::render(&scene, quiet(), &path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded, grid.to_rgba_image());
}

#[test]
fn test_render_surfaces_sink_errors() {
    let dir = tempfile::tempdir().unwrap();
    let scene = single_sphere_scene(Vec3A::new(2.0, 2.0, -10.0));

    let err = prismcast::render(&scene, quiet(), dir.path().join("sphere.bmp")).unwrap_err();
    assert!(matches!(err, RenderError::UnsupportedFormat(_)));
}

#[test]
fn test_camera_looking_at_itself_is_rejected() {
    let p = Vec3A::new(0.0, 1.0, 2.0);
    assert!(matches!(Camera::look_at(p, p), Err(RenderError::DegenerateCamera { .. })));
}
