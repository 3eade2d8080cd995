//! Row-major pixel storage handed from the renderer to the pixel sink.

use image::RgbaImage;

use crate::color::Color;

/// `width × height` grid of colors, row 0 at the top of the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelGrid {
    /// Grid filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at column `x`, row `row` (counted from the top).
    ///
    /// Panics when out of bounds.
    pub fn get(&self, x: u32, row: u32) -> Color {
        self.pixels[self.index(x, row)]
    }

    /// Overwrite the color at column `x`, row `row`.
    pub fn set(&mut self, x: u32, row: u32, color: Color) {
        let index = self.index(x, row);
        self.pixels[index] = color;
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Mutable row-major pixels, for the band-parallel render loop.
    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Convert to an `image` buffer for encoding.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| self.get(x, y).into())
    }

    fn index(&self, x: u32, row: u32) -> usize {
        assert!(x < self.width && row < self.height, "pixel ({x}, {row}) out of bounds");
        row as usize * self.width as usize + x as usize
    }
}
