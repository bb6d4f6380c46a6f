//! RGBA raster the turtle draws on.
//!
//! World coordinates have their origin at the bottom-left pixel and `y`
//! growing upward; they are flipped to image rows only when plotting.
//! Segments are rasterized with Bresenham's algorithm and clipped to the
//! canvas: off-canvas geometry is silently dropped.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::CanvasError;

pub type Color = [u8; 4];

pub const BLACK: Color = [0, 0, 0, 255];
pub const WHITE: Color = [255, 255, 255, 255];

/// Pixel buffer plus the world → pixel mapping.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocate a `width × height` canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::EmptyCanvas { width, height });
        }
        Ok(Self { image: ImageBuffer::from_pixel(width, height, Rgba(background)) })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Colour at world pixel `(x, y)`, `None` outside the canvas.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Color> {
        let (px, py) = self.to_image(x, y)?;
        Some(self.image.get_pixel(px, py).0)
    }

    /// Number of pixels currently painted `color`.
    pub fn count(&self, color: Color) -> usize {
        self.image.pixels().filter(|p| p.0 == color).count()
    }

    /// Draw the segment `from → to` (world coordinates).
    pub fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color) {
        let (x0, y0) = (from.0.round() as i64, from.1.round() as i64);
        let (x1, y1) = (to.0.round() as i64, to.1.round() as i64);

        let (w, h) = (self.width() as i64, self.height() as i64);
        // Both ends beyond the same edge: nothing to plot.
        if (x0 < 0 && x1 < 0) || (y0 < 0 && y1 < 0) || (x0 >= w && x1 >= w) || (y0 >= h && y1 >= h) {
            return;
        }

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.plot(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Encode as PNG at `path`, creating parent directories as needed.
    pub fn save_png(&self, path: &Path) -> Result<(), CanvasError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        self.image.save_with_format(path, image::ImageFormat::Png)?;
        tracing::debug!(path = %path.display(), width = self.width(), height = self.height(), "canvas saved");
        Ok(())
    }

    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if let Some((px, py)) = self.to_image(x, y) {
            self.image.put_pixel(px, py, Rgba(color));
        }
    }

    fn to_image(&self, x: i64, y: i64) -> Option<(u32, u32)> {
        let (w, h) = (self.width() as i64, self.height() as i64);
        if x < 0 || y < 0 || x >= w || y >= h {
            return None;
        }
        Some((x as u32, (h - 1 - y) as u32))
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
