//! Pixel buffers and drawing primitives.
//!
//! The buffer is a tightly packed RGBA8 byte array, row-major, so two
//! buffers compare byte-for-byte and hash directly. Each synthesis call
//! owns its buffer; nothing here is shared between calls.
//!
//! The drawing primitives are the raster re-expression of the 2D canvas
//! calls the overlay and compositor need: a diagonal gradient fill, filled
//! discs, and stroked line segments. Strokes rasterize by distance to the
//! segment over the bounding box, so every covered pixel blends exactly
//! once regardless of stroke length.

use crate::color::Color;

/// RGBA8 pixel buffer, `width * height * 4` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let rgba = fill.to_rgba8();
        let pixels = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap raw RGBA bytes. Returns `None` if the length does not match
    /// `width * height * 4`.
    pub fn from_rgba_bytes(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != (width as usize) * (height as usize) * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        let idx = ((y * self.width + x) * 4) as usize;
        Color::from_rgba8([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = ((y * self.width + x) * 4) as usize;
        self.data[idx..idx + 4].copy_from_slice(&color.to_rgba8());
    }

    /// Alpha-blend a color over the pixel at the given coordinates.
    /// Out-of-bounds coordinates are skipped.
    #[inline]
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        let blended = color.over(&self.get(x, y));
        self.set(x, y, blended);
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// BLAKE3 hex hash of the raw bytes, used for content addressing.
    pub fn hash(&self) -> String {
        blake3::hash(&self.data).to_hex().to_string()
    }

    /// Fill with a diagonal linear gradient from the top-left (`from`)
    /// to the bottom-right (`to`).
    pub fn fill_diagonal_gradient(&mut self, from: Color, to: Color) {
        let span = (self.width + self.height).saturating_sub(2).max(1) as f64;
        for y in 0..self.height {
            for x in 0..self.width {
                let t = (x + y) as f64 / span;
                self.set(x, y, from.lerp(&to, t));
            }
        }
    }

    /// Blend a filled disc centered at (`cx`, `cy`).
    pub fn draw_disc(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        let r = radius.max(0.0);
        let x_min = (cx - r).floor() as i64;
        let x_max = (cx + r).ceil() as i64;
        let y_min = (cy - r).floor() as i64;
        let y_max = (cy + r).ceil() as i64;

        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Blend a stroked line segment from (`x0`, `y0`) to (`x1`, `y1`).
    ///
    /// Each pixel whose center lies within half the thickness of the
    /// segment blends exactly once.
    pub fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, thickness: f64, color: Color) {
        let half = (thickness / 2.0).max(0.5);
        let x_min = (x0.min(x1) - half).floor() as i64;
        let x_max = (x0.max(x1) + half).ceil() as i64;
        let y_min = (y0.min(y1) - half).floor() as i64;
        let y_max = (y0.max(y1) + half).ceil() as i64;

        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let px = x as f64 + 0.5;
                let py = y as f64 + 0.5;
                if distance_to_segment(px, py, x0, y0, x1, y1) <= half {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }
}

/// Single-channel u8 mask buffer (e.g. an extracted alpha wear mask).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayBuffer {
    pub width: u32,
    pub height: u32,
    data: Vec<u8>,
}

impl GrayBuffer {
    /// Create a new buffer filled with a value.
    pub fn new(width: u32, height: u32, fill: u8) -> Self {
        Self {
            width,
            height,
            data: vec![fill; (width * height) as usize],
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[(y * self.width + x) as usize]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        self.data[(y * self.width + x) as usize] = value;
    }

    /// Raw bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Distance from a point to a line segment.
fn distance_to_segment(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-10 {
        // Segment is a point
        let dpx = px - x1;
        let dpy = py - y1;
        return (dpx * dpx + dpy * dpy).sqrt();
    }

    let t = ((px - x1) * dx + (py - y1) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let proj_x = x1 + t * dx;
    let proj_y = y1 + t * dy;

    let dpx = px - proj_x;
    let dpy = py - proj_y;
    (dpx * dpx + dpy * dpy).sqrt()
}
