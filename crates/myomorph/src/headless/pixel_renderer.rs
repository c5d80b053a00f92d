//! CPU-based pixel buffer renderer for snapshots and GIF capture
//!
//! Draws organism render data into an RGBA buffer without GPU dependencies.
//! Screen coordinates match organism coordinates: y grows downward.

use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec2;
use myomorph_creature::OrganismRenderData;

/// Background color (opaque black)
pub const BACKGROUND: [u8; 4] = [0, 0, 0, 255];

/// CPU-based renderer that outputs to a pixel buffer
pub struct PixelRenderer {
    /// Width of the viewport in pixels
    pub width: usize,
    /// Height of the viewport in pixels
    pub height: usize,
    /// RGBA pixel buffer (4 bytes per pixel)
    pub buffer: Vec<u8>,
}

impl PixelRenderer {
    /// Create a new pixel renderer with given viewport size
    pub fn new(width: usize, height: usize) -> Self {
        let mut renderer = Self {
            width,
            height,
            buffer: vec![0u8; width * height * 4],
        };
        renderer.clear(BACKGROUND);
        renderer
    }

    /// Fill the whole buffer with one color
    pub fn clear(&mut self, color: [u8; 4]) {
        for pixel in self.buffer.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Draw organisms, each shifted by its own offset
    pub fn render(&mut self, organisms: &[(OrganismRenderData, Vec2)]) {
        self.clear(BACKGROUND);
        for (organism, offset) in organisms {
            self.render_organism(organism, *offset);
        }
    }

    /// Draw anchors first, then muscles on top
    pub fn render_organism(&mut self, organism: &OrganismRenderData, offset: Vec2) {
        for anchor in &organism.anchors {
            let center = anchor.position + offset;
            let radius = anchor.radius.max(1.0).round() as i32;
            self.draw_filled_circle(
                center.x.round() as i32,
                center.y.round() as i32,
                radius,
                anchor.color,
            );
        }

        for muscle in &organism.muscles {
            let from = muscle.from + offset;
            let to = muscle.to + offset;
            self.draw_line(
                from.x.round() as i32,
                from.y.round() as i32,
                to.x.round() as i32,
                to.y.round() as i32,
                muscle.color,
            );
        }
    }

    /// Draw a filled circle at screen coordinates
    pub fn draw_filled_circle(&mut self, cx: i32, cy: i32, radius: i32, color: [u8; 4]) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Blend a single pixel at screen coordinates (alpha over opaque background)
    pub fn set_pixel(&mut self, x: i32, y: i32, color: [u8; 4]) {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return;
        }

        let idx = (y as usize * self.width + x as usize) * 4;
        let alpha = color[3] as u32;
        for channel in 0..3 {
            let dst = self.buffer[idx + channel] as u32;
            let src = color[channel] as u32;
            self.buffer[idx + channel] = ((src * alpha + dst * (255 - alpha)) / 255) as u8;
        }
        self.buffer[idx + 3] = 255;
    }

    /// Read back a pixel as RGBA
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        let mut pixel = [0u8; 4];
        pixel.copy_from_slice(&self.buffer[idx..idx + 4]);
        Some(pixel)
    }

    /// Draw a line using Bresenham's algorithm
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: [u8; 4]) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);
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

    /// Get the pixel buffer as RGB (without alpha) for GIF encoding
    pub fn get_rgb_buffer(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.width * self.height * 3);
        for chunk in self.buffer.chunks_exact(4) {
            rgb.extend_from_slice(&chunk[..3]);
        }
        rgb
    }

    /// Save the buffer as a PNG image
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        use image::{ImageBuffer, Rgba};

        let img: ImageBuffer<Rgba<u8>, _> =
            ImageBuffer::from_raw(self.width as u32, self.height as u32, self.buffer.clone())
                .ok_or_else(|| anyhow::anyhow!("Failed to create image buffer"))?;

        img.save(path.as_ref())
            .with_context(|| format!("Failed to write PNG to {:?}", path.as_ref()))?;
        Ok(())
    }
}
