//! GIF capture for organism animations
//!
//! Collects rendered frames and encodes them as an animated GIF.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use gif::{Encoder, Frame, Repeat};

use super::PixelRenderer;

/// Captures frames and encodes them as GIF
pub struct GifCapture {
    /// Collected frames (RGB data)
    frames: Vec<Vec<u8>>,
    /// Frame dimensions
    width: u16,
    height: u16,
    /// Delay between frames in centiseconds (100ths of a second)
    frame_delay: u16,
}

impl GifCapture {
    /// Create a new GIF capture with specified dimensions
    ///
    /// # Arguments
    /// * `width` - Frame width in pixels
    /// * `height` - Frame height in pixels
    /// * `fps` - Target frames per second (converted to delay)
    pub fn new(width: u16, height: u16, fps: u16) -> Self {
        // Convert FPS to centisecond delay
        let frame_delay = if fps > 0 { (100 / fps).max(1) } else { 10 };

        Self {
            frames: Vec::new(),
            width,
            height,
            frame_delay,
        }
    }

    /// Capture a frame from a pixel renderer
    pub fn capture_frame(&mut self, renderer: &PixelRenderer) -> Result<()> {
        if renderer.width != self.width as usize || renderer.height != self.height as usize {
            anyhow::bail!(
                "Frame is {}x{}, capture expects {}x{}",
                renderer.width,
                renderer.height,
                self.width,
                self.height
            );
        }
        self.frames.push(renderer.get_rgb_buffer());
        Ok(())
    }

    /// Get the number of captured frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Save captured frames as an animated GIF
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if self.frames.is_empty() {
            anyhow::bail!("No frames to save");
        }

        let file = File::create(path.as_ref()).context("Failed to create GIF file")?;

        let mut encoder = Encoder::new(file, self.width, self.height, &[])
            .context("Failed to create GIF encoder")?;

        encoder
            .set_repeat(Repeat::Infinite)
            .context("Failed to set GIF repeat")?;

        for frame_data in &self.frames {
            let mut frame = Frame::from_rgb(self.width, self.height, frame_data);
            frame.delay = self.frame_delay;

            encoder
                .write_frame(&frame)
                .context("Failed to write GIF frame")?;
        }

        log::info!(
            "Saved {} frames to {:?}",
            self.frames.len(),
            path.as_ref()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gif_capture_creation() {
        let capture = GifCapture::new(128, 128, 10);
        assert_eq!(capture.width, 128);
        assert_eq!(capture.height, 128);
        assert_eq!(capture.frame_delay, 10); // 100/10 = 10 centiseconds
        assert_eq!(capture.frame_count(), 0);
    }

    #[test]
    fn test_high_fps_delay_floor() {
        let capture = GifCapture::new(8, 8, 200);
        assert_eq!(capture.frame_delay, 1);
    }

    #[test]
    fn test_frame_capture() {
        let mut capture = GifCapture::new(64, 64, 10);
        let renderer = PixelRenderer::new(64, 64);

        capture.capture_frame(&renderer).unwrap();
        assert_eq!(capture.frame_count(), 1);

        capture.capture_frame(&renderer).unwrap();
        assert_eq!(capture.frame_count(), 2);
    }

    #[test]
    fn test_mismatched_frame_rejected() {
        let mut capture = GifCapture::new(64, 64, 10);
        let renderer = PixelRenderer::new(32, 32);
        assert!(capture.capture_frame(&renderer).is_err());
    }

    #[test]
    fn test_save_requires_frames() {
        let dir = tempfile::tempdir().unwrap();
        let capture = GifCapture::new(8, 8, 10);
        assert!(capture.save(dir.path().join("empty.gif")).is_err());
    }

    #[test]
    fn test_save_gif() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anim.gif");

        let mut capture = GifCapture::new(8, 8, 10);
        let renderer = PixelRenderer::new(8, 8);
        capture.capture_frame(&renderer).unwrap();
        capture.capture_frame(&renderer).unwrap();
        capture.save(&path).unwrap();

        assert!(path.metadata().unwrap().len() > 0);
    }
}
