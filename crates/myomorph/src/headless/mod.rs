//! Headless rendering of organisms
//!
//! - Pixel buffer rendering for PNG snapshots
//! - GIF capture for physics animations

mod gif_capture;
mod pixel_renderer;

pub use gif_capture::GifCapture;
pub use pixel_renderer::{BACKGROUND, PixelRenderer};
