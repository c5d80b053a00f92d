//! # Myomorph - anchor-and-muscle creatures
//!
//! Generates populations of organisms, describes them and renders them to
//! PNG snapshots or GIF animations.

pub mod capture;
pub mod config;
pub mod headless;

// Re-export the model crate for convenience
pub use myomorph_creature as creature;

pub use config::AppConfig;
