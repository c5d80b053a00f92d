//! Procedurally generated anchor-and-muscle organisms for Myomorph
//!
//! This crate implements:
//! - Anchors (point masses) and muscles (edges between two anchors)
//! - Organism generation with a guaranteed-connected muscle graph
//! - Populations sampled within configurable limits
//! - Falling-and-bouncing physics and render data as optional extensions

pub mod anchor;
pub mod describe;
pub mod error;
pub mod muscle;
pub mod organism;
pub mod physics;
pub mod population;
pub mod render;
pub mod rng;

// Re-export main types for convenience
pub use anchor::{ActiveWindow, Anchor, AnchorPlacement, AnchorSizing};
pub use describe::Detail;
pub use error::{ConfigurationError, GenerationError, TopologyError};
pub use muscle::{Connection, Muscle};
pub use organism::Organism;
pub use physics::OrganismBody;
pub use population::{Population, PopulationConfig};
pub use render::OrganismRenderData;
pub use rng::CreatureRng;
