//! Anchors: the point-mass nodes of an organism

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::describe::AnchorDescription;
use crate::rng::CreatureRng;

/// Anchor size scale used by [`AnchorSizing::Weighted`]
pub const WEIGHTED_SIZE_SCALE: f32 = 100.0;

/// How an anchor's size is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnchorSizing {
    /// Uniform in [0, organism size)
    #[default]
    Uniform,
    /// `weight * 100`, so heavier anchors are drawn larger
    Weighted,
}

impl std::fmt::Display for AnchorSizing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnchorSizing::Uniform => write!(f, "uniform"),
            AnchorSizing::Weighted => write!(f, "weighted"),
        }
    }
}

impl std::str::FromStr for AnchorSizing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uniform" => Ok(AnchorSizing::Uniform),
            "weighted" | "weight" => Ok(AnchorSizing::Weighted),
            _ => Err(format!(
                "Unknown anchor sizing: {}. Valid: uniform, weighted",
                s
            )),
        }
    }
}

/// Screen-space region organisms live in (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveWindow {
    pub width: f32,
    pub height: f32,
}

impl ActiveWindow {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Offset that centers an organism horizontally and rests it on the bottom edge
    pub fn placement_offset(&self, organism_size: f32) -> Vec2 {
        Vec2::new(
            (self.width - organism_size) / 2.0,
            self.height - organism_size,
        )
    }
}

/// Options controlling where anchors go and how large they are
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnchorPlacement {
    #[serde(default)]
    pub sizing: AnchorSizing,
    /// When set, anchor positions are shifted into this window
    #[serde(default)]
    pub window: Option<ActiveWindow>,
}

impl AnchorPlacement {
    pub fn with_sizing(mut self, sizing: AnchorSizing) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn in_window(mut self, window: ActiveWindow) -> Self {
        self.window = Some(window);
        self
    }
}

/// Point-mass node of an organism
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// 1-based index, unique within the owning organism
    pub index: usize,
    pub position: Vec2,
    /// Friction in [0, 1)
    pub friction: f32,
    /// Weight in [0, 1)
    pub weight: f32,
    pub size: f32,
}

impl Anchor {
    /// Create an anchor with random attributes scaled to the organism size
    pub fn new<R: CreatureRng + ?Sized>(
        index: usize,
        organism_size: f32,
        placement: &AnchorPlacement,
        rng: &mut R,
    ) -> Self {
        let x = rng.gen_f32() * organism_size;
        let y = rng.gen_f32() * organism_size;
        let offset = placement
            .window
            .map(|window| window.placement_offset(organism_size))
            .unwrap_or(Vec2::ZERO);

        let friction = rng.gen_f32();
        let weight = rng.gen_f32();
        let size = match placement.sizing {
            AnchorSizing::Uniform => rng.gen_f32() * organism_size,
            AnchorSizing::Weighted => weight * WEIGHTED_SIZE_SCALE,
        };

        Self {
            index,
            position: Vec2::new(x, y) + offset,
            friction,
            weight,
            size,
        }
    }

    /// Radius of the circle this anchor is drawn as
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    pub fn describe(&self) -> AnchorDescription {
        AnchorDescription {
            index: self.index,
            position: self.position,
            friction: self.friction,
            weight: self.weight,
            size: self.size,
        }
    }
}
