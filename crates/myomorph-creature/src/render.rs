//! Render data for drawing organisms
//!
//! Anchors become filled circles (diameter = anchor size), muscles become
//! line segments between the two anchors they connect.

use glam::Vec2;

use crate::organism::Organism;
use crate::physics::OrganismBody;

/// Translucent white used for anchor circles
pub const ANCHOR_COLOR: [u8; 4] = [255, 255, 255, 200];

/// Opaque white used for muscle segments
pub const MUSCLE_COLOR: [u8; 4] = [255, 255, 255, 255];

/// A single anchor circle
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorRenderData {
    pub position: Vec2,
    pub radius: f32,
    pub color: [u8; 4],
}

/// A single muscle segment
#[derive(Debug, Clone, PartialEq)]
pub struct MuscleRenderData {
    pub from: Vec2,
    pub to: Vec2,
    pub color: [u8; 4],
}

/// Everything needed to draw one organism
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrganismRenderData {
    pub anchors: Vec<AnchorRenderData>,
    pub muscles: Vec<MuscleRenderData>,
}

impl OrganismRenderData {
    /// Render data at the organism's generated anchor positions
    pub fn from_organism(organism: &Organism) -> Self {
        Self::build(organism, |index| {
            organism.anchor(index).map(|anchor| anchor.position)
        })
    }

    /// Render data at the current locations of a physics body
    pub fn from_body(organism: &Organism, body: &OrganismBody) -> Self {
        Self::build(organism, |index| body.location(index))
    }

    fn build(organism: &Organism, locate: impl Fn(usize) -> Option<Vec2>) -> Self {
        let anchors = organism
            .anchors()
            .iter()
            .filter_map(|anchor| {
                locate(anchor.index).map(|position| AnchorRenderData {
                    position,
                    radius: anchor.radius(),
                    color: ANCHOR_COLOR,
                })
            })
            .collect();

        let muscles = organism
            .muscles()
            .iter()
            .filter_map(|muscle| {
                let from = locate(muscle.connection.a)?;
                let to = locate(muscle.connection.b)?;
                Some(MuscleRenderData {
                    from,
                    to,
                    color: MUSCLE_COLOR,
                })
            })
            .collect();

        Self { anchors, muscles }
    }

    /// Same drawing shifted by `offset`
    pub fn translated(mut self, offset: Vec2) -> Self {
        for anchor in &mut self.anchors {
            anchor.position += offset;
        }
        for muscle in &mut self.muscles {
            muscle.from += offset;
            muscle.to += offset;
        }
        self
    }
}
