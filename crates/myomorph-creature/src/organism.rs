//! Organism generation and muscle topology
//!
//! An organism is built in two steps: anchors first, then muscles.
//! Muscles are laid out in two phases:
//! 1. Backbone: muscle `i` joins anchors `i` and `i + 1`, a chain touching every anchor
//! 2. Random fill: muscles `anchors_nr..=muscles_nr` join random distinct anchors
//!
//! The requested `muscles_nr` is only a request for extra random muscles.
//! It never lowers the count below the `anchors_nr - 1` backbone, so every
//! organism is a single connected structure.

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};

use crate::anchor::{Anchor, AnchorPlacement};
use crate::describe::OrganismDescription;
use crate::error::TopologyError;
use crate::muscle::Muscle;
use crate::rng::CreatureRng;

/// Anchors joined by muscles, immutable once built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organism {
    size: f32,
    anchors: Vec<Anchor>,
    muscles: Vec<Muscle>,
}

impl Organism {
    /// Generate an organism with default anchor placement
    pub fn new<R: CreatureRng + ?Sized>(
        anchors_nr: usize,
        muscles_nr: usize,
        size: f32,
        rng: &mut R,
    ) -> Result<Self, TopologyError> {
        Self::with_placement(anchors_nr, muscles_nr, size, &AnchorPlacement::default(), rng)
    }

    /// Generate an organism, placing anchors according to `placement`
    pub fn with_placement<R: CreatureRng + ?Sized>(
        anchors_nr: usize,
        muscles_nr: usize,
        size: f32,
        placement: &AnchorPlacement,
        rng: &mut R,
    ) -> Result<Self, TopologyError> {
        if anchors_nr < 2 {
            return Err(TopologyError::TooFewAnchors { anchors_nr });
        }
        if !size.is_finite() || size < 0.0 {
            return Err(TopologyError::InvalidSize { size });
        }

        let anchors = Self::build_anchors(anchors_nr, size, placement, rng);
        let muscles = Self::build_muscles(anchors_nr, muscles_nr, rng)?;

        log::debug!(
            "Generated organism: size {:.1}, {} anchors, {} muscles ({} requested)",
            size,
            anchors.len(),
            muscles.len(),
            muscles_nr
        );

        Ok(Self {
            size,
            anchors,
            muscles,
        })
    }

    /// One anchor per index `1..=anchors_nr`, each sampled independently
    pub fn build_anchors<R: CreatureRng + ?Sized>(
        anchors_nr: usize,
        size: f32,
        placement: &AnchorPlacement,
        rng: &mut R,
    ) -> Vec<Anchor> {
        let mut anchors = Vec::with_capacity(anchors_nr);
        for index in 1..=anchors_nr {
            anchors.push(Anchor::new(index, size, placement, rng));
        }
        anchors
    }

    /// Backbone chain followed by random fill
    ///
    /// Yields `max(anchors_nr - 1, muscles_nr)` muscles. Random muscles may
    /// duplicate an existing connection.
    pub fn build_muscles<R: CreatureRng + ?Sized>(
        anchors_nr: usize,
        muscles_nr: usize,
        rng: &mut R,
    ) -> Result<Vec<Muscle>, TopologyError> {
        if anchors_nr < 2 {
            return Err(TopologyError::TooFewAnchors { anchors_nr });
        }

        let mut muscles = Vec::with_capacity(muscles_nr.max(anchors_nr - 1));

        for index in 1..anchors_nr {
            muscles.push(Muscle::between(index, index, index + 1, anchors_nr, rng)?);
        }

        for index in anchors_nr..=muscles_nr {
            muscles.push(Muscle::random(index, anchors_nr, rng)?);
        }

        Ok(muscles)
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn muscles(&self) -> &[Muscle] {
        &self.muscles
    }

    pub fn anchors_nr(&self) -> usize {
        self.anchors.len()
    }

    /// Stored muscle count (after the backbone floor was applied)
    pub fn muscles_nr(&self) -> usize {
        self.muscles.len()
    }

    /// Look up an anchor by its 1-based index
    pub fn anchor(&self, index: usize) -> Option<&Anchor> {
        index.checked_sub(1).and_then(|i| self.anchors.get(i))
    }

    /// Resolve a muscle's connection into its two anchors
    pub fn muscle_anchors(&self, muscle: &Muscle) -> Option<(&Anchor, &Anchor)> {
        let a = self.anchor(muscle.connection.a)?;
        let b = self.anchor(muscle.connection.b)?;
        Some((a, b))
    }

    /// Muscle graph: one node per anchor (weight = anchor index),
    /// one edge per muscle (weight = muscle index)
    pub fn muscle_graph(&self) -> UnGraph<usize, usize> {
        let mut graph = UnGraph::with_capacity(self.anchors.len(), self.muscles.len());
        for anchor in &self.anchors {
            graph.add_node(anchor.index);
        }
        for muscle in &self.muscles {
            graph.add_edge(
                NodeIndex::new(muscle.connection.a - 1),
                NodeIndex::new(muscle.connection.b - 1),
                muscle.index,
            );
        }
        graph
    }

    /// Whether every anchor is reachable from every other through muscles
    pub fn is_connected(&self) -> bool {
        connected_components(&self.muscle_graph()) == 1
    }

    pub fn describe(&self) -> OrganismDescription {
        OrganismDescription {
            anchors_nr: self.anchors_nr(),
            muscles_nr: self.muscles_nr(),
            size: self.size,
        }
    }
}
