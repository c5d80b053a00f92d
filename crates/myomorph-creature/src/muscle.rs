//! Muscles: elastic edges between two anchors of the same organism

use serde::{Deserialize, Serialize};

use crate::describe::MuscleDescription;
use crate::error::TopologyError;
use crate::rng::CreatureRng;

/// Unordered pair of distinct 1-based anchor indices
///
/// Muscles refer to anchors by index only; the organism resolves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
}

impl Connection {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Whether this connection joins `x` and `y`, in either order
    pub fn joins(&self, x: usize, y: usize) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// Endpoint opposite to `anchor`, if `anchor` is part of this connection
    pub fn other(&self, anchor: usize) -> Option<usize> {
        if self.a == anchor {
            Some(self.b)
        } else if self.b == anchor {
            Some(self.a)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// Edge between two anchors with random actuation timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Muscle {
    /// 1-based index, unique within the owning organism
    pub index: usize,
    pub connection: Connection,
    pub contraction_time: f32,
    pub contraction_speed: f32,
    pub relaxation_time: f32,
}

impl Muscle {
    /// Create a muscle, picking any omitted endpoint at random
    ///
    /// A missing endpoint is drawn uniformly from `1..=anchors_nr`, excluding
    /// the other endpoint. When both are omitted, `anchor_a` is drawn first.
    pub fn new<R: CreatureRng + ?Sized>(
        index: usize,
        anchor_a: Option<usize>,
        anchor_b: Option<usize>,
        anchors_nr: usize,
        rng: &mut R,
    ) -> Result<Self, TopologyError> {
        if anchors_nr < 2 {
            return Err(TopologyError::TooFewAnchors { anchors_nr });
        }

        let (a, b) = match (anchor_a, anchor_b) {
            (Some(a), Some(b)) => (a, b),
            (Some(a), None) => {
                check_in_range(index, a, anchors_nr)?;
                (a, pick_excluding(anchors_nr, a, rng))
            }
            (None, Some(b)) => {
                check_in_range(index, b, anchors_nr)?;
                (pick_excluding(anchors_nr, b, rng), b)
            }
            (None, None) => {
                let a = rng.gen_inclusive(1, anchors_nr);
                (a, pick_excluding(anchors_nr, a, rng))
            }
        };

        check_in_range(index, a, anchors_nr)?;
        check_in_range(index, b, anchors_nr)?;
        if a == b {
            return Err(TopologyError::SelfConnection {
                muscle: index,
                anchor: a,
            });
        }

        Ok(Self {
            index,
            connection: Connection::new(a, b),
            contraction_time: rng.gen_f32(),
            contraction_speed: rng.gen_f32(),
            relaxation_time: rng.gen_f32(),
        })
    }

    /// Muscle with fixed endpoints
    pub fn between<R: CreatureRng + ?Sized>(
        index: usize,
        anchor_a: usize,
        anchor_b: usize,
        anchors_nr: usize,
        rng: &mut R,
    ) -> Result<Self, TopologyError> {
        Self::new(index, Some(anchor_a), Some(anchor_b), anchors_nr, rng)
    }

    /// Muscle with both endpoints chosen at random
    pub fn random<R: CreatureRng + ?Sized>(
        index: usize,
        anchors_nr: usize,
        rng: &mut R,
    ) -> Result<Self, TopologyError> {
        Self::new(index, None, None, anchors_nr, rng)
    }

    pub fn describe(&self) -> MuscleDescription {
        MuscleDescription {
            index: self.index,
            connection: self.connection,
            contraction_time: self.contraction_time,
            contraction_speed: self.contraction_speed,
            relaxation_time: self.relaxation_time,
        }
    }
}

fn check_in_range(muscle: usize, anchor: usize, anchors_nr: usize) -> Result<(), TopologyError> {
    if (1..=anchors_nr).contains(&anchor) {
        Ok(())
    } else {
        Err(TopologyError::AnchorOutOfRange {
            muscle,
            anchor,
            anchors_nr,
        })
    }
}

/// Uniform pick from `1..=anchors_nr` without `excluded`
///
/// Draws from the `anchors_nr - 1` remaining values and shifts past the hole.
fn pick_excluding<R: CreatureRng + ?Sized>(anchors_nr: usize, excluded: usize, rng: &mut R) -> usize {
    let pick = rng.gen_inclusive(1, anchors_nr - 1);
    if pick >= excluded { pick + 1 } else { pick }
}
