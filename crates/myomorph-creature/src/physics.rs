//! Falling-and-bouncing physics for organisms
//!
//! Organisms themselves are immutable; the mutable state (location and
//! velocity of every anchor) lives in [`OrganismBody`]. Integration is
//! explicit Euler in screen coordinates (y grows downward):
//! - location += velocity, then velocity += gravity * weight
//! - leaving the window horizontally reflects the x velocity
//! - crossing the floor clamps the anchor to it and bounces at -0.5
//!
//! Muscles exert no forces yet.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::anchor::{ActiveWindow, Anchor};
use crate::organism::Organism;

/// Per-step acceleration applied to an anchor of weight 1.0
pub const GRAVITY: Vec2 = Vec2::new(0.0, 0.2);

/// Velocity factor applied to the y velocity on hitting the floor
pub const FLOOR_RESTITUTION: f32 = -0.5;

/// Moving state of a single anchor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnchorBody {
    pub location: Vec2,
    pub velocity: Vec2,
    pub weight: f32,
    pub size: f32,
}

impl AnchorBody {
    /// Body at rest at the anchor's initial position
    pub fn new(anchor: &Anchor) -> Self {
        Self {
            location: anchor.position,
            velocity: Vec2::ZERO,
            weight: anchor.weight,
            size: anchor.size,
        }
    }

    /// Advance one step inside `window`
    pub fn step(&mut self, window: &ActiveWindow) {
        self.location += self.velocity;
        self.velocity += GRAVITY * self.weight;

        if self.location.x < 0.0 || self.location.x > window.width {
            self.velocity.x = -self.velocity.x;
        }

        let floor = window.height - self.size / 2.0;
        if self.location.y > floor {
            self.velocity.y *= FLOOR_RESTITUTION;
            self.location.y = floor;
        }
    }
}

/// Physics state for all anchors of one organism
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrganismBody {
    /// One body per anchor, in anchor order
    pub anchors: Vec<AnchorBody>,
    pub window: ActiveWindow,
}

impl OrganismBody {
    pub fn new(organism: &Organism, window: ActiveWindow) -> Self {
        Self {
            anchors: organism.anchors().iter().map(AnchorBody::new).collect(),
            window,
        }
    }

    pub fn step(&mut self) {
        for body in &mut self.anchors {
            body.step(&self.window);
        }
    }

    /// Location of an anchor by its 1-based index
    pub fn location(&self, index: usize) -> Option<Vec2> {
        index
            .checked_sub(1)
            .and_then(|i| self.anchors.get(i))
            .map(|body| body.location)
    }

    /// Mean anchor location
    pub fn centroid(&self) -> Option<Vec2> {
        if self.anchors.is_empty() {
            return None;
        }
        let sum: Vec2 = self.anchors.iter().map(|b| b.location).sum();
        Some(sum / self.anchors.len() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng;

    fn body(location: Vec2, velocity: Vec2, weight: f32, size: f32) -> AnchorBody {
        AnchorBody {
            location,
            velocity,
            weight,
            size,
        }
    }

    #[test]
    fn test_free_fall_step() {
        let window = ActiveWindow::new(100.0, 100.0);
        let mut b = body(Vec2::new(50.0, 10.0), Vec2::new(1.0, 0.0), 0.5, 4.0);

        b.step(&window);

        assert_eq!(b.location, Vec2::new(51.0, 10.0));
        assert!((b.velocity.y - 0.1).abs() < 1e-6);
        assert_eq!(b.velocity.x, 1.0);
    }

    #[test]
    fn test_floor_bounce() {
        let window = ActiveWindow::new(100.0, 100.0);
        let mut b = body(Vec2::new(50.0, 97.0), Vec2::new(0.0, 2.0), 1.0, 10.0);

        b.step(&window);

        // Floor sits at 100 - 10 / 2 = 95
        assert_eq!(b.location.y, 95.0);
        assert!((b.velocity.y - (2.2 * FLOOR_RESTITUTION)).abs() < 1e-5);
    }

    #[test]
    fn test_wall_reflection() {
        let window = ActiveWindow::new(100.0, 100.0);

        let mut right = body(Vec2::new(99.5, 10.0), Vec2::new(1.0, 0.0), 0.0, 1.0);
        right.step(&window);
        assert_eq!(right.velocity.x, -1.0);

        let mut left = body(Vec2::new(0.5, 10.0), Vec2::new(-1.0, 0.0), 0.0, 1.0);
        left.step(&window);
        assert_eq!(left.velocity.x, 1.0);
    }

    #[test]
    fn test_weightless_anchor_keeps_velocity() {
        let window = ActiveWindow::new(100.0, 100.0);
        let mut b = body(Vec2::new(10.0, 10.0), Vec2::new(0.5, 0.5), 0.0, 1.0);

        for _ in 0..10 {
            b.step(&window);
        }

        assert_eq!(b.velocity, Vec2::new(0.5, 0.5));
        assert_eq!(b.location, Vec2::new(15.0, 15.0));
    }

    #[test]
    fn test_organism_settles_on_floor() {
        let mut rng = rng::seeded(1);
        let organism = Organism::new(4, 5, 40.0, &mut rng).unwrap();
        let window = ActiveWindow::new(200.0, 150.0);
        let mut physics = OrganismBody::new(&organism, window);

        assert_eq!(physics.anchors.len(), organism.anchors_nr());
        assert_eq!(physics.location(1), Some(organism.anchors()[0].position));

        for _ in 0..2000 {
            physics.step();
        }

        for (body, anchor) in physics.anchors.iter().zip(organism.anchors()) {
            let floor = window.height - anchor.size / 2.0;
            assert!(body.location.y <= floor + 1e-3);
        }
    }

    #[test]
    fn test_centroid() {
        let physics = OrganismBody {
            anchors: vec![
                body(Vec2::new(0.0, 0.0), Vec2::ZERO, 1.0, 1.0),
                body(Vec2::new(4.0, 2.0), Vec2::ZERO, 1.0, 1.0),
            ],
            window: ActiveWindow::new(10.0, 10.0),
        };
        assert_eq!(physics.centroid(), Some(Vec2::new(2.0, 1.0)));
        assert_eq!(physics.location(0), None);
        assert_eq!(physics.location(3), None);
    }
}
