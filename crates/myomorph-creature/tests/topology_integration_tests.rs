//! Integration tests for organism topology
//!
//! These sweep many seeds and parameter combinations through the public API
//! to check the structural guarantees every generated organism must keep.

use std::collections::HashSet;

use myomorph_creature::{
    ActiveWindow, AnchorPlacement, AnchorSizing, GenerationError, Organism, OrganismBody,
    OrganismRenderData, Population, PopulationConfig, TopologyError, rng,
};

// ============================================================================
// Helpers
// ============================================================================

/// Connectivity via plain breadth-first search over the muscle connections,
/// independent of the petgraph-based `is_connected`
fn reachable_from_first(organism: &Organism) -> usize {
    let mut seen = HashSet::from([1usize]);
    let mut frontier = vec![1usize];

    while let Some(current) = frontier.pop() {
        for muscle in organism.muscles() {
            if let Some(next) = muscle.connection.other(current)
                && seen.insert(next)
            {
                frontier.push(next);
            }
        }
    }

    seen.len()
}

fn sweep(mut check: impl FnMut(usize, usize, &Organism)) {
    for seed in 0..20u64 {
        let mut rng = rng::seeded(seed);
        for anchors_nr in 2..=9 {
            for muscles_nr in 0..=14 {
                let organism = Organism::new(anchors_nr, muscles_nr, 60.0, &mut rng)
                    .expect("valid parameters should always generate");
                check(anchors_nr, muscles_nr, &organism);
            }
        }
    }
}

// ============================================================================
// Structural Invariants
// ============================================================================

#[test]
fn test_every_organism_is_connected() {
    sweep(|anchors_nr, _, organism| {
        assert_eq!(reachable_from_first(organism), anchors_nr);
        assert!(organism.is_connected());
    });
}

#[test]
fn test_muscle_count_floor() {
    sweep(|anchors_nr, muscles_nr, organism| {
        assert!(organism.muscles_nr() >= anchors_nr - 1);
        assert_eq!(organism.muscles_nr(), muscles_nr.max(anchors_nr - 1));
    });
}

#[test]
fn test_backbone_present() {
    sweep(|anchors_nr, _, organism| {
        for i in 1..anchors_nr {
            assert!(
                organism
                    .muscles()
                    .iter()
                    .any(|m| m.connection.joins(i, i + 1)),
                "missing backbone muscle ({}, {})",
                i,
                i + 1
            );
        }
    });
}

#[test]
fn test_endpoints_distinct_and_in_range() {
    sweep(|anchors_nr, _, organism| {
        for muscle in organism.muscles() {
            let connection = muscle.connection;
            assert_ne!(connection.a, connection.b);
            assert!((1..=anchors_nr).contains(&connection.a));
            assert!((1..=anchors_nr).contains(&connection.b));
            assert!(organism.muscle_anchors(muscle).is_some());
        }
    });
}

#[test]
fn test_indices_unique_and_sequential() {
    sweep(|anchors_nr, _, organism| {
        let anchor_indices: Vec<usize> = organism.anchors().iter().map(|a| a.index).collect();
        assert_eq!(anchor_indices, (1..=anchors_nr).collect::<Vec<_>>());

        let muscle_indices: Vec<usize> = organism.muscles().iter().map(|m| m.index).collect();
        assert_eq!(
            muscle_indices,
            (1..=organism.muscles_nr()).collect::<Vec<_>>()
        );
    });
}

// ============================================================================
// Concrete Scenarios
// ============================================================================

#[test]
fn test_four_anchors_two_muscles_requested() {
    let mut rng = rng::seeded(2024);
    let muscles = Organism::build_muscles(4, 2, &mut rng).unwrap();

    let pairs: Vec<(usize, usize)> = muscles
        .iter()
        .map(|m| (m.connection.a, m.connection.b))
        .collect();
    assert_eq!(pairs, vec![(1, 2), (2, 3), (3, 4)]);
}

#[test]
fn test_three_anchors_five_muscles_requested() {
    let mut rng = rng::seeded(2024);
    let muscles = Organism::build_muscles(3, 5, &mut rng).unwrap();

    assert_eq!(muscles.len(), 5);
    assert!(muscles[0].connection.joins(1, 2));
    assert!(muscles[1].connection.joins(2, 3));
    for muscle in &muscles[2..] {
        assert!((3..=5).contains(&muscle.index));
        assert_ne!(muscle.connection.a, muscle.connection.b);
    }
}

#[test]
fn test_single_anchor_is_invalid_topology() {
    let mut rng = rng::seeded(1);
    assert_eq!(
        Organism::new(1, 0, 10.0, &mut rng),
        Err(TopologyError::TooFewAnchors { anchors_nr: 1 })
    );
}

#[test]
fn test_describe_never_mutates() {
    let mut rng = rng::seeded(5);
    let config = PopulationConfig {
        organisms_nr: 6,
        ..PopulationConfig::default()
    };
    let population = Population::new(config, &mut rng).unwrap();
    let snapshot = population.clone();

    for _ in 0..3 {
        let _ = population.describe();
        for organism in &population {
            let _ = organism.describe();
            organism.anchors().iter().for_each(|a| {
                let _ = a.describe();
            });
            organism.muscles().iter().for_each(|m| {
                let _ = m.describe();
            });
        }
    }

    assert_eq!(population, snapshot);
}

// ============================================================================
// Population and Extensions
// ============================================================================

#[test]
fn test_population_rejects_small_anchor_limit() {
    let mut rng = rng::seeded(1);
    let config = PopulationConfig {
        anchors_nr_limit: 1,
        ..PopulationConfig::default()
    };
    assert!(matches!(
        Population::new(config, &mut rng),
        Err(GenerationError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_windowed_population_falls_and_renders() {
    let window = ActiveWindow::new(640.0, 480.0);
    let config = PopulationConfig {
        organisms_nr: 4,
        placement: AnchorPlacement::default()
            .with_sizing(AnchorSizing::Weighted)
            .in_window(window),
        ..PopulationConfig::default()
    };
    let mut rng = rng::seeded(77);
    let population = Population::new(config, &mut rng).unwrap();

    for organism in &population {
        let mut body = OrganismBody::new(organism, window);
        for _ in 0..300 {
            body.step();
        }

        let data = OrganismRenderData::from_body(organism, &body);
        assert_eq!(data.anchors.len(), organism.anchors_nr());
        assert_eq!(data.muscles.len(), organism.muscles_nr());
        for circle in &data.anchors {
            assert!(circle.position.y <= window.height);
        }
    }
}
