//! Structured descriptions and their human-readable form
//!
//! `describe()` on each model type returns one of these records without
//! touching the model. Formatting lives in the `Display` impls, and the
//! `log_*` helpers emit the formatted lines through the `log` facade.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::muscle::Connection;
use crate::organism::Organism;
use crate::population::Population;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorDescription {
    pub index: usize,
    pub position: Vec2,
    pub friction: f32,
    pub weight: f32,
    pub size: f32,
}

impl std::fmt::Display for AnchorDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Anchor {} positioned in ({:.2}, {:.2}), has friction: {:.2}, weight: {:.2}, size: {:.2}",
            self.index, self.position.x, self.position.y, self.friction, self.weight, self.size
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuscleDescription {
    pub index: usize,
    pub connection: Connection,
    pub contraction_time: f32,
    pub contraction_speed: f32,
    pub relaxation_time: f32,
}

impl std::fmt::Display for MuscleDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Muscle {} attached to anchors {}, has contraction time: {:.2}, contraction speed: {:.2}, relaxation time: {:.2}",
            self.index,
            self.connection,
            self.contraction_time,
            self.contraction_speed,
            self.relaxation_time
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrganismDescription {
    pub anchors_nr: usize,
    pub muscles_nr: usize,
    pub size: f32,
}

impl std::fmt::Display for OrganismDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Organism composed of {} anchors and {} muscles",
            self.anchors_nr, self.muscles_nr
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationDescription {
    /// Requested organism count, as configured
    pub organisms_nr: usize,
    pub anchors_nr_limit: usize,
    pub muscles_nr_limit: usize,
    pub organisms: Vec<OrganismDescription>,
}

impl PopulationDescription {
    /// Header line only, without the per-organism lines
    pub fn summary(&self) -> String {
        format!(
            "Population composed of {} organisms, with a limit on anchors number equal {} and on muscles {}.",
            self.organisms_nr, self.anchors_nr_limit, self.muscles_nr_limit
        )
    }
}

impl std::fmt::Display for PopulationDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())?;
        for organism in &self.organisms {
            write!(f, "\n{}", organism)?;
        }
        Ok(())
    }
}

/// How much of an organism to describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Detail {
    /// Organism summary line only
    #[default]
    Summary,
    /// Summary plus one line per anchor and per muscle
    Full,
}

/// Lines describing an organism at the requested detail
pub fn organism_lines(organism: &Organism, detail: Detail) -> Vec<String> {
    let mut lines = vec![organism.describe().to_string()];
    if detail == Detail::Full {
        lines.extend(organism.anchors().iter().map(|a| a.describe().to_string()));
        lines.extend(organism.muscles().iter().map(|m| m.describe().to_string()));
    }
    lines
}

/// Lines describing a population: the header, then each organism
pub fn population_lines(population: &Population, detail: Detail) -> Vec<String> {
    let mut lines = vec![population.describe().summary()];
    for organism in population {
        lines.extend(organism_lines(organism, detail));
    }
    lines
}

pub fn log_organism(organism: &Organism, detail: Detail) {
    for line in organism_lines(organism, detail) {
        log::info!("{}", line);
    }
}

pub fn log_population(population: &Population, detail: Detail) {
    for line in population_lines(population, detail) {
        log::info!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::PopulationConfig;
    use crate::rng;

    #[test]
    fn test_anchor_line() {
        let description = AnchorDescription {
            index: 2,
            position: Vec2::new(1.234, 5.0),
            friction: 0.126,
            weight: 0.5,
            size: 12.0,
        };
        assert_eq!(
            description.to_string(),
            "Anchor 2 positioned in (1.23, 5.00), has friction: 0.13, weight: 0.50, size: 12.00"
        );
    }

    #[test]
    fn test_muscle_line() {
        let description = MuscleDescription {
            index: 4,
            connection: Connection::new(1, 3),
            contraction_time: 0.25,
            contraction_speed: 0.5,
            relaxation_time: 0.75,
        };
        assert_eq!(
            description.to_string(),
            "Muscle 4 attached to anchors (1, 3), has contraction time: 0.25, contraction speed: 0.50, relaxation time: 0.75"
        );
    }

    #[test]
    fn test_population_text() {
        let description = PopulationDescription {
            organisms_nr: 3,
            anchors_nr_limit: 4,
            muscles_nr_limit: 5,
            organisms: vec![
                OrganismDescription {
                    anchors_nr: 2,
                    muscles_nr: 1,
                    size: 10.0,
                },
                OrganismDescription {
                    anchors_nr: 4,
                    muscles_nr: 5,
                    size: 20.0,
                },
            ],
        };

        assert_eq!(
            description.to_string(),
            "Population composed of 3 organisms, with a limit on anchors number equal 4 and on muscles 5.\n\
             Organism composed of 2 anchors and 1 muscles\n\
             Organism composed of 4 anchors and 5 muscles"
        );
    }

    #[test]
    fn test_line_counts_by_detail() {
        let mut rng = rng::seeded(1);
        let organism = Organism::new(4, 6, 40.0, &mut rng).unwrap();

        assert_eq!(organism_lines(&organism, Detail::Summary).len(), 1);
        assert_eq!(organism_lines(&organism, Detail::Full).len(), 1 + 4 + 6);
    }

    #[test]
    fn test_population_lines() {
        let mut rng = rng::seeded(2);
        let config = PopulationConfig {
            organisms_nr: 4,
            ..PopulationConfig::default()
        };
        let population = Population::new(config, &mut rng).unwrap();

        let lines = population_lines(&population, Detail::Summary);
        assert_eq!(lines.len(), 1 + 3);
        assert!(lines[0].starts_with("Population composed of 4 organisms"));
    }
}
