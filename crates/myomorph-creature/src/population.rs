//! Populations of independently generated organisms

use serde::{Deserialize, Serialize};

use crate::anchor::AnchorPlacement;
use crate::describe::PopulationDescription;
use crate::error::{ConfigurationError, GenerationError};
use crate::organism::Organism;
use crate::rng::CreatureRng;

/// Limits the per-organism parameters are sampled within
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Requested organism count; `organisms_nr - 1` organisms are generated
    pub organisms_nr: usize,
    /// Upper bound (inclusive) for anchors per organism, at least 2
    pub anchors_nr_limit: usize,
    /// Upper bound (inclusive) for requested muscles per organism, at least 1
    pub muscles_nr_limit: usize,
    /// Organism sizes are sampled in [0, size_limit)
    pub size_limit: f32,
    #[serde(default)]
    pub placement: AnchorPlacement,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            organisms_nr: 10,
            anchors_nr_limit: 6,
            muscles_nr_limit: 8,
            size_limit: 100.0,
            placement: AnchorPlacement::default(),
        }
    }
}

impl PopulationConfig {
    /// Reject limits that leave an empty sampling range
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.anchors_nr_limit < 2 {
            return Err(ConfigurationError::AnchorsLimitTooSmall {
                limit: self.anchors_nr_limit,
            });
        }
        if self.muscles_nr_limit < 1 {
            return Err(ConfigurationError::MusclesLimitTooSmall {
                limit: self.muscles_nr_limit,
            });
        }
        if !self.size_limit.is_finite() || self.size_limit <= 0.0 {
            return Err(ConfigurationError::InvalidSizeLimit {
                limit: self.size_limit,
            });
        }
        Ok(())
    }

    /// Number of organisms a population built from this config holds
    pub fn generated_count(&self) -> usize {
        self.organisms_nr.saturating_sub(1)
    }
}

/// Ordered collection of organisms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Population {
    config: PopulationConfig,
    organisms: Vec<Organism>,
}

impl Population {
    /// Generate a population, sampling each organism's anchors, muscles and size
    pub fn new<R: CreatureRng + ?Sized>(
        config: PopulationConfig,
        rng: &mut R,
    ) -> Result<Self, GenerationError> {
        config.validate()?;

        if config.generated_count() == 0 {
            log::warn!(
                "Requested {} organisms, which generates an empty population",
                config.organisms_nr
            );
        }

        let mut organisms = Vec::with_capacity(config.generated_count());
        for _ in 1..config.organisms_nr {
            let anchors_nr = rng.gen_inclusive(2, config.anchors_nr_limit);
            let muscles_nr = rng.gen_inclusive(1, config.muscles_nr_limit);
            let size = rng.gen_f32() * config.size_limit;
            organisms.push(Organism::with_placement(
                anchors_nr,
                muscles_nr,
                size,
                &config.placement,
                rng,
            )?);
        }

        log::info!(
            "Generated population of {} organisms (limits: {} anchors, {} muscles, size {:.1})",
            organisms.len(),
            config.anchors_nr_limit,
            config.muscles_nr_limit,
            config.size_limit
        );

        Ok(Self { config, organisms })
    }

    pub fn config(&self) -> &PopulationConfig {
        &self.config
    }

    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Organism> {
        self.organisms.iter()
    }

    pub fn len(&self) -> usize {
        self.organisms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    pub fn describe(&self) -> PopulationDescription {
        PopulationDescription {
            organisms_nr: self.config.organisms_nr,
            anchors_nr_limit: self.config.anchors_nr_limit,
            muscles_nr_limit: self.config.muscles_nr_limit,
            organisms: self.organisms.iter().map(Organism::describe).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Organism;
    type IntoIter = std::slice::Iter<'a, Organism>;

    fn into_iter(self) -> Self::IntoIter {
        self.organisms.iter()
    }
}
