//! Error types for organism and population generation
//!
//! All errors are precondition violations detected at construction time.

use thiserror::Error;

/// Anchor/muscle counts or endpoints that make a valid muscle graph impossible
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TopologyError {
    #[error("organism needs at least 2 anchors to connect muscles, got {anchors_nr}")]
    TooFewAnchors { anchors_nr: usize },
    #[error("muscle {muscle} references anchor {anchor} outside 1..={anchors_nr}")]
    AnchorOutOfRange {
        muscle: usize,
        anchor: usize,
        anchors_nr: usize,
    },
    #[error("muscle {muscle} connects anchor {anchor} to itself")]
    SelfConnection { muscle: usize, anchor: usize },
    #[error("organism size must be finite and non-negative, got {size}")]
    InvalidSize { size: f32 },
}

/// Population limits that produce an empty sampling range
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("anchors_nr_limit must be at least 2, got {limit}")]
    AnchorsLimitTooSmall { limit: usize },
    #[error("muscles_nr_limit must be at least 1, got {limit}")]
    MusclesLimitTooSmall { limit: usize },
    #[error("size_limit must be finite and positive, got {limit}")]
    InvalidSizeLimit { limit: f32 },
}

/// Any failure while generating a population
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GenerationError {
    #[error("invalid topology: {0}")]
    InvalidTopology(#[from] TopologyError),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),
}
