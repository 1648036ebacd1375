//! Error type shared by the engine and its configuration.

use thiserror::Error;

/// Errors reported by [`GaEngine`](crate::ga::GaEngine) and
/// [`GaConfig::validate`](crate::ga::GaConfig::validate).
///
/// All of these are raised before any generation runs. Once a run has
/// started, the loop itself cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GaError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("gene vector length must be at least 1")]
    EmptyGenes,

    #[error("mutations_per_generation must be at least 1")]
    NoMutation,

    #[error("invalid stop condition: {0}")]
    InvalidStopCondition(String),

    #[error("population has not been initialized")]
    Uninitialized,

    #[error("at least one seed is required")]
    NoSeeds,

    #[error("entropy source unavailable: {0}")]
    Entropy(String),
}
