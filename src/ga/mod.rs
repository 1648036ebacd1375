//! Genetic Algorithm engine over fixed-width bit strings.
//!
//! A generic, domain-agnostic GA built on trait-based abstractions. Users
//! plug in their problem by implementing [`Individual`], which says how a
//! domain value maps to an `N`-bit [`Genes`] vector and how fit it is.
//!
//! # Core Traits
//!
//! - [`Individual`]: encode/decode, construct-from-genes, fitness
//! - [`Fitness`]: score type with a total order for ranking
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, stop condition, mutation count
//! - [`GaEngine`]: owns the population and RNG, runs the generational loop
//! - [`RunReport`]: decoded best value plus run statistics
//!
//! # Submodules
//!
//! - [`operators`]: Selection, Crossover and Mutation on a population slice
//! - [`restarts`]: independent multi-seed runs, rayon-backed with `parallel`
//!
//! # One generation
//!
//! ```text
//! Selection (sort, fittest first)
//!   → Crossover (slots 0 and 1 breed the whole next population)
//!   → Mutation (one bit flip, repeated `mutations_per_generation` times)
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod genes;
pub mod operators;
pub mod restarts;
mod runner;
mod types;

pub use config::{GaConfig, InitMode, StopCondition};
pub use genes::Genes;
pub use operators::Mutation;
pub use restarts::{run_restarts, RestartsResult};
pub use runner::{GaEngine, ReportFor, RunReport, StopReason};
pub use types::{Fitness, Individual};
