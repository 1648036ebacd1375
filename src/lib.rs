//! Generational genetic algorithm over fixed-width bit strings.
//!
//! The caller supplies a candidate type implementing
//! [`ga::Individual`]: how a domain value is encoded into `N` bits, how it
//! is decoded, and how fit a bit pattern is. The engine evolves a
//! population of such candidates with fitness ranking, elitist
//! single-point crossover and single-bit mutation, stopping after a number
//! of generations, on reaching a fitness threshold, or when a time budget
//! runs out.
//!
//! - **Engine**: [`ga::GaEngine`] owns the population and its random
//!   source; engines share no state and can run on separate threads.
//! - **Operators**: [`ga::operators`] exposes the three steps for callers
//!   who drive generations by hand.
//! - **Restarts**: [`ga::run_restarts`] runs independent seeds, in parallel
//!   with the `parallel` feature.
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem. It
//! contains no domain-specific concepts; encodings and fitness functions
//! are defined by consumers at higher layers.
//!
//! # Features
//!
//! - `parallel`: run restarts on rayon's thread pool
//! - `serde`: `Serialize`/`Deserialize` for configuration, genes and reports

pub mod error;
pub mod ga;

pub use error::GaError;
