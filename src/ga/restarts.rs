//! Independent multi-start runs.
//!
//! Each seed gets its own [`GaEngine`] with its own population and RNG, so
//! the runs share nothing. With the `parallel` feature they execute on
//! rayon's thread pool; otherwise one after another. Either way the
//! results are identical for the same seeds.

use super::config::{GaConfig, InitMode};
use super::runner::{GaEngine, ReportFor, RunReport};
use super::types::{Fitness, Individual};
use crate::error::GaError;
use rand::{Rng, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of [`run_restarts`].
#[derive(Debug, Clone)]
pub struct RestartsResult<V, F, const N: usize> {
    /// Index into `reports` of the best run.
    pub best_index: usize,

    /// One report per seed, in seed order.
    pub reports: Vec<RunReport<V, F, N>>,
}

impl<V, F, const N: usize> RestartsResult<V, F, N> {
    /// The report with the highest best fitness.
    pub fn best(&self) -> &RunReport<V, F, N> {
        &self.reports[self.best_index]
    }
}

/// Runs one engine per seed with `config`'s stop condition and keeps the best.
///
/// Ties go to the earliest seed. Returns the first error if any engine
/// fails to build or run (configuration errors fail every engine alike).
pub fn run_restarts<I, const N: usize, R>(
    config: &GaConfig,
    init: InitMode<N>,
    seeds: &[u64],
) -> Result<RestartsResult<I::Value, I::Fitness, N>, GaError>
where
    I: Individual<N>,
    I::Value: Send,
    R: Rng + SeedableRng + Send,
{
    if seeds.is_empty() {
        return Err(GaError::NoSeeds);
    }

    let single = |seed: u64| -> Result<ReportFor<I, N>, GaError> {
        let mut engine = GaEngine::<I, N, R>::new(config.clone())?;
        engine.initialize(init, Some(seed))?;
        engine.run()
    };

    #[cfg(feature = "parallel")]
    let reports: Result<Vec<_>, GaError> = seeds.par_iter().map(|&s| single(s)).collect();
    #[cfg(not(feature = "parallel"))]
    let reports: Result<Vec<_>, GaError> = seeds.iter().map(|&s| single(s)).collect();

    let reports = reports?;

    let mut best_index = 0;
    for (i, report) in reports.iter().enumerate().skip(1) {
        if report.best_fitness.total_cmp(&reports[best_index].best_fitness).is_gt() {
            best_index = i;
        }
    }

    log::info!(
        "{} restarts finished, best from seed {} with fitness {:?}",
        reports.len(),
        seeds[best_index],
        reports[best_index].best_fitness
    );

    Ok(RestartsResult {
        best_index,
        reports,
    })
}
