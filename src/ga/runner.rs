//! GA engine and its run loop.
//!
//! [`GaEngine`] owns one population and one random source. A run repeats
//! Selection → Crossover → Mutation until its [`StopCondition`] fires, then
//! decodes the fittest individual.

use super::config::{GaConfig, InitMode, StopCondition};
use super::genes::Genes;
use super::operators;
use super::types::{Fitness, Individual};
use crate::error::GaError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Largest history buffer reserved up front for a generation-bound run.
const HISTORY_PREALLOC_LIMIT: usize = 1 << 16;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The configured number of generations was completed.
    GenerationLimit,
    /// The best fitness met the threshold.
    FitnessReached,
    /// The time budget ran out.
    TimeLimit,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport<V, F, const N: usize> {
    /// Decoded value of the best individual after the final Selection.
    pub best: V,

    /// Genes of that individual.
    pub best_genes: Genes<N>,

    /// Its fitness.
    pub best_fitness: F,

    /// Completed Selection/Crossover/Mutation cycles.
    pub generations: usize,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,

    /// What ended the run.
    pub reason: StopReason,

    /// Best fitness after every Selection, including the final one.
    ///
    /// Empty when [`GaConfig::record_history`] is off.
    pub fitness_history: Vec<f64>,
}

/// Report type produced by an engine over individual `I`.
pub type ReportFor<I, const N: usize> =
    RunReport<<I as Individual<N>>::Value, <I as Individual<N>>::Fitness, N>;

/// A generational GA over `N`-bit individuals of type `I`.
///
/// `R` is the pseudo-random source. It is owned by the engine, so separate
/// engines never share random state and may run on separate threads.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{GaConfig, GaEngine, Genes, Individual};
///
/// #[derive(Clone)]
/// struct Byte(Genes<8>);
///
/// impl Individual<8> for Byte {
///     type Value = u8;
///     type Fitness = u32;
///     fn encode(v: &u8) -> Genes<8> { Genes::from_u64(*v as u64) }
///     fn decode(g: &Genes<8>) -> u8 { g.to_u64() as u8 }
///     fn from_genes(g: Genes<8>) -> Self { Byte(g) }
///     fn evaluate(&self) -> u32 { self.0.to_u64() as u32 }
///     fn genes(&self) -> &Genes<8> { &self.0 }
/// }
///
/// let mut ga = GaEngine::<Byte, 8>::new(GaConfig::default().with_population_size(20))?;
/// ga.initialize_random(42)?;
/// let best = ga.run_until_fitness(255.0)?;
/// assert_eq!(best, 255);
/// # Ok::<(), u_bitga::GaError>(())
/// ```
pub struct GaEngine<I, const N: usize, R = StdRng>
where
    I: Individual<N>,
    R: Rng + SeedableRng,
{
    config: GaConfig,
    population: Vec<I>,
    rng: Option<R>,
}

impl<I, const N: usize, R> GaEngine<I, N, R>
where
    I: Individual<N>,
    R: Rng + SeedableRng,
{
    /// Creates an engine with an empty population.
    ///
    /// Call one of the `initialize_*` methods before running.
    pub fn new(config: GaConfig) -> Result<Self, GaError> {
        if N == 0 {
            return Err(GaError::EmptyGenes);
        }
        config.validate()?;
        Ok(Self {
            population: Vec::with_capacity(config.population_size),
            config,
            rng: None,
        })
    }

    // ---- Initialization ----

    /// All-zero genes, RNG seeded from OS entropy.
    pub fn initialize_zeroed(&mut self) -> Result<(), GaError> {
        self.initialize(InitMode::Zeroed, None)
    }

    /// Uniformly random genes, RNG seeded with `seed`.
    pub fn initialize_random(&mut self, seed: u64) -> Result<(), GaError> {
        self.initialize(InitMode::Random, Some(seed))
    }

    /// Every individual set to `genes`, RNG seeded from OS entropy.
    pub fn initialize_with(&mut self, genes: Genes<N>) -> Result<(), GaError> {
        self.initialize(InitMode::Fixed(genes), None)
    }

    /// Every individual set to `genes`, RNG seeded with `seed`.
    pub fn initialize_with_seeded(&mut self, genes: Genes<N>, seed: u64) -> Result<(), GaError> {
        self.initialize(InitMode::Fixed(genes), Some(seed))
    }

    /// (Re)builds the population.
    ///
    /// With `seed == None` the RNG is seeded from the operating system; if
    /// that fails, the engine is left exactly as it was.
    pub fn initialize(&mut self, mode: InitMode<N>, seed: Option<u64>) -> Result<(), GaError> {
        let mut rng = match seed {
            Some(seed) => R::seed_from_u64(seed),
            None => R::try_from_os_rng().map_err(|e| GaError::Entropy(e.to_string()))?,
        };

        let size = self.config.population_size;
        let population: Vec<I> = match mode {
            InitMode::Zeroed => vec![I::from_genes(Genes::zeros()); size],
            InitMode::Fixed(genes) => vec![I::from_genes(genes); size],
            InitMode::Random => (0..size)
                .map(|_| I::from_genes(Genes::random(&mut rng)))
                .collect(),
        };

        log::debug!(
            "initialized {} individuals of {} bits ({:?}, seed {:?})",
            size,
            N,
            mode,
            seed
        );

        self.population = population;
        self.rng = Some(rng);
        Ok(())
    }

    /// Whether an `initialize_*` call has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.rng.is_some()
    }

    // ---- Accessors ----

    /// The configuration this engine was built with.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The current population, in whatever order the last operator left it.
    pub fn population(&self) -> &[I] {
        &self.population
    }

    /// The fittest individual currently in the population.
    ///
    /// Does not reorder the population. `None` before initialization.
    pub fn best(&self) -> Option<&I> {
        self.population
            .iter()
            .max_by(|a, b| a.fitness().total_cmp(&b.fitness()))
    }

    // ---- Operators ----

    /// Sorts the population fittest-first. See [`operators::select`].
    pub fn select(&mut self) {
        operators::select::<N, I>(&mut self.population);
    }

    /// Replaces the population with offspring of slots 0 and 1.
    /// See [`operators::crossover`]. Returns the cut point.
    pub fn crossover(&mut self) -> Result<usize, GaError> {
        let rng = self.rng.as_mut().ok_or(GaError::Uninitialized)?;
        Ok(operators::crossover::<N, I, R>(&mut self.population, rng))
    }

    /// Flips one bit of one individual. See [`operators::mutate`].
    pub fn mutate(&mut self) -> Result<operators::Mutation, GaError> {
        let rng = self.rng.as_mut().ok_or(GaError::Uninitialized)?;
        Ok(operators::mutate::<N, I, R>(&mut self.population, rng))
    }

    // ---- Runs ----

    /// Runs with the configured stop condition.
    pub fn run(&mut self) -> Result<ReportFor<I, N>, GaError> {
        let stop = self.config.stop_condition;
        self.run_with_cancel(stop, None)
    }

    /// Runs with an explicit stop condition.
    pub fn run_with(&mut self, stop: StopCondition) -> Result<ReportFor<I, N>, GaError> {
        self.run_with_cancel(stop, None)
    }

    /// Runs exactly `generations` cycles and returns the decoded best.
    pub fn run_generations(&mut self, generations: usize) -> Result<I::Value, GaError> {
        self.run_with(StopCondition::Generations(generations))
            .map(|report| report.best)
    }

    /// Runs until the best fitness is `>= threshold` and returns the decoded best.
    ///
    /// Never returns if the threshold is unreachable; see
    /// [`StopCondition::FitnessThreshold`].
    pub fn run_until_fitness(&mut self, threshold: f64) -> Result<I::Value, GaError> {
        self.run_with(StopCondition::FitnessThreshold(threshold))
            .map(|report| report.best)
    }

    /// Runs until `budget` has elapsed and returns the decoded best.
    pub fn run_for(&mut self, budget: Duration) -> Result<I::Value, GaError> {
        self.run_with(StopCondition::TimeLimit(budget))
            .map(|report| report.best)
    }

    /// Runs with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before its next generation and returns the best individual so far.
    pub fn run_with_cancel(
        &mut self,
        stop: StopCondition,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<ReportFor<I, N>, GaError> {
        stop.validate()?;
        let mut rng = self.rng.take().ok_or(GaError::Uninitialized)?;
        let report = self.evolve(stop, cancel.as_deref(), &mut rng);
        self.rng = Some(rng);
        Ok(report)
    }

    fn evolve(
        &mut self,
        stop: StopCondition,
        cancel: Option<&AtomicBool>,
        rng: &mut R,
    ) -> ReportFor<I, N> {
        log::info!(
            "GA run started: {} individuals x {} bits, {:?}",
            self.population.len(),
            N,
            stop
        );

        let start = Instant::now();
        let mut generations = 0usize;
        let mut history = Vec::with_capacity(self.history_capacity(stop));
        let mut best_so_far = f64::NEG_INFINITY;

        let reason = loop {
            if stop.exhausted(generations, start.elapsed()) {
                operators::select::<N, I>(&mut self.population);
                self.record(&mut history);
                break match stop {
                    StopCondition::TimeLimit(_) => StopReason::TimeLimit,
                    _ => StopReason::GenerationLimit,
                };
            }
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                operators::select::<N, I>(&mut self.population);
                self.record(&mut history);
                break StopReason::Cancelled;
            }

            operators::select::<N, I>(&mut self.population);
            let top = self.population[0].fitness().to_f64();
            self.record(&mut history);

            if top > best_so_far {
                log::debug!("generation {generations}: best fitness {top}");
                best_so_far = top;
            }
            if stop.satisfied(top) {
                break StopReason::FitnessReached;
            }

            operators::crossover::<N, I, R>(&mut self.population, rng);
            for _ in 0..self.config.mutations_per_generation {
                operators::mutate::<N, I, R>(&mut self.population, rng);
            }

            generations += 1;
            log::trace!("generation {generations} complete");
        };

        let winner = &self.population[0];
        let report = RunReport {
            best: winner.value(),
            best_genes: *winner.genes(),
            best_fitness: winner.fitness(),
            generations,
            elapsed: start.elapsed(),
            reason,
            fitness_history: history,
        };

        log::info!(
            "GA run finished after {} generations in {:?} ({:?}), best fitness {:?}",
            report.generations,
            report.elapsed,
            report.reason,
            report.best_fitness
        );

        report
    }

    /// Preallocation for the fitness history; unbounded runs grow on demand.
    fn history_capacity(&self, stop: StopCondition) -> usize {
        if !self.config.record_history {
            return 0;
        }
        stop.selection_bound().map_or(0, |n| n.min(HISTORY_PREALLOC_LIMIT))
    }

    fn record(&self, history: &mut Vec<f64>) {
        if self.config.record_history {
            history.push(self.population[0].fitness().to_f64());
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
