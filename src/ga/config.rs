//! GA configuration.
//!
//! [`GaConfig`] holds the parameters fixed for the lifetime of one
//! [`GaEngine`](super::GaEngine). [`StopCondition`] selects how a run
//! terminates and [`InitMode`] how the first population is built.

use super::genes::Genes;
use crate::error::GaError;
use std::time::Duration;

/// How a run decides to stop.
///
/// All variants share one loop body (Selection, Crossover, Mutation); they
/// differ in where the test happens:
///
/// - [`Generations`](StopCondition::Generations) and
///   [`TimeLimit`](StopCondition::TimeLimit) are checked at the top of each
///   iteration, and the run ends with one extra Selection.
/// - [`FitnessThreshold`](StopCondition::FitnessThreshold) is checked right
///   after each Selection, so the reported best is the individual that
///   reached the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopCondition {
    /// Run exactly this many generations, even if the optimum shows up early.
    Generations(usize),

    /// Run until the best fitness is `>=` this value.
    ///
    /// **Hazard**: if no reachable gene vector scores this high, the run
    /// never ends. Use [`GaEngine::run_with_cancel`](super::GaEngine::run_with_cancel)
    /// when feasibility is not known.
    FitnessThreshold(f64),

    /// Run until this much wall-clock time has elapsed.
    ///
    /// Checked once per generation, so a run overshoots by at most one
    /// generation's worth of work.
    TimeLimit(Duration),
}

impl StopCondition {
    /// Time limit given in (fractional) seconds.
    ///
    /// Negative or non-finite values saturate to zero / `Duration::MAX`.
    pub fn time_limit_secs(secs: f64) -> Self {
        let budget = if secs.is_nan() || secs <= 0.0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
        };
        StopCondition::TimeLimit(budget)
    }

    /// Checked before Selection: has the generation or time budget run out?
    pub(crate) fn exhausted(&self, generations: usize, elapsed: Duration) -> bool {
        match *self {
            StopCondition::Generations(limit) => generations >= limit,
            StopCondition::TimeLimit(budget) => elapsed >= budget,
            StopCondition::FitnessThreshold(_) => false,
        }
    }

    /// Checked after Selection: does the top individual meet the threshold?
    pub(crate) fn satisfied(&self, best_fitness: f64) -> bool {
        match *self {
            StopCondition::FitnessThreshold(threshold) => best_fitness >= threshold,
            _ => false,
        }
    }

    /// Number of Selections a run performs, when known in advance.
    pub(crate) fn selection_bound(&self) -> Option<usize> {
        match *self {
            StopCondition::Generations(limit) => Some(limit.saturating_add(1)),
            _ => None,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), GaError> {
        if let StopCondition::FitnessThreshold(threshold) = *self {
            if threshold.is_nan() {
                return Err(GaError::InvalidStopCondition(
                    "fitness threshold is NaN and can never be reached".into(),
                ));
            }
            if threshold == f64::INFINITY {
                log::warn!("fitness threshold is +inf; the run only ends if a fitness of +inf appears");
            }
        }
        Ok(())
    }
}

impl Default for StopCondition {
    fn default() -> Self {
        StopCondition::Generations(1000)
    }
}

/// How the initial population is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitMode<const N: usize> {
    /// Every individual starts with all bits cleared.
    Zeroed,

    /// Every bit of every individual is drawn independently with probability ½.
    Random,

    /// Every individual starts as a copy of the given genes.
    Fixed(Genes<N>),
}

/// Configuration for the GA engine.
///
/// # Defaults
///
/// ```
/// use u_bitga::ga::{GaConfig, StopCondition};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.stop_condition, StopCondition::Generations(1000));
/// assert_eq!(config.mutations_per_generation, 1);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::{GaConfig, StopCondition};
///
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_stop_condition(StopCondition::FitnessThreshold(255.0))
///     .with_history(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population (`P`, at least 2).
    pub population_size: usize,

    /// Stop condition used by [`GaEngine::run`](super::GaEngine::run).
    pub stop_condition: StopCondition,

    /// Bit flips applied per generation, each to an independently chosen
    /// individual and bit.
    ///
    /// The default of 1 is very weak pressure for large `N` or `P`; raise it
    /// when the search stalls.
    pub mutations_per_generation: usize,

    /// Whether runs record the best fitness after every Selection.
    ///
    /// The history holds one `f64` per generation plus one. Fitness- and
    /// time-bound runs have no fixed generation count, so their history grows
    /// for as long as the run lasts; an unreachable threshold turns the
    /// endless run into an endless allocation. Turn this off for long
    /// unbounded runs.
    pub record_history: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            stop_condition: StopCondition::default(),
            mutations_per_generation: 1,
            record_history: true,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the stop condition used by `run()`.
    pub fn with_stop_condition(mut self, stop: StopCondition) -> Self {
        self.stop_condition = stop;
        self
    }

    /// Shorthand for `with_stop_condition(StopCondition::Generations(n))`.
    pub fn with_max_generations(self, n: usize) -> Self {
        self.with_stop_condition(StopCondition::Generations(n))
    }

    /// Shorthand for `with_stop_condition(StopCondition::FitnessThreshold(f))`.
    pub fn with_fitness_threshold(self, threshold: f64) -> Self {
        self.with_stop_condition(StopCondition::FitnessThreshold(threshold))
    }

    /// Shorthand for `with_stop_condition(StopCondition::TimeLimit(d))`.
    pub fn with_time_limit(self, budget: Duration) -> Self {
        self.with_stop_condition(StopCondition::TimeLimit(budget))
    }

    /// Sets the number of bit flips per generation.
    pub fn with_mutations_per_generation(mut self, n: usize) -> Self {
        self.mutations_per_generation = n;
        self
    }

    /// Enables or disables fitness history recording.
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 2 {
            return Err(GaError::PopulationTooSmall(self.population_size));
        }
        if self.mutations_per_generation == 0 {
            return Err(GaError::NoMutation);
        }
        self.stop_condition.validate()
    }
}
