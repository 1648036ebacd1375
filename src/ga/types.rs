//! Core trait definitions for the GA engine.
//!
//! [`Individual`] is the contract between the generic engine and a
//! problem-specific candidate type; [`Fitness`] describes the score it
//! reports.

use super::genes::Genes;
use std::cmp::Ordering;

/// Marker trait for fitness values.
///
/// Higher fitness is better (maximization). For minimization problems,
/// negate the score.
///
/// Selection orders individuals with [`total_cmp`](Fitness::total_cmp),
/// which is total even for floats: `NaN` is placed according to IEEE-754
/// totalOrder (a positive `NaN` ranks above `+inf`). Such values are not
/// rejected or rewritten, but where they end up in a ranking carries no
/// meaning.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Converts the fitness to `f64` for thresholds, history and logging.
    fn to_f64(self) -> f64;

    /// Total ordering used by selection.
    fn total_cmp(&self, other: &Self) -> Ordering;
}

impl Fitness for f64 {
    fn to_f64(self) -> f64 {
        self
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

impl Fitness for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }
}

macro_rules! impl_integer_fitness {
    ($($t:ty),*) => {
        $(
            impl Fitness for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_integer_fitness!(u32, u64, i32, i64);

/// A candidate solution encoded as an `N`-bit gene vector.
///
/// Implementors are value types: cloning copies the genes and nothing is
/// shared between individuals. Every method must be free of side effects;
/// the engine calls them in any order and as often as it likes.
///
/// # Laws
///
/// - `decode(&encode(&x)) == x` for every representable `x`. The engine
///   does not check this.
/// - `from_genes(g).genes() == &g`, with no normalization.
/// - [`evaluate`](Individual::evaluate) is defined for **every** bit
///   pattern, including ones `encode` never produces, because crossover
///   and mutation reach them.
/// - [`fitness`](Individual::fitness) equals `evaluate()`; it may be a
///   value memoized at construction.
///
/// # Implementing
///
/// ```
/// use u_bitga::ga::{Genes, Individual};
///
/// #[derive(Clone)]
/// struct Byte {
///     genes: Genes<8>,
/// }
///
/// impl Individual<8> for Byte {
///     type Value = u8;
///     type Fitness = u32;
///
///     fn encode(value: &u8) -> Genes<8> { Genes::from_u64(*value as u64) }
///     fn decode(genes: &Genes<8>) -> u8 { genes.to_u64() as u8 }
///     fn from_genes(genes: Genes<8>) -> Self { Byte { genes } }
///     fn evaluate(&self) -> u32 { self.genes.count_ones() as u32 }
///     fn genes(&self) -> &Genes<8> { &self.genes }
/// }
///
/// let b = Byte::from_genes(Byte::encode(&0b1011));
/// assert_eq!(b.value(), 0b1011);
/// assert_eq!(b.fitness(), 3);
/// ```
pub trait Individual<const N: usize>: Clone + Send + Sync {
    /// The domain value this individual encodes.
    type Value;

    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Encodes a domain value into a gene vector.
    fn encode(value: &Self::Value) -> Genes<N>;

    /// Decodes a gene vector back into a domain value.
    fn decode(genes: &Genes<N>) -> Self::Value;

    /// Builds an individual carrying exactly `genes`.
    fn from_genes(genes: Genes<N>) -> Self;

    /// Computes fitness from this individual's genes.
    fn evaluate(&self) -> Self::Fitness;

    /// Returns the genes.
    fn genes(&self) -> &Genes<N>;

    /// Returns the fitness.
    ///
    /// Override to return a cached score; the default re-evaluates.
    fn fitness(&self) -> Self::Fitness {
        self.evaluate()
    }

    /// Decodes this individual's own genes.
    fn value(&self) -> Self::Value {
        Self::decode(self.genes())
    }
}
