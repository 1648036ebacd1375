//! Genetic operators over a population slice.
//!
//! These are the three steps of one generation. They work on any
//! `&mut [I]` and take the random source explicitly, so the engine (or a
//! caller driving generations by hand) decides who owns the RNG.
//!
//! # Operators
//!
//! - [`select`]: rank by descending fitness — O(P log P)
//! - [`crossover`]: elitist single-point recombination of the top two — O(P·N)
//! - [`mutate`]: one bit flip in one individual — O(N)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::genes::Genes;
use super::types::{Fitness, Individual};
use rand::Rng;

/// Location of a single bit flip applied by [`mutate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    /// Population slot that was replaced.
    pub individual: usize,
    /// Bit index that was complemented.
    pub bit: usize,
}

// ============================================================================
// Selection
// ============================================================================

/// Sorts the population in place, fittest first.
///
/// The sort is stable, so calling it again without changes in between
/// leaves the order untouched. No individual is created or modified.
pub fn select<const N: usize, I: Individual<N>>(population: &mut [I]) {
    population.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
}

// ============================================================================
// Crossover
// ============================================================================

/// Replaces the whole population with offspring of its first two members.
///
/// Call after [`select`] so slots 0 and 1 hold the two fittest parents.
///
/// # Algorithm
///
/// 1. Draw one cut point `c` uniformly from `[0, N-1]`, shared by every pair
/// 2. Child A = parent 1's bits `[0, c)` + parent 2's bits `[c, N)`;
///    child B is the mirror image
/// 3. Fill the population A, B, A, B, ...; with odd `P` the last slot gets A
///
/// Every slot is overwritten before returning. `c = 0` (full swap) is a
/// valid draw and is not filtered out.
///
/// Returns the cut point.
///
/// # Panics
/// Panics if the population has fewer than two individuals or `N == 0`.
pub fn crossover<const N: usize, I: Individual<N>, R: Rng>(
    population: &mut [I],
    rng: &mut R,
) -> usize {
    assert!(population.len() >= 2, "crossover needs at least two parents");
    assert!(N > 0, "gene vectors must not be empty");

    let cut = rng.random_range(0..N);
    let (child_a, child_b) = recombine(population[0].genes(), population[1].genes(), cut);

    for (i, slot) in population.iter_mut().enumerate() {
        let genes = if i % 2 == 0 { child_a } else { child_b };
        *slot = I::from_genes(genes);
    }

    cut
}

/// Single-point recombination: swaps suffixes `[cut, N)` of the two parents.
pub fn recombine<const N: usize>(
    parent1: &Genes<N>,
    parent2: &Genes<N>,
    cut: usize,
) -> (Genes<N>, Genes<N>) {
    let mut a = *parent1;
    let mut b = *parent2;
    Genes::swap_suffix(&mut a, &mut b, cut);
    (a, b)
}

// ============================================================================
// Mutation
// ============================================================================

/// Flips one random bit of one random individual.
///
/// The individual is rebuilt with [`Individual::from_genes`] rather than
/// edited, so any memoized fitness is recomputed.
///
/// # Panics
/// Panics if the population is empty or `N == 0`.
pub fn mutate<const N: usize, I: Individual<N>, R: Rng>(
    population: &mut [I],
    rng: &mut R,
) -> Mutation {
    assert!(!population.is_empty(), "cannot mutate an empty population");
    assert!(N > 0, "gene vectors must not be empty");

    let individual = rng.random_range(0..population.len());
    let bit = rng.random_range(0..N);

    let mut genes = *population[individual].genes();
    genes.flip(bit);
    population[individual] = I::from_genes(genes);

    Mutation { individual, bit }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Clone, Debug, PartialEq)]
    struct Word {
        genes: Genes<16>,
        fitness: u32,
    }

    impl Individual<16> for Word {
        type Value = u16;
        type Fitness = u32;

        fn encode(value: &u16) -> Genes<16> {
            Genes::from_u64(*value as u64)
        }
        fn decode(genes: &Genes<16>) -> u16 {
            genes.to_u64() as u16
        }
        fn from_genes(genes: Genes<16>) -> Self {
            Word {
                fitness: genes.to_u64() as u32,
                genes,
            }
        }
        fn evaluate(&self) -> u32 {
            self.genes.to_u64() as u32
        }
        fn genes(&self) -> &Genes<16> {
            &self.genes
        }
        fn fitness(&self) -> u32 {
            self.fitness
        }
    }

    fn words(values: &[u16]) -> Vec<Word> {
        values
            .iter()
            .map(|v| Word::from_genes(Word::encode(v)))
            .collect()
    }

    fn values(population: &[Word]) -> Vec<u16> {
        population.iter().map(|w| w.value()).collect()
    }

    // ---- Selection ----

    #[test]
    fn test_select_orders_descending() {
        let mut pop = words(&[3, 900, 0, 17, 900, 42]);
        select::<16, _>(&mut pop);
        assert_eq!(values(&pop), vec![900, 900, 42, 17, 3, 0]);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut pop = words(&[5, 1, 5, 9, 1]);
        select::<16, _>(&mut pop);
        let once = pop.clone();
        select::<16, _>(&mut pop);
        assert_eq!(pop, once);
    }

    #[derive(Clone, Debug)]
    struct Scored {
        genes: Genes<1>,
        score: f64,
    }

    impl Individual<1> for Scored {
        type Value = bool;
        type Fitness = f64;

        fn encode(value: &bool) -> Genes<1> {
            Genes::from_bits([*value])
        }
        fn decode(genes: &Genes<1>) -> bool {
            genes.get(0)
        }
        fn from_genes(genes: Genes<1>) -> Self {
            Scored { genes, score: 0.0 }
        }
        fn evaluate(&self) -> f64 {
            self.score
        }
        fn genes(&self) -> &Genes<1> {
            &self.genes
        }
    }

    #[test]
    fn test_select_survives_non_finite_fitness() {
        let mut pop: Vec<Scored> = [1.0, f64::NAN, f64::NEG_INFINITY, 2.0, f64::NAN, f64::INFINITY]
            .iter()
            .map(|&score| Scored {
                genes: Genes::zeros(),
                score,
            })
            .collect();
        select::<1, _>(&mut pop);
        assert_eq!(pop.len(), 6);
        let finite: Vec<f64> = pop
            .iter()
            .map(|s| s.score)
            .filter(|s| !s.is_nan())
            .collect();
        assert_eq!(finite, vec![f64::INFINITY, 2.0, 1.0, f64::NEG_INFINITY]);
    }

    // ---- Crossover ----

    #[test]
    fn test_recombine_swaps_suffix() {
        let p1 = Genes::<16>::from_u64(0xFFFF);
        let p2 = Genes::<16>::zeros();
        let (a, b) = recombine(&p1, &p2, 4);
        assert_eq!(a.to_u64(), 0x000F);
        assert_eq!(b.to_u64(), 0xFFF0);
    }

    #[test]
    fn test_crossover_installs_offspring() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pop = words(&[0xFFFF, 0x0000, 7, 7, 7]);
        let before = pop.clone();

        let cut = crossover::<16, _, _>(&mut pop, &mut rng);
        assert!(cut < 16);
        assert_eq!(pop.len(), 5);
        assert_ne!(pop, before, "offspring must replace the old population");

        let (a, b) = recombine(before[0].genes(), before[1].genes(), cut);
        for (i, w) in pop.iter().enumerate() {
            let expected = if i % 2 == 0 { a } else { b };
            assert_eq!(w.genes, expected, "slot {i}");
            assert_eq!(w.fitness, w.evaluate(), "slot {i} must be rebuilt");
        }
    }

    #[test]
    fn test_crossover_odd_population_ends_with_child_a() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pop = words(&[0xAAAA, 0x5555, 1]);
        let parents = (pop[0].genes, pop[1].genes);
        let cut = crossover::<16, _, _>(&mut pop, &mut rng);
        let (a, _) = recombine(&parents.0, &parents.1, cut);
        assert_eq!(pop[2].genes, a);
    }

    #[test]
    fn test_crossover_identical_parents_clone_them() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pop = words(&[0x1234, 0x1234, 0, 0]);
        crossover::<16, _, _>(&mut pop, &mut rng);
        assert!(pop.iter().all(|w| w.value() == 0x1234));
    }

    #[test]
    fn test_crossover_cut_covers_full_range() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut seen = [false; 16];
        for _ in 0..2000 {
            let mut pop = words(&[0xFFFF, 0]);
            seen[crossover::<16, _, _>(&mut pop, &mut rng)] = true;
        }
        assert!(seen.iter().all(|&s| s), "every cut in 0..16 should occur: {seen:?}");
    }

    #[test]
    #[should_panic(expected = "crossover needs at least two parents")]
    fn test_crossover_single_individual_panics() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut pop = words(&[1]);
        crossover::<16, _, _>(&mut pop, &mut rng);
    }

    // ---- Mutation ----

    #[test]
    fn test_mutate_flips_exactly_one_bit() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let mut pop = words(&[0, 0, 0, 0, 0, 0, 0]);
            let before = pop.clone();
            let m = mutate::<16, _, _>(&mut pop, &mut rng);

            let changed: Vec<usize> = (0..pop.len())
                .filter(|&i| pop[i].genes != before[i].genes)
                .collect();
            assert_eq!(changed, vec![m.individual]);
            assert_eq!(pop[m.individual].genes.hamming_distance(&before[m.individual].genes), 1);
            assert!(pop[m.individual].genes.get(m.bit));
            assert_eq!(pop[m.individual].fitness, 1u32 << m.bit);
        }
    }

    #[test]
    fn test_mutate_refreshes_cached_fitness() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut pop = words(&[0xFFFF, 0xFFFF]);
        let m = mutate::<16, _, _>(&mut pop, &mut rng);
        assert_eq!(pop[m.individual].fitness, 0xFFFF ^ (1u32 << m.bit));
    }
}
