//! Property tests for the individual contract and the three operators.

mod common;

use common::UIntIndividual;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_bitga::ga::{operators, GaConfig, GaEngine, Genes, Individual};

fn population(values: &[u32]) -> Vec<UIntIndividual> {
    values
        .iter()
        .map(|v| UIntIndividual::from_genes(UIntIndividual::encode(v)))
        .collect()
}

proptest! {
    #[test]
    fn round_trip_law(x in any::<u32>()) {
        prop_assert_eq!(UIntIndividual::decode(&UIntIndividual::encode(&x)), x);
    }

    #[test]
    fn from_genes_keeps_genes_exactly(x in any::<u64>()) {
        let genes = Genes::<32>::from_u64(x);
        let ind = UIntIndividual::from_genes(genes);
        prop_assert_eq!(ind.genes(), &genes);
    }

    #[test]
    fn memoized_fitness_matches_evaluate(x in any::<u32>()) {
        let ind = UIntIndividual::from_genes(UIntIndividual::encode(&x));
        prop_assert_eq!(ind.fitness(), ind.evaluate());
    }

    #[test]
    fn selection_orders_descending(values in prop::collection::vec(any::<u32>(), 2..60)) {
        let mut pop = population(&values);
        operators::select::<32, _>(&mut pop);
        prop_assert_eq!(pop.len(), values.len());
        for pair in pop.windows(2) {
            prop_assert!(pair[0].fitness() >= pair[1].fitness());
        }
    }

    #[test]
    fn selection_is_idempotent(values in prop::collection::vec(any::<u32>(), 2..40)) {
        let mut pop = population(&values);
        operators::select::<32, _>(&mut pop);
        let once = pop.clone();
        operators::select::<32, _>(&mut pop);
        prop_assert_eq!(pop, once);
    }

    #[test]
    fn crossover_commits_offspring(
        values in prop::collection::vec(any::<u32>(), 2..40),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pop = population(&values);
        operators::select::<32, _>(&mut pop);
        let parents = (*pop[0].genes(), *pop[1].genes());

        let cut = operators::crossover::<32, _, _>(&mut pop, &mut rng);
        prop_assert!(cut < 32);
        prop_assert_eq!(pop.len(), values.len());

        let (a, b) = operators::recombine(&parents.0, &parents.1, cut);
        for (i, ind) in pop.iter().enumerate() {
            let expected = if i % 2 == 0 { a } else { b };
            prop_assert_eq!(ind.genes(), &expected);
        }
        // Bits are only moved between the parents, never invented.
        prop_assert_eq!(
            a.count_ones() + b.count_ones(),
            parents.0.count_ones() + parents.1.count_ones()
        );
    }

    #[test]
    fn mutation_changes_exactly_one_bit(
        values in prop::collection::vec(any::<u32>(), 1..40),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pop = population(&values);
        let before = pop.clone();

        let m = operators::mutate::<32, _, _>(&mut pop, &mut rng);
        let diffs: Vec<usize> = before
            .iter()
            .zip(&pop)
            .map(|(old, new)| old.genes().hamming_distance(new.genes()))
            .collect();

        prop_assert_eq!(diffs.iter().sum::<usize>(), 1);
        prop_assert_eq!(diffs[m.individual], 1);
        prop_assert_ne!(pop[m.individual].genes().get(m.bit), before[m.individual].genes().get(m.bit));
        prop_assert_eq!(pop[m.individual].fitness(), pop[m.individual].evaluate());
    }

    #[test]
    fn population_size_is_constant(size in 2usize..30, seed in any::<u64>(), cycles in 0usize..20) {
        let mut ga = GaEngine::<UIntIndividual, 32>::new(
            GaConfig::default().with_population_size(size),
        ).unwrap();
        ga.initialize_random(seed).unwrap();
        prop_assert_eq!(ga.population().len(), size);
        for _ in 0..cycles {
            ga.select();
            ga.crossover().unwrap();
            ga.mutate().unwrap();
            prop_assert_eq!(ga.population().len(), size);
        }
        let report = ga.run_with(u_bitga::ga::StopCondition::Generations(cycles)).unwrap();
        prop_assert_eq!(report.generations, cycles);
        prop_assert_eq!(ga.population().len(), size);
    }
}
