//! Maximizes a 32-bit unsigned integer under each stop condition.
//!
//! ```text
//! RUST_LOG=info cargo run --example simple_uint
//! ```

use std::time::Duration;
use u_bitga::ga::{GaConfig, GaEngine, Genes, Individual};
use u_bitga::GaError;

#[derive(Clone)]
struct UIntIndividual {
    genes: Genes<32>,
}

impl Individual<32> for UIntIndividual {
    type Value = u32;
    type Fitness = f64;

    fn encode(value: &u32) -> Genes<32> {
        Genes::from_u64(*value as u64)
    }
    fn decode(genes: &Genes<32>) -> u32 {
        genes.to_u64() as u32
    }
    fn from_genes(genes: Genes<32>) -> Self {
        Self { genes }
    }
    fn evaluate(&self) -> f64 {
        Self::decode(&self.genes) as f64
    }
    fn genes(&self) -> &Genes<32> {
        &self.genes
    }
}

fn engine(population: usize) -> Result<GaEngine<UIntIndividual, 32>, GaError> {
    let mut ga = GaEngine::new(GaConfig::default().with_population_size(population))?;
    ga.initialize_with(Genes::zeros())?;
    Ok(ga)
}

fn main() -> Result<(), GaError> {
    env_logger::init();

    let gold = u32::MAX;

    let result = engine(100)?.run_generations(1000)?;
    println!("generation-bound: {result} (gold {gold})");

    let result = engine(10)?.run_until_fitness(gold as f64)?;
    println!("fitness-bound:    {result} (gold {gold})");

    let result = engine(100)?.run_for(Duration::from_secs(1))?;
    println!("time-bound:       {result} (gold {gold})");

    Ok(())
}
