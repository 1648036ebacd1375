//! Shared test individual: a 32-bit unsigned integer scored by its value.

use u_bitga::ga::{Genes, Individual};

#[derive(Clone, Debug, PartialEq)]
pub struct UIntIndividual {
    genes: Genes<32>,
    fitness: f64,
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
        let fitness = Self::decode(&genes) as f64;
        Self { genes, fitness }
    }

    fn evaluate(&self) -> f64 {
        Self::decode(&self.genes) as f64
    }

    fn genes(&self) -> &Genes<32> {
        &self.genes
    }

    fn fitness(&self) -> f64 {
        self.fitness
    }
}
