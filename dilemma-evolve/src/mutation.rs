//! Mutation operator for the genetic algorithm
//!
//! Every bit of every chromosome is independently tested each generation,
//! so a pass costs O(population x genome bits) random draws. This dominates
//! per-generation cost at realistic genome sizes.

use dilemma_core::{Population, GENE_BITS};
use rand::Rng;

/// Independent per-bit mutation, in place.
///
/// Bits are visited chromosome-major, then byte-major, then MSB-first
/// within the byte; each draws its own `rv` and flips via XOR iff
/// `rv < mutation_rate` (boundary exclusive, unlike crossover).
pub fn mutate<R: Rng>(pop: &mut Population, rng: &mut R) {
    for chromo in &mut pop.chromosomes {
        for gene in &mut chromo.genes {
            for bit in 0..GENE_BITS {
                let rv: f64 = rng.gen();
                if rv < pop.mutation_rate {
                    *gene ^= 1 << (GENE_BITS - bit - 1);
                }
            }
        }
    }
}
