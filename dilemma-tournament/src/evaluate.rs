//! Standalone fitness evaluation - the dispatch contract
//!
//! For the non-game GA variant, fitness is a pure function of one
//! chromosome's genes with no shared state, so disjoint chromosomes can be
//! evaluated by independent workers in any order. An all-zero gene buffer
//! is the protocol's stop sentinel: it means "no further work", never a
//! real job.

use dilemma_core::Population;
use rayon::prelude::*;

/// Counting-ones fitness: the number of 1 bits across all gene bytes.
pub fn evaluate(genes: &[u8]) -> f64 {
    genes.iter().map(|g| g.count_ones()).sum::<u32>() as f64
}

/// An all-zero gene buffer signals a worker that no further work remains.
pub fn is_stop_signal(genes: &[u8]) -> bool {
    genes.iter().all(|&g| g == 0)
}

/// The stop sentinel for a given genome length.
pub fn stop_signal(num_genes: usize) -> Vec<u8> {
    vec![0; num_genes]
}

/// Evaluate every chromosome in the population, optionally in parallel.
/// Per-chromosome evaluations are independent, so the parallel path needs
/// no synchronization beyond the per-slot fitness write.
pub fn evaluate_population(pop: &mut Population, parallel: bool) {
    if parallel {
        pop.chromosomes
            .par_iter_mut()
            .for_each(|c| c.fitness = evaluate(&c.genes));
    } else {
        for c in &mut pop.chromosomes {
            c.fitness = evaluate(&c.genes);
        }
    }
}
