//! Dilemma Evolution - genetic operators for bit-string populations
//!
//! This crate provides the per-generation operators:
//! - Roulette-wheel selection against a pre-generation snapshot
//! - Single-point crossover at bit granularity
//! - Independent per-bit mutation
//!
//! All randomness flows through an explicit `Rng` supplied by the caller;
//! a seeded generator reproduces a run draw for draw. One generation draws
//! in a fixed order: all selection values, then per-pair crossover values,
//! then per-bit mutation values.

mod crossover;
mod mutation;
mod selection;

pub use crossover::{cross_pair, crossover, select_bit};
pub use mutation::mutate;
pub use selection::select_parents;

use dilemma_core::Population;
use rand::Rng;

/// Advance the population by one generation: select, cross, mutate,
/// in that fixed order.
///
/// Precondition: [`Population::compute_relative_fitness`] ran after the
/// latest evaluation pass.
pub fn evolve<R: Rng>(pop: &mut Population, rng: &mut R) {
    select_parents(pop, rng);
    crossover(pop, rng);
    mutate(pop, rng);
}
