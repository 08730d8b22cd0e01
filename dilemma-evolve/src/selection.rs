//! Selection operators for the genetic algorithm
//!
//! Implements roulette-wheel selection: each output slot draws a random
//! value and walks the cumulative relative-fitness wheel, so chromosomes
//! with a larger fitness share are selected proportionally more often.

use dilemma_core::Population;
use rand::Rng;

/// Roulette-wheel selection over the whole population, in place.
///
/// The entire pre-selection population is snapshotted first, so every one
/// of the `num_chromosomes` draws selects from the identical old generation
/// and never sees an already-overwritten slot.
///
/// For each slot a value `rv` is drawn in [0,1) and the cumulative sum of
/// `relative_fitness` is walked from index 0 until it reaches `rv`. If
/// floating-point rounding exhausts the wheel before the sum catches up,
/// the walk clamps at the last index instead of reading past the end.
///
/// Precondition: [`Population::compute_relative_fitness`] ran after the
/// latest evaluation pass.
pub fn select_parents<R: Rng>(pop: &mut Population, rng: &mut R) {
    let snapshot: Vec<Vec<u8>> = pop.chromosomes.iter().map(|c| c.genes.clone()).collect();

    for i in 0..pop.num_chromosomes {
        let rv: f64 = rng.gen();

        let mut k = 0;
        let mut cumulative = pop.relative_fitness[0];
        while rv > cumulative && k + 1 < pop.num_chromosomes {
            k += 1;
            cumulative += pop.relative_fitness[k];
        }

        pop.chromosomes[i].genes.copy_from_slice(&snapshot[k]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dilemma_core::PopulationParams;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn make_population(fitness: &[f64]) -> Population {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let params = PopulationParams {
            num_genes: 2,
            num_chromosomes: fitness.len(),
            crossover_rate: 0.95,
            mutation_rate: 0.001,
        };
        let mut pop = Population::random(params, &mut rng).unwrap();
        for (chromo, &f) in pop.chromosomes.iter_mut().zip(fitness) {
            chromo.fitness = f;
        }
        pop.compute_relative_fitness();
        pop
    }

    #[test]
    fn test_selected_genes_come_from_snapshot() {
        let mut pop = make_population(&[1.0, 2.0, 3.0, 4.0]);
        let before: Vec<Vec<u8>> = pop.chromosomes.iter().map(|c| c.genes.clone()).collect();

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        select_parents(&mut pop, &mut rng);

        for chromo in &pop.chromosomes {
            assert!(
                before.iter().any(|genes| *genes == chromo.genes),
                "selection fabricated a chromosome"
            );
        }
    }

    #[test]
    fn test_all_fitness_on_one_chromosome_selects_only_it() {
        let mut pop = make_population(&[0.0, 0.0, 5.0, 0.0]);
        let winner = pop.chromosomes[2].genes.clone();

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        select_parents(&mut pop, &mut rng);

        assert!(pop.chromosomes.iter().all(|c| c.genes == winner));
    }

    #[test]
    fn test_zero_draw_selects_first_slot() {
        let mut pop = make_population(&[1.0, 1.0, 1.0, 1.0]);
        let first = pop.chromosomes[0].genes.clone();

        // StepRng(0, 0) always yields rv = 0.0
        let mut rng = StepRng::new(0, 0);
        select_parents(&mut pop, &mut rng);

        assert!(pop.chromosomes.iter().all(|c| c.genes == first));
    }

    #[test]
    fn test_wheel_overflow_clamps_to_last_index() {
        let mut pop = make_population(&[1.0, 1.0, 1.0, 1.0]);
        // Force a wheel whose cumulative sum stays below the draw
        pop.relative_fitness = vec![0.2, 0.2, 0.2, 0.2];
        let last = pop.chromosomes[3].genes.clone();

        // StepRng(u64::MAX, 0) yields rv just below 1.0, above the 0.8 total
        let mut rng = StepRng::new(u64::MAX, 0);
        select_parents(&mut pop, &mut rng);

        assert!(pop.chromosomes.iter().all(|c| c.genes == last));
    }
}
