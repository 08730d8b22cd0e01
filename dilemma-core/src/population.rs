//! Population - an even-sized collection of chromosomes plus GA parameters
//!
//! The population exclusively owns its chromosomes and the derived fitness
//! statistics. Invariants (even size, genome length >= 1, rates in [0,1])
//! are enforced at construction; the operators assume them afterwards.

use rand::Rng;

use crate::chromosome::Chromosome;
use crate::error::GaError;

/// Validated construction parameters for a [`Population`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopulationParams {
    /// Genome length in gene bytes
    pub num_genes: usize,
    /// Population size; must be even so crossover pairs cleanly
    pub num_chromosomes: usize,
    /// Probability of crossing each adjacent pair, in [0,1]
    pub crossover_rate: f64,
    /// Probability of flipping each individual bit, in [0,1]
    pub mutation_rate: f64,
}

impl PopulationParams {
    /// Reject invariant violations up front. The engine never clamps.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.num_genes == 0 {
            return Err(GaError::invalid("num_genes", "genome length must be >= 1"));
        }
        if self.num_chromosomes < 2 || self.num_chromosomes % 2 != 0 {
            return Err(GaError::invalid(
                "num_chromosomes",
                format!("population size must be even and >= 2, got {}", self.num_chromosomes),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(GaError::invalid(
                "crossover_rate",
                format!("rate must be in [0,1], got {}", self.crossover_rate),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::invalid(
                "mutation_rate",
                format!("rate must be in [0,1], got {}", self.mutation_rate),
            ));
        }
        Ok(())
    }
}

/// A population of chromosomes with derived fitness statistics
#[derive(Clone, Debug)]
pub struct Population {
    /// Genome length in gene bytes
    pub num_genes: usize,
    /// Number of chromosomes (even)
    pub num_chromosomes: usize,
    /// Crossover probability per adjacent pair
    pub crossover_rate: f64,
    /// Mutation probability per bit
    pub mutation_rate: f64,
    /// The chromosomes, exclusively owned
    pub chromosomes: Vec<Chromosome>,
    /// Sum of all fitnesses, recomputed by [`Population::compute_relative_fitness`]
    pub fitness_total: f64,
    /// `relative_fitness[i] = chromosomes[i].fitness / fitness_total`
    pub relative_fitness: Vec<f64>,
}

impl Population {
    /// Create a population of uniformly random chromosomes.
    pub fn random<R: Rng>(params: PopulationParams, rng: &mut R) -> Result<Self, GaError> {
        params.validate()?;

        let chromosomes = (0..params.num_chromosomes)
            .map(|_| Chromosome::random(params.num_genes, rng))
            .collect();

        Ok(Self {
            num_genes: params.num_genes,
            num_chromosomes: params.num_chromosomes,
            crossover_rate: params.crossover_rate,
            mutation_rate: params.mutation_rate,
            chromosomes,
            fitness_total: 0.0,
            relative_fitness: vec![0.0; params.num_chromosomes],
        })
    }

    /// Zero every chromosome's fitness before an evaluation pass.
    pub fn reset_fitness(&mut self) {
        for chromo in &mut self.chromosomes {
            chromo.fitness = 0.0;
        }
    }

    /// Recompute `fitness_total` and every `relative_fitness[i]`.
    ///
    /// Precondition: fitnesses were already accumulated by an evaluator.
    /// When the total is exactly zero the wheel falls back to uniform
    /// weights (1/n each) instead of dividing by zero.
    pub fn compute_relative_fitness(&mut self) {
        self.fitness_total = self.chromosomes.iter().map(|c| c.fitness).sum();

        if self.fitness_total == 0.0 {
            let uniform = 1.0 / self.num_chromosomes as f64;
            self.relative_fitness.fill(uniform);
            return;
        }

        for (rate, chromo) in self.relative_fitness.iter_mut().zip(&self.chromosomes) {
            *rate = chromo.fitness / self.fitness_total;
        }
    }

    /// Best fitness in the population, or 0 when empty.
    pub fn best_fitness(&self) -> f64 {
        self.chromosomes
            .iter()
            .map(|c| c.fitness)
            .fold(f64::NEG_INFINITY, f64::max)
            .max(0.0)
    }

    /// Mean fitness across the population.
    pub fn mean_fitness(&self) -> f64 {
        if self.chromosomes.is_empty() {
            0.0
        } else {
            self.chromosomes.iter().map(|c| c.fitness).sum::<f64>()
                / self.chromosomes.len() as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn valid_params() -> PopulationParams {
        PopulationParams {
            num_genes: 2,
            num_chromosomes: 4,
            crossover_rate: 0.95,
            mutation_rate: 0.001,
        }
    }

    #[test]
    fn test_validate_accepts_reference_defaults() {
        assert!(valid_params().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_odd_population() {
        let params = PopulationParams {
            num_chromosomes: 5,
            ..valid_params()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_genes() {
        let params = PopulationParams {
            num_genes: 0,
            ..valid_params()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_rates() {
        let too_high = PopulationParams {
            crossover_rate: 1.5,
            ..valid_params()
        };
        assert!(too_high.validate().is_err());

        let negative = PopulationParams {
            mutation_rate: -0.1,
            ..valid_params()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_random_population_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let pop = Population::random(valid_params(), &mut rng).unwrap();

        assert_eq!(pop.chromosomes.len(), 4);
        assert!(pop.chromosomes.iter().all(|c| c.num_genes() == 2));
        assert_eq!(pop.relative_fitness.len(), 4);
        assert_eq!(pop.fitness_total, 0.0);
    }

    #[test]
    fn test_relative_fitness_sums_to_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut pop = Population::random(valid_params(), &mut rng).unwrap();

        for (i, chromo) in pop.chromosomes.iter_mut().enumerate() {
            chromo.fitness = (i + 1) as f64;
        }
        pop.compute_relative_fitness();

        assert_eq!(pop.fitness_total, 10.0);
        let sum: f64 = pop.relative_fitness.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!((pop.relative_fitness[3] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_zero_total_fitness_falls_back_to_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut pop = Population::random(valid_params(), &mut rng).unwrap();

        pop.compute_relative_fitness();

        assert_eq!(pop.fitness_total, 0.0);
        assert!(pop.relative_fitness.iter().all(|&r| r == 0.25));
    }

    #[test]
    fn test_reset_fitness() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut pop = Population::random(valid_params(), &mut rng).unwrap();

        for chromo in &mut pop.chromosomes {
            chromo.fitness = 9.0;
        }
        pop.reset_fitness();

        assert!(pop.chromosomes.iter().all(|c| c.fitness == 0.0));
    }

    #[test]
    fn test_fitness_statistics() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut pop = Population::random(valid_params(), &mut rng).unwrap();

        for (i, chromo) in pop.chromosomes.iter_mut().enumerate() {
            chromo.fitness = i as f64;
        }

        assert_eq!(pop.best_fitness(), 3.0);
        assert_eq!(pop.mean_fitness(), 1.5);
    }
}
