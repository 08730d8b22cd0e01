//! Textual report - diagnostic view of a population
//!
//! Renders each chromosome's genes in MSB-first binary alongside its
//! fitness and relative fitness. Read-only; not a persisted format.

use anyhow::Result;
use dilemma_core::Population;
use serde::Serialize;

/// One chromosome's row in the report
#[derive(Debug, Serialize)]
pub struct ChromosomeReport {
    pub index: usize,
    /// MSB-first binary genes, one 8-bit group per gene byte
    pub genes: String,
    pub fitness: f64,
    pub relative_fitness: f64,
}

/// Snapshot of population statistics after an evaluation pass
#[derive(Debug, Serialize)]
pub struct PopulationReport {
    pub fitness_total: f64,
    pub chromosomes: Vec<ChromosomeReport>,
}

/// Build the report from the population's current state.
///
/// Precondition: `compute_relative_fitness` ran after the last evaluation.
pub fn build_report(pop: &Population) -> PopulationReport {
    PopulationReport {
        fitness_total: pop.fitness_total,
        chromosomes: pop
            .chromosomes
            .iter()
            .enumerate()
            .map(|(index, chromo)| ChromosomeReport {
                index,
                genes: chromo.to_binary_string(),
                fitness: chromo.fitness,
                relative_fitness: pop.relative_fitness[index],
            })
            .collect(),
    }
}

/// Print the report in the plain text layout.
pub fn print_text(report: &PopulationReport) {
    let total = report.chromosomes.len();

    println!("--- Total fitness = {:.0}", report.fitness_total);
    for chromo in &report.chromosomes {
        println!("Chromosome {} of {}:", chromo.index + 1, total);
        println!("   {}", chromo.genes);
        println!("   Fitness = {:.0}", chromo.fitness);
        println!("   Fitness rate = {:.6}", chromo.relative_fitness);
        println!();
    }
}

/// Print the report as pretty JSON.
pub fn print_json(report: &PopulationReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
