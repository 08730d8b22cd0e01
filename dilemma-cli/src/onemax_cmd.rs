//! Onemax command - counting-ones GA
//!
//! Uses the standalone per-chromosome evaluator, the same contract a
//! round-robin job distributor consumes: genes in, scalar fitness out,
//! no shared state between chromosomes. `--parallel` fans the evaluations
//! out across a thread pool.

use anyhow::{Context, Result};
use clap::Args;

use dilemma_core::{Population, PopulationParams, GENE_BITS};
use dilemma_evolve::evolve;
use dilemma_tournament::evaluate_population;

use crate::evolve_cmd::generation_bar;
use crate::report;

#[derive(Args)]
pub struct OnemaxArgs {
    /// Genome length in gene bytes
    #[arg(long, default_value = "2")]
    pub genes: usize,

    /// Population size (must be even)
    #[arg(long, default_value = "8")]
    pub population: usize,

    /// Number of generations to run
    #[arg(long, default_value = "100")]
    pub generations: usize,

    /// Crossover rate (0.0-1.0), typically high
    #[arg(long, default_value = "0.95")]
    pub crossover_rate: f64,

    /// Mutation rate (0.0-1.0), typically low
    #[arg(long, default_value = "0.001")]
    pub mutation_rate: f64,

    /// Evaluate chromosomes in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Log population statistics every N generations
    #[arg(long, default_value = "10")]
    pub report_every: usize,

    /// Emit the final report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the onemax command.
pub fn run(args: OnemaxArgs, seed: Option<u64>) -> Result<()> {
    let params = PopulationParams {
        num_genes: args.genes,
        num_chromosomes: args.population,
        crossover_rate: args.crossover_rate,
        mutation_rate: args.mutation_rate,
    };
    let mut rng = crate::create_rng(seed);

    tracing::info!(
        "Starting onemax evolution: pop={}, genes={}, gen={}{}",
        args.population,
        args.genes,
        args.generations,
        if args.parallel { " (parallel)" } else { "" }
    );

    let mut pop =
        Population::random(params, &mut rng).context("invalid population parameters")?;
    let optimum = (args.genes * GENE_BITS) as f64;

    let bar = generation_bar(args.generations);
    for generation in 0..args.generations {
        evaluate_population(&mut pop, args.parallel);
        pop.compute_relative_fitness();

        if args.report_every > 0 && (generation + 1) % args.report_every == 0 {
            tracing::info!(
                "Generation {}: best={:.0}/{:.0}, mean={:.1}",
                generation + 1,
                pop.best_fitness(),
                optimum,
                pop.mean_fitness()
            );
        }

        evolve(&mut pop, &mut rng);
        bar.inc(1);
    }
    bar.finish_and_clear();

    // Final evaluation pass for the report
    evaluate_population(&mut pop, args.parallel);
    pop.compute_relative_fitness();

    if pop.best_fitness() == optimum {
        tracing::info!("Optimum reached: an all-ones genome survived to the end");
    }

    let report = report::build_report(&pop);
    if args.json {
        report::print_json(&report)
    } else {
        report::print_text(&report);
        Ok(())
    }
}
