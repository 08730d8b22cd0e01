//! Evolve command - iterated prisoner's dilemma run
//!
//! Per generation: play the round-robin tournament for the configured
//! number of iterations, recompute relative fitness, then select, cross
//! and mutate. The pairwise history carries forward across the whole run.

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rand_chacha::ChaCha8Rng;

use dilemma_core::{Population, PopulationParams};
use dilemma_evolve::evolve;
use dilemma_tournament::{PayoffTable, Tournament};

use crate::report;

#[derive(Args)]
pub struct EvolveArgs {
    /// Genome length in gene bytes (8 strategy bits each)
    #[arg(long, default_value = "2")]
    pub genes: usize,

    /// Population size (must be even)
    #[arg(long, default_value = "4")]
    pub population: usize,

    /// Number of generations to run
    #[arg(long, default_value = "100")]
    pub generations: usize,

    /// Game iterations per generation
    #[arg(long, default_value = "50")]
    pub iterations: usize,

    /// Crossover rate (0.0-1.0), typically high
    #[arg(long, default_value = "0.95")]
    pub crossover_rate: f64,

    /// Mutation rate (0.0-1.0), typically low
    #[arg(long, default_value = "0.001")]
    pub mutation_rate: f64,

    /// Log population statistics every N generations
    #[arg(long, default_value = "10")]
    pub report_every: usize,

    /// Emit the final report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the evolve command: build the population and tournament, run the
/// generation loop, evaluate once more and report.
pub fn run(args: EvolveArgs, seed: Option<u64>) -> Result<()> {
    let params = build_params(&args);
    let mut rng = crate::create_rng(seed);

    tracing::info!(
        "Starting dilemma evolution: pop={}, genes={}, gen={}, iters={}",
        args.population,
        args.genes,
        args.generations,
        args.iterations
    );

    let mut pop =
        Population::random(params, &mut rng).context("invalid population parameters")?;
    let mut tournament = Tournament::new(&pop, PayoffTable::default(), &mut rng)
        .context("genome too short for the strategy table")?;

    run_generations(&mut pop, &mut tournament, &args, &mut rng)?;

    // One more evaluation pass so the report reflects the final genes
    tournament.play_generation(&mut pop, args.iterations)?;
    pop.compute_relative_fitness();

    emit_report(&pop, args.json)
}

fn build_params(args: &EvolveArgs) -> PopulationParams {
    PopulationParams {
        num_genes: args.genes,
        num_chromosomes: args.population,
        crossover_rate: args.crossover_rate,
        mutation_rate: args.mutation_rate,
    }
}

fn run_generations(
    pop: &mut Population,
    tournament: &mut Tournament,
    args: &EvolveArgs,
    rng: &mut ChaCha8Rng,
) -> Result<()> {
    let bar = generation_bar(args.generations);

    for generation in 0..args.generations {
        tournament.play_generation(pop, args.iterations)?;
        pop.compute_relative_fitness();

        if args.report_every > 0 && (generation + 1) % args.report_every == 0 {
            tracing::info!(
                "Generation {}: best={:.0}, mean={:.1}, total={:.0}",
                generation + 1,
                pop.best_fitness(),
                pop.mean_fitness(),
                pop.fitness_total
            );
        }

        evolve(pop, rng);
        bar.inc(1);
    }

    bar.finish_and_clear();
    Ok(())
}

fn emit_report(pop: &Population, json: bool) -> Result<()> {
    let report = report::build_report(pop);
    if json {
        report::print_json(&report)
    } else {
        report::print_text(&report);
        Ok(())
    }
}

pub(crate) fn generation_bar(generations: usize) -> ProgressBar {
    let bar = ProgressBar::new(generations as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} generations")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}
