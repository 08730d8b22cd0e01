//! Dilemma CLI - command-line interface
//!
//! Commands:
//! - evolve: evolve iterated prisoner's dilemma strategies
//! - onemax: evolve toward all-ones genomes (counting-ones fitness)

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

mod evolve_cmd;
mod onemax_cmd;
mod report;

#[derive(Parser)]
#[command(name = "dilemma")]
#[command(about = "Genetic algorithm for bit-encoded strategies")]
struct Cli {
    /// Random seed for reproducible runs (entropy if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evolve iterated prisoner's dilemma strategies via round-robin play
    Evolve(evolve_cmd::EvolveArgs),
    /// Evolve toward all-ones genomes with counting-ones fitness
    Onemax(onemax_cmd::OnemaxArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evolve(args) => evolve_cmd::run(args, cli.seed),
        Commands::Onemax(args) => onemax_cmd::run(args, cli.seed),
    }
}

/// Seeded generator when a seed is given, entropy otherwise
pub(crate) fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}
