//! Round-robin tournament evaluator
//!
//! Drives the iterated game: every unordered pair of players interacts once
//! per round, each consulting its own strategy table under the pair's shared
//! history, and the payoff pair accumulates into both fitnesses.
//!
//! Fitness reset and round play are separate steps: a generation resets
//! once, then plays any number of rounds, and the payoffs accumulate across
//! them. The pairwise history is never reset for the life of the
//! tournament; it carries forward across rounds and generations.

use dilemma_core::{GaError, Population};
use rand::Rng;

use crate::history::PairHistory;
use crate::payoff::PayoffTable;
use crate::strategy::{decode_action, ensure_addressable};

/// Round-robin evaluator owning the pairwise history and payoff table
#[derive(Clone, Debug)]
pub struct Tournament {
    payoffs: PayoffTable,
    history: PairHistory,
    /// Most recent action per player, overwritten every pairwise interaction
    tactics: Vec<u8>,
}

impl Tournament {
    /// Create an evaluator for `pop` with randomly initialized history.
    ///
    /// Fails when the genome cannot address the full history code space.
    pub fn new<R: Rng>(
        pop: &Population,
        payoffs: PayoffTable,
        rng: &mut R,
    ) -> Result<Self, GaError> {
        ensure_addressable(pop.num_genes)?;
        Ok(Self {
            payoffs,
            history: PairHistory::random(pop.num_chromosomes, rng),
            tactics: vec![0; pop.num_chromosomes],
        })
    }

    /// Create an evaluator with explicit history, e.g. to replay a known
    /// scenario.
    pub fn with_history(
        pop: &Population,
        payoffs: PayoffTable,
        history: PairHistory,
    ) -> Result<Self, GaError> {
        ensure_addressable(pop.num_genes)?;
        let num_pairs = pop.num_chromosomes * (pop.num_chromosomes - 1) / 2;
        if history.num_pairs() != num_pairs {
            return Err(GaError::invalid(
                "history",
                format!(
                    "history has {} pair slots, population of {} needs {}",
                    history.num_pairs(),
                    pop.num_chromosomes,
                    num_pairs
                ),
            ));
        }
        Ok(Self {
            payoffs,
            history,
            tactics: vec![0; pop.num_chromosomes],
        })
    }

    /// Play every unordered pair exactly once, accumulating payoffs into
    /// the chromosomes' fitness and advancing the pair histories.
    ///
    /// Each player decodes its action from its own strategy table, addressed
    /// by its perspective byte of the pair's shared history slot.
    pub fn play_round(&mut self, pop: &mut Population) -> Result<(), GaError> {
        debug_assert_eq!(pop.num_chromosomes, self.tactics.len());
        let n = pop.num_chromosomes;

        for a in 0..n {
            for b in (a + 1)..n {
                let [hist_a, hist_b] = self.history.get(a, b);
                let action_a = decode_action(&pop.chromosomes[a], hist_a)?;
                let action_b = decode_action(&pop.chromosomes[b], hist_b)?;
                self.tactics[a] = action_a;
                self.tactics[b] = action_b;

                let (pay_a, pay_b) = self.payoffs.payoff(action_a, action_b);
                pop.chromosomes[a].fitness += pay_a;
                pop.chromosomes[b].fitness += pay_b;

                self.history.record(a, b, action_a, action_b);
            }
        }
        Ok(())
    }

    /// One full generation of play: reset every fitness, then accumulate
    /// `iterations` rounds.
    pub fn play_generation(
        &mut self,
        pop: &mut Population,
        iterations: usize,
    ) -> Result<(), GaError> {
        pop.reset_fitness();
        for _ in 0..iterations {
            self.play_round(pop)?;
        }
        Ok(())
    }

    /// Most recent action per player
    pub fn last_tactics(&self) -> &[u8] {
        &self.tactics
    }

    /// Current pairwise history
    pub fn history(&self) -> &PairHistory {
        &self.history
    }
}
