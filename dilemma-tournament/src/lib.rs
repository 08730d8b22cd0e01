//! Dilemma Tournament - fitness evaluation through iterated game play
//!
//! This crate provides the fitness layer on top of the GA engine:
//! - Payoff table for the 2x2 game matrix
//! - Triangular-indexed pairwise history (two perspective bytes per pair)
//! - Strategy decoder mapping history codes to action bits
//! - Round-robin tournament evaluator
//! - Standalone counting-ones evaluator with the dispatch stop sentinel

mod evaluate;
mod history;
mod payoff;
mod strategy;
mod tournament;

pub use evaluate::{evaluate, evaluate_population, is_stop_signal, stop_signal};
pub use history::{pair_index, PairHistory, HISTORY_CODES};
pub use payoff::PayoffTable;
pub use strategy::{decode_action, ensure_addressable};
pub use tournament::Tournament;
