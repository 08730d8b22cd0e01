//! Payoff table for the two-player game
//!
//! A fixed 2x2 game matrix: four outcome cells, each yielding a payoff pair,
//! indexed by the 2-bit action combination `(action_a << 1) | action_b`.
//! The numeric values are configuration, not part of the engine's contract.

/// Payoff matrix for one pairwise interaction.
///
/// Action encoding is consistent throughout: 0 = defect, 1 = cooperate.
#[derive(Clone, Debug, PartialEq)]
pub struct PayoffTable {
    /// Cells indexed by `(action_a << 1) | action_b`, each `(payoff_a, payoff_b)`
    cells: [(f64, f64); 4],
}

impl Default for PayoffTable {
    /// Standard Prisoner's Dilemma values: mutual defection (1,1),
    /// exploitation (5,0)/(0,5), mutual cooperation (3,3).
    fn default() -> Self {
        Self {
            cells: [(1.0, 1.0), (5.0, 0.0), (0.0, 5.0), (3.0, 3.0)],
        }
    }
}

impl PayoffTable {
    /// Build a table from explicit cells, ordered by `(action_a << 1) | action_b`.
    pub fn new(cells: [(f64, f64); 4]) -> Self {
        Self { cells }
    }

    /// Payoff pair for one interaction. Actions must be single bits.
    pub fn payoff(&self, action_a: u8, action_b: u8) -> (f64, f64) {
        debug_assert!(action_a <= 1 && action_b <= 1);
        self.cells[((action_a << 1) | action_b) as usize]
    }
}
