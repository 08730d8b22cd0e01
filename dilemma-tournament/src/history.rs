//! Pairwise interaction history
//!
//! Every unordered pair of players shares one dense slot, located by a
//! triangular index. A slot holds two perspective bytes, one per player;
//! each byte packs the last two rounds at 2 bits per round:
//!
//! - bits [3:2]: newest round, `(own_action << 1) | other_action`
//! - bits [1:0]: the round before, same layout
//!
//! A history byte is therefore a 4-bit code in [0, 16), and doubles as the
//! lookup address into the owner's strategy table.

use dilemma_core::GaError;
use rand::Rng;

/// Number of distinct history codes a strategy table must address
pub const HISTORY_CODES: u8 = 16;

/// Dense 0-based slot index for the unordered pair `{a, b}`.
///
/// The unique bijection from the C(n,2) unordered pairs onto
/// `0 .. n*(n-1)/2`: `(2n - a - 1)*a/2 + (b - a - 1)` for a < b.
/// Argument order does not matter; the pair is normalized first.
pub fn pair_index(num_players: usize, a: usize, b: usize) -> usize {
    debug_assert!(a != b && a < num_players && b < num_players);
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    (2 * num_players - lo - 1) * lo / 2 + (hi - lo - 1)
}

/// History storage for every unordered pair of players
#[derive(Clone, Debug, PartialEq)]
pub struct PairHistory {
    num_players: usize,
    /// One slot per pair; `slot[0]` is the lower-index player's perspective
    slots: Vec<[u8; 2]>,
}

impl PairHistory {
    /// Initialize every perspective byte uniformly in [0, 16).
    pub fn random<R: Rng>(num_players: usize, rng: &mut R) -> Self {
        let num_pairs = num_players * (num_players - 1) / 2;
        Self {
            num_players,
            slots: (0..num_pairs)
                .map(|_| [rng.gen_range(0..HISTORY_CODES), rng.gen_range(0..HISTORY_CODES)])
                .collect(),
        }
    }

    /// Build from explicit slots, e.g. to replay a known scenario.
    pub fn from_slots(num_players: usize, slots: Vec<[u8; 2]>) -> Result<Self, GaError> {
        let num_pairs = num_players * (num_players.saturating_sub(1)) / 2;
        if slots.len() != num_pairs {
            return Err(GaError::invalid(
                "slots",
                format!("expected {} pair slots, got {}", num_pairs, slots.len()),
            ));
        }
        if let Some(bad) = slots.iter().flatten().find(|&&h| h >= HISTORY_CODES) {
            return Err(GaError::invalid(
                "slots",
                format!("history code {} out of range [0, {})", bad, HISTORY_CODES),
            ));
        }
        Ok(Self { num_players, slots })
    }

    /// Number of pair slots
    pub fn num_pairs(&self) -> usize {
        self.slots.len()
    }

    /// Perspective bytes for the pair `(a, b)` with a < b:
    /// element 0 is a's view, element 1 is b's view.
    pub fn get(&self, a: usize, b: usize) -> [u8; 2] {
        debug_assert!(a < b);
        self.slots[pair_index(self.num_players, a, b)]
    }

    /// Shift one finished round into both perspective bytes of `(a, b)`,
    /// a < b: the oldest round's 2 bits fall off, the new round's
    /// `(own << 1) | other` code takes the newest position.
    pub fn record(&mut self, a: usize, b: usize, action_a: u8, action_b: u8) {
        debug_assert!(a < b);
        debug_assert!(action_a <= 1 && action_b <= 1);

        let slot = &mut self.slots[pair_index(self.num_players, a, b)];
        slot[0] = (slot[0] >> 2) + (((action_a << 1) | action_b) << 2);
        slot[1] = (slot[1] >> 2) + (((action_b << 1) | action_a) << 2);
    }
}
