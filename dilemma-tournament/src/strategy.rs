//! Strategy decoder - chromosome as a history-indexed action table
//!
//! A chromosome of `num_genes` bytes is a lookup table of `num_genes * 8`
//! single-bit entries. A history code `h` addresses entry
//! `gene_pos = h / 8`, `bit_pos = h % 8` (0-indexed from the MSB), and the
//! bit found there is the action to play. This exact derivation couples
//! genome length to the addressable history space, so the genome size is
//! checked against the code range at construction time.

use dilemma_core::{Chromosome, GaError, GENE_BITS};

use crate::history::HISTORY_CODES;

/// Action to play for the given history code, read from the player's own
/// strategy table. Fails fast when the code addresses past the genome.
pub fn decode_action(chromosome: &Chromosome, history: u8) -> Result<u8, GaError> {
    let gene_pos = history as usize / GENE_BITS;
    let bit_pos = history as usize % GENE_BITS;
    chromosome.bit(gene_pos, bit_pos)
}

/// Check that a genome of `num_genes` bytes can address every history code
/// the tournament will produce.
pub fn ensure_addressable(num_genes: usize) -> Result<(), GaError> {
    let max_code = HISTORY_CODES - 1;
    if num_genes * GENE_BITS <= max_code as usize {
        return Err(GaError::GenomeTooShort { num_genes, max_code });
    }
    Ok(())
}
