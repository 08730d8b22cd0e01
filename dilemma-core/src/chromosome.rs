//! Chromosome - a packed bit-string genome with a fitness score
//!
//! A chromosome is a fixed-length sequence of gene bytes; each byte packs
//! 8 gene bits, addressed MSB-first (bit 0 is the most significant bit of
//! its byte). Gene contents and fitness mutate in place every generation;
//! the byte length is fixed at creation and never changes.

use rand::Rng;
use serde::Serialize;

use crate::error::GaError;

/// Number of gene bits packed into one gene byte
pub const GENE_BITS: usize = 8;

/// A bit-encoded candidate strategy
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Chromosome {
    /// Gene bytes, 8 gene bits each
    pub genes: Vec<u8>,
    /// Fitness accumulated by the evaluator, reset before each pass
    pub fitness: f64,
}

impl Chromosome {
    /// Create a chromosome with every gene byte drawn uniformly from 0..=255.
    ///
    /// Fitness starts at 0.
    pub fn random<R: Rng>(num_genes: usize, rng: &mut R) -> Self {
        Self {
            genes: (0..num_genes).map(|_| rng.gen::<u8>()).collect(),
            fitness: 0.0,
        }
    }

    /// Number of gene bytes
    pub fn num_genes(&self) -> usize {
        self.genes.len()
    }

    /// Read a single gene bit. `bit_pos` counts from the MSB: bit 0 is the
    /// most significant bit of the byte at `gene_pos`.
    ///
    /// Out-of-range indices are an error, never a wrap or clamp - a wrapped
    /// read would silently corrupt strategy lookups.
    pub fn bit(&self, gene_pos: usize, bit_pos: usize) -> Result<u8, GaError> {
        if gene_pos >= self.genes.len() || bit_pos >= GENE_BITS {
            return Err(GaError::IndexOutOfRange {
                gene_pos,
                bit_pos,
                num_genes: self.genes.len(),
            });
        }
        Ok((self.genes[gene_pos] >> (GENE_BITS - bit_pos - 1)) & 1)
    }

    /// Render the genes as an MSB-first binary string, one space-separated
    /// group of 8 bits per gene byte.
    pub fn to_binary_string(&self) -> String {
        self.genes
            .iter()
            .map(|g| format!("{:08b}", g))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
