//! Error types shared across the workspace

use thiserror::Error;

/// Errors raised by the GA engine and the strategy layer
#[derive(Debug, Error, PartialEq)]
pub enum GaError {
    /// A construction parameter violated an invariant
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A gene or bit index fell outside the genome
    #[error("bit index out of range: gene {gene_pos}, bit {bit_pos} (genome is {num_genes} bytes)")]
    IndexOutOfRange {
        gene_pos: usize,
        bit_pos: usize,
        num_genes: usize,
    },

    /// The genome is too short to address the required history code space
    #[error("genome of {num_genes} bytes cannot address history code {max_code}")]
    GenomeTooShort { num_genes: usize, max_code: u8 },
}

impl GaError {
    /// Shorthand for parameter validation failures
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        GaError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
