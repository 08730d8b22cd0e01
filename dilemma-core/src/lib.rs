//! Dilemma Core - chromosome and population types
//!
//! This crate provides the data model for the genetic algorithm:
//! - Packed bit-string chromosomes (8 gene bits per byte, MSB-first)
//! - Populations with validated GA parameters and fitness statistics
//! - Shared error types

pub mod chromosome;
pub mod error;
pub mod population;

// Re-exports for convenient access
pub use chromosome::{Chromosome, GENE_BITS};
pub use error::GaError;
pub use population::{Population, PopulationParams};
