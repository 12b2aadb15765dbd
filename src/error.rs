//! Error type for droplet drag calculations.

use thiserror::Error;

/// Errors produced by droplet construction and correlation evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DropletError {
    /// A negative particle Reynolds number was supplied at construction.
    #[error("negative Rep value not allowed: {0}")]
    NegativeReynolds(f64),

    /// The droplet viscosity produced a negative viscosity ratio at
    /// construction.
    #[error("negative viscosity ratio not allowed: {0}")]
    NegativeViscosityRatio(f64),

    /// Feng & Michaelides (2001) defines no branch at this Reynolds
    /// number; there is no value to return.
    #[error("no Feng-Michaelides branch covers Rep = {rep}")]
    NoApplicableBranch { rep: f64 },
}
