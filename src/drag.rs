//! Drag coefficient correlations for a spherical fluid droplet.
//!
//! Each correlation is a closed-form piecewise formula in the particle
//! Reynolds number Rep; the droplet-specific ones also take the viscosity
//! ratio gamma. The functions here are pure: they return the computed Cd
//! together with any [`Advisory`], and leave surfacing (logging) to the
//! caller. [`crate::Droplet`] wraps them with its current state.
//!
//! None of the formulas is defined at Rep = 0; the Stokes-type terms divide
//! by Rep and the Feng-Michaelides low-Rep branch takes ln(Rep). Callers
//! are expected to stay on Rep > 0, and an IEEE infinity or NaN propagates
//! otherwise.

use crate::constants::{CREEPING_FLOW_LIMIT, NEWTON_REGIME_CD, NEWTON_REGIME_LIMIT};
use crate::error::DropletError;
use std::fmt;

/// Non-fatal notice that a correlation was evaluated outside its intended
/// validity range. The Cd value is still returned alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// Putnam (1961) at Rep >= 1000: the Newton-regime constant is
    /// returned as an estimate.
    AboveValidityLimit,
    /// Hadamard-Rybczynski (1911) at Rep > 0.1, outside creeping flow.
    NotCreepingFlow,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Advisory::AboveValidityLimit => {
                "Rep above correlation validity limit, using 0.44 as estimate"
            }
            Advisory::NotCreepingFlow => "correlation suitable only for creeping flow",
        };
        write!(f, "{msg}")
    }
}

/// Schiller & Naumann (1935)
///
/// General-purpose rigid-sphere correlation, independent of gamma:
/// the Stokes limit 24/Rep below Rep = 0.1, a corrected Stokes term up to
/// Rep = 1000, and the Newton-regime constant beyond.
pub fn schiller_naumann(rep: f64) -> f64 {
    if rep < CREEPING_FLOW_LIMIT {
        24.0 / rep
    } else if rep < NEWTON_REGIME_LIMIT {
        24.0 / rep * (1.0 + 0.15 * rep.powf(0.687))
    } else {
        NEWTON_REGIME_CD
    }
}

/// Putnam (1961)
///
/// Valid below Rep = 1000. Above that limit the Newton-regime constant is
/// returned with [`Advisory::AboveValidityLimit`].
pub fn putnam(rep: f64) -> (f64, Option<Advisory>) {
    if rep < NEWTON_REGIME_LIMIT {
        (24.0 / rep * (1.0 + rep.powf(2.0 / 3.0) / 6.0), None)
    } else {
        (NEWTON_REGIME_CD, Some(Advisory::AboveValidityLimit))
    }
}

/// Hadamard & Rybczynski (1911)
///
/// Creeping-flow drag of a fluid sphere with internal circulation, apud
/// Feng & Michaelides (2001). The formula is evaluated at any Rep;
/// [`Advisory::NotCreepingFlow`] accompanies the value once Rep exceeds
/// the creeping-flow limit.
pub fn hadamard_rybczynski(rep: f64, gamma: f64) -> (f64, Option<Advisory>) {
    let advisory = (rep > CREEPING_FLOW_LIMIT).then_some(Advisory::NotCreepingFlow);
    let cd = 8.0 / rep * ((3.0 * gamma + 2.0) / (gamma + 1.0));
    (cd, advisory)
}

/// Feng & Michaelides (2001)
///
/// Composite correlation over three Rep bands. The low band extends
/// Hadamard-Rybczynski (whose advisory passes through when it fires); the
/// middle band blends a corrected Stokes term or the Putnam value depending
/// on gamma. No branch is published for Rep >= 1000 and that gap is
/// reported as [`DropletError::NoApplicableBranch`] rather than papered
/// over with a plateau value.
pub fn feng_michaelides(rep: f64, gamma: f64) -> Result<(f64, Option<Advisory>), DropletError> {
    if rep <= 5.0 {
        let k = (3.0 * gamma + 2.0) / (gamma + 1.0);
        let (hr, advisory) = hadamard_rybczynski(rep, gamma);
        let cd = hr * (1.0 + 0.05 * k * rep) - 0.01 * k * rep * rep.ln();
        Ok((cd, advisory))
    } else if rep < NEWTON_REGIME_LIMIT {
        let cd_2 = 17.0 * rep.powf(-2.0 / 3.0);
        let cd = if gamma < 2.0 {
            let cd_0 = 48.0 / rep * (1.0 + 2.21 / rep.sqrt() - 2.14 / rep.sqrt());
            (2.0 - gamma) / 2.0 * cd_0 + 4.0 * gamma / (6.0 + gamma) * cd_2
        } else {
            // Putnam's advisory cannot fire here: this band ends below its
            // Rep = 1000 validity limit.
            let (cd_inf, _) = putnam(rep);
            4.0 / (gamma + 2.0) * cd_2 + (gamma - 2.0) / (gamma + 2.0) * cd_inf
        };
        Ok((cd, None))
    } else {
        Err(DropletError::NoApplicableBranch { rep })
    }
}
