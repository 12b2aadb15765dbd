//! Droplet flow state and correlation evaluators.

use tracing::warn;

use crate::constants::{DEFAULT_DROPLET_VISCOSITY, DEFAULT_REP, MU_FLUID};
use crate::correlation::Correlation;
use crate::drag;
use crate::error::DropletError;

/// Instantaneous flow state of one spherical fluid droplet.
///
/// Holds the particle Reynolds number and the droplet viscosity together
/// with the derived viscosity ratio `gamma = viscosity / MU_FLUID`. The
/// surrounding medium is fixed ([`MU_FLUID`]); gamma is never assigned
/// directly, only recomputed when the viscosity changes.
///
/// A single instance is typically reused across a sweep, calling
/// [`set_rep`](Droplet::set_rep) per iteration. Evaluators are pure
/// functions of the current state; mutation is not synchronized, so one
/// logical owner should drive an instance at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Droplet {
    rep: f64,
    viscosity: f64,
    gamma: f64,
}

impl Droplet {
    /// Create a droplet from a Reynolds number and a droplet viscosity
    /// (Pa·s).
    ///
    /// Both fields are set and gamma derived before validation runs, so a
    /// negative viscosity surfaces as a negative *ratio*. Negative values
    /// of either are rejected with [`DropletError`]; everything else,
    /// including `rep == 0`, is accepted (zero is an undefined evaluation
    /// boundary, not an invalid state).
    pub fn new(rep: f64, viscosity: f64) -> Result<Self, DropletError> {
        let gamma = viscosity / MU_FLUID;
        if rep < 0.0 {
            return Err(DropletError::NegativeReynolds(rep));
        }
        if gamma < 0.0 {
            return Err(DropletError::NegativeViscosityRatio(gamma));
        }
        Ok(Self { rep, viscosity, gamma })
    }

    /// Particle Reynolds number.
    pub fn rep(&self) -> f64 {
        self.rep
    }

    /// Droplet dynamic viscosity (Pa·s).
    pub fn viscosity(&self) -> f64 {
        self.viscosity
    }

    /// Viscosity ratio, droplet viscosity over continuous-phase viscosity.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Replace the Reynolds number.
    ///
    /// Unconditional: negativity is only checked by [`Droplet::new`], not
    /// here. The relaxed invariant is deliberate so sweeps can assign
    /// freely; a negative value simply yields unphysical Cd output.
    pub fn set_rep(&mut self, rep: f64) {
        self.rep = rep;
    }

    /// Replace the droplet viscosity (Pa·s) and recompute gamma.
    ///
    /// The two fields update together in this one method so gamma can
    /// never go stale. Like [`set_rep`](Droplet::set_rep), no
    /// revalidation happens here.
    pub fn set_viscosity(&mut self, viscosity: f64) {
        self.viscosity = viscosity;
        self.gamma = viscosity / MU_FLUID;
    }

    /// Schiller & Naumann (1935) drag coefficient at the current state.
    ///
    /// Defined for any `rep > 0`; no advisory.
    pub fn schiller_naumann_1935(&self) -> f64 {
        drag::schiller_naumann(self.rep)
    }

    /// Putnam (1961) drag coefficient at the current state.
    ///
    /// Above Rep = 1000 the Newton-regime constant is returned and the
    /// advisory is logged at WARN.
    pub fn putnam_1961(&self) -> f64 {
        let (cd, advisory) = drag::putnam(self.rep);
        if let Some(advisory) = advisory {
            warn!(rep = self.rep, "{advisory}");
        }
        cd
    }

    /// Hadamard & Rybczynski (1911) drag coefficient at the current state.
    ///
    /// Outside creeping flow (Rep > 0.1) the value is still computed and
    /// returned; the advisory is logged at WARN.
    pub fn hadamard_rybczynski_1911(&self) -> f64 {
        let (cd, advisory) = drag::hadamard_rybczynski(self.rep, self.gamma);
        if let Some(advisory) = advisory {
            warn!(rep = self.rep, "{advisory}");
        }
        cd
    }

    /// Feng & Michaelides (2001) drag coefficient at the current state.
    ///
    /// Errors with [`DropletError::NoApplicableBranch`] at Rep >= 1000,
    /// where the published correlation has no coverage. An advisory from
    /// the embedded Hadamard-Rybczynski term is logged at WARN.
    pub fn feng_michaelides_2001(&self) -> Result<f64, DropletError> {
        let (cd, advisory) = drag::feng_michaelides(self.rep, self.gamma)?;
        if let Some(advisory) = advisory {
            warn!(rep = self.rep, "{advisory}");
        }
        Ok(cd)
    }

    /// Evaluate the selected correlation at the current state.
    ///
    /// The only fallible arm is Feng-Michaelides; the others always
    /// produce a value.
    pub fn evaluate(&self, correlation: Correlation) -> Result<f64, DropletError> {
        match correlation {
            Correlation::HadamardRybczynski1911 => Ok(self.hadamard_rybczynski_1911()),
            Correlation::SchillerNaumann1935 => Ok(self.schiller_naumann_1935()),
            Correlation::Putnam1961 => Ok(self.putnam_1961()),
            Correlation::FengMichaelides2001 => self.feng_michaelides_2001(),
        }
    }
}

impl Default for Droplet {
    /// A water droplet in water at 20 °C (`gamma = 1`) with `Rep = 1`.
    fn default() -> Self {
        Self {
            rep: DEFAULT_REP,
            viscosity: DEFAULT_DROPLET_VISCOSITY,
            gamma: DEFAULT_DROPLET_VISCOSITY / MU_FLUID,
        }
    }
}
