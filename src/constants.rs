//! Physical constants used in droplet drag calculations.

/// Dynamic viscosity of the continuous phase (Pa·s)
///
/// Value: 1.0005e-3 Pa·s, liquid water at 20 °C (IAPWS reference data).
/// The viscosity ratio gamma of every droplet is computed against this
/// constant; the surrounding medium is fixed for the lifetime of the model.
pub const MU_FLUID: f64 = 1.0005e-3;

/// Default droplet dynamic viscosity (Pa·s)
///
/// Also water at 20 °C, so a default-constructed droplet has gamma = 1
/// (a water droplet suspended in water).
pub const DEFAULT_DROPLET_VISCOSITY: f64 = 1.0005e-3;

/// Default particle Reynolds number for a freshly constructed droplet
pub const DEFAULT_REP: f64 = 1.0;

/// Upper Rep bound of the creeping-flow (Stokes) regime
///
/// Below this value viscous forces dominate and Cd = 24/Rep holds;
/// Hadamard & Rybczynski (1911) is only valid here.
pub const CREEPING_FLOW_LIMIT: f64 = 0.1;

/// Rep at and above which drag is treated as the Newton-regime plateau
///
/// Both Schiller & Naumann (1935) and Putnam (1961) cap their piecewise
/// formulas at this limit; Feng & Michaelides (2001) has no published
/// branch beyond it.
pub const NEWTON_REGIME_LIMIT: f64 = 1000.0;

/// Drag coefficient plateau in the Newton regime
///
/// The classical constant for a sphere at high subcritical Reynolds
/// numbers, used by Schiller & Naumann and (as an out-of-range estimate)
/// by Putnam.
pub const NEWTON_REGIME_CD: f64 = 0.44;
