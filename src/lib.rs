//! # Droplet Drag
//!
//! Drag-coefficient correlations for a spherical fluid droplet moving
//! through a continuous fluid.
//!
//! The [`Droplet`] model holds the particle Reynolds number and the
//! droplet viscosity (with the derived viscosity ratio gamma) and exposes
//! four published correlations: Hadamard & Rybczynski (1911),
//! Schiller & Naumann (1935), Putnam (1961) and Feng & Michaelides (2001).
//! Each evaluation is a handful of floating-point operations on the
//! current state; a sweep driver reuses one instance and mutates `rep`
//! per step.
//!
//! Out-of-range evaluations signal a non-fatal [`Advisory`] (logged at
//! WARN via `tracing`) while still returning the value; the formulas
//! themselves live in [`drag`] as pure functions for callers that want
//! the advisory in hand instead of on the log.

// Re-export the main types
pub use correlation::Correlation;
pub use drag::Advisory;
pub use droplet::Droplet;
pub use error::DropletError;

// Module declarations
pub mod constants;
mod correlation;
pub mod drag;
mod droplet;
mod error;
