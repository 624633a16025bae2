//! # Optimization
//!
//! The continuous half of the design problem: for one fixed discrete
//! configuration, tune (height, span) so the three failure loads land as close
//! as possible to the target.
//!
//! ## Modules
//!
//! - [`lbfgs`] - Bounded L-BFGS minimizer backed by `argmin`
//! - [`configuration`] - Residual objective and the per-configuration solve
//!
//! The solver is reached through the [`Minimizer`] trait so another bounded
//! method can be dropped in without touching the search.

pub mod configuration;
pub mod lbfgs;

pub use configuration::{
    candidate_residual, evaluate_section, optimize_configuration, ConfigurationOutcome,
    DEGENERATE_RESIDUAL,
};
pub use lbfgs::LbfgsMinimizer;

use serde::{Deserialize, Serialize};

use crate::errors::DesignResult;
use crate::settings::Bounds;

/// Convergence controls for one bounded solve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolveOptions {
    /// Stop once the gradient norm falls below this value
    pub gradient_tolerance: f64,
    /// Iteration budget
    pub max_iterations: u64,
}

/// Outcome of a bounded minimization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Minimum {
    /// Best point found, inside the bounds
    pub point: Vec<f64>,
    /// Objective value at `point`
    pub value: f64,
    /// Whether the gradient tolerance was met
    pub converged: bool,
    /// Iterations performed
    pub iterations: u64,
}

/// A bounded local minimizer.
///
/// Implementations start from `initial`, keep every evaluated point within
/// `bounds`, and return the best point seen. Failing to meet the tolerance is
/// not an error: it is reported through [`Minimum::converged`].
pub trait Minimizer {
    /// Minimize `objective` over the box `bounds` starting at `initial`.
    ///
    /// # Errors
    ///
    /// * `DesignError::SolverFailed` - the solver could not produce any point
    fn minimize(
        &self,
        objective: &dyn Fn(&[f64]) -> f64,
        bounds: &[Bounds],
        initial: &[f64],
        options: &SolveOptions,
    ) -> DesignResult<Minimum>;
}
