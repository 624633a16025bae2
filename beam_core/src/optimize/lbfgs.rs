//! L-BFGS driver via the `argmin` crate.
//!
//! argmin's L-BFGS is unconstrained, so each bounded variable is mapped onto
//! the real line with a logistic transform:
//!
//! ```text
//! x = lower + (upper - lower) · 1 / (1 + e^(−z))
//! ```
//!
//! The solver works in `z`; every point it evaluates maps back strictly
//! inside the box. Gradients are central finite differences in `z`.
//!
//! Uses `Vec<f64>` as the argmin parameter type (argmin-math `vec` backend).

use argmin::core::{CostFunction, Executor, Gradient, State, TerminationReason};
use argmin::solver::linesearch::MoreThuenteLineSearch;
use argmin::solver::quasinewton::LBFGS;

use super::{Minimizer, Minimum, SolveOptions};
use crate::errors::{DesignError, DesignResult};
use crate::settings::Bounds;

/// Keeps the inverse transform finite for points sitting on a bound.
const EDGE_FRACTION: f64 = 1e-9;

/// Bounded L-BFGS minimizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LbfgsMinimizer {
    /// Number of correction pairs kept by L-BFGS
    pub history: usize,
    /// Finite-difference step in the transformed space
    pub difference_step: f64,
}

impl Default for LbfgsMinimizer {
    fn default() -> Self {
        LbfgsMinimizer {
            history: 10,
            difference_step: 1e-6,
        }
    }
}

/// Wraps the caller's objective and bounds so argmin can evaluate cost and
/// gradient in the unconstrained space.
struct BoxedProblem<'a> {
    objective: &'a dyn Fn(&[f64]) -> f64,
    bounds: &'a [Bounds],
    difference_step: f64,
}

impl<'a> BoxedProblem<'a> {
    fn evaluate(&self, z: &[f64]) -> f64 {
        (self.objective)(&to_bounded(self.bounds, z))
    }
}

impl<'a> CostFunction for BoxedProblem<'a> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, z: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        Ok(self.evaluate(z))
    }
}

impl<'a> Gradient for BoxedProblem<'a> {
    type Param = Vec<f64>;
    type Gradient = Vec<f64>;

    fn gradient(&self, z: &Self::Param) -> Result<Self::Gradient, argmin::core::Error> {
        let h = self.difference_step;
        let mut probe = z.clone();
        let mut grad = vec![0.0; z.len()];
        for i in 0..z.len() {
            probe[i] = z[i] + h;
            let forward = self.evaluate(&probe);
            probe[i] = z[i] - h;
            let backward = self.evaluate(&probe);
            probe[i] = z[i];
            grad[i] = (forward - backward) / (2.0 * h);
        }
        Ok(grad)
    }
}

fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Map unconstrained coordinates into the box.
fn to_bounded(bounds: &[Bounds], z: &[f64]) -> Vec<f64> {
    bounds
        .iter()
        .zip(z)
        .map(|(b, &zi)| b.lower + b.width() * logistic(zi))
        .collect()
}

/// Map a point in the box to unconstrained coordinates.
fn to_unbounded(bounds: &[Bounds], x: &[f64]) -> Vec<f64> {
    bounds
        .iter()
        .zip(x)
        .map(|(b, &xi)| {
            let fraction = ((xi - b.lower) / b.width()).clamp(EDGE_FRACTION, 1.0 - EDGE_FRACTION);
            (fraction / (1.0 - fraction)).ln()
        })
        .collect()
}

impl Minimizer for LbfgsMinimizer {
    fn minimize(
        &self,
        objective: &dyn Fn(&[f64]) -> f64,
        bounds: &[Bounds],
        initial: &[f64],
        options: &SolveOptions,
    ) -> DesignResult<Minimum> {
        if bounds.len() != initial.len() {
            return Err(DesignError::solver_failed(format!(
                "{} bounds for {} variables",
                bounds.len(),
                initial.len()
            )));
        }

        let problem = BoxedProblem {
            objective,
            bounds,
            difference_step: self.difference_step,
        };
        let init_param = to_unbounded(bounds, initial);

        let linesearch = MoreThuenteLineSearch::new();
        let solver = LBFGS::new(linesearch, self.history)
            .with_tolerance_grad(options.gradient_tolerance)
            .map_err(|e| DesignError::solver_failed(e.to_string()))?;

        let result = Executor::new(problem, solver)
            .configure(|config| config.param(init_param).max_iters(options.max_iterations))
            .run()
            .map_err(|e| DesignError::solver_failed(e.to_string()))?;

        let state = result.state();
        let best_param = state
            .get_best_param()
            .ok_or_else(|| DesignError::solver_failed("L-BFGS returned no best parameters"))?;

        let converged = matches!(
            state.get_termination_reason(),
            Some(TerminationReason::SolverConverged)
        );

        Ok(Minimum {
            point: to_bounded(bounds, best_param),
            value: state.get_best_cost(),
            converged,
            iterations: state.get_iter(),
        })
    }
}
