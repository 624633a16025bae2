//! # Configuration Optimizer
//!
//! For one fixed (materials, thicknesses) configuration, finds the height and
//! span whose failure loads best match the target load.
//!
//! ## Objective
//!
//! ```text
//! r(l_v, l_h) = √( (P_goal − P_bend)² + (P_goal − P_glue)² + (P_goal − P_shear)² )
//! ```
//!
//! Degenerate geometries score [`DEGENERATE_RESIDUAL`] so the solver backs
//! away from them and the search never picks them over a real section.
//! A solver failure falls back to the initial guess, which is scored like any
//! other point.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::Configuration;
//! use beam_core::materials::{MaterialAssignment, Species};
//! use beam_core::optimize::{optimize_configuration, LbfgsMinimizer};
//! use beam_core::settings::SearchSettings;
//!
//! let configuration = Configuration::new(MaterialAssignment::uniform(Species::Pine), 0.25, 0.25, 0.25);
//! let outcome = optimize_configuration(
//!     1_250.0,
//!     &configuration,
//!     &SearchSettings::default(),
//!     &LbfgsMinimizer::default(),
//! );
//! assert!(outcome.residual.is_finite());
//! assert!(outcome.section.height_in <= 4.0);
//! ```

use serde::{Deserialize, Serialize};

use super::{Minimizer, Minimum, SolveOptions};
use crate::calculations::{analyze, Configuration, CrossSection, SectionAnalysis};
use crate::errors::{DesignError, DesignResult};
use crate::settings::SearchSettings;

/// Residual assigned to a degenerate section
pub const DEGENERATE_RESIDUAL: f64 = 1e20;

/// Best geometry found for one configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationOutcome {
    /// Configuration with the optimized height and span
    pub section: CrossSection,
    /// Analysis at the optimized geometry; `None` when it is degenerate
    pub analysis: Option<SectionAnalysis>,
    /// Residual at the optimized geometry
    pub residual: f64,
    /// Whether the inner solve met its gradient tolerance
    pub converged: bool,
    /// Inner solver iterations
    pub iterations: u64,
}

/// Analyze a section, applying the optional flange-fit requirement first.
pub fn evaluate_section(section: &CrossSection, settings: &SearchSettings) -> DesignResult<SectionAnalysis> {
    if settings.require_feasible_depth && !section.is_depth_feasible() {
        return Err(DesignError::degenerate(
            "flange depth t_ht + t_hb exceeding height",
            section.flange_depth_in(),
        ));
    }
    analyze(section)
}

/// Residual of `configuration` at (height, span), or [`DEGENERATE_RESIDUAL`]
pub fn candidate_residual(
    target_lb: f64,
    configuration: &Configuration,
    height_in: f64,
    span_in: f64,
    settings: &SearchSettings,
) -> f64 {
    let section = CrossSection::new(height_in, span_in, *configuration);
    match evaluate_section(&section, settings) {
        Ok(analysis) => analysis.loads.residual(target_lb),
        Err(_) => DEGENERATE_RESIDUAL,
    }
}

/// Optimize height and span for one configuration.
///
/// Never fails: non-convergence and solver errors still produce an outcome,
/// possibly an uncompetitive one.
pub fn optimize_configuration(
    target_lb: f64,
    configuration: &Configuration,
    settings: &SearchSettings,
    minimizer: &dyn Minimizer,
) -> ConfigurationOutcome {
    let objective =
        |x: &[f64]| candidate_residual(target_lb, configuration, x[0], x[1], settings);

    let bounds = [settings.height_bounds, settings.span_bounds];
    let initial = [settings.initial_height_in, settings.initial_span_in];
    let options = SolveOptions {
        gradient_tolerance: settings.gradient_tolerance,
        max_iterations: settings.max_iterations,
    };

    let minimum = minimizer
        .minimize(&objective, &bounds, &initial, &options)
        .ok()
        .filter(|m| m.point.len() == 2)
        .unwrap_or_else(|| Minimum {
            point: initial.to_vec(),
            value: objective(&initial),
            converged: false,
            iterations: 0,
        });

    let section = CrossSection::new(
        settings.height_bounds.clamp(minimum.point[0]),
        settings.span_bounds.clamp(minimum.point[1]),
        *configuration,
    );
    let analysis = evaluate_section(&section, settings).ok();
    let residual = analysis
        .map(|a| a.loads.residual(target_lb))
        .unwrap_or(DEGENERATE_RESIDUAL);

    ConfigurationOutcome {
        section,
        analysis,
        residual,
        converged: minimum.converged,
        iterations: minimum.iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{MaterialAssignment, Species};
    use crate::optimize::LbfgsMinimizer;
    use crate::settings::Bounds;

    /// Minimizer that always fails, to exercise the fallback path
    struct FailingMinimizer;

    impl Minimizer for FailingMinimizer {
        fn minimize(
            &self,
            _objective: &dyn Fn(&[f64]) -> f64,
            _bounds: &[Bounds],
            _initial: &[f64],
            _options: &SolveOptions,
        ) -> DesignResult<Minimum> {
            Err(DesignError::solver_failed("always fails"))
        }
    }

    fn pine_configuration() -> Configuration {
        Configuration::new(MaterialAssignment::uniform(Species::Pine), 0.25, 0.25, 0.25)
    }

    #[test]
    fn test_improves_on_initial_guess() {
        let settings = SearchSettings::default();
        let configuration = pine_configuration();
        let start = candidate_residual(1_250.0, &configuration, 2.0, 0.5, &settings);

        let outcome = optimize_configuration(1_250.0, &configuration, &settings, &LbfgsMinimizer::default());
        assert!(outcome.residual <= start, "{} > {}", outcome.residual, start);
        assert!(outcome.analysis.is_some());
        assert!(settings.height_bounds.contains(outcome.section.height_in));
        assert!(settings.span_bounds.contains(outcome.section.span_in));
    }

    #[test]
    fn test_deterministic() {
        let settings = SearchSettings::default();
        let configuration = Configuration::new(
            MaterialAssignment::new(Species::Oak, Species::Pine, Species::Oak),
            0.3125,
            0.1875,
            0.5,
        );
        let minimizer = LbfgsMinimizer::default();
        let first = optimize_configuration(1_250.0, &configuration, &settings, &minimizer);
        let second = optimize_configuration(1_250.0, &configuration, &settings, &minimizer);
        assert!((first.residual - second.residual).abs() < 1e-9);
        assert_eq!(first.section, second.section);
    }

    #[test]
    fn test_solver_failure_falls_back_to_initial_guess() {
        let settings = SearchSettings::default();
        let configuration = pine_configuration();
        let outcome = optimize_configuration(1_250.0, &configuration, &settings, &FailingMinimizer);

        assert_eq!(outcome.section.height_in, 2.0);
        assert_eq!(outcome.section.span_in, 0.5);
        assert!(!outcome.converged);
        let expected = candidate_residual(1_250.0, &configuration, 2.0, 0.5, &settings);
        assert_eq!(outcome.residual, expected);
    }

    #[test]
    fn test_degenerate_point_scores_sentinel() {
        let settings = SearchSettings::default();
        let residual = candidate_residual(1_250.0, &pine_configuration(), 2.0, 0.0, &settings);
        assert_eq!(residual, DEGENERATE_RESIDUAL);
    }

    #[test]
    fn test_feasibility_requirement() {
        let configuration = Configuration::new(MaterialAssignment::default(), 0.25, 0.5, 0.5);
        let section = CrossSection::new(0.8, 0.5, configuration);

        let permissive = SearchSettings::default();
        assert!(evaluate_section(&section, &permissive).is_ok());

        let strict = SearchSettings {
            require_feasible_depth: true,
            ..SearchSettings::default()
        };
        let err = evaluate_section(&section, &strict).unwrap_err();
        assert!(matches!(err, DesignError::DegenerateGeometry { .. }));
    }

    #[test]
    fn test_zero_target_drives_loads_down() {
        let settings = SearchSettings::default();
        let configuration = pine_configuration();
        let start = candidate_residual(0.0, &configuration, 2.0, 0.5, &settings);
        let outcome = optimize_configuration(0.0, &configuration, &settings, &LbfgsMinimizer::default());
        assert!(outcome.residual <= start);
    }
}
