//! # Design Search
//!
//! Exhaustive search over every discrete configuration: species of web, top
//! flange and bottom flange (2 × 2 × 2) times web, top and bottom thickness
//! (|grid|³). Each configuration gets its own (height, span) solve, and the
//! configuration with the smallest residual wins.
//!
//! ## Enumeration order
//!
//! Outermost to innermost: web species, top species, bottom species, web
//! thickness, top thickness, bottom thickness. Species run Pine then Oak;
//! thicknesses run in ascending grid order. A later configuration replaces the
//! current best only when its residual is strictly smaller, so ties go to the
//! configuration enumerated first.
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::search::search;
//! use beam_core::settings::SearchSettings;
//!
//! let result = search(1_250.0, &SearchSettings::default()).unwrap();
//! assert_eq!(result.evaluated, 5832);
//! println!("{:?}", result.section.geometry_vector());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{Configuration, CrossSection, FailureLoads, SectionAnalysis};
use crate::errors::{DesignError, DesignResult};
use crate::materials::{MaterialAssignment, Species};
use crate::optimize::{optimize_configuration, ConfigurationOutcome, LbfgsMinimizer, Minimizer};
use crate::settings::{SearchSettings, ThicknessGrid};

/// Lazy, restartable enumeration of every discrete configuration.
///
/// Configurations are decoded from a running index, so cloning the iterator
/// or calling [`candidates`] again replays the same sequence.
#[derive(Debug, Clone)]
pub struct Candidates {
    thicknesses: Vec<f64>,
    next_index: usize,
    total: usize,
}

/// Largest enumeration a search will run
pub const MAX_COMBINATIONS: usize = 1_000_000;

/// Enumerate all configurations for `grid` in search order.
///
/// # Errors
///
/// * `DesignError::InvalidInput` - the enumeration would exceed [`MAX_COMBINATIONS`]
pub fn candidates(grid: &ThicknessGrid) -> DesignResult<Candidates> {
    let thicknesses = grid.values();
    let species = Species::ALL.len();

    let total = species
        .checked_pow(3)
        .zip(thicknesses.len().checked_pow(3))
        .and_then(|(s, t)| s.checked_mul(t))
        .filter(|total| *total <= MAX_COMBINATIONS)
        .ok_or_else(|| {
            DesignError::invalid_input(
                "thickness",
                format!("{} values per component", thicknesses.len()),
                format!("Search would exceed {} configurations", MAX_COMBINATIONS),
            )
        })?;

    Ok(Candidates {
        thicknesses,
        next_index: 0,
        total,
    })
}

impl Candidates {
    /// Configuration at position `index` of the enumeration
    pub fn configuration_at(&self, index: usize) -> Option<Configuration> {
        if index >= self.total {
            return None;
        }
        let n = self.thicknesses.len();
        let s = Species::ALL.len();

        // Mixed-radix decode, innermost digit first
        let mut rest = index;
        let bottom_t = rest % n;
        rest /= n;
        let top_t = rest % n;
        rest /= n;
        let web_t = rest % n;
        rest /= n;
        let bottom = rest % s;
        rest /= s;
        let top = rest % s;
        rest /= s;
        let web = rest;

        Some(Configuration::new(
            MaterialAssignment::new(Species::ALL[web], Species::ALL[top], Species::ALL[bottom]),
            self.thicknesses[web_t],
            self.thicknesses[top_t],
            self.thicknesses[bottom_t],
        ))
    }
}

impl Iterator for Candidates {
    type Item = Configuration;

    fn next(&mut self) -> Option<Self::Item> {
        let configuration = self.configuration_at(self.next_index)?;
        self.next_index += 1;
        Some(configuration)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Candidates {}

/// Progress snapshot passed to a search observer after each configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchProgress {
    /// Configurations evaluated so far
    pub evaluated: usize,
    /// Configurations in the full enumeration
    pub total: usize,
    /// Residual of the configuration just evaluated
    pub residual: f64,
    /// Best residual seen so far
    pub best_residual: f64,
}

/// The winning design of a search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best cross-section found
    pub section: CrossSection,
    /// Centroid, I_z and failure loads of the best section
    pub analysis: SectionAnalysis,
    /// Root-sum-of-squares deviation from the target
    pub residual: f64,
    /// Whether the winning inner solve met its tolerance
    pub converged: bool,
    /// Position of the winner in the enumeration
    pub enumeration_index: usize,
    /// Number of configurations evaluated
    pub evaluated: usize,
}

impl SearchResult {
    /// Failure loads of the winning section
    pub fn loads(&self) -> FailureLoads {
        self.analysis.loads
    }

    /// Species of the winning section
    pub fn materials(&self) -> MaterialAssignment {
        self.section.configuration.materials
    }
}

/// Check that a target load can be searched for.
///
/// Zero is accepted; negative and non-finite targets are not.
pub fn validate_target(target_lb: f64) -> DesignResult<()> {
    if !target_lb.is_finite() {
        return Err(DesignError::invalid_input(
            "target_lb",
            target_lb.to_string(),
            "Target load must be a finite number",
        ));
    }
    if target_lb < 0.0 {
        return Err(DesignError::invalid_input(
            "target_lb",
            target_lb.to_string(),
            "Target load cannot be negative",
        ));
    }
    Ok(())
}

/// Keep `best` unless `candidate` has a strictly smaller residual.
///
/// An empty `best` always takes the candidate.
pub fn keep_better(
    best: Option<(usize, ConfigurationOutcome)>,
    candidate: (usize, ConfigurationOutcome),
) -> Option<(usize, ConfigurationOutcome)> {
    match best {
        Some((_, ref current)) if !(candidate.1.residual < current.residual) => best,
        _ => Some(candidate),
    }
}

/// Pick the first-enumerated outcome with the smallest residual.
pub fn select_best<I>(outcomes: I) -> Option<(usize, ConfigurationOutcome)>
where
    I: IntoIterator<Item = (usize, ConfigurationOutcome)>,
{
    outcomes.into_iter().fold(None, keep_better)
}

/// Run the full design search with the default L-BFGS minimizer.
///
/// # Errors
///
/// * `DesignError::InvalidInput` - negative or non-finite target, or invalid settings
pub fn search(target_lb: f64, settings: &SearchSettings) -> DesignResult<SearchResult> {
    search_with(target_lb, settings, &LbfgsMinimizer::default(), None)
}

/// Run the full design search with a chosen minimizer and optional observer.
///
/// The observer is called once per configuration, in enumeration order.
pub fn search_with(
    target_lb: f64,
    settings: &SearchSettings,
    minimizer: &dyn Minimizer,
    mut observer: Option<&mut dyn FnMut(&SearchProgress)>,
) -> DesignResult<SearchResult> {
    validate_target(target_lb)?;
    settings.validate()?;

    let configurations = candidates(&settings.thickness)?;
    let total = configurations.len();

    let mut evaluated = 0;
    let mut best: Option<(usize, ConfigurationOutcome)> = None;
    for (index, configuration) in configurations.enumerate() {
        let outcome = optimize_configuration(target_lb, &configuration, settings, minimizer);
        evaluated += 1;
        best = keep_better(best, (index, outcome));

        if let Some(observe) = observer.as_mut() {
            let best_residual = best.as_ref().map_or(outcome.residual, |(_, b)| b.residual);
            observe(&SearchProgress {
                evaluated,
                total,
                residual: outcome.residual,
                best_residual,
            });
        }
    }

    let (enumeration_index, outcome) = best.ok_or_else(|| {
        DesignError::invalid_input("thickness", format!("{:?}", settings.thickness), "Thickness grid is empty")
    })?;
    let analysis = outcome
        .analysis
        .ok_or_else(|| DesignError::solver_failed("every configuration produced a degenerate section"))?;

    Ok(SearchResult {
        section: outcome.section,
        analysis,
        residual: outcome.residual,
        converged: outcome.converged,
        enumeration_index,
        evaluated,
    })
}
