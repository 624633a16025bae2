//! # Search Settings
//!
//! Every constant that shapes the design search: the thickness grid shared by
//! all three components, the bounds and seed of the continuous (height, span)
//! solve, and the inner solver's tolerance and iteration budget.
//!
//! The defaults reproduce the reference design problem. Settings serialize to
//! JSON and every field is optional when loading (missing fields take their
//! default).
//!
//! ## Example
//!
//! ```rust
//! use beam_core::settings::SearchSettings;
//!
//! let settings = SearchSettings::default();
//! assert_eq!(settings.thickness.len(), 9);
//! assert!(settings.validate().is_ok());
//!
//! let custom: SearchSettings = serde_json::from_str(r#"{ "max_iterations": 50 }"#).unwrap();
//! assert_eq!(custom.max_iterations, 50);
//! assert_eq!(custom.initial_height_in, 2.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};
use crate::search::candidates;

/// Admissible thickness values: `min, min + step, ...` while strictly below `max`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThicknessGrid {
    /// Smallest thickness (in), included
    pub min_in: f64,
    /// Upper bound (in), excluded
    pub max_in: f64,
    /// Increment between grid values (in)
    pub step_in: f64,
}

impl ThicknessGrid {
    /// Most values a grid may hold
    pub const MAX_VALUES: usize = 1_000;

    /// Create a grid from its bounds and step
    pub fn new(min_in: f64, max_in: f64, step_in: f64) -> Self {
        ThicknessGrid { min_in, max_in, step_in }
    }

    /// `ceil((max - min) / step)`, before any values are generated
    fn raw_count(&self) -> f64 {
        ((self.max_in - self.min_in) / self.step_in).ceil()
    }

    /// True when the grid would hold more than [`Self::MAX_VALUES`] values
    pub fn is_too_fine(&self) -> bool {
        !(self.raw_count() <= Self::MAX_VALUES as f64)
    }

    /// Grid values in ascending order.
    ///
    /// Each value is computed as `min + i·step` rather than by accumulation,
    /// so the count is exactly `ceil((max - min) / step)`. A grid finer than
    /// [`Self::MAX_VALUES`] yields no values.
    pub fn values(&self) -> Vec<f64> {
        if !(self.step_in > 0.0) || !(self.max_in > self.min_in) || self.is_too_fine() {
            return Vec::new();
        }
        let count = self.raw_count() as usize;
        (0..count)
            .map(|i| self.min_in + i as f64 * self.step_in)
            .filter(|t| *t < self.max_in)
            .collect()
    }

    /// Number of grid values
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// True when the grid holds no values
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ThicknessGrid {
    fn default() -> Self {
        ThicknessGrid {
            min_in: 3.0 / 16.0,
            max_in: 3.0 / 4.0,
            step_in: 1.0 / 16.0,
        }
    }
}

/// Closed interval `[lower, upper]` for one continuous variable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    /// Create bounds
    pub fn new(lower: f64, upper: f64) -> Self {
        Bounds { lower, upper }
    }

    /// Check whether `value` lies inside the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Clamp `value` into the interval
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.lower).min(self.upper)
    }

    /// Interval width
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Settings for one design search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Thickness grid used for web, top flange and bottom flange
    pub thickness: ThicknessGrid,

    /// Bounds on web height l_v (in)
    pub height_bounds: Bounds,

    /// Bounds on span l_h (in)
    pub span_bounds: Bounds,

    /// Starting height for every inner solve (in)
    pub initial_height_in: f64,

    /// Starting span for every inner solve (in)
    pub initial_span_in: f64,

    /// Gradient-norm tolerance for the inner solve
    pub gradient_tolerance: f64,

    /// Iteration budget for each inner solve
    pub max_iterations: u64,

    /// Treat sections whose flanges do not fit inside the web height as degenerate
    ///
    /// Off by default, which keeps the permissive behavior where the solver may
    /// explore overlapping flanges.
    pub require_feasible_depth: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            thickness: ThicknessGrid::default(),
            height_bounds: Bounds::new(0.0, 4.0),
            span_bounds: Bounds::new(0.0, 1.5),
            initial_height_in: 2.0,
            initial_span_in: 0.5,
            gradient_tolerance: 1e-2,
            max_iterations: 200,
            require_feasible_depth: false,
        }
    }
}

impl SearchSettings {
    /// Validate settings before a search.
    pub fn validate(&self) -> DesignResult<()> {
        let grid = &self.thickness;
        if !grid.min_in.is_finite() || grid.min_in <= 0.0 {
            return Err(DesignError::invalid_input(
                "thickness.min_in",
                grid.min_in.to_string(),
                "Minimum thickness must be positive",
            ));
        }
        if !grid.step_in.is_finite() || grid.step_in <= 0.0 {
            return Err(DesignError::invalid_input(
                "thickness.step_in",
                grid.step_in.to_string(),
                "Thickness increment must be positive",
            ));
        }
        if !grid.max_in.is_finite() || grid.max_in <= grid.min_in {
            return Err(DesignError::invalid_input(
                "thickness.max_in",
                grid.max_in.to_string(),
                "Maximum thickness must exceed the minimum",
            ));
        }
        if grid.is_too_fine() {
            return Err(DesignError::invalid_input(
                "thickness.step_in",
                grid.step_in.to_string(),
                format!("Grid would hold more than {} thickness values", ThicknessGrid::MAX_VALUES),
            ));
        }
        self.combination_count()?;

        validate_bounds("height_bounds", &self.height_bounds)?;
        validate_bounds("span_bounds", &self.span_bounds)?;

        if !self.height_bounds.contains(self.initial_height_in) {
            return Err(DesignError::invalid_input(
                "initial_height_in",
                self.initial_height_in.to_string(),
                "Initial height must lie within height_bounds",
            ));
        }
        if !self.span_bounds.contains(self.initial_span_in) {
            return Err(DesignError::invalid_input(
                "initial_span_in",
                self.initial_span_in.to_string(),
                "Initial span must lie within span_bounds",
            ));
        }
        if !self.gradient_tolerance.is_finite() || self.gradient_tolerance <= 0.0 {
            return Err(DesignError::invalid_input(
                "gradient_tolerance",
                self.gradient_tolerance.to_string(),
                "Tolerance must be positive",
            ));
        }
        if self.max_iterations == 0 {
            return Err(DesignError::invalid_input(
                "max_iterations",
                "0",
                "At least one iteration is required",
            ));
        }
        Ok(())
    }

    /// Number of discrete configurations the search will enumerate
    ///
    /// # Errors
    ///
    /// * `DesignError::InvalidInput` - the count exceeds [`crate::search::MAX_COMBINATIONS`]
    pub fn combination_count(&self) -> DesignResult<usize> {
        Ok(candidates(&self.thickness)?.len())
    }
}

fn validate_bounds(field: &str, bounds: &Bounds) -> DesignResult<()> {
    if !bounds.lower.is_finite() || !bounds.upper.is_finite() || bounds.upper <= bounds.lower {
        return Err(DesignError::invalid_input(
            field,
            format!("[{}, {}]", bounds.lower, bounds.upper),
            "Bounds must be finite with upper > lower",
        ));
    }
    Ok(())
}
