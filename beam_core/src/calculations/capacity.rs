//! # Section Capacity Analysis
//!
//! Computes the centroid, second moment of area and the three failure loads
//! of one built-up cross-section.
//!
//! ## Assumptions
//!
//! - Two identical webs of height `l_v` and thickness `t_v`
//! - Top and bottom flanges of width `l_h`, glued inside the web height
//! - Fixed three-point loading arrangement (coefficients in [`crate::equations::beam`])
//! - Bending governed by the weaker of web and bottom flange
//! - Glue shear governed by the weakest of the three glue strengths
//! - Web shear governed by the web alone
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::{analyze, Configuration, CrossSection};
//! use beam_core::materials::{MaterialAssignment, Species};
//!
//! let configuration = Configuration::new(
//!     MaterialAssignment::uniform(Species::Pine),
//!     0.25, // web
//!     0.25, // top flange
//!     0.25, // bottom flange
//! );
//! let section = CrossSection::new(2.0, 0.5, configuration);
//!
//! let analysis = analyze(&section).unwrap();
//! assert!((analysis.centroid_in - 1.0).abs() < 1e-12);
//! assert!(analysis.loads.bending_lb > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{
    bending_failure_load, built_up_area, built_up_centroid, built_up_moment_of_inertia,
    glue_failure_load, glue_lever, shear_failure_load, shear_lever,
};
use crate::errors::{DesignError, DesignResult};
use crate::materials::{ComponentStrengths, MaterialAssignment};

/// The discrete part of a design: species and thickness of each component.
///
/// This is the tuple the design search enumerates; height and span are left
/// to the continuous optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Species of web, top flange and bottom flange
    pub materials: MaterialAssignment,
    /// Web thickness t_v (in)
    pub web_thickness_in: f64,
    /// Top flange thickness t_ht (in)
    pub top_thickness_in: f64,
    /// Bottom flange thickness t_hb (in)
    pub bottom_thickness_in: f64,
}

impl Configuration {
    /// Create a configuration with thicknesses in (web, top, bottom) order
    pub fn new(materials: MaterialAssignment, web_thickness_in: f64, top_thickness_in: f64, bottom_thickness_in: f64) -> Self {
        Configuration {
            materials,
            web_thickness_in,
            top_thickness_in,
            bottom_thickness_in,
        }
    }
}

/// A complete candidate beam: discrete configuration plus continuous geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossSection {
    /// Web height l_v (in)
    pub height_in: f64,
    /// Span / flange width l_h (in)
    pub span_in: f64,
    /// Species and thicknesses
    pub configuration: Configuration,
}

impl CrossSection {
    /// Create a cross-section from geometry and a discrete configuration
    pub fn new(height_in: f64, span_in: f64, configuration: Configuration) -> Self {
        CrossSection {
            height_in,
            span_in,
            configuration,
        }
    }

    /// The five-number geometry vector `[height, span, t_v, t_hb, t_ht]`
    pub fn geometry_vector(&self) -> [f64; 5] {
        let c = &self.configuration;
        [
            self.height_in,
            self.span_in,
            c.web_thickness_in,
            c.bottom_thickness_in,
            c.top_thickness_in,
        ]
    }

    /// Combined depth of both flanges (in)
    pub fn flange_depth_in(&self) -> f64 {
        self.configuration.top_thickness_in + self.configuration.bottom_thickness_in
    }

    /// True when the flanges fit inside the web height without overlapping
    pub fn is_depth_feasible(&self) -> bool {
        self.flange_depth_in() < self.height_in
    }
}

/// Which failure mode a load belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureMode {
    Bending,
    Glue,
    Shear,
}

impl FailureMode {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FailureMode::Bending => "Bending",
            FailureMode::Glue => "Glue shear",
            FailureMode::Shear => "Web shear",
        }
    }
}

/// The three predicted failure loads (lb)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FailureLoads {
    /// Load at bending failure
    pub bending_lb: f64,
    /// Load at glue-line shear failure
    pub glue_lb: f64,
    /// Load at web shear failure
    pub shear_lb: f64,
}

impl FailureLoads {
    /// Loads in `[bending, glue, shear]` order
    pub fn as_array(&self) -> [f64; 3] {
        [self.bending_lb, self.glue_lb, self.shear_lb]
    }

    /// Root-sum-of-squares deviation from `target_lb`
    ///
    /// # Formula
    /// r = √(Σ (P_goal − P_i)²)
    pub fn residual(&self, target_lb: f64) -> f64 {
        self.as_array()
            .iter()
            .map(|p| (target_lb - p).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    /// The mode that fails first (lowest load)
    pub fn governing_mode(&self) -> FailureMode {
        if self.bending_lb <= self.glue_lb && self.bending_lb <= self.shear_lb {
            FailureMode::Bending
        } else if self.glue_lb <= self.shear_lb {
            FailureMode::Glue
        } else {
            FailureMode::Shear
        }
    }

    /// The lowest of the three loads
    pub fn capacity_lb(&self) -> f64 {
        self.bending_lb.min(self.glue_lb).min(self.shear_lb)
    }
}

/// Full analysis output for one cross-section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionAnalysis {
    /// Centroid height y_g above the section base (in)
    pub centroid_in: f64,
    /// Second moment of area I_z about the centroid (in⁴)
    pub moment_of_inertia_in4: f64,
    /// Predicted failure loads
    pub loads: FailureLoads,
}

/// Analyze a cross-section using the catalog strengths of its species.
///
/// # Errors
///
/// * `DesignError::DegenerateGeometry` - a dimension, the centroid, I_z, or
///   one of the formula denominators is zero or negative (or not finite)
pub fn analyze(section: &CrossSection) -> DesignResult<SectionAnalysis> {
    let strengths = section.configuration.materials.strengths();
    analyze_with_strengths(section, &strengths)
}

/// Analyze a cross-section with explicit component strengths.
///
/// The species recorded in `section` are ignored; `strengths` is used as-is.
pub fn analyze_with_strengths(section: &CrossSection, strengths: &ComponentStrengths) -> DesignResult<SectionAnalysis> {
    let l_v = section.height_in;
    let l_h = section.span_in;
    let t_v = section.configuration.web_thickness_in;
    let t_ht = section.configuration.top_thickness_in;
    let t_hb = section.configuration.bottom_thickness_in;

    require_positive("height l_v", l_v)?;
    require_positive("span l_h", l_h)?;
    require_positive("web thickness t_v", t_v)?;
    require_positive("top flange thickness t_ht", t_ht)?;
    require_positive("bottom flange thickness t_hb", t_hb)?;

    require_positive("section area", built_up_area(l_v, l_h, t_v, t_ht, t_hb))?;

    let y_g = built_up_centroid(l_v, l_h, t_v, t_ht, t_hb);
    require_positive("centroid height y_g", y_g)?;

    let i_z = built_up_moment_of_inertia(l_v, l_h, t_v, t_ht, t_hb, y_g);
    require_positive("second moment of area i_z", i_z)?;

    require_positive("glue lever l_h(y_g - t_hb/2)", glue_lever(l_h, y_g, t_hb))?;
    require_positive("shear denominator", shear_lever(l_v, l_h, t_ht, y_g))?;

    let loads = FailureLoads {
        bending_lb: bending_failure_load(strengths.governing_bending_psi(), i_z, y_g),
        glue_lb: glue_failure_load(strengths.governing_glue_psi(), i_z, l_h, y_g, t_hb),
        shear_lb: shear_failure_load(strengths.governing_shear_psi(), i_z, t_v, l_v, l_h, t_ht, y_g),
    };

    Ok(SectionAnalysis {
        centroid_in: y_g,
        moment_of_inertia_in4: i_z,
        loads,
    })
}

fn require_positive(quantity: &str, value: f64) -> DesignResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DesignError::degenerate(quantity, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{Species, SpeciesProperties};

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn test_section(materials: MaterialAssignment) -> CrossSection {
        CrossSection::new(2.0, 0.5, Configuration::new(materials, 0.25, 0.25, 0.25))
    }

    #[test]
    fn test_all_pine_reference_values() {
        let analysis = analyze(&test_section(MaterialAssignment::uniform(Species::Pine))).unwrap();
        assert!(approx_eq(analysis.centroid_in, 1.0, 1e-12));
        assert!(approx_eq(analysis.moment_of_inertia_in4, 0.526_041_667, 1e-8));
        assert!(approx_eq(analysis.loads.bending_lb, 1570.1248, 1e-3));
        assert!(approx_eq(analysis.loads.glue_lb, 3963.8492, 1e-3));
        assert!(approx_eq(analysis.loads.shear_lb, 589.5618, 1e-3));
    }

    #[test]
    fn test_all_oak_reference_values() {
        let analysis = analyze(&test_section(MaterialAssignment::uniform(Species::Oak))).unwrap();
        assert!(approx_eq(analysis.loads.bending_lb, 1958.7381, 1e-3));
        assert!(approx_eq(analysis.loads.glue_lb, 5575.0397, 1e-3));
        assert!(approx_eq(analysis.loads.shear_lb, 1135.2621, 1e-3));
    }

    #[test]
    fn test_moment_of_inertia_positive_over_valid_range() {
        let materials = MaterialAssignment::uniform(Species::Pine);
        for &height in &[0.5, 1.0, 2.0, 3.5] {
            for &span in &[0.25, 0.75, 1.5] {
                for &t in &[0.1875, 0.4375, 0.6875] {
                    let section = CrossSection::new(height, span, Configuration::new(materials, t, t, t));
                    if let Ok(analysis) = analyze(&section) {
                        assert!(analysis.moment_of_inertia_in4 > 0.0);
                    }
                    let y_g = built_up_centroid(height, span, t, t, t);
                    let i_z = built_up_moment_of_inertia(height, span, t, t, t, y_g);
                    assert!(i_z > 0.0, "I_z = {} at l_v={}, l_h={}, t={}", i_z, height, span, t);
                }
            }
        }
    }

    #[test]
    fn test_zero_web_thickness_is_degenerate() {
        let mut section = test_section(MaterialAssignment::default());
        section.configuration.web_thickness_in = 0.0;
        let err = analyze(&section).unwrap_err();
        assert!(matches!(err, DesignError::DegenerateGeometry { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_zero_span_is_degenerate() {
        let mut section = test_section(MaterialAssignment::default());
        section.span_in = 0.0;
        assert!(matches!(
            analyze(&section),
            Err(DesignError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn test_nan_geometry_is_degenerate() {
        let mut section = test_section(MaterialAssignment::default());
        section.height_in = f64::NAN;
        assert!(analyze(&section).is_err());
    }

    #[test]
    fn test_shallow_section_glue_lever_guard() {
        // Web barely taller than the bottom flange: centroid drops below t_hb/2
        let section = CrossSection::new(
            0.01,
            1.5,
            Configuration::new(MaterialAssignment::default(), 0.1875, 0.1875, 0.6875),
        );
        match analyze(&section) {
            Ok(analysis) => {
                assert!(analysis.centroid_in > 0.6875 / 2.0);
                assert!(analysis.loads.glue_lb.is_finite());
            }
            Err(e) => assert!(matches!(e, DesignError::DegenerateGeometry { .. })),
        }
    }

    #[test]
    fn test_strength_monotonicity() {
        let section = test_section(MaterialAssignment::uniform(Species::Pine));
        let base = MaterialAssignment::uniform(Species::Pine).strengths();
        let baseline = analyze_with_strengths(&section, &base).unwrap().loads;

        let mut stronger_web = base;
        stronger_web.web = base.web.scaled(1.5);
        let loads = analyze_with_strengths(&section, &stronger_web).unwrap().loads;
        // Web shear is governed by the web alone
        assert!(loads.shear_lb > baseline.shear_lb);
        assert!(loads.bending_lb >= baseline.bending_lb);
        assert!(loads.glue_lb >= baseline.glue_lb);

        let mut stronger_all = base;
        stronger_all.web = base.web.scaled(2.0);
        stronger_all.top = base.top.scaled(2.0);
        stronger_all.bottom = base.bottom.scaled(2.0);
        let loads = analyze_with_strengths(&section, &stronger_all).unwrap().loads;
        assert!(approx_eq(loads.bending_lb, 2.0 * baseline.bending_lb, 1e-6));
        assert!(approx_eq(loads.glue_lb, 2.0 * baseline.glue_lb, 1e-6));
        assert!(approx_eq(loads.shear_lb, 2.0 * baseline.shear_lb, 1e-6));
    }

    #[test]
    fn test_weaker_bottom_flange_governs_bending() {
        let section = test_section(MaterialAssignment::new(Species::Oak, Species::Oak, Species::Pine));
        let base = section.configuration.materials.strengths();
        let baseline = analyze_with_strengths(&section, &base).unwrap().loads;

        let mut stronger_bottom = base;
        stronger_bottom.bottom = SpeciesProperties {
            fb_psi: 16_000.0,
            ..base.bottom
        };
        let loads = analyze_with_strengths(&section, &stronger_bottom).unwrap().loads;
        assert!(loads.bending_lb > baseline.bending_lb);
        assert!(approx_eq(loads.bending_lb, baseline.bending_lb * 16_000.0 / 14_327.0, 1e-6));
        assert_eq!(loads.glue_lb, baseline.glue_lb);
        assert_eq!(loads.shear_lb, baseline.shear_lb);
    }

    #[test]
    fn test_weaker_top_flange_governs_glue() {
        let section = test_section(MaterialAssignment::new(Species::Oak, Species::Pine, Species::Oak));
        let base = section.configuration.materials.strengths();
        let baseline = analyze_with_strengths(&section, &base).unwrap().loads;

        let mut stronger_top = base;
        stronger_top.top = SpeciesProperties {
            fg_psi: 1_200.0,
            ..base.top
        };
        let loads = analyze_with_strengths(&section, &stronger_top).unwrap().loads;
        assert!(loads.glue_lb > baseline.glue_lb);
        assert!(approx_eq(loads.glue_lb, baseline.glue_lb * 1_200.0 / 989.0, 1e-6));
        assert_eq!(loads.bending_lb, baseline.bending_lb);
        assert_eq!(loads.shear_lb, baseline.shear_lb);
    }

    #[test]
    fn test_no_single_strength_increase_lowers_a_load() {
        let materials = [
            MaterialAssignment::uniform(Species::Pine),
            MaterialAssignment::new(Species::Oak, Species::Pine, Species::Oak),
            MaterialAssignment::new(Species::Pine, Species::Oak, Species::Oak),
            MaterialAssignment::new(Species::Oak, Species::Oak, Species::Pine),
        ];
        let raisers: [fn(SpeciesProperties) -> SpeciesProperties; 3] = [
            |p| SpeciesProperties { fb_psi: p.fb_psi * 1.25, ..p },
            |p| SpeciesProperties { fv_psi: p.fv_psi * 1.25, ..p },
            |p| SpeciesProperties { fg_psi: p.fg_psi * 1.25, ..p },
        ];

        for assignment in materials {
            let section = test_section(assignment);
            let base = assignment.strengths();
            let baseline = analyze_with_strengths(&section, &base).unwrap().loads;

            for raise in raisers {
                for component in 0..3 {
                    let mut raised = base;
                    match component {
                        0 => raised.web = raise(base.web),
                        1 => raised.top = raise(base.top),
                        _ => raised.bottom = raise(base.bottom),
                    }
                    let loads = analyze_with_strengths(&section, &raised).unwrap().loads;
                    assert!(loads.bending_lb >= baseline.bending_lb);
                    assert!(loads.glue_lb >= baseline.glue_lb);
                    assert!(loads.shear_lb >= baseline.shear_lb);
                }
            }
        }
    }

    #[test]
    fn test_residual() {
        let loads = FailureLoads {
            bending_lb: 1_000.0,
            glue_lb: 1_300.0,
            shear_lb: 1_250.0,
        };
        // √(250² + 50² + 0²)
        assert!(approx_eq(loads.residual(1_250.0), (250.0_f64.powi(2) + 50.0_f64.powi(2)).sqrt(), 1e-9));
        assert_eq!(loads.governing_mode(), FailureMode::Bending);
        assert_eq!(loads.capacity_lb(), 1_000.0);
    }

    #[test]
    fn test_geometry_vector_order() {
        let section = CrossSection::new(
            2.5,
            0.75,
            Configuration::new(MaterialAssignment::default(), 0.1875, 0.3125, 0.25),
        );
        assert_eq!(section.geometry_vector(), [2.5, 0.75, 0.1875, 0.25, 0.3125]);
        assert!(section.is_depth_feasible());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let section = test_section(MaterialAssignment::new(Species::Oak, Species::Pine, Species::Oak));
        let json = serde_json::to_string(&section).unwrap();
        let parsed: CrossSection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, section);
    }
}
