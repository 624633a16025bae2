//! # Result Reporting
//!
//! Renders a [`SearchResult`] three ways:
//!
//! - [`render_text`] - the compact three-line form consumed by existing callers
//! - [`render_summary`] - a readable block for terminals
//! - [`DesignReport`] - a JSON envelope with run metadata, saved by
//!   [`crate::file_io::save_report`]
//!
//! ## Text format
//!
//! ```text
//! [height, span, t_v, t_hb, t_ht]
//! [P_bend, P_glue, P_shear]
//! TOP BOTTOM WEB
//! ```
//!
//! The last line lists the species labels of the top flange, bottom flange
//! and web, in that order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DesignResult;
use crate::search::SearchResult;
use crate::settings::SearchSettings;

/// Current schema version for saved reports
pub const SCHEMA_VERSION: &str = "0.1.0";

fn bracketed(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// Compact textual rendering of a search result.
///
/// # Example
///
/// ```rust,no_run
/// use beam_core::report::render_text;
/// use beam_core::search::search;
/// use beam_core::settings::SearchSettings;
///
/// let result = search(1_250.0, &SearchSettings::default()).unwrap();
/// let text = render_text(&result);
/// assert_eq!(text.lines().count(), 3);
/// ```
pub fn render_text(result: &SearchResult) -> String {
    let materials = result.materials();
    format!(
        "{}\n{}\n{} {} {}",
        bracketed(&result.section.geometry_vector()),
        bracketed(&result.loads().as_array()),
        materials.top.label(),
        materials.bottom.label(),
        materials.web.label(),
    )
}

/// Human-readable summary of a search result
pub fn render_summary(target_lb: f64, result: &SearchResult) -> String {
    let section = &result.section;
    let configuration = &section.configuration;
    let materials = configuration.materials;
    let loads = result.loads();

    let banner = "═══════════════════════════════════════";
    let lines = [
        banner.to_string(),
        "  BUILT-UP BEAM DESIGN".to_string(),
        banner.to_string(),
        String::new(),
        format!("Target load: {:.1} lb", target_lb),
        String::new(),
        "Geometry:".to_string(),
        format!("  Web height l_v:   {:.4} in", section.height_in),
        format!("  Flange span l_h:  {:.4} in", section.span_in),
        format!(
            "  Web:              {:.4} in {}",
            configuration.web_thickness_in,
            materials.web.display_name()
        ),
        format!(
            "  Top flange:       {:.4} in {}",
            configuration.top_thickness_in,
            materials.top.display_name()
        ),
        format!(
            "  Bottom flange:    {:.4} in {}",
            configuration.bottom_thickness_in,
            materials.bottom.display_name()
        ),
        String::new(),
        "Section properties:".to_string(),
        format!("  y_g = {:.4} in", result.analysis.centroid_in),
        format!("  I_z = {:.4} in^4", result.analysis.moment_of_inertia_in4),
        String::new(),
        "Failure loads:".to_string(),
        format!("  Bending: {:>10.1} lb", loads.bending_lb),
        format!("  Glue:    {:>10.1} lb", loads.glue_lb),
        format!("  Shear:   {:>10.1} lb", loads.shear_lb),
        String::new(),
        banner.to_string(),
        format!(
            "  CAPACITY: {:.1} lb (governs: {})",
            loads.capacity_lb(),
            loads.governing_mode().display_name()
        ),
        format!(
            "  Residual: {:.3} lb{}",
            result.residual,
            if result.converged { "" } else { " (inner solve did not converge)" }
        ),
        format!("  Evaluated {} configurations", result.evaluated),
        banner.to_string(),
    ];
    lines.join("\n")
}

/// Run metadata stored at the top of a saved report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,
    /// Unique identifier for this search run
    pub run_id: Uuid,
    /// When the search finished
    pub generated: DateTime<Utc>,
}

/// Saved record of one design search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignReport {
    pub meta: ReportMetadata,
    /// Target load the search aimed for (lb)
    pub target_lb: f64,
    /// Settings the search ran with
    pub settings: SearchSettings,
    /// Winning design
    pub result: SearchResult,
}

impl DesignReport {
    /// Wrap a finished search in a report stamped with a fresh run id.
    pub fn new(target_lb: f64, settings: SearchSettings, result: SearchResult) -> Self {
        DesignReport {
            meta: ReportMetadata {
                version: SCHEMA_VERSION.to_string(),
                run_id: Uuid::new_v4(),
                generated: Utc::now(),
            },
            target_lb,
            settings,
            result,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> DesignResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Compact textual rendering of the stored result
    pub fn render_text(&self) -> String {
        render_text(&self.result)
    }
}
