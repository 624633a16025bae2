//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - Input types (JSON-serializable)
//! - Result types (JSON-serializable)
//! - A pure function `input -> Result<result, DesignError>`
//!
//! ## Available Calculations
//!
//! - [`capacity`] - Centroid, second moment and failure loads of a built-up section

pub mod capacity;

pub use capacity::{
    analyze, analyze_with_strengths, Configuration, CrossSection, FailureLoads, FailureMode,
    SectionAnalysis,
};
