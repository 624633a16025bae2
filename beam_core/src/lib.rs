//! # beam_core - Built-Up Beam Section Optimizer
//!
//! `beam_core` designs a glued built-up wooden section (vertical web with a top
//! and a bottom flange) whose bending, glue-line shear and web shear failure
//! loads all land as close as possible to a target load. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::calculations::{analyze, Configuration, CrossSection};
//! use beam_core::materials::{MaterialAssignment, Species};
//!
//! let configuration = Configuration::new(MaterialAssignment::uniform(Species::Pine), 0.25, 0.25, 0.25);
//! let section = CrossSection::new(2.0, 0.5, configuration);
//!
//! let analysis = analyze(&section).unwrap();
//! assert!((analysis.centroid_in - 1.0).abs() < 1e-12);
//!
//! let json = serde_json::to_string_pretty(&analysis).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`materials`] - Species catalog and per-component strengths
//! - [`equations`] - Closed-form section and failure-load equations
//! - [`calculations`] - Section analyzer
//! - [`optimize`] - Bounded minimizer and per-configuration solve
//! - [`search`] - Exhaustive design search
//! - [`settings`] - Search settings
//! - [`report`] - Text, summary and JSON renderings
//! - [`errors`] - Structured error types
//! - [`file_io`] - Atomic report saves and settings loading

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod optimize;
pub mod report;
pub mod search;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculations::{analyze, CrossSection, FailureLoads, SectionAnalysis};
pub use errors::{DesignError, DesignResult};
pub use file_io::{load_report, load_settings, save_report};
pub use materials::{MaterialAssignment, Species};
pub use report::{render_text, DesignReport};
pub use search::{search, SearchProgress, SearchResult};
pub use settings::SearchSettings;
