//! # Materials Catalog
//!
//! Fixed, read-only strength table for the two candidate species, and the
//! assignment of a species to each component of the built-up section.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::{MaterialAssignment, Species};
//!
//! let assignment = MaterialAssignment::new(Species::Pine, Species::Oak, Species::Oak);
//! let strengths = assignment.strengths();
//! assert_eq!(strengths.web.fb_psi, 14_327.0);
//! ```

pub mod species;

pub use species::{Species, SpeciesProperties};

use serde::{Deserialize, Serialize};

/// Species chosen for each member of the section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialAssignment {
    /// Web (vertical members)
    pub web: Species,
    /// Top flange
    pub top: Species,
    /// Bottom flange
    pub bottom: Species,
}

impl MaterialAssignment {
    /// Create an assignment in (web, top, bottom) order
    pub fn new(web: Species, top: Species, bottom: Species) -> Self {
        MaterialAssignment { web, top, bottom }
    }

    /// Same species for every component
    pub fn uniform(species: Species) -> Self {
        MaterialAssignment::new(species, species, species)
    }

    /// Look up the strength constants for each component
    pub fn strengths(&self) -> ComponentStrengths {
        ComponentStrengths {
            web: self.web.properties(),
            top: self.top.properties(),
            bottom: self.bottom.properties(),
        }
    }
}

impl Default for MaterialAssignment {
    fn default() -> Self {
        MaterialAssignment::uniform(Species::Pine)
    }
}

/// Strength constants resolved for each component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentStrengths {
    pub web: SpeciesProperties,
    pub top: SpeciesProperties,
    pub bottom: SpeciesProperties,
}

impl ComponentStrengths {
    /// Bending strength governing p_bend: weaker of web and bottom flange
    pub fn governing_bending_psi(&self) -> f64 {
        self.web.fb_psi.min(self.bottom.fb_psi)
    }

    /// Glue strength governing p_glue: weakest of all three glue lines
    pub fn governing_glue_psi(&self) -> f64 {
        self.web.fg_psi.min(self.bottom.fg_psi).min(self.top.fg_psi)
    }

    /// Shear strength governing p_shear: web only
    pub fn governing_shear_psi(&self) -> f64 {
        self.web.fv_psi
    }
}
