//! # Structural Equations
//!
//! Closed-form formulas for the built-up beam, kept free of validation so
//! they can be checked line by line against hand calculations.
//!
//! ## Modules
//!
//! - [`section`] - Area, centroid and second moment of the built-up section
//! - [`beam`] - Bending, glue-shear and web-shear failure loads
//!
//! ## Conventions
//!
//! - **Lengths**: inches, measured upward from the underside of the bottom flange
//! - **Strengths**: psi
//! - **Loads**: pounds, positive downward

pub mod beam;
pub mod section;

pub use beam::{
    bending_failure_load,
    glue_failure_load,
    glue_lever,
    shear_failure_load,
    shear_lever,
    BENDING_COEFFICIENT,
    GLUE_COEFFICIENT,
    SHEAR_COEFFICIENT,
};

pub use section::{
    built_up_area,
    built_up_centroid,
    built_up_first_moment,
    built_up_moment_of_inertia,
};
