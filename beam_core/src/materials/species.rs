//! Wood species used for the built-up section components.
//!
//! Strength values are fixed reference constants (psi). They are loaded once
//! with the program and never change.

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};

/// Wood species available for the web and flanges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Species {
    /// Pine
    Pine,
    /// Oak
    Oak,
}

impl Species {
    /// All species in enumeration order (Pine first)
    pub const ALL: [Species; 2] = [Species::Pine, Species::Oak];

    /// Report label (e.g., "PINE")
    pub fn label(&self) -> &'static str {
        match self {
            Species::Pine => "PINE",
            Species::Oak => "OAK",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> DesignResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "PINE" | "P" => Ok(Species::Pine),
            "OAK" | "O" => Ok(Species::Oak),
            _ => Err(DesignError::invalid_input(
                "species",
                s,
                "Expected one of: PINE, OAK",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::Pine => "Pine",
            Species::Oak => "Oak",
        }
    }

    /// Reference strength values for this species
    pub fn properties(&self) -> SpeciesProperties {
        match self {
            Species::Pine => SpeciesProperties {
                fb_psi: 14_327.0,
                fv_psi: 1_492.0,
                fg_psi: 989.0,
            },
            Species::Oak => SpeciesProperties {
                fb_psi: 17_873.0,
                fv_psi: 2_873.0,
                fg_psi: 1_391.0,
            },
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Strength constants for one species
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeciesProperties {
    /// Bending strength (psi)
    pub fb_psi: f64,
    /// Shear strength (psi)
    pub fv_psi: f64,
    /// Glue-line shear strength (psi)
    pub fg_psi: f64,
}

impl SpeciesProperties {
    /// Multiply every strength by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        SpeciesProperties {
            fb_psi: self.fb_psi * factor,
            fv_psi: self.fv_psi * factor,
            fg_psi: self.fg_psi * factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strengths_positive() {
        for species in Species::ALL {
            let props = species.properties();
            assert!(props.fb_psi > 0.0, "{} Fb", species);
            assert!(props.fv_psi > 0.0, "{} Fv", species);
            assert!(props.fg_psi > 0.0, "{} Fg", species);
        }
    }

    #[test]
    fn test_oak_stronger_than_pine() {
        let pine = Species::Pine.properties();
        let oak = Species::Oak.properties();
        assert!(oak.fb_psi > pine.fb_psi);
        assert!(oak.fv_psi > pine.fv_psi);
        assert!(oak.fg_psi > pine.fg_psi);
    }

    #[test]
    fn test_parse_flexible() {
        assert_eq!(Species::from_str_flexible("pine").unwrap(), Species::Pine);
        assert_eq!(Species::from_str_flexible(" OAK ").unwrap(), Species::Oak);
        assert!(Species::from_str_flexible("maple").is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Species::Oak).unwrap();
        assert_eq!(json, "\"OAK\"");
        let parsed: Species = serde_json::from_str("\"PINE\"").unwrap();
        assert_eq!(parsed, Species::Pine);
    }
}
