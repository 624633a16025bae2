//! # Failure Load Formulas
//!
//! Closed-form failure loads for the built-up beam under the fixed
//! three-point loading arrangement. Each formula returns the applied load at
//! which the governing stress reaches the material strength.
//!
//! The leading coefficients fold the loading geometry into a constant:
//!
//! | Mode    | Governing stress              | Coefficient |
//! |---------|-------------------------------|-------------|
//! | Bending | σ = M·y / I                   | 5/24        |
//! | Glue    | τ_g at the bottom glue line   | 10/3        |
//! | Shear   | τ at the web neutral axis     | 10/3        |

/// Load-factor coefficient for bending failure
pub const BENDING_COEFFICIENT: f64 = 5.0 / 24.0;

/// Load-factor coefficient for glue-line shear failure
pub const GLUE_COEFFICIENT: f64 = 10.0 / 3.0;

/// Load-factor coefficient for web shear failure
pub const SHEAR_COEFFICIENT: f64 = 10.0 / 3.0;

/// Load at which the extreme bottom fiber reaches the bending strength
///
/// # Formula
/// P_bend = (5/24) · σ · I_z / y_g
#[inline]
pub fn bending_failure_load(fb: f64, i_z: f64, y_g: f64) -> f64 {
    BENDING_COEFFICIENT * fb * i_z / y_g
}

/// Denominator of the glue-shear formula: l_h · (y_g − t_hb/2)
#[inline]
pub fn glue_lever(l_h: f64, y_g: f64, t_hb: f64) -> f64 {
    l_h * (y_g - t_hb / 2.0)
}

/// Load at which the bottom glue line reaches the glue-shear strength
///
/// # Formula
/// P_glue = (10/3) · τ_g · I_z / (l_h · (y_g − t_hb/2))
#[inline]
pub fn glue_failure_load(fg: f64, i_z: f64, l_h: f64, y_g: f64, t_hb: f64) -> f64 {
    GLUE_COEFFICIENT * fg * i_z / glue_lever(l_h, y_g, t_hb)
}

/// Denominator of the web-shear formula
///
/// # Formula
/// l_h · t_ht · (l_v − t_ht/2 − y_g) + (l_v − y_g)²
#[inline]
pub fn shear_lever(l_v: f64, l_h: f64, t_ht: f64, y_g: f64) -> f64 {
    l_h * t_ht * (l_v - t_ht / 2.0 - y_g) + (l_v - y_g).powi(2)
}

/// Load at which the webs reach their shear strength
///
/// # Formula
/// P_shear = (10/3) · τ · I_z · t_v / [l_h · t_ht · (l_v − t_ht/2 − y_g) + (l_v − y_g)²]
#[inline]
pub fn shear_failure_load(fv: f64, i_z: f64, t_v: f64, l_v: f64, l_h: f64, t_ht: f64, y_g: f64) -> f64 {
    SHEAR_COEFFICIENT * fv * i_z * t_v / shear_lever(l_v, l_h, t_ht, y_g)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    const I_Z: f64 = 0.526_041_666_666_666_7;

    #[test]
    fn test_bending_failure_load() {
        let p = bending_failure_load(14_327.0, I_Z, 1.0);
        assert!(approx_eq(p, 1570.1248, 1e-3), "P_bend = {}", p);
    }

    #[test]
    fn test_glue_failure_load() {
        let p = glue_failure_load(989.0, I_Z, 0.5, 1.0, 0.25);
        assert!(approx_eq(p, 3963.8492, 1e-3), "P_glue = {}", p);
    }

    #[test]
    fn test_shear_failure_load() {
        let p = shear_failure_load(1_492.0, I_Z, 0.25, 2.0, 0.5, 0.25, 1.0);
        assert!(approx_eq(p, 589.5618, 1e-3), "P_shear = {}", p);
    }

    #[test]
    fn test_loads_linear_in_strength() {
        let p1 = bending_failure_load(1_000.0, I_Z, 1.0);
        let p2 = bending_failure_load(2_000.0, I_Z, 1.0);
        assert!(approx_eq(p2, 2.0 * p1, 1e-9));
    }
}
