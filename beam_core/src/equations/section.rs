//! # Built-Up Section Property Formulas
//!
//! Geometric properties of the box-type built-up section: two vertical webs
//! of height `l_v` and thickness `t_v`, capped by a top flange (`t_ht`) and a
//! bottom flange (`t_hb`), both of width `l_h`.
//!
//! ```text
//!      ┌───────────────────┐  ← top flange, t_ht
//!      ├──┐             ┌──┤
//!      │  │             │  │
//! l_v  │  │    webs     │  │
//!      │  │   (t_v)     │  │
//!      ├──┘             └──┤
//!      └───────────────────┘  ← bottom flange, t_hb
//!               l_h
//! ```
//!
//! All distances are measured from the underside of the bottom flange. The
//! flanges sit inside the web height, so the overall depth is `l_v`.
//!
//! These functions do no validation; the section analyzer guards every
//! denominator before dividing.

/// Total cross-sectional area of the section
///
/// # Formula
/// A = 2·l_v·t_v + l_h·t_ht + l_h·t_hb
///
/// # Example
/// ```rust
/// use beam_core::equations::section::built_up_area;
///
/// let a = built_up_area(2.0, 0.5, 0.25, 0.25, 0.25);
/// assert!((a - 1.25).abs() < 1e-12);
/// ```
#[inline]
pub fn built_up_area(l_v: f64, l_h: f64, t_v: f64, t_ht: f64, t_hb: f64) -> f64 {
    2.0 * l_v * t_v + l_h * t_ht + l_h * t_hb
}

/// First moment of area about the section base
///
/// # Formula
/// Q = t_v·l_v² + (l_v − t_ht/2)·l_h·t_ht + (t_hb/2)·l_h·t_hb
#[inline]
pub fn built_up_first_moment(l_v: f64, l_h: f64, t_v: f64, t_ht: f64, t_hb: f64) -> f64 {
    t_v * l_v.powi(2) + (l_v - t_ht / 2.0) * l_h * t_ht + t_hb / 2.0 * l_h * t_hb
}

/// Height of the centroid above the section base
///
/// # Formula
/// y_g = Q / A
///
/// # Example
/// ```rust
/// use beam_core::equations::section::built_up_centroid;
///
/// // Equal flanges: centroid at mid-height
/// let y_g = built_up_centroid(2.0, 0.5, 0.25, 0.25, 0.25);
/// assert!((y_g - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn built_up_centroid(l_v: f64, l_h: f64, t_v: f64, t_ht: f64, t_hb: f64) -> f64 {
    built_up_first_moment(l_v, l_h, t_v, t_ht, t_hb) / built_up_area(l_v, l_h, t_v, t_ht, t_hb)
}

/// Second moment of area about the horizontal centroidal axis
///
/// Sum of each component's own second moment plus its parallel-axis term
/// (area times squared offset from `y_g`).
///
/// # Formula
/// ```text
/// I_z = t_v·l_v³/6 + l_h·t_hb³/12 + l_h·t_ht³/12
///     + 2·l_v·t_v·(l_v/2 − y_g)²
///     + l_h·t_hb·(t_hb/2 − y_g)²
///     + l_h·t_ht·(l_v − t_ht/2 − y_g)²
/// ```
///
/// # Example
/// ```rust
/// use beam_core::equations::section::built_up_moment_of_inertia;
///
/// let i_z = built_up_moment_of_inertia(2.0, 0.5, 0.25, 0.25, 0.25, 1.0);
/// assert!((i_z - 0.526_041_667).abs() < 1e-6);
/// ```
#[inline]
pub fn built_up_moment_of_inertia(l_v: f64, l_h: f64, t_v: f64, t_ht: f64, t_hb: f64, y_g: f64) -> f64 {
    let own = t_v * l_v.powi(3) / 6.0 + l_h * t_hb.powi(3) / 12.0 + l_h * t_ht.powi(3) / 12.0;
    let webs = 2.0 * l_v * t_v * (l_v / 2.0 - y_g).powi(2);
    let bottom = l_h * t_hb * (t_hb / 2.0 - y_g).powi(2);
    let top = l_h * t_ht * (l_v - t_ht / 2.0 - y_g).powi(2);
    own + webs + bottom + top
}
