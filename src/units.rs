//! Physical constants and unit conversions shared by the calculators.
//!
//! All calculators work in SI internally. Inputs given in engineering units
//! (mm, bar, degrees, g/mol) are converted at the boundary with these helpers.

use std::f64::consts::PI;

/// universal gas constant, J/(mol*K)
pub const R_UNIVERSAL: f64 = 8.314;
/// standard gravitational acceleration used for specific impulse, m/s^2
pub const G0: f64 = 9.81;
/// one standard atmosphere, Pa
pub const ATM: f64 = 101325.0;
/// one bar, Pa
pub const BAR: f64 = 1e5;

pub const MM_TO_M: f64 = 1e-3;
pub const M2_TO_MM2: f64 = 1e6;

pub fn mm_to_m(value_mm: f64) -> f64 {
    value_mm * MM_TO_M
}

pub fn m_to_mm(value_m: f64) -> f64 {
    value_m / MM_TO_M
}

pub fn pa_to_bar(value_pa: f64) -> f64 {
    value_pa / BAR
}

/// g/mol -> kg/mol
pub fn g_per_mol_to_kg_per_mol(value: f64) -> f64 {
    value * 1e-3
}

/// Diameter of the circle with the given area (any consistent unit)
pub fn circle_diameter(area: f64) -> f64 {
    2.0 * (area / PI).sqrt()
}

/// Checks that a physical quantity is finite and strictly positive.
/// Returns the offending value back on failure so that each module can wrap it in its own error.
pub fn ensure_positive(value: f64) -> Result<f64, f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(value)
    }
}
