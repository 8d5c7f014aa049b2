use super::cooling_channels::{HydraulicsError, positive};
use crate::units::circle_diameter;
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;

/// which end of the cooling jacket the manifold serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManifoldSide {
    /// cold coolant entering the jacket
    Inlet,
    /// heated coolant leaving the jacket
    Outlet,
}

impl fmt::Display for ManifoldSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ManifoldSide::Inlet => write!(f, "Inlet manifold (cold RP-1)"),
            ManifoldSide::Outlet => write!(f, "Outlet manifold (hot RP-1)"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifoldSizing {
    pub side: ManifoldSide,
    /// Pa
    pub allowed_pressure_drop: f64,
    /// m/s
    pub max_velocity: f64,
    /// m^2
    pub required_area: f64,
    /// diameter of the circle with the required area (teardrop section approximation), m
    pub equivalent_diameter: f64,
}

/// Velocity at which the dynamic head equals the allowed pressure drop, v = sqrt(2 dP / ρ)
pub fn bernoulli_velocity(pressure_drop: f64, rho: f64) -> f64 {
    (2.0 * pressure_drop / rho).sqrt()
}

/// Sizes a manifold that feeds the jacket from two sides, so each branch carries
/// half of the mass flow at the Bernoulli velocity of the allowed pressure drop.
pub fn size_manifold(
    side: ManifoldSide,
    mass_flow: f64,
    rho: f64,
    allowed_pressure_drop: f64,
    safety_factor: f64,
) -> Result<ManifoldSizing, HydraulicsError> {
    positive("mass flow", mass_flow)?;
    positive("coolant density", rho)?;
    positive("allowed manifold pressure drop", allowed_pressure_drop)?;
    positive("manifold safety factor", safety_factor)?;

    let max_velocity = bernoulli_velocity(allowed_pressure_drop, rho);
    let required_area = safety_factor * (mass_flow / (2.0 * (rho * max_velocity)));
    let equivalent_diameter = circle_diameter(required_area);
    info!(
        "{}: v_max = {:.2} m/s, F = {:.2} mm2",
        side,
        max_velocity,
        required_area * 1e6
    );
    Ok(ManifoldSizing {
        side,
        allowed_pressure_drop,
        max_velocity,
        required_area,
        equivalent_diameter,
    })
}
