use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Reynolds number above which the flow in a channel is treated as turbulent
pub const CRITICAL_REYNOLDS: f64 = 2300.0;

/// error types for the coolant jacket and manifold calculations
#[derive(Debug, Error, PartialEq)]
pub enum HydraulicsError {
    #[error("parameter '{name}' must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("number of cooling channels must be at least 1")]
    NoChannels,
    #[error("manifold loss ratio must be in (0, 1], got {0}")]
    InvalidLossRatio(f64),
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, HydraulicsError> {
    crate::units::ensure_positive(value).map_err(|value| HydraulicsError::NonPositive { name, value })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FlowRegime::Laminar => write!(f, "LAMINAR"),
            FlowRegime::Turbulent => write!(f, "TURBULENT"),
        }
    }
}

/// Flow area and hydraulic diameter of a rectangular channel a x b (both in m)
pub fn hydraulic_diameter(a: f64, b: f64) -> (f64, f64) {
    let area = a * b;
    (area, 2.0 * area / (a + b))
}

pub fn reynolds_number(rho: f64, velocity: f64, diameter: f64, mu: f64) -> f64 {
    rho * velocity * diameter / mu
}

pub fn flow_regime(re: f64) -> FlowRegime {
    if re > CRITICAL_REYNOLDS {
        FlowRegime::Turbulent
    } else {
        FlowRegime::Laminar
    }
}

/// Darcy friction factor.
/// Turbulent flow uses the Altshul formula λ = 0.11 (k/D + 68/Re)^0.25,
/// laminar flow the Hagen-Poiseuille value λ = 64/Re.
pub fn friction_factor(re: f64, roughness: f64, diameter: f64) -> (f64, FlowRegime) {
    let regime = flow_regime(re);
    let lambda = match regime {
        FlowRegime::Turbulent => 0.11 * (roughness / diameter + 68.0 / re).powf(0.25),
        FlowRegime::Laminar => 64.0 / re,
    };
    (lambda, regime)
}

/// Darcy-Weisbach pressure drop dP = λ (L/D) ρ v² / 2.
/// Returns the loss coefficient ξ = λ L / D together with the pressure drop in Pa
pub fn darcy_pressure_drop(
    lambda: f64,
    length: f64,
    diameter: f64,
    rho: f64,
    velocity: f64,
) -> (f64, f64) {
    let ksi = lambda * (length / diameter);
    (ksi, ksi * rho * velocity.powi(2) / 2.0)
}

/// hydraulic state of a single cooling channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelFlow {
    /// flow area of one channel, m^2
    pub area: f64,
    /// m
    pub hydraulic_diameter: f64,
    /// m/s
    pub velocity: f64,
    pub reynolds: f64,
    pub regime: FlowRegime,
    pub friction_factor: f64,
    pub loss_coefficient: f64,
    /// Pa
    pub pressure_drop: f64,
}

/// Calculates the flow in one of `n_channels` identical rectangular channels.
/// Channel dimensions in m, roughness in m, mass flow is the total flow through the jacket.
#[allow(clippy::too_many_arguments)]
pub fn channel_flow(
    width: f64,
    height: f64,
    roughness: f64,
    length: f64,
    n_channels: usize,
    rho: f64,
    mu: f64,
    mass_flow: f64,
) -> Result<ChannelFlow, HydraulicsError> {
    positive("channel width", width)?;
    positive("channel height", height)?;
    positive("jacket length", length)?;
    positive("coolant density", rho)?;
    positive("coolant viscosity", mu)?;
    positive("mass flow", mass_flow)?;
    if !(roughness.is_finite() && roughness >= 0.0) {
        return Err(HydraulicsError::NonPositive {
            name: "wall roughness",
            value: roughness,
        });
    }
    if n_channels == 0 {
        return Err(HydraulicsError::NoChannels);
    }

    let (area, d_hyd) = hydraulic_diameter(width, height);
    let velocity = mass_flow / (rho * area * n_channels as f64);
    let reynolds = reynolds_number(rho, velocity, d_hyd, mu);
    let (lambda, regime) = friction_factor(reynolds, roughness, d_hyd);
    debug!(
        "channel: F = {:e} m2, D_h = {:e} m, Re = {:.1}, lambda = {:.5}",
        area, d_hyd, reynolds, lambda
    );
    let (ksi, pressure_drop) = darcy_pressure_drop(lambda, length, d_hyd, rho, velocity);
    info!(
        "cooling channels: {} flow, dP = {:.0} Pa",
        regime, pressure_drop
    );
    Ok(ChannelFlow {
        area,
        hydraulic_diameter: d_hyd,
        velocity,
        reynolds,
        regime,
        friction_factor: lambda,
        loss_coefficient: ksi,
        pressure_drop,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hydraulic_diameter_of_square_is_side() {
        let (area, d) = hydraulic_diameter(2e-3, 2e-3);
        assert_relative_eq!(area, 4e-6, epsilon = 1e-15);
        assert_relative_eq!(d, 2e-3, epsilon = 1e-15);
    }

    #[test]
    fn test_e1_channel_geometry() {
        let (area, d) = hydraulic_diameter(0.9e-3, 1.2e-3);
        assert_relative_eq!(area, 1.08e-6, epsilon = 1e-15);
        assert_relative_eq!(d, 1.0285714285714285e-3, epsilon = 1e-12);
    }

    #[test]
    fn test_flow_regime_boundary() {
        assert_eq!(flow_regime(2300.0), FlowRegime::Laminar);
        assert_eq!(flow_regime(2300.1), FlowRegime::Turbulent);
        assert_eq!(flow_regime(100.0), FlowRegime::Laminar);
    }

    #[test]
    fn test_friction_factor() {
        let (lambda, regime) = friction_factor(1000.0, 50e-6, 1e-3);
        assert_eq!(regime, FlowRegime::Laminar);
        assert_relative_eq!(lambda, 0.064, epsilon = 1e-12);

        let re: f64 = 3210.884353741496;
        let (lambda, regime) = friction_factor(re, 50e-6, 1.0285714285714285e-3);
        assert_eq!(regime, FlowRegime::Turbulent);
        assert_relative_eq!(lambda, 0.05653788382834232, epsilon = 1e-9);
    }

    #[test]
    fn test_darcy_pressure_drop() {
        let (ksi, dp) = darcy_pressure_drop(0.02, 1.0, 0.01, 1000.0, 2.0);
        assert_relative_eq!(ksi, 2.0, epsilon = 1e-12);
        assert_relative_eq!(dp, 4000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_e1_channel_flow() {
        let flow = channel_flow(
            0.9e-3,
            1.2e-3,
            50e-6,
            (190.84 + 77.0) / 1000.0,
            70,
            780.0,
            1.5e-3,
            0.3 * 1.18,
        )
        .unwrap();
        assert_relative_eq!(flow.velocity, 6.003256003256004, epsilon = 1e-9);
        assert_relative_eq!(flow.reynolds, 3210.884353741496, epsilon = 1e-6);
        assert_eq!(flow.regime, FlowRegime::Turbulent);
        assert_relative_eq!(flow.pressure_drop, 206927.81107720296, epsilon = 1e-3);
    }

    #[test]
    fn test_channel_flow_rejects_bad_input() {
        let err = channel_flow(0.0, 1e-3, 0.0, 1.0, 10, 780.0, 1e-3, 0.1).unwrap_err();
        assert_eq!(
            err,
            HydraulicsError::NonPositive {
                name: "channel width",
                value: 0.0
            }
        );
        let err = channel_flow(1e-3, 1e-3, 0.0, 1.0, 0, 780.0, 1e-3, 0.1).unwrap_err();
        assert_eq!(err, HydraulicsError::NoChannels);
        let err = channel_flow(1e-3, 1e-3, 0.0, 1.0, 10, 780.0, 1e-3, 0.0).unwrap_err();
        assert!(matches!(err, HydraulicsError::NonPositive { name: "mass flow", .. }));
    }
}
