use super::gas_dynamics::{
    characteristic_velocity, exhaust_velocity, expansion_ratio, gamma_function,
};
use crate::Utils::report::{CalculationReport, fmt_fixed, fmt_plain};
use crate::units::{ATM, G0, M2_TO_MM2, R_UNIVERSAL, circle_diameter, ensure_positive};
use log::{info, warn};
use prettytable::{Table, row};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// ambient pressure of the standard atmosphere at 20 km, Pa
pub const P_AMBIENT_20KM: f64 = 5474.9;
/// mean molar mass of the E-1 combustion products, kg/mol
pub const E1_PRODUCTS_MOLAR_MASS: f64 = 23.74e-3;

#[derive(Debug, Error, PartialEq)]
pub enum NozzleError {
    #[error("adiabatic index must be greater than 1, got {0}")]
    InvalidGamma(f64),
    #[error("parameter '{name}' must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("pressure ratio p_a/p_k must be in (0, 1), got {0}")]
    PressureRatioOutOfRange(f64),
    #[error("molar mass of the combustion products is not set")]
    MissingMolarMass,
    #[error("nozzle produces no thrust at this ambient pressure (effective velocity {0:.2} m/s)")]
    NonPhysicalMassFlow(f64),
}

fn positive(name: &'static str, value: f64) -> Result<f64, NozzleError> {
    ensure_positive(value).map_err(|value| NozzleError::NonPositive { name, value })
}

/// design conditions of the nozzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NozzleVariant {
    /// E-1 design: exit pressure 0.8 atm, operated at sea level
    SeaLevel,
    /// same nozzle operated in the 20 km atmosphere
    Altitude,
}

/// Input of the thermodynamic performance calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NozzleTask {
    /// adiabatic index of the combustion products
    pub gamma: f64,
    /// universal gas constant, J/(mol*K)
    pub gas_constant: f64,
    /// molar mass of the combustion products, kg/mol. A missing key stays empty
    /// and is filled in by the task runner
    #[serde(default)]
    pub molar_mass: Option<f64>,
    /// chamber temperature, K
    pub chamber_temperature: f64,
    /// chamber pressure, Pa
    pub chamber_pressure: f64,
    /// static pressure at the nozzle exit, Pa
    pub exit_pressure: f64,
    /// ambient pressure, Pa
    pub ambient_pressure: f64,
    /// N
    pub thrust: f64,
    /// m/s^2
    pub g0: f64,
}

impl Default for NozzleTask {
    fn default() -> Self {
        Self::preset(NozzleVariant::SeaLevel)
    }
}

impl NozzleTask {
    pub fn preset(variant: NozzleVariant) -> Self {
        let ambient_pressure = match variant {
            NozzleVariant::SeaLevel => ATM,
            NozzleVariant::Altitude => P_AMBIENT_20KM,
        };
        Self {
            gamma: 1.13,
            gas_constant: R_UNIVERSAL,
            molar_mass: Some(E1_PRODUCTS_MOLAR_MASS),
            chamber_temperature: 3475.0,
            chamber_pressure: 3e6,
            exit_pressure: 0.8 * ATM,
            ambient_pressure,
            thrust: 3000.0,
            g0: G0,
        }
    }

    pub fn with_molar_mass(mut self, molar_mass: f64) -> Self {
        self.molar_mass = Some(molar_mass);
        self
    }

    pub fn pressure_ratio(&self) -> f64 {
        self.exit_pressure / self.chamber_pressure
    }

    pub fn validate(&self) -> Result<f64, NozzleError> {
        if !(self.gamma.is_finite() && self.gamma > 1.0) {
            return Err(NozzleError::InvalidGamma(self.gamma));
        }
        positive("gas constant", self.gas_constant)?;
        let molar_mass = positive(
            "molar mass",
            self.molar_mass.ok_or(NozzleError::MissingMolarMass)?,
        )?;
        positive("chamber temperature", self.chamber_temperature)?;
        positive("chamber pressure", self.chamber_pressure)?;
        positive("thrust", self.thrust)?;
        positive("g0", self.g0)?;
        if !(self.ambient_pressure.is_finite() && self.ambient_pressure >= 0.0) {
            return Err(NozzleError::NonPositive {
                name: "ambient pressure",
                value: self.ambient_pressure,
            });
        }
        let pr = self.pressure_ratio();
        if !(pr.is_finite() && pr > 0.0 && pr < 1.0) {
            return Err(NozzleError::PressureRatioOutOfRange(pr));
        }
        Ok(molar_mass)
    }

    pub fn calculate(&self) -> Result<PerformanceReport, NozzleError> {
        let m = self.validate()?;
        info!("______________NOZZLE PERFORMANCE CALCULATION________");
        let g = self.gamma;
        let r = self.gas_constant;
        let t = self.chamber_temperature;
        let p_k = self.chamber_pressure;
        let pr = self.pressure_ratio();

        let a_gamma = gamma_function(g);
        let exhaust_velocity = exhaust_velocity(g, r, t, m, pr);
        let expansion_ratio = expansion_ratio(g, pr);
        let c_star = characteristic_velocity(g, r, t, m);

        // thrust = m (V_a + (p_a - p_H) F_a / m), F_a / m = (F_a/F_t) c* / p_k
        let effective_velocity = exhaust_velocity
            + ((self.exit_pressure - self.ambient_pressure) / p_k) * expansion_ratio * c_star;
        if effective_velocity <= 0.0 {
            return Err(NozzleError::NonPhysicalMassFlow(effective_velocity));
        }
        if self.exit_pressure < 0.4 * self.ambient_pressure {
            warn!(
                "exit pressure {:.0} Pa is far below ambient {:.0} Pa, flow separation is likely",
                self.exit_pressure, self.ambient_pressure
            );
        }
        let mass_flow = self.thrust / effective_velocity;
        let specific_impulse = self.thrust / (mass_flow * self.g0);
        let throat_area = mass_flow * c_star / p_k;
        let exit_area = expansion_ratio * throat_area;
        let thrust_coefficient = self.thrust / (p_k * throat_area);
        info!(
            "m = {:.4} kg/s, I_sp = {:.2} s, D_t = {:.3} mm",
            mass_flow,
            specific_impulse,
            circle_diameter(throat_area) * 1e3
        );
        info!("______________NOZZLE PERFORMANCE CALCULATION ENDED________");
        Ok(PerformanceReport {
            input: self.clone(),
            pressure_ratio: pr,
            gamma_function: a_gamma,
            exhaust_velocity,
            expansion_ratio,
            characteristic_velocity: c_star,
            effective_velocity,
            mass_flow,
            specific_impulse,
            thrust_coefficient,
            throat_area,
            exit_area,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReport {
    pub input: NozzleTask,
    pub pressure_ratio: f64,
    pub gamma_function: f64,
    /// m/s
    pub exhaust_velocity: f64,
    /// F_a / F_t
    pub expansion_ratio: f64,
    /// m/s
    pub characteristic_velocity: f64,
    /// thrust per unit mass flow at the ambient pressure, m/s
    pub effective_velocity: f64,
    /// kg/s
    pub mass_flow: f64,
    /// s
    pub specific_impulse: f64,
    pub thrust_coefficient: f64,
    /// m^2
    pub throat_area: f64,
    /// m^2
    pub exit_area: f64,
}

impl PerformanceReport {
    pub fn throat_area_mm2(&self) -> f64 {
        self.throat_area * M2_TO_MM2
    }
    pub fn exit_area_mm2(&self) -> f64 {
        self.exit_area * M2_TO_MM2
    }
    pub fn throat_diameter_mm(&self) -> f64 {
        circle_diameter(self.throat_area_mm2())
    }
    pub fn exit_diameter_mm(&self) -> f64 {
        circle_diameter(self.exit_area_mm2())
    }
}

impl CalculationReport for PerformanceReport {
    fn title(&self) -> String {
        format!(
            "NOZZLE PERFORMANCE, p_k = {} Pa, p_H = {} Pa",
            self.input.chamber_pressure, self.input.ambient_pressure
        )
    }

    fn report_lines(&self) -> Vec<String> {
        vec![
            format!("Exhaust velocity (w_a): {:.2} m/s", self.exhaust_velocity),
            format!(
                "Nozzle geometric expansion ratio (F_a): {:.2}",
                self.expansion_ratio
            ),
            format!(
                "Mass flow rate (m_sec) for P = {} N: {:.4} kg/s",
                fmt_plain(self.input.thrust),
                self.mass_flow
            ),
            format!("Specific impulse  (I_sp): {:.2} s", self.specific_impulse),
            format!("Throat area (F_t): {:.4} mm^2", self.throat_area_mm2()),
            format!("Throat diameter (D_t): {:.4} mm", self.throat_diameter_mm()),
            format!("Nozzle cut area (F_A): {:.4} mm^2", self.exit_area_mm2()),
            format!("Nozzle cut diameter (D_A): {:.4} mm", self.exit_diameter_mm()),
        ]
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["quantity", "value", "unit"]);
        table.add_row(row!["pressure ratio p_a/p_k", fmt_fixed(self.pressure_ratio, 5), "-"]);
        table.add_row(row!["A(gamma)", fmt_fixed(self.gamma_function, 5), "-"]);
        table.add_row(row!["exhaust velocity", fmt_fixed(self.exhaust_velocity, 2), "m/s"]);
        table.add_row(row![
            "characteristic velocity",
            fmt_fixed(self.characteristic_velocity, 2),
            "m/s"
        ]);
        table.add_row(row![
            "effective exhaust velocity",
            fmt_fixed(self.effective_velocity, 2),
            "m/s"
        ]);
        table.add_row(row!["expansion ratio F_a/F_t", fmt_fixed(self.expansion_ratio, 3), "-"]);
        table.add_row(row!["mass flow", fmt_fixed(self.mass_flow, 4), "kg/s"]);
        table.add_row(row!["specific impulse", fmt_fixed(self.specific_impulse, 2), "s"]);
        table.add_row(row!["thrust coefficient", fmt_fixed(self.thrust_coefficient, 4), "-"]);
        table.add_row(row!["throat area", fmt_fixed(self.throat_area_mm2(), 4), "mm2"]);
        table.add_row(row!["throat diameter", fmt_fixed(self.throat_diameter_mm(), 4), "mm"]);
        table.add_row(row!["exit area", fmt_fixed(self.exit_area_mm2(), 4), "mm2"]);
        table.add_row(row!["exit diameter", fmt_fixed(self.exit_diameter_mm(), 4), "mm"]);
        table
    }
}

impl fmt::Display for PerformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.report_lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_e1_sea_level() {
        let report = NozzleTask::preset(NozzleVariant::SeaLevel).calculate().unwrap();
        assert_relative_eq!(report.exhaust_velocity, 2681.849905234533, epsilon = 1e-6);
        assert_relative_eq!(report.expansion_ratio, 6.3764577178515065, epsilon = 1e-9);
        assert_relative_eq!(report.mass_flow, 1.150761136396971, epsilon = 1e-9);
        assert_relative_eq!(report.specific_impulse, 265.74619865162293, epsilon = 1e-6);
        assert_relative_eq!(report.throat_area_mm2(), 666.8423439311861, epsilon = 1e-6);
        assert_relative_eq!(report.exit_area_mm2(), 4252.0920105502, epsilon = 1e-5);
        assert_relative_eq!(report.thrust_coefficient, 1.4996048302883322, epsilon = 1e-9);
    }

    #[test]
    fn test_e1_sea_level_report_lines() {
        let report = NozzleTask::default().calculate().unwrap();
        assert_eq!(
            report.report_lines(),
            vec![
                "Exhaust velocity (w_a): 2681.85 m/s",
                "Nozzle geometric expansion ratio (F_a): 6.38",
                "Mass flow rate (m_sec) for P = 3000.0 N: 1.1508 kg/s",
                "Specific impulse  (I_sp): 265.75 s",
                "Throat area (F_t): 666.8423 mm^2",
                "Throat diameter (D_t): 29.1385 mm",
                "Nozzle cut area (F_A): 4252.0920 mm^2",
                "Nozzle cut diameter (D_A): 73.5794 mm",
            ]
        );
    }

    #[test]
    fn test_altitude_variant_improves_impulse() {
        let sea = NozzleTask::preset(NozzleVariant::SeaLevel).calculate().unwrap();
        let alt = NozzleTask::preset(NozzleVariant::Altitude).calculate().unwrap();
        assert_relative_eq!(alt.mass_flow, 1.0131237365055372, epsilon = 1e-9);
        assert_relative_eq!(alt.specific_impulse, 301.84901067298745, epsilon = 1e-6);
        // expansion depends on the chamber and exit pressures only
        assert_relative_eq!(alt.expansion_ratio, sea.expansion_ratio, epsilon = 1e-12);
        assert!(alt.specific_impulse > sea.specific_impulse);
    }

    #[test]
    fn test_throat_area_reproduces_mass_flow() {
        let report = NozzleTask::default().calculate().unwrap();
        let t = &report.input;
        let m = t.molar_mass.unwrap();
        // choked flow through the throat
        let mass_flow = report.throat_area * t.chamber_pressure * gamma_function(t.gamma)
            / (t.gas_constant * t.chamber_temperature / m).sqrt();
        assert_relative_eq!(mass_flow, report.mass_flow, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        let mut task = NozzleTask::default();
        task.gamma = 1.0;
        assert_eq!(task.calculate().unwrap_err(), NozzleError::InvalidGamma(1.0));

        let mut task = NozzleTask::default();
        task.exit_pressure = 4e6;
        assert!(matches!(
            task.calculate().unwrap_err(),
            NozzleError::PressureRatioOutOfRange(_)
        ));

        let mut task = NozzleTask::default();
        task.molar_mass = None;
        assert_eq!(task.calculate().unwrap_err(), NozzleError::MissingMolarMass);

        let mut task = NozzleTask::default();
        task.chamber_temperature = -3475.0;
        assert!(matches!(
            task.calculate().unwrap_err(),
            NozzleError::NonPositive { name: "chamber temperature", .. }
        ));
    }

    #[test]
    fn test_fractional_thrust_is_printed_unrounded() {
        let mut task = NozzleTask::default();
        task.thrust = 2500.25;
        let lines = task.calculate().unwrap().report_lines();
        assert!(lines[2].starts_with("Mass flow rate (m_sec) for P = 2500.25 N: "));
    }

    #[test]
    fn test_overexpanded_nozzle_without_thrust() {
        let mut task = NozzleTask::default();
        task.exit_pressure = 1000.0;
        task.ambient_pressure = 3e5;
        assert!(matches!(
            task.calculate().unwrap_err(),
            NozzleError::NonPhysicalMassFlow(_)
        ));
    }
}
