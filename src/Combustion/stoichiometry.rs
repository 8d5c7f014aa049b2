use super::fuel_formula::{CARBON, EmpiricalFormula, FormulaError, HYDROGEN, OXYGEN};
use crate::Utils::report::{CalculationReport, fmt_fixed};
use log::{debug, info, warn};
use nalgebra::{Matrix4, Vector4};
use prettytable::{Table, row};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StoichiometryError {
    #[error(transparent)]
    Formula(#[from] FormulaError),
    #[error("mixture ratio must be positive and finite, got {0}")]
    InvalidMixtureRatio(f64),
    #[error("material balance matrix is singular")]
    SingularSystem,
    #[error(
        "negative amount of {species} ({value:.4} mol): mixture ratio {mixture_ratio} is outside the range of the CO = H2 closure"
    )]
    NegativeProduct {
        species: &'static str,
        value: f64,
        mixture_ratio: f64,
    },
}

/// fuel formula and mass mixture ratio of the components (oxidizer / fuel)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Propellant {
    pub fuel: EmpiricalFormula,
    /// Km, kg of oxygen per kg of fuel
    pub mixture_ratio: f64,
}

impl Default for Propellant {
    /// RP-1 / LOX at Km = 2.29
    fn default() -> Self {
        Self {
            fuel: EmpiricalFormula::rp1(),
            mixture_ratio: 2.29,
        }
    }
}

/// combustion product molar masses, g/mol
pub fn m_co2() -> f64 {
    CARBON.atomic_mass + 2.0 * OXYGEN.atomic_mass
}
pub fn m_co() -> f64 {
    CARBON.atomic_mass + OXYGEN.atomic_mass
}
pub fn m_h2o() -> f64 {
    2.0 * HYDROGEN.atomic_mass + OXYGEN.atomic_mass
}
pub fn m_h2() -> f64 {
    2.0 * HYDROGEN.atomic_mass
}

/// Moles of O2 per mole of fuel delivered at mass mixture ratio `km`
pub fn oxygen_moles(km: f64, fuel_molar_mass: f64) -> f64 {
    (km * fuel_molar_mass) / (2.0 * OXYGEN.atomic_mass)
}

/// Mass mixture ratio at which all carbon burns to CO2 and all hydrogen to H2O
pub fn stoichiometric_mixture_ratio(fuel: &EmpiricalFormula) -> f64 {
    (2.0 * fuel.carbon + fuel.hydrogen / 2.0) * OXYGEN.atomic_mass / fuel.molar_mass()
}

/// moles of products per mole of fuel for C_nH_m + x O2 -> a CO2 + b CO + c H2O + d H2
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductComposition {
    pub co2: f64,
    pub co: f64,
    pub h2o: f64,
    pub h2: f64,
}

impl ProductComposition {
    pub fn total_moles(&self) -> f64 {
        self.co2 + self.co + self.h2o + self.h2
    }

    /// g per mole of fuel
    pub fn total_mass(&self) -> f64 {
        self.co2 * m_co2() + self.co * m_co() + self.h2o * m_h2o() + self.h2 * m_h2()
    }

    /// average molar mass of the products, g/mol
    pub fn mean_molar_mass(&self) -> f64 {
        self.total_mass() / self.total_moles()
    }

    /// (species, mole fraction) in the order CO2, CO, H2O, H2
    pub fn mole_fractions(&self) -> [(&'static str, f64); 4] {
        let n = self.total_moles();
        [
            ("CO2", self.co2 / n),
            ("CO", self.co / n),
            ("H2O", self.h2o / n),
            ("H2", self.h2 / n),
        ]
    }

    fn as_array(&self) -> [(&'static str, f64); 4] {
        [
            ("CO2", self.co2),
            ("CO", self.co),
            ("H2O", self.h2o),
            ("H2", self.h2),
        ]
    }
}

/// Solves the material balance of the products:
/// ```text
/// C:  a + b      = n
/// H:  c + d      = m/2
/// O:  2a + b + c = 2x
///     b - d      = 0
/// ```
/// The last row is the simplifying assumption of equal CO and H2 amounts
pub fn product_balance(fuel: &EmpiricalFormula, x: f64) -> Result<ProductComposition, StoichiometryError> {
    #[rustfmt::skip]
    let a = Matrix4::new(
        1.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 1.0,
        2.0, 1.0, 1.0, 0.0,
        0.0, 1.0, 0.0, -1.0,
    );
    let rhs = Vector4::new(fuel.carbon, fuel.hydrogen / 2.0, 2.0 * x, 0.0);
    let y = a.lu().solve(&rhs).ok_or(StoichiometryError::SingularSystem)?;
    debug!("material balance solution: {}", y.transpose());
    Ok(ProductComposition {
        co2: y[0],
        co: y[1],
        h2o: y[2],
        h2: y[3],
    })
}

impl Propellant {
    pub fn new(fuel: EmpiricalFormula, mixture_ratio: f64) -> Self {
        Self { fuel, mixture_ratio }
    }

    pub fn validate(&self) -> Result<(), StoichiometryError> {
        self.fuel.validate()?;
        let km = self.mixture_ratio;
        if !(km.is_finite() && km > 0.0) {
            return Err(StoichiometryError::InvalidMixtureRatio(km));
        }
        Ok(())
    }

    /// fuel molar mass -> moles of O2 -> product balance -> mean molar mass
    pub fn calculate(&self) -> Result<StoichiometryReport, StoichiometryError> {
        self.validate()?;
        info!("______________STOICHIOMETRY CALCULATION________");
        let fuel_molar_mass = self.fuel.molar_mass();
        let oxygen_moles = oxygen_moles(self.mixture_ratio, fuel_molar_mass);
        let km0 = stoichiometric_mixture_ratio(&self.fuel);
        let alpha = self.mixture_ratio / km0;
        info!(
            "fuel {}: M = {:.4} g/mol, x(O2) = {:.4}, Km0 = {:.4}, alpha = {:.4}",
            self.fuel, fuel_molar_mass, oxygen_moles, km0, alpha
        );
        if alpha >= 1.0 {
            warn!(
                "excess oxidizer coefficient {:.3} >= 1, the CO/H2 closure assumes a fuel-rich mixture",
                alpha
            );
        }
        let products = product_balance(&self.fuel, oxygen_moles)?;
        for (species, value) in products.as_array() {
            if value < 0.0 {
                return Err(StoichiometryError::NegativeProduct {
                    species,
                    value,
                    mixture_ratio: self.mixture_ratio,
                });
            }
        }
        let mean_molar_mass = products.mean_molar_mass();
        info!("mean molar mass of products: {:.4} g/mol", mean_molar_mass);
        info!("______________STOICHIOMETRY CALCULATION ENDED________");
        Ok(StoichiometryReport {
            input: self.clone(),
            fuel_molar_mass,
            oxygen_moles,
            stoichiometric_mixture_ratio: km0,
            excess_oxidizer_coefficient: alpha,
            products,
            mean_molar_mass,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StoichiometryReport {
    pub input: Propellant,
    /// g/mol
    pub fuel_molar_mass: f64,
    /// mol O2 per mol of fuel
    pub oxygen_moles: f64,
    pub stoichiometric_mixture_ratio: f64,
    pub excess_oxidizer_coefficient: f64,
    pub products: ProductComposition,
    /// g/mol
    pub mean_molar_mass: f64,
}

impl CalculationReport for StoichiometryReport {
    fn title(&self) -> String {
        format!(
            "STOICHIOMETRY {} / O2, Km = {}",
            self.input.fuel, self.input.mixture_ratio
        )
    }

    fn report_lines(&self) -> Vec<String> {
        let p = &self.products;
        vec![
            format!("a (CO2): {:.2}", p.co2),
            format!("b (CO):  {:.2}", p.co),
            format!("c (H2O): {:.2}", p.h2o),
            format!("d (H2):  {:.2}", p.h2),
            format!(
                "Average molar mass of combustion products: {:.2} g/mol",
                self.mean_molar_mass
            ),
        ]
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["quantity", "value", "unit"]);
        table.add_row(row!["fuel molar mass", fmt_fixed(self.fuel_molar_mass, 4), "g/mol"]);
        table.add_row(row!["O2 per mole of fuel", fmt_fixed(self.oxygen_moles, 4), "mol"]);
        table.add_row(row![
            "stoichiometric Km0",
            fmt_fixed(self.stoichiometric_mixture_ratio, 4),
            "-"
        ]);
        table.add_row(row![
            "excess oxidizer coefficient",
            fmt_fixed(self.excess_oxidizer_coefficient, 4),
            "-"
        ]);
        let amounts = self.products.as_array();
        let fractions = self.products.mole_fractions();
        for ((species, n), (_, w)) in amounts.iter().zip(fractions.iter()) {
            table.add_row(row![
                format!("{} (x = {})", species, fmt_fixed(*w, 4)),
                fmt_fixed(*n, 4),
                "mol"
            ]);
        }
        table.add_row(row![
            "mean molar mass of products",
            fmt_fixed(self.mean_molar_mass, 4),
            "g/mol"
        ]);
        table
    }
}

impl fmt::Display for StoichiometryReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.report_lines().join("\n"))
    }
}
