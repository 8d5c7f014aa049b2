//! # Engine design task
//!
//! Collects any subset of the calculators into one task that can be stored as JSON.
//! Sections are solved in the order stoichiometry, nozzle, cooling jacket, walls.
//! If the nozzle section omits `molar_mass` or sets it to null, the mean molar mass
//! of the combustion products found by the stoichiometry section is used. Without a
//! stoichiometry section the E-1 value 23.74 g/mol is taken.
//!
//! ```json
//! {
//!   "stoichiometry": { "fuel": { "carbon": 7.2107, "hydrogen": 13.2936 }, "mixture_ratio": 2.29 },
//!   "nozzle": { "molar_mass": null, "thrust": 3000.0 },
//!   "collector": { "n_channels": 70 },
//!   "walls": [ { "name": "cylindrical part", "pressure": 3e6, "radius": 0.0364,
//!                "segment": { "shape": "Cylindrical" }, "tensile_strength": 150e6 } ]
//! }
//! ```
use crate::Combustion::stoichiometry::{Propellant, StoichiometryError, StoichiometryReport};
use crate::Hydraulics::collector::CoolantJacket;
use crate::Hydraulics::cooling_channels::HydraulicsError;
use crate::Nozzle::performance::{
    E1_PRODUCTS_MOLAR_MASS, NozzleError, NozzleTask, PerformanceReport,
};
use crate::Structures::wall_thickness::{
    ThicknessError, WallMaterial, WallReport, WallSection, e1_wall_sections,
};
use crate::Utils::report::{CalculationReport, ReportKind};
use crate::units::g_per_mol_to_kg_per_mol;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("stoichiometry: {0}")]
    Stoichiometry(#[from] StoichiometryError),
    #[error("nozzle: {0}")]
    Nozzle(#[from] NozzleError),
    #[error("cooling jacket: {0}")]
    Hydraulics(#[from] HydraulicsError),
    #[error("wall thickness: {0}")]
    Thickness(#[from] ThicknessError),
    #[error("file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("file '{path}', line {line}, column {column}: {source}")]
    Parse {
        path: String,
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("task contains no calculations")]
    EmptyTask,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineTask {
    pub stoichiometry: Option<Propellant>,
    pub nozzle: Option<NozzleTask>,
    pub collector: Option<CoolantJacket>,
    pub walls: Option<Vec<WallSection>>,
}

impl EngineTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// The whole E-1 engine, with the nozzle molar mass taken from the stoichiometry
    pub fn e1() -> Self {
        let mut nozzle = NozzleTask::default();
        nozzle.molar_mass = None;
        Self {
            stoichiometry: Some(Propellant::default()),
            nozzle: Some(nozzle),
            collector: Some(CoolantJacket::default()),
            walls: Some(e1_wall_sections(WallMaterial::E1Chamber)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stoichiometry.is_none()
            && self.nozzle.is_none()
            && self.collector.is_none()
            && self.walls.as_ref().is_none_or(|w| w.is_empty())
    }

    pub fn solve(&self) -> Result<EngineReport, TaskError> {
        if self.is_empty() {
            return Err(TaskError::EmptyTask);
        }
        let mut reports: Vec<ReportKind> = Vec::new();

        let mut products_molar_mass = None;
        if let Some(propellant) = &self.stoichiometry {
            let report = propellant.calculate()?;
            products_molar_mass = Some(g_per_mol_to_kg_per_mol(report.mean_molar_mass));
            reports.push(report.into());
        }

        if let Some(nozzle) = &self.nozzle {
            let nozzle = match (nozzle.molar_mass, products_molar_mass) {
                (None, Some(m)) => {
                    info!("nozzle: molar mass {:.5} kg/mol taken from stoichiometry", m);
                    nozzle.clone().with_molar_mass(m)
                }
                (Some(given), Some(m)) => {
                    if ((given - m) / m).abs() > 0.01 {
                        warn!(
                            "nozzle molar mass {:.5} kg/mol differs from the stoichiometry result {:.5} kg/mol",
                            given, m
                        );
                    }
                    nozzle.clone()
                }
                (Some(_), None) => nozzle.clone(),
                (None, None) => {
                    warn!(
                        "nozzle: molar mass not set and no stoichiometry section, using E-1 value {} kg/mol",
                        E1_PRODUCTS_MOLAR_MASS
                    );
                    nozzle.clone().with_molar_mass(E1_PRODUCTS_MOLAR_MASS)
                }
            };
            reports.push(nozzle.calculate()?.into());
        }

        if let Some(jacket) = &self.collector {
            reports.push(jacket.calculate()?.into());
        }

        if let Some(walls) = &self.walls {
            if !walls.is_empty() {
                reports.push(WallReport::calculate(walls)?.into());
            }
        }
        info!("task solved: {} calculations", reports.len());
        Ok(EngineReport { reports })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EngineReport {
    pub reports: Vec<ReportKind>,
}

impl EngineReport {
    pub fn stoichiometry(&self) -> Option<&StoichiometryReport> {
        self.reports.iter().find_map(|r| match r {
            ReportKind::Stoichiometry(s) => Some(s),
            _ => None,
        })
    }

    pub fn performance(&self) -> Option<&PerformanceReport> {
        self.reports.iter().find_map(|r| match r {
            ReportKind::Performance(p) => Some(p),
            _ => None,
        })
    }

    pub fn print_lines(&self) {
        for report in &self.reports {
            println!("\n{}", report.title());
            report.print_lines();
        }
    }

    pub fn pretty_print(&self) {
        for report in &self.reports {
            report.pretty_print();
        }
    }
}
