use crate::Utils::report::{CalculationReport, fmt_fixed};
use crate::units::{ensure_positive, m_to_mm, mm_to_m};
use log::info;
use prettytable::{Table, row};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// ultimate tensile strength used when the material is not specified, Pa
pub const DEFAULT_TENSILE_STRENGTH: f64 = 500e6;
pub const DEFAULT_SAFETY_FACTOR: f64 = 1.4;

#[derive(Debug, Error, PartialEq)]
pub enum ThicknessError {
    #[error("section '{section}': parameter '{name}' must be positive and finite, got {value}")]
    NonPositive {
        section: String,
        name: &'static str,
        value: f64,
    },
    #[error("section '{section}': cone half-angle must be in [0, 90) degrees, got {angle}")]
    InvalidHalfAngle { section: String, angle: f64 },
}

/// shape of a pressure-vessel segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum ShellSegment {
    Cylindrical,
    /// cone with the half-angle between generatrix and axis, degrees
    Conical { half_angle_deg: f64 },
}

impl fmt::Display for ShellSegment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShellSegment::Cylindrical => write!(f, "Cylindrical"),
            ShellSegment::Conical { .. } => write!(f, "Conical"),
        }
    }
}

/// membrane forces per unit length of the shell, N/m
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MembraneForces {
    pub meridional: f64,
    pub hoop: f64,
}

impl MembraneForces {
    /// Equivalent force of the biaxial membrane state, sqrt(N_m² + N_θ² - N_m N_θ)
    pub fn equivalent(&self) -> f64 {
        let (nm, nt) = (self.meridional, self.hoop);
        (nm.powi(2) + nt.powi(2) - nm * nt).sqrt()
    }
}

/// Membrane theory of a thin shell of revolution under internal pressure `p` (Pa), radius `r` (m).
/// For a cone both forces grow as 1/cos(α).
pub fn membrane_forces(p: f64, r: f64, segment: ShellSegment) -> MembraneForces {
    match segment {
        ShellSegment::Cylindrical => MembraneForces {
            meridional: p * r / 2.0,
            hoop: p * r,
        },
        ShellSegment::Conical { half_angle_deg } => {
            let cos_a = half_angle_deg.to_radians().cos();
            MembraneForces {
                meridional: (p * r) / (2.0 * cos_a),
                hoop: (p * r) / cos_a,
            }
        }
    }
}

/// Required wall thickness, m
pub fn wall_thickness(forces: &MembraneForces, tensile_strength: f64, safety_factor: f64) -> f64 {
    safety_factor * forces.equivalent() / tensile_strength
}

/// one segment of the chamber/nozzle wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallSection {
    pub name: String,
    /// internal pressure, Pa
    pub pressure: f64,
    /// radius of the segment, m
    pub radius: f64,
    pub segment: ShellSegment,
    /// material ultimate tensile strength, Pa
    #[serde(default = "default_strength")]
    pub tensile_strength: f64,
    #[serde(default = "default_safety")]
    pub safety_factor: f64,
}

fn default_strength() -> f64 {
    DEFAULT_TENSILE_STRENGTH
}

fn default_safety() -> f64 {
    DEFAULT_SAFETY_FACTOR
}

impl WallSection {
    pub fn new(name: &str, pressure: f64, radius: f64, segment: ShellSegment) -> Self {
        Self {
            name: name.to_string(),
            pressure,
            radius,
            segment,
            tensile_strength: DEFAULT_TENSILE_STRENGTH,
            safety_factor: DEFAULT_SAFETY_FACTOR,
        }
    }

    pub fn with_tensile_strength(mut self, sigma_b: f64) -> Self {
        self.tensile_strength = sigma_b;
        self
    }

    pub fn validate(&self) -> Result<(), ThicknessError> {
        let check = |name: &'static str, value: f64| {
            ensure_positive(value).map_err(|value| ThicknessError::NonPositive {
                section: self.name.clone(),
                name,
                value,
            })
        };
        check("pressure", self.pressure)?;
        check("radius", self.radius)?;
        check("tensile strength", self.tensile_strength)?;
        check("safety factor", self.safety_factor)?;
        if let ShellSegment::Conical { half_angle_deg } = self.segment {
            if !(half_angle_deg.is_finite() && (0.0..90.0).contains(&half_angle_deg)) {
                return Err(ThicknessError::InvalidHalfAngle {
                    section: self.name.clone(),
                    angle: half_angle_deg,
                });
            }
        }
        Ok(())
    }

    pub fn calculate(&self) -> Result<SectionThickness, ThicknessError> {
        self.validate()?;
        let forces = membrane_forces(self.pressure, self.radius, self.segment);
        let thickness = wall_thickness(&forces, self.tensile_strength, self.safety_factor);
        info!(
            "{} ({}): N_m = {:.1} N/m, N_theta = {:.1} N/m, delta = {:.4} mm",
            self.name,
            self.segment,
            forces.meridional,
            forces.hoop,
            m_to_mm(thickness)
        );
        Ok(SectionThickness {
            section: self.clone(),
            forces,
            thickness,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionThickness {
    pub section: WallSection,
    pub forces: MembraneForces,
    /// m
    pub thickness: f64,
}

/// material of the chamber wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallMaterial {
    /// E-1 chamber material, σ_B = 150 MPa
    E1Chamber,
    /// high-strength alloy, σ_B = 500 MPa
    HighStrength,
}

impl WallMaterial {
    pub fn tensile_strength(&self) -> f64 {
        match self {
            WallMaterial::E1Chamber => 150e6,
            WallMaterial::HighStrength => DEFAULT_TENSILE_STRENGTH,
        }
    }
}

/// Chamber, nozzle inlet cone and nozzle exit cone of the E-1 engine
pub fn e1_wall_sections(material: WallMaterial) -> Vec<WallSection> {
    let sigma = material.tensile_strength();
    vec![
        WallSection::new("cylindrical part", 3e6, mm_to_m(36.4), ShellSegment::Cylindrical)
            .with_tensile_strength(sigma),
        WallSection::new(
            "Nozzle inlet",
            3e6,
            mm_to_m(36.4),
            ShellSegment::Conical {
                half_angle_deg: 30.0,
            },
        )
        .with_tensile_strength(sigma),
        WallSection::new(
            "Nozzle exit",
            1e6,
            mm_to_m(36.25),
            ShellSegment::Conical {
                half_angle_deg: 10.0,
            },
        )
        .with_tensile_strength(sigma),
    ]
}

/// results for all sections of a wall
#[derive(Debug, Clone, Serialize)]
pub struct WallReport {
    pub sections: Vec<SectionThickness>,
}

impl WallReport {
    pub fn calculate(sections: &[WallSection]) -> Result<Self, ThicknessError> {
        info!("______________WALL THICKNESS CALCULATION________");
        let sections = sections
            .iter()
            .map(WallSection::calculate)
            .collect::<Result<Vec<_>, _>>()?;
        info!("______________WALL THICKNESS CALCULATION ENDED________");
        Ok(Self { sections })
    }

    /// thickest wall among the sections, m
    pub fn max_thickness(&self) -> Option<f64> {
        self.sections.iter().map(|s| s.thickness).reduce(f64::max)
    }
}

impl CalculationReport for WallReport {
    fn title(&self) -> String {
        "WALL THICKNESS".to_string()
    }

    fn report_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for s in &self.sections {
            lines.push(format!("{} part calculation:", s.section.segment));
            lines.push(format!(
                "Wall thickness of {}: {:.2} mm",
                s.section.name,
                m_to_mm(s.thickness)
            ));
        }
        lines
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row![
            "section", "shape", "p, MPa", "R, mm", "alpha, deg", "sigma_B, MPa", "N_m, N/m",
            "N_theta, N/m", "delta, mm"
        ]);
        for s in &self.sections {
            let w = &s.section;
            let angle = match w.segment {
                ShellSegment::Cylindrical => "-".to_string(),
                ShellSegment::Conical { half_angle_deg } => fmt_fixed(half_angle_deg, 1),
            };
            table.add_row(row![
                w.name,
                w.segment,
                fmt_fixed(w.pressure / 1e6, 2),
                fmt_fixed(m_to_mm(w.radius), 2),
                angle,
                fmt_fixed(w.tensile_strength / 1e6, 0),
                fmt_fixed(s.forces.meridional, 1),
                fmt_fixed(s.forces.hoop, 1),
                fmt_fixed(m_to_mm(s.thickness), 4)
            ]);
        }
        table
    }
}

impl fmt::Display for WallReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.report_lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cylinder_forces() {
        let f = membrane_forces(3e6, 0.0364, ShellSegment::Cylindrical);
        assert_relative_eq!(f.hoop, 109200.0, epsilon = 1e-6);
        assert_relative_eq!(f.meridional, 54600.0, epsilon = 1e-6);
        // sqrt(N² + N²/4 - N²/2) = N sqrt(3)/2
        assert_relative_eq!(f.equivalent(), 109200.0 * 3f64.sqrt() / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_angle_cone_is_cylinder() {
        let cyl = WallSection::new("c", 2e6, 0.05, ShellSegment::Cylindrical)
            .calculate()
            .unwrap();
        let cone = WallSection::new("k", 2e6, 0.05, ShellSegment::Conical { half_angle_deg: 0.0 })
            .calculate()
            .unwrap();
        assert_relative_eq!(cyl.thickness, cone.thickness, epsilon = 1e-15);
    }

    #[test]
    fn test_e1_chamber_sections() {
        let report = WallReport::calculate(&e1_wall_sections(WallMaterial::E1Chamber)).unwrap();
        let t: Vec<f64> = report.sections.iter().map(|s| m_to_mm(s.thickness)).collect();
        assert_relative_eq!(t[0], 0.8826530915370997, epsilon = 1e-9);
        assert_relative_eq!(t[1], 1.0192, epsilon = 1e-9);
        assert_relative_eq!(t[2], 0.2975253400651313, epsilon = 1e-9);
        assert_relative_eq!(m_to_mm(report.max_thickness().unwrap()), 1.0192, epsilon = 1e-9);
        assert_eq!(
            report.report_lines(),
            vec![
                "Cylindrical part calculation:",
                "Wall thickness of cylindrical part: 0.88 mm",
                "Conical part calculation:",
                "Wall thickness of Nozzle inlet: 1.02 mm",
                "Conical part calculation:",
                "Wall thickness of Nozzle exit: 0.30 mm",
            ]
        );
    }

    #[test]
    fn test_stronger_material_scales_thickness() {
        let weak = WallReport::calculate(&e1_wall_sections(WallMaterial::E1Chamber)).unwrap();
        let strong = WallReport::calculate(&e1_wall_sections(WallMaterial::HighStrength)).unwrap();
        for (w, s) in weak.sections.iter().zip(strong.sections.iter()) {
            assert_relative_eq!(w.thickness / s.thickness, 500.0 / 150.0, epsilon = 1e-12);
        }
        assert_relative_eq!(m_to_mm(strong.sections[0].thickness), 0.2647959274611299, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_sections() {
        let err = WallSection::new("cone", 1e6, 0.03, ShellSegment::Conical { half_angle_deg: 90.0 })
            .calculate()
            .unwrap_err();
        assert_eq!(
            err,
            ThicknessError::InvalidHalfAngle {
                section: "cone".to_string(),
                angle: 90.0
            }
        );
        let err = WallSection::new("cyl", 1e6, -0.03, ShellSegment::Cylindrical)
            .calculate()
            .unwrap_err();
        assert!(matches!(err, ThicknessError::NonPositive { name: "radius", .. }));
        // first failing section aborts the whole wall
        let mut sections = e1_wall_sections(WallMaterial::E1Chamber);
        sections[1].tensile_strength = 0.0;
        assert!(WallReport::calculate(&sections).is_err());
    }

    #[test]
    fn test_section_from_json_uses_default_material() {
        let json = r#"{"name": "throat", "pressure": 3e6, "radius": 0.015,
                       "segment": {"shape": "Conical", "half_angle_deg": 15.0}}"#;
        let section: WallSection = serde_json::from_str(json).unwrap();
        assert_eq!(section.tensile_strength, DEFAULT_TENSILE_STRENGTH);
        assert_eq!(section.safety_factor, DEFAULT_SAFETY_FACTOR);
        assert_eq!(section.segment, ShellSegment::Conical { half_angle_deg: 15.0 });
    }
}
