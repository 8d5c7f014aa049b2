/// Wall thickness of the chamber and nozzle by the membrane theory of shells of revolution.
///
/// δ = sf · √(N_m² + N_θ² − N_m·N_θ) / σ_B, with
/// N_θ = PR, N_m = PR/2 for a cylinder and both divided by cos α for a cone.
/// # Examples
/// ```
/// use LREdesign::Structures::wall_thickness::{WallMaterial, WallReport, e1_wall_sections};
/// use LREdesign::Utils::report::CalculationReport;
/// let sections = e1_wall_sections(WallMaterial::E1Chamber);
/// let report = WallReport::calculate(&sections).unwrap();
/// report.pretty_print();
/// ```
pub mod wall_thickness;
