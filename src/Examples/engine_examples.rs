use crate::Combustion::stoichiometry::Propellant;
use crate::Hydraulics::collector::CoolantJacket;
use crate::Nozzle::performance::{NozzleTask, NozzleVariant};
use crate::Structures::wall_thickness::{WallMaterial, WallReport, e1_wall_sections};
use crate::Utils::report::CalculationReport;
use crate::engine_task::{EngineTask, TaskError};

/// names of the examples, index = task number
pub const EXAMPLES: [&str; 7] = [
    "Cooling channels and manifolds",
    "Stoichiometry RP-1 / LOX",
    "Nozzle performance, sea level",
    "Nozzle performance, 20 km",
    "Wall thickness, E-1 chamber material",
    "Wall thickness, high-strength alloy",
    "Complete E-1 engine",
];

/// Runs one of the E-1 calculations and prints the short report and the full table
pub fn engine_examples(task: usize) -> Result<(), TaskError> {
    match task {
        0 => {
            let report = CoolantJacket::default().calculate()?;
            report.print_lines();
            report.pretty_print();
        }
        1 => {
            let report = Propellant::default().calculate()?;
            report.print_lines();
            report.pretty_print();
        }
        2 => {
            let report = NozzleTask::preset(NozzleVariant::SeaLevel).calculate()?;
            report.print_lines();
            report.pretty_print();
        }
        3 => {
            let report = NozzleTask::preset(NozzleVariant::Altitude).calculate()?;
            report.print_lines();
            report.pretty_print();
        }
        4 => {
            let report = WallReport::calculate(&e1_wall_sections(WallMaterial::E1Chamber))?;
            report.print_lines();
            report.pretty_print();
        }
        5 => {
            let report = WallReport::calculate(&e1_wall_sections(WallMaterial::HighStrength))?;
            report.print_lines();
            report.pretty_print();
        }
        6 => {
            let report = EngineTask::e1().solve()?;
            report.print_lines();
            report.pretty_print();
        }
        _ => println!("No example with number {}", task),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_examples_run() {
        for task in 0..EXAMPLES.len() {
            engine_examples(task).unwrap();
        }
        // unknown numbers are not an error
        engine_examples(EXAMPLES.len()).unwrap();
    }
}
