//////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Combustion::stoichiometry::Propellant;
    use crate::Hydraulics::collector::CoolantJacket;
    use crate::Nozzle::performance::{E1_PRODUCTS_MOLAR_MASS, NozzleError, NozzleTask};
    use crate::Structures::wall_thickness::{ShellSegment, WallSection};
    use crate::Utils::report::{CalculationReport, ReportKind};
    use crate::engine_task::{EngineTask, TaskError};
    use approx::assert_relative_eq;

    #[test]
    fn test_e1_task_solves_all_sections() {
        let report = EngineTask::e1().solve().unwrap();
        assert_eq!(report.reports.len(), 4);
        assert!(matches!(report.reports[0], ReportKind::Stoichiometry(_)));
        assert!(matches!(report.reports[1], ReportKind::Performance(_)));
        assert!(matches!(report.reports[2], ReportKind::Collector(_)));
        assert!(matches!(report.reports[3], ReportKind::Walls(_)));
    }

    #[test]
    fn test_nozzle_takes_molar_mass_from_stoichiometry() {
        let report = EngineTask::e1().solve().unwrap();
        let m = report.stoichiometry().unwrap().mean_molar_mass;
        let perf = report.performance().unwrap();
        assert_relative_eq!(perf.input.molar_mass.unwrap(), m * 1e-3, epsilon = 1e-15);
        // M = 23.7435 g/mol instead of the rounded 23.74 g/mol
        assert_relative_eq!(perf.mass_flow, 1.1508453874709892, epsilon = 1e-9);
        assert_relative_eq!(perf.specific_impulse, 265.72674390740065, epsilon = 1e-6);
    }

    #[test]
    fn test_explicit_molar_mass_is_kept() {
        let task = EngineTask {
            stoichiometry: Some(Propellant::default()),
            nozzle: Some(NozzleTask::default()),
            ..EngineTask::default()
        };
        let report = task.solve().unwrap();
        assert_eq!(report.performance().unwrap().input.molar_mass, Some(23.74e-3));
    }

    #[test]
    fn test_nozzle_alone_takes_e1_molar_mass() {
        let mut nozzle = NozzleTask::default();
        nozzle.molar_mass = None;
        let task = EngineTask {
            nozzle: Some(nozzle.clone()),
            ..EngineTask::default()
        };
        let report = task.solve().unwrap();
        let perf = report.performance().unwrap();
        assert_eq!(perf.input.molar_mass, Some(E1_PRODUCTS_MOLAR_MASS));
        assert_relative_eq!(perf.mass_flow, 1.150761136396971, epsilon = 1e-9);
        // calculated directly the empty molar mass is still an error
        assert_eq!(nozzle.calculate().unwrap_err(), NozzleError::MissingMolarMass);
        assert_eq!(
            TaskError::from(NozzleError::MissingMolarMass).to_string(),
            "nozzle: molar mass of the combustion products is not set"
        );
    }

    #[test]
    fn test_omitted_molar_mass_key_falls_back_to_stoichiometry() {
        let json = r#"{
            "stoichiometry": { "fuel": { "carbon": 12.0, "hydrogen": 24.0 }, "mixture_ratio": 2.5 },
            "nozzle": { "thrust": 5000.0 }
        }"#;
        let task: EngineTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.nozzle.as_ref().unwrap().molar_mass, None);
        let report = task.solve().unwrap();
        let m = report.stoichiometry().unwrap().mean_molar_mass;
        let perf = report.performance().unwrap();
        assert_relative_eq!(perf.input.molar_mass.unwrap(), m * 1e-3, epsilon = 1e-15);
        assert_relative_eq!(perf.input.molar_mass.unwrap(), 0.02454725, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_task() {
        assert!(matches!(
            EngineTask::new().solve().unwrap_err(),
            TaskError::EmptyTask
        ));
        let task = EngineTask {
            walls: Some(Vec::new()),
            ..EngineTask::default()
        };
        assert!(matches!(task.solve().unwrap_err(), TaskError::EmptyTask));
    }

    #[test]
    fn test_errors_propagate_from_sections() {
        let task = EngineTask {
            collector: Some(CoolantJacket {
                n_channels: 0,
                ..CoolantJacket::default()
            }),
            ..EngineTask::default()
        };
        assert!(matches!(task.solve().unwrap_err(), TaskError::Hydraulics(_)));

        let task = EngineTask {
            walls: Some(vec![WallSection::new(
                "bad cone",
                3e6,
                0.03,
                ShellSegment::Conical {
                    half_angle_deg: -5.0,
                },
            )]),
            ..EngineTask::default()
        };
        assert!(matches!(task.solve().unwrap_err(), TaskError::Thickness(_)));
    }

    #[test]
    fn test_report_lines_through_dispatch() {
        let report = EngineTask::e1().solve().unwrap();
        let lines: Vec<String> = report
            .reports
            .iter()
            .flat_map(|r| r.report_lines())
            .collect();
        assert_eq!(lines.len(), 5 + 8 + 10 + 6);
        assert_eq!(lines[0], "a (CO2): 3.83");
        assert_eq!(lines[13], "Channel Velocity: 6.00 m/s");
        assert_eq!(lines[lines.len() - 1], "Wall thickness of Nozzle exit: 0.30 mm");
    }

    #[test]
    fn test_task_from_json() {
        let json = r#"{
            "stoichiometry": { "fuel": { "carbon": 12.0, "hydrogen": 24.0 }, "mixture_ratio": 2.5 },
            "nozzle": { "molar_mass": null, "thrust": 5000.0 }
        }"#;
        let task: EngineTask = serde_json::from_str(json).unwrap();
        let report = task.solve().unwrap();
        assert_eq!(report.reports.len(), 2);
        let perf = report.performance().unwrap();
        assert_eq!(perf.input.thrust, 5000.0);
        assert_eq!(perf.input.chamber_pressure, 3e6);
        assert!(perf.mass_flow > 0.0);
    }
}
