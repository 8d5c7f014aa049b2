use super::cli_input::{get_user_input, input_count, input_value, prompt};
use crate::Combustion::fuel_formula::EmpiricalFormula;
use crate::Combustion::stoichiometry::Propellant;
use crate::Hydraulics::collector::CoolantJacket;
use crate::Nozzle::performance::NozzleTask;
use crate::Structures::wall_thickness::{ShellSegment, WallReport, WallSection};
use crate::Utils::report::CalculationReport;
use crate::units::{mm_to_m, m_to_mm};
use std::io::{self, Write};

pub fn calculators_menu() {
    loop {
        println!("\n=== Custom calculation (Enter keeps the E-1 value) ===");
        println!("\x1b[33m1. Cooling channels and manifolds\x1b[0m");
        println!("\x1b[33m2. Stoichiometry\x1b[0m");
        println!("\x1b[33m3. Nozzle performance\x1b[0m");
        println!("\x1b[33m4. Wall thickness of one section\x1b[0m");
        println!("\x1b[33m0. Back to main menu\x1b[0m");
        print!("\x1b[36mEnter your choice: \x1b[0m");
        let _ = io::stdout().flush();

        let result = match get_user_input().trim() {
            "1" => run_collector(),
            "2" => run_stoichiometry(),
            "3" => run_nozzle(),
            "4" => run_wall_section(),
            "0" => break,
            _ => {
                println!("Invalid choice. Please try again.");
                Ok(())
            }
        };
        if let Err(e) = result {
            println!("Error: {}", e);
        }
    }
}

fn show<R: CalculationReport>(report: &R) {
    report.print_lines();
    report.pretty_print();
}

fn run_collector() -> Result<(), String> {
    let d = CoolantJacket::default();
    let jacket = CoolantJacket {
        channel_width_mm: input_value("channel width, mm", d.channel_width_mm)?,
        channel_height_mm: input_value("channel height, mm", d.channel_height_mm)?,
        roughness: input_value("wall roughness, m", d.roughness)?,
        jacket_length: input_value("cooling tract length, m", d.jacket_length)?,
        n_channels: input_count("number of channels", d.n_channels)?,
        rho_cold: input_value("inlet density, kg/m3", d.rho_cold)?,
        mu_cold: input_value("inlet viscosity, Pa*s", d.mu_cold)?,
        rho_hot: input_value("outlet density, kg/m3", d.rho_hot)?,
        mass_flow: input_value("coolant mass flow, kg/s", d.mass_flow)?,
        manifold_loss_ratio: input_value("manifold loss ratio", d.manifold_loss_ratio)?,
        safety_factor: input_value("manifold area safety factor", d.safety_factor)?,
    };
    let report = jacket.calculate().map_err(|e| e.to_string())?;
    show(&report);
    Ok(())
}

fn run_stoichiometry() -> Result<(), String> {
    let d = Propellant::default();
    let answer = prompt(&format!("fuel formula [{}]: ", d.fuel));
    let fuel = if answer.trim().is_empty() {
        d.fuel
    } else {
        answer
            .trim()
            .parse::<EmpiricalFormula>()
            .map_err(|e| e.to_string())?
    };
    let mixture_ratio = input_value("mixture ratio Km", d.mixture_ratio)?;
    let report = Propellant::new(fuel, mixture_ratio)
        .calculate()
        .map_err(|e| e.to_string())?;
    show(&report);
    Ok(())
}

fn run_nozzle() -> Result<(), String> {
    let d = NozzleTask::default();
    let task = NozzleTask {
        gamma: input_value("adiabatic index", d.gamma)?,
        gas_constant: d.gas_constant,
        molar_mass: Some(input_value(
            "molar mass of products, kg/mol",
            d.molar_mass.unwrap_or(23.74e-3),
        )?),
        chamber_temperature: input_value("chamber temperature, K", d.chamber_temperature)?,
        chamber_pressure: input_value("chamber pressure, Pa", d.chamber_pressure)?,
        exit_pressure: input_value("nozzle exit pressure, Pa", d.exit_pressure)?,
        ambient_pressure: input_value("ambient pressure, Pa", d.ambient_pressure)?,
        thrust: input_value("thrust, N", d.thrust)?,
        g0: d.g0,
    };
    let report = task.calculate().map_err(|e| e.to_string())?;
    show(&report);
    Ok(())
}

fn run_wall_section() -> Result<(), String> {
    let d = WallSection::new("section", 3e6, mm_to_m(36.4), ShellSegment::Cylindrical)
        .with_tensile_strength(150e6);
    let pressure = input_value("internal pressure, Pa", d.pressure)?;
    let radius = mm_to_m(input_value("radius, mm", m_to_mm(d.radius))?);
    let angle = input_value("cone half-angle, deg (0 = cylinder)", 0.0)?;
    let segment = if angle == 0.0 {
        ShellSegment::Cylindrical
    } else {
        ShellSegment::Conical {
            half_angle_deg: angle,
        }
    };
    let section = WallSection {
        pressure,
        radius,
        segment,
        tensile_strength: input_value("tensile strength, Pa", d.tensile_strength)?,
        safety_factor: input_value("safety factor", d.safety_factor)?,
        ..d
    };
    let report = WallReport::calculate(&[section]).map_err(|e| e.to_string())?;
    show(&report);
    Ok(())
}
