//! # Nozzle thermodynamic performance
//!
//! One-dimensional isentropic expansion of frozen combustion products from the chamber
//! (p_k, T_k) to the nozzle exit (p_a), operated at the ambient pressure p_H.
//!
//! | Symbol | Description | Units |
//! |--------|-------------|-------|
//! | `γ` | adiabatic index | - |
//! | `M` | molar mass of products | kg/mol |
//! | `V_a` | exhaust velocity | m/s |
//! | `F_a/F_t` | geometric expansion ratio | - |
//! | `c*` | characteristic velocity √(RT/M)/A(γ) | m/s |
//! | `ṁ` | mass flow P/(V_a + (p_a − p_H)/p_k·(F_a/F_t)·c*) | kg/s |
//! | `I_sp` | specific impulse P/(ṁ g0) | s |
//!
//! # Examples
//! ```
//! use LREdesign::Nozzle::performance::{NozzleTask, NozzleVariant};
//! use LREdesign::Utils::report::CalculationReport;
//! let report = NozzleTask::preset(NozzleVariant::SeaLevel).calculate().unwrap();
//! report.print_lines();
//! assert!((report.specific_impulse - 265.75).abs() < 0.01);
//! ```
pub mod gas_dynamics;
pub mod performance;
