//! # Coolant jacket hydraulics
//!
//! Regenerative cooling of the chamber by the fuel flowing through `N` identical
//! rectangular channels, followed by sizing of the inlet (cold) and outlet (hot) manifolds.
//!
//! | Symbol | Description | Units |
//! |--------|-------------|-------|
//! | `a`, `b` | channel width and height | mm |
//! | `F` | channel flow area | m² |
//! | `D_h` | hydraulic diameter 2F/(a+b) | m |
//! | `Re` | Reynolds number ρvD_h/μ | - |
//! | `λ` | Darcy friction factor | - |
//! | `ξ` | channel loss coefficient λL/D_h | - |
//!
//! Manifold pressure drop is limited to a fraction `K` of the channel pressure drop;
//! the maximum manifold velocity follows from Bernoulli, v = √(2Δp/ρ).
//!
//! # Examples
//! ```
//! use LREdesign::Hydraulics::collector::CoolantJacket;
//! use LREdesign::Utils::report::CalculationReport;
//! let jacket = CoolantJacket::default();
//! let report = jacket.calculate().unwrap();
//! assert!(report.channels.reynolds > 2300.0);
//! report.print_lines();
//! ```
pub mod collector;
/// single channel: geometry, Reynolds number, friction factor, Darcy pressure drop
pub mod cooling_channels;
/// inlet/outlet manifolds
pub mod manifold;
