//! Common presentation layer of the calculators.
//!
//! Every calculator produces a report struct that can be printed either as the
//! short fixed-precision lines of an engineering notebook (`report_lines`) or as a
//! prettytable with all intermediate values (`pretty_print`).
use crate::Combustion::stoichiometry::StoichiometryReport;
use crate::Hydraulics::collector::CollectorReport;
use crate::Nozzle::performance::PerformanceReport;
use crate::Structures::wall_thickness::WallReport;
use enum_dispatch::enum_dispatch;
use prettytable::Table;
use serde::Serialize;

#[enum_dispatch]
pub trait CalculationReport {
    fn title(&self) -> String;
    /// result lines with the precision used in design notes
    fn report_lines(&self) -> Vec<String>;
    /// table of inputs, intermediate values and results
    fn table(&self) -> Table;
    fn pretty_print(&self) {
        println!("__________{}__________", self.title());
        self.table().printstd();
    }
    fn print_lines(&self) {
        for line in self.report_lines() {
            println!("{}", line);
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[enum_dispatch(CalculationReport)]
pub enum ReportKind {
    Stoichiometry(StoichiometryReport),
    Performance(PerformanceReport),
    Collector(CollectorReport),
    Walls(WallReport),
}

/// Formats `value` with a fixed number of decimals, the way values are shown in tables
pub fn fmt_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Shortest exact representation of `value`, whole numbers keep a `.0` suffix
pub fn fmt_plain(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
