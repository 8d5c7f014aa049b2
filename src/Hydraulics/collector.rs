use super::cooling_channels::{ChannelFlow, HydraulicsError, channel_flow, positive};
use super::manifold::{ManifoldSide, ManifoldSizing, size_manifold};
use crate::Utils::report::{CalculationReport, fmt_fixed};
use crate::units::{M2_TO_MM2, m_to_mm, mm_to_m, pa_to_bar};
use log::{info, warn};
use prettytable::{Table, row};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input data of the regenerative cooling jacket and its manifolds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoolantJacket {
    /// channel width, mm
    pub channel_width_mm: f64,
    /// channel height (depth), mm
    pub channel_height_mm: f64,
    /// absolute wall roughness, m
    pub roughness: f64,
    /// total length of the cooling tract, m
    pub jacket_length: f64,
    pub n_channels: usize,
    /// coolant density at the inlet, kg/m^3
    pub rho_cold: f64,
    /// coolant viscosity at the inlet, Pa*s
    pub mu_cold: f64,
    /// coolant density at the outlet, kg/m^3
    pub rho_hot: f64,
    /// total coolant mass flow, kg/s
    pub mass_flow: f64,
    /// manifold pressure drop as a fraction of the channel pressure drop
    pub manifold_loss_ratio: f64,
    /// margin on the manifold flow area
    pub safety_factor: f64,
}

impl Default for CoolantJacket {
    /// E-1 jacket: SLM printed channels cooled by the whole RP-1 flow
    fn default() -> Self {
        Self {
            channel_width_mm: 0.9,
            channel_height_mm: 1.2,
            roughness: 50e-6,
            jacket_length: (190.84 + 77.0) / 1000.0,
            n_channels: 70,
            rho_cold: 780.0,
            mu_cold: 1.5e-3,
            rho_hot: 700.0,
            mass_flow: 0.3 * 1.18,
            manifold_loss_ratio: 0.1,
            safety_factor: 1.2,
        }
    }
}

impl CoolantJacket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), HydraulicsError> {
        positive("channel width", self.channel_width_mm)?;
        positive("channel height", self.channel_height_mm)?;
        positive("jacket length", self.jacket_length)?;
        positive("inlet coolant density", self.rho_cold)?;
        positive("inlet coolant viscosity", self.mu_cold)?;
        positive("outlet coolant density", self.rho_hot)?;
        positive("mass flow", self.mass_flow)?;
        positive("safety factor", self.safety_factor)?;
        if self.n_channels == 0 {
            return Err(HydraulicsError::NoChannels);
        }
        let k = self.manifold_loss_ratio;
        if !(k.is_finite() && k > 0.0 && k <= 1.0) {
            return Err(HydraulicsError::InvalidLossRatio(k));
        }
        if self.rho_hot > self.rho_cold {
            warn!(
                "outlet coolant density {} kg/m3 is higher than inlet density {} kg/m3",
                self.rho_hot, self.rho_cold
            );
        }
        Ok(())
    }

    /// channel hydraulics followed by inlet and outlet manifold sizing
    pub fn calculate(&self) -> Result<CollectorReport, HydraulicsError> {
        self.validate()?;
        info!("______________COOLING JACKET CALCULATION________");
        let channels = channel_flow(
            mm_to_m(self.channel_width_mm),
            mm_to_m(self.channel_height_mm),
            self.roughness,
            self.jacket_length,
            self.n_channels,
            self.rho_cold,
            self.mu_cold,
            self.mass_flow,
        )?;
        // both manifolds are held to the same allowed pressure drop
        let allowed_dp = channels.pressure_drop * self.manifold_loss_ratio;
        let inlet = size_manifold(
            ManifoldSide::Inlet,
            self.mass_flow,
            self.rho_cold,
            allowed_dp,
            self.safety_factor,
        )?;
        let outlet = size_manifold(
            ManifoldSide::Outlet,
            self.mass_flow,
            self.rho_hot,
            allowed_dp,
            self.safety_factor,
        )?;
        info!("______________COOLING JACKET CALCULATION ENDED________");
        Ok(CollectorReport {
            input: self.clone(),
            channels,
            inlet,
            outlet,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectorReport {
    pub input: CoolantJacket,
    pub channels: ChannelFlow,
    pub inlet: ManifoldSizing,
    pub outlet: ManifoldSizing,
}

fn manifold_lines(m: &ManifoldSizing) -> Vec<String> {
    vec![
        format!("Max Velocity:     {:.2} m/s", m.max_velocity),
        format!("Required Area:    {:.2} mm2", m.required_area * M2_TO_MM2),
        format!("Equiv. Diameter:  {:.2} mm", m_to_mm(m.equivalent_diameter)),
    ]
}

impl CalculationReport for CollectorReport {
    fn title(&self) -> String {
        "COOLING CHANNELS AND MANIFOLDS".to_string()
    }

    fn report_lines(&self) -> Vec<String> {
        let ch = &self.channels;
        let mut lines = vec![
            format!("Channel Velocity: {:.2} m/s", ch.velocity),
            format!("Reynolds Number:  {:.0}", ch.reynolds),
            format!("Flow Regime: {}", ch.regime),
            format!(
                "Channel Pressure Drop: {:.0} Pa ({:.2} bar)",
                ch.pressure_drop,
                pa_to_bar(ch.pressure_drop)
            ),
        ];
        lines.extend(manifold_lines(&self.inlet));
        lines.extend(manifold_lines(&self.outlet));
        lines
    }

    fn table(&self) -> Table {
        let ch = &self.channels;
        let mut table = Table::new();
        table.add_row(row!["quantity", "value", "unit"]);
        table.add_row(row!["channel flow area", fmt_fixed(ch.area * M2_TO_MM2, 4), "mm2"]);
        table.add_row(row![
            "hydraulic diameter",
            fmt_fixed(m_to_mm(ch.hydraulic_diameter), 4),
            "mm"
        ]);
        table.add_row(row!["channel velocity", fmt_fixed(ch.velocity, 2), "m/s"]);
        table.add_row(row!["Reynolds number", fmt_fixed(ch.reynolds, 0), "-"]);
        table.add_row(row!["flow regime", ch.regime, "-"]);
        table.add_row(row!["friction factor", fmt_fixed(ch.friction_factor, 5), "-"]);
        table.add_row(row!["loss coefficient", fmt_fixed(ch.loss_coefficient, 2), "-"]);
        table.add_row(row![
            "channel pressure drop",
            fmt_fixed(pa_to_bar(ch.pressure_drop), 3),
            "bar"
        ]);
        for m in [&self.inlet, &self.outlet] {
            table.add_row(row![m.side.to_string(), "", ""]);
            table.add_row(row![
                "allowed pressure drop",
                fmt_fixed(m.allowed_pressure_drop, 0),
                "Pa"
            ]);
            table.add_row(row!["max velocity", fmt_fixed(m.max_velocity, 2), "m/s"]);
            table.add_row(row![
                "required area",
                fmt_fixed(m.required_area * M2_TO_MM2, 2),
                "mm2"
            ]);
            table.add_row(row![
                "equivalent diameter",
                fmt_fixed(m_to_mm(m.equivalent_diameter), 2),
                "mm"
            ]);
        }
        table
    }
}

impl fmt::Display for CollectorReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.report_lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hydraulics::cooling_channels::FlowRegime;

    #[test]
    fn test_e1_collector_report_lines() {
        let report = CoolantJacket::default().calculate().unwrap();
        let lines = report.report_lines();
        assert_eq!(
            lines,
            vec![
                "Channel Velocity: 6.00 m/s",
                "Reynolds Number:  3211",
                "Flow Regime: TURBULENT",
                "Channel Pressure Drop: 206928 Pa (2.07 bar)",
                "Max Velocity:     7.28 m/s",
                "Required Area:    37.38 mm2",
                "Equiv. Diameter:  6.90 mm",
                "Max Velocity:     7.69 m/s",
                "Required Area:    39.46 mm2",
                "Equiv. Diameter:  7.09 mm",
            ]
        );
    }

    #[test]
    fn test_manifolds_share_allowed_pressure_drop() {
        let report = CoolantJacket::default().calculate().unwrap();
        assert_eq!(
            report.inlet.allowed_pressure_drop,
            report.outlet.allowed_pressure_drop
        );
        assert!((report.inlet.allowed_pressure_drop - 0.1 * report.channels.pressure_drop).abs() < 1e-9);
    }

    #[test]
    fn test_wide_slow_channels_are_laminar() {
        let jacket = CoolantJacket {
            n_channels: 400,
            ..CoolantJacket::default()
        };
        let report = jacket.calculate().unwrap();
        assert_eq!(report.channels.regime, FlowRegime::Laminar);
        assert!((report.channels.friction_factor - 64.0 / report.channels.reynolds).abs() < 1e-12);
        assert!(report.report_lines()[2].ends_with("LAMINAR"));
    }

    #[test]
    fn test_invalid_loss_ratio() {
        let jacket = CoolantJacket {
            manifold_loss_ratio: 1.5,
            ..CoolantJacket::default()
        };
        assert_eq!(
            jacket.calculate().unwrap_err(),
            HydraulicsError::InvalidLossRatio(1.5)
        );
    }

    #[test]
    fn test_table_has_all_rows() {
        let report = CoolantJacket::default().calculate().unwrap();
        // header + 8 channel rows + 2 x 5 manifold rows
        assert_eq!(report.table().len(), 19);
    }
}
