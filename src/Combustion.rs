/// conventional (empirical) formula of a hydrocarbon fuel with fractional atom counts
/// # Examples
/// ```
/// use LREdesign::Combustion::fuel_formula::EmpiricalFormula;
/// let rp1: EmpiricalFormula = "C7.2107H13.2936".parse().unwrap();
/// println!("M = {} g/mol", rp1.molar_mass());
/// ```
pub mod fuel_formula;
/// Material balance of the combustion products of a hydrocarbon fuel with oxygen.
///
/// C_nH_m + x O2 -> a CO2 + b CO + c H2O + d H2, where x follows from the mass mixture
/// ratio Km and the four unknowns from the C, H, O balances closed by b = d.
/// # Examples
/// ```
/// use LREdesign::Combustion::stoichiometry::Propellant;
/// use LREdesign::Utils::report::CalculationReport;
/// let report = Propellant::default().calculate().unwrap();
/// report.pretty_print();
/// assert!((report.mean_molar_mass - 23.74).abs() < 0.01);
/// ```
pub mod stoichiometry;
