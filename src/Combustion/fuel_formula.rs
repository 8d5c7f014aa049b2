use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// element symbol with an optional integer or fractional count
static ELEMENT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][a-z]?)(\d+(?:\.\d+)?|\.\d+)?").expect("element token pattern")
});

pub struct Element {
    pub name: &'static str,
    /// g/mol
    pub atomic_mass: f64,
}

pub const CARBON: Element = Element {
    name: "C",
    atomic_mass: 12.011,
};
pub const HYDROGEN: Element = Element {
    name: "H",
    atomic_mass: 1.008,
};
pub const OXYGEN: Element = Element {
    name: "O",
    atomic_mass: 15.999,
};

const ELEMENTS: &[Element] = &[CARBON, HYDROGEN, OXYGEN];

pub fn atomic_mass(symbol: &str) -> Option<f64> {
    ELEMENTS
        .iter()
        .find(|e| e.name == symbol)
        .map(|e| e.atomic_mass)
}

#[derive(Debug, Error, PartialEq)]
pub enum FormulaError {
    #[error("empty fuel formula")]
    Empty,
    #[error("cannot parse fuel formula '{0}'")]
    Unparsable(String),
    #[error("element '{0}' is not supported in a hydrocarbon fuel formula")]
    UnsupportedElement(String),
    #[error("fuel formula must contain carbon and hydrogen, got C = {carbon}, H = {hydrogen}")]
    NotAHydrocarbon { carbon: f64, hydrogen: f64 },
}

/// Conventional (empirical) formula of a hydrocarbon fuel C_n H_m, where n and m
/// are atoms per mole of fuel and need not be integers, e.g. RP-1 C7.2107H13.2936
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmpiricalFormula {
    pub carbon: f64,
    pub hydrogen: f64,
}

impl EmpiricalFormula {
    pub fn new(carbon: f64, hydrogen: f64) -> Result<Self, FormulaError> {
        let formula = Self { carbon, hydrogen };
        formula.validate()?;
        Ok(formula)
    }

    /// RP-1 kerosene according to Dobrovolsky
    pub fn rp1() -> Self {
        Self {
            carbon: 7.2107,
            hydrogen: 13.2936,
        }
    }

    pub fn validate(&self) -> Result<(), FormulaError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.carbon) && ok(self.hydrogen) {
            Ok(())
        } else {
            Err(FormulaError::NotAHydrocarbon {
                carbon: self.carbon,
                hydrogen: self.hydrogen,
            })
        }
    }

    /// molar mass of one mole of the conventional fuel molecule, g/mol
    pub fn molar_mass(&self) -> f64 {
        self.carbon * CARBON.atomic_mass + self.hydrogen * HYDROGEN.atomic_mass
    }
}

impl Default for EmpiricalFormula {
    fn default() -> Self {
        Self::rp1()
    }
}

/// Splits a formula with fractional counts into element counts.
/// Repeated elements are summed, an element without a count is counted once: "CH3CH3" -> {C: 2, H: 6}
pub fn parse_fractional_formula(formula: &str) -> Result<HashMap<String, f64>, FormulaError> {
    let formula: String = formula.chars().filter(|c| !c.is_whitespace()).collect();
    if formula.is_empty() {
        return Err(FormulaError::Empty);
    }
    let mut counts: HashMap<String, f64> = HashMap::new();
    let mut consumed = 0;
    for cap in ELEMENT_TOKEN.captures_iter(&formula) {
        let whole = cap.get(0).ok_or_else(|| FormulaError::Unparsable(formula.clone()))?;
        // every character must belong to an element token
        if whole.start() != consumed {
            return Err(FormulaError::Unparsable(formula.clone()));
        }
        consumed = whole.end();
        let count = match cap.get(2) {
            Some(n) => n
                .as_str()
                .parse::<f64>()
                .map_err(|_| FormulaError::Unparsable(formula.clone()))?,
            None => 1.0,
        };
        *counts.entry(cap[1].to_string()).or_insert(0.0) += count;
    }
    if consumed != formula.len() {
        return Err(FormulaError::Unparsable(formula));
    }
    Ok(counts)
}

impl FromStr for EmpiricalFormula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let counts = parse_fractional_formula(s)?;
        let mut carbon = 0.0;
        let mut hydrogen = 0.0;
        for (element, count) in counts {
            match element.as_str() {
                "C" => carbon += count,
                "H" => hydrogen += count,
                _ => return Err(FormulaError::UnsupportedElement(element)),
            }
        }
        Self::new(carbon, hydrogen)
    }
}

impl fmt::Display for EmpiricalFormula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "C{}H{}", self.carbon, self.hydrogen)
    }
}
