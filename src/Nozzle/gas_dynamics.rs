//! Isentropic flow functions of an ideal gas with constant adiabatic index.
//!
//! `gamma` - adiabatic index, `r` - universal gas constant J/(mol*K), `m` - molar mass kg/mol,
//! `t` - stagnation temperature K, `pressure_ratio` - static to stagnation pressure ratio.

/// A(γ) = sqrt(γ (2/(γ+1))^((γ+1)/(γ-1))), the flow function at the critical section
pub fn gamma_function(gamma: f64) -> f64 {
    let exponent = (gamma + 1.0) / (gamma - 1.0);
    (gamma * (2.0 / (gamma + 1.0)).powf(exponent)).sqrt()
}

/// Velocity after adiabatic expansion from the chamber down to `pressure_ratio`, m/s
pub fn exhaust_velocity(gamma: f64, r: f64, t: f64, m: f64, pressure_ratio: f64) -> f64 {
    let exponent = (gamma - 1.0) / gamma;
    let enthalpy_term = (2.0 * gamma * r * t) / ((gamma - 1.0) * m);
    let expansion_term = 1.0 - pressure_ratio.powf(exponent);
    (enthalpy_term * expansion_term).sqrt()
}

/// Geometric expansion ratio F_a / F_t of a nozzle expanding to `pressure_ratio`
pub fn expansion_ratio(gamma: f64, pressure_ratio: f64) -> f64 {
    let num = (2.0 / (gamma + 1.0)).powf(1.0 / (gamma - 1.0)) * ((gamma - 1.0) / (gamma + 1.0)).sqrt();
    let den = pressure_ratio.powf(1.0 / gamma)
        * (1.0 - pressure_ratio.powf((gamma - 1.0) / gamma)).sqrt();
    num / den
}

/// sqrt(R T / M), m/s
pub fn gas_velocity_scale(r: f64, t: f64, m: f64) -> f64 {
    ((r * t) / m).sqrt()
}

/// c* = sqrt(R T / M) / A(γ), m/s
pub fn characteristic_velocity(gamma: f64, r: f64, t: f64, m: f64) -> f64 {
    gas_velocity_scale(r, t, m) / gamma_function(gamma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gamma_function() {
        assert_relative_eq!(gamma_function(1.13), 0.6345747971100408, epsilon = 1e-12);
        // textbook value for air
        assert_relative_eq!(gamma_function(1.4), 0.6847, epsilon = 1e-4);
    }

    #[test]
    fn test_exhaust_velocity() {
        let v = exhaust_velocity(1.13, 8.314, 3475.0, 23.74e-3, 0.8 * 101325.0 / 3e6);
        assert_relative_eq!(v, 2681.849905234533, epsilon = 1e-6);
        // no expansion, no velocity
        assert_relative_eq!(exhaust_velocity(1.13, 8.314, 3475.0, 23.74e-3, 1.0), 0.0);
    }

    #[test]
    fn test_expansion_ratio() {
        let fa = expansion_ratio(1.13, 0.8 * 101325.0 / 3e6);
        assert_relative_eq!(fa, 6.3764577178515065, epsilon = 1e-9);
        // deeper expansion needs a larger nozzle
        assert!(expansion_ratio(1.13, 0.01) > fa);
    }

    #[test]
    fn test_characteristic_velocity() {
        let c = characteristic_velocity(1.13, 8.314, 3475.0, 23.74e-3);
        assert_relative_eq!(c, 1738.4381245765749, epsilon = 1e-6);
    }
}
