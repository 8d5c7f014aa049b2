pub const TASK_HELPER: &str = r#"
                                General notes
A task file is a JSON document with up to four sections. Every section is optional,
only the sections present are calculated. Every field inside a section is optional too:
a missing field takes the E-1 design value. Use "Generate template" to get a complete file.

stoichiometry
    fuel: { carbon: %float%, hydrogen: %float% } - atoms per mole of the conventional fuel
          (RP-1: C7.2107 H13.2936)
    mixture_ratio: %float% - mass ratio oxidizer/fuel Km

nozzle
    gamma: %float% - adiabatic index of the combustion products
    gas_constant: %float% - J/(mol*K)
    molar_mass: %float% or null - kg/mol; null or a missing key takes the result of the
                stoichiometry section, or 23.74e-3 when there is no stoichiometry section
    chamber_temperature: %float% - K
    chamber_pressure: %float% - Pa
    exit_pressure: %float% - Pa, must be lower than the chamber pressure
    ambient_pressure: %float% - Pa
    thrust: %float% - N
    g0: %float% - m/s^2

collector
    channel_width_mm, channel_height_mm: %float% - mm
    roughness: %float% - m
    jacket_length: %float% - m
    n_channels: %integer%
    rho_cold, rho_hot: %float% - coolant density at inlet and outlet, kg/m3
    mu_cold: %float% - coolant viscosity at inlet, Pa*s
    mass_flow: %float% - kg/s
    manifold_loss_ratio: %float% - manifold dP as a fraction of channel dP, (0, 1]
    safety_factor: %float% - margin on manifold flow area

walls - list of sections
    name: %string%
    pressure: %float% - Pa
    radius: %float% - m
    segment: { "shape": "Cylindrical" } or { "shape": "Conical", "half_angle_deg": %float% }
    tensile_strength: %float% - Pa, default 500e6
    safety_factor: %float% - default 1.4

Run without the menu:  LREdesign task.json [report.json]
Log level is set by the LRE_LOG environment variable (off, error, warn, info, debug).
"#;
