use crate::config::json_reader::{self, JsonConfig};

/// Immutable simulation configuration in SI units.
///
/// A value is built either from a .json file through [`Configuration::from_json`]
/// or directly as a struct literal, and must pass [`Configuration::validate`]
/// before being handed to a `Simulation`.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub gamma: f64,                // [-] ratio of specific heats
    pub gas_constant: f64,         // [J/(kg.K)]
    pub std_temperature: f64,      // [K]
    pub std_pressure: f64,         // [Pa]
    pub tank_volume: f64,          // [m³]
    pub initial_pressure: f64,     // [Pa]
    pub initial_temperature: f64,  // [K]
    pub outlet_pressure: f64,      // [Pa] - regulator set point
    pub of_ratio: f64,             // [-] oxidizer-to-fuel mass ratio
    pub propellant_mass_flow: f64, // [kg/s] - total, fuel + oxidizer
    pub fuel_density: f64,         // [kg/m³]
    pub ox_density: f64,           // [kg/m³]
    pub propellant_mass: f64,      // [kg] - total loaded propellant
    pub ox_pressure_start: f64,    // [Pa] - nitrous vapor pressure at ignition
    pub ox_pressure_end: f64,      // [Pa] - nitrous vapor pressure at burnout
    pub time_step: f64,            // [s]
    pub recovery_factor: f64,      // [-] regulator pressure recovery factor
}

impl Configuration {
    /// Reads a configuration file and converts it to SI units.
    pub fn from_json(file_name: &str) -> Result<Configuration, String> {
        let json = json_reader::read_json(file_name)?;
        Configuration::from_json_config(&json)
    }

    pub fn from_json_config(json: &JsonConfig) -> Result<Configuration, String> {
        let config = Configuration {
            gamma: json.gamma,
            gas_constant: json.gas_constant,
            std_temperature: json.std_temperature.unwrap_or(273.15),
            std_pressure: json.std_pressure.unwrap_or(101325.0),
            tank_volume: json.tank_volume * 1e-3,
            initial_pressure: json.initial_pressure * 1e5,
            initial_temperature: json.initial_temperature + 273.15,
            outlet_pressure: json.outlet_pressure * 1e5,
            of_ratio: json.of_ratio,
            propellant_mass_flow: json.propellant_mass_flow,
            fuel_density: json.fuel_density,
            ox_density: json.ox_density,
            propellant_mass: json.propellant_mass,
            ox_pressure_start: json.ox_pressure_start * 1e5,
            ox_pressure_end: json.ox_pressure_end * 1e5,
            time_step: json.time_step,
            recovery_factor: json.recovery_factor.unwrap_or(1.0),
        };
        config.validate()?;
        Ok(config)
    }

    /// Nitrogen-pressurized nitrous/ethanol test configuration: 2 L tank filled
    /// to 300 bar at 20 °C, regulated down to 50 bar, 8 kg of propellant at
    /// 1.3 kg/s with O/F = 4.
    pub fn default_nitrogen() -> Configuration {
        Configuration {
            gamma: 1.4,
            gas_constant: 296.8,
            std_temperature: 273.15,
            std_pressure: 101325.0,
            tank_volume: 2.0e-3,
            initial_pressure: 300.0e5,
            initial_temperature: 293.15,
            outlet_pressure: 50.0e5,
            of_ratio: 4.0,
            propellant_mass_flow: 1.3,
            fuel_density: 786.0,
            ox_density: 800.0,
            propellant_mass: 8.0,
            ox_pressure_start: 40.0e5,
            ox_pressure_end: 27.0e5,
            time_step: 0.01,
            recovery_factor: 1.0,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.tank_volume <= 0.0 {
            return Err(format!("`tank_volume` must be greater than zero"));
        } else if self.time_step <= 0.0 {
            return Err(format!("`time_step` must be greater than zero"));
        } else if self.outlet_pressure <= 0.0 {
            return Err(format!("`outlet_pressure` must be greater than zero"));
        } else if self.gamma <= 1.0 {
            return Err(format!("`gamma` must be greater than one"));
        } else if self.gas_constant <= 0.0 {
            return Err(format!("`gas_constant` must be greater than zero"));
        } else if self.initial_pressure <= 0.0 {
            return Err(format!("`initial_pressure` must be greater than zero"));
        } else if self.initial_temperature <= 0.0 {
            return Err(format!("`initial_temperature` must be greater than zero"));
        } else if self.std_temperature <= 0.0 || self.std_pressure <= 0.0 {
            return Err(format!("`std_temperature` and `std_pressure` must be greater than zero"));
        } else if self.propellant_mass_flow <= 0.0 {
            return Err(format!("`propellant_mass_flow` must be greater than zero"));
        } else if self.propellant_mass <= 0.0 {
            return Err(format!("`propellant_mass` must be greater than zero"));
        } else if self.fuel_density <= 0.0 {
            return Err(format!("`fuel_density` must be greater than zero"));
        } else if self.ox_density <= 0.0 {
            return Err(format!("`ox_density` must be greater than zero"));
        } else if self.of_ratio < 0.0 {
            return Err(format!("`of_ratio` cannot be lower than zero"));
        } else if self.recovery_factor <= 0.0 {
            return Err(format!("`recovery_factor` must be greater than zero"));
        }
        Ok(())
    }

    /// Initial pressurant density, `P0/(R*T0)` [kg/m³]
    pub fn initial_density(&self) -> f64 {
        self.initial_pressure / (self.gas_constant * self.initial_temperature)
    }

    /// Initial pressurant mass in the tank, `P0*V/(R*T0)` [kg]
    pub fn initial_mass(&self) -> f64 {
        self.initial_pressure * self.tank_volume / (self.gas_constant * self.initial_temperature)
    }

    /// Pressurant density at standard conditions [kg/m³]
    pub fn std_density(&self) -> f64 {
        self.std_pressure / (self.gas_constant * self.std_temperature)
    }

    /// Burn duration, total propellant mass over total propellant mass flow [s]
    pub fn burn_duration(&self) -> f64 {
        self.propellant_mass / self.propellant_mass_flow
    }

    pub fn fuel_mass_flow(&self) -> f64 {
        self.propellant_mass_flow / (1.0 + self.of_ratio)
    }

    pub fn ox_mass_flow(&self) -> f64 {
        self.propellant_mass_flow * self.of_ratio / (1.0 + self.of_ratio)
    }

    /// Volumetric fuel feed rate [m³/s]
    pub fn fuel_volume_flow(&self) -> f64 {
        self.fuel_mass_flow() / self.fuel_density
    }

    /// Volumetric oxidizer feed rate [m³/s]
    pub fn ox_volume_flow(&self) -> f64 {
        self.ox_mass_flow() / self.ox_density
    }
}
