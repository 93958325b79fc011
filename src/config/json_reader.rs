// File to read and treat the data in the .json configuration file

use serde::{Deserialize, Serialize};

/// Raw configuration as written in the .json file. Inputs are kept in the
/// convenient units used around the test stand; conversion to SI happens in
/// `Configuration::from_json_config`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JsonConfig {
    pub gamma: f64,                    // [-]
    pub gas_constant: f64,             // [J/(kg.K)]
    pub std_temperature: Option<f64>,  // [K] - defaults to 273.15
    pub std_pressure: Option<f64>,     // [Pa] - defaults to 101325
    pub tank_volume: f64,              // [litre]
    pub initial_pressure: f64,         // [bar]
    pub initial_temperature: f64,      // [degC]
    pub outlet_pressure: f64,          // [bar]
    pub of_ratio: f64,                 // [-]
    pub propellant_mass_flow: f64,     // [kg/s]
    pub fuel_density: f64,             // [kg/m³]
    pub ox_density: f64,               // [kg/m³]
    pub propellant_mass: f64,          // [kg]
    pub ox_pressure_start: f64,        // [bar]
    pub ox_pressure_end: f64,          // [bar]
    pub time_step: f64,                // [s]
    pub recovery_factor: Option<f64>,  // [-] - regulator pressure recovery, defaults to 1.0
}

pub fn read_json(file_name: &str) -> Result<JsonConfig, String> {
    let json_file = std::fs::read_to_string(file_name)
        .map_err(|err| format!("unable to read '{}': {}", file_name, err))?;
    let config: JsonConfig = serde_json::from_str(&json_file)
        .map_err(|err| format!("unable to parse '{}': {}", file_name, err))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_complete_file() {
        let raw = r#"{
            "gamma": 1.4,
            "gas_constant": 296.8,
            "tank_volume": 2.0,
            "initial_pressure": 300.0,
            "initial_temperature": 20.0,
            "outlet_pressure": 50.0,
            "of_ratio": 4.0,
            "propellant_mass_flow": 1.3,
            "fuel_density": 786.0,
            "ox_density": 800.0,
            "propellant_mass": 8.0,
            "ox_pressure_start": 40.0,
            "ox_pressure_end": 27.0,
            "time_step": 0.01
        }"#;
        let config: JsonConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.gamma, 1.4);
        assert_eq!(config.tank_volume, 2.0);
        assert!(config.std_temperature.is_none());
        assert!(config.recovery_factor.is_none());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_json("no_such_config.json").unwrap_err();
        assert!(err.contains("no_such_config.json"));
    }
}
