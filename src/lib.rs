//! # n2_pressurant_sizer
//!
//! The `n2_pressurant_sizer` crate sizes a nitrogen pressurant tank and its downstream
//! pressure regulator for a liquid-propellant rocket engine test. It integrates the
//! isentropic blowdown of the tank across the engine burn and computes the minimum
//! regulator flow coefficient (Cv) required to meet the propellant feed demand.

mod config;
mod core;
mod flow;
mod numerics;
pub mod report;
mod tank;
mod valve;

// Re-exporting
pub use crate::config::config::Configuration;
pub use crate::config::json_reader::JsonConfig;
pub use crate::core::grid::TimeGrid;
pub use crate::core::simulation::{Simulation, SimulationOutput};
pub use crate::core::traits::VaporPressure;
pub use crate::flow::profile::LinearVaporPressure;
pub use crate::numerics::ode_solvers;

/// Gas state of the pressurant tank at one sample of the time grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasState {
    pub pressure: f64,    // Pa
    pub temperature: f64, // K
    pub density: f64,     // kg/m³
}

impl std::fmt::Display for GasState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pressure: {:.1} [bar]
        temperature: {:.2} [K]
        density: {:.3} [kg/m³]",
            self.pressure / 1e5,
            self.temperature,
            self.density
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_runs_to_completion() {
        let config = Configuration::default_nitrogen();
        let output = Simulation::new(config).unwrap().run().unwrap();
        assert!(output.len() > 0);
        assert!(output.pressure.iter().all(|p| p.is_finite()));
        assert!(output.min_cv.iter().all(|cv| cv.is_finite() && *cv >= 0.0));
    }
}
