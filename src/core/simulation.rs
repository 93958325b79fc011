use crate::config::config::Configuration;
use crate::core::grid::TimeGrid;
use crate::core::traits::VaporPressure;
use crate::flow::demand::DemandFlowModel;
use crate::flow::profile::LinearVaporPressure;
use crate::tank::blowdown::BlowdownIntegrator;
use crate::tank::mass;
use crate::valve::sizing::ValveSizer;
use crate::GasState;
use ndarray::prelude::*;
use std::io::Write;

/// One-shot deterministic blowdown run.
///
/// Owns the configuration and the oxidizer vapor-pressure model and executes
/// the pipeline in dependency order: profile → demand → blowdown → mass
/// bookkeeping → valve sizing. Runs share no state, so parameter sweeps are
/// just independent `Simulation` values.
#[derive(Clone)]
pub struct Simulation {
    config: Configuration,
    vapor_pressure: Box<dyn VaporPressure>,
}

impl Simulation {
    /// Creates a run with the linear empirical nitrous profile from the
    /// configuration. Fails fast on an invalid configuration.
    pub fn new(config: Configuration) -> Result<Simulation, String> {
        config.validate()?;
        let vapor_pressure = Box::new(LinearVaporPressure::from_config(&config)?);
        Ok(Simulation {
            config,
            vapor_pressure,
        })
    }

    /// Replaces the empirical oxidizer model, e.g. with a curve fitted to a
    /// different test campaign.
    pub fn with_vapor_pressure(mut self, model: Box<dyn VaporPressure>) -> Simulation {
        self.vapor_pressure = model;
        self
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn run(&self) -> Result<SimulationOutput, String> {
        let grid = TimeGrid::new(self.config.burn_duration(), self.config.time_step)
            .map_err(|err| format!("time grid: {}", err))?;

        let ox_pressure = self.vapor_pressure.sample(&grid);
        let demand_flow = DemandFlowModel::new(&self.config).evaluate(&ox_pressure);

        let states = BlowdownIntegrator::new(&self.config, &grid, &demand_flow)?
            .integrate()
            .map_err(|err| format!("blowdown stage: {}", err))?;

        let budget = mass::compute(&self.config, &grid, &states, &demand_flow)
            .map_err(|err| format!("mass accounting stage: {}", err))?;

        let sizer = ValveSizer::new(self.config.recovery_factor)?;
        let min_cv = sizer
            .min_cv_series(
                &budget.std_flow_lpm,
                self.config.std_density(),
                &states.temperature,
                &states.pressure,
                self.config.outlet_pressure,
            )
            .map_err(|err| format!("valve sizing stage: {}", err))?;

        Ok(SimulationOutput {
            time: grid.times().clone(),
            ox_pressure,
            demand_flow,
            density: states.density,
            pressure: states.pressure,
            temperature: states.temperature,
            mass_flow: budget.mass_flow,
            std_flow_lpm: budget.std_flow_lpm,
            min_cv,
            tank_mass: budget.tank_mass,
        })
    }
}

/// Time-aligned output bundle of one run, handed to reporting/plotting.
#[derive(Debug, Clone)]
pub struct SimulationOutput {
    pub time: Array1<f64>,         // [s]
    pub ox_pressure: Array1<f64>,  // [Pa]
    pub demand_flow: Array1<f64>,  // [m³/s]
    pub density: Array1<f64>,      // [kg/m³]
    pub pressure: Array1<f64>,     // [Pa]
    pub temperature: Array1<f64>,  // [K]
    pub mass_flow: Array1<f64>,    // [kg/s]
    pub std_flow_lpm: Array1<f64>, // [standard L/min]
    pub min_cv: Array1<f64>,       // [-]
    pub tank_mass: Array1<f64>,    // [kg]
}

impl SimulationOutput {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Tank gas state at sample `i`
    pub fn state(&self, i: usize) -> GasState {
        GasState {
            pressure: self.pressure[i],
            temperature: self.temperature[i],
            density: self.density[i],
        }
    }

    /// Largest minimum Cv over the burn, the figure the regulator is picked by
    pub fn peak_cv(&self) -> f64 {
        self.min_cv.iter().cloned().fold(0.0, f64::max)
    }

    /// Writes the bundle as a tab-separated table with a unit header row.
    pub fn write_to_file(&self, file_name: &str) -> Result<(), String> {
        let mut result: Vec<String> = Vec::new();
        result.push(
            "time [s]\tN2 pressure [bar]\tN2 temperature [K]\tN2 density [kg/m³]\
             \tnitrous pressure [bar]\tvolumetric flow [L/s]\tmass flow [kg/s]\
             \tstd flow [L/min]\tmin Cv [-]\ttank mass [kg]\n"
                .to_string(),
        );
        for i in 0..self.len() {
            result.push(format!(
                "{:.4}\t{:.4}\t{:.3}\t{:.4}\t{:.4}\t{:.5}\t{:.6}\t{:.3}\t{:.6}\t{:.6}\n",
                self.time[i],
                self.pressure[i] / 1e5,
                self.temperature[i],
                self.density[i],
                self.ox_pressure[i] / 1e5,
                self.demand_flow[i] * 1e3,
                self.mass_flow[i],
                self.std_flow_lpm[i],
                self.min_cv[i],
                self.tank_mass[i],
            ));
        }
        let mut file = std::fs::File::create(file_name)
            .map_err(|err| format!("error opening writing file '{}': {}", file_name, err))?;
        write!(file, "{}", result.join(""))
            .map_err(|err| format!("unable to write data to '{}': {}", file_name, err))
    }
}
