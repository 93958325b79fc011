use crate::config::config::Configuration;
use crate::core::grid::TimeGrid;
use crate::numerics::quadrature;
use crate::tank::blowdown::{flow_is_cut, GasStateSeries};
use ndarray::prelude::*;

/// Pressurant mass bookkeeping derived from the blowdown trajectory.
#[derive(Debug, Clone)]
pub struct MassBudget {
    pub mass_flow: Array1<f64>,    // [kg/s]
    pub std_flow_lpm: Array1<f64>, // [standard L/min]
    pub tank_mass: Array1<f64>,    // [kg]
}

impl MassBudget {
    pub fn len(&self) -> usize {
        self.mass_flow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mass_flow.is_empty()
    }
}

/// Derives the delivered mass flow, its standard-condition equivalent and the
/// remaining tank mass.
///
/// The mass flow follows the ideal-gas relation `mdot = Pout/(R*T)*Vdot` and is
/// clamped to exactly zero wherever `flow_is_cut` holds for the sample, the
/// same predicate the blowdown integrator's rate function uses. The remaining
/// mass is `m0` minus the cumulative trapezoidal integral of the mass flow, so
/// it is non-increasing as long as the demand is non-negative.
pub fn compute(
    config: &Configuration,
    grid: &TimeGrid,
    states: &GasStateSeries,
    demand: &Array1<f64>,
) -> Result<MassBudget, String> {
    if states.len() != grid.len() || demand.len() != grid.len() {
        return Err(format!(
            "mass accounting needs series on the integration grid: got {} state and {} demand samples for a {}-sample grid",
            states.len(),
            demand.len(),
            grid.len()
        ));
    }

    let mut mass_flow = Array1::<f64>::zeros(grid.len());
    for i in 0..grid.len() {
        if flow_is_cut(states.pressure[i], config.outlet_pressure) {
            continue;
        }
        mass_flow[i] =
            config.outlet_pressure / (config.gas_constant * states.temperature[i]) * demand[i];
    }

    // standard-condition volumetric equivalent, reported in L/min
    let std_flow_lpm = mass_flow
        .mapv(|mdot| mdot * config.gas_constant * config.std_temperature / config.std_pressure)
        * (1000.0 * 60.0);

    let spent = quadrature::cumulative_trapezoid(&mass_flow, grid.step());
    let tank_mass = spent.mapv(|s| config.initial_mass() - s);

    Ok(MassBudget {
        mass_flow,
        std_flow_lpm,
        tank_mass,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::VaporPressure;
    use crate::flow::demand::DemandFlowModel;
    use crate::flow::profile::LinearVaporPressure;
    use crate::tank::blowdown::BlowdownIntegrator;
    use approx::assert_relative_eq;

    fn nominal_budget(config: &Configuration) -> (TimeGrid, GasStateSeries, MassBudget) {
        let grid = TimeGrid::new(config.burn_duration(), config.time_step).unwrap();
        let ox = LinearVaporPressure::from_config(config)
            .unwrap()
            .sample(&grid);
        let demand = DemandFlowModel::new(config).evaluate(&ox);
        let states = BlowdownIntegrator::new(config, &grid, &demand)
            .unwrap()
            .integrate()
            .unwrap();
        let budget = compute(config, &grid, &states, &demand).unwrap();
        (grid, states, budget)
    }

    #[test]
    fn starts_from_the_fill_mass() {
        let config = Configuration::default_nitrogen();
        let (_, _, budget) = nominal_budget(&config);
        assert_relative_eq!(
            budget.tank_mass[0],
            config.initial_mass(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn tank_mass_never_increases() {
        let config = Configuration::default_nitrogen();
        let (_, _, budget) = nominal_budget(&config);
        for i in 1..budget.len() {
            assert!(budget.tank_mass[i] <= budget.tank_mass[i - 1]);
        }
        assert!(budget.tank_mass[budget.len() - 1] > 0.0);
    }

    #[test]
    fn clamp_agrees_with_the_integrator_predicate() {
        let config = Configuration::default_nitrogen();
        let (_, states, budget) = nominal_budget(&config);
        for i in 0..budget.len() {
            let cut = flow_is_cut(states.pressure[i], config.outlet_pressure);
            assert_eq!(cut, budget.mass_flow[i] == 0.0);
        }
    }

    #[test]
    fn mass_flow_matches_the_ideal_gas_relation() {
        let config = Configuration::default_nitrogen();
        let grid = TimeGrid::new(config.burn_duration(), config.time_step).unwrap();
        let ox = LinearVaporPressure::from_config(&config)
            .unwrap()
            .sample(&grid);
        let demand = DemandFlowModel::new(&config).evaluate(&ox);
        let states = BlowdownIntegrator::new(&config, &grid, &demand)
            .unwrap()
            .integrate()
            .unwrap();
        let budget = compute(&config, &grid, &states, &demand).unwrap();
        let i = grid.len() / 2;
        let expected =
            config.outlet_pressure / (config.gas_constant * states.temperature[i]) * demand[i];
        assert_relative_eq!(budget.mass_flow[i], expected, max_relative = 1e-12);
        // standard L/min conversion of the same sample
        let lpm = expected * config.gas_constant * config.std_temperature / config.std_pressure
            * 60000.0;
        assert_relative_eq!(budget.std_flow_lpm[i], lpm, max_relative = 1e-12);
    }

    #[test]
    fn zero_flow_after_a_forced_cutoff() {
        // a tank filled only slightly above the set point blows down to it
        let mut config = Configuration::default_nitrogen();
        config.initial_pressure = 51.0e5;
        let (_, states, budget) = nominal_budget(&config);
        let cut_from = states
            .pressure
            .iter()
            .position(|p| flow_is_cut(*p, config.outlet_pressure));
        let cut_from = cut_from.expect("tank should reach the set point in this scenario");
        for i in cut_from..budget.len() {
            assert_eq!(budget.mass_flow[i], 0.0);
        }
        // remaining mass settles once the flow stops
        let settled = budget.tank_mass[budget.len() - 1];
        assert_relative_eq!(budget.tank_mass[cut_from], settled, max_relative = 1e-12);
    }

    #[test]
    fn misaligned_series_are_rejected() {
        let config = Configuration::default_nitrogen();
        let (grid, states, _) = nominal_budget(&config);
        let short_demand = Array::from_elem(grid.len() - 1, 5.0e-4);
        assert!(compute(&config, &grid, &states, &short_demand).is_err());
    }
}
