use crate::config::config::Configuration;
use ndarray::prelude::*;

/// Volumetric flow the regulator must deliver to the propellant feed.
///
/// The fuel side takes a fixed rate while the oxidizer side only needs the
/// difference between the regulated pressure and the nitrous vapor pressure
/// made up, so `Vdot(t) = Vdot_fuel + Vdot_ox*(Pout - Pox(t))/Pout`. The
/// correction term can go negative when the vapor pressure sits above the
/// regulator set point; the total demand is not clamped here.
#[derive(Debug, Clone)]
pub struct DemandFlowModel {
    fuel_volume_flow: f64, // [m³/s]
    ox_volume_flow: f64,   // [m³/s]
    outlet_pressure: f64,  // [Pa]
}

impl DemandFlowModel {
    pub fn new(config: &Configuration) -> DemandFlowModel {
        DemandFlowModel {
            fuel_volume_flow: config.fuel_volume_flow(),
            ox_volume_flow: config.ox_volume_flow(),
            outlet_pressure: config.outlet_pressure,
        }
    }

    /// Demand at a single sample given the local oxidizer vapor pressure [m³/s]
    pub fn volume_flow(&self, ox_pressure: f64) -> f64 {
        self.fuel_volume_flow
            + self.ox_volume_flow * (self.outlet_pressure - ox_pressure) / self.outlet_pressure
    }

    /// Demand over a sampled vapor-pressure profile [m³/s]
    pub fn evaluate(&self, ox_pressure: &Array1<f64>) -> Array1<f64> {
        ox_pressure.mapv(|p| self.volume_flow(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn hand_computed_sample() {
        let config = Configuration::default_nitrogen();
        let model = DemandFlowModel::new(&config);
        // at ignition: 0.26/786 + 1.04/800*(50-40)/50
        let expected = 0.26 / 786.0 + 1.04 / 800.0 * 0.2;
        assert_relative_eq!(model.volume_flow(40.0e5), expected, max_relative = 1e-12);
    }

    #[test]
    fn negative_correction_is_not_clamped() {
        let config = Configuration::default_nitrogen();
        let model = DemandFlowModel::new(&config);
        // vapor pressure above the set point reduces the oxidizer term below zero
        let above = model.volume_flow(60.0e5);
        assert!(above < model.volume_flow(40.0e5));
        assert!(above > 0.0);
    }

    #[test]
    fn evaluates_elementwise() {
        let config = Configuration::default_nitrogen();
        let model = DemandFlowModel::new(&config);
        let ox = array![40.0e5, 33.5e5, 27.0e5];
        let demand = model.evaluate(&ox);
        assert_eq!(demand.len(), 3);
        for (p, v) in ox.iter().zip(demand.iter()) {
            assert_relative_eq!(*v, model.volume_flow(*p));
        }
    }
}
