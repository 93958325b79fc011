use crate::core::grid::TimeGrid;
use dyn_clone::DynClone;
use ndarray::prelude::*;

/// Empirical oxidizer tank vapor-pressure model.
///
/// The nitrous pressure seen downstream of the regulator is not modeled from
/// first principles; implementations supply a curve fitted to test data. The
/// default is `LinearVaporPressure`, a straight line between the measured
/// start and end pressures of the burn.
pub trait VaporPressure: DynClone {
    fn model_name<'a>(&'a self) -> &str;
    /// Vapor pressure at time `t` in `[Pa]`
    fn pressure(&self, t: f64) -> f64;
    /// Evaluates the model on every sample of `grid`
    fn sample(&self, grid: &TimeGrid) -> Array1<f64> {
        grid.times().mapv(|t| self.pressure(t))
    }
}

dyn_clone::clone_trait_object!(VaporPressure);
