#![allow(non_snake_case)]

use crate::config::config::Configuration;
use crate::core::grid::TimeGrid;
use crate::numerics::ode_solvers as ode;
use crate::GasState;
use ndarray::prelude::*;

/// Shared flow-cutoff predicate: once the tank pressure can no longer exceed
/// the regulator set point, delivery stops. The real regulator would unchoke
/// gradually; cutting the flow to zero is a deliberate simplification. The
/// integrator rate function and the mass bookkeeping must both use this exact
/// predicate so the two cutoffs cannot disagree at boundary samples.
pub fn flow_is_cut(pressure: f64, outlet_pressure: f64) -> bool {
    pressure <= outlet_pressure
}

/// Gas-state trajectory of the pressurant tank over the time grid.
///
/// Built so that `P_i = P0*(rho_i/rho0)^gamma` and `T_i = P_i/(rho_i*R)` hold
/// for every sample.
#[derive(Debug, Clone)]
pub struct GasStateSeries {
    pub density: Array1<f64>,     // [kg/m³]
    pub pressure: Array1<f64>,    // [Pa]
    pub temperature: Array1<f64>, // [K]
}

impl GasStateSeries {
    pub fn len(&self) -> usize {
        self.density.len()
    }

    pub fn is_empty(&self) -> bool {
        self.density.is_empty()
    }

    pub fn state(&self, i: usize) -> GasState {
        GasState {
            pressure: self.pressure[i],
            temperature: self.temperature[i],
            density: self.density[i],
        }
    }
}

/// RK4 integrator for the isentropic tank blowdown ODE
///
/// The tank density obeys `drho/dt = -tau*(rho/rho0)^(1-gamma)` with
/// `tau = Pout*Vdot(t)/(R*T0*V)` while the tank pressure exceeds the regulator
/// set point, and zero flow afterwards. `Vdot` is the precomputed demand array
/// on the same grid the integrator steps over.
///
/// Global truncation error is O(h⁴) where the rate function is smooth; the
/// cutoff at `P = Pout` is a discontinuity and accuracy degrades around that
/// crossing.
pub struct BlowdownIntegrator<'a> {
    config: &'a Configuration,
    grid: &'a TimeGrid,
    demand: &'a Array1<f64>, // [m³/s]
}

impl<'a> BlowdownIntegrator<'a> {
    pub fn new(
        config: &'a Configuration,
        grid: &'a TimeGrid,
        demand: &'a Array1<f64>,
    ) -> Result<BlowdownIntegrator<'a>, String> {
        if demand.len() != grid.len() {
            return Err(format!(
                "demand array has {} samples but the time grid has {}: both must come from the same grid",
                demand.len(),
                grid.len()
            ));
        }
        Ok(BlowdownIntegrator {
            config,
            grid,
            demand,
        })
    }

    /// Rate of change of the tank density at `(t, rho)` [kg/(m³.s)]
    pub fn rate(&self, t: f64, rho: f64) -> f64 {
        let ratio = rho / self.config.initial_density();
        let P = self.config.initial_pressure * ratio.powf(self.config.gamma);
        if flow_is_cut(P, self.config.outlet_pressure) {
            return 0.0;
        }
        let Vdot = self.demand[self.grid.index_nearest(t)];
        let tau = self.config.outlet_pressure * Vdot
            / (self.config.gas_constant * self.config.initial_temperature * self.config.tank_volume);
        -tau * ratio.powf(1.0 - self.config.gamma)
    }

    /// Integrates the blowdown ODE over the whole grid.
    ///
    /// Fails on the first sample whose density comes out non-finite or
    /// non-positive, naming the sample, instead of letting a NaN propagate
    /// through the downstream pipeline.
    pub fn integrate(&self) -> Result<GasStateSeries, String> {
        let n = self.grid.len();
        let times = self.grid.times();
        let mut density = Array1::<f64>::zeros(n);
        density[0] = self.config.initial_density();

        for i in 0..n - 1 {
            let next = ode::rk4_step(
                |t, rho| self.rate(t, rho),
                density[i],
                times[i],
                self.grid.step(),
            );
            if !next.is_finite() || next <= 0.0 {
                return Err(format!(
                    "blowdown integration produced a non-physical density ({}) at sample {} (t = {:.4} s)",
                    next,
                    i + 1,
                    times[i + 1]
                ));
            }
            density[i + 1] = next;
        }

        let rho0 = self.config.initial_density();
        let pressure =
            density.mapv(|rho| self.config.initial_pressure * (rho / rho0).powf(self.config.gamma));
        let temperature = &pressure / &(&density * self.config.gas_constant);

        for (i, (P, T)) in pressure.iter().zip(temperature.iter()).enumerate() {
            if !P.is_finite() || !T.is_finite() {
                return Err(format!(
                    "blowdown integration produced a non-finite gas state at sample {}",
                    i
                ));
            }
        }

        Ok(GasStateSeries {
            density,
            pressure,
            temperature,
        })
    }
}
