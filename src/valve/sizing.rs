#![allow(non_snake_case)]

use ndarray::prelude::*;

// The sizing formulas are the standard imperial-unit control-valve relations,
// so the SI inputs are converted before use.
const LPM_TO_CFH: f64 = 2.11888; // standard L/min to cubic feet per hour
const AIR_STD_DENSITY: f64 = 1.225; // [kg/m³] - reference air density for relative density
const PA_TO_PSIA: f64 = 14.7 / 1e5;
const CHOKED_DP_FRACTION: f64 = 0.47; // of the absolute inlet pressure
const CHOKED_SIZING_CONST: f64 = 834.0;
const NONCHOKED_SIZING_CONST: f64 = 1360.0;

/// Minimum required flow coefficient (Cv) of the pressure regulator.
///
/// Each sample is sized independently from the demanded standard flow, the gas
/// relative density, the gas temperature and the inlet/outlet absolute
/// pressures. The flow is treated as choked once the pressure drop exceeds
/// 47% of the absolute inlet pressure, after which the downstream pressure no
/// longer enters the formula.
#[derive(Debug, Clone)]
pub struct ValveSizer {
    recovery_factor: f64, // [-] F_L of the regulator
}

impl ValveSizer {
    pub fn new(recovery_factor: f64) -> Result<ValveSizer, String> {
        if recovery_factor <= 0.0 {
            return Err(format!("`recovery_factor` must be greater than zero"));
        }
        Ok(ValveSizer { recovery_factor })
    }

    /// Minimum Cv for one sample.
    ///
    /// `std_flow_lpm` is the standard-condition flow in `[L/min]`,
    /// `gas_std_density` the gas density at standard conditions in `[kg/m³]`,
    /// `temperature` in `[K]` and the absolute pressures in `[Pa]`.
    /// A non-positive inlet pressure or pressure drop is a degenerate sample
    /// and sizes to zero rather than evaluating a square root of a
    /// non-positive number.
    pub fn min_cv(
        &self,
        std_flow_lpm: f64,
        gas_std_density: f64,
        temperature: f64,
        inlet_pressure: f64,
        outlet_pressure: f64,
    ) -> f64 {
        let q = std_flow_lpm * LPM_TO_CFH;
        let SG = gas_std_density / AIR_STD_DENSITY;
        let T_f = (temperature - 273.15) * 9.0 / 5.0 + 32.0;
        let T_rankine = T_f + 460.0;
        let P_i = inlet_pressure * PA_TO_PSIA;
        let P_o = outlet_pressure * PA_TO_PSIA;
        let dp = P_i - P_o;

        if P_i <= 0.0 || dp <= 0.0 {
            return 0.0;
        }

        if dp > CHOKED_DP_FRACTION * P_i {
            // critical (choked) flow through the regulator
            q * (SG * T_rankine).sqrt() / (CHOKED_SIZING_CONST * self.recovery_factor * P_i)
        } else {
            // non-choked flow through the regulator
            q * (SG * T_rankine).sqrt() / (NONCHOKED_SIZING_CONST * (dp * P_o).sqrt())
        }
    }

    /// Minimum Cv at every sample of the blowdown trajectory.
    pub fn min_cv_series(
        &self,
        std_flow_lpm: &Array1<f64>,
        gas_std_density: f64,
        temperature: &Array1<f64>,
        inlet_pressure: &Array1<f64>,
        outlet_pressure: f64,
    ) -> Result<Array1<f64>, String> {
        if std_flow_lpm.len() != temperature.len() || std_flow_lpm.len() != inlet_pressure.len() {
            return Err(format!(
                "valve sizing needs aligned series: got {} flow, {} temperature and {} pressure samples",
                std_flow_lpm.len(),
                temperature.len(),
                inlet_pressure.len()
            ));
        }
        let mut cv = Array1::<f64>::zeros(std_flow_lpm.len());
        for i in 0..cv.len() {
            cv[i] = self.min_cv(
                std_flow_lpm[i],
                gas_std_density,
                temperature[i],
                inlet_pressure[i],
                outlet_pressure,
            );
        }
        Ok(cv)
    }
}
