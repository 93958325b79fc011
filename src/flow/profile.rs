use crate::config::config::Configuration;
use crate::core::traits::VaporPressure;

/// Linear interpolation of the nitrous vapor pressure between its measured
/// start and end values across the burn. Times past `duration` extrapolate the
/// same line, which keeps the partial last grid step on the fitted curve.
#[derive(Debug, Clone)]
pub struct LinearVaporPressure {
    start_pressure: f64, // [Pa]
    end_pressure: f64,   // [Pa]
    duration: f64,       // [s]
}

impl LinearVaporPressure {
    pub fn new(
        start_pressure: f64,
        end_pressure: f64,
        duration: f64,
    ) -> Result<LinearVaporPressure, String> {
        if duration <= 0.0 {
            return Err(format!("`duration` must be greater than zero"));
        }
        Ok(LinearVaporPressure {
            start_pressure,
            end_pressure,
            duration,
        })
    }

    pub fn from_config(config: &Configuration) -> Result<LinearVaporPressure, String> {
        LinearVaporPressure::new(
            config.ox_pressure_start,
            config.ox_pressure_end,
            config.burn_duration(),
        )
    }
}

impl VaporPressure for LinearVaporPressure {
    fn model_name<'a>(&'a self) -> &str {
        "linear"
    }

    fn pressure(&self, t: f64) -> f64 {
        self.start_pressure + t * (self.end_pressure - self.start_pressure) / self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::TimeGrid;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_and_midpoint() {
        let profile = LinearVaporPressure::new(40.0e5, 27.0e5, 6.0).unwrap();
        assert_relative_eq!(profile.pressure(0.0), 40.0e5);
        assert_relative_eq!(profile.pressure(6.0), 27.0e5);
        assert_relative_eq!(profile.pressure(3.0), 33.5e5);
    }

    #[test]
    fn sampling_matches_pointwise_evaluation() {
        let profile = LinearVaporPressure::new(40.0e5, 27.0e5, 1.0).unwrap();
        let grid = TimeGrid::new(1.0, 0.25).unwrap();
        let sampled = profile.sample(&grid);
        assert_eq!(sampled.len(), grid.len());
        for (t, p) in grid.times().iter().zip(sampled.iter()) {
            assert_relative_eq!(*p, profile.pressure(*t));
        }
    }

    #[test]
    fn rejects_non_positive_duration() {
        assert!(LinearVaporPressure::new(40.0e5, 27.0e5, 0.0).is_err());
    }
}
