use ndarray::prelude::*;

/// Fixed-step time discretization shared by every component of one run.
///
/// Samples are `t_i = i*h` for `i = 0..=N` with `N = ceil(tend/h)`, so the
/// grid always covers `[0, tend]` and the last step may be partial. All
/// time-indexed arrays of a run are built on the same grid, which removes the
/// index-rounding mismatches of ad-hoc `t/h` lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    step: f64, // [s]
    tend: f64, // [s]
    times: Array1<f64>,
}

impl TimeGrid {
    pub fn new(tend: f64, step: f64) -> Result<TimeGrid, String> {
        if step <= 0.0 {
            return Err(format!("`step` must be greater than zero"));
        } else if tend <= 0.0 {
            return Err(format!("`tend` must be greater than zero"));
        }
        let n = (tend / step).ceil() as usize;
        let times = Array::from_shape_fn(n + 1, |i| i as f64 * step);
        Ok(TimeGrid { step, tend, times })
    }

    /// Number of samples, `N + 1`
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn tend(&self) -> f64 {
        self.tend
    }

    pub fn times(&self) -> &Array1<f64> {
        &self.times
    }

    /// Index of the grid sample nearest to `t`, clamped to the grid bounds.
    pub fn index_nearest(&self, t: f64) -> usize {
        let i = (t / self.step).round();
        if i <= 0.0 {
            0
        } else {
            (i as usize).min(self.times.len() - 1)
        }
    }
}
