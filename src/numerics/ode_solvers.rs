//! Solver for scalar ordinary differential equations (ODE)

/// Integrates a scalar ODE over a single time step using 4th order Runge-Kutta
///
/// `y` is the state at time `t` and `f(t, y)` its rate of change
///
/// # Examples
///
/// One step of exponential decay:
/// ```
/// use n2_pressurant_sizer::ode_solvers::rk4_step;
///
/// let decay = |_t: f64, y: f64| -y;
/// let next = rk4_step(decay, 1.0, 0.0, 1e-3);
/// assert!((next - (-1e-3_f64).exp()).abs() < 1e-12);
/// ```
pub fn rk4_step<F>(f: F, y: f64, t: f64, step: f64) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    let tmp = step / 2.0;
    let tmp_2 = tmp + t;
    let k1 = f(t, y);
    let k2 = f(tmp_2, y + tmp * k1);
    let k3 = f(tmp_2, y + tmp * k2);
    let k4 = f(t + step, y + step * k3);
    y + (step / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn exact_for_constant_rate() {
        let next = rk4_step(|_, _| 2.5, 1.0, 0.0, 0.1);
        assert_relative_eq!(next, 1.25, max_relative = 1e-14);
    }

    #[test]
    fn fourth_order_convergence_on_exponential_decay() {
        // integrate dy/dt = -y from 1.0 over [0, 1] with h and h/2
        let decay = |_t: f64, y: f64| -y;
        let exact = (-1.0_f64).exp();

        let run = |h: f64| {
            let steps = (1.0 / h).round() as usize;
            let mut y = 1.0;
            for i in 0..steps {
                y = rk4_step(decay, y, i as f64 * h, h);
            }
            y
        };

        let err_h = (run(0.1) - exact).abs();
        let err_h2 = (run(0.05) - exact).abs();
        let ratio = err_h / err_h2;
        assert!(
            ratio > 12.0 && ratio < 20.0,
            "expected ~16x error reduction, got {}",
            ratio
        );
    }
}
