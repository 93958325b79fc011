//! Gnuplot charts of a finished run. Consumes the output bundle only; the
//! compute stage never depends on anything in here.

use crate::core::simulation::SimulationOutput;
use gnuplot::{AxesCommon, Caption, Figure};
use ndarray::prelude::*;

fn single_line(time: &Array1<f64>, values: &Array1<f64>, y_label: &str) {
    let mut fg = Figure::new();
    fg.axes2d()
        .set_x_label("Time [s]", &[])
        .set_y_label(y_label, &[])
        .lines(time.iter(), values.iter(), &[]);
    fg.show();
}

/// Renders the full chart set of a run, one gnuplot window per quantity.
pub fn plot_all(output: &SimulationOutput) {
    // tank and nitrous pressures share one chart
    let tank_bar = output.pressure.mapv(|p| p / 1e5);
    let ox_bar = output.ox_pressure.mapv(|p| p / 1e5);
    let mut fg = Figure::new();
    fg.axes2d()
        .set_x_label("Time [s]", &[])
        .set_y_label("Tank Pressure [bar]", &[])
        .lines(output.time.iter(), tank_bar.iter(), &[Caption("N2 Tank")])
        .lines(
            output.time.iter(),
            ox_bar.iter(),
            &[Caption("Nitrous Vapour")],
        );
    fg.show();

    single_line(
        &output.time,
        &output.temperature.mapv(|t| t - 273.15),
        "N2 Temperature [degC]",
    );
    single_line(&output.time, &output.mass_flow, "N2 Mass Flow Rate [kg/s]");
    single_line(&output.time, &output.tank_mass, "Mass of N2 in Tank [kg]");
    single_line(
        &output.time,
        &output.demand_flow.mapv(|v| v * 1e3),
        "Volumetric N2 Flow Rate [L/s]",
    );
    single_line(
        &output.time,
        &output.std_flow_lpm,
        "Standard N2 Flow Rate [L/min]",
    );
    single_line(&output.time, &output.min_cv, "Minimum Required CV");
}
