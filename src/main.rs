use ansi_term::Style;
use n2_pressurant_sizer as n2;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config_path = args.iter().find(|a| !a.starts_with("--"));

    let config = match config_path {
        Some(path) => match n2::Configuration::from_json(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error reading configuration:\n {}", err);
                std::process::exit(1)
            }
        },
        None => n2::Configuration::default_nitrogen(),
    };

    let simulation = match n2::Simulation::new(config) {
        Ok(simulation) => simulation,
        Err(err) => {
            eprintln!("Invalid configuration:\n {}", err);
            std::process::exit(1)
        }
    };

    let output = match simulation.run() {
        Ok(output) => output,
        Err(err) => {
            eprintln!("Simulation failed:\n {}", err);
            std::process::exit(1)
        }
    };

    output
        .write_to_file("results.txt")
        .unwrap_or_else(|err| eprintln!("{}", err));

    let config = simulation.config();
    let last = output.len() - 1;
    println!("{}", Style::new().bold().paint("N2 tank and regulator sizing"));
    println!(" burn duration: {:.3} [s] over {} samples", config.burn_duration(), output.len());
    println!(" initial N2 mass: {:.4} [kg]", config.initial_mass());
    println!(" N2 mass used: {:.4} [kg]", config.initial_mass() - output.tank_mass[last]);
    println!(" final tank state:\n        {}", output.state(last));
    println!(" minimum regulator Cv to hold the demand: {:.4}", output.peak_cv());

    if output.pressure[last] <= config.outlet_pressure {
        println!(
            "{}",
            Style::new().bold().paint(
                "WARNING: tank pressure fell to the regulator set point before burnout; \
                 the tank cannot feed the full burn"
            )
        );
    }

    if args.iter().any(|a| a == "--plot") {
        n2::report::plots::plot_all(&output);
    }
}
