//! Particle Drift CLI - Run field simulations from JSON configuration.

use std::fs;
use std::path::PathBuf;

use particle_drift::{FieldSimulator, SimulationConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--help" {
        print_usage(&args[0]);
        return;
    }

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    // Load configuration, falling back to the compiled-in defaults
    // (field of 10 cells, 20 steps, 3 particles).
    let mut config = if args.len() > 1 {
        let config_path = PathBuf::from(&args[1]);
        let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
            eprintln!("Error reading config file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str::<SimulationConfig>(&config_str).unwrap_or_else(|e| {
            eprintln!("Error parsing config: {}", e);
            std::process::exit(1);
        })
    } else {
        SimulationConfig::default()
    };

    if let Some(steps) = args.get(2).and_then(|s| s.parse().ok()) {
        config.steps = steps;
    }

    let steps = config.steps;
    let mut simulator = FieldSimulator::new(config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    for k in 0..steps {
        println!("{}", simulator.field().snapshot_line(k));
        let report = simulator.step();
        for index in report.collisions {
            println!("Collision on index {}", index);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [config.json] [steps]", program);
    eprintln!();
    eprintln!("Run a 1D particle field simulation.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  config.json  Path to simulation configuration file (optional)");
    eprintln!("  steps        Number of simulation steps (overrides config)");
    eprintln!();
    eprintln!("Example configuration is printed with the --example flag.");
}

fn print_example_config() {
    let config = SimulationConfig::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
