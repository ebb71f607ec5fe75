//! Monitor entry point — CLI wiring and config-driven model construction.

use std::path::Path;
use std::process;

use home_energy_monitor::config::MonitorConfig;
use home_energy_monitor::io::export::{
    export_appliances_csv, export_recommendations_csv, export_usage_csv,
};
use home_energy_monitor::monitor::EnergyMonitor;
use home_energy_monitor::report::MonthlySummary;

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    rate_class: Option<String>,
    seed_override: Option<u64>,
    no_defaults: bool,
    appliances_out: Option<String>,
    usage_out: Option<String>,
    recommendations_out: Option<String>,
}

fn print_help() {
    eprintln!("home-energy-monitor — household appliance energy and cost model");
    eprintln!();
    eprintln!("Usage: home-energy-monitor [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>               Load monitor config from TOML file");
    eprintln!("  --rate-class <name>           Select the active rate class (default: R-1)");
    eprintln!("  --seed <u64>                  Override the usage series seed");
    eprintln!("  --no-defaults                 Start with an empty appliance inventory");
    eprintln!("  --appliances-out <path>       Export appliance inventory to CSV");
    eprintln!("  --usage-out <path>            Export daily usage series to CSV");
    eprintln!("  --recommendations-out <path>  Export recommendation rows to CSV");
    eprintln!("  --help                        Show this help message");
    eprintln!();
    eprintln!("Without --config the built-in baseline configuration is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        rate_class: None,
        seed_override: None,
        no_defaults: false,
        appliances_out: None,
        usage_out: None,
        recommendations_out: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--rate-class" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --rate-class requires a name argument");
                    process::exit(1);
                }
                cli.rate_class = Some(args[i].clone());
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(s) = args[i].parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--no-defaults" => {
                cli.no_defaults = true;
            }
            "--appliances-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --appliances-out requires a path argument");
                    process::exit(1);
                }
                cli.appliances_out = Some(args[i].clone());
            }
            "--usage-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --usage-out requires a path argument");
                    process::exit(1);
                }
                cli.usage_out = Some(args[i].clone());
            }
            "--recommendations-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --recommendations-out requires a path argument");
                    process::exit(1);
                }
                cli.recommendations_out = Some(args[i].clone());
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    let mut config = if let Some(ref path) = cli.config_path {
        match MonitorConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        MonitorConfig::baseline()
    };

    if let Some(seed) = cli.seed_override {
        config.usage_series.seed = seed;
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let mut monitor = if cli.no_defaults {
        EnergyMonitor::new(&config)
    } else {
        match EnergyMonitor::with_defaults(&config) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("error: invalid default appliance: {e}");
                process::exit(1);
            }
        }
    };

    if let Some(ref class) = cli.rate_class {
        monitor.select_rate_class(class.clone());
    }

    // Per-appliance usage rows
    for row in monitor.per_appliance_monthly_kwh() {
        println!("{:<24} {:>10.2} kWh/month", row.name, row.kwh);
    }

    // Headline summary and recommendation report
    let summary = MonthlySummary::from_monitor(&monitor);
    println!("\n{summary}");
    let recommendations = monitor.recommendations();
    println!("\n{recommendations}");

    if let Some(ref path) = cli.appliances_out {
        if let Err(e) = export_appliances_csv(monitor.appliances(), Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Appliance inventory written to {path}");
    }
    if let Some(ref path) = cli.usage_out {
        if let Err(e) = export_usage_csv(monitor.daily_usage_series(), Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Daily usage series written to {path}");
    }
    if let Some(ref path) = cli.recommendations_out {
        if let Err(e) = export_recommendations_csv(&recommendations.entries, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Recommendations written to {path}");
    }
}
