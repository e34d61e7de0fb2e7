//! Ride-demand forecaster entry point — CLI wiring and config-driven runs.

use std::path::Path;
use std::process;

use ola_forecast::config::ScenarioConfig;
use ola_forecast::io::export::export_csv;
use ola_forecast::session::Session;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    csv_out: Option<String>,
    #[cfg(feature = "tui")]
    tui: bool,
}

fn print_help() {
    eprintln!("ola-forecast — hourly ride-demand forecaster for fixed city zones");
    eprintln!();
    eprintln!("Usage: ola-forecast [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>   Load prediction scenario from TOML config file");
    eprintln!("  --preset <name>     Use a built-in preset (baseline, monsoon_rush, winter_weekend)");
    eprintln!("  --csv-out <path>    Export the 24-hour forecast to CSV");
    #[cfg(feature = "tui")]
    eprintln!("  --tui               Launch the interactive dashboard");
    eprintln!("  --help              Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        csv_out: None,
        #[cfg(feature = "tui")]
        tui: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--csv-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --csv-out requires a path argument");
                    process::exit(1);
                }
                cli.csv_out = Some(args[i].clone());
            }
            #[cfg(feature = "tui")]
            "--tui" => {
                cli.tui = true;
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

    // Load config: --scenario takes priority, then --preset, then baseline default
    let scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::baseline()
    };

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Interactive dashboard takes over the terminal when requested
    #[cfg(feature = "tui")]
    if cli.tui {
        ola_forecast::tui::run(&scenario);
        return;
    }

    // One-shot run: build the request, predict, print, export
    let request = match scenario.build() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    println!(
        "24-hour ride forecast for {} from {} {}",
        request.zone,
        request.date_label(),
        request.time_label()
    );

    let mut session = Session::new();
    let prediction = session.predict(request);

    for row in &prediction.series {
        println!("{row}");
    }

    println!("\n{}", prediction.summary);

    // Export CSV if requested
    if let Some(ref path) = cli.csv_out {
        if let Err(e) = export_csv(&prediction.series, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Forecast written to {path}");
    }
}
