//! Lookup-table generator CLI.
//!
//! Runs the full enhancement sweep and writes the precomputed cost table
//! as JSON. The output file is the sole contract with the lookup layer.
//!
//! Usage:
//!   cargo run --release --bin generate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --release --bin generate                    # Full sweep
//!   cargo run --release --bin generate -- --quick         # Smoke test
//!   cargo run --release --bin generate -- --seed 42       # Reproducible

use std::env;
use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use forgecast::build_info;
use forgecast::simulator::{run_sweep, SweepConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let (config, out_path) = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              FORGECAST TABLE GENERATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Build:          {} ({})", build_info::BUILD_COMMIT, build_info::BUILD_DATE);
    println!("Started:        {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    println!("Standard tier:  {} ({} runs/combination)", config.standard, config.standard_iterations);
    println!("Advanced tier:  {} ({} runs/combination)", config.advanced, config.advanced_iterations);
    if let Some(seed) = config.seed {
        println!("Seed:           {}", seed);
    }
    println!("Output:         {}", out_path);
    println!();
    println!("Running sweep...");
    println!();

    let started = Instant::now();
    let summary = run_sweep(&config);
    let elapsed = started.elapsed();

    for failure in &summary.failures {
        eprintln!("  skipped {}: {}", failure.key, failure.error);
    }

    if summary.table.is_empty() {
        eprintln!("No combination produced a result; nothing to write.");
        return ExitCode::FAILURE;
    }

    let json = match serde_json::to_string_pretty(&summary.table) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("Failed to serialize lookup table: {}", err);
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = fs::write(&out_path, &json) {
        eprintln!("Failed to write {}: {}", out_path, err);
        return ExitCode::FAILURE;
    }

    println!("Done in {:.1}s", elapsed.as_secs_f64());
    println!("  Entries:  {}", summary.table.len());
    println!("  Skipped:  {}", summary.failures.len());
    println!("  Seed:     {}", summary.seed);
    println!("  Written:  {} ({:.1} KB)", out_path, json.len() as f64 / 1024.0);

    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> (SweepConfig, String) {
    let mut config = SweepConfig::default();
    let mut out_path = String::from("enhancement_lookup.json");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--iterations" => {
                if i + 1 < args.len() {
                    if let Ok(n) = args[i + 1].parse::<u32>() {
                        config.standard_iterations = n;
                        config.advanced_iterations = n;
                    }
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-o" | "--out" => {
                if i + 1 < args.len() {
                    out_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--standard-only" => {
                config.advanced = false;
            }
            "--advanced-only" => {
                config.standard = false;
            }
            "--quick" => {
                config = SweepConfig {
                    seed: config.seed,
                    standard: config.standard,
                    advanced: config.advanced,
                    ..SweepConfig::quick()
                };
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, out_path)
}

fn print_help() {
    println!("Forgecast Table Generator");
    println!();
    println!("USAGE:");
    println!("    cargo run --release --bin generate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --iterations <N>  Runs per combination for both tiers");
    println!("                          (defaults: 50,000 standard / 10,000 advanced)");
    println!("    -s, --seed <S>        Base random seed for reproducible output");
    println!("    -o, --out <PATH>      Output file (default: enhancement_lookup.json)");
    println!("    --standard-only       Skip the advanced-tier combinations");
    println!("    --advanced-only       Skip the standard-tier combinations");
    println!("    --quick               Small iteration counts for a smoke test");
    println!("    -h, --help            Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --release --bin generate                   # Full sweep");
    println!("    cargo run --release --bin generate -- --seed 42      # Reproducible");
    println!("    cargo run --release --bin generate -- --quick        # Smoke test");
}
