//! sim-runner: form boundary for the fluctuation simulator.
//!
//! Usage:
//!   sim-runner --gas-price 3.5 --international-reserves 2.1 --speculation 0.05 \
//!              --scarcity 0.03 --legal-dollar-sale 0.02 --inflation 0.04 \
//!              --political-stability 0.8 [--seed 42] [--chart chart.json]
//!   sim-runner --ipc-mode [--seed 42]

use anyhow::Result;
use bobrate_core::{
    chart::{ChartRenderer, JsonChartRenderer},
    error::RateError,
    factors::{EconomicFactors, FactorField},
    simulator::{FluctuationSimulator, SimulationRun},
};
use std::collections::HashMap;
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Simulate {
        form: HashMap<String, serde_json::Value>,
        #[serde(default)]
        seed: Option<u64>,
    },
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg::<u64>(&args, "--seed");
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let chart_path = args
        .windows(2)
        .find(|w| w[0] == "--chart")
        .map(|w| w[1].clone());

    let simulator = FluctuationSimulator::default();

    if ipc_mode {
        return run_ipc_loop(&simulator, seed);
    }

    let factors = EconomicFactors::from_form(&form_from_args(&args))?;
    let run = simulate(&simulator, &factors, seed);

    print_breakdown(&run);

    if let Some(path) = chart_path {
        let chart = JsonChartRenderer.render_simulation(&run)?;
        std::fs::write(&path, chart)?;
        log::info!("chart written to {path}");
    }

    Ok(())
}

fn simulate(
    simulator: &FluctuationSimulator,
    factors: &EconomicFactors,
    seed: Option<u64>,
) -> SimulationRun {
    match seed {
        Some(seed) => simulator.simulate_seeded(factors, seed),
        None => simulator.simulate_unseeded(factors),
    }
}

/// Collect `--field value` pairs under their form keys.
/// Both `--gas-price` and `--gas_price` (or the legacy alias) are accepted.
fn form_from_args(args: &[String]) -> HashMap<String, String> {
    args.windows(2)
        .filter_map(|w| {
            let name = w[0].strip_prefix("--")?.replace('-', "_");
            let field = FactorField::from_name(&name)?;
            Some((field.key().to_string(), w[1].clone()))
        })
        .collect()
}

fn run_ipc_loop(simulator: &FluctuationSimulator, default_seed: Option<u64>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({
                    "error": { "kind": "invalid_request", "message": e.to_string() }
                });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::Simulate { form, seed } => {
                let response = match EconomicFactors::from_form(&stringify_form(form)) {
                    Ok(factors) => {
                        let run = simulate(simulator, &factors, seed.or(default_seed));
                        serde_json::json!({ "run": run })
                    }
                    Err(e) => error_json(&e),
                };
                writeln!(stdout, "{}", response)?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

/// Form values may arrive as JSON strings or numbers; the core parses text.
fn stringify_form(form: HashMap<String, serde_json::Value>) -> HashMap<String, String> {
    form.into_iter()
        .map(|(k, v)| {
            let text = match v {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (k, text)
        })
        .collect()
}

fn error_json(e: &RateError) -> serde_json::Value {
    serde_json::json!({ "error": { "kind": e.kind(), "message": e.to_string() } })
}

fn print_breakdown(run: &SimulationRun) {
    println!("=== DOLLAR FLUCTUATION SIMULATION ===");
    println!("  run_id:  {}", run.run_id);
    if let Some(seed) = run.seed {
        println!("  seed:    {seed}");
    }
    println!();
    println!(
        "  {:<9} {:>11} {:>9} {:>10} {:>9} {:>9} {:>8} {:>9} {:>9}",
        "Month", "Speculation", "Scarcity", "Legal sale", "Inflation", "Stability", "Gas",
        "Reserves", "Total"
    );
    for step in &run.steps {
        println!(
            "  {:<9} {:>11.4} {:>9.4} {:>10.4} {:>9.4} {:>9.4} {:>8.4} {:>9.4} {:>9.4}",
            step.month,
            step.speculation,
            step.scarcity,
            step.legal_sale,
            step.inflation,
            step.stability,
            step.gas_impact,
            step.reserves_impact,
            step.total
        );
    }

    println!();
    println!("=== RATES (Bs/USD) ===");
    for (informal, official) in run.informal.points.iter().zip(&run.official.points) {
        println!(
            "  {:<9} informal {:>8.2} | official {:>6.2}",
            informal.label, informal.rate, official.rate
        );
    }
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
}
