//! projector: console boundary for the trend projector.
//!
//! Usage:
//!   projector [--chart projection.json]
//!
//! Prints every historical and projected month, then asks for the USD
//! amount saved and the month to exchange it in.

use anyhow::Result;
use bobrate_core::{
    chart::{ChartRenderer, JsonChartRenderer},
    config::ProjectorConfig,
    error::RateError,
    input::{parse_selection, parse_usd_amount},
    projector::{Projection, TrendProjector},
};
use std::env;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let chart_path = args
        .windows(2)
        .find(|w| w[0] == "--chart")
        .map(|w| w[1].as_str());

    let projection = TrendProjector::run(&ProjectorConfig::default())?;
    log::debug!(
        "trend: slope={:.6} intercept={:.6}",
        projection.model.slope,
        projection.model.intercept
    );

    if let Some(path) = chart_path {
        let chart = JsonChartRenderer.render_projection(&projection)?;
        std::fs::write(path, chart)?;
        log::info!("chart written to {path}");
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let usd = parse_usd_amount(&prompt(&mut input, "Enter the amount of dollars saved since 2023: ")?)?;

    print_months(&projection);

    let selection = parse_selection(&prompt(
        &mut input,
        "\nSelect the number of the month in which you want to exchange your dollars: ",
    )?)?;

    match projection.combined.convert(usd, selection) {
        Ok(bolivianos) => {
            let label = &projection.combined.get(selection)?.label;
            println!(
                "\nIf you exchange {usd:.2} USD in {label}, you will receive approximately {bolivianos:.2} BOB."
            );
        }
        Err(RateError::OutOfRange { index, len }) => {
            log::debug!("selection {index} outside 1..={len}");
            println!("Invalid selection.");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

fn print_months(projection: &Projection) {
    println!("\nMonths available for conversion:");
    for (i, point) in projection.combined.points().iter().enumerate() {
        println!("{}. {} - {:.2} BOB/USD", i + 1, point.label, point.rate);
    }
}
