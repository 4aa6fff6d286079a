//! WACC x terminal-growth sensitivity grid for one scenario
//!
//! Outputs a CSV matrix with growth rates as columns; invalid
//! Gordon-Growth cells are written as N/A.

use anyhow::Context;
use clap::Parser;

use valuation_engine::{ScenarioId, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(name = "sensitivity", about = "Enterprise-value sensitivity grid")]
struct Args {
    /// Scenario to value: min, downside, base, upside, max
    #[arg(short, long, default_value = "base")]
    scenario: String,

    /// First projection year
    #[arg(long, default_value_t = 2026)]
    base_year: i32,

    /// WACC range start
    #[arg(long, default_value_t = 0.08)]
    wacc_from: f64,

    /// WACC range end (inclusive)
    #[arg(long, default_value_t = 0.16)]
    wacc_to: f64,

    /// Terminal growth range start
    #[arg(long, default_value_t = 0.00)]
    growth_from: f64,

    /// Terminal growth range end (inclusive)
    #[arg(long, default_value_t = 0.04)]
    growth_to: f64,

    /// Step size for both axes
    #[arg(long, default_value_t = 0.01)]
    step: f64,

    /// CSV output path
    #[arg(short, long, default_value = "sensitivity_grid.csv")]
    output: String,
}

fn range(from: f64, to: f64, step: f64) -> Vec<f64> {
    let mut values = Vec::new();
    let mut v = from;
    while v <= to + 1e-12 {
        values.push(v);
        v += step;
    }
    values
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario: ScenarioId = args.scenario.parse()?;
    let waccs = range(args.wacc_from, args.wacc_to, args.step);
    let growths = range(args.growth_from, args.growth_to, args.step);

    println!(
        "Sensitivity grid: {} ({} WACC x {} growth cells)",
        scenario,
        waccs.len(),
        growths.len()
    );

    let runner = ScenarioRunner::new(args.base_year);
    let cells = runner.sensitivity(scenario, &waccs, &growths);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output))?;

    let mut header = vec!["wacc".to_string()];
    header.extend(growths.iter().map(|g| format!("g={:.2}%", g * 100.0)));
    writer.write_record(&header)?;

    // Cells arrive in wacc-major order, one row per WACC
    for (i, &wacc) in waccs.iter().enumerate() {
        let mut record = vec![format!("{:.2}%", wacc * 100.0)];
        for j in 0..growths.len() {
            let cell = &cells[i * growths.len() + j];
            record.push(match cell.enterprise_value {
                Some(ev) => format!("{:.0}", ev),
                None => "N/A".to_string(),
            });
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;

    println!("Grid written to {}", args.output);
    Ok(())
}
