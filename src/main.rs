//! Valuation Engine CLI
//!
//! Runs a scenario valuation, prints the yearly statement, and exports
//! the projection table to CSV (optionally the full result to JSON).

use anyhow::Context;
use clap::Parser;

use valuation_engine::{
    dcf::{DcfEngine, DcfResult},
    projection::ProjectionSummary,
    AdoptionModel, Assumptions, ProjectionBuilder, ScenarioId, ScenarioRunner,
};

#[derive(Parser, Debug)]
#[command(name = "valuation_engine", about = "Scenario-driven DCF valuation")]
struct Args {
    /// Scenario to value: min, downside, base, upside, max
    #[arg(short, long, default_value = "base")]
    scenario: String,

    /// Projection horizon in years (defaults to the corporate horizon)
    #[arg(long)]
    horizon: Option<u32>,

    /// First projection year
    #[arg(long, default_value_t = 2026)]
    base_year: i32,

    /// CSV output path for the yearly projection table
    #[arg(short, long, default_value = "projection_output.csv")]
    output: String,

    /// Also dump the full DCF result as JSON to this path
    #[arg(long)]
    json: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario: ScenarioId = args.scenario.parse()?;
    let assumptions = Assumptions::default_planning();
    let horizon = args.horizon.unwrap_or(assumptions.corporate.horizon_years);

    println!("Valuation Engine v0.1.0");
    println!("=======================\n");
    println!("Scenario: {}", scenario);
    println!("Base year: {}", args.base_year);
    println!("Horizon: {} years", horizon);
    println!("WACC: {:.2}%", assumptions.corporate.wacc * 100.0);
    println!();

    let engine = DcfEngine::new(ProjectionBuilder::new(
        AdoptionModel::new(),
        assumptions.clone(),
        args.base_year,
    ));
    let result = engine.value_over(scenario, horizon)?;

    print_statement(&result);
    write_csv(&args.output, &result)
        .with_context(|| format!("writing projection table to {}", args.output))?;
    println!("\nProjection table written to: {}", args.output);

    if let Some(json_path) = &args.json {
        let file = std::fs::File::create(json_path)
            .with_context(|| format!("creating {}", json_path))?;
        serde_json::to_writer_pretty(file, &result)?;
        println!("Full DCF result written to: {}", json_path);
    }

    let summary = ProjectionSummary::from_rows(&result.yearly_projections);
    println!("\nHorizon totals:");
    println!("  Units:    {:>15.0}", summary.total_units);
    println!("  Revenue:  ${:>15.0}", summary.total_revenue);
    println!("  EBITDA:   ${:>15.0}", summary.total_ebitda);
    println!("  FCF:      ${:>15.0}", summary.total_free_cash_flow);

    println!("\nValuation ({}):", scenario);
    println!("  PV of cash flows:     ${:>15.0}", result.pv_of_cash_flows);
    println!("  Terminal value:       ${:>15.0}", result.terminal_value);
    println!("  PV of terminal value: ${:>15.0}", result.pv_of_terminal_value);
    println!("  Enterprise value:     ${:>15.0}", result.enterprise_value);

    let initial = assumptions.capital.initial_investment;
    match result.payback_years(initial) {
        Some(years) => println!("  Payback: {:.2} years", years),
        None => println!("  Payback: not reached within the horizon"),
    }
    match result.discounted_payback_years(initial, assumptions.corporate.wacc)? {
        Some(years) => println!("  Discounted payback: {:.2} years", years),
        None => println!("  Discounted payback: not reached within the horizon"),
    }

    // All-scenario summary for comparison
    println!("\nEnterprise value by scenario:");
    let runner = ScenarioRunner::with_assumptions(assumptions, args.base_year);
    for (id, dcf) in runner.run_all()? {
        println!("  {:>8}: ${:>15.0}", id.to_string(), dcf.enterprise_value);
    }

    Ok(())
}

fn print_statement(result: &DcfResult) {
    println!(
        "{:>5} {:>10} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14}",
        "Year", "Units", "Revenue", "EBITDA", "Taxes", "Capex", "FCF", "PV"
    );
    println!("{}", "-".repeat(110));
    for row in &result.yearly_projections {
        println!(
            "{:>5} {:>10.0} {:>14.0} {:>14.0} {:>14.0} {:>14.0} {:>14.0} {:>14.0}",
            row.year,
            row.units,
            row.revenue,
            row.ebitda,
            row.taxes,
            row.capex,
            row.free_cash_flow,
            row.present_value,
        );
    }
}

fn write_csv(path: &str, result: &DcfResult) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "Year",
        "Units",
        "Revenue",
        "COGS",
        "GrossProfit",
        "Marketing",
        "GnA",
        "EBITDA",
        "Depreciation",
        "Taxes",
        "Capex",
        "WorkingCapitalChange",
        "FreeCashFlow",
        "DiscountFactor",
        "PresentValue",
        "CumulativeFCF",
        "CumulativePV",
    ])?;
    for row in &result.yearly_projections {
        writer.write_record([
            row.year.to_string(),
            format!("{:.2}", row.units),
            format!("{:.2}", row.revenue),
            format!("{:.2}", row.cogs),
            format!("{:.2}", row.gross_profit),
            format!("{:.2}", row.marketing),
            format!("{:.2}", row.gna),
            format!("{:.2}", row.ebitda),
            format!("{:.2}", row.depreciation),
            format!("{:.2}", row.taxes),
            format!("{:.2}", row.capex),
            format!("{:.2}", row.working_capital_change),
            format!("{:.2}", row.free_cash_flow),
            format!("{:.8}", row.discount_factor),
            format!("{:.2}", row.present_value),
            format!("{:.2}", row.cumulative_fcf),
            format!("{:.2}", row.cumulative_pv),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
