use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use repmax::domain::Exercise;
use repmax::formulas::DEFAULT_ADD_ON;
use repmax::report::{
    MethodRow, PercentTable, ReportInputs, build_percent_tables, build_report, parse_plate_sizes,
};
use repmax::server;

/// One-rep-max helper for the class workout sheet.
#[derive(Parser, Debug)]
#[command(name = "repmax")]
#[command(about = "Estimate a 1RM from a submaximal set and turn training percentages into plate loads")]
#[command(version)]
struct Args {
    /// Exercise to compute for (e.g. bench-press, leg-press).
    /// Can also be set via the REPMAX_EXERCISE environment variable.
    #[arg(short, long, env = "REPMAX_EXERCISE", default_value = "bench-press")]
    exercise: String,

    /// Measured working weight in pounds.
    #[arg(short, long, env = "REPMAX_WEIGHT", default_value_t = 185.0)]
    weight: f64,

    /// Reps performed to max.
    #[arg(short, long, env = "REPMAX_REPS", default_value_t = 3)]
    reps: u32,

    /// Class add-on in pounds (class rule: measured weight + add-on).
    #[arg(short, long, env = "REPMAX_ADD_ON", default_value_t = DEFAULT_ADD_ON)]
    add_on: f64,

    /// Percent of 1RM to display (e.g. 60 = 60%).
    #[arg(short, long, env = "REPMAX_PERCENT", default_value_t = 60.0)]
    percent: f64,

    /// Empty sled weight in pounds (leg press only).
    #[arg(long, env = "REPMAX_SLED")]
    sled: Option<f64>,

    /// Available plate denominations in pounds, heaviest first.
    #[arg(long, env = "REPMAX_PLATES", default_value = "45,25,10,5,2.5")]
    plates: String,

    /// Also print the common-percentages table (60-100%).
    #[arg(short, long)]
    table: bool,

    /// Emit results as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Run the web form instead of printing a one-shot report.
    #[arg(long)]
    serve: bool,

    /// Port number for the web server.
    /// Can also be set via the REPMAX_PORT environment variable.
    #[arg(long, env = "REPMAX_PORT", default_value_t = 8080)]
    port: u16,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    exercise: &'a str,
    report: &'a [MethodRow],
    #[serde(skip_serializing_if = "Option::is_none")]
    tables: Option<&'a [PercentTable]>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    if args.serve {
        let static_dir = find_static_dir()?;
        println!("Static files: {}", static_dir.display());
        server::run_server(args.port, static_dir).await?;
        return Ok(());
    }

    let inputs = resolve_inputs(&args)?;
    let report = build_report(&inputs);
    let tables = args.table.then(|| build_percent_tables(&inputs));

    if args.json {
        let output = JsonOutput {
            exercise: inputs.exercise.id(),
            report: &report,
            tables: tables.as_deref(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&inputs, &report);
        if let Some(tables) = &tables {
            print_tables(tables);
        }
    }

    Ok(())
}

/// Parses and validates the CLI arguments into report inputs.
fn resolve_inputs(args: &Args) -> Result<ReportInputs> {
    let exercise = Exercise::from_str(&args.exercise)
        .with_context(|| format!("unrecognized exercise: {}", args.exercise))?;

    let plate_sizes =
        parse_plate_sizes(&args.plates).context("invalid --plates list")?;

    let inputs = ReportInputs {
        exercise,
        weight_lbs: args.weight,
        reps: args.reps,
        add_on_lbs: args.add_on,
        percent: args.percent,
        sled_weight_lbs: args.sled,
        plate_sizes,
    };
    inputs.validate()?;
    Ok(inputs)
}

/// Prints the per-method results in the one-line-per-method layout.
fn print_report(inputs: &ReportInputs, report: &[MethodRow]) {
    println!();
    println!(
        "=== {} — {:.0} lb x {} reps ===",
        inputs.exercise, inputs.weight_lbs, inputs.reps
    );
    println!();

    for row in report {
        println!(
            "{:10} 1RM {:>4.0} lb | {:.0}% -> {:>4.0} lb | Plates: {}",
            row.method, row.one_rm_lbs, row.percent, row.target_lbs, row.plates
        );
    }
}

/// Prints the common-percentages table for each method.
fn print_tables(tables: &[PercentTable]) {
    for table in tables {
        println!();
        println!(
            "=== Common Percentages — {} (1RM {:.0} lb) ===",
            table.method, table.one_rm_lbs
        );
        for row in &table.rows {
            println!(
                "{:>5.0}%  {:>4.0} lb   {}",
                row.percent, row.target_lbs, row.plates
            );
        }
    }
}

/// Finds the static directory for serving the web form.
fn find_static_dir() -> Result<PathBuf> {
    // Try relative to current working directory
    let cwd_static = PathBuf::from("static");
    if cwd_static.is_dir() {
        return Ok(cwd_static);
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        let exe_static = exe_dir.join("static");
        if exe_static.is_dir() {
            return Ok(exe_static);
        }
    }

    // Default to cwd/static
    Ok(cwd_static)
}
