//! Fission Reactor Evaluator - Command Line Entry Point
//!
//! Evaluates one or more reactor layout files and prints their power, heat
//! and cooling.

use clap::{Parser, ValueEnum};
use log::error;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use fission_evaluator_lib::layout::load_layout;
use fission_evaluator_lib::{check, evaluate_many, Evaluation, Grid, Settings};

/// Evaluate fission reactor layouts
#[derive(Parser, Debug)]
#[command(name = "fission-evaluator")]
#[command(about = "Check fission reactor layouts and report power, heat and cooling")]
struct Args {
    /// Layout files (JSON)
    #[arg(required = true)]
    layouts: Vec<PathBuf>,

    /// Settings file (defaults to config/fission_settings.json if present)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Report why an invalid layout was rejected
    #[arg(long)]
    explain: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

/// One line of output
#[derive(Serialize)]
struct Report {
    layout: String,
    #[serde(flatten)]
    evaluation: Evaluation,
    net_heat: f64,
    duty_cycle: f64,
    effective_power: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                error!("Failed to load settings {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::load_or_default(),
    };

    let mut grids: Vec<Grid> = Vec::with_capacity(args.layouts.len());
    for path in &args.layouts {
        match load_layout(path) {
            Ok(grid) => grids.push(grid),
            Err(e) => {
                error!("Failed to load layout {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        }
    }

    let evaluations = evaluate_many(&settings, &grids);

    let reports: Vec<Report> = args
        .layouts
        .iter()
        .zip(grids.iter().zip(evaluations))
        .map(|(path, (grid, evaluation))| Report {
            layout: path.display().to_string(),
            evaluation,
            net_heat: evaluation.net_heat(),
            duty_cycle: evaluation.duty_cycle(),
            effective_power: evaluation.effective_power(),
            reason: match (args.explain, evaluation.valid) {
                (true, false) => check(&settings, grid).err().map(|r| r.to_string()),
                _ => None,
            },
        })
        .collect();

    match args.format {
        Format::Json => match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize report: {}", e);
                return ExitCode::FAILURE;
            }
        },
        Format::Text => {
            for report in &reports {
                print_text(report);
            }
        }
    }

    ExitCode::SUCCESS
}

fn print_text(report: &Report) {
    let evaluation = &report.evaluation;
    if !evaluation.valid {
        match &report.reason {
            Some(reason) => println!("{}: INVALID ({})", report.layout, reason),
            None => println!("{}: INVALID", report.layout),
        }
        return;
    }

    println!("{}: valid", report.layout);
    println!("  power:           {:.2}", evaluation.power);
    println!("  heat:            {:.2}", evaluation.heat);
    println!("  cooling:         {:.2}", evaluation.cooling);
    println!("  net heat:        {:.2}", report.net_heat);
    println!("  duty cycle:      {:.1}%", report.duty_cycle * 100.0);
    println!("  effective power: {:.2}", report.effective_power);
}
