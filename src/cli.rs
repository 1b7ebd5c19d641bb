//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_price_adapter::CsvPriceAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::config_validation::{
    parse_commission_tiers, parse_periods, validate_simulation_config,
};
use crate::domain::error::InvestsimError;
use crate::domain::params::SimulationParams;
use crate::domain::schedule::CommissionSchedule;
use crate::domain::simulation::{self, StrategyResult};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::PriceDataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "investsim", about = "Long-horizon periodic investing simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every configured strategy over the price data
    Simulate {
        #[arg(short, long)]
        config: PathBuf,
        /// Price data directory, overriding [data] prices_dir
        #[arg(short, long)]
        prices: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Restrict single-fund strategies to one series
        #[arg(long)]
        series: Option<String>,
    },
    /// Validate a simulation configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// List available price series
    ListSeries {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        prices: Option<PathBuf>,
    },
    /// Show the date range of a price series
    Info {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        prices: Option<PathBuf>,
        #[arg(long)]
        series: String,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Simulate {
            config,
            prices,
            output,
            series,
        } => run_simulate(&config, prices.as_ref(), output.as_ref(), series.as_deref()),
        Command::Validate { config } => run_validate(&config),
        Command::ListSeries { config, prices } => run_list_series(&config, prices.as_ref()),
        Command::Info {
            config,
            prices,
            series,
        } => run_info(&config, prices.as_ref(), &series),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = InvestsimError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

pub fn build_params(adapter: &dyn ConfigPort) -> Result<SimulationParams, InvestsimError> {
    let tiers = parse_commission_tiers(adapter)?;
    let schedule = CommissionSchedule::new(tiers)?;
    SimulationParams::new(
        schedule,
        adapter.get_double("simulation", "interest_rate", 0.0),
        adapter.get_double("simulation", "monthly_contribution", 0.0),
    )
}

fn resolve_prices_dir(adapter: &dyn ConfigPort, prices_override: Option<&PathBuf>) -> PathBuf {
    match prices_override {
        Some(p) => p.clone(),
        None => PathBuf::from(
            adapter
                .get_string("data", "prices_dir")
                .unwrap_or_else(|| "./prices".to_string()),
        ),
    }
}

fn configured_pair(adapter: &dyn ConfigPort) -> Option<(String, String)> {
    let stable = adapter.get_string("funds", "stable")?;
    let volatile = adapter.get_string("funds", "volatile")?;
    let stable = stable.trim().to_string();
    let volatile = volatile.trim().to_string();
    if stable.is_empty() || volatile.is_empty() {
        return None;
    }
    Some((stable, volatile))
}

fn run_simulate(
    config_path: &PathBuf,
    prices_override: Option<&PathBuf>,
    output_path: Option<&PathBuf>,
    series_filter: Option<&str>,
) -> ExitCode {
    // Stage 1: Load and validate config
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_simulation_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    // Stage 2: Build simulation parameters
    let params = match build_params(&adapter) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let periods = match parse_periods(&adapter) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 3: Resolve price data
    let prices_dir = resolve_prices_dir(&adapter, prices_override);
    let data_port = CsvPriceAdapter::new(prices_dir.clone());

    let series_names: Vec<String> = match series_filter {
        Some(name) => vec![name.to_string()],
        None => match data_port.list_series() {
            Ok(names) => names,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        },
    };

    if series_names.is_empty() {
        eprintln!("error: no price series found in {}", prices_dir.display());
        return ExitCode::from(3);
    }

    eprintln!(
        "Simulating {} series over {} periodic policies...",
        series_names.len(),
        periods.len()
    );

    // Stage 4: Run single-fund strategies per series
    let mut results: Vec<StrategyResult> = Vec::new();
    for name in &series_names {
        let series = match data_port.fetch_series(name) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("warning: skipping {} ({})", name, e);
                continue;
            }
        };

        match simulation::run_series_strategies(name, &series, &periods, &params) {
            Ok(mut r) => results.append(&mut r),
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        }
    }

    if results.is_empty() {
        eprintln!("error: no series with usable data");
        return ExitCode::from(3);
    }

    // Stage 5: Run the two-fund strategies when a pair is configured
    if series_filter.is_none() {
        if let Some((stable_name, volatile_name)) = configured_pair(&adapter) {
            let stable = match data_port.fetch_series(&stable_name) {
                Ok(s) => Some(s),
                Err(e) => {
                    eprintln!("warning: skipping fund pair ({})", e);
                    None
                }
            };
            let volatile = match data_port.fetch_series(&volatile_name) {
                Ok(s) => Some(s),
                Err(e) => {
                    eprintln!("warning: skipping fund pair ({})", e);
                    None
                }
            };

            if let (Some(stable), Some(volatile)) = (stable, volatile) {
                match simulation::run_pair_strategies(
                    &stable_name,
                    &volatile_name,
                    &stable,
                    &volatile,
                    &params,
                ) {
                    Ok(mut r) => results.append(&mut r),
                    Err(e) => {
                        eprintln!("error: {e}");
                        return (&e).into();
                    }
                }
            }
        }
    }

    // Stage 6: Print console summary to stderr, best profit rate first
    results.sort_by(|a, b| b.profit_rate.total_cmp(&a.profit_rate));

    eprintln!("\n=== Strategy Results ===");
    for result in &results {
        eprintln!(
            "{:<30} {:>16.2}  {:>7.2}%",
            result.name,
            result.value,
            result.profit_rate * 100.0
        );
    }

    // Stage 7: Write report
    if let Some(output) = output_path {
        let report = TextReportAdapter::new();
        if let Err(e) = report.write(&results, output) {
            eprintln!("error: failed to write report: {e}");
            return (&e).into();
        }
        eprintln!("\nReport written to: {}", output.display());
    }

    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_simulation_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    match build_params(&adapter) {
        Ok(params) => {
            eprintln!("  interest rate:        {}", params.annual_interest_rate);
            eprintln!("  monthly contribution: {}", params.monthly_contribution);
            eprintln!(
                "  commission tiers:     {}",
                params.schedule.tiers().len()
            );
        }
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    }

    eprintln!("\nConfiguration is valid.");
    ExitCode::SUCCESS
}

fn run_list_series(config_path: &PathBuf, prices_override: Option<&PathBuf>) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let data_port = CsvPriceAdapter::new(resolve_prices_dir(&adapter, prices_override));
    let names = match data_port.list_series() {
        Ok(n) => n,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if names.is_empty() {
        eprintln!("No price series found");
    } else {
        for name in &names {
            println!("{}", name);
        }
        eprintln!("{} series found", names.len());
    }
    ExitCode::SUCCESS
}

fn run_info(config_path: &PathBuf, prices_override: Option<&PathBuf>, series: &str) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let data_port = CsvPriceAdapter::new(resolve_prices_dir(&adapter, prices_override));
    match data_port.series_range(series) {
        Ok(Some((first, last, months))) => {
            println!("{}: {} months, {} to {}", series, months, first, last);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("{}: no data found", series);
            ExitCode::from(3)
        }
        Err(e) => {
            eprintln!("error querying {}: {}", series, e);
            (&e).into()
        }
    }
}
