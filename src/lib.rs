pub mod assembler;
pub mod clock;
pub mod commands;
pub mod config;
pub mod duration;
pub mod models;
pub mod planner;
pub mod sorter;
pub mod volume;
pub mod zones;

#[cfg(test)]
mod test_utils;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{parse_today, validate_date_format, PlannerConfig};
use models::PlanInputs;

pub use clock::{Clock, FixedClock, SystemClock};
pub use models::{DisplayRow, PlanReport, PlanRow};
pub use planner::{build_report, format_rows, generate_plan, PlanError};

/// Command-line arguments for trail-planner
#[derive(Parser, Debug)]
#[command(name = "trail-planner")]
#[command(about = "Generate a dated, periodized running plan from athlete inputs")]
#[command(version)]
struct Args {
  /// JSON file with the plan inputs (stdin when omitted)
  input: Option<PathBuf>,

  /// Anchor the plan on this date (YYYY-MM-DD) instead of today
  #[arg(long, env = "PLANNER_TODAY")]
  today: Option<String>,

  /// strftime pattern for displayed dates
  #[arg(long, env = "PLANNER_DATE_FORMAT")]
  date_format: Option<String>,

  /// Print only date/session rows instead of the full report
  #[arg(long)]
  rows_only: bool,
}

pub fn run() -> Result<()> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "trail_planner_lib=info".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  let args = Args::parse();
  let config = resolve_config(&args)?;

  let raw = match &args.input {
    Some(path) => std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read {}", path.display()))?,
    None => {
      let mut buf = String::new();
      std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read plan inputs from stdin")?;
      buf
    }
  };

  let inputs: PlanInputs = serde_json::from_str(&raw).context("Failed to parse plan inputs")?;
  info!("Generating {:?} plan", inputs.plan_type);

  let output = if args.rows_only {
    let rows = commands::generate_plan_rows(inputs, &config).map_err(anyhow::Error::msg)?;
    serde_json::to_string_pretty(&rows)?
  } else {
    let report = commands::generate_plan_report(inputs, &config).map_err(anyhow::Error::msg)?;
    serde_json::to_string_pretty(&report)?
  };

  println!("{}", output);
  Ok(())
}

fn resolve_config(args: &Args) -> Result<PlannerConfig> {
  let mut config = PlannerConfig::from_env()?;

  if let Some(fmt) = &args.date_format {
    config.date_format = validate_date_format("--date-format", fmt)?;
  }
  if let Some(raw) = &args.today {
    config.today = Some(parse_today("--today", raw)?);
  }

  Ok(config)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn test_flags_fall_back_to_env() {
    temp_env::with_vars(
      [
        (config::TODAY_VAR, Some("2026-03-02")),
        (config::DATE_FORMAT_VAR, Some("%d/%m/%Y")),
      ],
      || {
        let args = Args::try_parse_from(["trail-planner"]).unwrap();
        assert_eq!(args.today.as_deref(), Some("2026-03-02"));
        assert_eq!(args.date_format.as_deref(), Some("%d/%m/%Y"));

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.today, chrono::NaiveDate::from_ymd_opt(2026, 3, 2));
      },
    );
  }

  #[test]
  #[serial]
  fn test_flags_override_env() {
    temp_env::with_vars([(config::TODAY_VAR, Some("2026-03-02"))], || {
      let args = Args::try_parse_from(["trail-planner", "--today", "2026-04-01", "--rows-only"]).unwrap();
      assert_eq!(args.today.as_deref(), Some("2026-04-01"));
      assert!(args.rows_only);
    });
  }

  #[test]
  #[serial]
  fn test_time_pattern_flag_rejected() {
    temp_env::with_vars_unset([config::TODAY_VAR, config::DATE_FORMAT_VAR], || {
      let args = Args::try_parse_from(["trail-planner", "--date-format", "%H:%M"]).unwrap();
      assert!(resolve_config(&args).is_err());
    });
  }
}
