//! Plan commands invoked by the UI layer
//!
//! Inputs arrive already validated by the form. Failures cross this boundary
//! as plain messages.

use crate::config::PlannerConfig;
use crate::models::{DisplayRow, PlanInputs, PlanReport};
use crate::planner::{build_report, format_rows, generate_plan};

/// Generate the preview/export rows for a form submission
pub fn generate_plan_rows(
  inputs: PlanInputs,
  config: &PlannerConfig,
) -> Result<Vec<DisplayRow>, String> {
  let clock = config.clock();
  let rows = generate_plan(&inputs, clock.as_ref())
    .map_err(|e| format!("Failed to generate plan: {}", e))?;

  format_rows(&rows, &config.date_format).map_err(|e| format!("Failed to format plan: {}", e))
}

/// Generate the full report (intensity guidance and weekly volume targets)
pub fn generate_plan_report(inputs: PlanInputs, config: &PlannerConfig) -> Result<PlanReport, String> {
  let clock = config.clock();
  build_report(&inputs, clock.as_ref(), &config.date_format)
    .map_err(|e| format!("Failed to generate plan: {}", e))
}
