//! Plan generation pipeline
//!
//! inputs -> week count -> rule table per week -> chronological sort.
//! Formatting into display rows is a separate last step.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::fmt::Write;
use tracing::{debug, info};

use crate::assembler::assemble;
use crate::clock::Clock;
use crate::duration::{compute_weeks, parse_race_date, MAX_WEEKS};
use crate::models::{DisplayRow, PlanInputs, PlanReport, PlanRow, ReportRow};
use crate::sorter::sort_chronologically;
use crate::volume::weekly_targets;
use crate::zones::{hr_target, rpe};

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
  #[error("Invalid date in {field}: {value:?}")]
  InvalidDate { field: &'static str, value: String },

  #[error("Race date {race_date} is more than {max_weeks} weeks away")]
  RaceTooFar { race_date: NaiveDate, max_weeks: u32 },

  #[error("A {weeks}-week plan starting {start} runs past the last supported date")]
  DateOutOfRange { start: NaiveDate, weeks: u32 },

  #[error("Date format {0:?} cannot render a calendar date")]
  InvalidDateFormat(String),
}

impl Serialize for PlanError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Generation
/// ---------------------------------------------------------------------------

/// Week count for these inputs as of `today`.
///
/// Every date the plan touches lies in `today..today + 7 * weeks`; that range
/// is checked here so assembly can use plain date arithmetic.
pub fn plan_weeks(inputs: &PlanInputs, today: NaiveDate) -> Result<u32, PlanError> {
  let race_date = parse_race_date(inputs.race_date.as_deref())?;
  let weeks = compute_weeks(inputs.plan_type, race_date, today);

  if weeks > MAX_WEEKS {
    if let Some(race_date) = race_date {
      return Err(PlanError::RaceTooFar {
        race_date,
        max_weeks: MAX_WEEKS,
      });
    }
  }

  today
    .checked_add_days(Days::new(7 * weeks as u64))
    .ok_or(PlanError::DateOutOfRange { start: today, weeks })?;

  Ok(weeks)
}

/// Dated sessions for the whole plan, sorted by date
pub fn generate_plan_on(inputs: &PlanInputs, today: NaiveDate) -> Result<Vec<PlanRow>, PlanError> {
  let total_weeks = plan_weeks(inputs, today)?;
  Ok(sorted_rows(inputs, total_weeks, today))
}

fn sorted_rows(inputs: &PlanInputs, total_weeks: u32, today: NaiveDate) -> Vec<PlanRow> {
  debug!(
    "Plan {:?} from {}: {} weeks",
    inputs.plan_type, today, total_weeks
  );

  let rows = sort_chronologically(assemble(inputs, total_weeks, today));
  info!("Generated {} sessions over {} weeks", rows.len(), total_weeks);
  rows
}

pub fn generate_plan(inputs: &PlanInputs, clock: &dyn Clock) -> Result<Vec<PlanRow>, PlanError> {
  generate_plan_on(inputs, clock.today())
}

/// Full report: rows with intensity guidance plus weekly volume targets
pub fn build_report(
  inputs: &PlanInputs,
  clock: &dyn Clock,
  date_format: &str,
) -> Result<PlanReport, PlanError> {
  let today = clock.today();
  let total_weeks = plan_weeks(inputs, today)?;

  let rows = sorted_rows(inputs, total_weeks, today)
    .into_iter()
    .map(|row| {
      Ok(ReportRow {
        date: format_date(row.date, date_format)?,
        week: row.week,
        kind: row.kind,
        hr_range: hr_target(row.kind, inputs.max_hr).map(|t| t.to_display()),
        rpe: rpe(row.kind).to_string(),
        session: row.session,
      })
    })
    .collect::<Result<Vec<_>, PlanError>>()?;

  Ok(PlanReport {
    total_weeks,
    rows,
    weekly_targets: weekly_targets(inputs, total_weeks, today),
  })
}

/// ---------------------------------------------------------------------------
/// Presentation
/// ---------------------------------------------------------------------------

/// Render a date with a chrono strftime pattern.
///
/// Time and zone specifiers (`%H`, `%z`, `%s`) have nothing to render for a
/// bare date and come back as `InvalidDateFormat`.
pub fn format_date(date: NaiveDate, date_format: &str) -> Result<String, PlanError> {
  let mut out = String::new();
  write!(out, "{}", date.format(date_format))
    .map_err(|_| PlanError::InvalidDateFormat(date_format.to_string()))?;
  Ok(out)
}

/// Format structured rows for preview/export
pub fn format_rows(rows: &[PlanRow], date_format: &str) -> Result<Vec<DisplayRow>, PlanError> {
  rows
    .iter()
    .map(|row| {
      Ok(DisplayRow {
        date: format_date(row.date, date_format)?,
        session: row.session.clone(),
      })
    })
    .collect()
}
