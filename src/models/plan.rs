use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category of a scheduled session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
  LongRun,
  Threshold,
  HillTempo,
  Vo2,
  Heat,
  ExtraVo2,
}

/// One dated session in a generated plan.
///
/// `date` stays a structured calendar date until presentation; see
/// [`DisplayRow`] for the formatted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRow {
  pub date: NaiveDate,
  pub session: String,
  pub week: u32,
  pub kind: SessionKind,
}

/// Presentation form consumed by preview and export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
  pub date: String,
  pub session: String,
}

/// Weekly volume annotation from the volume ramp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekTarget {
  pub week: u32,
  pub week_start: NaiveDate,
  pub target_hours: f64,
  pub deload: bool,
}

/// Row with intensity guidance, used in the full report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
  pub date: String,
  pub week: u32,
  pub kind: SessionKind,
  pub session: String,
  pub hr_range: Option<String>,
  pub rpe: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
  pub total_weeks: u32,
  pub rows: Vec<ReportRow>,
  pub weekly_targets: Vec<WeekTarget>,
}
