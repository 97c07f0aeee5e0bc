use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Enumerated Form Choices
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
  /// Build toward a dated race
  Race,
  /// Evergreen 12-week cycle
  Maintenance,
  /// Evergreen cycle with an extra VO2 session on odd weeks
  MaintenancePlus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseProfile {
  Flat,
  Rolling,
  Hilly,
  Ultra,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaceDistance {
  #[serde(rename = "10k")]
  TenK,
  #[serde(rename = "half")]
  Half,
  #[serde(rename = "marathon")]
  Marathon,
  #[serde(rename = "50k")]
  FiftyK,
  #[serde(rename = "custom")]
  Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatBlock {
  None,
  /// One concentrated block before the race
  Monoblock,
  /// Primer block at the start plus a peak block before the race
  Biphasic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeVsDistance {
  Time,
  Distance,
}

/// ---------------------------------------------------------------------------
/// Plan Inputs
/// ---------------------------------------------------------------------------

/// Athlete inputs as produced by the plan form.
///
/// The form layer owns range checks and enum membership. The generator only
/// re-checks `race_date`, which arrives as raw text.
///
/// Several fields are part of the input contract but are not read by any
/// session rule yet: `vt1`, `vo2max`, `firefighter`, `shift_pattern`,
/// `next_shift_iso`, `strength` and `time_vs_distance`. They are carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInputs {
  pub plan_type: PlanType,
  #[serde(rename = "maxHR")]
  pub max_hr: i64,
  pub course_profile: CourseProfile,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub race_date: Option<String>,
  pub race_distance: RaceDistance,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub custom_distance_km: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub vt1: Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub vo2max: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub current_hours: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub max_hours: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub firefighter: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub shift_pattern: Option<String>,
  #[serde(rename = "nextShiftISO", default, skip_serializing_if = "Option::is_none")]
  pub next_shift_iso: Option<String>,
  pub heat_block: HeatBlock,
  pub strength: bool,
  pub time_vs_distance: TimeVsDistance,
}
