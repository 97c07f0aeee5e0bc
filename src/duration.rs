//! Plan length in weeks
//!
//! Race plans run until race day with a four-week floor. Evergreen plans are a
//! fixed twelve weeks.

use chrono::{DateTime, NaiveDate};

use crate::models::PlanType;
use crate::planner::PlanError;

pub const MIN_WEEKS: u32 = 4;
pub const EVERGREEN_WEEKS: u32 = 12;
/// Longest race build accepted (two years)
pub const MAX_WEEKS: u32 = 104;

/// Parse a raw form date.
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (date part kept). Blank text
/// counts as absent.
pub fn parse_race_date(raw: Option<&str>) -> Result<Option<NaiveDate>, PlanError> {
  let text = match raw.map(str::trim) {
    Some(t) if !t.is_empty() => t,
    _ => return Ok(None),
  };

  if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
    return Ok(Some(date));
  }

  DateTime::parse_from_rfc3339(text)
    .map(|dt| Some(dt.date_naive()))
    .map_err(|_| PlanError::InvalidDate {
      field: "raceDate",
      value: text.to_string(),
    })
}

/// Number of weeks in the plan.
///
/// A missing or past race date is not an error: the day difference goes to
/// zero or below and the floor applies.
pub fn compute_weeks(plan_type: PlanType, race_date: Option<NaiveDate>, today: NaiveDate) -> u32 {
  match plan_type {
    PlanType::Race => {
      let days_until = (race_date.unwrap_or(today) - today).num_days();
      // ceil(days / 7) for a positive divisor
      let weeks = (days_until + 6).div_euclid(7);
      weeks.clamp(MIN_WEEKS as i64, u32::MAX as i64) as u32
    }
    PlanType::Maintenance | PlanType::MaintenancePlus => EVERGREEN_WEEKS,
  }
}
