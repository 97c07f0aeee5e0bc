//! Test utilities shared by the unit test modules
//!
//! - Fixed dates
//! - Mock input factories
//! - Helper assertions

use chrono::{Duration, NaiveDate};

use crate::models::{CourseProfile, HeatBlock, PlanInputs, PlanType, RaceDistance, TimeVsDistance};

/// ---------------------------------------------------------------------------
/// Time Helpers
/// ---------------------------------------------------------------------------

/// The "today" every generator test runs against
pub fn fixed_today() -> NaiveDate {
  NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid fixed date")
}

/// ISO date `days` after `fixed_today()`
pub fn iso_days_from_today(days: i64) -> String {
  (fixed_today() + Duration::days(days)).format("%Y-%m-%d").to_string()
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Race plan: 50k on a flat course, no heat block, max HR 180
pub fn mock_race_inputs(days_to_race: i64) -> PlanInputs {
  PlanInputs {
    plan_type: PlanType::Race,
    max_hr: 180,
    course_profile: CourseProfile::Flat,
    race_date: Some(iso_days_from_today(days_to_race)),
    race_distance: RaceDistance::FiftyK,
    custom_distance_km: None,
    vt1: None,
    vo2max: None,
    current_hours: None,
    max_hours: None,
    firefighter: None,
    shift_pattern: None,
    next_shift_iso: None,
    heat_block: HeatBlock::None,
    strength: false,
    time_vs_distance: TimeVsDistance::Time,
  }
}

/// Evergreen plan on rolling terrain
pub fn mock_maintenance_inputs() -> PlanInputs {
  PlanInputs {
    plan_type: PlanType::Maintenance,
    course_profile: CourseProfile::Rolling,
    race_date: None,
    race_distance: RaceDistance::Half,
    ..mock_race_inputs(0)
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff: f64 = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mock_factories_create_valid_data() {
    let race = mock_race_inputs(28);
    assert_eq!(race.plan_type, PlanType::Race);
    assert_eq!(race.race_date.as_deref(), Some("2026-11-14"));

    let maintenance = mock_maintenance_inputs();
    assert_eq!(maintenance.plan_type, PlanType::Maintenance);
    assert!(maintenance.race_date.is_none());
    assert_eq!(maintenance.max_hr, 180);
  }
}
