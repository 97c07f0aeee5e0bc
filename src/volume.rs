//! Weekly volume ramp
//!
//! Linear interpolation of weekly training hours from the athlete's current
//! volume to a peak. Annotates weeks only; session selection does not read it.

use chrono::{Duration, NaiveDate};

use crate::assembler::is_deload_week;
use crate::models::{PlanInputs, PlanType, WeekTarget};

const DEFAULT_CURRENT_HOURS: f64 = 5.0;
const RACE_MAX_FLOOR: f64 = 10.0;
const EVERGREEN_MAX_FLOOR: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeRamp {
  pub current_hours: f64,
  pub max_hours: f64,
}

impl VolumeRamp {
  /// Resolve the ramp bounds, filling in defaults for absent values
  pub fn new(plan_type: PlanType, current_hours: Option<f64>, max_hours: Option<f64>) -> Self {
    let current_hours = current_hours.unwrap_or(DEFAULT_CURRENT_HOURS);
    let floor = match plan_type {
      PlanType::Race => RACE_MAX_FLOOR,
      PlanType::Maintenance | PlanType::MaintenancePlus => EVERGREEN_MAX_FLOOR,
    };
    let max_hours = max_hours.unwrap_or_else(|| (current_hours + 2.0).max(floor));

    Self {
      current_hours,
      max_hours,
    }
  }

  pub fn from_inputs(inputs: &PlanInputs) -> Self {
    Self::new(inputs.plan_type, inputs.current_hours, inputs.max_hours)
  }

  pub fn target_hours(&self, week: u32, total_weeks: u32) -> f64 {
    target_hours(week, total_weeks, self.current_hours, self.max_hours)
  }
}

/// Target hours for `week` on a straight line from `current_hours` (week 0) to
/// `max_hours` (last week). A single-week plan sits at `max_hours`.
pub fn target_hours(week: u32, total_weeks: u32, current_hours: f64, max_hours: f64) -> f64 {
  let t = if total_weeks > 1 {
    week as f64 / (total_weeks - 1) as f64
  } else {
    1.0
  };
  current_hours + (max_hours - current_hours) * t
}

/// Per-week volume targets for the whole plan
pub fn weekly_targets(inputs: &PlanInputs, total_weeks: u32, today: NaiveDate) -> Vec<WeekTarget> {
  let ramp = VolumeRamp::from_inputs(inputs);

  (0..total_weeks)
    .map(|week| WeekTarget {
      week,
      week_start: today + Duration::weeks(week as i64),
      target_hours: ramp.target_hours(week, total_weeks),
      deload: is_deload_week(week),
    })
    .collect()
}
