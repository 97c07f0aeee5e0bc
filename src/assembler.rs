//! Session Assembler
//!
//! Week-by-week rule table. Every rule looks at one week in isolation and
//! emits at most one session. A week's rows are the concatenation of all rule
//! outputs, in rule order.
//!
//! Rule | Day | Condition
//! -----|-----|----------------------------------------------------------
//! long run          | +6 | always
//! midweek quality   | +2 | always
//! VO2 intervals     | +4 | not a deload week
//! heat (monoblock)  | +1 | race plan, final two weeks
//! heat (biphasic)   | +1 | race plan, first two or final two weeks
//! maint+ extra VO2  | +5 | maintenance_plus, odd non-deload week
//! firefighter       |  - | never (inputs accepted, no behavior yet)

use chrono::{Duration, NaiveDate};

use crate::models::{CourseProfile, HeatBlock, PlanInputs, PlanRow, PlanType, SessionKind};

// ---------------------------------------------------------------------------
/// Session Text
// ---------------------------------------------------------------------------

pub const THRESHOLD_SESSION: &str = "Threshold 20 min continuous";
pub const HILL_TEMPO_SESSION: &str = "Hill tempo 3 × 8 min uphill";
pub const VO2_SESSION: &str = "VO2max intervals 5 × 3 min";
pub const HEAT_SESSION: &str = "Heat acclimation – 30 min hot-water immersion post-run";
pub const EXTRA_VO2_SESSION: &str = "Extra VO2max intervals 6 × 2 min";

const RACE_LONG_RUN_SEED_MIN: u32 = 90;
const EVERGREEN_LONG_RUN_SEED_MIN: u32 = 60;
const LONG_RUN_STEP_MIN: u32 = 10;

/// Every fourth week drops its VO2 work
pub fn is_deload_week(week: u32) -> bool {
  week % 4 == 3
}

// ---------------------------------------------------------------------------
/// Week Context: everything a rule may look at
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct WeekContext<'a> {
  pub inputs: &'a PlanInputs,
  pub week: u32,
  pub total_weeks: u32,
  pub week_start: NaiveDate,
}

impl<'a> WeekContext<'a> {
  pub fn new(inputs: &'a PlanInputs, week: u32, total_weeks: u32, today: NaiveDate) -> Self {
    Self {
      inputs,
      week,
      total_weeks,
      week_start: today + Duration::weeks(week as i64),
    }
  }

  fn in_final_two_weeks(&self) -> bool {
    self.week + 2 >= self.total_weeks
  }

  fn row(&self, day_offset: i64, kind: SessionKind, session: impl Into<String>) -> PlanRow {
    PlanRow {
      date: self.week_start + Duration::days(day_offset),
      session: session.into(),
      week: self.week,
      kind,
    }
  }
}

pub type Rule = fn(&WeekContext<'_>) -> Option<PlanRow>;

/// Rule table, evaluated in order for every week
pub const RULES: &[Rule] = &[
  long_run,
  midweek_quality,
  vo2_intervals,
  heat_monoblock,
  heat_biphasic,
  maintenance_plus_extra,
  firefighter_adjustment,
];

// ---------------------------------------------------------------------------
/// Rules
// ---------------------------------------------------------------------------

/// Sunday long run, growing 10 min per week.
///
/// There is no cap or taper on this progression.
pub fn long_run(ctx: &WeekContext<'_>) -> Option<PlanRow> {
  let seed = match ctx.inputs.plan_type {
    PlanType::Race => RACE_LONG_RUN_SEED_MIN,
    PlanType::Maintenance | PlanType::MaintenancePlus => EVERGREEN_LONG_RUN_SEED_MIN,
  };
  let minutes = seed + LONG_RUN_STEP_MIN * ctx.week;

  Some(ctx.row(6, SessionKind::LongRun, format!("Long run – {} min easy", minutes)))
}

/// Wednesday quality session. Flat courses always get threshold work; every
/// other profile alternates hill tempo (even weeks) with threshold (odd weeks).
pub fn midweek_quality(ctx: &WeekContext<'_>) -> Option<PlanRow> {
  let hill_week = ctx.week % 2 == 0;
  let (kind, session) = match ctx.inputs.course_profile {
    CourseProfile::Flat => (SessionKind::Threshold, THRESHOLD_SESSION),
    CourseProfile::Rolling | CourseProfile::Hilly | CourseProfile::Ultra if hill_week => {
      (SessionKind::HillTempo, HILL_TEMPO_SESSION)
    }
    CourseProfile::Rolling | CourseProfile::Hilly | CourseProfile::Ultra => {
      (SessionKind::Threshold, THRESHOLD_SESSION)
    }
  };

  Some(ctx.row(2, kind, session))
}

/// Friday VO2max intervals, skipped on deload weeks
pub fn vo2_intervals(ctx: &WeekContext<'_>) -> Option<PlanRow> {
  if is_deload_week(ctx.week) {
    return None;
  }
  Some(ctx.row(4, SessionKind::Vo2, VO2_SESSION))
}

pub fn heat_monoblock(ctx: &WeekContext<'_>) -> Option<PlanRow> {
  let applies = match (ctx.inputs.plan_type, ctx.inputs.heat_block) {
    (PlanType::Race, HeatBlock::Monoblock) => ctx.in_final_two_weeks(),
    (PlanType::Race, HeatBlock::None | HeatBlock::Biphasic) => false,
    (PlanType::Maintenance | PlanType::MaintenancePlus, _) => false,
  };
  applies.then(|| ctx.row(1, SessionKind::Heat, HEAT_SESSION))
}

/// Primer block in weeks 0-1, peak block in the final two weeks
pub fn heat_biphasic(ctx: &WeekContext<'_>) -> Option<PlanRow> {
  let applies = match (ctx.inputs.plan_type, ctx.inputs.heat_block) {
    (PlanType::Race, HeatBlock::Biphasic) => ctx.week < 2 || ctx.in_final_two_weeks(),
    (PlanType::Race, HeatBlock::None | HeatBlock::Monoblock) => false,
    (PlanType::Maintenance | PlanType::MaintenancePlus, _) => false,
  };
  applies.then(|| ctx.row(1, SessionKind::Heat, HEAT_SESSION))
}

/// Saturday extra VO2 on odd, non-deload weeks of a maintenance_plus plan
pub fn maintenance_plus_extra(ctx: &WeekContext<'_>) -> Option<PlanRow> {
  let applies = match ctx.inputs.plan_type {
    PlanType::MaintenancePlus => ctx.week % 2 == 1 && !is_deload_week(ctx.week),
    PlanType::Race | PlanType::Maintenance => false,
  };
  applies.then(|| ctx.row(5, SessionKind::ExtraVo2, EXTRA_VO2_SESSION))
}

/// Shift-work adjustment.
///
/// `firefighter`, `shift_pattern` and `next_shift_iso` are accepted but no
/// schedule change is defined for them, so this never emits or moves a row.
pub fn firefighter_adjustment(_ctx: &WeekContext<'_>) -> Option<PlanRow> {
  None
}

// ---------------------------------------------------------------------------
/// Assembly
// ---------------------------------------------------------------------------

/// Rows for a single week, in rule order
pub fn assemble_week(ctx: &WeekContext<'_>) -> Vec<PlanRow> {
  RULES.iter().filter_map(|rule| rule(ctx)).collect()
}

/// Rows for weeks `0..total_weeks`, unsorted
pub fn assemble(inputs: &PlanInputs, total_weeks: u32, today: NaiveDate) -> Vec<PlanRow> {
  (0..total_weeks)
    .flat_map(|week| assemble_week(&WeekContext::new(inputs, week, total_weeks, today)))
    .collect()
}
