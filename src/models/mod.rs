pub mod inputs;
pub mod plan;

pub use inputs::{CourseProfile, HeatBlock, PlanInputs, PlanType, RaceDistance, TimeVsDistance};
pub use plan::{DisplayRow, PlanReport, PlanRow, ReportRow, SessionKind, WeekTarget};
