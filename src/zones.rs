//! Intensity guidance per session kind
//!
//! Heart-rate bands are fractions of max HR. VT1 is not used here.

use serde::{Deserialize, Serialize};

use crate::models::SessionKind;

/// ---------------------------------------------------------------------------
/// HR Targets
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrTarget {
  pub low_bpm: i64,
  pub high_bpm: i64,
}

impl HrTarget {
  fn from_fractions(max_hr: i64, low: f64, high: f64) -> Self {
    Self {
      low_bpm: (low * max_hr as f64).round() as i64,
      high_bpm: (high * max_hr as f64).round() as i64,
    }
  }

  pub fn to_display(&self) -> String {
    format!("{}–{} bpm", self.low_bpm, self.high_bpm)
  }
}

/// Fraction-of-max band for a session kind (None for passive sessions).
///
/// The long-run band of 60-70 % is a max-HR default of its own; aerobic
/// guidance tied to VT1 is not offered since VT1 is not read.
pub fn hr_fractions(kind: SessionKind) -> Option<(f64, f64)> {
  match kind {
    SessionKind::LongRun => Some((0.60, 0.70)),
    SessionKind::Threshold | SessionKind::HillTempo => Some((0.85, 0.90)),
    SessionKind::Vo2 | SessionKind::ExtraVo2 => Some((0.90, 0.95)),
    SessionKind::Heat => None,
  }
}

/// HR band for a session; absent when max HR is not positive
pub fn hr_target(kind: SessionKind, max_hr: i64) -> Option<HrTarget> {
  if max_hr <= 0 {
    return None;
  }
  hr_fractions(kind).map(|(low, high)| HrTarget::from_fractions(max_hr, low, high))
}

/// Perceived exertion band (1-10 scale)
pub fn rpe(kind: SessionKind) -> &'static str {
  match kind {
    SessionKind::LongRun => "3–5",
    SessionKind::Threshold | SessionKind::HillTempo => "5–7",
    SessionKind::Vo2 | SessionKind::ExtraVo2 => "8–9",
    SessionKind::Heat => "1–2",
  }
}
