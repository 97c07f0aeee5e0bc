//! Source of "today" for plan generation
//!
//! Plans are anchored on the current date. Passing the date in through a
//! `Clock` keeps generation deterministic under test.

use chrono::{Local, NaiveDate};

pub trait Clock {
  fn today(&self) -> NaiveDate;
}

/// Reads the local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn today(&self) -> NaiveDate {
    Local::now().date_naive()
  }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
  fn today(&self) -> NaiveDate {
    self.0
  }
}
