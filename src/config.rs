//! Environment configuration for the planner
//!
//! Read after `dotenvy` has loaded any `.env` file. Command-line flags take
//! precedence over these values.

use chrono::NaiveDate;
use std::env;
use std::fmt::Write;

use crate::clock::{Clock, FixedClock, SystemClock};

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

pub const DATE_FORMAT_VAR: &str = "PLANNER_DATE_FORMAT";
pub const TODAY_VAR: &str = "PLANNER_TODAY";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Invalid value for {key}: {value:?}")]
  InvalidValue { key: String, value: String },
}

/// ---------------------------------------------------------------------------
/// Planner Configuration
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
  /// strftime pattern for display dates
  pub date_format: String,
  /// Frozen "today"; None means the system clock
  pub today: Option<NaiveDate>,
}

impl Default for PlannerConfig {
  fn default() -> Self {
    Self {
      date_format: DEFAULT_DATE_FORMAT.to_string(),
      today: None,
    }
  }
}

impl PlannerConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    let date_format = match env::var(DATE_FORMAT_VAR) {
      Ok(fmt) => validate_date_format(DATE_FORMAT_VAR, &fmt)?,
      Err(_) => DEFAULT_DATE_FORMAT.to_string(),
    };

    let today = match env::var(TODAY_VAR) {
      Ok(raw) => Some(parse_today(TODAY_VAR, &raw)?),
      Err(_) => None,
    };

    Ok(Self { date_format, today })
  }

  /// Clock honoring the configured override
  pub fn clock(&self) -> Box<dyn Clock> {
    match self.today {
      Some(date) => Box::new(FixedClock(date)),
      None => Box::new(SystemClock),
    }
  }
}

/// Reject strftime patterns that cannot render a bare calendar date.
///
/// The pattern is tried on a fixed date: unknown specifiers and time or zone
/// fields (`%H`, `%z`, `%s`) both fail there.
pub fn validate_date_format(key: &str, fmt: &str) -> Result<String, ConfigError> {
  let mut rendered = String::new();
  let invalid = fmt.trim().is_empty() || write!(rendered, "{}", NaiveDate::MIN.format(fmt)).is_err();
  if invalid {
    return Err(ConfigError::InvalidValue {
      key: key.to_string(),
      value: fmt.to_string(),
    });
  }
  Ok(fmt.to_string())
}

pub fn parse_today(key: &str, raw: &str) -> Result<NaiveDate, ConfigError> {
  NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| ConfigError::InvalidValue {
    key: key.to_string(),
    value: raw.to_string(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn test_defaults_when_unset() {
    temp_env::with_vars_unset([DATE_FORMAT_VAR, TODAY_VAR], || {
      let config = PlannerConfig::from_env().unwrap();
      assert_eq!(config, PlannerConfig::default());
    });
  }

  #[test]
  #[serial]
  fn test_reads_overrides() {
    temp_env::with_vars(
      [(DATE_FORMAT_VAR, Some("%a %d %b")), (TODAY_VAR, Some("2026-03-02"))],
      || {
        let config = PlannerConfig::from_env().unwrap();
        assert_eq!(config.date_format, "%a %d %b");
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2026, 3, 2));
        assert_eq!(config.clock().today(), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
      },
    );
  }

  #[test]
  #[serial]
  fn test_bad_today_rejected() {
    temp_env::with_vars([(TODAY_VAR, Some("tomorrow"))], || {
      let err = PlannerConfig::from_env().unwrap_err();
      assert!(err.to_string().contains(TODAY_VAR));
    });
  }

  #[test]
  #[serial]
  fn test_bad_date_format_rejected() {
    temp_env::with_vars([(DATE_FORMAT_VAR, Some("%Y-%"))], || {
      assert!(PlannerConfig::from_env().is_err());
    });
  }

  #[test]
  fn test_validate_date_format() {
    assert!(validate_date_format("fmt", "%d/%m/%Y").is_ok());
    assert!(validate_date_format("fmt", "  ").is_err());
  }

  #[test]
  fn test_time_and_zone_patterns_rejected() {
    for fmt in ["%H:%M", "%z", "%s", "%Y-%m-%d %H:%M"] {
      let err = validate_date_format("fmt", fmt).unwrap_err();
      assert!(err.to_string().contains(fmt), "{} should be rejected", fmt);
    }
  }

  #[test]
  #[serial]
  fn test_time_pattern_in_env_rejected() {
    temp_env::with_vars([(DATE_FORMAT_VAR, Some("%H:%M"))], || {
      assert!(PlannerConfig::from_env().is_err());
    });
  }
}
