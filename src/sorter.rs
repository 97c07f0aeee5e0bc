use crate::models::PlanRow;

/// Order rows by calendar date.
///
/// Stable, so rows sharing a date keep the order the assembler emitted them in.
pub fn sort_chronologically(mut rows: Vec<PlanRow>) -> Vec<PlanRow> {
  rows.sort_by_key(|row| row.date);
  rows
}
