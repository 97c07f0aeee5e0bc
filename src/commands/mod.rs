pub mod plan;

pub use plan::{generate_plan_report, generate_plan_rows};
