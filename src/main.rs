fn main() -> anyhow::Result<()> {
  trail_planner_lib::run()
}
