pub mod builders;

use courseorder::logging::env_filter_or;
use tracing_subscriber::fmt;

/// Route `tracing` output through the test harness.
///
/// Output is captured per test and shown only for failures (or with
/// `--nocapture`). The filter comes from `COURSEORDER_LOG`, e.g.
/// `COURSEORDER_LOG=courseorder::dag=trace cargo test`. Repeated calls are
/// no-ops.
pub fn init_tracing() {
    let _ = fmt()
        .with_env_filter(env_filter_or("info"))
        .with_test_writer()
        .try_init();
}

/// Solve a problem and render it exactly as the binary would print it.
pub fn solve_to_string(problem: &courseorder::input::Problem) -> anyhow::Result<String> {
    let outcome = courseorder::dag::find_course_order(problem);
    Ok(courseorder::output::render_outcome(outcome)?)
}
