mod generate;
mod plan;
mod sweep;

pub use generate::generate_next_recurring_contest;
pub use plan::{InstancePlan, build_instance, plan_next_instance};
pub use sweep::{
    SweepFailure, SweepOutcome, generate_due_recurring_contests, run_generation_sweeper,
};
