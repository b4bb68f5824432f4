use chrono::{DateTime, Utc};
use common::Cadence;
use sea_orm::Set;

use crate::entity::contest;
use crate::error::SchedulerError;

/// Blueprint for the next instance of a recurring contest.
///
/// Produced by [`plan_next_instance`] without touching the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstancePlan {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Due date for the window after this one, one cadence step before the
    /// instance's start. Written both to the originating row (advancing it)
    /// and to the new instance (seeding it as the chain's next generator).
    pub next_generation_date: DateTime<Utc>,
    /// The chain's original row. Instances always point at the template or
    /// first self-generating contest, never at each other.
    pub parent_contest_id: i32,
}

/// Compute when and how the next occurrence of `origin` should run.
///
/// Returns `Ok(None)` for a one-time contest (not an error, a no-op signal).
/// Fails with a validation error if the stored cadence is malformed or the
/// row violates `end_time > start_time`.
pub fn plan_next_instance(
    origin: &contest::Model,
) -> Result<Option<InstancePlan>, SchedulerError> {
    let cadence: Cadence = origin
        .cadence
        .parse()
        .map_err(|e: common::ParseCadenceError| SchedulerError::Validation(e.to_string()))?;

    if !cadence.is_recurring() {
        return Ok(None);
    }

    if origin.end_time <= origin.start_time {
        return Err(SchedulerError::Validation(format!(
            "Contest {} has end_time before start_time",
            origin.id
        )));
    }

    let start_time = cadence
        .step_forward(origin.start_time)
        .ok_or_else(|| SchedulerError::Validation("start_time shift out of range".into()))?;
    let end_time = cadence
        .step_forward(origin.end_time)
        .ok_or_else(|| SchedulerError::Validation("end_time shift out of range".into()))?;
    let next_generation_date = cadence
        .next_generation_date(start_time)
        .ok_or_else(|| SchedulerError::Validation("generation date out of range".into()))?;

    Ok(Some(InstancePlan {
        start_time,
        end_time,
        next_generation_date,
        parent_contest_id: origin.parent_contest_id.unwrap_or(origin.id),
    }))
}

/// Materialize the planned instance as an insertable row.
///
/// Title, category, image, attributes, capacity, cadence, cost and creator
/// are copied from the originating contest; the attribute map is cloned, not
/// shared. Instances are always active, joinable non-templates, and are
/// seeded with their own `next_generation_date` so the chain keeps producing
/// occurrences even after the originating row retires.
pub fn build_instance(
    origin: &contest::Model,
    plan: &InstancePlan,
    now: DateTime<Utc>,
) -> contest::ActiveModel {
    contest::ActiveModel {
        title: Set(origin.title.clone()),
        category: Set(origin.category.clone()),
        image: Set(origin.image.clone()),
        attributes: Set(origin.attributes.clone()),
        max_participants: Set(origin.max_participants),
        start_time: Set(plan.start_time),
        end_time: Set(plan.end_time),
        cadence: Set(origin.cadence.clone()),
        parent_contest_id: Set(Some(plan.parent_contest_id)),
        is_recurring_template: Set(false),
        next_generation_date: Set(Some(plan.next_generation_date)),
        cost_cents: Set(origin.cost_cents),
        created_by: Set(origin.created_by),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}
