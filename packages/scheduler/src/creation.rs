use chrono::{DateTime, Utc};
use common::Cadence;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};

use crate::entity::contest;
use crate::error::SchedulerError;

/// Administrative identity authorized to create contests.
///
/// Passed explicitly by the caller; the core never derives admin status from
/// ambient state.
#[derive(Debug, Clone, Copy)]
pub struct AdminActor {
    pub profile_id: i32,
}

/// Fields supplied by the administrator when creating a contest.
#[derive(Debug, Clone)]
pub struct NewContest {
    pub title: String,
    pub category: String,
    pub image: String,
    /// Eligibility requirements: attribute name -> array of accepted values.
    pub attributes: serde_json::Value,
    pub max_participants: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub cadence: Cadence,
    pub cost_cents: i64,
}

pub fn validate_new_contest(req: &NewContest) -> Result<(), SchedulerError> {
    let title = req.title.trim();
    if title.is_empty() || title.chars().count() > 256 {
        return Err(SchedulerError::Validation(
            "Title must be 1-256 characters".into(),
        ));
    }
    if req.max_participants < 1 {
        return Err(SchedulerError::Validation(
            "max_participants must be at least 1".into(),
        ));
    }
    if req.cost_cents < 0 {
        return Err(SchedulerError::Validation(
            "cost_cents must not be negative".into(),
        ));
    }
    if req.end_time <= req.start_time {
        return Err(SchedulerError::Validation(
            "end_time must be after start_time".into(),
        ));
    }
    Ok(())
}

/// Create a contest, deciding its recurrence role at first persistence.
///
/// A cadence-bearing contest either becomes a non-joinable template
/// (`force_template`, trusted callers only) or a regular contest that is
/// joinable and still self-generates successors. Both get a seeded
/// `next_generation_date`. With cadence `none` the recurrence fields stay
/// unset and `force_template` is ignored. This decision is never revisited.
pub async fn create_contest<C: ConnectionTrait>(
    db: &C,
    actor: AdminActor,
    req: NewContest,
    force_template: bool,
) -> Result<contest::Model, SchedulerError> {
    validate_new_contest(&req)?;

    let now = Utc::now();
    let next_generation_date = req.cadence.next_generation_date(req.start_time);
    let is_template = force_template && req.cadence.is_recurring();

    let new_contest = contest::ActiveModel {
        title: Set(req.title.trim().to_string()),
        category: Set(req.category),
        image: Set(req.image),
        attributes: Set(req.attributes),
        max_participants: Set(req.max_participants),
        start_time: Set(req.start_time),
        end_time: Set(req.end_time),
        cadence: Set(req.cadence.as_str().to_string()),
        parent_contest_id: Set(None),
        is_recurring_template: Set(is_template),
        next_generation_date: Set(next_generation_date),
        cost_cents: Set(req.cost_cents),
        created_by: Set(actor.profile_id),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_contest.insert(db).await?;

    tracing::info!(
        contest_id = model.id,
        cadence = %model.cadence,
        is_template = model.is_recurring_template,
        created_by = actor.profile_id,
        "Created contest"
    );

    Ok(model)
}
