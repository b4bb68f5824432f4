use chrono::{DateTime, Utc};
use sea_orm::sea_query::{LockType, OnConflict};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QuerySelect, Set, TransactionTrait,
};
use tracing::{info, warn};

use crate::entity::contest;
use crate::error::SchedulerError;

use super::plan::{build_instance, plan_next_instance};

/// Materialize the next occurrence of a recurring contest.
///
/// Returns `Ok(None)` when there is nothing to create: the contest is
/// one-time, or an instance for this window already exists (detected via the
/// unique `(parent_contest_id, start_time)` index). Instance creation and
/// the due-date update of the originating row share one transaction, so a
/// crash cannot leave the window half-processed.
///
/// Each generated instance carries its own `next_generation_date`, so the
/// chain's newest row produces the following occurrence. When an originating
/// row finds its window already materialized, its due date is cleared and it
/// stops generating; the hand-off keeps exactly one generator per window.
pub async fn generate_next_recurring_contest(
    db: &DatabaseConnection,
    contest_id: i32,
) -> Result<Option<contest::Model>, SchedulerError> {
    generate_inner(db, contest_id, None).await
}

/// Sweep entry point: like [`generate_next_recurring_contest`], but re-checks
/// the due date after taking the row lock, so a concurrent sweep that already
/// processed the row turns this call into a no-op.
pub(crate) async fn generate_if_due(
    db: &DatabaseConnection,
    contest_id: i32,
    now: DateTime<Utc>,
) -> Result<Option<contest::Model>, SchedulerError> {
    generate_inner(db, contest_id, Some(now)).await
}

async fn generate_inner(
    db: &DatabaseConnection,
    contest_id: i32,
    due_before: Option<DateTime<Utc>>,
) -> Result<Option<contest::Model>, SchedulerError> {
    let txn = db.begin().await?;

    // Lock the originating row so concurrent sweeps serialize per contest.
    let origin = contest::Entity::find_by_id(contest_id)
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or(SchedulerError::ContestNotFound(contest_id))?;

    if let Some(now) = due_before
        && !origin.next_generation_date.is_some_and(|due| due <= now)
    {
        // Another sweep handled this row between selection and locking.
        txn.rollback().await?;
        return Ok(None);
    }

    let Some(plan) = plan_next_instance(&origin)? else {
        txn.rollback().await?;
        return Ok(None);
    };

    let now = Utc::now();
    let instance = build_instance(&origin, &plan, now);

    let created = match contest::Entity::insert(instance)
        .on_conflict(
            OnConflict::columns([contest::Column::ParentContestId, contest::Column::StartTime])
                .do_nothing()
                .to_owned(),
        )
        .exec_with_returning(&txn)
        .await
    {
        Ok(model) => Some(model),
        Err(DbErr::RecordNotInserted) => None,
        Err(e) => return Err(e.into()),
    };

    let origin_id = origin.id;
    let mut active: contest::ActiveModel = origin.into();
    active.next_generation_date = Set(match created {
        // Advance to the window after the new instance's.
        Some(_) => Some(plan.next_generation_date),
        // Window already materialized: a newer row in the chain generates
        // from here on, so this row retires as a generator.
        None => None,
    });
    active.updated_at = Set(now);
    active.update(&txn).await?;

    txn.commit().await?;

    match created {
        Some(ref model) => {
            info!(
                contest_id = model.id,
                parent_contest_id = ?model.parent_contest_id,
                start_time = %model.start_time,
                next_generation_date = %plan.next_generation_date,
                "Generated recurring contest instance"
            );
        }
        None => {
            warn!(
                contest_id = origin_id,
                start_time = %plan.start_time,
                "Window already materialized, retiring this row as a generator"
            );
        }
    }

    Ok(created)
}
