use chrono::{DateTime, Utc};
use common::Cadence;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::warn;

use crate::entity::contest;
use crate::error::SchedulerError;

/// When a contest opens for joining.
///
/// One-time contests open the moment they are created. Recurring contests
/// open one cadence step before start, so a daily contest is joinable for
/// the day leading up to it and a weekly one for the full week.
pub fn window_opens_at(
    cadence: Cadence,
    start_time: DateTime<Utc>,
    created_at: DateTime<Utc>,
) -> DateTime<Utc> {
    cadence.step_back(start_time).unwrap_or(created_at)
}

/// Whether `contest` currently accepts joins.
///
/// Returns false once the contest has ended or been deactivated. A contest
/// already underway stays joinable until `end_time`. Fails with a validation
/// error if the stored cadence is malformed.
pub fn is_available_for_joining(
    contest: &contest::Model,
    now: DateTime<Utc>,
) -> Result<bool, SchedulerError> {
    if !contest.is_active {
        return Ok(false);
    }
    if now > contest.end_time {
        return Ok(false);
    }
    let cadence: Cadence = contest
        .cadence
        .parse()
        .map_err(|e: common::ParseCadenceError| SchedulerError::Validation(e.to_string()))?;
    Ok(now >= window_opens_at(cadence, contest.start_time, contest.created_at))
}

/// Listing predicate: like [`is_available_for_joining`], but recurring
/// templates are never listed regardless of their window.
pub fn is_listed_for_joining(
    contest: &contest::Model,
    now: DateTime<Utc>,
) -> Result<bool, SchedulerError> {
    if contest.is_recurring_template {
        return Ok(false);
    }
    is_available_for_joining(contest, now)
}

/// All contests currently open for joining, ordered by start time.
///
/// The window depends on each row's cadence, so candidates are narrowed in
/// SQL (active, non-template, not yet ended) and the advance window is
/// applied per row. Rows with a malformed cadence are skipped with a
/// warning; a corrupt row hides itself rather than breaking the listing.
pub async fn find_joinable<C: ConnectionTrait>(
    db: &C,
    now: DateTime<Utc>,
) -> Result<Vec<contest::Model>, SchedulerError> {
    let candidates = contest::Entity::find()
        .filter(contest::Column::IsActive.eq(true))
        .filter(contest::Column::IsRecurringTemplate.eq(false))
        .filter(contest::Column::EndTime.gte(now))
        .order_by_asc(contest::Column::StartTime)
        .all(db)
        .await?;

    let mut joinable = Vec::with_capacity(candidates.len());
    for contest in candidates {
        match is_listed_for_joining(&contest, now) {
            Ok(true) => joinable.push(contest),
            Ok(false) => {}
            Err(e) => {
                warn!(contest_id = contest.id, error = %e, "Skipping contest with malformed cadence");
            }
        }
    }

    Ok(joinable)
}
