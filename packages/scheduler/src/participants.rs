use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::entity::{contest, contest_participant};
use crate::error::SchedulerError;

/// Number of profiles joined to a contest.
///
/// Occupancy is always derived from participant rows; the contest row stores
/// no counter to drift.
pub async fn participant_count<C: ConnectionTrait>(
    db: &C,
    contest_id: i32,
) -> Result<u64, SchedulerError> {
    let count = contest_participant::Entity::find()
        .filter(contest_participant::Column::ContestId.eq(contest_id))
        .count(db)
        .await?;
    Ok(count)
}

/// Whether a contest can still accept a new participant.
pub async fn has_capacity<C: ConnectionTrait>(
    db: &C,
    contest: &contest::Model,
) -> Result<bool, SchedulerError> {
    let joined = participant_count(db, contest.id).await?;
    Ok(joined < contest.max_participants as u64)
}
