use sea_orm::*;
use sea_query::{Index, PostgresQueryBuilder};
use tracing::info;

use crate::entity::contest;

/// Ensure required database indexes exist.
///
/// SeaORM's schema-sync doesn't support composite indexes, so we create them
/// manually on startup.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Idempotency key for recurring generation: at most one instance per
    // (chain, start). Duplicate materialization of the same due window is
    // rejected by the database and handled as a no-op by the generator.
    let stmt = Index::create()
        .if_not_exists()
        .unique()
        .name("idx_contest_parent_start")
        .table(contest::Entity)
        .col(contest::Column::ParentContestId)
        .col(contest::Column::StartTime)
        .to_string(PostgresQueryBuilder);

    let result = db.execute_unprepared(&stmt).await;
    match result {
        Ok(_) => {
            info!("Ensured index idx_contest_parent_start exists");
        }
        Err(e) => {
            tracing::warn!("Failed to create index idx_contest_parent_start: {}", e);
        }
    }

    // Composite index for the due-contest sweep:
    // SELECT ... FROM contest WHERE is_active AND next_generation_date <= ?
    let stmt = Index::create()
        .if_not_exists()
        .name("idx_contest_active_due")
        .table(contest::Entity)
        .col(contest::Column::IsActive)
        .col(contest::Column::NextGenerationDate)
        .to_string(PostgresQueryBuilder);

    let result = db.execute_unprepared(&stmt).await;
    match result {
        Ok(_) => {
            info!("Ensured index idx_contest_active_due exists");
        }
        Err(e) => {
            tracing::warn!("Failed to create index idx_contest_active_due: {}", e);
        }
    }

    Ok(())
}
