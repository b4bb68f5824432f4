use std::time::Duration;

use chrono::{DateTime, Utc};
use common::{Cadence, GenerationConfig};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::{error, info};

use crate::entity::contest;
use crate::error::SchedulerError;

use super::generate::generate_if_due;

/// A contest the sweep could not generate an instance for.
///
/// The row stays due and is retried on the next sweep.
#[derive(Debug)]
pub struct SweepFailure {
    pub contest_id: i32,
    pub title: String,
    pub error: SchedulerError,
}

/// Result of one due-contest sweep.
#[derive(Debug, Default)]
pub struct SweepOutcome {
    pub created: Vec<contest::Model>,
    pub failed: Vec<SweepFailure>,
}

/// Generate instances for every active recurring contest whose
/// `next_generation_date` has passed.
///
/// Rows are processed in id order so reports are reproducible. A failing row
/// is recorded and skipped; it never aborts the rest of the batch.
pub async fn generate_due_recurring_contests(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
) -> Result<SweepOutcome, SchedulerError> {
    let due = contest::Entity::find()
        .filter(contest::Column::IsActive.eq(true))
        .filter(contest::Column::Cadence.is_in(Cadence::RECURRING.iter().copied()))
        .filter(contest::Column::NextGenerationDate.lte(now))
        .order_by_asc(contest::Column::Id)
        .all(db)
        .await?;

    let mut outcome = SweepOutcome::default();
    if due.is_empty() {
        return Ok(outcome);
    }

    info!(count = due.len(), "Found due recurring contests");

    for row in due {
        match generate_if_due(db, row.id, now).await {
            Ok(Some(model)) => outcome.created.push(model),
            // Duplicate window or raced sweep: nothing new to report.
            Ok(None) => {}
            Err(e) => {
                error!(
                    contest_id = row.id,
                    title = %row.title,
                    error = %e,
                    "Failed to generate recurring contest instance"
                );
                outcome.failed.push(SweepFailure {
                    contest_id: row.id,
                    title: row.title,
                    error: e,
                });
            }
        }
    }

    Ok(outcome)
}

/// Run the due-contest sweep as a background task.
pub async fn run_generation_sweeper(db: DatabaseConnection, config: GenerationConfig) {
    let sweep_interval = Duration::from_secs(config.sweep_interval_secs);

    info!(
        sweep_interval_secs = config.sweep_interval_secs,
        "Starting recurring contest sweeper"
    );

    let mut interval = tokio::time::interval(sweep_interval);

    loop {
        interval.tick().await;

        match generate_due_recurring_contests(&db, Utc::now()).await {
            Ok(outcome) => {
                if !outcome.created.is_empty() || !outcome.failed.is_empty() {
                    info!(
                        created = outcome.created.len(),
                        failed = outcome.failed.len(),
                        "Recurring contest sweep completed"
                    );
                }
            }
            Err(e) => {
                error!(error = %e, "Recurring contest sweep failed");
            }
        }
    }
}
