use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contest")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,
    /// Image category used for entry matching (e.g. "Full Body").
    pub category: String,
    /// Storage path or URL of the contest cover image.
    pub image: String,
    /// Eligibility requirements: attribute name -> array of accepted values.
    /// An empty map accepts everyone; "All" inside an array is a wildcard.
    #[sea_orm(column_type = "JsonBinary")]
    pub attributes: serde_json::Value,

    pub max_participants: i32,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,

    /// One of: none, daily, weekly, monthly.
    #[sea_orm(indexed)]
    pub cadence: String,
    /// For generated instances, the original row of the recurrence chain.
    /// NULL for one-time contests, templates, and self-generating originals.
    pub parent_contest_id: Option<i32>,
    /// Templates spawn instances but are never joinable themselves.
    pub is_recurring_template: bool,
    /// When this row's next successor is due for materialization, one
    /// cadence step before that successor's start. NULL for one-time
    /// contests and for rows whose successor already exists (retired
    /// generators).
    pub next_generation_date: Option<DateTimeUtc>,

    /// Entry fee charged per voter entry, in cents.
    pub cost_cents: i64,

    /// Profile id of the admin who created this contest.
    pub created_by: i32,

    pub is_active: bool,

    #[sea_orm(has_many, via = "contest_participant")]
    pub participants: HasMany<super::profile::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
