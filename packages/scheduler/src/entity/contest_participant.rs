use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contest_participant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub contest_id: i32,
    #[sea_orm(primary_key)]
    pub profile_id: i32,
    #[sea_orm(belongs_to, from = "contest_id", to = "id")]
    pub contest: BelongsTo<super::contest::Entity>,
    #[sea_orm(belongs_to, from = "profile_id", to = "id")]
    pub profile: BelongsTo<super::profile::Entity>,

    /// Image entered for this contest. NULL for voters, who join without one.
    pub contributor_image_id: Option<i32>,
    #[sea_orm(belongs_to, from = "contributor_image_id", to = "id")]
    pub contributor_image: BelongsTo<Option<super::contributor_image::Entity>>,
    /// True when the entry was created by auto-enrollment rather than an
    /// explicit join.
    pub auto_entry: bool,

    pub joined_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
