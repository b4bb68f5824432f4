use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub screen_name: String,
    /// "contributor" (submits images) or "user" (votes/judges).
    pub role: String,
    /// Attribute values used for eligibility matching (name -> value).
    #[sea_orm(column_type = "JsonBinary")]
    pub attributes: serde_json::Value,

    #[sea_orm(has_many)]
    pub images: HasMany<super::contributor_image::Entity>,

    #[sea_orm(has_many, via = "contest_participant")]
    pub contests: HasMany<super::contest::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
