use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contributor_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub profile_id: i32,
    #[sea_orm(belongs_to, from = "profile_id", to = "id")]
    pub profile: HasOne<super::profile::Entity>,

    /// Category this image belongs to (matches contest categories).
    #[sea_orm(indexed)]
    pub category: String,
    /// Storage path or URL of the uploaded image.
    pub image: String,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
