//! Location format entity model for Sea-ORM database interaction.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM entity model representing one segment rule of a location default.
///
/// # Database Schema
///
/// | Column              | Type                  | Description                               |
/// |---------------------|-----------------------|-------------------------------------------|
/// | id                  | INTEGER (Primary Key) | Format ID                                 |
/// | location_default_id | INTEGER (FK)          | Owning location default                   |
/// | char_definition     | VARCHAR(248), indexed | Normalized character definition           |
/// | segment_order       | INTEGER               | Display position, not unique              |
/// | segment_length      | INTEGER               | Derived from `char_definition`            |
/// | description         | VARCHAR(1024)         | Free text                                 |
/// | created             | TIMESTAMPTZ           | Creation time                             |
/// | updated             | TIMESTAMPTZ           | Last modification time                    |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "location_format")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub location_default_id: i32,

    /// Escaped character definition, e.g. `\a\d\d\d`.
    pub char_definition: String,

    /// Order this segment appears in the location code, starting at 0.
    ///
    /// Duplicates are allowed; listings break ties by id.
    pub segment_order: i32,

    /// Count of characters in `char_definition` once escape markers are
    /// removed. Recomputed on every save.
    pub segment_length: i32,

    pub description: String,

    pub created: DateTimeWithTimeZone,
    pub updated: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location_default::Entity",
        from = "Column::LocationDefaultId",
        to = "super::location_default::Column::Id"
    )]
    LocationDefault,

    #[sea_orm(has_many = "super::location_code::Entity")]
    LocationCode,
}

impl Related<super::location_default::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LocationDefault.def()
    }
}

impl Related<super::location_code::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LocationCode.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
