//! Location default entity model for Sea-ORM database interaction.
//!
//! A location default groups the formats of one location-coding scheme and
//! decides the separator used to join segments into a path.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Separator used when a default is created without one.
pub const DEFAULT_SEPARATOR: &str = ":";

/// Sea-ORM entity model representing a location default.
///
/// # Database Schema
///
/// | Column      | Type                 | Description                                 |
/// |-------------|----------------------|---------------------------------------------|
/// | id          | INTEGER (Primary Key)| Default ID                                  |
/// | owner_id    | INTEGER              | The user that owns this scheme              |
/// | name        | VARCHAR(100)         | Unique per owner                            |
/// | description | VARCHAR(254) NULL    | What the formats will be used for           |
/// | shared      | BOOLEAN              | Whether others may copy the formats         |
/// | separator   | VARCHAR(3)           | Joins segments into a path, `:` by default  |
/// | created     | TIMESTAMPTZ          | Creation time                               |
/// | updated     | TIMESTAMPTZ          | Last modification time                      |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "location_default")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// The owning user. Users live outside this crate, so this is a plain
    /// reference rather than a foreign key.
    pub owner_id: i32,

    pub name: String,

    pub description: Option<String>,

    pub shared: bool,

    /// Between one and three characters.
    pub separator: String,

    pub created: DateTimeWithTimeZone,
    pub updated: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::location_format::Entity")]
    LocationFormat,
}

impl Related<super::location_format::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LocationFormat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
