//! Location code entity model for Sea-ORM database interaction.
//!
//! Location codes form a forest: rows with a `NULL` parent are roots and every
//! other row points at its parent through `parent_id`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM entity model representing one segment of the location tree.
///
/// # Database Schema
///
/// | Column             | Type                  | Description                                 |
/// |--------------------|-----------------------|---------------------------------------------|
/// | id                 | INTEGER (Primary Key) | Code ID                                     |
/// | location_format_id | INTEGER (FK)          | Format governing this segment               |
/// | segment            | VARCHAR(248), indexed | The segment value                           |
/// | parent_id          | INTEGER NULL (FK)     | Parent code, `NULL` for roots, indexed      |
/// | path               | VARCHAR(248)          | Separator-joined segments from the root     |
/// | level              | SMALLINT              | Number of separators in `path`              |
/// | created            | TIMESTAMPTZ           | Creation time                               |
/// | updated            | TIMESTAMPTZ           | Last modification time                      |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "location_code")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub location_format_id: i32,

    pub segment: String,

    pub parent_id: Option<i32>,

    /// Derived on every save, e.g. `A:B:C`.
    pub path: String,

    /// Derived on every save; roots are level 0.
    pub level: i16,

    pub created: DateTimeWithTimeZone,
    pub updated: DateTimeWithTimeZone,
}

impl Model {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location_format::Entity",
        from = "Column::LocationFormatId",
        to = "super::location_format::Column::Id"
    )]
    LocationFormat,

    #[sea_orm(belongs_to = "Entity", from = "Column::ParentId", to = "Column::Id")]
    Parent,
}

impl Related<super::location_format::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LocationFormat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
