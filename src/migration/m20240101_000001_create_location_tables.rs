use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LocationDefault::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LocationDefault::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LocationDefault::OwnerId).integer().not_null())
                    .col(ColumnDef::new(LocationDefault::Name).string_len(100).not_null())
                    .col(ColumnDef::new(LocationDefault::Description).string_len(254).null())
                    .col(
                        ColumnDef::new(LocationDefault::Shared)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(LocationDefault::Separator)
                            .string_len(3)
                            .not_null()
                            .default(":"),
                    )
                    .col(
                        ColumnDef::new(LocationDefault::Created)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LocationDefault::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_location_default_owner_name")
                    .table(LocationDefault::Table)
                    .col(LocationDefault::OwnerId)
                    .col(LocationDefault::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LocationFormat::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LocationFormat::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LocationFormat::LocationDefaultId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LocationFormat::CharDefinition)
                            .string_len(248)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LocationFormat::SegmentOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(LocationFormat::SegmentLength)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(LocationFormat::Description)
                            .string_len(1024)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(LocationFormat::Created)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LocationFormat::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_format_location_default")
                            .from(LocationFormat::Table, LocationFormat::LocationDefaultId)
                            .to(LocationDefault::Table, LocationDefault::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_location_format_char_definition")
                    .table(LocationFormat::Table)
                    .col(LocationFormat::CharDefinition)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LocationCode::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LocationCode::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LocationCode::LocationFormatId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LocationCode::Segment).string_len(248).not_null())
                    .col(ColumnDef::new(LocationCode::ParentId).integer().null())
                    .col(ColumnDef::new(LocationCode::Path).string_len(248).not_null())
                    .col(ColumnDef::new(LocationCode::Level).small_integer().not_null())
                    .col(
                        ColumnDef::new(LocationCode::Created)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LocationCode::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_code_location_format")
                            .from(LocationCode::Table, LocationCode::LocationFormatId)
                            .to(LocationFormat::Table, LocationFormat::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_code_parent")
                            .from(LocationCode::Table, LocationCode::ParentId)
                            .to(LocationCode::Table, LocationCode::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_location_code_segment")
                    .table(LocationCode::Table)
                    .col(LocationCode::Segment)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_location_code_parent_id")
                    .table(LocationCode::Table)
                    .col(LocationCode::ParentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LocationCode::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LocationFormat::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LocationDefault::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LocationDefault {
    Table,
    Id,
    OwnerId,
    Name,
    Description,
    Shared,
    Separator,
    Created,
    Updated,
}

#[derive(DeriveIden)]
enum LocationFormat {
    Table,
    Id,
    LocationDefaultId,
    CharDefinition,
    SegmentOrder,
    SegmentLength,
    Description,
    Created,
    Updated,
}

#[derive(DeriveIden)]
enum LocationCode {
    Table,
    Id,
    LocationFormatId,
    Segment,
    ParentId,
    Path,
    Level,
    Created,
    Updated,
}
