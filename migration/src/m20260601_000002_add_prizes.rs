use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum PrizeCategories {
    Table,
    Id,
    Name,
    CreatedAt,
}

/// Prizes are attached to an event and optionally bounded by a run pair or
/// an explicit time window. winner_id stays NULL until a draw is persisted.
#[derive(DeriveIden)]
enum Prizes {
    Table,
    Id,
    Name,
    CategoryId,
    SortKey,
    Image,
    Description,
    MinimumBid,
    MaximumBid,
    SumDonations,
    RandomDraw,
    EventId,
    StartRunId,
    EndRunId,
    StartTime,
    EndTime,
    WinnerId,
    Pinned,
    ProvidedBy,
    EmailSent,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum SpeedRuns {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Donors {
    Table,
    Id,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PrizeCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PrizeCategories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PrizeCategories::Name)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PrizeCategories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_prize_categories_name_unique")
                    .table(PrizeCategories::Table)
                    .col(PrizeCategories::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Prizes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Prizes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Prizes::Name).string_len(64).not_null())
                    .col(ColumnDef::new(Prizes::CategoryId).big_integer().null())
                    .col(
                        ColumnDef::new(Prizes::SortKey)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Prizes::Image).string_len(1024).null())
                    .col(
                        ColumnDef::new(Prizes::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Prizes::MinimumBid)
                            .decimal_len(20, 2)
                            .not_null()
                            .default("5.00"),
                    )
                    .col(
                        ColumnDef::new(Prizes::MaximumBid)
                            .decimal_len(20, 2)
                            .not_null()
                            .default("5.00"),
                    )
                    .col(
                        ColumnDef::new(Prizes::SumDonations)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Prizes::RandomDraw)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Prizes::EventId).big_integer().not_null())
                    .col(ColumnDef::new(Prizes::StartRunId).big_integer().null())
                    .col(ColumnDef::new(Prizes::EndRunId).big_integer().null())
                    .col(
                        ColumnDef::new(Prizes::StartTime)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Prizes::EndTime)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Prizes::WinnerId).big_integer().null())
                    .col(
                        ColumnDef::new(Prizes::Pinned)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Prizes::ProvidedBy)
                            .string_len(64)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Prizes::EmailSent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Prizes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Prizes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prizes_category")
                            .from(Prizes::Table, Prizes::CategoryId)
                            .to(PrizeCategories::Table, PrizeCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prizes_event")
                            .from(Prizes::Table, Prizes::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prizes_start_run")
                            .from(Prizes::Table, Prizes::StartRunId)
                            .to(SpeedRuns::Table, SpeedRuns::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prizes_end_run")
                            .from(Prizes::Table, Prizes::EndRunId)
                            .to(SpeedRuns::Table, SpeedRuns::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prizes_winner")
                            .from(Prizes::Table, Prizes::WinnerId)
                            .to(Donors::Table, Donors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_prizes_name_unique")
                    .table(Prizes::Table)
                    .col(Prizes::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // one winner per category per event
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_prizes_category_winner_event_unique")
                    .table(Prizes::Table)
                    .col(Prizes::CategoryId)
                    .col(Prizes::WinnerId)
                    .col(Prizes::EventId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_prizes_sort_key")
                    .table(Prizes::Table)
                    .col(Prizes::SortKey)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_prizes_winner")
                    .table(Prizes::Table)
                    .col(Prizes::WinnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Prizes::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(PrizeCategories::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
