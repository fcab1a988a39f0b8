use sea_orm_migration::prelude::*;

/// Marathon events (root aggregate)
#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Short,
    Name,
    ReceiverName,
    UsePaypalSandbox,
    PaypalEmail,
    ScheduleId,
    ScheduleDatetimeField,
    ScheduleGameField,
    ScheduleRunnersField,
    ScheduleEstimateField,
    ScheduleSetupField,
    ScheduleCommentatorsField,
    ScheduleCommentsField,
    Date,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Donors {
    Table,
    Id,
    Email,
    Alias,
    FirstName,
    LastName,
    Anonymous,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SpeedRuns {
    Table,
    Id,
    EventId,
    Name,
    Runners,
    SortKey,
    Description,
    StartTime,
    EndTime,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Donations {
    Table,
    Id,
    DonorId,
    EventId,
    Domain,
    DomainId,
    TransactionState,
    BidState,
    ReadState,
    CommentState,
    Amount,
    TimeReceived,
    Comment,
    ModComment,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Challenges {
    Table,
    Id,
    SpeedRunId,
    Name,
    Goal,
    Description,
    State,
    Pinned,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ChallengeBids {
    Table,
    Id,
    ChallengeId,
    DonationId,
    Amount,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Choices {
    Table,
    Id,
    SpeedRunId,
    Name,
    Description,
    State,
    Pinned,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ChoiceOptions {
    Table,
    Id,
    ChoiceId,
    Name,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ChoiceBids {
    Table,
    Id,
    OptionId,
    DonationId,
    Amount,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // events
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Events::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Events::Short).string_len(64).not_null())
                    .col(ColumnDef::new(Events::Name).string_len(128).not_null())
                    .col(
                        ColumnDef::new(Events::ReceiverName)
                            .string_len(128)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Events::UsePaypalSandbox)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Events::PaypalEmail)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Events::ScheduleId).string_len(128).null())
                    .col(
                        ColumnDef::new(Events::ScheduleDatetimeField)
                            .string_len(128)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Events::ScheduleGameField)
                            .string_len(128)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Events::ScheduleRunnersField)
                            .string_len(128)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Events::ScheduleEstimateField)
                            .string_len(128)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Events::ScheduleSetupField)
                            .string_len(128)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Events::ScheduleCommentatorsField)
                            .string_len(128)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Events::ScheduleCommentsField)
                            .string_len(128)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Events::Date).date().not_null())
                    .col(
                        ColumnDef::new(Events::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Events::UpdatedAt)
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
                    .name("idx_events_short_unique")
                    .table(Events::Table)
                    .col(Events::Short)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_events_schedule_id_unique")
                    .table(Events::Table)
                    .col(Events::ScheduleId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // donors
        manager
            .create_table(
                Table::create()
                    .table(Donors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Donors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Donors::Email).string_len(128).not_null())
                    .col(ColumnDef::new(Donors::Alias).string_len(32).null())
                    .col(
                        ColumnDef::new(Donors::FirstName)
                            .string_len(32)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Donors::LastName)
                            .string_len(32)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Donors::Anonymous)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Donors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Donors::UpdatedAt)
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
                    .name("idx_donors_email_unique")
                    .table(Donors::Table)
                    .col(Donors::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_donors_alias_unique")
                    .table(Donors::Table)
                    .col(Donors::Alias)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // speed_runs
        manager
            .create_table(
                Table::create()
                    .table(SpeedRuns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SpeedRuns::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SpeedRuns::EventId).big_integer().not_null())
                    .col(ColumnDef::new(SpeedRuns::Name).string_len(64).not_null())
                    .col(
                        ColumnDef::new(SpeedRuns::Runners)
                            .string_len(1024)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(SpeedRuns::SortKey).integer().not_null())
                    .col(
                        ColumnDef::new(SpeedRuns::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SpeedRuns::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SpeedRuns::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SpeedRuns::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(SpeedRuns::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_speed_runs_event")
                            .from(SpeedRuns::Table, SpeedRuns::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_speed_runs_event_name_unique")
                    .table(SpeedRuns::Table)
                    .col(SpeedRuns::EventId)
                    .col(SpeedRuns::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_speed_runs_sort_key")
                    .table(SpeedRuns::Table)
                    .col(SpeedRuns::SortKey)
                    .to_owned(),
            )
            .await?;

        // donations
        manager
            .create_table(
                Table::create()
                    .table(Donations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Donations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Donations::DonorId).big_integer().not_null())
                    .col(ColumnDef::new(Donations::EventId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Donations::Domain)
                            .string_len(32)
                            .not_null()
                            .default("local"),
                    )
                    .col(
                        ColumnDef::new(Donations::DomainId)
                            .string_len(160)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Donations::TransactionState)
                            .string_len(32)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Donations::BidState)
                            .string_len(32)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Donations::ReadState)
                            .string_len(32)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Donations::CommentState)
                            .string_len(32)
                            .not_null()
                            .default("absent"),
                    )
                    .col(
                        ColumnDef::new(Donations::Amount)
                            .decimal_len(20, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Donations::TimeReceived)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Donations::Comment)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Donations::ModComment)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Donations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Donations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_donations_donor")
                            .from(Donations::Table, Donations::DonorId)
                            .to(Donors::Table, Donors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_donations_event")
                            .from(Donations::Table, Donations::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // domain_id carries the external transaction identity and must be
        // globally unique; concurrent duplicates are rejected here
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_donations_domain_id_unique")
                    .table(Donations::Table)
                    .col(Donations::DomainId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_donations_event")
                    .table(Donations::Table)
                    .col(Donations::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_donations_donor")
                    .table(Donations::Table)
                    .col(Donations::DonorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_donations_time_received")
                    .table(Donations::Table)
                    .col(Donations::TimeReceived)
                    .to_owned(),
            )
            .await?;

        // challenges
        manager
            .create_table(
                Table::create()
                    .table(Challenges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Challenges::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Challenges::SpeedRunId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Challenges::Name).string_len(64).not_null())
                    .col(
                        ColumnDef::new(Challenges::Goal)
                            .decimal_len(20, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Challenges::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Challenges::State)
                            .string_len(32)
                            .not_null()
                            .default("hidden"),
                    )
                    .col(
                        ColumnDef::new(Challenges::Pinned)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Challenges::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Challenges::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_challenges_speed_run")
                            .from(Challenges::Table, Challenges::SpeedRunId)
                            .to(SpeedRuns::Table, SpeedRuns::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_challenges_run_name_unique")
                    .table(Challenges::Table)
                    .col(Challenges::SpeedRunId)
                    .col(Challenges::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // challenge_bids
        manager
            .create_table(
                Table::create()
                    .table(ChallengeBids::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChallengeBids::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ChallengeBids::ChallengeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChallengeBids::DonationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChallengeBids::Amount)
                            .decimal_len(20, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChallengeBids::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_challenge_bids_challenge")
                            .from(ChallengeBids::Table, ChallengeBids::ChallengeId)
                            .to(Challenges::Table, Challenges::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_challenge_bids_donation")
                            .from(ChallengeBids::Table, ChallengeBids::DonationId)
                            .to(Donations::Table, Donations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_challenge_bids_donation")
                    .table(ChallengeBids::Table)
                    .col(ChallengeBids::DonationId)
                    .to_owned(),
            )
            .await?;

        // choices
        manager
            .create_table(
                Table::create()
                    .table(Choices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Choices::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Choices::SpeedRunId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Choices::Name).string_len(64).not_null())
                    .col(
                        ColumnDef::new(Choices::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Choices::State)
                            .string_len(32)
                            .not_null()
                            .default("hidden"),
                    )
                    .col(
                        ColumnDef::new(Choices::Pinned)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Choices::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Choices::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_choices_speed_run")
                            .from(Choices::Table, Choices::SpeedRunId)
                            .to(SpeedRuns::Table, SpeedRuns::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_choices_run_name_unique")
                    .table(Choices::Table)
                    .col(Choices::SpeedRunId)
                    .col(Choices::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // choice_options
        manager
            .create_table(
                Table::create()
                    .table(ChoiceOptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChoiceOptions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ChoiceOptions::ChoiceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChoiceOptions::Name)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChoiceOptions::Description)
                            .string_len(128)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ChoiceOptions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_choice_options_choice")
                            .from(ChoiceOptions::Table, ChoiceOptions::ChoiceId)
                            .to(Choices::Table, Choices::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_choice_options_choice_name_unique")
                    .table(ChoiceOptions::Table)
                    .col(ChoiceOptions::ChoiceId)
                    .col(ChoiceOptions::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // choice_bids
        manager
            .create_table(
                Table::create()
                    .table(ChoiceBids::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChoiceBids::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ChoiceBids::OptionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChoiceBids::DonationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChoiceBids::Amount)
                            .decimal_len(20, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChoiceBids::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_choice_bids_option")
                            .from(ChoiceBids::Table, ChoiceBids::OptionId)
                            .to(ChoiceOptions::Table, ChoiceOptions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_choice_bids_donation")
                            .from(ChoiceBids::Table, ChoiceBids::DonationId)
                            .to(Donations::Table, Donations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_choice_bids_donation")
                    .table(ChoiceBids::Table)
                    .col(ChoiceBids::DonationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // reverse dependency order
        manager
            .drop_table(Table::drop().if_exists().table(ChoiceBids::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(ChoiceOptions::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Choices::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(ChallengeBids::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(Challenges::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Donations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(SpeedRuns::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Donors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Events::Table).to_owned())
            .await?;
        Ok(())
    }
}
