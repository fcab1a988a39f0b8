use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Marathon event, the root aggregate. `short` is the unique url-safe code.
/// The schedule_* columns map the column names of an external published
/// schedule so an importer knows which field holds what.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub short: String,
    pub name: String,
    pub receiver_name: String,
    pub use_paypal_sandbox: bool,
    pub paypal_email: String,
    pub schedule_id: Option<String>,
    pub schedule_datetime_field: String,
    pub schedule_game_field: String,
    pub schedule_runners_field: String,
    pub schedule_estimate_field: String,
    pub schedule_setup_field: String,
    pub schedule_commentators_field: String,
    pub schedule_comments_field: String,
    pub date: NaiveDate,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
