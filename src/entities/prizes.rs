use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Prize definition.
/// Eligibility window is either the (start_run, end_run) pair or the
/// (start_time, end_time) pair, never both; both members of a pair are set
/// together or not at all. minimum_bid/maximum_bid bound the draw weighting
/// band; with sum_donations unset the two must be equal.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "prizes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub category_id: Option<i64>,
    pub sort_key: i32,
    pub image: Option<String>,
    pub description: String,
    pub minimum_bid: Decimal,
    pub maximum_bid: Decimal,
    pub sum_donations: bool,
    pub random_draw: bool,
    pub event_id: i64,
    pub start_run_id: Option<i64>,
    pub end_run_id: Option<i64>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub winner_id: Option<i64>,
    pub pinned: bool,
    pub provided_by: String,
    pub email_sent: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
