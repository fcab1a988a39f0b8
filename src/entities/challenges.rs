use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Visibility lifecycle shared by challenges and choices.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
#[serde(rename_all = "snake_case")]
pub enum IncentiveState {
    #[sea_orm(string_value = "hidden")]
    Hidden,
    #[sea_orm(string_value = "opened")]
    Opened,
    #[sea_orm(string_value = "closed")]
    Closed,
}

impl std::fmt::Display for IncentiveState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncentiveState::Hidden => write!(f, "hidden"),
            IncentiveState::Opened => write!(f, "opened"),
            IncentiveState::Closed => write!(f, "closed"),
        }
    }
}

/// Fixed-goal donation incentive attached to a run. Name is unique per run.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "challenges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub speed_run_id: i64,
    pub name: String,
    pub goal: Decimal,
    pub description: String,
    pub state: IncentiveState,
    pub pinned: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
