use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Origin of a donation record.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
#[serde(rename_all = "snake_case")]
pub enum DonationDomain {
    #[sea_orm(string_value = "local")]
    Local,
    #[sea_orm(string_value = "chipin")]
    Chipin,
    #[sea_orm(string_value = "paypal")]
    Paypal,
}

impl std::fmt::Display for DonationDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DonationDomain::Local => write!(f, "local"),
            DonationDomain::Chipin => write!(f, "chipin"),
            DonationDomain::Paypal => write!(f, "paypal"),
        }
    }
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
#[serde(rename_all = "snake_case")]
pub enum TransactionState {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    #[sea_orm(string_value = "flagged")]
    Flagged,
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
#[serde(rename_all = "snake_case")]
pub enum BidState {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "ignored")]
    Ignored,
    #[sea_orm(string_value = "processed")]
    Processed,
    #[sea_orm(string_value = "flagged")]
    Flagged,
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
#[serde(rename_all = "snake_case")]
pub enum ReadState {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "ignored")]
    Ignored,
    #[sea_orm(string_value = "read")]
    Read,
    #[sea_orm(string_value = "flagged")]
    Flagged,
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
#[serde(rename_all = "snake_case")]
pub enum CommentState {
    #[sea_orm(string_value = "absent")]
    Absent,
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "denied")]
    Denied,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "flagged")]
    Flagged,
}

/// A single donation. `domain_id` is the external transaction identity and
/// is globally unique; for local donations it is derived from the received
/// timestamp and the donor email at first save and never rewritten.
/// The four state columns advance independently of each other.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "donations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub donor_id: i64,
    pub event_id: i64,
    pub domain: DonationDomain,
    pub domain_id: String,
    pub transaction_state: TransactionState,
    pub bid_state: BidState,
    pub read_state: ReadState,
    pub comment_state: CommentState,
    pub amount: Decimal,
    pub time_received: DateTime<Utc>,
    pub comment: String,
    pub mod_comment: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
