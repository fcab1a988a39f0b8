use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{
    donation_entity, BidState, CommentState, DonationDomain, ReadState, TransactionState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateDonationRequest {
    pub donor_id: i64,
    pub event_id: i64,
    /// Defaults to "local"; payment collaborators pass their own domain.
    pub domain: Option<DonationDomain>,
    /// External transaction id; left empty for local donations and derived
    /// from time_received + donor email at commit.
    pub domain_id: Option<String>,
    #[schema(example = "25.00")]
    pub amount: Decimal,
    pub time_received: DateTime<Utc>,
    pub comment: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateDonationRequest {
    pub amount: Option<Decimal>,
    pub transaction_state: Option<TransactionState>,
    pub bid_state: Option<BidState>,
    pub read_state: Option<ReadState>,
    pub comment_state: Option<CommentState>,
    pub comment: Option<String>,
    pub mod_comment: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DonationQuery {
    pub event_id: Option<i64>,
    pub donor_id: Option<i64>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DonationResponse {
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
}

impl From<donation_entity::Model> for DonationResponse {
    fn from(m: donation_entity::Model) -> Self {
        DonationResponse {
            id: m.id,
            donor_id: m.donor_id,
            event_id: m.event_id,
            domain: m.domain,
            domain_id: m.domain_id,
            transaction_state: m.transaction_state,
            bid_state: m.bid_state,
            read_state: m.read_state,
            comment_state: m.comment_state,
            amount: m.amount,
            time_received: m.time_received,
            comment: m.comment,
            mod_comment: m.mod_comment,
        }
    }
}
