use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::EligibleDonor;
use crate::entities::{prize_category_entity, prize_entity};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePrizeCategoryRequest {
    #[schema(example = "Grand")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PrizeCategoryResponse {
    pub id: i64,
    pub name: String,
}

impl From<prize_category_entity::Model> for PrizeCategoryResponse {
    fn from(m: prize_category_entity::Model) -> Self {
        PrizeCategoryResponse {
            id: m.id,
            name: m.name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePrizeRequest {
    #[schema(example = "Signed game cartridge")]
    pub name: String,
    pub category_id: Option<i64>,
    pub sort_key: Option<i32>,
    pub image: Option<String>,
    pub description: Option<String>,
    #[schema(example = "5.00")]
    pub minimum_bid: Option<Decimal>,
    #[schema(example = "5.00")]
    pub maximum_bid: Option<Decimal>,
    pub sum_donations: Option<bool>,
    pub random_draw: Option<bool>,
    pub event_id: i64,
    pub start_run_id: Option<i64>,
    pub end_run_id: Option<i64>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub provided_by: Option<String>,
    pub pinned: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatePrizeRequest {
    pub name: Option<String>,
    pub category_id: Option<i64>,
    pub sort_key: Option<i32>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub minimum_bid: Option<Decimal>,
    pub maximum_bid: Option<Decimal>,
    pub sum_donations: Option<bool>,
    pub random_draw: Option<bool>,
    pub start_run_id: Option<i64>,
    pub end_run_id: Option<i64>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub provided_by: Option<String>,
    pub pinned: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PrizeResponse {
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
}

impl From<prize_entity::Model> for PrizeResponse {
    fn from(m: prize_entity::Model) -> Self {
        PrizeResponse {
            id: m.id,
            name: m.name,
            category_id: m.category_id,
            sort_key: m.sort_key,
            image: m.image,
            description: m.description,
            minimum_bid: m.minimum_bid,
            maximum_bid: m.maximum_bid,
            sum_donations: m.sum_donations,
            random_draw: m.random_draw,
            event_id: m.event_id,
            start_run_id: m.start_run_id,
            end_run_id: m.end_run_id,
            start_time: m.start_time,
            end_time: m.end_time,
            winner_id: m.winner_id,
            pinned: m.pinned,
            provided_by: m.provided_by,
            email_sent: m.email_sent,
        }
    }
}

/// One entry of the ranked draw pool for a prize.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EligibleDonorResponse {
    pub donor: i64,
    pub amount: Decimal,
    pub weight: Decimal,
}

impl From<EligibleDonor> for EligibleDonorResponse {
    fn from(e: EligibleDonor) -> Self {
        EligibleDonorResponse {
            donor: e.donor,
            amount: e.amount,
            weight: e.weight,
        }
    }
}

/// Result of a persisted weighted draw.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DrawResultResponse {
    pub prize_id: i64,
    pub winner: EligibleDonorResponse,
    /// The pool the winner was drawn from, as ranked by the engine.
    pub pool: Vec<EligibleDonorResponse>,
}
