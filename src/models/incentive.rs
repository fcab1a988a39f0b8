use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{
    challenge_bid_entity, challenge_entity, choice_bid_entity, choice_entity,
    choice_option_entity, IncentiveState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateChallengeRequest {
    pub speed_run_id: i64,
    #[schema(example = "Kill the Animals")]
    pub name: String,
    #[schema(example = "500.00")]
    pub goal: Decimal,
    pub description: Option<String>,
    pub state: Option<IncentiveState>,
    pub pinned: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateChallengeRequest {
    pub name: Option<String>,
    pub goal: Option<Decimal>,
    pub description: Option<String>,
    pub state: Option<IncentiveState>,
    pub pinned: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChallengeResponse {
    pub id: i64,
    pub speed_run_id: i64,
    pub name: String,
    pub goal: Decimal,
    pub description: String,
    pub state: IncentiveState,
    pub pinned: bool,
}

impl From<challenge_entity::Model> for ChallengeResponse {
    fn from(m: challenge_entity::Model) -> Self {
        ChallengeResponse {
            id: m.id,
            speed_run_id: m.speed_run_id,
            name: m.name,
            goal: m.goal,
            description: m.description,
            state: m.state,
            pinned: m.pinned,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateChoiceRequest {
    pub speed_run_id: i64,
    #[schema(example = "Name the file")]
    pub name: String,
    pub description: Option<String>,
    pub state: Option<IncentiveState>,
    pub pinned: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateChoiceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub state: Option<IncentiveState>,
    pub pinned: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChoiceResponse {
    pub id: i64,
    pub speed_run_id: i64,
    pub name: String,
    pub description: String,
    pub state: IncentiveState,
    pub pinned: bool,
}

impl From<choice_entity::Model> for ChoiceResponse {
    fn from(m: choice_entity::Model) -> Self {
        ChoiceResponse {
            id: m.id,
            speed_run_id: m.speed_run_id,
            name: m.name,
            description: m.description,
            state: m.state,
            pinned: m.pinned,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateChoiceOptionRequest {
    pub choice_id: i64,
    #[schema(example = "MARIO")]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChoiceOptionResponse {
    pub id: i64,
    pub choice_id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<choice_option_entity::Model> for ChoiceOptionResponse {
    fn from(m: choice_option_entity::Model) -> Self {
        ChoiceOptionResponse {
            id: m.id,
            choice_id: m.choice_id,
            name: m.name,
            description: m.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateChallengeBidRequest {
    pub challenge_id: i64,
    pub donation_id: i64,
    #[schema(example = "10.00")]
    pub amount: Decimal,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChallengeBidResponse {
    pub id: i64,
    pub challenge_id: i64,
    pub donation_id: i64,
    pub amount: Decimal,
}

impl From<challenge_bid_entity::Model> for ChallengeBidResponse {
    fn from(m: challenge_bid_entity::Model) -> Self {
        ChallengeBidResponse {
            id: m.id,
            challenge_id: m.challenge_id,
            donation_id: m.donation_id,
            amount: m.amount,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateChoiceBidRequest {
    pub option_id: i64,
    pub donation_id: i64,
    #[schema(example = "10.00")]
    pub amount: Decimal,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChoiceBidResponse {
    pub id: i64,
    pub option_id: i64,
    pub donation_id: i64,
    pub amount: Decimal,
}

impl From<choice_bid_entity::Model> for ChoiceBidResponse {
    fn from(m: choice_bid_entity::Model) -> Self {
        ChoiceBidResponse {
            id: m.id,
            option_id: m.option_id,
            donation_id: m.donation_id,
            amount: m.amount,
        }
    }
}
