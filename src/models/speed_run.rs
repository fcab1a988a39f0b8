use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::speed_run_entity;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSpeedRunRequest {
    pub event_id: i64,
    #[schema(example = "Metroid Prime")]
    pub name: String,
    pub runners: Option<String>,
    pub sort_key: i32,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateSpeedRunRequest {
    pub name: Option<String>,
    pub runners: Option<String>,
    pub sort_key: Option<i32>,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SpeedRunResponse {
    pub id: i64,
    pub event_id: i64,
    pub name: String,
    pub runners: String,
    pub sort_key: i32,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl From<speed_run_entity::Model> for SpeedRunResponse {
    fn from(m: speed_run_entity::Model) -> Self {
        SpeedRunResponse {
            id: m.id,
            event_id: m.event_id,
            name: m.name,
            runners: m.runners,
            sort_key: m.sort_key,
            description: m.description,
            start_time: m.start_time,
            end_time: m.end_time,
        }
    }
}
