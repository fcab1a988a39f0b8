use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::event_entity;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    #[schema(example = "agdq2026")]
    pub short: String,
    #[schema(example = "Awesome Marathon 2026")]
    pub name: String,
    pub receiver_name: Option<String>,
    pub use_paypal_sandbox: Option<bool>,
    #[schema(example = "donations@example.org")]
    pub paypal_email: String,
    pub schedule_id: Option<String>,
    pub schedule_datetime_field: Option<String>,
    pub schedule_game_field: Option<String>,
    pub schedule_runners_field: Option<String>,
    pub schedule_estimate_field: Option<String>,
    pub schedule_setup_field: Option<String>,
    pub schedule_commentators_field: Option<String>,
    pub schedule_comments_field: Option<String>,
    #[schema(example = "2026-01-04")]
    pub date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub receiver_name: Option<String>,
    pub use_paypal_sandbox: Option<bool>,
    pub paypal_email: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub id: i64,
    pub short: String,
    pub name: String,
    pub receiver_name: String,
    pub use_paypal_sandbox: bool,
    pub paypal_email: String,
    pub date: NaiveDate,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<event_entity::Model> for EventResponse {
    fn from(m: event_entity::Model) -> Self {
        EventResponse {
            id: m.id,
            short: m.short,
            name: m.name,
            receiver_name: m.receiver_name,
            use_paypal_sandbox: m.use_paypal_sandbox,
            paypal_email: m.paypal_email,
            date: m.date,
            created_at: m.created_at,
        }
    }
}
