use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::donor_entity;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateDonorRequest {
    #[schema(example = "runner@example.com")]
    pub email: String,
    pub alias: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub anonymous: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateDonorRequest {
    pub email: Option<String>,
    pub alias: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub anonymous: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DonorQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DonorResponse {
    pub id: i64,
    pub email: String,
    pub alias: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub anonymous: bool,
    pub display_name: String,
}

impl From<donor_entity::Model> for DonorResponse {
    fn from(m: donor_entity::Model) -> Self {
        let display_name = m.display_name();
        DonorResponse {
            id: m.id,
            email: m.email,
            alias: m.alias,
            first_name: m.first_name,
            last_name: m.last_name,
            anonymous: m.anonymous,
            display_name,
        }
    }
}
