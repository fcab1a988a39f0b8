use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

use crate::models::*;
use crate::services::DonationService;

#[utoipa::path(
    get,
    path = "/donations",
    tag = "donations",
    params(
        ("event_id" = Option<i64>, Query, description = "Restrict to one event"),
        ("donor_id" = Option<i64>, Query, description = "Restrict to one donor"),
        ("page" = Option<u32>, Query, description = "Page number"),
        ("per_page" = Option<u32>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Paginated donations, newest first", body = DonationPage)
    )
)]
pub async fn list_donations(
    donation_service: web::Data<DonationService>,
    query: web::Query<DonationQuery>,
) -> Result<HttpResponse> {
    match donation_service.list_donations(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": page
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/donations/{id}",
    tag = "donations",
    params(
        ("id" = i64, Path, description = "Donation id")
    ),
    responses(
        (status = 200, description = "Donation details", body = DonationResponse),
        (status = 404, description = "Donation not found")
    )
)]
pub async fn get_donation(
    donation_service: web::Data<DonationService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match donation_service.get_donation(path.into_inner()).await {
        Ok(donation) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": donation
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/donations",
    tag = "donations",
    request_body = CreateDonationRequest,
    responses(
        (status = 201, description = "Donation recorded", body = DonationResponse),
        (status = 400, description = "Amount not positive"),
        (status = 404, description = "Donor or event not found"),
        (status = 409, description = "Duplicate domain_id")
    )
)]
pub async fn create_donation(
    donation_service: web::Data<DonationService>,
    request: web::Json<CreateDonationRequest>,
) -> Result<HttpResponse> {
    match donation_service.create_donation(request.into_inner()).await {
        Ok(donation) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": donation
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/donations/{id}",
    tag = "donations",
    params(
        ("id" = i64, Path, description = "Donation id")
    ),
    request_body = UpdateDonationRequest,
    responses(
        (status = 200, description = "Donation updated", body = DonationResponse),
        (status = 400, description = "Amount below linked bid total"),
        (status = 404, description = "Donation not found")
    )
)]
pub async fn update_donation(
    donation_service: web::Data<DonationService>,
    path: web::Path<i64>,
    request: web::Json<UpdateDonationRequest>,
) -> Result<HttpResponse> {
    match donation_service
        .update_donation(path.into_inner(), request.into_inner())
        .await
    {
        Ok(donation) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": donation
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/donations/{id}",
    tag = "donations",
    params(
        ("id" = i64, Path, description = "Donation id")
    ),
    responses(
        (status = 200, description = "Donation deleted"),
        (status = 404, description = "Donation not found")
    )
)]
pub async fn delete_donation(
    donation_service: web::Data<DonationService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match donation_service.delete_donation(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn donation_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/donations")
            .route("", web::get().to(list_donations))
            .route("", web::post().to(create_donation))
            .route("/{id}", web::get().to(get_donation))
            .route("/{id}", web::put().to(update_donation))
            .route("/{id}", web::delete().to(delete_donation)),
    );
}
