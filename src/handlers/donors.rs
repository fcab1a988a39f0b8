use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

use crate::models::*;
use crate::services::DonorService;

#[utoipa::path(
    get,
    path = "/donors",
    tag = "donors",
    params(
        ("page" = Option<u32>, Query, description = "Page number"),
        ("per_page" = Option<u32>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Paginated donor list", body = DonorPage)
    )
)]
pub async fn list_donors(
    donor_service: web::Data<DonorService>,
    query: web::Query<DonorQuery>,
) -> Result<HttpResponse> {
    match donor_service.list_donors(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": page
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/donors/{id}",
    tag = "donors",
    params(
        ("id" = i64, Path, description = "Donor id")
    ),
    responses(
        (status = 200, description = "Donor details", body = DonorResponse),
        (status = 404, description = "Donor not found")
    )
)]
pub async fn get_donor(
    donor_service: web::Data<DonorService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match donor_service.get_donor(path.into_inner()).await {
        Ok(donor) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": donor
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/donors",
    tag = "donors",
    request_body = CreateDonorRequest,
    responses(
        (status = 201, description = "Donor created", body = DonorResponse),
        (status = 409, description = "Email or alias already in use")
    )
)]
pub async fn create_donor(
    donor_service: web::Data<DonorService>,
    request: web::Json<CreateDonorRequest>,
) -> Result<HttpResponse> {
    match donor_service.create_donor(request.into_inner()).await {
        Ok(donor) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": donor
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/donors/{id}",
    tag = "donors",
    params(
        ("id" = i64, Path, description = "Donor id")
    ),
    request_body = UpdateDonorRequest,
    responses(
        (status = 200, description = "Donor updated", body = DonorResponse),
        (status = 404, description = "Donor not found"),
        (status = 409, description = "Email or alias already in use")
    )
)]
pub async fn update_donor(
    donor_service: web::Data<DonorService>,
    path: web::Path<i64>,
    request: web::Json<UpdateDonorRequest>,
) -> Result<HttpResponse> {
    match donor_service
        .update_donor(path.into_inner(), request.into_inner())
        .await
    {
        Ok(donor) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": donor
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/donors/{id}",
    tag = "donors",
    params(
        ("id" = i64, Path, description = "Donor id")
    ),
    responses(
        (status = 200, description = "Donor deleted"),
        (status = 404, description = "Donor not found")
    )
)]
pub async fn delete_donor(
    donor_service: web::Data<DonorService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match donor_service.delete_donor(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn donor_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/donors")
            .route("", web::get().to(list_donors))
            .route("", web::post().to(create_donor))
            .route("/{id}", web::get().to(get_donor))
            .route("/{id}", web::put().to(update_donor))
            .route("/{id}", web::delete().to(delete_donor)),
    );
}
