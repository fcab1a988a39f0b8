use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

use crate::models::*;
use crate::services::PrizeService;

#[derive(Debug, serde::Deserialize)]
pub struct PrizeListQuery {
    pub event_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/prize-categories",
    tag = "prizes",
    responses(
        (status = 200, description = "List prize categories", body = Vec<PrizeCategoryResponse>)
    )
)]
pub async fn list_categories(prize_service: web::Data<PrizeService>) -> Result<HttpResponse> {
    match prize_service.list_categories().await {
        Ok(categories) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": categories
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/prize-categories",
    tag = "prizes",
    request_body = CreatePrizeCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = PrizeCategoryResponse),
        (status = 409, description = "Category name already in use")
    )
)]
pub async fn create_category(
    prize_service: web::Data<PrizeService>,
    request: web::Json<CreatePrizeCategoryRequest>,
) -> Result<HttpResponse> {
    match prize_service.create_category(request.into_inner()).await {
        Ok(category) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": category
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/prizes",
    tag = "prizes",
    params(
        ("event_id" = Option<i64>, Query, description = "Restrict to one event")
    ),
    responses(
        (status = 200, description = "List prizes", body = Vec<PrizeResponse>)
    )
)]
pub async fn list_prizes(
    prize_service: web::Data<PrizeService>,
    query: web::Query<PrizeListQuery>,
) -> Result<HttpResponse> {
    match prize_service.list_prizes(query.event_id).await {
        Ok(prizes) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": prizes
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/prizes/{id}",
    tag = "prizes",
    params(
        ("id" = i64, Path, description = "Prize id")
    ),
    responses(
        (status = 200, description = "Prize details", body = PrizeResponse),
        (status = 404, description = "Prize not found")
    )
)]
pub async fn get_prize(
    prize_service: web::Data<PrizeService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match prize_service.get_prize(path.into_inner()).await {
        Ok(prize) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": prize
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/prizes",
    tag = "prizes",
    request_body = CreatePrizeRequest,
    responses(
        (status = 201, description = "Prize created", body = PrizeResponse),
        (status = 400, description = "Window or bid band invalid"),
        (status = 404, description = "Event or run not found"),
        (status = 409, description = "Prize name already in use")
    )
)]
pub async fn create_prize(
    prize_service: web::Data<PrizeService>,
    request: web::Json<CreatePrizeRequest>,
) -> Result<HttpResponse> {
    match prize_service.create_prize(request.into_inner()).await {
        Ok(prize) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": prize
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/prizes/{id}",
    tag = "prizes",
    params(
        ("id" = i64, Path, description = "Prize id")
    ),
    request_body = UpdatePrizeRequest,
    responses(
        (status = 200, description = "Prize updated", body = PrizeResponse),
        (status = 400, description = "Window or bid band invalid"),
        (status = 404, description = "Prize not found")
    )
)]
pub async fn update_prize(
    prize_service: web::Data<PrizeService>,
    path: web::Path<i64>,
    request: web::Json<UpdatePrizeRequest>,
) -> Result<HttpResponse> {
    match prize_service
        .update_prize(path.into_inner(), request.into_inner())
        .await
    {
        Ok(prize) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": prize
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/prizes/{id}",
    tag = "prizes",
    params(
        ("id" = i64, Path, description = "Prize id")
    ),
    responses(
        (status = 200, description = "Prize deleted"),
        (status = 404, description = "Prize not found")
    )
)]
pub async fn delete_prize(
    prize_service: web::Data<PrizeService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match prize_service.delete_prize(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/prizes/{id}/eligible",
    tag = "prizes",
    params(
        ("id" = i64, Path, description = "Prize id")
    ),
    responses(
        (status = 200, description = "Ranked draw pool for the prize", body = Vec<EligibleDonorResponse>),
        (status = 404, description = "Prize not found")
    )
)]
pub async fn eligible_donors(
    prize_service: web::Data<PrizeService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match prize_service.eligible_donors(path.into_inner()).await {
        Ok(pool) => {
            let pool: Vec<EligibleDonorResponse> = pool.into_iter().map(Into::into).collect();
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "data": pool
            })))
        }
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/prizes/{id}/draw",
    tag = "prizes",
    params(
        ("id" = i64, Path, description = "Prize id")
    ),
    responses(
        (status = 200, description = "Winner drawn and persisted", body = DrawResultResponse),
        (status = 400, description = "No eligible donors"),
        (status = 404, description = "Prize not found"),
        (status = 409, description = "Donor already won in this category at this event")
    )
)]
pub async fn draw_winner(
    prize_service: web::Data<PrizeService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match prize_service.draw_winner(path.into_inner()).await {
        Ok(result) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": result
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn prize_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/prize-categories")
            .route("", web::get().to(list_categories))
            .route("", web::post().to(create_category)),
    )
    .service(
        web::scope("/prizes")
            .route("", web::get().to(list_prizes))
            .route("", web::post().to(create_prize))
            .route("/{id}", web::get().to(get_prize))
            .route("/{id}", web::put().to(update_prize))
            .route("/{id}", web::delete().to(delete_prize))
            .route("/{id}/eligible", web::get().to(eligible_donors))
            .route("/{id}/draw", web::post().to(draw_winner)),
    );
}
