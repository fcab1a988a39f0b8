use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

use crate::models::*;
use crate::services::SpeedRunService;

#[utoipa::path(
    get,
    path = "/events/{event_id}/runs",
    tag = "runs",
    params(
        ("event_id" = i64, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event schedule in order", body = Vec<SpeedRunResponse>)
    )
)]
pub async fn list_runs(
    speed_run_service: web::Data<SpeedRunService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match speed_run_service.list_runs_for_event(path.into_inner()).await {
        Ok(runs) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": runs
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/runs/{id}",
    tag = "runs",
    params(
        ("id" = i64, Path, description = "Run id")
    ),
    responses(
        (status = 200, description = "Run details", body = SpeedRunResponse),
        (status = 404, description = "Run not found")
    )
)]
pub async fn get_run(
    speed_run_service: web::Data<SpeedRunService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match speed_run_service.get_run(path.into_inner()).await {
        Ok(run) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": run
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/runs",
    tag = "runs",
    request_body = CreateSpeedRunRequest,
    responses(
        (status = 201, description = "Run created", body = SpeedRunResponse),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Run name already in use within event")
    )
)]
pub async fn create_run(
    speed_run_service: web::Data<SpeedRunService>,
    request: web::Json<CreateSpeedRunRequest>,
) -> Result<HttpResponse> {
    match speed_run_service.create_run(request.into_inner()).await {
        Ok(run) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": run
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/runs/{id}",
    tag = "runs",
    params(
        ("id" = i64, Path, description = "Run id")
    ),
    request_body = UpdateSpeedRunRequest,
    responses(
        (status = 200, description = "Run updated", body = SpeedRunResponse),
        (status = 404, description = "Run not found")
    )
)]
pub async fn update_run(
    speed_run_service: web::Data<SpeedRunService>,
    path: web::Path<i64>,
    request: web::Json<UpdateSpeedRunRequest>,
) -> Result<HttpResponse> {
    match speed_run_service
        .update_run(path.into_inner(), request.into_inner())
        .await
    {
        Ok(run) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": run
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/runs/{id}",
    tag = "runs",
    params(
        ("id" = i64, Path, description = "Run id")
    ),
    responses(
        (status = 200, description = "Run deleted"),
        (status = 404, description = "Run not found")
    )
)]
pub async fn delete_run(
    speed_run_service: web::Data<SpeedRunService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match speed_run_service.delete_run(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

// Flat routes: incentive listings nest under /runs/{id}, so a /runs scope
// here would shadow them.
pub fn speed_run_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/events/{event_id}/runs", web::get().to(list_runs))
        .route("/runs", web::post().to(create_run))
        .route("/runs/{id}", web::get().to(get_run))
        .route("/runs/{id}", web::put().to(update_run))
        .route("/runs/{id}", web::delete().to(delete_run));
}
