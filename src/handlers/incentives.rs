use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

use crate::models::*;
use crate::services::IncentiveService;

#[utoipa::path(
    get,
    path = "/runs/{run_id}/challenges",
    tag = "incentives",
    params(
        ("run_id" = i64, Path, description = "Run id")
    ),
    responses(
        (status = 200, description = "Challenges attached to the run", body = Vec<ChallengeResponse>)
    )
)]
pub async fn list_challenges(
    incentive_service: web::Data<IncentiveService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match incentive_service
        .list_challenges_for_run(path.into_inner())
        .await
    {
        Ok(challenges) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": challenges
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/challenges",
    tag = "incentives",
    request_body = CreateChallengeRequest,
    responses(
        (status = 201, description = "Challenge created", body = ChallengeResponse),
        (status = 404, description = "Run not found"),
        (status = 409, description = "Challenge name already in use within run")
    )
)]
pub async fn create_challenge(
    incentive_service: web::Data<IncentiveService>,
    request: web::Json<CreateChallengeRequest>,
) -> Result<HttpResponse> {
    match incentive_service.create_challenge(request.into_inner()).await {
        Ok(challenge) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": challenge
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/challenges/{id}",
    tag = "incentives",
    params(
        ("id" = i64, Path, description = "Challenge id")
    ),
    request_body = UpdateChallengeRequest,
    responses(
        (status = 200, description = "Challenge updated", body = ChallengeResponse),
        (status = 404, description = "Challenge not found")
    )
)]
pub async fn update_challenge(
    incentive_service: web::Data<IncentiveService>,
    path: web::Path<i64>,
    request: web::Json<UpdateChallengeRequest>,
) -> Result<HttpResponse> {
    match incentive_service
        .update_challenge(path.into_inner(), request.into_inner())
        .await
    {
        Ok(challenge) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": challenge
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/challenges/{id}",
    tag = "incentives",
    params(
        ("id" = i64, Path, description = "Challenge id")
    ),
    responses(
        (status = 200, description = "Challenge deleted"),
        (status = 404, description = "Challenge not found")
    )
)]
pub async fn delete_challenge(
    incentive_service: web::Data<IncentiveService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match incentive_service.delete_challenge(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/runs/{run_id}/choices",
    tag = "incentives",
    params(
        ("run_id" = i64, Path, description = "Run id")
    ),
    responses(
        (status = 200, description = "Choices attached to the run", body = Vec<ChoiceResponse>)
    )
)]
pub async fn list_choices(
    incentive_service: web::Data<IncentiveService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match incentive_service
        .list_choices_for_run(path.into_inner())
        .await
    {
        Ok(choices) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": choices
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/choices",
    tag = "incentives",
    request_body = CreateChoiceRequest,
    responses(
        (status = 201, description = "Choice created", body = ChoiceResponse),
        (status = 404, description = "Run not found"),
        (status = 409, description = "Choice name already in use within run")
    )
)]
pub async fn create_choice(
    incentive_service: web::Data<IncentiveService>,
    request: web::Json<CreateChoiceRequest>,
) -> Result<HttpResponse> {
    match incentive_service.create_choice(request.into_inner()).await {
        Ok(choice) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": choice
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/choices/{id}",
    tag = "incentives",
    params(
        ("id" = i64, Path, description = "Choice id")
    ),
    request_body = UpdateChoiceRequest,
    responses(
        (status = 200, description = "Choice updated", body = ChoiceResponse),
        (status = 404, description = "Choice not found")
    )
)]
pub async fn update_choice(
    incentive_service: web::Data<IncentiveService>,
    path: web::Path<i64>,
    request: web::Json<UpdateChoiceRequest>,
) -> Result<HttpResponse> {
    match incentive_service
        .update_choice(path.into_inner(), request.into_inner())
        .await
    {
        Ok(choice) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": choice
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/choices/{id}",
    tag = "incentives",
    params(
        ("id" = i64, Path, description = "Choice id")
    ),
    responses(
        (status = 200, description = "Choice deleted"),
        (status = 404, description = "Choice not found")
    )
)]
pub async fn delete_choice(
    incentive_service: web::Data<IncentiveService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match incentive_service.delete_choice(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/choices/{choice_id}/options",
    tag = "incentives",
    params(
        ("choice_id" = i64, Path, description = "Choice id")
    ),
    responses(
        (status = 200, description = "Options of the choice", body = Vec<ChoiceOptionResponse>)
    )
)]
pub async fn list_choice_options(
    incentive_service: web::Data<IncentiveService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match incentive_service
        .list_options_for_choice(path.into_inner())
        .await
    {
        Ok(options) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": options
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/choice-options",
    tag = "incentives",
    request_body = CreateChoiceOptionRequest,
    responses(
        (status = 201, description = "Option created", body = ChoiceOptionResponse),
        (status = 404, description = "Choice not found"),
        (status = 409, description = "Option name already in use within choice")
    )
)]
pub async fn create_choice_option(
    incentive_service: web::Data<IncentiveService>,
    request: web::Json<CreateChoiceOptionRequest>,
) -> Result<HttpResponse> {
    match incentive_service
        .create_choice_option(request.into_inner())
        .await
    {
        Ok(option) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": option
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/challenge-bids",
    tag = "incentives",
    request_body = CreateChallengeBidRequest,
    responses(
        (status = 201, description = "Bid recorded", body = ChallengeBidResponse),
        (status = 400, description = "Bid total would exceed donation amount"),
        (status = 404, description = "Challenge or donation not found")
    )
)]
pub async fn create_challenge_bid(
    incentive_service: web::Data<IncentiveService>,
    request: web::Json<CreateChallengeBidRequest>,
) -> Result<HttpResponse> {
    match incentive_service
        .create_challenge_bid(request.into_inner())
        .await
    {
        Ok(bid) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": bid
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/challenge-bids/{id}",
    tag = "incentives",
    params(
        ("id" = i64, Path, description = "Challenge bid id")
    ),
    responses(
        (status = 200, description = "Bid deleted"),
        (status = 404, description = "Bid not found")
    )
)]
pub async fn delete_challenge_bid(
    incentive_service: web::Data<IncentiveService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match incentive_service
        .delete_challenge_bid(path.into_inner())
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/choice-bids",
    tag = "incentives",
    request_body = CreateChoiceBidRequest,
    responses(
        (status = 201, description = "Bid recorded", body = ChoiceBidResponse),
        (status = 400, description = "Bid total would exceed donation amount"),
        (status = 404, description = "Option or donation not found")
    )
)]
pub async fn create_choice_bid(
    incentive_service: web::Data<IncentiveService>,
    request: web::Json<CreateChoiceBidRequest>,
) -> Result<HttpResponse> {
    match incentive_service.create_choice_bid(request.into_inner()).await {
        Ok(bid) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": bid
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/choice-bids/{id}",
    tag = "incentives",
    params(
        ("id" = i64, Path, description = "Choice bid id")
    ),
    responses(
        (status = 200, description = "Bid deleted"),
        (status = 404, description = "Bid not found")
    )
)]
pub async fn delete_choice_bid(
    incentive_service: web::Data<IncentiveService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match incentive_service.delete_choice_bid(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn incentive_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/runs/{run_id}/challenges", web::get().to(list_challenges))
        .route("/runs/{run_id}/choices", web::get().to(list_choices))
        .service(
            web::scope("/challenges")
                .route("", web::post().to(create_challenge))
                .route("/{id}", web::put().to(update_challenge))
                .route("/{id}", web::delete().to(delete_challenge)),
        )
        .service(
            web::scope("/choices")
                .route("", web::post().to(create_choice))
                .route("/{choice_id}/options", web::get().to(list_choice_options))
                .route("/{id}", web::put().to(update_choice))
                .route("/{id}", web::delete().to(delete_choice)),
        )
        .route("/choice-options", web::post().to(create_choice_option))
        .service(
            web::scope("/challenge-bids")
                .route("", web::post().to(create_challenge_bid))
                .route("/{id}", web::delete().to(delete_challenge_bid)),
        )
        .service(
            web::scope("/choice-bids")
                .route("", web::post().to(create_choice_bid))
                .route("/{id}", web::delete().to(delete_choice_bid)),
        );
}
