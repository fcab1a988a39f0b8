use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::{
    BidState, CommentState, DonationDomain, IncentiveState, ReadState, TransactionState,
};
use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::events::list_events,
        handlers::events::get_event,
        handlers::events::create_event,
        handlers::events::update_event,
        handlers::events::delete_event,
        handlers::donors::list_donors,
        handlers::donors::get_donor,
        handlers::donors::create_donor,
        handlers::donors::update_donor,
        handlers::donors::delete_donor,
        handlers::speed_runs::list_runs,
        handlers::speed_runs::get_run,
        handlers::speed_runs::create_run,
        handlers::speed_runs::update_run,
        handlers::speed_runs::delete_run,
        handlers::donations::list_donations,
        handlers::donations::get_donation,
        handlers::donations::create_donation,
        handlers::donations::update_donation,
        handlers::donations::delete_donation,
        handlers::incentives::list_challenges,
        handlers::incentives::create_challenge,
        handlers::incentives::update_challenge,
        handlers::incentives::delete_challenge,
        handlers::incentives::list_choices,
        handlers::incentives::create_choice,
        handlers::incentives::update_choice,
        handlers::incentives::delete_choice,
        handlers::incentives::list_choice_options,
        handlers::incentives::create_choice_option,
        handlers::incentives::create_challenge_bid,
        handlers::incentives::delete_challenge_bid,
        handlers::incentives::create_choice_bid,
        handlers::incentives::delete_choice_bid,
        handlers::prizes::list_categories,
        handlers::prizes::create_category,
        handlers::prizes::list_prizes,
        handlers::prizes::get_prize,
        handlers::prizes::create_prize,
        handlers::prizes::update_prize,
        handlers::prizes::delete_prize,
        handlers::prizes::eligible_donors,
        handlers::prizes::draw_winner,
    ),
    components(
        schemas(
            CreateEventRequest,
            UpdateEventRequest,
            EventResponse,
            CreateDonorRequest,
            UpdateDonorRequest,
            DonorResponse,
            CreateSpeedRunRequest,
            UpdateSpeedRunRequest,
            SpeedRunResponse,
            CreateDonationRequest,
            UpdateDonationRequest,
            DonationResponse,
            DonationDomain,
            TransactionState,
            BidState,
            ReadState,
            CommentState,
            IncentiveState,
            CreateChallengeRequest,
            UpdateChallengeRequest,
            ChallengeResponse,
            CreateChoiceRequest,
            UpdateChoiceRequest,
            ChoiceResponse,
            CreateChoiceOptionRequest,
            ChoiceOptionResponse,
            CreateChallengeBidRequest,
            ChallengeBidResponse,
            CreateChoiceBidRequest,
            ChoiceBidResponse,
            CreatePrizeCategoryRequest,
            PrizeCategoryResponse,
            CreatePrizeRequest,
            UpdatePrizeRequest,
            PrizeResponse,
            EligibleDonorResponse,
            DrawResultResponse,
            ApiError,
            PaginationInfo,
            DonorPage,
            DonationPage,
        )
    ),
    tags(
        (name = "events", description = "Marathon event management"),
        (name = "donors", description = "Donor management"),
        (name = "runs", description = "Event schedule management"),
        (name = "donations", description = "Donation intake and processing"),
        (name = "incentives", description = "Challenges, choices and bids"),
        (name = "prizes", description = "Prize management and weighted draws"),
    ),
    info(
        title = "Marathon Tracker API",
        version = "1.0.0",
        description = "Donation tracking and prize drawing backend for charity speedrunning marathons"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
