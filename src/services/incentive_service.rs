use crate::domain::{check_bid_total, BidKind, BidRef};
use crate::entities::{
    challenge_bid_entity as challenge_bids, challenge_entity as challenges,
    choice_bid_entity as choice_bids, choice_entity as choices,
    choice_option_entity as choice_options, donation_entity as donations,
    speed_run_entity as runs, IncentiveState,
};
use crate::error::{integrity, AppError, AppResult};
use crate::models::{
    ChallengeBidResponse, ChallengeResponse, ChoiceBidResponse, ChoiceOptionResponse,
    ChoiceResponse, CreateChallengeBidRequest, CreateChallengeRequest, CreateChoiceBidRequest,
    CreateChoiceOptionRequest, CreateChoiceRequest, UpdateChallengeRequest, UpdateChoiceRequest,
};
use crate::services::DonationService;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

/// Challenges, choices, their options, and the bids that earmark donation
/// money toward them. Every bid insert runs the donation consistency check
/// first.
#[derive(Clone)]
pub struct IncentiveService {
    pool: DatabaseConnection,
    donation_service: DonationService,
}

impl IncentiveService {
    pub fn new(pool: DatabaseConnection, donation_service: DonationService) -> Self {
        Self {
            pool,
            donation_service,
        }
    }

    // -----------------------------
    // challenges
    // -----------------------------

    pub async fn list_challenges_for_run(&self, run_id: i64) -> AppResult<Vec<ChallengeResponse>> {
        let list = challenges::Entity::find()
            .filter(challenges::Column::SpeedRunId.eq(run_id))
            .order_by_asc(challenges::Column::Name)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn create_challenge(&self, req: CreateChallengeRequest) -> AppResult<ChallengeResponse> {
        self.find_run(req.speed_run_id).await?;

        let model = challenges::ActiveModel {
            speed_run_id: Set(req.speed_run_id),
            name: Set(req.name),
            goal: Set(req.goal),
            description: Set(req.description.unwrap_or_default()),
            state: Set(req.state.unwrap_or(IncentiveState::Hidden)),
            pinned: Set(req.pinned.unwrap_or(false)),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| integrity(e, "Challenge name within run"))?;

        Ok(model.into())
    }

    pub async fn update_challenge(
        &self,
        id: i64,
        req: UpdateChallengeRequest,
    ) -> AppResult<ChallengeResponse> {
        let model = challenges::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Challenge {id} not found")))?;

        let mut am = model.into_active_model();
        if let Some(name) = req.name {
            am.name = Set(name);
        }
        if let Some(goal) = req.goal {
            am.goal = Set(goal);
        }
        if let Some(description) = req.description {
            am.description = Set(description);
        }
        if let Some(state) = req.state {
            am.state = Set(state);
        }
        if let Some(pinned) = req.pinned {
            am.pinned = Set(pinned);
        }
        let updated = am
            .update(&self.pool)
            .await
            .map_err(|e| integrity(e, "Challenge name within run"))?;
        Ok(updated.into())
    }

    pub async fn delete_challenge(&self, id: i64) -> AppResult<()> {
        let res = challenges::Entity::delete_by_id(id).exec(&self.pool).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Challenge {id} not found")));
        }
        Ok(())
    }

    // -----------------------------
    // choices and options
    // -----------------------------

    pub async fn list_choices_for_run(&self, run_id: i64) -> AppResult<Vec<ChoiceResponse>> {
        let list = choices::Entity::find()
            .filter(choices::Column::SpeedRunId.eq(run_id))
            .order_by_asc(choices::Column::Name)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn create_choice(&self, req: CreateChoiceRequest) -> AppResult<ChoiceResponse> {
        self.find_run(req.speed_run_id).await?;

        let model = choices::ActiveModel {
            speed_run_id: Set(req.speed_run_id),
            name: Set(req.name),
            description: Set(req.description.unwrap_or_default()),
            state: Set(req.state.unwrap_or(IncentiveState::Hidden)),
            pinned: Set(req.pinned.unwrap_or(false)),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| integrity(e, "Choice name within run"))?;

        Ok(model.into())
    }

    pub async fn update_choice(&self, id: i64, req: UpdateChoiceRequest) -> AppResult<ChoiceResponse> {
        let model = choices::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Choice {id} not found")))?;

        let mut am = model.into_active_model();
        if let Some(name) = req.name {
            am.name = Set(name);
        }
        if let Some(description) = req.description {
            am.description = Set(description);
        }
        if let Some(state) = req.state {
            am.state = Set(state);
        }
        if let Some(pinned) = req.pinned {
            am.pinned = Set(pinned);
        }
        let updated = am
            .update(&self.pool)
            .await
            .map_err(|e| integrity(e, "Choice name within run"))?;
        Ok(updated.into())
    }

    pub async fn delete_choice(&self, id: i64) -> AppResult<()> {
        let res = choices::Entity::delete_by_id(id).exec(&self.pool).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Choice {id} not found")));
        }
        Ok(())
    }

    pub async fn list_options_for_choice(&self, choice_id: i64) -> AppResult<Vec<ChoiceOptionResponse>> {
        let list = choice_options::Entity::find()
            .filter(choice_options::Column::ChoiceId.eq(choice_id))
            .order_by_asc(choice_options::Column::Name)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn create_choice_option(
        &self,
        req: CreateChoiceOptionRequest,
    ) -> AppResult<ChoiceOptionResponse> {
        choices::Entity::find_by_id(req.choice_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Choice {} not found", req.choice_id)))?;

        let model = choice_options::ActiveModel {
            choice_id: Set(req.choice_id),
            name: Set(req.name),
            description: Set(req.description),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| integrity(e, "Option name within choice"))?;

        Ok(model.into())
    }

    // -----------------------------
    // bids
    // -----------------------------

    /// Links donation money to a challenge:
    /// 1. challenge and donation must exist
    /// 2. the bid-total invariant is re-checked with this bid as candidate
    /// 3. only then is the row written
    pub async fn create_challenge_bid(
        &self,
        req: CreateChallengeBidRequest,
    ) -> AppResult<ChallengeBidResponse> {
        challenges::Entity::find_by_id(req.challenge_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Challenge {} not found", req.challenge_id))
            })?;
        let donation = self.find_donation(req.donation_id).await?;

        let existing = self.donation_service.linked_bids(req.donation_id).await?;
        let candidate = BidRef::new(BidKind::Challenge, None, req.amount);
        check_bid_total(donation.amount, &existing, Some(&candidate))?;

        let model = challenge_bids::ActiveModel {
            challenge_id: Set(req.challenge_id),
            donation_id: Set(req.donation_id),
            amount: Set(req.amount),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(model.into())
    }

    /// Same flow as challenge bids, against a choice option.
    pub async fn create_choice_bid(
        &self,
        req: CreateChoiceBidRequest,
    ) -> AppResult<ChoiceBidResponse> {
        choice_options::Entity::find_by_id(req.option_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Option {} not found", req.option_id)))?;
        let donation = self.find_donation(req.donation_id).await?;

        let existing = self.donation_service.linked_bids(req.donation_id).await?;
        let candidate = BidRef::new(BidKind::Choice, None, req.amount);
        check_bid_total(donation.amount, &existing, Some(&candidate))?;

        let model = choice_bids::ActiveModel {
            option_id: Set(req.option_id),
            donation_id: Set(req.donation_id),
            amount: Set(req.amount),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(model.into())
    }

    pub async fn delete_challenge_bid(&self, id: i64) -> AppResult<()> {
        let res = challenge_bids::Entity::delete_by_id(id)
            .exec(&self.pool)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Challenge bid {id} not found")));
        }
        Ok(())
    }

    pub async fn delete_choice_bid(&self, id: i64) -> AppResult<()> {
        let res = choice_bids::Entity::delete_by_id(id).exec(&self.pool).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Choice bid {id} not found")));
        }
        Ok(())
    }

    async fn find_run(&self, id: i64) -> AppResult<runs::Model> {
        runs::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Run {id} not found")))
    }

    async fn find_donation(&self, id: i64) -> AppResult<donations::Model> {
        donations::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Donation {id} not found")))
    }
}
