use crate::domain::{check_bid_total, compute_domain_id, validators, BidKind, BidRef};
use crate::entities::{
    challenge_bid_entity as challenge_bids, choice_bid_entity as choice_bids,
    donation_entity as donations, donor_entity as donors, event_entity as events, DonationDomain,
};
use crate::error::{integrity, AppError, AppResult};
use crate::models::{
    CreateDonationRequest, DonationQuery, DonationResponse, PaginatedResponse, PaginationParams,
    UpdateDonationRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

#[derive(Clone)]
pub struct DonationService {
    pool: DatabaseConnection,
}

impl DonationService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_donations(
        &self,
        query: &DonationQuery,
    ) -> AppResult<PaginatedResponse<DonationResponse>> {
        let params = PaginationParams::new(query.page, query.per_page);

        let mut base = donations::Entity::find();
        if let Some(event_id) = query.event_id {
            base = base.filter(donations::Column::EventId.eq(event_id));
        }
        if let Some(donor_id) = query.donor_id {
            base = base.filter(donations::Column::DonorId.eq(donor_id));
        }

        let total = base.clone().count(&self.pool).await? as i64;

        let list = base
            .order_by_desc(donations::Column::TimeReceived)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;

        let items: Vec<DonationResponse> = list.into_iter().map(Into::into).collect();
        Ok(PaginatedResponse::new(items, &params, total))
    }

    pub async fn get_donation(&self, id: i64) -> AppResult<DonationResponse> {
        let model = self.find_donation(id).await?;
        Ok(model.into())
    }

    /// Commits a new donation:
    /// 1. amount must be positive and non-zero
    /// 2. donor and event must exist
    /// 3. an empty domain_id gets the deterministic default
    ///    (unix seconds of time_received + donor email), assigned exactly
    ///    once; the unique index rejects a concurrent duplicate
    pub async fn create_donation(&self, req: CreateDonationRequest) -> AppResult<DonationResponse> {
        validators::positive_nonzero(req.amount)?;

        let donor = donors::Entity::find_by_id(req.donor_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Donor {} not found", req.donor_id)))?;
        events::Entity::find_by_id(req.event_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", req.event_id)))?;

        let domain_id = match req.domain_id.filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => compute_domain_id(req.time_received, &donor.email),
        };

        let model = donations::ActiveModel {
            donor_id: Set(req.donor_id),
            event_id: Set(req.event_id),
            domain: Set(req.domain.unwrap_or(DonationDomain::Local)),
            domain_id: Set(domain_id),
            amount: Set(req.amount),
            time_received: Set(req.time_received),
            comment: Set(req.comment.unwrap_or_default()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| integrity(e, "Donation domain_id"))?;

        Ok(model.into())
    }

    /// Amount changes re-run the bid-total check against all linked bids;
    /// domain_id is never touched here.
    pub async fn update_donation(
        &self,
        id: i64,
        req: UpdateDonationRequest,
    ) -> AppResult<DonationResponse> {
        let model = self.find_donation(id).await?;

        if let Some(amount) = req.amount {
            validators::positive_nonzero(amount)?;
            let existing = self.linked_bids(id).await?;
            check_bid_total(amount, &existing, None)?;
        }

        let mut am = model.into_active_model();
        if let Some(amount) = req.amount {
            am.amount = Set(amount);
        }
        if let Some(state) = req.transaction_state {
            am.transaction_state = Set(state);
        }
        if let Some(state) = req.bid_state {
            am.bid_state = Set(state);
        }
        if let Some(state) = req.read_state {
            am.read_state = Set(state);
        }
        if let Some(state) = req.comment_state {
            am.comment_state = Set(state);
        }
        if let Some(comment) = req.comment {
            am.comment = Set(comment);
        }
        if let Some(mod_comment) = req.mod_comment {
            am.mod_comment = Set(mod_comment);
        }
        let updated = am.update(&self.pool).await?;
        Ok(updated.into())
    }

    pub async fn delete_donation(&self, id: i64) -> AppResult<()> {
        let model = self.find_donation(id).await?;
        donations::Entity::delete_by_id(model.id)
            .exec(&self.pool)
            .await?;
        Ok(())
    }

    /// All persisted bids (both kinds) linked to a donation, as seen by the
    /// consistency check.
    pub async fn linked_bids(&self, donation_id: i64) -> AppResult<Vec<BidRef>> {
        let mut refs = Vec::new();
        let challenge = challenge_bids::Entity::find()
            .filter(challenge_bids::Column::DonationId.eq(donation_id))
            .all(&self.pool)
            .await?;
        for bid in challenge {
            refs.push(BidRef::new(BidKind::Challenge, Some(bid.id), bid.amount));
        }
        let choice = choice_bids::Entity::find()
            .filter(choice_bids::Column::DonationId.eq(donation_id))
            .all(&self.pool)
            .await?;
        for bid in choice {
            refs.push(BidRef::new(BidKind::Choice, Some(bid.id), bid.amount));
        }
        Ok(refs)
    }

    async fn find_donation(&self, id: i64) -> AppResult<donations::Model> {
        donations::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Donation {id} not found")))
    }
}
