use std::collections::HashSet;

use crate::domain::{
    eligible_donors, validate_prize, CandidateDonation, DrawSettings, EligibleDonor, PrizeDraft,
    RunRef,
};
use crate::entities::{
    donation_entity as donations, event_entity as events, prize_category_entity as categories,
    prize_entity as prizes, speed_run_entity as runs,
};
use crate::error::{integrity, AppError, AppResult};
use crate::models::{
    CreatePrizeCategoryRequest, CreatePrizeRequest, DrawResultResponse, PrizeCategoryResponse,
    PrizeResponse, UpdatePrizeRequest,
};
use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set,
};

#[derive(Clone)]
pub struct PrizeService {
    pool: DatabaseConnection,
}

impl PrizeService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    // -----------------------------
    // categories
    // -----------------------------

    pub async fn list_categories(&self) -> AppResult<Vec<PrizeCategoryResponse>> {
        let list = categories::Entity::find()
            .order_by_asc(categories::Column::Name)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn create_category(
        &self,
        req: CreatePrizeCategoryRequest,
    ) -> AppResult<PrizeCategoryResponse> {
        let model = categories::ActiveModel {
            name: Set(req.name),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| integrity(e, "Category name"))?;
        Ok(model.into())
    }

    // -----------------------------
    // prizes
    // -----------------------------

    pub async fn list_prizes(&self, event_id: Option<i64>) -> AppResult<Vec<PrizeResponse>> {
        let mut q = prizes::Entity::find();
        if let Some(event_id) = event_id {
            q = q.filter(prizes::Column::EventId.eq(event_id));
        }
        let list = q
            .order_by_asc(prizes::Column::SortKey)
            .order_by_asc(prizes::Column::Name)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn get_prize(&self, id: i64) -> AppResult<PrizeResponse> {
        let model = self.find_prize(id).await?;
        Ok(model.into())
    }

    /// All prize invariants run before the insert: window pairs
    /// all-or-nothing and mutually exclusive, runs from the prize's event
    /// and ordered, bid band sane.
    pub async fn create_prize(&self, req: CreatePrizeRequest) -> AppResult<PrizeResponse> {
        events::Entity::find_by_id(req.event_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", req.event_id)))?;

        let default_bid = Decimal::new(500, 2);
        let minimum_bid = req.minimum_bid.unwrap_or(default_bid);
        let maximum_bid = req.maximum_bid.unwrap_or(default_bid);
        let sum_donations = req.sum_donations.unwrap_or(false);

        let draft = PrizeDraft {
            event_id: req.event_id,
            start_run: self.run_ref(req.start_run_id).await?,
            end_run: self.run_ref(req.end_run_id).await?,
            start_time: req.start_time,
            end_time: req.end_time,
            minimum_bid,
            maximum_bid,
            sum_donations,
        };
        validate_prize(&draft)?;

        let model = prizes::ActiveModel {
            name: Set(req.name),
            category_id: Set(req.category_id),
            sort_key: Set(req.sort_key.unwrap_or(0)),
            image: Set(req.image),
            description: Set(req.description.unwrap_or_default()),
            minimum_bid: Set(minimum_bid),
            maximum_bid: Set(maximum_bid),
            sum_donations: Set(sum_donations),
            random_draw: Set(req.random_draw.unwrap_or(true)),
            event_id: Set(req.event_id),
            start_run_id: Set(req.start_run_id),
            end_run_id: Set(req.end_run_id),
            start_time: Set(req.start_time),
            end_time: Set(req.end_time),
            provided_by: Set(req.provided_by.unwrap_or_default()),
            pinned: Set(req.pinned.unwrap_or(false)),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| integrity(e, "Prize name"))?;

        Ok(model.into())
    }

    /// Merges the patch over the stored row, re-validates the result as a
    /// whole, then writes it.
    pub async fn update_prize(&self, id: i64, req: UpdatePrizeRequest) -> AppResult<PrizeResponse> {
        let model = self.find_prize(id).await?;

        let minimum_bid = req.minimum_bid.unwrap_or(model.minimum_bid);
        let maximum_bid = req.maximum_bid.unwrap_or(model.maximum_bid);
        let sum_donations = req.sum_donations.unwrap_or(model.sum_donations);
        let start_run_id = req.start_run_id.or(model.start_run_id);
        let end_run_id = req.end_run_id.or(model.end_run_id);
        let start_time = req.start_time.or(model.start_time);
        let end_time = req.end_time.or(model.end_time);

        let draft = PrizeDraft {
            event_id: model.event_id,
            start_run: self.run_ref(start_run_id).await?,
            end_run: self.run_ref(end_run_id).await?,
            start_time,
            end_time,
            minimum_bid,
            maximum_bid,
            sum_donations,
        };
        validate_prize(&draft)?;

        let category_id = req.category_id.or(model.category_id);
        let mut am = model.into_active_model();
        if let Some(name) = req.name {
            am.name = Set(name);
        }
        am.category_id = Set(category_id);
        if let Some(sort_key) = req.sort_key {
            am.sort_key = Set(sort_key);
        }
        if let Some(image) = req.image {
            am.image = Set(Some(image));
        }
        if let Some(description) = req.description {
            am.description = Set(description);
        }
        am.minimum_bid = Set(minimum_bid);
        am.maximum_bid = Set(maximum_bid);
        am.sum_donations = Set(sum_donations);
        if let Some(random_draw) = req.random_draw {
            am.random_draw = Set(random_draw);
        }
        am.start_run_id = Set(start_run_id);
        am.end_run_id = Set(end_run_id);
        am.start_time = Set(start_time);
        am.end_time = Set(end_time);
        if let Some(provided_by) = req.provided_by {
            am.provided_by = Set(provided_by);
        }
        if let Some(pinned) = req.pinned {
            am.pinned = Set(pinned);
        }
        let updated = am
            .update(&self.pool)
            .await
            .map_err(|e| integrity(e, "Prize name"))?;
        Ok(updated.into())
    }

    pub async fn delete_prize(&self, id: i64) -> AppResult<()> {
        let model = self.find_prize(id).await?;
        prizes::Entity::delete_by_id(model.id)
            .exec(&self.pool)
            .await?;
        Ok(())
    }

    // -----------------------------
    // eligibility and draw
    // -----------------------------

    /// Ranked draw pool for a prize. Pure read: gathers the window-filtered
    /// event donations and the outside-category winner set, then hands both
    /// to the eligibility engine.
    pub async fn eligible_donors(&self, prize_id: i64) -> AppResult<Vec<EligibleDonor>> {
        let prize = self.find_prize(prize_id).await?;
        self.eligible_donors_for(&prize).await
    }

    /// Draws and persists a winner:
    /// 1. rank the pool via the eligibility engine
    /// 2. random_draw prizes sample proportionally to weight; otherwise the
    ///    pool is already the single top donor
    /// 3. persist winner_id; the (category, winner, event) unique key
    ///    rejects a donor who already won in this category at this event
    pub async fn draw_winner(&self, prize_id: i64) -> AppResult<DrawResultResponse> {
        let prize = self.find_prize(prize_id).await?;
        let pool = self.eligible_donors_for(&prize).await?;
        if pool.is_empty() {
            return Err(AppError::ValidationError(
                "No donors are eligible for this prize".into(),
            ));
        }

        let winner = if prize.random_draw {
            pick_weighted(&pool)?
        } else {
            pool[0].clone()
        };

        let mut am = prize.into_active_model();
        am.winner_id = Set(Some(winner.donor));
        am.update(&self.pool)
            .await
            .map_err(|e| integrity(e, "Prize winner within category and event"))?;

        Ok(DrawResultResponse {
            prize_id,
            winner: winner.into(),
            pool: pool.into_iter().map(Into::into).collect(),
        })
    }

    async fn eligible_donors_for(&self, prize: &prizes::Model) -> AppResult<Vec<EligibleDonor>> {
        let window = self.eligibility_window(prize).await?;

        let mut q = donations::Entity::find().filter(donations::Column::EventId.eq(prize.event_id));
        if let Some((start, end)) = window {
            q = q
                .filter(donations::Column::TimeReceived.gte(start))
                .filter(donations::Column::TimeReceived.lte(end));
        }
        let candidate_donations: Vec<CandidateDonation> = q
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|d| CandidateDonation {
                donor_id: d.donor_id,
                amount: d.amount,
            })
            .collect();

        let prior_winners = self.outside_category_winners(prize.category_id).await?;

        let settings = DrawSettings {
            minimum_bid: prize.minimum_bid,
            maximum_bid: prize.maximum_bid,
            sum_donations: prize.sum_donations,
            random_draw: prize.random_draw,
        };
        Ok(eligible_donors(&settings, &candidate_donations, &prior_winners))
    }

    /// Concrete [start, end] time range for the prize, from the run pair
    /// (start run's start to end run's end) or the explicit times. None
    /// means every event donation qualifies.
    async fn eligibility_window(
        &self,
        prize: &prizes::Model,
    ) -> AppResult<Option<(DateTime<Utc>, DateTime<Utc>)>> {
        if let (Some(start_run_id), Some(end_run_id)) = (prize.start_run_id, prize.end_run_id) {
            let start_run = self.find_run(start_run_id).await?;
            let end_run = self.find_run(end_run_id).await?;
            return Ok(Some((start_run.start_time, end_run.end_time)));
        }
        if let (Some(start), Some(end)) = (prize.start_time, prize.end_time) {
            return Ok(Some((start, end)));
        }
        Ok(None)
    }

    /// Donors holding at least one prize outside the given category.
    /// Mirrors the long-standing gating rule: with a category set, wins in
    /// other categories (or uncategorised wins) count; with no category,
    /// only categorised wins count.
    async fn outside_category_winners(&self, category_id: Option<i64>) -> AppResult<HashSet<i64>> {
        let mut q = prizes::Entity::find().filter(prizes::Column::WinnerId.is_not_null());
        q = match category_id {
            Some(category_id) => q.filter(
                Condition::any()
                    .add(prizes::Column::CategoryId.is_null())
                    .add(prizes::Column::CategoryId.ne(category_id)),
            ),
            None => q.filter(prizes::Column::CategoryId.is_not_null()),
        };
        let winners = q
            .all(&self.pool)
            .await?
            .into_iter()
            .filter_map(|p| p.winner_id)
            .collect();
        Ok(winners)
    }

    async fn run_ref(&self, run_id: Option<i64>) -> AppResult<Option<RunRef>> {
        match run_id {
            Some(id) => {
                let run = self.find_run(id).await?;
                Ok(Some(RunRef {
                    event_id: run.event_id,
                    sort_key: run.sort_key,
                }))
            }
            None => Ok(None),
        }
    }

    async fn find_run(&self, id: i64) -> AppResult<runs::Model> {
        runs::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Run {id} not found")))
    }

    async fn find_prize(&self, id: i64) -> AppResult<prizes::Model> {
        prizes::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Prize {id} not found")))
    }
}

/// Samples one pool entry proportionally to its weight. Weights carry at
/// most six decimal places, so scaling to integer micro-units keeps the
/// sampling exact.
fn pick_weighted(pool: &[EligibleDonor]) -> AppResult<EligibleDonor> {
    let scale = Decimal::from(1_000_000u64);
    let units: Vec<u64> = pool
        .iter()
        .map(|entry| (entry.weight * scale).to_u64().unwrap_or(0))
        .collect();
    let total: u64 = units.iter().sum();
    if total == 0 {
        return Err(AppError::InternalError(
            "Draw pool has zero total weight".into(),
        ));
    }

    let mut rng = rand::thread_rng();
    let pick = rng.gen_range(0..total);
    let mut acc = 0u64;
    for (entry, weight_units) in pool.iter().zip(&units) {
        acc += weight_units;
        if pick < acc {
            return Ok(entry.clone());
        }
    }
    // unreachable unless the accumulation above is wrong; fall back to the
    // last entry rather than panic
    Ok(pool[pool.len() - 1].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(donor: i64, weight: &str) -> EligibleDonor {
        EligibleDonor {
            donor,
            amount: Decimal::from(10),
            weight: weight.parse().unwrap(),
        }
    }

    #[test]
    fn test_pick_weighted_single_entry() {
        let pool = vec![entry(1, "1.0")];
        assert_eq!(pick_weighted(&pool).unwrap().donor, 1);
    }

    #[test]
    fn test_pick_weighted_stays_in_pool() {
        let pool = vec![entry(1, "1.0"), entry(2, "1.5"), entry(3, "2.0")];
        for _ in 0..100 {
            let winner = pick_weighted(&pool).unwrap();
            assert!(pool.iter().any(|e| e.donor == winner.donor));
        }
    }

    #[test]
    fn test_pick_weighted_zero_total_is_error() {
        let pool = vec![entry(1, "0")];
        assert!(pick_weighted(&pool).is_err());
    }
}
