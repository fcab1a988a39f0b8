use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::validators;
use crate::error::{AppError, AppResult};

/// The run fields a prize window is checked against.
#[derive(Debug, Clone, Copy)]
pub struct RunRef {
    pub event_id: i64,
    pub sort_key: i32,
}

/// The subset of prize fields the consistency checks need. Built by the
/// prize service from the incoming request plus the referenced run rows.
#[derive(Debug, Clone)]
pub struct PrizeDraft {
    pub event_id: i64,
    pub start_run: Option<RunRef>,
    pub end_run: Option<RunRef>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub minimum_bid: Decimal,
    pub maximum_bid: Decimal,
    pub sum_donations: bool,
}

/// Prize invariants, checked in order, first failure wins:
/// run pair all-or-nothing, runs belong to the prize's event, runs ordered
/// by sort key, time pair all-or-nothing, times ordered, run window and
/// time window mutually exclusive, maximum >= minimum, and maximum ==
/// minimum unless donations are summed.
pub fn validate_prize(p: &PrizeDraft) -> AppResult<()> {
    validators::positive_nonzero(p.minimum_bid)?;
    validators::positive_nonzero(p.maximum_bid)?;

    if p.start_run.is_some() != p.end_run.is_some() {
        return Err(AppError::ValidationError(
            "Must have both start run and end run set, or neither".into(),
        ));
    }
    if let Some(run) = &p.start_run {
        if run.event_id != p.event_id {
            return Err(AppError::ValidationError(
                "Prize event must be the same as the start run event".into(),
            ));
        }
    }
    if let Some(run) = &p.end_run {
        if run.event_id != p.event_id {
            return Err(AppError::ValidationError(
                "Prize event must be the same as the end run event".into(),
            ));
        }
    }
    if let (Some(start), Some(end)) = (&p.start_run, &p.end_run) {
        if start.sort_key > end.sort_key {
            return Err(AppError::ValidationError(
                "Start run must have a lesser sort key than end run".into(),
            ));
        }
    }
    if p.start_time.is_some() != p.end_time.is_some() {
        return Err(AppError::ValidationError(
            "Must have both start time and end time set, or neither".into(),
        ));
    }
    if let (Some(start), Some(end)) = (&p.start_time, &p.end_time) {
        if start > end {
            return Err(AppError::ValidationError(
                "Prize start time must not be later than end time".into(),
            ));
        }
    }
    if p.start_run.is_some() && p.start_time.is_some() {
        return Err(AppError::ValidationError(
            "Cannot have both start/end run and start/end time set".into(),
        ));
    }
    if p.maximum_bid < p.minimum_bid {
        return Err(AppError::ValidationError(
            "Maximum bid cannot be lower than minimum bid".into(),
        ));
    }
    if !p.sum_donations && p.maximum_bid != p.minimum_bid {
        return Err(AppError::ValidationError(
            "Maximum bid cannot differ from minimum bid unless donations are summed".into(),
        ));
    }
    Ok(())
}

/// Draw configuration of a prize, as consumed by the eligibility engine.
#[derive(Debug, Clone)]
pub struct DrawSettings {
    pub minimum_bid: Decimal,
    pub maximum_bid: Decimal,
    pub sum_donations: bool,
    pub random_draw: bool,
}

/// A donation already narrowed to the prize's event and eligibility window.
#[derive(Debug, Clone)]
pub struct CandidateDonation {
    pub donor_id: i64,
    pub amount: Decimal,
}

/// One entry of the ranked draw pool.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibleDonor {
    pub donor: i64,
    pub amount: Decimal,
    pub weight: Decimal,
}

/// Draw weight as a ratio against the bid band: 0 below the minimum,
/// capped at maximum/minimum above the maximum, amount/minimum in between.
/// Decimal division with fixed rounding; eligibility at the weight >= 1
/// boundary must not flip on float noise.
pub fn draw_weight(minimum: Decimal, maximum: Decimal, amount: Decimal) -> Decimal {
    if amount < minimum {
        Decimal::ZERO
    } else if amount > maximum {
        (maximum / minimum).round_dp(6)
    } else {
        (amount / minimum).round_dp(6)
    }
}

/// Ranks the draw pool for a prize. Pure: reads committed data handed in by
/// the service, mutates nothing, safe to call repeatedly.
///
/// `prior_winners` is the set of donor ids holding at least one prize
/// outside this prize's category; donors not in it are skipped no matter
/// how much they donated. Aggregation per donor is sum or max of qualifying
/// donation amounts depending on `sum_donations`.
///
/// Random-draw mode returns every donor whose weight reaches 1.0, sorted by
/// donor id ascending; picking the actual winner from the weighted list is
/// the caller's business. Non-random mode returns the single top donor at
/// weight 1.0. An empty pool returns an empty list.
pub fn eligible_donors(
    settings: &DrawSettings,
    donations: &[CandidateDonation],
    prior_winners: &HashSet<i64>,
) -> Vec<EligibleDonor> {
    let mut totals: BTreeMap<i64, Decimal> = BTreeMap::new();
    for donation in donations {
        if !prior_winners.contains(&donation.donor_id) {
            continue;
        }
        let entry = totals.entry(donation.donor_id).or_insert(Decimal::ZERO);
        if settings.sum_donations {
            *entry += donation.amount;
        } else if donation.amount > *entry {
            *entry = donation.amount;
        }
    }

    if settings.random_draw {
        totals
            .into_iter()
            .map(|(donor, amount)| EligibleDonor {
                donor,
                amount,
                weight: draw_weight(settings.minimum_bid, settings.maximum_bid, amount),
            })
            .filter(|entry| entry.weight >= Decimal::ONE)
            .collect()
    } else {
        // single winner: highest aggregated amount, lower donor id on ties
        let top = totals
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)));
        match top {
            Some((donor, amount)) => vec![EligibleDonor {
                donor,
                amount,
                weight: Decimal::ONE,
            }],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn base_draft() -> PrizeDraft {
        PrizeDraft {
            event_id: 1,
            start_run: None,
            end_run: None,
            start_time: None,
            end_time: None,
            minimum_bid: d("5.00"),
            maximum_bid: d("5.00"),
            sum_donations: false,
        }
    }

    fn run(event_id: i64, sort_key: i32) -> RunRef {
        RunRef { event_id, sort_key }
    }

    fn t(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2013, 1, 6, hour, 0, 0).unwrap()
    }

    fn settings(min: &str, max: &str, sum: bool, random: bool) -> DrawSettings {
        DrawSettings {
            minimum_bid: d(min),
            maximum_bid: d(max),
            sum_donations: sum,
            random_draw: random,
        }
    }

    fn donation(donor_id: i64, amount: &str) -> CandidateDonation {
        CandidateDonation {
            donor_id,
            amount: d(amount),
        }
    }

    #[test]
    fn test_valid_prize_passes() {
        assert!(validate_prize(&base_draft()).is_ok());

        let mut p = base_draft();
        p.start_run = Some(run(1, 1));
        p.end_run = Some(run(1, 5));
        assert!(validate_prize(&p).is_ok());

        let mut p = base_draft();
        p.start_time = Some(t(10));
        p.end_time = Some(t(12));
        assert!(validate_prize(&p).is_ok());
    }

    #[test]
    fn test_half_set_run_pair_fails() {
        let mut p = base_draft();
        p.start_run = Some(run(1, 1));
        assert!(validate_prize(&p).is_err());

        let mut p = base_draft();
        p.end_run = Some(run(1, 5));
        assert!(validate_prize(&p).is_err());
    }

    #[test]
    fn test_half_set_time_pair_fails() {
        let mut p = base_draft();
        p.start_time = Some(t(10));
        assert!(validate_prize(&p).is_err());
    }

    #[test]
    fn test_run_window_and_time_window_mutually_exclusive() {
        let mut p = base_draft();
        p.start_run = Some(run(1, 1));
        p.end_run = Some(run(1, 5));
        p.start_time = Some(t(10));
        p.end_time = Some(t(12));
        assert!(validate_prize(&p).is_err());
    }

    #[test]
    fn test_run_from_other_event_fails() {
        let mut p = base_draft();
        p.start_run = Some(run(2, 1));
        p.end_run = Some(run(1, 5));
        assert!(validate_prize(&p).is_err());

        let mut p = base_draft();
        p.start_run = Some(run(1, 1));
        p.end_run = Some(run(2, 5));
        assert!(validate_prize(&p).is_err());
    }

    #[test]
    fn test_runs_out_of_order_fail() {
        let mut p = base_draft();
        p.start_run = Some(run(1, 5));
        p.end_run = Some(run(1, 1));
        assert!(validate_prize(&p).is_err());
    }

    #[test]
    fn test_times_out_of_order_fail() {
        let mut p = base_draft();
        p.start_time = Some(t(12));
        p.end_time = Some(t(10));
        assert!(validate_prize(&p).is_err());
    }

    #[test]
    fn test_bid_band_rules() {
        let mut p = base_draft();
        p.minimum_bid = d("10.00");
        p.maximum_bid = d("5.00");
        assert!(validate_prize(&p).is_err());

        // max != min without summing donations
        let mut p = base_draft();
        p.sum_donations = false;
        p.minimum_bid = d("5.00");
        p.maximum_bid = d("10.00");
        assert!(validate_prize(&p).is_err());
        p.sum_donations = true;
        assert!(validate_prize(&p).is_ok());
    }

    #[test]
    fn test_zero_minimum_bid_rejected() {
        let mut p = base_draft();
        p.minimum_bid = Decimal::ZERO;
        assert!(validate_prize(&p).is_err());
    }

    #[test]
    fn test_weight_band() {
        let min = d("10.00");
        let max = d("20.00");
        assert_eq!(draw_weight(min, max, d("5.00")), Decimal::ZERO);
        assert_eq!(draw_weight(min, max, d("10.00")), d("1"));
        assert_eq!(draw_weight(min, max, d("15.00")), d("1.5"));
        assert_eq!(draw_weight(min, max, d("25.00")), d("2"));
    }

    #[test]
    fn test_weighted_draw_monotonicity() {
        let s = settings("10.00", "20.00", true, true);
        let everyone: HashSet<i64> = (1..=4).collect();
        let donations = vec![
            donation(1, "5.00"),
            donation(2, "10.00"),
            donation(3, "15.00"),
            donation(4, "25.00"),
        ];
        let pool = eligible_donors(&s, &donations, &everyone);
        // donor 1 falls below the band and is dropped
        assert_eq!(pool.len(), 3);
        assert_eq!(pool[0].donor, 2);
        assert_eq!(pool[0].weight, d("1"));
        assert_eq!(pool[1].donor, 3);
        assert_eq!(pool[1].weight, d("1.5"));
        assert_eq!(pool[2].donor, 4);
        assert_eq!(pool[2].weight, d("2"));
        assert_eq!(pool[2].amount, d("25.00"));
    }

    #[test]
    fn test_sum_donations_aggregates() {
        let s = settings("10.00", "20.00", true, true);
        let everyone: HashSet<i64> = [1].into_iter().collect();
        // three small donations sum over the minimum
        let donations = vec![
            donation(1, "4.00"),
            donation(1, "4.00"),
            donation(1, "4.00"),
        ];
        let pool = eligible_donors(&s, &donations, &everyone);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].amount, d("12.00"));
        assert_eq!(pool[0].weight, d("1.2"));
    }

    #[test]
    fn test_max_single_donation_when_not_summing() {
        let s = settings("10.00", "10.00", false, true);
        let everyone: HashSet<i64> = [1].into_iter().collect();
        let donations = vec![
            donation(1, "4.00"),
            donation(1, "11.00"),
            donation(1, "6.00"),
        ];
        let pool = eligible_donors(&s, &donations, &everyone);
        assert_eq!(pool.len(), 1);
        // max single donation, not the sum
        assert_eq!(pool[0].amount, d("11.00"));
    }

    #[test]
    fn test_non_random_draw_returns_single_top_donor() {
        let s = settings("5.00", "5.00", false, false);
        let everyone: HashSet<i64> = (1..=3).collect();
        let donations = vec![
            donation(1, "30.00"),
            donation(2, "50.00"),
            donation(3, "20.00"),
        ];
        let pool = eligible_donors(&s, &donations, &everyone);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].donor, 2);
        assert_eq!(pool[0].amount, d("50.00"));
        assert_eq!(pool[0].weight, Decimal::ONE);
    }

    #[test]
    fn test_empty_pool_returns_empty_list() {
        let s = settings("10.00", "20.00", true, true);
        assert!(eligible_donors(&s, &[], &HashSet::new()).is_empty());

        let s = settings("10.00", "20.00", false, false);
        assert!(eligible_donors(&s, &[], &HashSet::new()).is_empty());
    }

    #[test]
    fn test_donor_without_outside_category_history_excluded() {
        let s = settings("10.00", "20.00", true, true);
        // donor 2 has never held a prize outside this category
        let history: HashSet<i64> = [1].into_iter().collect();
        let donations = vec![donation(1, "15.00"), donation(2, "100.00")];
        let pool = eligible_donors(&s, &donations, &history);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].donor, 1);
    }

    #[test]
    fn test_pool_sorted_by_donor_id() {
        let s = settings("10.00", "20.00", true, true);
        let everyone: HashSet<i64> = (1..=3).collect();
        let donations = vec![
            donation(3, "12.00"),
            donation(1, "14.00"),
            donation(2, "16.00"),
        ];
        let pool = eligible_donors(&s, &donations, &everyone);
        let ids: Vec<i64> = pool.iter().map(|e| e.donor).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
