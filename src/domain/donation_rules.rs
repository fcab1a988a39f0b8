use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::validators;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidKind {
    Challenge,
    Choice,
}

/// A bid as seen by the consistency check: a persisted row (id set) or a
/// not-yet-saved candidate (id None).
#[derive(Debug, Clone)]
pub struct BidRef {
    pub kind: BidKind,
    pub id: Option<i64>,
    pub amount: Decimal,
}

impl BidRef {
    pub fn new(kind: BidKind, id: Option<i64>, amount: Decimal) -> Self {
        Self { kind, id, amount }
    }
}

/// Default external id for locally-entered donations: unix seconds of the
/// received timestamp concatenated with the donor email. Pure; the donation
/// service applies it only when the stored domain_id is empty, so a set id
/// is never rewritten. Global uniqueness is the store's job (unique index).
pub fn compute_domain_id(time_received: DateTime<Utc>, donor_email: &str) -> String {
    format!("{}{}", time_received.timestamp(), donor_email)
}

/// Donation/bid consistency: the earmarked total across challenge and
/// choice bids may never exceed the donation amount.
///
/// When the candidate is a re-validation of an already-persisted bid, the
/// persisted row with the same identity is skipped so its amount is not
/// counted twice; the candidate's (possibly updated) amount is what counts.
pub fn check_bid_total(
    donation_amount: Decimal,
    existing: &[BidRef],
    candidate: Option<&BidRef>,
) -> AppResult<()> {
    if let Some(bid) = candidate {
        validators::positive_nonzero(bid.amount)?;
    }

    let mut total = candidate.map(|b| b.amount).unwrap_or(Decimal::ZERO);
    for bid in existing {
        let superseded = match (candidate, bid.id) {
            (Some(c), Some(id)) => c.kind == bid.kind && c.id == Some(id),
            _ => false,
        };
        if !superseded {
            total += bid.amount;
        }
    }

    if total > donation_amount {
        return Err(AppError::ValidationError(format!(
            "Choice/Challenge bid total is greater than donation amount: {total} > {donation_amount}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_domain_id_is_timestamp_plus_email() {
        let t = Utc.with_ymd_and_hms(2013, 1, 6, 12, 0, 0).unwrap();
        assert_eq!(
            compute_domain_id(t, "runner@example.com"),
            format!("{}runner@example.com", t.timestamp())
        );
    }

    #[test]
    fn test_domain_id_is_deterministic() {
        let t = Utc.with_ymd_and_hms(2013, 1, 6, 12, 0, 0).unwrap();
        assert_eq!(
            compute_domain_id(t, "a@b.c"),
            compute_domain_id(t, "a@b.c")
        );
    }

    #[test]
    fn test_bid_total_within_amount_passes() {
        let existing = vec![
            BidRef::new(BidKind::Challenge, Some(1), d("10.00")),
            BidRef::new(BidKind::Choice, Some(2), d("5.00")),
        ];
        assert!(check_bid_total(d("20.00"), &existing, None).is_ok());
        assert!(check_bid_total(d("15.00"), &existing, None).is_ok());
    }

    #[test]
    fn test_bid_total_exceeding_amount_fails() {
        let existing = vec![BidRef::new(BidKind::Challenge, Some(1), d("10.00"))];
        let candidate = BidRef::new(BidKind::Choice, None, d("10.01"));
        let err = check_bid_total(d("20.00"), &existing, Some(&candidate));
        assert!(err.is_err());
    }

    #[test]
    fn test_candidate_counts_toward_total() {
        let candidate = BidRef::new(BidKind::Challenge, None, d("25.00"));
        assert!(check_bid_total(d("20.00"), &[], Some(&candidate)).is_err());
        assert!(check_bid_total(d("25.00"), &[], Some(&candidate)).is_ok());
    }

    #[test]
    fn test_revalidating_linked_bid_does_not_double_count() {
        // the candidate is bid #1 again; its persisted copy must be ignored
        let existing = vec![
            BidRef::new(BidKind::Challenge, Some(1), d("12.00")),
            BidRef::new(BidKind::Choice, Some(1), d("8.00")),
        ];
        let candidate = BidRef::new(BidKind::Challenge, Some(1), d("12.00"));
        assert!(check_bid_total(d("20.00"), &existing, Some(&candidate)).is_ok());
    }

    #[test]
    fn test_same_id_different_kind_still_counts() {
        let existing = vec![BidRef::new(BidKind::Choice, Some(7), d("15.00"))];
        let candidate = BidRef::new(BidKind::Challenge, Some(7), d("10.00"));
        assert!(check_bid_total(d("20.00"), &existing, Some(&candidate)).is_err());
    }

    #[test]
    fn test_updated_candidate_amount_wins_over_persisted() {
        let existing = vec![BidRef::new(BidKind::Challenge, Some(1), d("5.00"))];
        // raising the bid from 5 to 18 with a 20 donation is still fine
        let candidate = BidRef::new(BidKind::Challenge, Some(1), d("18.00"));
        assert!(check_bid_total(d("20.00"), &existing, Some(&candidate)).is_ok());
        // but raising it past the donation amount is not
        let candidate = BidRef::new(BidKind::Challenge, Some(1), d("20.01"));
        assert!(check_bid_total(d("20.00"), &existing, Some(&candidate)).is_err());
    }

    #[test]
    fn test_zero_or_negative_candidate_rejected() {
        let candidate = BidRef::new(BidKind::Choice, None, Decimal::ZERO);
        assert!(check_bid_total(d("20.00"), &[], Some(&candidate)).is_err());
        let candidate = BidRef::new(BidKind::Choice, None, d("-1.00"));
        assert!(check_bid_total(d("20.00"), &[], Some(&candidate)).is_err());
    }
}
