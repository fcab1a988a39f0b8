use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};

pub fn positive(value: Decimal) -> AppResult<()> {
    if value < Decimal::ZERO {
        return Err(AppError::ValidationError("Value cannot be negative".into()));
    }
    Ok(())
}

pub fn nonzero(value: Decimal) -> AppResult<()> {
    if value.is_zero() {
        return Err(AppError::ValidationError("Value cannot be zero".into()));
    }
    Ok(())
}

/// Standard check for monetary fields (donation amount, bid amounts,
/// minimum/maximum bid).
pub fn positive_nonzero(value: Decimal) -> AppResult<()> {
    positive(value)?;
    nonzero(value)
}

pub fn positive_id(id: i64) -> AppResult<()> {
    if id < 1 {
        return Err(AppError::ValidationError(
            "Id must be positive and non-zero".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_negative_rejected() {
        assert!(positive(d("-0.01")).is_err());
        assert!(positive(Decimal::ZERO).is_ok());
        assert!(positive(d("3.50")).is_ok());
    }

    #[test]
    fn test_zero_rejected() {
        assert!(nonzero(Decimal::ZERO).is_err());
        assert!(nonzero(d("0.01")).is_ok());
    }

    #[test]
    fn test_positive_nonzero() {
        assert!(positive_nonzero(d("-1")).is_err());
        assert!(positive_nonzero(Decimal::ZERO).is_err());
        assert!(positive_nonzero(d("5.00")).is_ok());
    }

    #[test]
    fn test_positive_id() {
        assert!(positive_id(0).is_err());
        assert!(positive_id(-3).is_err());
        assert!(positive_id(1).is_ok());
    }
}
