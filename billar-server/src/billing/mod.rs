//! Billing calculator
//!
//! Turns elapsed wall-clock minutes into billable minutes and a time charge:
//!
//! 1. floor the elapsed time at the minimum stay
//! 2. round up to whole fraction blocks (ceiling, never floor)
//! 3. charge `rate_per_hour / 60` per billed minute, rounded to 2 places
//!
//! All arithmetic runs in `Decimal`, so 15 Bs/h over 35 minutes is exactly
//! 8.75 rather than an f64 approximation.

use rust_decimal::prelude::*;
use shared::error::AppError;
use shared::models::RateConfig;
use thiserror::Error;

use crate::money::{MAX_AMOUNT, is_valid_amount, round_money, to_f64};

#[cfg(test)]
mod tests;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Billing errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BillingError {
    /// The stored rate configuration cannot be used for billing
    #[error("Invalid rate configuration: {0}")]
    Configuration(String),
}

impl From<BillingError> for AppError {
    fn from(err: BillingError) -> Self {
        match err {
            BillingError::Configuration(_) => AppError::config(err.to_string()),
        }
    }
}

/// Validated billing rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rate {
    per_hour: Decimal,
    fraction_minutes: i64,
    minimum_minutes: i64,
}

impl Rate {
    pub fn new(
        per_hour: f64,
        fraction_minutes: i64,
        minimum_minutes: i64,
    ) -> Result<Self, BillingError> {
        if !is_valid_amount(per_hour) {
            return Err(BillingError::Configuration(format!(
                "rate per hour must be between 0 and {MAX_AMOUNT}, got {per_hour}"
            )));
        }
        let per_hour = Decimal::from_f64(per_hour).ok_or_else(|| {
            BillingError::Configuration(format!("rate per hour {per_hour} is not representable"))
        })?;
        if fraction_minutes < 1 {
            return Err(BillingError::Configuration(format!(
                "fraction must be at least 1 minute, got {fraction_minutes}"
            )));
        }
        if minimum_minutes < 0 {
            return Err(BillingError::Configuration(format!(
                "minimum must not be negative, got {minimum_minutes}"
            )));
        }
        Ok(Self {
            per_hour,
            fraction_minutes,
            minimum_minutes,
        })
    }

    pub fn fraction_minutes(&self) -> i64 {
        self.fraction_minutes
    }

    pub fn minimum_minutes(&self) -> i64 {
        self.minimum_minutes
    }

    /// Bill an elapsed duration given in (possibly fractional) minutes
    pub fn bill(&self, elapsed_minutes: Decimal) -> BilledTime {
        let elapsed = elapsed_minutes.max(Decimal::ZERO);
        let floored = elapsed.max(Decimal::from(self.minimum_minutes));
        let fraction = Decimal::from(self.fraction_minutes);

        let blocks = (floored / fraction).ceil();
        let billed = blocks * fraction;
        // blocks * fraction is integral; saturate rather than wrap on absurd input
        let minutes = billed.to_i64().unwrap_or(i64::MAX);

        BilledTime {
            minutes,
            charge: self.charge_for(minutes),
        }
    }

    /// Bill the span between two Unix-millis timestamps
    pub fn bill_span(&self, started_at: i64, now: i64) -> BilledTime {
        self.bill(elapsed_minutes(started_at, now))
    }

    /// Time charge for an already quantized minute count
    ///
    /// Saturates at `Decimal::MAX`; callers bound the resulting total.
    pub fn charge_for(&self, billed_minutes: i64) -> Decimal {
        let per_minute = self.per_hour / Decimal::from(60);
        per_minute
            .checked_mul(Decimal::from(billed_minutes))
            .map(round_money)
            .unwrap_or(Decimal::MAX)
    }
}

impl TryFrom<&RateConfig> for Rate {
    type Error = BillingError;

    fn try_from(config: &RateConfig) -> Result<Self, Self::Error> {
        Rate::new(
            config.price_per_hour,
            config.fraction_minutes,
            config.minimum_minutes,
        )
    }
}

/// Billable minutes and the matching charge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BilledTime {
    pub minutes: i64,
    pub charge: Decimal,
}

impl BilledTime {
    pub fn charge_f64(&self) -> f64 {
        to_f64(self.charge)
    }
}

/// Elapsed minutes between two Unix-millis timestamps, clamped at zero
pub fn elapsed_minutes(started_at: i64, now: i64) -> Decimal {
    let millis = now.saturating_sub(started_at).max(0);
    Decimal::from(millis) / Decimal::from(MILLIS_PER_MINUTE)
}
